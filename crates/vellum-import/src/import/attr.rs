//! Attribute extraction with the importer's defaulting rule.
//!
//! Every numeric read follows one rule: an attribute that is present and
//! parses as a number contributes its value; anything else (absent
//! attribute, unsupported unit, garbage) contributes zero. A legitimate `0`
//! and a missing attribute are therefore indistinguishable downstream.

use roxmltree::Node;

/// Reads a scalar numeric attribute. Unitless and `px` values are accepted.
pub(super) fn scalar(node: Node<'_, '_>, name: &str) -> f32 {
    node.attribute(name).and_then(parse_length).unwrap_or(0.0)
}

/// Reads the first entry of a coordinate-list attribute.
///
/// SVG allows one value per character in these lists; only index 0 is
/// honored.
pub(super) fn list_first(node: Node<'_, '_>, name: &str) -> f32 {
    node.attribute(name)
        .and_then(|value| {
            value
                .split([',', ' ', '\t', '\n', '\r'])
                .find(|entry| !entry.is_empty())
        })
        .and_then(parse_length)
        .unwrap_or(0.0)
}

/// Concatenated text of all descendant text nodes, in document order.
pub(super) fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}

fn parse_length(value: &str) -> Option<f32> {
    let value = value.trim();
    let value = value.strip_suffix("px").unwrap_or(value);
    value.parse().ok()
}

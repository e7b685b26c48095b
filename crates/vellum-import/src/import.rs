//! The recursive node-to-scene transform.
//!
//! One depth-first pass over the document: group traversal filters child
//! nodes, tag dispatch selects a shape mapper, and each mapper reads its
//! element's attributes into a finished [`Item`]. Every step is a pure
//! function of its node; the only state is the output tree under
//! construction.

mod attr;
mod shape;

use log::debug;
use roxmltree::Node;

use vellum_core::scene::{Group, Item, Layer};

/// Wraps the document's root element in a layer holding a single top-level
/// group.
pub(crate) fn import_root(root: Node<'_, '_>) -> Layer {
    debug!(tag = root.tag_name().name(); "Importing document root");
    Layer::new(import_group(root))
}

/// Builds a group from a container element's children, in document order.
///
/// Non-element nodes (text, comments, whitespace) and elements no mapper
/// recognizes are skipped; neither aborts the import. An empty result is a
/// valid group.
fn import_group(node: Node<'_, '_>) -> Group {
    let mut group = Group::new();

    for child in node.children() {
        if !child.is_element() {
            continue;
        }
        match convert_element(child) {
            Some(item) => group.push(item),
            None => debug!(tag = child.tag_name().name(); "Skipping unsupported element"),
        }
    }

    group
}

/// Routes one element to its shape mapper by tag name, case-insensitively.
///
/// Returns `None` for tags with no mapper; the caller drops those nodes.
/// New shape kinds are added by extending this mapping.
fn convert_element(node: Node<'_, '_>) -> Option<Item> {
    let item = match node.tag_name().name().to_ascii_lowercase().as_str() {
        "line" => shape::line(node),
        "rect" => shape::rectangle(node),
        "ellipse" => shape::oval(node),
        "circle" => shape::circle(node),
        "g" => Item::Group(import_group(node)),
        "text" => shape::text(node),
        _ => return None,
    };

    Some(item)
}

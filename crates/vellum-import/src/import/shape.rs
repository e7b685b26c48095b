//! The per-shape attribute mappers.
//!
//! Each mapper is a pure function from one element's attributes to a
//! finished [`Item`], applying the defaulting rule from [`super::attr`].

use roxmltree::Node;

use vellum_core::{
    geometry::{Bounds, Point, Size},
    scene::Item,
};

use super::attr;

/// `<line>`: endpoints from `x1,y1` and `x2,y2`.
pub(super) fn line(node: Node<'_, '_>) -> Item {
    let from = Point::new(attr::scalar(node, "x1"), attr::scalar(node, "y1"));
    let to = Point::new(attr::scalar(node, "x2"), attr::scalar(node, "y2"));

    Item::Line { from, to }
}

/// `<rect>`: top-left corner, size, and the corner-radius kind decision.
///
/// Any positive `rx` or `ry` selects the rounded kind; both zero or absent
/// selects the plain kind. The two are distinct item kinds even when the
/// geometry coincides.
pub(super) fn rectangle(node: Node<'_, '_>) -> Item {
    let top_left = Point::new(attr::scalar(node, "x"), attr::scalar(node, "y"));
    let size = Size::new(attr::scalar(node, "width"), attr::scalar(node, "height"));
    let rx = attr::scalar(node, "rx");
    let ry = attr::scalar(node, "ry");

    if rx > 0.0 || ry > 0.0 {
        Item::RoundedRectangle {
            top_left,
            size,
            corner_size: Size::new(rx, ry),
        }
    } else {
        Item::Rectangle { top_left, size }
    }
}

/// `<ellipse>`: bounding box spanning `center - radii` to `center + radii`.
pub(super) fn oval(node: Node<'_, '_>) -> Item {
    let center = Point::new(attr::scalar(node, "cx"), attr::scalar(node, "cy"));
    let offset = Point::new(attr::scalar(node, "rx"), attr::scalar(node, "ry"));

    Item::Oval {
        bounds: Bounds::from_corners(center.sub_point(offset), center.add_point(offset)),
    }
}

/// `<circle>`: center and a single radius, kept as its own item kind.
pub(super) fn circle(node: Node<'_, '_>) -> Item {
    let center = Point::new(attr::scalar(node, "cx"), attr::scalar(node, "cy"));

    Item::Circle {
        center,
        radius: attr::scalar(node, "r"),
    }
}

/// `<text>`: anchor from the first `x`/`y` list entries, content from the
/// element's text nodes.
///
/// Per-character positioning (`dx`, `dy`, `rotate`) and length adjustment
/// are not extracted.
pub(super) fn text(node: Node<'_, '_>) -> Item {
    let anchor = Point::new(attr::list_first(node, "x"), attr::list_first(node, "y"));

    Item::Text {
        anchor,
        content: attr::text_content(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn element(markup: &str) -> roxmltree::Document<'_> {
        roxmltree::Document::parse(markup).unwrap()
    }

    #[test]
    fn test_line_endpoints() {
        let doc = element("<line x1='1' y1='2' x2='3' y2='4'/>");

        assert_eq!(
            line(doc.root_element()),
            Item::Line {
                from: Point::new(1.0, 2.0),
                to: Point::new(3.0, 4.0),
            }
        );
    }

    #[test]
    fn test_line_absent_coordinates_default_to_zero() {
        let doc = element("<line x2='5'/>");

        assert_eq!(
            line(doc.root_element()),
            Item::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(5.0, 0.0),
            }
        );
    }

    #[test]
    fn test_rectangle_plain_when_radii_zero() {
        let doc = element("<rect x='1' y='2' rx='0' ry='0' width='10' height='20'/>");

        assert_eq!(
            rectangle(doc.root_element()),
            Item::Rectangle {
                top_left: Point::new(1.0, 2.0),
                size: Size::new(10.0, 20.0),
            }
        );
    }

    #[test]
    fn test_rectangle_rounded_when_any_radius_positive() {
        let doc = element("<rect width='10' height='20' rx='3'/>");

        assert_eq!(
            rectangle(doc.root_element()),
            Item::RoundedRectangle {
                top_left: Point::new(0.0, 0.0),
                size: Size::new(10.0, 20.0),
                corner_size: Size::new(3.0, 0.0),
            }
        );
    }

    #[test]
    fn test_rectangle_ry_alone_selects_rounded() {
        let doc = element("<rect width='4' height='4' ry='2'/>");

        assert!(matches!(
            rectangle(doc.root_element()),
            Item::RoundedRectangle { .. }
        ));
    }

    #[test]
    fn test_oval_bounds_around_center() {
        let doc = element("<ellipse cx='0' cy='0' rx='5' ry='5'/>");

        let Item::Oval { bounds } = oval(doc.root_element()) else {
            panic!("expected oval");
        };
        assert_eq!(bounds.min_point(), Point::new(-5.0, -5.0));
        assert_eq!(bounds.max_point(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_oval_offset_center() {
        let doc = element("<ellipse cx='10' cy='20' rx='4' ry='2'/>");

        let Item::Oval { bounds } = oval(doc.root_element()) else {
            panic!("expected oval");
        };
        assert_eq!(bounds.min_point(), Point::new(6.0, 18.0));
        assert_eq!(bounds.max_point(), Point::new(14.0, 22.0));
        assert!(approx_eq!(f32, bounds.center().x(), 10.0));
        assert!(approx_eq!(f32, bounds.center().y(), 20.0));
    }

    #[test]
    fn test_circle_center_and_radius() {
        let doc = element("<circle cx='3' cy='4' r='5'/>");

        assert_eq!(
            circle(doc.root_element()),
            Item::Circle {
                center: Point::new(3.0, 4.0),
                radius: 5.0,
            }
        );
    }

    #[test]
    fn test_text_first_list_entry_and_content() {
        let doc = element("<text x='10 20' y='5'>Hi</text>");

        assert_eq!(
            text(doc.root_element()),
            Item::Text {
                anchor: Point::new(10.0, 5.0),
                content: "Hi".to_string(),
            }
        );
    }

    #[test]
    fn test_text_defaults() {
        let doc = element("<text/>");

        assert_eq!(
            text(doc.root_element()),
            Item::Text {
                anchor: Point::new(0.0, 0.0),
                content: String::new(),
            }
        );
    }
}

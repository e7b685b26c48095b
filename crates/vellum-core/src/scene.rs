//! The scene graph produced by an import: [`Layer`], [`Group`] and [`Item`].
//!
//! A [`Layer`] is the root container, owning exactly one top-level [`Group`].
//! Groups hold an ordered sequence of [`Item`]s; insertion order is document
//! order and determines z-ordering, so later children render on top of
//! earlier ones.
//!
//! # Example
//!
//! ```
//! use vellum_core::geometry::{Point, Size};
//! use vellum_core::scene::{Group, Item, Layer};
//!
//! let mut root = Group::new();
//! root.push(Item::Rectangle {
//!     top_left: Point::new(10.0, 10.0),
//!     size: Size::new(20.0, 5.0),
//! });
//!
//! let layer = Layer::new(root);
//! assert_eq!(layer.content().len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point, Size};

/// The root container for an imported document.
///
/// Holds a single top-level group; everything the document contributed hangs
/// off that group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    content: Group,
}

impl Layer {
    /// Creates a layer owning the given top-level group.
    pub fn new(content: Group) -> Self {
        Self { content }
    }

    /// Returns the top-level group.
    pub fn content(&self) -> &Group {
        &self.content
    }

    /// Consumes the layer, returning the top-level group.
    pub fn into_content(self) -> Group {
        self.content
    }
}

/// An ordered container of scene items.
///
/// A group with zero children is a valid, renderable (if invisible) value,
/// not an error state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    children: Vec<Item>,
}

impl Group {
    /// Creates a new, empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item after all existing children.
    pub fn push(&mut self, item: Item) {
        self.children.push(item);
    }

    /// Returns the children in z-order (bottom to top).
    pub fn children(&self) -> &[Item] {
        &self.children
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A single renderable scene item.
///
/// Each variant carries the complete geometry a host needs to instantiate
/// its native primitive; there is no styling or identity attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    /// A straight segment between two endpoints.
    Line { from: Point, to: Point },

    /// An axis-aligned rectangle with square corners.
    Rectangle { top_left: Point, size: Size },

    /// A rectangle with rounded corners.
    ///
    /// This is a distinct kind from [`Item::Rectangle`] even when
    /// `corner_size` is degenerate; hosts may construct different native
    /// objects for the two.
    RoundedRectangle {
        top_left: Point,
        size: Size,
        corner_size: Size,
    },

    /// An ellipse inscribed in its bounding box.
    Oval { bounds: Bounds },

    /// A circle given by center and radius.
    Circle { center: Point, radius: f32 },

    /// A nested container of further items.
    Group(Group),

    /// A text run anchored at a point.
    Text { anchor: Point, content: String },
}

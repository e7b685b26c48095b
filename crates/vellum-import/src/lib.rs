//! Vellum SVG import.
//!
//! Converts a parsed SVG document into a [`vellum_core::scene`] tree: one
//! [`Layer`] owning a group of shape items, nested to match the markup.
//! Supported elements are `line`, `rect`, `ellipse`, `circle`, `g` and
//! `text`; anything else is skipped, so importing a document with
//! unsupported constructs still succeeds and yields the shapes it does
//! understand.
//!
//! The import itself never fails: the fallible entry points can only report
//! problems reading or parsing the XML text, before any scene building
//! starts.
//!
//! # Example
//!
//! ```
//! use vellum_core::scene::Item;
//!
//! let layer = vellum_import::import_str(
//!     r#"<svg><rect x="10" y="10" width="20" height="5"/></svg>"#,
//! )
//! .expect("well-formed document");
//!
//! assert_eq!(layer.content().len(), 1);
//! assert!(matches!(layer.content().children()[0], Item::Rectangle { .. }));
//! ```

mod error;
mod import;

use std::{fs, path::Path};

use log::info;

use vellum_core::scene::Layer;

pub use error::ImportError;

/// Imports a parsed SVG document into a scene layer.
///
/// Infallible: unsupported elements and non-element nodes are dropped from
/// the output rather than reported. The returned tree is fully owned by the
/// caller and holds no references into `doc`.
pub fn import_document(doc: &roxmltree::Document<'_>) -> Layer {
    import::import_root(doc.root_element())
}

/// Parses `source` as XML and imports it.
///
/// # Errors
///
/// Returns [`ImportError::Xml`] when `source` is not well-formed XML.
pub fn import_str(source: &str) -> Result<Layer, ImportError> {
    let doc = roxmltree::Document::parse(source)?;
    Ok(import_document(&doc))
}

/// Reads an SVG file and imports it.
///
/// # Errors
///
/// Returns [`ImportError::Io`] when the file cannot be read and
/// [`ImportError::Xml`] when its contents are not well-formed XML.
pub fn import_file(path: impl AsRef<Path>) -> Result<Layer, ImportError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Importing SVG file");

    let source = fs::read_to_string(path)?;
    import_str(&source)
}

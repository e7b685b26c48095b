//! Error types for import operations.

use std::io;

use thiserror::Error;

/// The error type for the fallible import entry points.
///
/// Building a scene from an already-parsed document cannot fail; errors
/// arise only while reading or parsing the XML text itself.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),
}

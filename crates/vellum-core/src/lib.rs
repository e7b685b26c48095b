//! Vellum Core Types
//!
//! Foundational value types for the Vellum scene graph:
//!
//! - **Geometry**: points, sizes and bounding boxes ([`geometry`] module)
//! - **Scene**: layers, groups and shape items ([`scene`] module)
//!
//! These are plain values with tree-shaped ownership. An importer constructs
//! them and hands the finished tree to the host application, which owns it
//! outright; nothing here holds references back into the source document.

pub mod geometry;
pub mod scene;

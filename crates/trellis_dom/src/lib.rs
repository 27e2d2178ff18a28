//! Element tree primitives for Trellis (Layer 1).
//!
//! `trellis_dom` provides the host tree that widgets bind against: a
//! [`Document`] of elements carrying a tag, string attributes, optional text,
//! and ordered children. Elements are addressed by copyable [`ElementId`]
//! handles; the document owns every element's lifecycle.
//!
//! This is deliberately not a DOM implementation. There are no selectors,
//! no events, and no styling: just enough tree for the lifecycle machinery
//! in `trellis_core` to discover and clean up bound elements.
//!
//! # Example
//!
//! ```
//! use trellis_dom::Document;
//!
//! let doc = Document::new();
//! let section = doc.create_child(doc.root(), "section");
//! doc.set_attribute(section, "widget", "widgets/a");
//!
//! assert_eq!(doc.attribute(section, "widget").as_deref(), Some("widgets/a"));
//! assert_eq!(doc.descendants(doc.root()), vec![section]);
//! ```
//!
//! # Architecture
//!
//! This crate is Layer 1 of the Trellis architecture:
//!
//! - **Layer 1** (`trellis_dom`): the host element tree (this crate)
//! - **Layer 1** (`trellis_widget`): widget capability contract and factory
//! - **Layer 2** (`trellis_core`): lifecycle coordination over both

/// Document structure and traversal.
pub mod document;

/// Element identity.
pub mod element;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::document::Document;
    pub use crate::element::ElementId;
}

pub use document::Document;
pub use element::ElementId;

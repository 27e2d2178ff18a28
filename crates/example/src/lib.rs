//! Example banner widgets built with Trellis.
//!
//! Three trivial widgets that each prepend a greeting to their host element,
//! plus helpers to assemble the demo document and registry.

/// The demo banner widgets.
pub mod widgets;

use std::sync::Arc;

use trellis_core::WIDGET_ATTRIBUTE;
use trellis_dom::{Document, ElementId};
use trellis_widget::ModuleRegistry;

use crate::widgets::{BannerA, BannerB, BannerC};

/// Registers the demo widgets under their identifiers.
#[must_use]
pub fn demo_registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    registry.register::<BannerA>("widgets/a");
    registry.register::<BannerB>("widgets/b");
    registry.register::<BannerC>("widgets/c");
    registry
}

/// Builds the demo document: three sections under the root, each marked for
/// widget binding. Returns the document and the marked sections in order.
#[must_use]
pub fn demo_document() -> (Arc<Document>, Vec<ElementId>) {
    let document = Arc::new(Document::new());
    let sections = ["widgets/a", "widgets/b", "widgets/c"]
        .into_iter()
        .map(|identifier| {
            let section = document.create_child(document.root(), "section");
            document.set_attribute(section, WIDGET_ATTRIBUTE, identifier);
            section
        })
        .collect();
    (document, sections)
}

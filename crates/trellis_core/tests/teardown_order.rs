//! Property tests for traversal ordering.
//!
//! Over arbitrarily shaped trees: teardown visits bound elements in the
//! exact reverse of initialization order, empties the registry, and leaves
//! no injected markup behind.

mod common;

use std::sync::Arc;

use common::{Journal, RecordingObserver, register_banner};
use proptest::prelude::*;
use trellis_core::WidgetCore;
use trellis_dom::{Document, ElementId};
use trellis_widget::{ModuleRegistry, WidgetFactory};

/// Builds a tree from a shape vector. Each code attaches the next bound
/// element: 0 = child of the root, 1 = child of the previous element,
/// 2 = sibling of the previous element.
fn build_tree(document: &Document, shape: &[u8], registry: &mut ModuleRegistry, journal: &Arc<Journal>) -> Vec<ElementId> {
    let mut elements = Vec::with_capacity(shape.len());
    let mut last: Option<ElementId> = None;

    for (i, &code) in shape.iter().enumerate() {
        let parent = match (code, last) {
            (0, _) | (_, None) => document.root(),
            (1, Some(prev)) => prev,
            (_, Some(prev)) => document.parent(prev).unwrap_or(document.root()),
        };
        let element = document.create_child(parent, "node");
        let identifier = format!("widgets/w{i}");
        document.set_attribute(element, "widget", &identifier);
        register_banner(registry, &identifier, journal);
        last = Some(element);
        elements.push(element);
    }

    elements
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn teardown_reverses_initialization(shape in proptest::collection::vec(0..3u8, 1..10)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");

        let document = Arc::new(Document::new());
        let journal = Journal::new();
        let mut registry = ModuleRegistry::new();
        let elements = build_tree(&document, &shape, &mut registry, &journal);

        // Snapshot the tree shape before any widget injects markup.
        let before: Vec<Vec<ElementId>> = elements
            .iter()
            .map(|&element| document.children(element))
            .collect();

        let observer = RecordingObserver::new();
        let mut core = WidgetCore::new(Arc::clone(&document), WidgetFactory::new(registry))
            .with_observer(observer.clone());

        runtime.block_on(core.init(document.root())).expect("init");
        let init_order = observer.successes();
        prop_assert_eq!(init_order.len(), shape.len());
        prop_assert_eq!(core.manager().len(), shape.len());
        for (&element, children) in elements.iter().zip(&before) {
            // Every banner prepended a content container.
            prop_assert_eq!(document.children(element).len(), children.len() + 1);
        }

        core.destroy(document.root()).expect("destroy");

        let expected: Vec<String> = init_order.iter().rev().cloned().collect();
        prop_assert_eq!(journal.destroyed(), expected);
        prop_assert!(core.manager().is_empty());
        for (&element, children) in elements.iter().zip(&before) {
            // Teardown restored the pre-init tree shape.
            prop_assert_eq!(&document.children(element), children);
        }
    }
}

//! Shared fixtures for lifecycle integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use trellis_core::{LifecycleEvent, LifecycleObserver, WIDGET_ATTRIBUTE};
use trellis_dom::{Document, ElementId};
use trellis_widget::{BindingState, Host, ModuleRegistry, Widget, WidgetError, WidgetResult};

/// Observer that records every event it sees.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<LifecycleEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(LifecycleEvent::name).collect()
    }

    /// Identifiers of the recorded `init_success` events, in order.
    pub fn successes(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                LifecycleEvent::InitSuccess { identifier } => Some(identifier.clone()),
                _ => None,
            })
            .collect()
    }
}

impl LifecycleObserver for RecordingObserver {
    fn update(&self, event: &LifecycleEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Shared journal of factory constructions and widget teardowns, keyed by
/// widget identifier.
#[derive(Default)]
pub struct Journal {
    created: Mutex<Vec<String>>,
    destroyed: Mutex<Vec<String>>,
}

impl Journal {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Identifiers in factory-construction order.
    pub fn created(&self) -> Vec<String> {
        self.created.lock().clone()
    }

    /// Identifiers in teardown order.
    pub fn destroyed(&self) -> Vec<String> {
        self.destroyed.lock().clone()
    }
}

/// Banner-style test widget: journals its lifecycle and injects a content
/// container into its host, like the demo widgets do.
pub struct BannerWidget {
    state: BindingState,
    identifier: String,
    journal: Arc<Journal>,
    fail_before_ready: bool,
}

#[async_trait]
impl Widget for BannerWidget {
    fn state(&self) -> &BindingState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut BindingState {
        &mut self.state
    }

    async fn before_ready(&mut self, host: Host<'_>) -> WidgetResult {
        if self.fail_before_ready {
            return Err(WidgetError::new(format!(
                "{} refused to start",
                self.identifier
            )));
        }
        host.insert_content("div", format!("{} mounted", self.identifier));
        Ok(())
    }

    fn destroy(&mut self) {
        self.journal.destroyed.lock().push(self.identifier.clone());
        self.state.reset();
    }
}

fn register_with(
    registry: &mut ModuleRegistry,
    identifier: &str,
    journal: &Arc<Journal>,
    fail_before_ready: bool,
) {
    let id = identifier.to_string();
    let journal = Arc::clone(journal);
    registry.register_ctor(identifier, move || {
        journal.created.lock().push(id.clone());
        Box::new(BannerWidget {
            state: BindingState::new(),
            identifier: id.clone(),
            journal: Arc::clone(&journal),
            fail_before_ready,
        })
    });
}

/// Registers a journaling banner widget under `identifier`.
pub fn register_banner(registry: &mut ModuleRegistry, identifier: &str, journal: &Arc<Journal>) {
    register_with(registry, identifier, journal, false);
}

/// Registers a banner widget whose `before_ready` always fails.
pub fn register_failing(registry: &mut ModuleRegistry, identifier: &str, journal: &Arc<Journal>) {
    register_with(registry, identifier, journal, true);
}

/// Builds a document with one bound child of the root per identifier, in
/// order, and returns the bound elements.
pub fn document_with_children(identifiers: &[&str]) -> (Arc<Document>, Vec<ElementId>) {
    let document = Arc::new(Document::new());
    let elements = identifiers
        .iter()
        .map(|identifier| {
            let element = document.create_child(document.root(), "section");
            document.set_attribute(element, WIDGET_ATTRIBUTE, *identifier);
            element
        })
        .collect();
    (document, elements)
}

//! The lifecycle coordinator.
//!
//! [`WidgetCore`] sequences discovery → factory → registry → per-widget init
//! in document order, and the reverse-order teardown. It is conceptually
//! stateless between calls; all binding state lives in the
//! [`WidgetManager`] and the widgets themselves.

use std::sync::Arc;

use trellis_dom::{Document, ElementId};
use trellis_widget::{Host, WidgetFactory};

use crate::error::LifecycleError;
use crate::event::LifecycleEvent;
use crate::manager::WidgetManager;
use crate::observer::LifecycleObserver;

/// Coordinates the widget lifecycle over a shared document.
///
/// # Example
///
/// ```ignore
/// let mut core = WidgetCore::new(document.clone(), WidgetFactory::new(registry))
///     .with_observer(Arc::new(LogObserver::new()));
///
/// core.init(document.root()).await?;
/// // ... the application runs ...
/// core.destroy(document.root())?;
/// ```
///
/// # Concurrency
///
/// Traversals are strictly sequential: each widget's `init` is awaited to
/// completion before the next element is touched, so later widgets can rely
/// on the tree mutations of earlier ones. The coordinator spawns no tasks,
/// enforces no timeouts, and cannot be cancelled mid-traversal; the only
/// early exit is the fail-fast abort on error.
pub struct WidgetCore {
    document: Arc<Document>,
    manager: WidgetManager,
    factory: WidgetFactory,
    observers: Vec<Arc<dyn LifecycleObserver>>,
}

impl core::fmt::Debug for WidgetCore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WidgetCore")
            .field("manager", &self.manager)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl WidgetCore {
    /// Creates a coordinator over the shared document.
    #[must_use]
    pub fn new(document: Arc<Document>, factory: WidgetFactory) -> Self {
        Self {
            document,
            manager: WidgetManager::new(),
            factory,
            observers: Vec::new(),
        }
    }

    /// Sets the binding attribute name (default: `"widget"`).
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.manager = self.manager.with_attribute(name);
        self
    }

    /// Registers an observer during construction.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn LifecycleObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Returns the shared document.
    #[must_use]
    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    /// Returns the widget registry.
    #[must_use]
    pub fn manager(&self) -> &WidgetManager {
        &self.manager
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Observer management
    // ─────────────────────────────────────────────────────────────────────────

    /// Registers an observer at the end of the notification order.
    pub fn add_observer(&mut self, observer: Arc<dyn LifecycleObserver>) {
        self.observers.push(observer);
    }

    /// Unregisters an observer by pointer identity.
    ///
    /// Every registration of that same `Arc` is removed; distinct instances
    /// of the same observer type are left alone.
    pub fn remove_observer(&mut self, observer: &Arc<dyn LifecycleObserver>) {
        self.observers.retain(|obs| !Arc::ptr_eq(obs, observer));
    }

    /// Unregisters all observers.
    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    /// Broadcasts an event to all observers, in registration order.
    ///
    /// Synchronous fan-out. Observer panics are not caught; they propagate
    /// to the caller of the triggering operation.
    pub fn notify_observers(&self, event: &LifecycleEvent) {
        for observer in &self.observers {
            observer.update(event);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // init
    // ─────────────────────────────────────────────────────────────────────────

    /// Initializes all widgets marked under `root`.
    ///
    /// Bound elements are processed sequentially in document order. For each
    /// element without a registry entry, the factory produces an instance,
    /// the registry records it, and the instance's `init` runs to
    /// completion. Elements whose instance is already initialized are
    /// skipped, which makes repeated calls on the same root idempotent.
    ///
    /// On success every observer sees one `init_success` per newly bound
    /// element followed by a single `init_complete`.
    ///
    /// # Errors
    ///
    /// Fail-fast: the first failure aborts the traversal, is broadcast as a
    /// single `init_error` event, and is returned to the caller. Later
    /// elements are not processed. A widget that failed mid-initialization
    /// stays registered with `initialized == false`; a subsequent `init`
    /// surfaces it as [`LifecycleError::DestroyedDuringInit`].
    pub async fn init(&mut self, root: ElementId) -> Result<(), LifecycleError> {
        let elements = self.manager.elements_with_widget(&self.document, root);
        tracing::debug!(root = %root, bound = elements.len(), "initializing widgets");

        for element in elements {
            if let Err(error) = self.init_widget(element).await {
                self.notify_observers(&LifecycleEvent::InitError {
                    error: error.clone(),
                });
                return Err(error);
            }
        }

        self.notify_observers(&LifecycleEvent::InitComplete);
        Ok(())
    }

    /// Initializes the widget bound to a single element.
    async fn init_widget(&mut self, element: ElementId) -> Result<(), LifecycleError> {
        let Some(identifier) = self
            .document
            .attribute(element, self.manager.attribute())
            .filter(|value| !value.is_empty())
        else {
            return Ok(());
        };

        if !self.manager.contains(element) {
            let widget = self
                .factory
                .create_widget(&identifier)
                .await
                .map_err(|err| LifecycleError::initialization(&identifier, err))?;

            // Register before initializing: a failed init must leave the
            // never-completed entry behind, observable as initialized == false.
            let widget = self.manager.add_widget(element, widget);
            widget
                .init(Host::new(&self.document, element))
                .await
                .map_err(|err| LifecycleError::initialization(&identifier, err))?;

            tracing::debug!(%identifier, element = %element, "widget initialized");
            self.notify_observers(&LifecycleEvent::InitSuccess { identifier });
        } else if !self
            .manager
            .get_widget(element)
            .is_some_and(|widget| widget.initialized())
        {
            return Err(LifecycleError::DestroyedDuringInit { identifier });
        }

        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // destroy
    // ─────────────────────────────────────────────────────────────────────────

    /// Destroys all widgets marked under `root`, in reverse document order.
    ///
    /// Last-discovered elements are torn down first, mirroring stack-unwind
    /// semantics: widgets inserted later may depend on tree structure set up
    /// by earlier ones. Each instance is destroyed, unregistered, and its
    /// injected content container (the element's first child) removed so the
    /// element can be re-bound without stale markup.
    ///
    /// # Errors
    ///
    /// A bound element without a registry entry raises
    /// [`LifecycleError::InstanceNotFound`] and aborts immediately: elements
    /// later in the reversed order have already been destroyed, earlier ones
    /// remain registered. No `destroy_complete` is emitted on that path.
    pub fn destroy(&mut self, root: ElementId) -> Result<(), LifecycleError> {
        let mut elements = self.manager.elements_with_widget(&self.document, root);
        elements.reverse();
        tracing::debug!(root = %root, bound = elements.len(), "destroying widgets");

        for element in elements {
            self.destroy_widget(element)?;
        }

        self.notify_observers(&LifecycleEvent::DestroyComplete);
        Ok(())
    }

    /// Destroys the widget bound to a single element.
    fn destroy_widget(&mut self, element: ElementId) -> Result<(), LifecycleError> {
        let Some(mut widget) = self.manager.remove_widget(element) else {
            return Err(LifecycleError::InstanceNotFound { element });
        };

        widget.destroy();

        // Remove the widget's content container so the element holds no
        // stale markup for the next initialization.
        if let Some(container) = self.document.first_child(element) {
            self.document.remove(container);
        }

        Ok(())
    }
}

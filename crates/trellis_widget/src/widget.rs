//! The widget capability contract.
//!
//! A widget's initialization is split into a "before-ready" and an
//! "after-ready" phase, two overridable async methods with the provided
//! [`Widget::init`] sequencing them around the ready point: the `initialized`
//! flag flips exactly once, after `before_ready` succeeds and before
//! `after_ready` runs. An `Err` from either phase fails the binding.

use async_trait::async_trait;
use trellis_dom::{Document, ElementId};

use crate::error::WidgetError;

/// Result type for widget lifecycle phases.
pub type WidgetResult<T = ()> = Result<T, WidgetError>;

/// A boxed, type-erased widget instance.
pub type BoxedWidget = Box<dyn Widget>;

// ─────────────────────────────────────────────────────────────────────────────
// Host
// ─────────────────────────────────────────────────────────────────────────────

/// A widget's view of its host element.
///
/// Carries the shared document and the element the widget is bound to.
/// Copyable, so lifecycle phases can pass it around freely.
#[derive(Debug, Clone, Copy)]
pub struct Host<'a> {
    document: &'a Document,
    element: ElementId,
}

impl<'a> Host<'a> {
    /// Creates a host view for `element` within `document`.
    #[must_use]
    pub fn new(document: &'a Document, element: ElementId) -> Self {
        Self { document, element }
    }

    /// Returns the shared document.
    #[must_use]
    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Returns the host element.
    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Prepends a content element to the host and returns it.
    ///
    /// This is the conventional way for a widget to inject its markup: the
    /// content container becomes the host's first child, which is what the
    /// coordinator removes again on teardown.
    pub fn insert_content(&self, tag: impl Into<String>, text: impl Into<String>) -> ElementId {
        let container = self.document.create_element(tag);
        self.document.set_text(container, text);
        self.document.prepend_child(self.element, container);
        container
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// BindingState
// ─────────────────────────────────────────────────────────────────────────────

/// Per-binding state every widget carries.
///
/// Replaces inheritance from an abstract widget base class: concrete widgets
/// embed a `BindingState` and expose it through [`Widget::state`] /
/// [`Widget::state_mut`], and the provided lifecycle methods drive it.
///
/// The `initialized` flag is false at construction, true from the ready point
/// of a successful `init`, and false again after `destroy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindingState {
    initialized: bool,
    element: Option<ElementId>,
}

impl BindingState {
    /// Creates a fresh, unbound state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once the ready point has been passed for the current
    /// binding.
    #[must_use]
    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the host element of the current binding, if bound.
    #[must_use]
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    /// Records the host element at the start of initialization.
    pub fn bind(&mut self, element: ElementId) {
        self.element = Some(element);
    }

    /// Marks the ready point. Driven by the provided [`Widget::init`].
    pub fn mark_ready(&mut self) {
        self.initialized = true;
    }

    /// Clears the binding on teardown.
    pub fn reset(&mut self) {
        self.initialized = false;
        self.element = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget
// ─────────────────────────────────────────────────────────────────────────────

/// A unit of behavior bound to one element, with an init/destroy lifecycle.
///
/// Implementors embed a [`BindingState`] and override the lifecycle phases
/// they need; the provided [`init`](Self::init) and
/// [`destroy`](Self::destroy) sequence the state transitions.
///
/// # Example
///
/// ```ignore
/// #[derive(Default)]
/// struct Banner {
///     state: BindingState,
/// }
///
/// #[async_trait]
/// impl Widget for Banner {
///     fn state(&self) -> &BindingState {
///         &self.state
///     }
///
///     fn state_mut(&mut self) -> &mut BindingState {
///         &mut self.state
///     }
///
///     async fn before_ready(&mut self, host: Host<'_>) -> WidgetResult {
///         host.insert_content("div", "banner mounted");
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Widget: Send + Sync {
    /// Returns the widget's binding state.
    fn state(&self) -> &BindingState;

    /// Returns the widget's binding state for mutation.
    fn state_mut(&mut self) -> &mut BindingState;

    /// Returns `true` once the ready point has been passed for the current
    /// binding. The coordinator reads this to detect instances that never
    /// completed initialization.
    fn initialized(&self) -> bool {
        self.state().initialized()
    }

    /// Setup phase before the ready point. An `Err` fails the binding and
    /// aborts the surrounding traversal.
    async fn before_ready(&mut self, host: Host<'_>) -> WidgetResult {
        let _ = host;
        Ok(())
    }

    /// Continuation after the ready point, running with `initialized` already
    /// true. An `Err` still fails the binding.
    async fn after_ready(&mut self, host: Host<'_>) -> WidgetResult {
        let _ = host;
        Ok(())
    }

    /// Runs the full initialization sequence against the host element.
    ///
    /// The provided implementation binds the state to the host, runs
    /// [`before_ready`](Self::before_ready), passes the ready point, and runs
    /// [`after_ready`](Self::after_ready). The traversal awaits the whole
    /// sequence before moving to the next element.
    async fn init(&mut self, host: Host<'_>) -> WidgetResult {
        self.state_mut().bind(host.element());
        self.before_ready(host).await?;
        self.state_mut().mark_ready();
        self.after_ready(host).await
    }

    /// Releases per-binding resources and clears `initialized`.
    ///
    /// Synchronous. The provided implementation resets the binding state;
    /// calling it again on an already-destroyed widget is a no-op.
    fn destroy(&mut self) {
        self.state_mut().reset();
    }
}

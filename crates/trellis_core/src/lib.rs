//! Widget registry and lifecycle coordination for Trellis (Layer 2).
//!
//! `trellis_core` turns a document full of declaratively marked elements into
//! live widgets and back:
//!
//! - [`WidgetManager`] - the element → widget-instance registry and the
//!   "which elements are marked for binding" discovery query
//! - [`WidgetCore`] - the lifecycle coordinator: sequential async `init` in
//!   document order, reverse-order synchronous `destroy`, fail-fast error
//!   propagation
//! - [`LifecycleEvent`] / [`LifecycleObserver`] - synchronous event fan-out
//!   to passive listeners, with [`LogObserver`] as the default sink
//! - [`LifecycleError`] - the traversal failure taxonomy
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use trellis_core::{LogObserver, WidgetCore};
//! use trellis_dom::Document;
//! use trellis_widget::{ModuleRegistry, WidgetFactory};
//!
//! let document = Arc::new(Document::new());
//! let section = document.create_child(document.root(), "section");
//! document.set_attribute(section, "widget", "widgets/banner");
//!
//! let mut registry = ModuleRegistry::new();
//! registry.register::<Banner>("widgets/banner");
//!
//! let mut core = WidgetCore::new(document.clone(), WidgetFactory::new(registry))
//!     .with_observer(Arc::new(LogObserver::new()));
//!
//! core.init(document.root()).await?;
//! core.destroy(document.root())?;
//! ```
//!
//! # Architecture
//!
//! This crate is Layer 2 of the Trellis architecture:
//!
//! - **Layer 1** (`trellis_dom`): the host element tree
//! - **Layer 1** (`trellis_widget`): widget capability contract and factory
//! - **Layer 2** (`trellis_core`): lifecycle coordination (this crate)

/// The lifecycle coordinator.
pub mod coordinator;

/// Error types for lifecycle coordination.
pub mod error;

/// Unified event enum for lifecycle observation.
pub mod event;

/// The element → widget-instance registry.
pub mod manager;

/// Lifecycle observers.
pub mod observer;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::coordinator::WidgetCore;
    pub use crate::error::LifecycleError;
    pub use crate::event::LifecycleEvent;
    pub use crate::manager::{WIDGET_ATTRIBUTE, WidgetManager};
    pub use crate::observer::{LifecycleObserver, LogObserver};
}

pub use coordinator::WidgetCore;
pub use error::LifecycleError;
pub use event::LifecycleEvent;
pub use manager::{WIDGET_ATTRIBUTE, WidgetManager};
pub use observer::{LifecycleObserver, LogObserver};

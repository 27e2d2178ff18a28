//! Widget capability contract, resolver boundary, and factory for Trellis.
//!
//! A widget is a unit of behavior bound to exactly one element of a
//! [`Document`](trellis_dom::Document), with an init/destroy lifecycle. This
//! crate defines what a widget *is* and how one is produced from a declarative
//! identifier:
//!
//! - [`Widget`] - the capability contract every widget implements
//! - [`BindingState`] - per-binding state (`initialized` flag, host element)
//! - [`Host`] - a widget's view of its host element during initialization
//! - [`WidgetResolver`] - pluggable identifier → constructor resolution
//! - [`ModuleRegistry`] - the default resolver: a startup-populated
//!   identifier → constructor map
//! - [`WidgetFactory`] - instantiates widgets from identifiers
//!
//! Lifecycle *coordination* (discovery, ordering, teardown, events) lives in
//! `trellis_core`; this crate only defines the boundary a widget author and a
//! deployment's resolver see.
//!
//! # Example
//!
//! ```ignore
//! use trellis_widget::{ModuleRegistry, WidgetFactory};
//!
//! let mut registry = ModuleRegistry::new();
//! registry.register::<Banner>("widgets/banner");
//!
//! let factory = WidgetFactory::new(registry);
//! let widget = factory.create_widget("widgets/banner").await?;
//! ```

/// Error types for widget construction and initialization.
pub mod error;

/// Widget factory and the resolver boundary.
pub mod factory;

/// The default identifier → constructor registry.
pub mod registry;

/// The widget capability contract.
pub mod widget;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::error::{ResolveError, WidgetError};
    pub use crate::factory::{WidgetFactory, WidgetResolver};
    pub use crate::registry::{ModuleRegistry, WidgetCtor};
    pub use crate::widget::{BindingState, BoxedWidget, Host, Widget, WidgetResult};
}

pub use error::{ResolveError, WidgetError};
pub use factory::{WidgetFactory, WidgetResolver};
pub use registry::{ModuleRegistry, WidgetCtor};
pub use widget::{BindingState, BoxedWidget, Host, Widget, WidgetResult};

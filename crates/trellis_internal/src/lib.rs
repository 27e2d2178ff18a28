//! # Trellis Internal Library
//!
//! Re-exports the core Trellis crates for convenience.

/// Layer 1: the host element tree.
pub use trellis_dom;

/// Layer 1: widget capability contract and factory.
pub use trellis_widget;

/// Layer 2: widget registry and lifecycle coordination.
pub use trellis_core;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use trellis_core::prelude::*;
    pub use trellis_dom::prelude::*;
    pub use trellis_widget::prelude::*;
}

//! A declarative widget lifecycle runtime for element trees.
//!

pub use trellis_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use trellis_internal::prelude::*;
}

//! Unified event enum for lifecycle observation.
//!
//! All observers receive `&LifecycleEvent` and can match on variants for
//! typed access.
//!
//! # Example
//!
//! ```
//! use trellis_core::LifecycleEvent;
//!
//! fn handle_event(event: &LifecycleEvent) {
//!     match event {
//!         LifecycleEvent::InitSuccess { identifier } => {
//!             println!("widget {identifier} is up");
//!         }
//!         LifecycleEvent::InitError { error } => {
//!             println!("initialization failed: {error}");
//!         }
//!         _ => {}
//!     }
//! }
//! ```

use core::fmt;

use crate::error::LifecycleError;

/// Unified event enum for all lifecycle observers.
///
/// Broadcast synchronously during `init` and `destroy` traversals. Observers
/// receive events in registration order and cannot feed anything back.
#[derive(Debug, Clone)]
pub enum LifecycleEvent {
    /// A widget completed initialization against its host element.
    InitSuccess {
        /// The widget identifier from the binding attribute.
        identifier: String,
    },

    /// An initialization traversal failed and was aborted. Emitted exactly
    /// once per failed traversal, at the abort point.
    InitError {
        /// The failure that aborted the traversal.
        error: LifecycleError,
    },

    /// An initialization traversal processed every bound element.
    InitComplete,

    /// A teardown traversal destroyed every bound element.
    DestroyComplete,
}

impl LifecycleEvent {
    /// Returns the wire-stable name for this event variant.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::InitSuccess { .. } => "init_success",
            LifecycleEvent::InitError { .. } => "init_error",
            LifecycleEvent::InitComplete => "init_complete",
            LifecycleEvent::DestroyComplete => "destroy_complete",
        }
    }

    /// Returns the widget identifier this event relates to, if any.
    ///
    /// Traversal-level events (`InitComplete`, `DestroyComplete`) return
    /// `None`, as does an `InitError` that carries no identifier.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            LifecycleEvent::InitSuccess { identifier } => Some(identifier),
            LifecycleEvent::InitError { error } => error.identifier(),
            LifecycleEvent::InitComplete | LifecycleEvent::DestroyComplete => None,
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleEvent::InitSuccess { identifier } => {
                write!(f, "init_success({identifier})")
            }
            LifecycleEvent::InitError { error } => {
                write!(f, "init_error({error})")
            }
            LifecycleEvent::InitComplete => write!(f, "init_complete"),
            LifecycleEvent::DestroyComplete => write!(f, "destroy_complete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_stable() {
        let success = LifecycleEvent::InitSuccess {
            identifier: "widgets/a".into(),
        };
        assert_eq!(success.name(), "init_success");
        assert_eq!(LifecycleEvent::InitComplete.name(), "init_complete");
        assert_eq!(LifecycleEvent::DestroyComplete.name(), "destroy_complete");
    }

    #[test]
    fn identifier_is_extracted_where_present() {
        let success = LifecycleEvent::InitSuccess {
            identifier: "widgets/a".into(),
        };
        assert_eq!(success.identifier(), Some("widgets/a"));

        let error = LifecycleEvent::InitError {
            error: LifecycleError::initialization("widgets/b", "boom"),
        };
        assert_eq!(error.identifier(), Some("widgets/b"));

        assert_eq!(LifecycleEvent::InitComplete.identifier(), None);
    }

    #[test]
    fn display_includes_the_failure() {
        let event = LifecycleEvent::InitError {
            error: LifecycleError::initialization("widgets/b", "boom"),
        };
        let rendered = event.to_string();
        assert!(rendered.contains("widgets/b"));
        assert!(rendered.contains("boom"));
    }
}

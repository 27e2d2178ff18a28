//! Error types for lifecycle coordination.

use trellis_dom::ElementId;

/// Errors raised by the lifecycle coordinator.
///
/// All variants are fatal to the traversal that raised them (fail-fast) and
/// non-fatal to the process. The enum is `Clone` so
/// [`LifecycleEvent::InitError`](crate::LifecycleEvent::InitError) can carry
/// the failure to observers while the caller receives it as the traversal
/// result.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LifecycleError {
    /// The factory failed to produce the widget, or the widget's own
    /// initialization signaled an error.
    #[error("widget '{identifier}' failed to initialize: {message}")]
    Initialization {
        /// The widget identifier from the binding attribute.
        identifier: String,
        /// The underlying failure message.
        message: String,
    },

    /// The registry holds an entry for the element that never completed
    /// initialization. Signals state corruption: a teardown overlapped with
    /// re-initialization.
    #[error("widget '{identifier}' was destroyed during initialization")]
    DestroyedDuringInit {
        /// The widget identifier from the binding attribute.
        identifier: String,
    },

    /// Teardown found a bound element with no registry entry. Signals a
    /// registry/tree desynchronization.
    #[error("no widget instance found for {element}")]
    InstanceNotFound {
        /// The element that matched the attribute query.
        element: ElementId,
    },
}

impl LifecycleError {
    /// Creates an [`Initialization`](Self::Initialization) error from the
    /// widget identifier and an underlying failure.
    #[must_use]
    pub fn initialization(identifier: impl Into<String>, source: impl core::fmt::Display) -> Self {
        Self::Initialization {
            identifier: identifier.into(),
            message: source.to_string(),
        }
    }

    /// Returns the widget identifier carried by this error, if any.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            LifecycleError::Initialization { identifier, .. }
            | LifecycleError::DestroyedDuringInit { identifier } => Some(identifier),
            LifecycleError::InstanceNotFound { .. } => None,
        }
    }
}

//! Lifecycle observers.
//!
//! Observers are passive sinks for [`LifecycleEvent`]s: the coordinator fans
//! events out synchronously, in registration order, with no return value and
//! no error channel back into the traversal. Deployments should keep observers non-panicking; a panic
//! propagates to whoever triggered the traversal.

use crate::event::LifecycleEvent;

/// A passive listener notified of lifecycle events.
///
/// # Example
///
/// ```
/// use trellis_core::{LifecycleEvent, LifecycleObserver};
///
/// struct Metrics;
///
/// impl LifecycleObserver for Metrics {
///     fn update(&self, event: &LifecycleEvent) {
///         if let LifecycleEvent::InitSuccess { identifier } = event {
///             // bump a counter for `identifier`
///             let _ = identifier;
///         }
///     }
/// }
/// ```
pub trait LifecycleObserver: Send + Sync {
    /// Called once per broadcast event.
    fn update(&self, event: &LifecycleEvent);
}

/// The default observer: structured logging through the `tracing` facade.
///
/// Errors log at `error!` level, everything else at `info!`. Swap it out by
/// not registering it; the coordinator has no implicit logging sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LogObserver {
    /// Creates the logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LifecycleObserver for LogObserver {
    fn update(&self, event: &LifecycleEvent) {
        match event {
            LifecycleEvent::InitError { error } => {
                tracing::error!(event = event.name(), %error, "widget lifecycle error");
            }
            LifecycleEvent::InitSuccess { identifier } => {
                tracing::info!(event = event.name(), %identifier, "widget lifecycle event");
            }
            LifecycleEvent::InitComplete | LifecycleEvent::DestroyComplete => {
                tracing::info!(event = event.name(), "widget lifecycle event");
            }
        }
    }
}

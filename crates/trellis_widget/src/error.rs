//! Error types for widget construction and initialization.

/// Error signaled by a widget's own initialization phases.
///
/// Widgets report setup failures by returning this from
/// [`before_ready`](crate::Widget::before_ready) or
/// [`after_ready`](crate::Widget::after_ready). The lifecycle coordinator
/// attaches the widget identifier when it surfaces the failure.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct WidgetError {
    message: String,
}

impl WidgetError {
    /// Creates a widget error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for WidgetError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for WidgetError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Error resolving a widget identifier to a constructor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    /// The identifier was empty. Empty attribute values never bind.
    #[error("empty widget identifier")]
    EmptyIdentifier,

    /// No constructor is registered for the identifier.
    #[error("unknown widget identifier: {0}")]
    UnknownIdentifier(String),

    /// A custom resolver failed for its own reasons.
    #[error("widget resolution failed: {0}")]
    Resolution(String),
}

//! Widget factory and the resolver boundary.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ResolveError;
use crate::registry::{ModuleRegistry, WidgetCtor};
use crate::widget::BoxedWidget;

/// Trait implemented by resolvers that turn a widget identifier into a
/// constructor.
///
/// Resolution is asynchronous so deployments can back it with whatever a
/// "module lookup" means for them (a registry probe, a plugin load, an I/O
/// round trip). The factory treats any failure as opaque and propagates it
/// unclassified.
#[async_trait]
pub trait WidgetResolver: Send + Sync + 'static {
    /// Resolves an identifier to a widget constructor.
    async fn resolve(&self, identifier: &str) -> Result<WidgetCtor, ResolveError>;
}

/// Produces widget instances from declarative identifiers.
///
/// The resolver is injected at construction time. The default resolver is a
/// [`ModuleRegistry`] populated at startup; tests swap in their own
/// [`WidgetResolver`] to count or fail resolutions.
///
/// # Example
///
/// ```ignore
/// let factory = WidgetFactory::new(registry);
/// let widget = factory.create_widget("widgets/a").await?;
/// ```
pub struct WidgetFactory {
    resolver: Arc<dyn WidgetResolver>,
}

impl core::fmt::Debug for WidgetFactory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WidgetFactory").finish_non_exhaustive()
    }
}

impl WidgetFactory {
    /// Creates a factory backed by the default registry resolver.
    #[must_use]
    pub fn new(registry: ModuleRegistry) -> Self {
        Self {
            resolver: Arc::new(registry),
        }
    }

    /// Creates a factory with a custom resolver.
    #[must_use]
    pub fn with_resolver(resolver: Arc<dyn WidgetResolver>) -> Self {
        Self { resolver }
    }

    /// Creates a new widget instance for the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::EmptyIdentifier`] for an empty identifier;
    /// resolver failures propagate as-is.
    pub async fn create_widget(&self, identifier: &str) -> Result<BoxedWidget, ResolveError> {
        if identifier.is_empty() {
            return Err(ResolveError::EmptyIdentifier);
        }

        let ctor = self.resolver.resolve(identifier).await?;
        Ok(ctor())
    }
}

//! The default identifier → constructor registry.

use std::sync::Arc;

use async_trait::async_trait;
use hashbrown::HashMap;

use crate::error::ResolveError;
use crate::factory::WidgetResolver;
use crate::widget::{BoxedWidget, Widget};

/// A type-erased widget constructor.
///
/// Cloning is cheap; the registry hands these out to the factory, which calls
/// them once per instantiation.
pub type WidgetCtor = Arc<dyn Fn() -> BoxedWidget + Send + Sync>;

/// Registry mapping widget identifiers to constructors.
///
/// This is the statically-typed stand-in for resolving an identifier through
/// dynamic module loading: deployments register every widget type at startup,
/// and the registry doubles as the default [`WidgetResolver`].
///
/// # Example
///
/// ```ignore
/// let mut registry = ModuleRegistry::new();
/// registry.register::<BannerA>("widgets/a");
/// registry.register_ctor("widgets/b", || Box::new(BannerB::with_label("b")));
///
/// let factory = WidgetFactory::new(registry);
/// ```
#[derive(Default, Clone)]
pub struct ModuleRegistry {
    // Maps widget identifiers to constructors.
    ctors: HashMap<String, WidgetCtor>,
}

impl core::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

impl ModuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ctors: HashMap::new(),
        }
    }

    /// Registers a widget type under the given identifier.
    ///
    /// # Panics
    ///
    /// Panics if the identifier is already registered.
    pub fn register<W>(&mut self, identifier: impl Into<String>)
    where
        W: Widget + Default + 'static,
    {
        self.register_ctor(identifier, || Box::new(W::default()));
    }

    /// Registers a custom constructor under the given identifier.
    ///
    /// Use this when a widget type needs constructor arguments that
    /// `Default` cannot supply.
    ///
    /// # Panics
    ///
    /// Panics if the identifier is already registered.
    pub fn register_ctor(
        &mut self,
        identifier: impl Into<String>,
        ctor: impl Fn() -> BoxedWidget + Send + Sync + 'static,
    ) {
        let identifier = identifier.into();
        assert!(
            !self.ctors.contains_key(&identifier),
            "widget '{identifier}' is already registered"
        );
        self.ctors.insert(identifier, Arc::new(ctor));
    }

    /// Checks if an identifier is registered.
    #[must_use]
    pub fn contains(&self, identifier: impl AsRef<str>) -> bool {
        self.ctors.contains_key(identifier.as_ref())
    }

    /// Lists registered identifiers.
    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.ctors.keys().cloned().collect()
    }
}

#[async_trait]
impl WidgetResolver for ModuleRegistry {
    async fn resolve(&self, identifier: &str) -> Result<WidgetCtor, ResolveError> {
        self.ctors
            .get(identifier)
            .cloned()
            .ok_or_else(|| ResolveError::UnknownIdentifier(identifier.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::BindingState;

    #[derive(Default)]
    struct Plain {
        state: BindingState,
    }

    #[async_trait]
    impl Widget for Plain {
        fn state(&self) -> &BindingState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut BindingState {
            &mut self.state
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = ModuleRegistry::new();
        assert!(!registry.contains("widgets/plain"));

        registry.register::<Plain>("widgets/plain");
        assert!(registry.contains("widgets/plain"));
        assert_eq!(registry.identifiers(), vec!["widgets/plain".to_string()]);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_registration_panics() {
        let mut registry = ModuleRegistry::new();
        registry.register::<Plain>("widgets/plain");
        registry.register::<Plain>("widgets/plain");
    }

    #[tokio::test]
    async fn resolve_returns_working_ctor() {
        let mut registry = ModuleRegistry::new();
        registry.register::<Plain>("widgets/plain");

        let ctor = registry.resolve("widgets/plain").await.unwrap();
        let widget = ctor();
        assert!(!widget.initialized());
    }

    #[tokio::test]
    async fn resolve_unknown_identifier_fails() {
        let registry = ModuleRegistry::new();
        let Err(err) = registry.resolve("widgets/ghost").await else {
            panic!("expected unknown identifier to fail");
        };
        assert!(matches!(err, ResolveError::UnknownIdentifier(id) if id == "widgets/ghost"));
    }
}

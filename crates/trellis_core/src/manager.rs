//! The element → widget-instance registry.

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use trellis_dom::{Document, ElementId};
use trellis_widget::BoxedWidget;

/// Default name of the binding attribute.
pub const WIDGET_ATTRIBUTE: &str = "widget";

/// Registry mapping elements to their live widget instances.
///
/// Element IDs are weak back-references: the [`Document`] owns element
/// lifecycles, the registry owns the widget instances. At most one live
/// instance per element; [`add_widget`](Self::add_widget) is an upsert that
/// silently drops any previous instance, so a caller that cares must destroy
/// the old widget first.
///
/// The registry also answers the discovery query: which elements under a
/// root are marked for widget binding.
pub struct WidgetManager {
    widgets: HashMap<ElementId, BoxedWidget>,
    attribute: String,
}

impl core::fmt::Debug for WidgetManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WidgetManager")
            .field("attribute", &self.attribute)
            .field("widgets", &self.widgets.len())
            .finish()
    }
}

impl Default for WidgetManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetManager {
    /// Creates an empty registry bound to the default
    /// [`WIDGET_ATTRIBUTE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
            attribute: WIDGET_ATTRIBUTE.to_string(),
        }
    }

    /// Sets the binding attribute name this registry queries for.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute = name.into();
        self
    }

    /// Returns the binding attribute name.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Associates a widget instance with an element.
    ///
    /// Unconditional upsert: an existing mapping is overwritten and its
    /// instance dropped without being destroyed. Returns the stored instance
    /// so the caller can initialize it in place.
    pub fn add_widget(&mut self, element: ElementId, widget: BoxedWidget) -> &mut BoxedWidget {
        match self.widgets.entry(element) {
            Entry::Occupied(mut entry) => {
                entry.insert(widget);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(widget),
        }
    }

    /// Returns the widget instance bound to the element, if any.
    #[must_use]
    pub fn get_widget(&self, element: ElementId) -> Option<&BoxedWidget> {
        self.widgets.get(&element)
    }

    /// Returns the widget instance bound to the element for mutation.
    #[must_use]
    pub fn get_widget_mut(&mut self, element: ElementId) -> Option<&mut BoxedWidget> {
        self.widgets.get_mut(&element)
    }

    /// Removes and returns the element's widget instance. Removing an absent
    /// mapping is a no-op.
    pub fn remove_widget(&mut self, element: ElementId) -> Option<BoxedWidget> {
        self.widgets.remove(&element)
    }

    /// Returns `true` if the element has a registered instance.
    #[must_use]
    pub fn contains(&self, element: ElementId) -> bool {
        self.widgets.contains_key(&element)
    }

    /// Returns the number of registered instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns `true` if no instances are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Drops every registered instance without destroying it.
    pub fn clear(&mut self) {
        self.widgets.clear();
    }

    /// Returns all elements strictly under `root` marked for widget binding,
    /// in document (depth-first, pre-order) order.
    ///
    /// An element is marked when it carries the binding attribute with a
    /// non-empty value. The result is recomputed on every call, never cached.
    #[must_use]
    pub fn elements_with_widget(&self, document: &Document, root: ElementId) -> Vec<ElementId> {
        document
            .descendants(root)
            .into_iter()
            .filter(|&element| {
                document
                    .attribute(element, &self.attribute)
                    .is_some_and(|value| !value.is_empty())
            })
            .collect()
    }
}

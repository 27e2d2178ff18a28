//! Document structure and traversal.

use std::sync::atomic::{AtomicUsize, Ordering};

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::element::ElementId;

// ─────────────────────────────────────────────────────────────────────────────
// ElementData
// ─────────────────────────────────────────────────────────────────────────────

/// Data stored for a single element.
#[derive(Debug, Default)]
struct ElementData {
    tag: String,
    attributes: HashMap<String, String>,
    text: Option<String>,
    children: Vec<ElementId>,
    parent: Option<ElementId>,
}

impl ElementData {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Document
// ─────────────────────────────────────────────────────────────────────────────

/// An element tree with interior mutability.
///
/// The document owns every element. All accessors take `&self`; mutation is
/// serialized through an internal lock so a document can be shared (typically
/// as an `Arc<Document>`) between the lifecycle coordinator and the widgets
/// that decorate their host elements during initialization.
///
/// Handles to removed elements are stale: lookups return `None` and mutations
/// are no-ops.
///
/// # Example
///
/// ```
/// use trellis_dom::Document;
///
/// let doc = Document::new();
/// let item = doc.create_child(doc.root(), "item");
/// let badge = doc.create_element("badge");
/// doc.prepend_child(item, badge);
///
/// assert_eq!(doc.first_child(item), Some(badge));
/// ```
#[derive(Debug)]
pub struct Document {
    elements: RwLock<HashMap<ElementId, ElementData>>,
    root: ElementId,
    next_id: AtomicUsize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Tag assigned to the root element.
    pub const ROOT_TAG: &'static str = "root";

    /// Creates a document containing only the root element.
    #[must_use]
    pub fn new() -> Self {
        let root = ElementId::new(0);
        let mut elements = HashMap::new();
        elements.insert(root, ElementData::new(Self::ROOT_TAG));

        Self {
            elements: RwLock::new(elements),
            root,
            next_id: AtomicUsize::new(1),
        }
    }

    /// Returns the root element.
    #[must_use]
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Returns the number of elements in the document, including detached ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    /// Returns `true` if the document holds no elements besides the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }

    /// Returns `true` if the element exists in this document.
    #[must_use]
    pub fn contains(&self, element: ElementId) -> bool {
        self.elements.read().contains_key(&element)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Creates a detached element with the given tag.
    ///
    /// The element is not part of the tree until attached with
    /// [`append_child`](Self::append_child) or
    /// [`prepend_child`](Self::prepend_child).
    pub fn create_element(&self, tag: impl Into<String>) -> ElementId {
        let id = ElementId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.elements.write().insert(id, ElementData::new(tag));
        id
    }

    /// Creates an element and appends it to `parent` in one step.
    pub fn create_child(&self, parent: ElementId, tag: impl Into<String>) -> ElementId {
        let child = self.create_element(tag);
        self.append_child(parent, child);
        child
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// If `child` is already attached elsewhere it is detached first. Stale
    /// handles make this a no-op.
    pub fn append_child(&self, parent: ElementId, child: ElementId) {
        self.attach(parent, child, AttachPosition::Last);
    }

    /// Inserts `child` as the first child of `parent`.
    ///
    /// If `child` is already attached elsewhere it is detached first. Stale
    /// handles make this a no-op.
    pub fn prepend_child(&self, parent: ElementId, child: ElementId) {
        self.attach(parent, child, AttachPosition::First);
    }

    /// Removes an element and its entire subtree from the document.
    ///
    /// Handles into the removed subtree become stale. Removing the root or a
    /// stale handle is a no-op.
    pub fn remove(&self, element: ElementId) {
        if element == self.root {
            return;
        }

        let mut elements = self.elements.write();
        if !elements.contains_key(&element) {
            return;
        }

        detach(&mut elements, element);

        let mut stack = vec![element];
        while let Some(id) = stack.pop() {
            if let Some(data) = elements.remove(&id) {
                stack.extend(data.children);
            }
        }
    }

    fn attach(&self, parent: ElementId, child: ElementId, position: AttachPosition) {
        if parent == child {
            return;
        }

        let mut elements = self.elements.write();
        if !elements.contains_key(&parent) || !elements.contains_key(&child) {
            return;
        }

        // Reject attachments that would make an element its own ancestor.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return;
            }
            cursor = elements.get(&id).and_then(|d| d.parent);
        }

        detach(&mut elements, child);

        if let Some(data) = elements.get_mut(&parent) {
            match position {
                AttachPosition::First => data.children.insert(0, child),
                AttachPosition::Last => data.children.push(child),
            }
        }
        if let Some(data) = elements.get_mut(&child) {
            data.parent = Some(parent);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Structure queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the element's tag.
    #[must_use]
    pub fn tag(&self, element: ElementId) -> Option<String> {
        self.elements.read().get(&element).map(|d| d.tag.clone())
    }

    /// Returns the element's parent, if attached.
    #[must_use]
    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.elements.read().get(&element).and_then(|d| d.parent)
    }

    /// Returns the element's children in order.
    #[must_use]
    pub fn children(&self, element: ElementId) -> Vec<ElementId> {
        self.elements
            .read()
            .get(&element)
            .map(|d| d.children.clone())
            .unwrap_or_default()
    }

    /// Returns the element's first child, if any.
    #[must_use]
    pub fn first_child(&self, element: ElementId) -> Option<ElementId> {
        self.elements
            .read()
            .get(&element)
            .and_then(|d| d.children.first().copied())
    }

    /// Returns all elements strictly below `root` in document order
    /// (depth-first, pre-order). The result is recomputed on every call.
    #[must_use]
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let elements = self.elements.read();
        let mut ordered = Vec::new();

        let Some(data) = elements.get(&root) else {
            return ordered;
        };

        // Pre-order: children pushed in reverse so the stack pops left-to-right.
        let mut stack: Vec<ElementId> = data.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            ordered.push(id);
            if let Some(data) = elements.get(&id) {
                stack.extend(data.children.iter().rev().copied());
            }
        }

        ordered
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attributes and text
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets an attribute on the element, replacing any previous value.
    pub fn set_attribute(
        &self,
        element: ElementId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        if let Some(data) = self.elements.write().get_mut(&element) {
            data.attributes.insert(name.into(), value.into());
        }
    }

    /// Returns the element's attribute value, if set.
    #[must_use]
    pub fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements
            .read()
            .get(&element)
            .and_then(|d| d.attributes.get(name).cloned())
    }

    /// Returns `true` if the element carries the attribute.
    #[must_use]
    pub fn has_attribute(&self, element: ElementId, name: &str) -> bool {
        self.elements
            .read()
            .get(&element)
            .is_some_and(|d| d.attributes.contains_key(name))
    }

    /// Removes an attribute from the element.
    pub fn remove_attribute(&self, element: ElementId, name: &str) {
        if let Some(data) = self.elements.write().get_mut(&element) {
            data.attributes.remove(name);
        }
    }

    /// Sets the element's text content.
    pub fn set_text(&self, element: ElementId, text: impl Into<String>) {
        if let Some(data) = self.elements.write().get_mut(&element) {
            data.text = Some(text.into());
        }
    }

    /// Returns the element's text content, if set.
    #[must_use]
    pub fn text(&self, element: ElementId) -> Option<String> {
        self.elements
            .read()
            .get(&element)
            .and_then(|d| d.text.clone())
    }
}

/// Where to attach a child within its parent's child list.
#[derive(Debug, Clone, Copy)]
enum AttachPosition {
    First,
    Last,
}

/// Unlinks `element` from its parent's child list, if attached.
fn detach(elements: &mut HashMap<ElementId, ElementData>, element: ElementId) {
    let parent = elements.get(&element).and_then(|d| d.parent);
    if let Some(parent) = parent {
        if let Some(data) = elements.get_mut(&parent) {
            data.children.retain(|&c| c != element);
        }
    }
    if let Some(data) = elements.get_mut(&element) {
        data.parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_has_only_root() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.tag(doc.root()).as_deref(), Some(Document::ROOT_TAG));
        assert!(doc.descendants(doc.root()).is_empty());
    }

    #[test]
    fn create_child_attaches_in_order() {
        let doc = Document::new();
        let a = doc.create_child(doc.root(), "a");
        let b = doc.create_child(doc.root(), "b");

        assert_eq!(doc.children(doc.root()), vec![a, b]);
        assert_eq!(doc.parent(a), Some(doc.root()));
    }

    #[test]
    fn descendants_are_pre_order() {
        let doc = Document::new();
        let a = doc.create_child(doc.root(), "a");
        let a1 = doc.create_child(a, "a1");
        let a2 = doc.create_child(a, "a2");
        let b = doc.create_child(doc.root(), "b");
        let b1 = doc.create_child(b, "b1");

        assert_eq!(doc.descendants(doc.root()), vec![a, a1, a2, b, b1]);
        assert_eq!(doc.descendants(a), vec![a1, a2]);
    }

    #[test]
    fn prepend_child_becomes_first() {
        let doc = Document::new();
        let host = doc.create_child(doc.root(), "host");
        let existing = doc.create_child(host, "existing");
        let injected = doc.create_element("injected");
        doc.prepend_child(host, injected);

        assert_eq!(doc.first_child(host), Some(injected));
        assert_eq!(doc.children(host), vec![injected, existing]);
    }

    #[test]
    fn remove_drops_whole_subtree() {
        let doc = Document::new();
        let a = doc.create_child(doc.root(), "a");
        let a1 = doc.create_child(a, "a1");
        let a11 = doc.create_child(a1, "a11");

        doc.remove(a);

        assert!(!doc.contains(a));
        assert!(!doc.contains(a1));
        assert!(!doc.contains(a11));
        assert!(doc.descendants(doc.root()).is_empty());
    }

    #[test]
    fn remove_root_is_a_no_op() {
        let doc = Document::new();
        doc.remove(doc.root());
        assert!(doc.contains(doc.root()));
    }

    #[test]
    fn attributes_round_trip() {
        let doc = Document::new();
        let el = doc.create_child(doc.root(), "el");

        assert!(!doc.has_attribute(el, "widget"));
        doc.set_attribute(el, "widget", "widgets/a");
        assert_eq!(doc.attribute(el, "widget").as_deref(), Some("widgets/a"));

        doc.set_attribute(el, "widget", "widgets/b");
        assert_eq!(doc.attribute(el, "widget").as_deref(), Some("widgets/b"));

        doc.remove_attribute(el, "widget");
        assert!(doc.attribute(el, "widget").is_none());
    }

    #[test]
    fn stale_handles_are_inert() {
        let doc = Document::new();
        let el = doc.create_child(doc.root(), "el");
        doc.remove(el);

        doc.set_attribute(el, "widget", "widgets/a");
        assert!(doc.attribute(el, "widget").is_none());
        assert!(doc.tag(el).is_none());

        let orphan = doc.create_element("orphan");
        doc.append_child(el, orphan);
        assert!(doc.parent(orphan).is_none());
    }

    #[test]
    fn attaching_an_ancestor_under_its_descendant_is_rejected() {
        let doc = Document::new();
        let a = doc.create_child(doc.root(), "a");
        let b = doc.create_child(a, "b");

        doc.append_child(b, a);

        assert_eq!(doc.parent(a), Some(doc.root()));
        assert_eq!(doc.parent(b), Some(a));
        assert_eq!(doc.descendants(doc.root()), vec![a, b]);
    }

    #[test]
    fn reattach_moves_between_parents() {
        let doc = Document::new();
        let a = doc.create_child(doc.root(), "a");
        let b = doc.create_child(doc.root(), "b");
        let child = doc.create_child(a, "child");

        doc.append_child(b, child);

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), vec![child]);
        assert_eq!(doc.parent(child), Some(b));
    }
}

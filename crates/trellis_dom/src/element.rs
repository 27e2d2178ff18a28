//! Element identity.

use core::fmt;

/// Unique identifier for an element in a [`Document`](crate::Document).
///
/// Element IDs are cheap copyable handles. They are only meaningful for the
/// document that allocated them; a handle whose element has been removed is
/// stale, and lookups through it return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    /// Creates a new element ID from a raw index.
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element_{}", self.0)
    }
}

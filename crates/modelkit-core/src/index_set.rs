//! Index-set snapshots.
//!
//! An index set is the collection of keys a component is replicated over.
//! The snapshot is taken once, at declaration time, so every materialization
//! traverses the same keys in the same order regardless of whether the
//! caller's original iterable was replayable.

use std::slice;

/// An owned, multiply-iterable snapshot of a declared index collection.
///
/// # Example
///
/// ```
/// use modelkit_core::IndexSet;
///
/// let days: IndexSet<u32> = IndexSet::new(1..=3);
/// assert_eq!(days.len(), 3);
///
/// // Traversal order is fixed and repeatable.
/// let first: Vec<u32> = days.iter().copied().collect();
/// let second: Vec<u32> = days.iter().copied().collect();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexSet<I> {
    keys: Vec<I>,
}

impl<I> IndexSet<I> {
    /// Captures a snapshot of the given collection.
    pub fn new(initialize: impl IntoIterator<Item = I>) -> Self {
        Self {
            keys: initialize.into_iter().collect(),
        }
    }

    /// Iterates the captured keys in traversal order.
    pub fn iter(&self) -> slice::Iter<'_, I> {
        self.keys.iter()
    }

    /// Returns the number of captured keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the captured keys as a slice.
    pub fn as_slice(&self) -> &[I] {
        &self.keys
    }
}

impl<I> FromIterator<I> for IndexSet<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a, I> IntoIterator for &'a IndexSet<I> {
    type Item = &'a I;
    type IntoIter = slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

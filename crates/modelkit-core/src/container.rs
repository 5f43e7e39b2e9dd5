//! Keyed containers for materialized elements.
//!
//! A fresh container is created at the start of each materialize call and
//! handed to the caller once populated; containers are never reused across
//! calls.

use std::collections::HashMap;
use std::hash::Hash;

/// Capability trait for the keyed container a deferred builder populates.
///
/// Implementors only need to supply an empty container and key-by-key
/// insertion; everything else (lookup, iteration) is up to the concrete
/// container type.
pub trait KeyedContainer<I, E> {
    /// Creates a fresh, empty container.
    fn empty() -> Self;

    /// Stores an element at a key.
    fn insert(&mut self, key: I, element: E);
}

/// A keyed container that preserves insertion order.
///
/// Iteration follows the order keys were inserted, which for materialized
/// containers is the index set's traversal order. Lookup is hashed.
///
/// # Example
///
/// ```
/// use modelkit_core::{IndexedMap, KeyedContainer};
///
/// let mut map: IndexedMap<u32, &str> = IndexedMap::new();
/// map.insert(2, "b");
/// map.insert(1, "a");
///
/// assert_eq!(map.get(&1), Some(&"a"));
/// let keys: Vec<u32> = map.keys().copied().collect();
/// assert_eq!(keys, vec![2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedMap<I, E> {
    order: Vec<I>,
    entries: HashMap<I, E>,
}

impl<I, E> IndexedMap<I, E>
where
    I: Eq + Hash + Clone,
{
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Returns the element at a key, if present.
    pub fn get(&self, key: &I) -> Option<&E> {
        self.entries.get(key)
    }

    /// Returns whether a key is present.
    pub fn contains_key(&self, key: &I) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &I> {
        self.order.iter()
    }

    /// Iterates `(key, element)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&I, &E)> {
        self.order
            .iter()
            .filter_map(move |key| self.entries.get(key).map(|element| (key, element)))
    }
}

impl<I, E> Default for IndexedMap<I, E>
where
    I: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, E> KeyedContainer<I, E> for IndexedMap<I, E>
where
    I: Eq + Hash + Clone,
{
    fn empty() -> Self {
        Self::new()
    }

    fn insert(&mut self, key: I, element: E) {
        if self.entries.insert(key.clone(), element).is_none() {
            self.order.push(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut map = IndexedMap::new();
        map.insert(3, "c");
        map.insert(1, "a");
        map.insert(2, "b");

        let keys: Vec<i32> = map.keys().copied().collect();
        assert_eq!(keys, vec![3, 1, 2]);

        let pairs: Vec<(i32, &str)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![(3, "c"), (1, "a"), (2, "b")]);
    }

    #[test]
    fn reinsert_replaces_without_reordering() {
        let mut map = IndexedMap::new();
        map.insert(1, "a");
        map.insert(2, "b");
        map.insert(1, "a2");

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1), Some(&"a2"));
        let keys: Vec<i32> = map.keys().copied().collect();
        assert_eq!(keys, vec![1, 2]);
    }

    #[test]
    fn empty_map() {
        let map: IndexedMap<u32, ()> = IndexedMap::empty();
        assert!(map.is_empty());
        assert!(!map.contains_key(&0));
    }
}

//! OwnedList - an index-addressed list that owns its storage.

use std::cmp::Ordering;
use std::fmt;

use crate::{ArenaStore, Iter, Key, Keys, List, OutOfRange, Store};

/// An index-addressed singly-linked list that owns its storage.
///
/// This is a convenience wrapper around [`List`] + [`ArenaStore`] for the
/// common case of one list per pool - the handle a session layer keeps
/// alive between user interactions. All positions are 0-based over
/// traversal order.
///
/// # Example
///
/// ```
/// use relink_list::OwnedList;
///
/// let mut list: OwnedList<&str> = OwnedList::new();
///
/// list.append("a");
/// list.append("b");
/// list.append("c");
///
/// list.insert(1, "z").unwrap();
/// assert_eq!(list.to_string(), "List[[a] [z] [b] [c] ]");
///
/// assert_eq!(list.delete(0), Some("a"));
/// assert_eq!(list.retrieve(1), Some(&"b"));
///
/// list.sort();
/// assert_eq!(list.to_string(), "List[[b] [c] [z] ]");
/// ```
pub struct OwnedList<T, K: Key = u32> {
    store: ArenaStore<T, K>,
    list: List<T, ArenaStore<T, K>, K>,
}

impl<T, K: Key> OwnedList<T, K> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            store: ArenaStore::new(),
            list: List::new(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// storage reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: ArenaStore::with_capacity(capacity),
            list: List::new(),
        }
    }

    /// Returns the number of values, counted by walking the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len(&self.store)
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Appends a value at the tail, returning its key.
    ///
    /// The key stays valid across inserts, deletes, and sorts until the
    /// value itself is deleted.
    #[inline]
    pub fn append(&mut self, value: T) -> K {
        self.list.push_back(&mut self.store, value)
    }

    /// Inserts a value at `index`, returning its key.
    ///
    /// Index 0 always succeeds, even on an empty list; `index == len`
    /// appends.
    ///
    /// # Errors
    ///
    /// Returns `Err(OutOfRange(value))` if `index > len`; the list is
    /// unchanged.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<K, OutOfRange<T>> {
        self.list.insert_at(&mut self.store, index, value)
    }

    /// Removes and returns the value at `index`.
    ///
    /// Returns `None` if `index >= len`; deleting from an empty list is a
    /// defined no-op.
    #[inline]
    pub fn delete(&mut self, index: usize) -> Option<T> {
        self.list.remove_at(&mut self.store, index)
    }

    /// Returns a reference to the value at `index`, or `None` past the end.
    #[inline]
    pub fn retrieve(&self, index: usize) -> Option<&T> {
        self.list.get_at(&self.store, index)
    }

    /// Returns a mutable reference to the value at `index`, or `None` past
    /// the end.
    #[inline]
    pub fn retrieve_mut(&mut self, index: usize) -> Option<&mut T> {
        self.list.get_at_mut(&mut self.store, index)
    }

    /// Returns a reference to the value with the given key.
    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        self.list.get(&self.store, key)
    }

    /// Sorts ascending by the value type's total order.
    ///
    /// Bubble sort by relinking: node identity is preserved, equal values
    /// are never reordered, and an already-sorted list finishes in one
    /// pass. See [`List::sort_by`].
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.list.sort(&mut self.store);
    }

    /// Sorts by a comparator. See [`List::sort_by`].
    #[inline]
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.list.sort_by(&mut self.store, compare);
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.list.clear(&mut self.store);
        self.store.clear();
    }

    /// Returns an iterator over references to values, head to tail.
    ///
    /// `iter().enumerate()` is the `(position, value)` traversal surface
    /// renderers consume.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, ArenaStore<T, K>, K> {
        self.list.iter(&self.store)
    }

    /// Returns an iterator over node keys, head to tail.
    #[inline]
    pub fn keys(&self) -> Keys<'_, T, ArenaStore<T, K>, K> {
        self.list.keys(&self.store)
    }
}

impl<T, K: Key> Default for OwnedList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display, K: Key> fmt::Display for OwnedList<T, K> {
    /// Renders `List[]` when empty, else `List[[a] [b] ]` in traversal
    /// order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("List[")?;
        self.list.write_chain(&self.store, f)?;
        f.write_str("]")
    }
}

impl<T: fmt::Debug, K: Key> fmt::Debug for OwnedList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, K: Key> Extend<T> for OwnedList<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T, K: Key> FromIterator<T> for OwnedList<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

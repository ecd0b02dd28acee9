//! Singly-linked list with index-addressed mutation over external storage.
//!
//! Nodes live in a [`Store`]; the list holds only the head key and rewires
//! `next` links to mutate. Positions are 0-based over traversal order from
//! the head, recomputed by walking - the list caches nothing, so a key
//! handed out by `push_back` stays a pure identity handle while the value's
//! position changes under inserts, deletes, and sorts.
//!
//! # Storage Invariant
//!
//! A list instance must always be used with the same store instance.
//! Passing a different store is undefined behavior. This is the caller's
//! responsibility to enforce (same discipline as the `slab` crate).
//!
//! # Example
//!
//! ```
//! use relink_list::{ArenaStore, List};
//!
//! let mut store: ArenaStore<&str> = ArenaStore::new();
//! let mut list: List<&str, ArenaStore<&str>> = List::new();
//!
//! list.push_back(&mut store, "a");
//! list.push_back(&mut store, "c");
//! list.insert_at(&mut store, 1, "b").unwrap();
//!
//! let values: Vec<_> = list.iter(&store).copied().collect();
//! assert_eq!(values, ["a", "b", "c"]);
//!
//! assert_eq!(list.remove_at(&mut store, 0), Some("a"));
//! assert_eq!(list.get_at(&store, 0), Some(&"b"));
//! ```
//!
//! # Sorting
//!
//! [`List::sort`] is a bubble sort that swaps adjacent nodes by relinking.
//! Values never move between slots, so store keys keep identifying the same
//! value after sorting:
//!
//! ```
//! use relink_list::{ArenaStore, List};
//!
//! let mut store: ArenaStore<u32> = ArenaStore::new();
//! let mut list: List<u32, ArenaStore<u32>> = List::new();
//!
//! let three = list.push_back(&mut store, 3);
//! list.push_back(&mut store, 1);
//! list.push_back(&mut store, 2);
//!
//! list.sort(&mut store);
//!
//! let values: Vec<_> = list.iter(&store).copied().collect();
//! assert_eq!(values, [1, 2, 3]);
//! assert_eq!(list.get(&store, three), Some(&3)); // same slot, new position
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::{Arena, Key, Node, Store};

/// Type alias for arena-backed list storage.
pub type ArenaStore<T, K = u32> = Arena<Node<T, K>, K>;

/// Type alias for list storage backed by `slab::Slab`.
#[cfg(feature = "slab")]
pub type SlabStore<T> = slab::Slab<Node<T, usize>>;

/// Error returned when a mutation addresses a position past the end.
///
/// Carries the rejected value back to the caller, so nothing is lost on the
/// error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange<T>(pub T);

impl<T> OutOfRange<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for OutOfRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index is past the end of the list")
    }
}

impl<T: fmt::Debug> std::error::Error for OutOfRange<T> {}

/// A singly-linked list over external storage.
///
/// The list itself stores only the head key. Nodes live in a caller-provided
/// [`Store`] and chain forward through [`Node::next`] keys; `K::NIL` marks
/// the tail. The chain reachable from the head is always acyclic and finite,
/// and every reachable key resolves in the store.
///
/// All positional operations walk from the head, so they are O(n) in the
/// addressed position. See the [module docs](self) for examples.
pub struct List<T, S, K: Key = u32>
where
    S: Store<Node<T, K>, Key = K>,
{
    head: K,
    _marker: PhantomData<(T, S)>,
}

impl<T, S, K: Key> Default for List<T, S, K>
where
    S: Store<Node<T, K>, Key = K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, K: Key> List<T, S, K>
where
    S: Store<Node<T, K>, Key = K>,
{
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            head: K::NIL,
            _marker: PhantomData,
        }
    }

    /// Returns the head node's key, or `K::NIL` if the list is empty.
    #[inline]
    pub fn head(&self) -> K {
        self.head
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_nil()
    }

    /// Returns the number of nodes, counted by walking the chain.
    ///
    /// O(n): length is derived from the links rather than cached, so it can
    /// never drift from the structure.
    pub fn len(&self, store: &S) -> usize {
        let mut count = 0;
        let mut cur = self.head;
        while cur.is_some() {
            count += 1;
            // Safety: reachable keys resolve in the list's store
            cur = unsafe { store.get_unchecked(cur) }.next;
        }
        count
    }

    /// Appends a value, returning its key.
    ///
    /// Walks to the tail and links the new node after it; on an empty list
    /// the new node becomes the head. Always succeeds.
    pub fn push_back(&mut self, store: &mut S, value: T) -> K {
        let key = store.insert(Node::new(value));

        if self.head.is_nil() {
            self.head = key;
            return key;
        }

        let mut cur = self.head;
        loop {
            // Safety: reachable keys resolve in the list's store
            let node = unsafe { store.get_unchecked(cur) };
            if node.next.is_nil() {
                break;
            }
            cur = node.next;
        }

        // Safety: cur is the reachable tail
        unsafe { store.get_unchecked_mut(cur) }.next = key;
        key
    }

    /// Inserts a value at `index`, returning its key.
    ///
    /// Index 0 always succeeds, even on an empty list: the new node takes
    /// over as head with the old head as its successor. A positive index
    /// splices between the nodes at `index - 1` and `index`; `index == len`
    /// appends.
    ///
    /// # Errors
    ///
    /// Returns `Err(OutOfRange(value))` if `index > len`. The list is
    /// unchanged and the value is handed back.
    pub fn insert_at(&mut self, store: &mut S, index: usize, value: T) -> Result<K, OutOfRange<T>> {
        if index == 0 {
            let mut node = Node::new(value);
            node.next = self.head;
            let key = store.insert(node);
            self.head = key;
            return Ok(key);
        }

        let Some(prev) = self.key_at(store, index - 1) else {
            return Err(OutOfRange(value));
        };

        // Safety: key_at only returns reachable keys
        let after = unsafe { store.get_unchecked(prev) }.next;
        let mut node = Node::new(value);
        node.next = after;
        let key = store.insert(node);
        // Safety: prev is still reachable, insert does not touch links
        unsafe { store.get_unchecked_mut(prev) }.next = key;
        Ok(key)
    }

    /// Removes and returns the value at `index`.
    ///
    /// Index 0 pops the head. Interior indices splice the predecessor to
    /// the removed node's successor. Returns `None` if `index >= len` -
    /// including delete-at-0 on an empty list, which is a defined no-op.
    pub fn remove_at(&mut self, store: &mut S, index: usize) -> Option<T> {
        if index == 0 {
            if self.head.is_nil() {
                return None;
            }
            let old = self.head;
            // Safety: head is reachable
            self.head = unsafe { store.get_unchecked(old) }.next;
            return store.remove(old).map(|node| node.value);
        }

        let prev = self.key_at(store, index - 1)?;
        // Safety: key_at only returns reachable keys
        let cur = unsafe { store.get_unchecked(prev) }.next;
        if cur.is_nil() {
            // index == len
            return None;
        }

        // Safety: cur is prev's reachable successor
        let after = unsafe { store.get_unchecked(cur) }.next;
        unsafe { store.get_unchecked_mut(prev) }.next = after;
        store.remove(cur).map(|node| node.value)
    }

    /// Returns a reference to the value at `index`, or `None` past the end.
    pub fn get_at<'a>(&self, store: &'a S, index: usize) -> Option<&'a T>
    where
        K: 'a,
    {
        let key = self.key_at(store, index)?;
        // Safety: key_at only returns reachable keys
        Some(unsafe { &store.get_unchecked(key).value })
    }

    /// Returns a mutable reference to the value at `index`, or `None` past
    /// the end.
    pub fn get_at_mut<'a>(&self, store: &'a mut S, index: usize) -> Option<&'a mut T>
    where
        K: 'a,
    {
        let key = self.key_at(store, index)?;
        // Safety: key_at only returns reachable keys
        Some(unsafe { &mut store.get_unchecked_mut(key).value })
    }

    /// Returns a reference to the value with the given key.
    #[inline]
    pub fn get<'a>(&self, store: &'a S, key: K) -> Option<&'a T>
    where
        K: 'a,
    {
        store.get(key).map(|node| &node.value)
    }

    /// Returns the key of the node at `index`, or `None` past the end.
    pub fn key_at(&self, store: &S, index: usize) -> Option<K> {
        let mut cur = self.head;
        let mut pos = 0;
        while cur.is_some() {
            if pos == index {
                return Some(cur);
            }
            // Safety: reachable keys resolve in the list's store
            cur = unsafe { store.get_unchecked(cur) }.next;
            pos += 1;
        }
        None
    }

    /// Sorts the list ascending by the value type's total order.
    ///
    /// See [`sort_by`](Self::sort_by).
    pub fn sort(&mut self, store: &mut S)
    where
        T: Ord,
    {
        self.sort_by(store, T::cmp);
    }

    /// Sorts the list by a comparator, swapping adjacent nodes by relinking.
    ///
    /// Bubble sort: full left-to-right passes splice a node's successor in
    /// front of it whenever `compare` reports `Greater`, until a pass makes
    /// no swap. Equal values are never reordered, so the sort is stable, and
    /// values never move between slots, so keys keep their meaning. O(n²)
    /// worst case; an already-sorted list finishes in one pass with zero
    /// swaps.
    ///
    /// `compare` must be a total order; an inconsistent comparator can leave
    /// the list in an arbitrary order but never breaks the chain structure.
    pub fn sort_by<F>(&mut self, store: &mut S, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.head.is_nil() {
            return;
        }
        // Safety: head is reachable
        if unsafe { store.get_unchecked(self.head) }.next.is_nil() {
            return;
        }

        loop {
            let mut swapped = false;
            let mut prev = K::NIL;
            let mut cur = self.head;

            loop {
                // Safety: cur stays reachable throughout the pass
                let next = unsafe { store.get_unchecked(cur) }.next;
                if next.is_nil() {
                    break;
                }

                let greater = {
                    // Safety: cur and next are both reachable
                    let a = unsafe { store.get_unchecked(cur) };
                    let b = unsafe { store.get_unchecked(next) };
                    compare(&a.value, &b.value) == Ordering::Greater
                };

                if greater {
                    swapped = true;

                    // Splice `next` in front of `cur`; the values stay put.
                    // Safety: cur and next are both reachable
                    let after = unsafe { store.get_unchecked(next) }.next;
                    unsafe { store.get_unchecked_mut(cur) }.next = after;
                    unsafe { store.get_unchecked_mut(next) }.next = cur;

                    if prev.is_nil() {
                        self.head = next;
                    } else {
                        // Safety: prev was visited earlier this pass
                        unsafe { store.get_unchecked_mut(prev) }.next = next;
                    }

                    // `next` is now first of the swapped pair; `cur` is
                    // unchanged and gets compared against its new successor.
                    prev = next;
                } else {
                    prev = cur;
                    cur = next;
                }
            }

            if !swapped {
                break;
            }
        }
    }

    /// Unlinks and removes every node from the store.
    pub fn clear(&mut self, store: &mut S) {
        let mut cur = self.head;
        self.head = K::NIL;
        while cur.is_some() {
            // Safety: cur was reachable before the removals started
            let next = unsafe { store.get_unchecked(cur) }.next;
            store.remove(cur);
            cur = next;
        }
    }

    /// Returns an iterator over references to values, head to tail.
    ///
    /// `iter(store).enumerate()` yields the `(position, value)` pairs a
    /// renderer needs to draw the chain.
    #[inline]
    pub fn iter<'a>(&self, store: &'a S) -> Iter<'a, T, S, K> {
        Iter {
            store,
            cur: self.head,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over node keys, head to tail.
    #[inline]
    pub fn keys<'a>(&self, store: &'a S) -> Keys<'a, T, S, K> {
        Keys {
            store,
            cur: self.head,
            _marker: PhantomData,
        }
    }

    /// Writes every value as a `[value] ` fragment in traversal order.
    ///
    /// Backs the `List[[a] [b] ]` diagnostic rendering of
    /// [`OwnedList`](crate::OwnedList).
    pub fn write_chain(&self, store: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Display,
    {
        for value in self.iter(store) {
            write!(f, "[{value}] ")?;
        }
        Ok(())
    }
}

/// Iterator over references to list values.
pub struct Iter<'a, T, S, K: Key> {
    store: &'a S,
    cur: K,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Iter<'a, T, S, K>
where
    S: Store<Node<T, K>, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.is_nil() {
            return None;
        }

        // Safety: list invariants guarantee cur is valid
        let node = unsafe { self.store.get_unchecked(self.cur) };
        self.cur = node.next;
        Some(&node.value)
    }
}

/// Iterator over node keys in traversal order.
pub struct Keys<'a, T, S, K: Key> {
    store: &'a S,
    cur: K,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Keys<'a, T, S, K>
where
    S: Store<Node<T, K>, Key = K>,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.is_nil() {
            return None;
        }

        let key = self.cur;
        // Safety: list invariants guarantee cur is valid
        self.cur = unsafe { self.store.get_unchecked(key) }.next;
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &List<u64, ArenaStore<u64>>, store: &ArenaStore<u64>) -> Vec<u64> {
        list.iter(store).copied().collect()
    }

    #[test]
    fn new_is_empty() {
        let store: ArenaStore<u64> = ArenaStore::new();
        let list: List<u64, _> = List::new();

        assert!(list.is_empty());
        assert_eq!(list.len(&store), 0);
        assert!(list.head().is_nil());
    }

    #[test]
    fn push_back_builds_in_order() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.push_back(&mut store, 1);
        list.push_back(&mut store, 2);
        list.push_back(&mut store, 3);

        assert_eq!(list.len(&store), 3);
        assert_eq!(collect(&list, &store), vec![1, 2, 3]);
    }

    #[test]
    fn len_matches_append_count() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        for i in 0..100 {
            list.push_back(&mut store, i);
            assert_eq!(list.len(&store), (i + 1) as usize);
        }
    }

    #[test]
    fn get_at_walks_positions() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        for i in 10..15 {
            list.push_back(&mut store, i);
        }

        for i in 0..5 {
            assert_eq!(list.get_at(&store, i), Some(&(10 + i as u64)));
        }
        assert_eq!(list.get_at(&store, 5), None);
        assert_eq!(list.get_at(&store, 1000), None);
    }

    #[test]
    fn get_at_mut() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.push_back(&mut store, 1);
        list.push_back(&mut store, 2);

        *list.get_at_mut(&mut store, 1).unwrap() = 20;
        assert_eq!(collect(&list, &store), vec![1, 20]);
    }

    #[test]
    fn insert_at_zero_becomes_head() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.push_back(&mut store, 1);
        list.push_back(&mut store, 2);
        list.push_back(&mut store, 3);

        list.insert_at(&mut store, 0, 0).unwrap();
        assert_eq!(collect(&list, &store), vec![0, 1, 2, 3]);
    }

    #[test]
    fn insert_at_zero_on_empty() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.insert_at(&mut store, 0, 42).unwrap();
        assert_eq!(collect(&list, &store), vec![42]);
    }

    #[test]
    fn insert_at_interior_splices() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.push_back(&mut store, 1);
        list.push_back(&mut store, 2);
        list.push_back(&mut store, 3);

        list.insert_at(&mut store, 2, 99).unwrap();
        assert_eq!(collect(&list, &store), vec![1, 2, 99, 3]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.push_back(&mut store, 1);
        list.push_back(&mut store, 2);

        list.insert_at(&mut store, 2, 3).unwrap();
        assert_eq!(collect(&list, &store), vec![1, 2, 3]);
    }

    #[test]
    fn insert_past_end_returns_value() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.push_back(&mut store, 1);

        let err = list.insert_at(&mut store, 5, 99).unwrap_err();
        assert_eq!(err.into_inner(), 99);
        assert_eq!(collect(&list, &store), vec![1]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_positive_index_on_empty_is_out_of_range() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        assert!(list.insert_at(&mut store, 1, 99).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn remove_at_zero_pops_head() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.push_back(&mut store, 1);
        list.push_back(&mut store, 2);
        list.push_back(&mut store, 3);

        assert_eq!(list.remove_at(&mut store, 0), Some(1));
        assert_eq!(collect(&list, &store), vec![2, 3]);
    }

    #[test]
    fn remove_at_interior_splices() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.push_back(&mut store, 1);
        list.push_back(&mut store, 2);
        list.push_back(&mut store, 3);

        assert_eq!(list.remove_at(&mut store, 1), Some(2));
        assert_eq!(collect(&list, &store), vec![1, 3]);
    }

    #[test]
    fn remove_at_last() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.push_back(&mut store, 1);
        list.push_back(&mut store, 2);

        assert_eq!(list.remove_at(&mut store, 1), Some(2));
        assert_eq!(collect(&list, &store), vec![1]);
    }

    #[test]
    fn remove_past_end_is_noop() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.push_back(&mut store, 1);
        list.push_back(&mut store, 2);

        assert_eq!(list.remove_at(&mut store, 2), None);
        assert_eq!(list.remove_at(&mut store, 100), None);
        assert_eq!(collect(&list, &store), vec![1, 2]);
    }

    #[test]
    fn remove_on_empty_is_noop() {
        let mut store: ArenaStore<u64> = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        assert_eq!(list.remove_at(&mut store, 0), None);
        assert!(list.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        let first = list.push_back(&mut store, 1);
        list.push_back(&mut store, 2);

        list.remove_at(&mut store, 0);
        let key = list.push_back(&mut store, 3);

        assert_eq!(key, first);
        assert_eq!(collect(&list, &store), vec![2, 3]);
    }

    #[test]
    fn sort_basic() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        for v in [3, 1, 2] {
            list.push_back(&mut store, v);
        }

        list.sort(&mut store);
        assert_eq!(collect(&list, &store), vec![1, 2, 3]);
    }

    #[test]
    fn sort_reversed() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        for v in (0..20).rev() {
            list.push_back(&mut store, v);
        }

        list.sort(&mut store);
        assert_eq!(collect(&list, &store), (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn sort_empty_and_single_are_noops() {
        let mut store: ArenaStore<u64> = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.sort(&mut store);
        assert!(list.is_empty());

        list.push_back(&mut store, 1);
        list.sort(&mut store);
        assert_eq!(collect(&list, &store), vec![1]);
    }

    #[test]
    fn sort_sorted_input_is_one_pass() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        for v in 0..10 {
            list.push_back(&mut store, v);
        }

        let mut comparisons = 0;
        list.sort_by(&mut store, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });

        // One pass over 10 nodes, no swaps, early exit
        assert_eq!(comparisons, 9);
        assert_eq!(collect(&list, &store), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn sort_is_idempotent() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        for v in [5, 3, 8, 1] {
            list.push_back(&mut store, v);
        }

        list.sort(&mut store);
        let once = collect(&list, &store);
        list.sort(&mut store);
        assert_eq!(collect(&list, &store), once);
    }

    #[test]
    fn sort_preserves_node_identity() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        let k3 = list.push_back(&mut store, 3);
        let k1 = list.push_back(&mut store, 1);
        let k2 = list.push_back(&mut store, 2);

        list.sort(&mut store);

        // Keys still name the same values; only the link order changed
        assert_eq!(list.get(&store, k1), Some(&1));
        assert_eq!(list.get(&store, k2), Some(&2));
        assert_eq!(list.get(&store, k3), Some(&3));
        assert_eq!(list.keys(&store).collect::<Vec<_>>(), vec![k1, k2, k3]);
    }

    #[test]
    fn sort_is_stable() {
        let mut store: ArenaStore<(u64, &str)> = ArenaStore::new();
        let mut list: List<(u64, &str), _> = List::new();

        list.push_back(&mut store, (2, "first-2"));
        list.push_back(&mut store, (1, "one"));
        list.push_back(&mut store, (2, "second-2"));

        list.sort_by(&mut store, |a, b| a.0.cmp(&b.0));

        let values: Vec<_> = list.iter(&store).map(|v| v.1).collect();
        assert_eq!(values, vec!["one", "first-2", "second-2"]);
    }

    #[test]
    fn sort_randomized_matches_vec_sort() {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        use rand::seq::SliceRandom;

        let mut rng = SmallRng::seed_from_u64(0xC0FFEE);

        for len in [0usize, 1, 2, 7, 32, 100] {
            let mut expected: Vec<u64> = (0..len as u64).collect();
            expected.shuffle(&mut rng);

            let mut store = ArenaStore::new();
            let mut list: List<u64, _> = List::new();
            for &v in &expected {
                list.push_back(&mut store, v);
            }

            expected.sort();
            list.sort(&mut store);

            assert_eq!(collect(&list, &store), expected);
        }
    }

    #[test]
    fn clear_empties_list_and_store() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        list.push_back(&mut store, 1);
        list.push_back(&mut store, 2);
        list.push_back(&mut store, 3);

        list.clear(&mut store);

        assert!(list.is_empty());
        assert_eq!(list.len(&store), 0);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn keys_follow_traversal_order() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        let a = list.push_back(&mut store, 1);
        let b = list.push_back(&mut store, 2);

        list.insert_at(&mut store, 0, 0).unwrap();
        let keys: Vec<_> = list.keys(&store).collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[1], a);
        assert_eq!(keys[2], b);
    }

    #[test]
    fn mixed_mutation_walks_stay_consistent() {
        let mut store = ArenaStore::new();
        let mut list: List<u64, _> = List::new();

        for v in 0..8 {
            list.push_back(&mut store, v);
        }

        list.remove_at(&mut store, 3);
        list.insert_at(&mut store, 5, 50).unwrap();
        list.remove_at(&mut store, 0);

        assert_eq!(collect(&list, &store), vec![1, 2, 4, 5, 50, 6, 7]);
        assert_eq!(list.len(&store), 7);
    }

    #[cfg(feature = "slab")]
    mod slab_backend {
        use super::*;
        use crate::SlabStore;

        #[test]
        fn list_over_slab_storage() {
            let mut store: SlabStore<u64> = slab::Slab::new();
            let mut list: List<u64, SlabStore<u64>, usize> = List::new();

            list.push_back(&mut store, 2);
            list.push_back(&mut store, 1);
            list.insert_at(&mut store, 0, 3).unwrap();
            list.sort(&mut store);

            let values: Vec<_> = list.iter(&store).copied().collect();
            assert_eq!(values, vec![1, 2, 3]);
        }
    }
}

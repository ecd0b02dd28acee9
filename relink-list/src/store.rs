//! Slab-like storage with stable keys.
//!
//! A [`Store`] hands out a stable key per inserted value; the key remains
//! valid until that value is explicitly removed. Node-based structures hold
//! keys instead of pointers, which keeps them free of lifetimes and lets
//! several structures share one pool.
//!
//! Storage here is unbounded: lists have no capacity limit, so `insert` is
//! infallible and backends grow on demand.

use crate::Key;

/// Growable slab-like storage with stable keys.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations
/// - **Slot reuse**: removed slots can be reused by future inserts
///
/// # Implementations
///
/// - [`Arena<T>`] - `Vec`-backed with an intrusive free list (in this crate)
/// - `slab::Slab<T>` - the `slab` crate (feature `slab`)
pub trait Store<T> {
    /// Key type handed out by this store.
    type Key: Key;

    /// Inserts a value, returning its stable key.
    fn insert(&mut self, value: T) -> Self::Key;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns the number of stored values.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all values, invalidating every outstanding key.
    fn clear(&mut self);

    /// Returns a reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `key` must refer to an occupied slot.
    unsafe fn get_unchecked(&self, key: Self::Key) -> &T;

    /// Returns a mutable reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `key` must refer to an occupied slot.
    unsafe fn get_unchecked_mut(&mut self, key: Self::Key) -> &mut T;
}

// =============================================================================
// Arena - Vec-backed slots with an intrusive free list
// =============================================================================

enum Slot<T, K: Key> {
    Occupied(T),
    Vacant { next_free: K },
}

/// Growable storage backed by a `Vec` of slots.
///
/// Vacant slots form an intrusive free list, so removed slots are reused
/// LIFO before the backing `Vec` grows.
///
/// # Example
///
/// ```
/// use relink_list::{Arena, Store};
///
/// let mut arena: Arena<u64> = Arena::new();
///
/// let key = arena.insert(42);
/// assert_eq!(arena.get(key), Some(&42));
///
/// assert_eq!(arena.remove(key), Some(42));
/// assert_eq!(arena.get(key), None);
/// ```
pub struct Arena<T, K: Key = u32> {
    slots: Vec<Slot<T, K>>,
    free_head: K,
    len: usize,
}

impl<T, K: Key> Arena<T, K> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: K::NIL,
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` values before
    /// the backing `Vec` reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: K::NIL,
            len: 0,
        }
    }

    /// Returns the number of slots the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<T, K: Key> Default for Arena<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> Store<T> for Arena<T, K> {
    type Key = K;

    #[inline]
    fn insert(&mut self, value: T) -> K {
        self.len += 1;

        if self.free_head.is_some() {
            let key = self.free_head;
            let slot = &mut self.slots[key.as_usize()];
            match *slot {
                Slot::Vacant { next_free } => {
                    self.free_head = next_free;
                    *slot = Slot::Occupied(value);
                    key
                }
                // free_head only ever points at vacant slots
                Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
            }
        } else {
            assert!(
                self.slots.len() < K::NIL.as_usize(),
                "arena exceeds key type maximum"
            );
            self.slots.push(Slot::Occupied(value));
            K::from_usize(self.slots.len() - 1)
        }
    }

    #[inline]
    fn remove(&mut self, key: K) -> Option<T> {
        let slot = self.slots.get_mut(key.as_usize())?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }

        let old = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = key;
        self.len -= 1;

        match old {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        match self.slots.get(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free_head = K::NIL;
        self.len = 0;
    }

    #[inline]
    unsafe fn get_unchecked(&self, key: K) -> &T {
        unsafe { self.get(key).unwrap_unchecked() }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: K) -> &mut T {
        unsafe { self.get_mut(key).unwrap_unchecked() }
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Store<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn insert(&mut self, value: T) -> usize {
        self.insert(value)
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        self.get(key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.get_mut(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        self.clear()
    }

    #[inline]
    unsafe fn get_unchecked(&self, key: usize) -> &T {
        unsafe { self.get(key).unwrap_unchecked() }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: usize) -> &mut T {
        unsafe { self.get_mut(key).unwrap_unchecked() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let arena: Arena<u64> = Arena::new();
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn insert_get_remove() {
        let mut arena: Arena<u64> = Arena::new();

        let key = arena.insert(42);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(key), Some(&42));

        assert_eq!(arena.remove(key), Some(42));
        assert_eq!(arena.get(key), None);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn get_mut() {
        let mut arena: Arena<u64> = Arena::new();

        let key = arena.insert(10);
        *arena.get_mut(key).unwrap() = 20;

        assert_eq!(arena.get(key), Some(&20));
    }

    #[test]
    fn slot_reuse_is_lifo() {
        let mut arena: Arena<u64> = Arena::new();

        let k0 = arena.insert(0);
        let k1 = arena.insert(1);
        let _k2 = arena.insert(2);

        arena.remove(k0);
        arena.remove(k1);

        // Most recently freed slot comes back first
        assert_eq!(arena.insert(10), k1);
        assert_eq!(arena.insert(11), k0);
    }

    #[test]
    fn double_remove_returns_none() {
        let mut arena: Arena<u64> = Arena::new();

        let key = arena.insert(42);
        arena.remove(key);

        assert_eq!(arena.remove(key), None);
    }

    #[test]
    fn remove_bogus_key() {
        let mut arena: Arena<u64> = Arena::new();
        arena.insert(1);

        assert_eq!(arena.remove(999), None);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn clear_invalidates_keys() {
        let mut arena: Arena<u64> = Arena::new();

        let key = arena.insert(1);
        arena.insert(2);
        arena.clear();

        assert!(arena.is_empty());
        assert_eq!(arena.get(key), None);
    }

    #[test]
    fn drop_runs_for_stored_values() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        struct DropCounter;
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);

        {
            let mut arena: Arena<DropCounter> = Arena::new();
            arena.insert(DropCounter);
            arena.insert(DropCounter);
            arena.insert(DropCounter);
        }

        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn u16_keys() {
        let mut arena: Arena<u64, u16> = Arena::new();

        let key = arena.insert(42);
        assert_eq!(arena.get(key), Some(&42));
    }

    #[cfg(feature = "slab")]
    mod slab_tests {
        use super::*;

        #[test]
        fn insert_get_remove() {
            let mut store = slab::Slab::new();

            let key = Store::insert(&mut store, 42u64);
            assert_eq!(Store::get(&store, key), Some(&42));

            assert_eq!(Store::remove(&mut store, key), Some(42));
            assert_eq!(Store::get(&store, key), None);
        }

        #[test]
        fn slot_reuse() {
            let mut store = slab::Slab::new();

            let k1 = Store::insert(&mut store, 1u64);
            Store::remove(&mut store, k1);

            let k2 = Store::insert(&mut store, 2u64);
            assert_eq!(k1, k2);
        }
    }
}

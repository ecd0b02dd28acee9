//! Chain node: one value plus the key of its successor.

use crate::Key;

/// A node in a singly-linked chain.
///
/// Wraps a value with the key of the next node; `K::NIL` marks the tail.
/// Nodes live in a [`Store`](crate::Store) and are an implementation detail
/// of [`List`](crate::List) - callers see `&T` and `&mut T` through the
/// list's accessors, and node keys only as opaque identity handles.
#[derive(Debug)]
pub struct Node<T, K: Key = u32> {
    pub(crate) value: T,
    pub(crate) next: K,
}

impl<T, K: Key> Node<T, K> {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            next: K::NIL,
        }
    }

    /// Returns a reference to the value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the successor's key, or `K::NIL` at the tail.
    #[inline]
    pub fn next(&self) -> K {
        self.next
    }
}

//! Sentinel key trait for store indices.
//!
//! Chain links are stored as plain integers with a reserved sentinel value
//! standing in for "no node", instead of `Option<K>`. This keeps a node at
//! two words for `u32` keys and makes a tail check a single compare.

/// A copyable store index with a reserved sentinel value.
///
/// # Example
///
/// ```
/// use relink_list::Key;
///
/// let key: u32 = 7;
/// assert!(key.is_some());
/// assert!(u32::NIL.is_nil());
/// ```
///
/// # Custom Key Types
///
/// Strongly-typed handles can participate by reserving their own sentinel:
///
/// ```
/// use relink_list::Key;
///
/// #[derive(Copy, Clone, PartialEq, Eq)]
/// struct SlotId(u32);
///
/// impl Key for SlotId {
///     const NIL: Self = SlotId(u32::MAX);
///
///     fn from_usize(val: usize) -> Self {
///         SlotId(val as u32)
///     }
///
///     fn as_usize(self) -> usize {
///         self.0 as usize
///     }
/// }
/// ```
pub trait Key: Copy + Eq {
    /// Sentinel standing in for "no node" / empty link.
    ///
    /// For integer types this is `MAX`, which is therefore never a valid
    /// slot position.
    const NIL: Self;

    /// Creates a key from a slot position.
    fn from_usize(val: usize) -> Self;

    /// Returns the slot position for this key.
    fn as_usize(self) -> usize;

    /// Returns `true` if this is the sentinel.
    #[inline]
    fn is_nil(self) -> bool {
        self == Self::NIL
    }

    /// Returns `true` if this is a real key.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_nil()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NIL: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u16, u32, usize);

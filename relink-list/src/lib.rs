//! Singly-linked list with index-addressed mutation over slab-like storage.
//!
//! This crate separates storage from structure: nodes live in a slab-like
//! [`Store`] that hands out stable keys, and the [`List`] coordinates keys
//! by rewiring `next` links. Every mutation - positional insert, positional
//! delete, sort - is a splice: links move, values never do.
//!
//! ```text
//! Store (Arena/Slab) - owns the nodes, provides stable keys
//! List               - holds the head key, rewires links
//! ```
//!
//! Benefits:
//! - **No pointer cycles to fight**: links are plain integer keys with a
//!   sentinel, so the borrow checker never sees a self-referential type
//! - **Iterative everywhere**: traversal, length, and drop are loops, not
//!   recursion, so chain length never threatens the call stack
//! - **Stable identity**: a key returned by `append` still names the same
//!   value after the list is re-ordered by `sort`
//! - **Shared pools**: several lists can coordinate keys into one store
//!
//! # Quick Start
//!
//! For the common case of one list owning its own storage, use
//! [`OwnedList`]:
//!
//! ```
//! use relink_list::OwnedList;
//!
//! let mut list: OwnedList<&str> = OwnedList::new();
//!
//! list.append("c");
//! list.append("a");
//! list.insert(1, "b").unwrap();
//!
//! list.sort();
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, ["a", "b", "c"]);
//! assert_eq!(list.to_string(), "List[[a] [b] [c] ]");
//! ```
//!
//! # Positional Contract
//!
//! Positions are 0-based over traversal order and validated on every call:
//!
//! | Operation | In range | Past the end |
//! |-----------|----------|--------------|
//! | `insert(i, v)` | splices, `i == len` appends | `Err(OutOfRange(v))` |
//! | `delete(i)` | returns the value | `None` (incl. empty list) |
//! | `retrieve(i)` | returns `&value` | `None` |
//!
//! Absence is the designed signal for reads past the end; only mutations
//! that would need a nonexistent predecessor report an error, and the error
//! carries the rejected value back.
//!
//! # Rendering
//!
//! `iter().enumerate()` yields `(position, value)` pairs in traversal
//! order - everything an external renderer needs to draw the chain as a
//! left-to-right diagram. The `relink-dot` crate builds Graphviz DOT text
//! on top of exactly this surface.
//!
//! # Storage Options
//!
//! | Store | Growth | Use case |
//! |-------|--------|----------|
//! | [`Arena`] | `Vec`-backed, free-list reuse | Default choice |
//! | `slab::Slab` | The `slab` crate | Shared slab-based pools |
//!
//! Enable the `slab` feature for the `slab::Slab` backend.
//!
//! # Feature Flags
//!
//! - `slab` - [`Store`] impl for `slab::Slab` and the [`SlabStore`] alias

#![warn(missing_docs)]

pub mod key;
pub mod list;
pub mod node;
pub mod owned;
pub mod store;

pub use key::Key;
pub use list::{ArenaStore, Iter, Keys, List, OutOfRange};
pub use node::Node;
pub use owned::OwnedList;
pub use store::{Arena, Store};

#[cfg(feature = "slab")]
pub use list::SlabStore;

//! This crate provides a doubly-linked list with arena-backed nodes and a
//! bidirectional editing cursor.
//!
//! The [`List`] allows inserting and removing elements at the position of a
//! cursor in constant time. In compromise, a cursor is positioned by walking
//! from the head, so reaching index *i* takes *O*(*i*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cursor_list::List;
//!
//! let mut list = List::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(4);
//!
//! // Open a cursor before the element at index 2
//! let mut cursor = list.cursor_mut(2).unwrap();
//!
//! cursor.insert(3); // becomes [1, 2, 3, 4]
//! assert_eq!(cursor.move_next(), Some(&4));
//! assert_eq!(cursor.replace(5), Ok(4)); // becomes [1, 2, 3, 5]
//!
//! assert_eq!(cursor.move_prev(), Some(&5));
//! assert_eq!(cursor.move_prev(), Some(&3));
//! assert_eq!(cursor.remove(), Ok(3)); // becomes [1, 2, 5]
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 5]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!                slots[0]          slots[3]          slots[1]
//!    first ──→ ╔═══════════╗     ╔═══════════╗     ╔═══════════╗
//!              ║ next = 3  ║ ──→ ║ next = 1  ║ ──→ ║ next = -  ║
//!              ╟───────────╢     ╟───────────╢     ╟───────────╢
//!              ║ prev = -  ║ ←── ║ prev = 0  ║ ←── ║ prev = 3  ║
//!              ╟───────────╢     ╟───────────╢     ╟───────────╢
//!              ║ element T ║     ║ element T ║     ║ element T ║
//!              ╚═══════════╝     ╚═══════════╝     ╚═══════════╝
//!
//!    free ──→ slots[2] (vacant) ──→ -
//! ```
//! The `List` contains:
//! - the slots of the node arena. A slot either holds a node or is vacant;
//!   vacant slots are chained into a free list and reused by insertions;
//! - the link `first` to the first node, or `-` if the list is empty;
//! - a length field `len` indicating the length of the list. It can be disabled
//!   by disabling the `length` feature in your `Cargo.toml`, after which the
//!   length is counted by walking the chain:
//! ```text
//! [dependencies]
//! cursor_list = { default-features = false }
//! ```
//!
//! Links are slot indices, never pointers, so the list owns every node
//! exactly once and the `prev` links are plain back references. The chain is
//! linear: the first node has no `prev` and the last node has no `next`.
//!
//! # Cursors
//!
//! A cursor sits in a *gap* between two adjacent elements (or before the
//! first / after the last). In a list with length *n*, there are *n* + 1
//! gaps, indexed by 0, 1, ..., *n*.
//!
//! - [`move_next`] / [`move_prev`]: step over one element and return it, or
//!   return `None` at either end;
//! - [`insert`]: insert an element before the cursor;
//! - [`remove`]: remove the element returned by the last move;
//! - [`replace`]: replace the element returned by the last move.
//!
//! [`remove`] and [`replace`] need a preceding successful move: they fail
//! with [`ListError::InvalidState`] on a fresh cursor, or after an insertion
//! or a removal, and with [`ListError::Unsupported`] on an empty list.
//!
//! ```
//! use cursor_list::{List, ListError};
//!
//! let mut list = List::new();
//! list.push_back('a');
//! list.push_back('b');
//!
//! let mut cursor = list.cursor_mut(1).unwrap();
//! assert_eq!(cursor.remove(), Err(ListError::InvalidState));
//!
//! assert_eq!(cursor.move_prev(), Some(&'a'));
//! assert_eq!(cursor.remove(), Ok('a'));
//! assert_eq!(cursor.remove(), Err(ListError::InvalidState));
//!
//! assert_eq!(cursor.move_next(), Some(&'b'));
//! assert_eq!(cursor.remove(), Ok('b'));
//! assert_eq!(cursor.move_next(), None);
//! assert_eq!(cursor.remove(), Err(ListError::Unsupported));
//! ```
//!
//! # Sequential Algorithms
//!
//! The [`SequentialList`] trait describes collections that are only
//! reachable through their cursors, and provides indexed replace, insert and
//! remove on top of a [`ListCursorMut`], and search on top of a read-only
//! [`ListCursor`].
//!
//! [`List`]: crate::List
//! [`move_next`]: crate::list::cursor::CursorMut::move_next
//! [`move_prev`]: crate::list::cursor::CursorMut::move_prev
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`replace`]: crate::list::cursor::CursorMut::replace

pub use error::{ListError, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;
pub use sequential::{ListCursor, ListCursorMut, SequentialList};

pub mod list;
pub mod sequential;

mod error;

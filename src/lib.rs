//! This crate provides a doubly-linked list with owned nodes, implemented as a
//! cyclic list around a sentinel node.
//!
//! The [`List`] allows inserting, erasing elements at any given position in
//! constant time. In compromise, reaching an element at any position takes
//! *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&0));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 3, 4]));
//!
//! assert!(cursor.seek_to(3).is_ok()); // move the cursor to index 3, and erase it.
//! assert_eq!(cursor.erase(), Ok(3));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 4]));
//!
//! assert_eq!(list.remove(&1), 1);
//! assert_eq!(Vec::from_iter(list), vec![0, 2, 4]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                  (Sentinel) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║    seq    ║           ║    seq    ║                        │  seq = 0  │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ element T ║           ║ element T ║                        ┊ (uninit)  ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║ sentinel  ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╟───────────╢
//! ║ next_seq  ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `sentinel` that points to the sentinel node;
//! - a length field `len` indicating the length of the list;
//! - a counter `next_seq` for stamping inserted nodes.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the sentinel node if
//!   it is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the sentinel node
//!   if it is the first element in the list);
//! - the sequence number `seq` stamped on the node when it was inserted, unique
//!   within the list (the sentinel node has `0`), which lets a [`Position`]
//!   tell its node apart from a later node at the same address;
//! - the element `T`, except the sentinel node whose element slot is never
//!   initialized, so `T` needs no default value.
//!
//! Initially, there is a sentinel node in an empty list, of which the `next` and
//! `prev` pointer point to itself.
//!
//! As elements are inserted into the list, `sentinel.next` points to the first
//! element, and `sentinel.prev` points to the last element of the list.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the sentinel node is always indexed by *n*. (In an empty list,
//! the sentinel node is indexed by 0, which is equal to its length 0).
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//! [`IterMut`] provides mutability of the elements (but not the linked structure of
//! the list).
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] name one node of a list, the
//! sentinel included, and can move forward or backward over it. In a list
//! with length *n*, there are *n* + 1 valid locations for the cursor, indexed
//! by 0, 1, ..., *n*, where *n* is the sentinel node of the list. Moving is
//! cyclic: stepping forward from the sentinel wraps to the first element.
//!
//! A [`Cursor`] is `Copy` and reads the list. A [`CursorMut`] edits it:
//! - [`insert`]: insert a new element before the cursor, and move onto it;
//! - [`erase`]: erase the element at the cursor, and move to its follower;
//! - [`erase_until`]: erase the elements from the cursor up to a [`Position`].
//!
//! A [`Position`] names a node without borrowing the list, so it can be kept
//! across edits and turned back into a cursor with [`List::cursor_at`].
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::{List, ListError};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//! let four = list.cursor(3).position();
//!
//! let mut cursor = list.cursor_start_mut();
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 5
//! cursor.move_next();
//! assert_eq!(cursor.erase(), Ok(1)); // becomes [5, 2, 3, 4], points to 2
//!
//! assert_eq!(cursor.erase_until(four), Ok(2)); // becomes [5, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! cursor.move_to_end();
//! assert_eq!(cursor.erase(), Err(ListError::InvalidErase));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 4]);
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`Position`]: crate::list::cursor::Position
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`erase`]: crate::list::cursor::CursorMut::erase
//! [`erase_until`]: crate::list::cursor::CursorMut::erase_until

#[doc(inline)]
pub use error::ListError;
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut, Position};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;

//! This crate provides a doubly-linked list with owned nodes and stable
//! cursors, implemented as a slot arena.
//!
//! The [`List`] allows inserting and removing elements at any given position
//! in constant time. In compromise, accessing or mutating elements at any
//! position takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use slot_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let start = list.cursor_start_mut();
//! let zero = list.insert(start, 0).unwrap(); // [0, 1, 2, 3, 4]
//! assert_eq!(list.get(zero), Ok(&0));
//!
//! let end = list.cursor_end_mut();
//! let three = list.pred(list.pred(end).unwrap()).unwrap();
//! let four = list.erase(three).unwrap(); // [0, 1, 2, 4]
//! assert_eq!(list.get(four), Ok(&4));
//!
//! list.push_front(5); // [5, 0, 1, 2, 4]
//! assert_eq!(Vec::from_iter(list), vec![5, 0, 1, 2, 4]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!              ┌─────────────────────────────────────────────┐
//!              │                                             ↓
//!    ╔═════════╧═╗           ╔═══════════╗             ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ──→ ┄┄ ──→  ║   next    ║ ─┐
//!    ╟───────────╢           ╟───────────╢  data nodes ╟───────────╢  │
//!    ║   prev    ║ ←──────── ║   prev    ║ ←── ┄┄ ←──  ║   prev    ║  │
//!    ╟───────────╢           ╟───────────╢             ╟───────────╢  │
//!    ┊no payload ┊           ║ payload T ║             ┊no payload ┊  │
//!    ╚═══════════╝           ╚═══════════╝             ╚═════╤═════╝  │
//!     slot 0: HEAD              slot 2+                slot 1: TAIL   │
//!              ↑                                             └───────┘
//!              └──── prev of HEAD and next of TAIL are self-links
//! ```
//!
//! The `List` owns one `Vec` of slots. Slots 0 and 1 are the two permanent
//! sentinels `HEAD` and `TAIL`; they carry no payload and bracket the chain
//! for the whole lifetime of the list. Every other occupied slot is a data
//! node holding `prev` and `next` slot indices and a payload `T`. Vacated
//! slots are threaded on a free-list and reused by later insertions, so the
//! arena does not grow under insert/remove churn. A length field is kept up
//! to date by every mutation, so [`len`] is *O*(1).
//!
//! Because links are indices into an arena the list owns, a position in the
//! list is just a small `Copy` token — see [`Cursor`] and [`CursorMut`] —
//! and every operation that takes one validates it first. The two ways an
//! operation can fail are captured by [`ListError`]: [`Empty`] when an
//! element is required and there is none, and [`InvalidCursor`] when a
//! cursor is foreign, dead, or out of bounds.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended iterators and iterate the list like an array (fused and
//! non-cyclic). [`IterMut`] provides mutability of the elements (but not the
//! linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use slot_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of addressing a list. In a list with length *n*, there are
//! *n* + 1 valid cursor positions: one per element, plus the one-past-last
//! position at the back sentinel ([`cursor_end`]).
//!
//! Cursors are stepped with [`succ`] and [`pred`], which are checked:
//! walking off either end of the list is an error, never a wrap-around.
//! Cursors stay pinned to their element across unrelated mutation and
//! across the rearranging algorithms ([`sort`], [`reverse`], ...), and die
//! with their element.
//!
//! ## Examples
//!
//! ```
//! use slot_list::{List, ListError};
//!
//! let mut list = List::from(['a', 'b', 'c']);
//!
//! let mut cursor = list.cursor_start();
//! assert_eq!(list.get(cursor), Ok(&'a'));
//!
//! cursor = list.succ(cursor).unwrap();
//! assert_eq!(list.get(cursor), Ok(&'b'));
//!
//! cursor = list.succ(list.succ(cursor).unwrap()).unwrap();
//! assert!(cursor == list.cursor_end());
//! assert_eq!(list.succ(cursor), Err(ListError::InvalidCursor));
//! ```
//!
//! # Algorithms
//!
//! The rearranging algorithms work by relinking nodes, never by moving
//! elements between slots, so cursors follow their elements:
//! - [`sort`] / [`sort_by`]: stable sort;
//! - [`merge`]: stable merge of two sorted lists, draining the other;
//! - [`reverse`]: reverse in place;
//! - [`unique`]: drop consecutive duplicates.
//!
//! ## Examples
//!
//! ```
//! use slot_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from([3, 1, 3, 2]);
//! list.sort();
//! list.unique();
//! list.reverse();
//! assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
//! ```
//!
//! [`len`]: crate::List::len
//! [`cursor_end`]: crate::List::cursor_end
//! [`succ`]: crate::List::succ
//! [`pred`]: crate::List::pred
//! [`sort`]: crate::List::sort
//! [`sort_by`]: crate::List::sort_by
//! [`merge`]: crate::List::merge
//! [`reverse`]: crate::List::reverse
//! [`unique`]: crate::List::unique
//! [`Empty`]: crate::ListError::Empty
//! [`InvalidCursor`]: crate::ListError::InvalidCursor

#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut, Position};
#[doc(inline)]
pub use list::error::ListError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;

use std::fmt::{Debug, Formatter};

use crate::list::cursor::{Cursor, CursorMut, ListId, Position};
use crate::list::error::ListError;
use crate::{Iter, IterMut};

pub mod cursor;
pub mod error;
pub mod iterator;

mod algorithms;

/// Index of the front sentinel slot.
pub(crate) const HEAD: usize = 0;
/// Index of the back sentinel slot.
pub(crate) const TAIL: usize = 1;

/// The `List` is a doubly-linked list with owned nodes and stable cursors,
/// stored in a slot arena. It allows inserting and removing elements at any
/// given position in constant time. In compromise, accessing or mutating
/// elements at any position takes *O*(*n*) time.
///
/// # Memory Layout
///
/// All nodes live in one `Vec` of slots owned by the list:
///
/// ```text
///   slot 0      slot 1      slot 2      slot 3      slot 4
/// ╔════════╗  ╔════════╗  ╔════════╗  ┌╌╌╌╌╌╌╌╌┐  ╔════════╗
/// ║  HEAD  ║  ║  TAIL  ║  ║ prev 0 ║  ┊  free  ┊  ║ prev 2 ║
/// ║ next 2 ║  ║ prev 4 ║  ║ next 4 ║  └╌╌╌╌╌╌╌╌┘  ║ next 1 ║
/// ║  ----  ║  ║  ----  ║  ║ elem T ║              ║ elem T ║
/// ╚════════╝  ╚════════╝  ╚════════╝              ╚════════╝
/// ```
///
/// Slots 0 and 1 are the two permanent sentinels: the front guard `HEAD`
/// and the back guard `TAIL`. They carry no element and exist for the whole
/// lifetime of the list, so boundary logic never special-cases an empty,
/// first or last node. Links are slot indices, never pointers. Erasing a
/// node pushes its slot onto an internal free-list; a later insertion pops
/// it back, so the arena does not grow under churn.
///
/// # Cursors
///
/// [`Cursor`] and [`CursorMut`] are `Copy` tokens recording a slot and the
/// identity of the list that minted them. They borrow nothing; every
/// access goes back through the list ([`get`], [`get_mut`], [`succ`],
/// [`pred`], [`insert`], [`erase`]), which first validates that the cursor
/// belongs to this list and references a live data node. Misuse is
/// reported with [`ListError::InvalidCursor`]; operations that need an
/// element on an empty list report [`ListError::Empty`]. No other error
/// conditions exist.
///
/// # Examples
///
/// ```
/// use slot_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::new();
/// list.push_back(1);
/// let two = list.push_back(2);
/// list.push_back(3);
///
/// // Cursors are stable across unrelated mutation.
/// list.push_front(0);
/// assert_eq!(list.get(two), Ok(&2));
///
/// // Erasing returns a cursor to the following node.
/// let three = list.erase(two).unwrap();
/// assert_eq!(list.get(three), Ok(&3));
///
/// assert_eq!(Vec::from_iter(list), vec![0, 1, 3]);
/// ```
///
/// [`get`]: List::get
/// [`get_mut`]: List::get_mut
/// [`succ`]: List::succ
/// [`pred`]: List::pred
/// [`insert`]: List::insert
/// [`erase`]: List::erase
pub struct List<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    len: usize,
    id: ListId,
}

/// One arena slot: either a chain node or a link in the free-list.
pub(crate) enum Slot<T> {
    Node(Node<T>),
    Free(Option<usize>),
}

/// A chain node. Sentinels hold no element; data nodes always do.
pub(crate) struct Node<T> {
    pub(crate) prev: usize,
    pub(crate) next: usize,
    pub(crate) element: Option<T>,
}

impl<T> Node<T> {
    fn into_element(self) -> T {
        match self.element {
            Some(element) => element,
            None => unreachable!("sentinel node detached from the chain"),
        }
    }
}

// Arena plumbing. The chain invariant maintained by everything below:
// every index reachable from HEAD by `next` links is an occupied slot,
// and `a.next == b` iff `b.prev == a`.
impl<T> List<T> {
    pub(crate) fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index] {
            Slot::Node(node) => node,
            Slot::Free(_) => unreachable!("chain links to a free slot"),
        }
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index] {
            Slot::Node(node) => node,
            Slot::Free(_) => unreachable!("chain links to a free slot"),
        }
    }

    pub(crate) fn element(&self, index: usize) -> &T {
        match &self.node(index).element {
            Some(element) => element,
            None => unreachable!("dereferenced a sentinel"),
        }
    }

    pub(crate) fn element_mut(&mut self, index: usize) -> &mut T {
        match &mut self.node_mut(index).element {
            Some(element) => element,
            None => unreachable!("dereferenced a sentinel"),
        }
    }

    pub(crate) fn connect(&mut self, prev: usize, next: usize) {
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
    }

    /// Store `node` in a vacant slot, reusing the free-list when possible.
    /// The node's links are garbage until the caller attaches it.
    pub(crate) fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.take() {
            Some(index) => {
                match std::mem::replace(&mut self.slots[index], Slot::Node(node)) {
                    Slot::Free(next_free) => self.free = next_free,
                    Slot::Node(_) => unreachable!("free-list links to an occupied slot"),
                }
                index
            }
            None => {
                self.slots.push(Slot::Node(node));
                self.slots.len() - 1
            }
        }
    }

    /// Vacate `index` and push it onto the free-list.
    fn release(&mut self, index: usize) -> Node<T> {
        match std::mem::replace(&mut self.slots[index], Slot::Free(self.free)) {
            Slot::Node(node) => {
                self.free = Some(index);
                node
            }
            Slot::Free(_) => unreachable!("released a free slot"),
        }
    }

    /// Splice the detached node at `index` between `prev` and `next`,
    /// which must be adjacent.
    pub(crate) fn attach_node(&mut self, prev: usize, next: usize, index: usize) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, index);
        self.connect(index, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, index);
            self.assert_adjacent(index, next);
        }
    }

    /// Unlink the data node at `index` from the chain and vacate its slot.
    pub(crate) fn detach_node(&mut self, index: usize) -> Node<T> {
        let (prev, next) = {
            let node = self.node(index);
            (node.prev, node.next)
        };
        self.connect(prev, next);
        self.len -= 1;
        self.release(index)
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.node(prev).next, next);
        assert_eq!(self.node(next).prev, prev);
    }

    /// Resolve a cursor to an occupied slot of this list, or fail.
    fn locate<P: Position>(&self, pos: P) -> Result<usize, ListError> {
        let index = pos.node();
        if pos.list() != self.id || index >= self.slots.len() {
            return Err(ListError::InvalidCursor);
        }
        match &self.slots[index] {
            Slot::Node(_) => Ok(index),
            Slot::Free(_) => Err(ListError::InvalidCursor),
        }
    }

    /// Like [`List::locate`], but the slot must be a data node (not a
    /// sentinel). This is the validation behind dereference and erase.
    fn locate_data<P: Position>(&self, pos: P) -> Result<usize, ListError> {
        let index = self.locate(pos)?;
        match self.node(index).element {
            Some(_) => Ok(index),
            None => Err(ListError::InvalidCursor),
        }
    }

    /// Like [`List::locate`], but for insertion anchors: any node except
    /// the front guard, so the one-past-last position is accepted.
    fn locate_anchor<P: Position>(&self, pos: P) -> Result<usize, ListError> {
        let index = self.locate(pos)?;
        if index == HEAD {
            return Err(ListError::InvalidCursor);
        }
        Ok(index)
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use slot_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    pub fn new() -> Self {
        let head = Node {
            prev: HEAD,
            next: TAIL,
            element: None,
        };
        let tail = Node {
            prev: HEAD,
            next: TAIL,
            element: None,
        };
        Self {
            slots: vec![Slot::Node(head), Slot::Node(tail)],
            free: None,
            len: 0,
            id: ListId::fresh(),
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`. The sentinels and the arena
    /// allocation survive; every data slot is released.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Ok(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert!(list.front().is_err());
    /// ```
    pub fn clear(&mut self) {
        self.slots.truncate(2);
        self.free = None;
        self.len = 0;
        self.connect(HEAD, TAIL);
    }

    /// Provides a reference to the first element, or fails with
    /// [`ListError::Empty`] if the list has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(ListError::Empty));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        Ok(self.element(self.node(HEAD).next))
    }

    /// Provides a mutable reference to the first element, or fails with
    /// [`ListError::Empty`] if the list has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    ///
    /// *list.front_mut().unwrap() = 5;
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let first = self.node(HEAD).next;
        Ok(self.element_mut(first))
    }

    /// Provides a reference to the last element, or fails with
    /// [`ListError::Empty`] if the list has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), Err(ListError::Empty));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    pub fn back(&self) -> Result<&T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        Ok(self.element(self.node(TAIL).prev))
    }

    /// Provides a mutable reference to the last element, or fails with
    /// [`ListError::Empty`] if the list has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    ///
    /// *list.back_mut().unwrap() = 5;
    /// assert_eq!(list.back(), Ok(&5));
    /// ```
    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let last = self.node(TAIL).prev;
        Ok(self.element_mut(last))
    }

    /// Provides a read-only cursor at the first data node, or at the
    /// one-past-last position when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.cursor_start() == list.cursor_end());
    ///
    /// list.push_back(1);
    /// assert_eq!(list.get(list.cursor_start()), Ok(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor {
        Cursor {
            node: self.node(HEAD).next,
            list: self.id,
        }
    }

    /// Provides a read-only cursor at the one-past-last position. This
    /// cursor references the back sentinel and is never dereferenceable.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    ///
    /// let end = list.cursor_end();
    /// assert_eq!(list.get(end), Err(ListError::InvalidCursor));
    /// assert_eq!(list.get(list.pred(end).unwrap()), Ok(&1));
    /// ```
    pub fn cursor_end(&self) -> Cursor {
        Cursor {
            node: TAIL,
            list: self.id,
        }
    }

    /// Like [`List::cursor_start`], but mints a cursor usable with the
    /// mutating operations.
    pub fn cursor_start_mut(&mut self) -> CursorMut {
        CursorMut {
            node: self.node(HEAD).next,
            list: self.id,
        }
    }

    /// Like [`List::cursor_end`], but mints a cursor usable with the
    /// mutating operations. This is the insertion anchor for appending:
    /// `insert(cursor_end_mut(), v)` is equivalent to `push_back(v)`.
    pub fn cursor_end_mut(&mut self) -> CursorMut {
        CursorMut {
            node: TAIL,
            list: self.id,
        }
    }

    /// Dereference a cursor of either kind.
    ///
    /// Fails with [`ListError::InvalidCursor`] if the cursor belongs to
    /// another list, references a freed slot, or references the
    /// one-past-last position.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// let one = list.push_back(1);
    ///
    /// assert_eq!(list.get(one), Ok(&1));
    ///
    /// let mut other = List::new();
    /// other.push_back(1);
    /// assert_eq!(other.get(one), Err(ListError::InvalidCursor));
    /// ```
    pub fn get<P: Position>(&self, pos: P) -> Result<&T, ListError> {
        let index = self.locate_data(pos)?;
        Ok(self.element(index))
    }

    /// Dereference a mutable cursor, yielding a mutable reference.
    ///
    /// Fails with [`ListError::InvalidCursor`] under the same conditions
    /// as [`List::get`].
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// let one = list.push_back(1);
    ///
    /// *list.get_mut(one).unwrap() += 9;
    /// assert_eq!(list.get(one), Ok(&10));
    /// ```
    pub fn get_mut(&mut self, pos: CursorMut) -> Result<&mut T, ListError> {
        let index = self.locate_data(pos)?;
        Ok(self.element_mut(index))
    }

    /// Step a cursor to the next position, preserving its kind.
    ///
    /// Stepping is checked: advancing a cursor already at the
    /// one-past-last position fails with [`ListError::InvalidCursor`]
    /// instead of wrapping around.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let first = list.cursor_start();
    /// let second = list.succ(first).unwrap();
    /// assert_eq!(list.get(second), Ok(&2));
    ///
    /// let end = list.succ(second).unwrap();
    /// assert!(end == list.cursor_end());
    /// assert!(list.succ(end).is_err());
    /// ```
    pub fn succ<P: Position>(&self, pos: P) -> Result<P, ListError> {
        let index = self.locate(pos)?;
        if index == TAIL {
            return Err(ListError::InvalidCursor);
        }
        Ok(P::assemble(self.node(index).next, self.id))
    }

    /// Step a cursor to the previous position, preserving its kind.
    ///
    /// Stepping is checked: retreating a cursor already at the first
    /// position fails with [`ListError::InvalidCursor`].
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let last = list.pred(list.cursor_end()).unwrap();
    /// assert_eq!(list.get(last), Ok(&2));
    ///
    /// let first = list.pred(last).unwrap();
    /// assert!(list.pred(first).is_err());
    /// ```
    pub fn pred<P: Position>(&self, pos: P) -> Result<P, ListError> {
        let index = self.locate(pos)?;
        let prev = self.node(index).prev;
        if prev == HEAD {
            return Err(ListError::InvalidCursor);
        }
        Ok(P::assemble(prev, self.id))
    }

    /// Insert `value` immediately before `pos` and return a cursor to the
    /// new node. `pos` may be the one-past-last position, in which case
    /// this appends.
    ///
    /// Fails with [`ListError::InvalidCursor`] if `pos` belongs to
    /// another list or references a freed slot; no links are touched on
    /// failure.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// let three = list.push_back(3);
    ///
    /// let two = list.insert(three, 2).unwrap();
    /// assert_eq!(list.get(two), Ok(&2));
    ///
    /// let end = list.cursor_end_mut();
    /// list.insert(end, 4).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, pos: CursorMut, value: T) -> Result<CursorMut, ListError> {
        let next = self.locate_anchor(pos)?;
        let prev = self.node(next).prev;
        let index = self.alloc(Node {
            prev,
            next,
            element: Some(value),
        });
        self.attach_node(prev, next, index);
        Ok(CursorMut {
            node: index,
            list: self.id,
        })
    }

    /// Remove the node referenced by `pos` and return a cursor to the node
    /// that followed it (the one-past-last position if it was last).
    ///
    /// Fails with [`ListError::Empty`] when the list has no elements —
    /// this check takes priority over cursor validation — and with
    /// [`ListError::InvalidCursor`] when `pos` is foreign, freed, or
    /// references a sentinel. No links are touched on failure.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// let one = list.push_back(1);
    /// list.push_back(2);
    ///
    /// let two = list.erase(one).unwrap();
    /// assert_eq!(list.get(two), Ok(&2));
    ///
    /// // The cursor to the erased node is dead.
    /// assert_eq!(list.get(one), Err(ListError::InvalidCursor));
    ///
    /// let end = list.erase(two).unwrap();
    /// assert!(end == list.cursor_end());
    /// assert_eq!(list.erase(end), Err(ListError::Empty));
    /// ```
    pub fn erase(&mut self, pos: CursorMut) -> Result<CursorMut, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let index = self.locate_data(pos)?;
        let next = self.node(index).next;
        drop(self.detach_node(index));
        Ok(CursorMut {
            node: next,
            list: self.id,
        })
    }

    /// Adds an element first in the list and returns its cursor.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, value: T) -> CursorMut {
        let next = self.node(HEAD).next;
        let index = self.alloc(Node {
            prev: HEAD,
            next,
            element: Some(value),
        });
        self.attach_node(HEAD, next, index);
        CursorMut {
            node: index,
            list: self.id,
        }
    }

    /// Appends an element to the back of the list and returns its cursor.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, value: T) -> CursorMut {
        let prev = self.node(TAIL).prev;
        let index = self.alloc(Node {
            prev,
            next: TAIL,
            element: Some(value),
        });
        self.attach_node(prev, TAIL, index);
        CursorMut {
            node: index,
            list: self.id,
        }
    }

    /// Removes the first element and returns it, or fails with
    /// [`ListError::Empty`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(ListError::Empty));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(ListError::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let first = self.node(HEAD).next;
        Ok(self.detach_node(first).into_element())
    }

    /// Removes the last element and returns it, or fails with
    /// [`ListError::Empty`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(ListError::Empty));
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let last = self.node(TAIL).prev;
        Ok(self.detach_node(last).into_element())
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure that `List` and its read-only iterators are covariant in their
// type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    use crate::IntoIter;
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::ListError;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);

        // clear() must release every element exactly once as well.
        let cleared = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &cleared));
        list.push_back(DropChecker::new(2, &cleared));
        list.clear();
        assert_eq!(cleared.borrow().as_slice(), &[1, 2]);
        assert!(list.is_empty());
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), Err(ListError::Empty));
        assert_eq!(list.back(), Err(ListError::Empty));
        assert_eq!(list.pop_front(), Err(ListError::Empty));
        assert_eq!(list.pop_back(), Err(ListError::Empty));

        list.push_back(1);
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(ListError::Empty));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));

        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.front(), Err(ListError::Empty));
        assert_eq!(list.back(), Err(ListError::Empty));
        assert!(list.is_empty());
    }

    #[test]
    fn size_matches_traversal() {
        // Under an arbitrary push/pop/insert/erase sequence, the stored
        // count must equal what forward traversal reaches.
        fn check(list: &List<i32>) {
            assert_eq!(list.len(), list.iter().count());
        }

        let mut list = List::new();
        check(&list);
        let a = list.push_back(1);
        let _b = list.push_back(2);
        check(&list);
        list.push_front(0);
        check(&list);
        let c = list.insert(a, 7).unwrap();
        check(&list);
        list.erase(a).unwrap();
        check(&list);
        assert_eq!(list.pop_back(), Ok(2));
        check(&list);
        list.erase(c).unwrap();
        check(&list);
        assert_eq!(list.pop_front(), Ok(0));
        check(&list);
        assert!(list.is_empty());
    }

    #[test]
    fn insert_and_erase_by_cursor() {
        let mut list = List::from_iter(0..5);

        // Insert before the third element.
        let mut pos = list.cursor_start_mut();
        pos = list.succ(pos).unwrap();
        pos = list.succ(pos).unwrap();
        let inserted = list.insert(pos, 10).unwrap();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 1, 10, 2, 3, 4]);

        // Erase it again; the returned cursor references the old anchor.
        let after = list.erase(inserted).unwrap();
        assert_eq!(list.get(after), Ok(&2));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 1, 2, 3, 4]);

        // Insert at the one-past-last position appends.
        let end = list.cursor_end_mut();
        list.insert(end, 5).unwrap();
        assert_eq!(list.back(), Ok(&5));
    }

    #[test]
    fn insert_at_end_is_push_back() {
        let mut by_insert = List::new();
        let mut by_push = List::new();
        for value in 0..4 {
            let end = by_insert.cursor_end_mut();
            by_insert.insert(end, value).unwrap();
            by_push.push_back(value);
        }
        assert_eq!(by_insert, by_push);
    }

    #[test]
    fn erase_last_yields_end() {
        let mut list = List::new();
        let only = list.push_back(42);
        let after = list.erase(only).unwrap();
        assert!(after == list.cursor_end_mut());
        assert!(list.is_empty());
    }

    #[test]
    fn foreign_and_stale_cursors_are_rejected() {
        let mut list = List::new();
        let mut other = List::new();
        list.push_back(1);
        let foreign = other.push_back(1);

        assert_eq!(list.erase(foreign), Err(ListError::InvalidCursor));
        assert_eq!(list.get(foreign), Err(ListError::InvalidCursor));
        assert_eq!(list.insert(foreign, 9), Err(ListError::InvalidCursor));
        assert_eq!(list.len(), 1);

        // A cursor dies with its node.
        let stale = other.erase(foreign).unwrap();
        assert_eq!(other.get(foreign), Err(ListError::InvalidCursor));
        assert_eq!(other.succ(foreign), Err(ListError::InvalidCursor));
        assert!(stale == other.cursor_end_mut());
    }

    #[test]
    fn empty_check_precedes_cursor_check() {
        let mut empty: List<i32> = List::new();
        let mut other = List::new();
        let foreign = other.push_back(1);

        // Erasing on an empty list reports Empty even for a foreign cursor.
        assert_eq!(empty.erase(foreign), Err(ListError::Empty));
        drop(other);
        let end = empty.cursor_end_mut();
        assert_eq!(empty.erase(end), Err(ListError::Empty));
    }

    #[test]
    fn sentinels_are_not_data() {
        let mut list = List::from_iter([1, 2, 3]);
        let end = list.cursor_end_mut();
        assert_eq!(list.get(end), Err(ListError::InvalidCursor));
        assert_eq!(list.erase(end), Err(ListError::InvalidCursor));
    }

    #[test]
    fn checked_stepping() {
        let mut list = List::from_iter([1, 2]);

        let first = list.cursor_start();
        assert_eq!(list.pred(first), Err(ListError::InvalidCursor));
        let second = list.succ(first).unwrap();
        let end = list.succ(second).unwrap();
        assert!(end == list.cursor_end());
        assert_eq!(list.succ(end), Err(ListError::InvalidCursor));
        assert!(list.pred(end).unwrap() == second);

        // On an empty list, start == end and neither direction works.
        let empty: List<i32> = List::new();
        let start = empty.cursor_start();
        assert!(start == empty.cursor_end());
        assert_eq!(empty.succ(start), Err(ListError::InvalidCursor));
        assert_eq!(empty.pred(start), Err(ListError::InvalidCursor));
    }

    #[test]
    fn slots_are_reused() {
        let mut list = List::new();
        for i in 0..8 {
            list.push_back(i);
        }
        for _ in 0..4 {
            list.pop_front().unwrap();
        }
        for i in 8..12 {
            list.push_back(i);
        }
        // Churn must not grow the arena past its high-water mark.
        assert_eq!(list.slots.len(), 2 + 8);
        assert_eq!(Vec::from_iter(list), vec![4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn clear_resets_arena() {
        let mut list = List::from_iter(0..10);
        let stale = list.cursor_start_mut();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.get(stale), Err(ListError::InvalidCursor));

        list.push_back(1);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.len(), 1);
    }
}

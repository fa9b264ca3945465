use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a `List` instance.
///
/// Cursors record the identity of the list that minted them, and every
/// cursor-taking operation checks it, so a cursor presented to the wrong
/// list is rejected instead of silently addressing a foreign arena. The
/// identity is drawn from a process-global counter, so it stays valid when
/// the list value itself is moved, and a clone gets a fresh identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

impl ListId {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        ListId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

pub(crate) mod sealed {
    use super::ListId;

    /// Raw access to a cursor's parts, shared by both cursor kinds so that
    /// stepping and splicing operations can preserve the kind they were
    /// given. Not nameable outside the crate.
    pub trait Sealed: Copy {
        fn node(self) -> usize;
        fn list(self) -> ListId;
        fn assemble(node: usize, list: ListId) -> Self;
    }
}

/// A position in a [`List`], usable with the list's cursor-taking read
/// operations ([`get`], [`succ`], [`pred`], ...).
///
/// This trait is sealed; it is implemented exactly by [`Cursor`] and
/// [`CursorMut`].
///
/// [`List`]: crate::List
/// [`get`]: crate::List::get
/// [`succ`]: crate::List::succ
/// [`pred`]: crate::List::pred
pub trait Position: sealed::Sealed {}

/// A read-only cursor into a `List`.
///
/// A cursor is a plain `Copy` token: a slot position paired with the
/// identity of the list that minted it. It borrows nothing, so it can be
/// stored freely and outlive any particular borrow of the list; in
/// exchange, every access goes back through the list, which validates the
/// cursor before honouring it.
///
/// A cursor stays pinned to its node across unrelated insertions,
/// removals and rearrangements. It is invalidated when its node is erased
/// (subsequent use fails with [`InvalidCursor`]), and a cursor retained
/// long enough for its slot to be recycled by a later insertion will
/// observe the new occupant — retiring cursors when their node is erased
/// is a caller obligation, not something the list can track.
///
/// # Examples
///
/// ```
/// use slot_list::List;
///
/// let mut list = List::new();
/// list.push_back('a');
/// let b = list.push_back('b');
/// list.push_back('c');
///
/// let b = slot_list::Cursor::from(b);
/// assert_eq!(list.get(b), Ok(&'b'));
///
/// // The cursor follows its node, not its position.
/// list.push_front('z');
/// list.reverse();
/// assert_eq!(list.get(b), Ok(&'b'));
/// ```
///
/// [`InvalidCursor`]: crate::ListError::InvalidCursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) node: usize,
    pub(crate) list: ListId,
}

/// A cursor into a `List` that may be presented to mutating operations
/// ([`get_mut`], [`insert`], [`erase`]).
///
/// Like [`Cursor`] this is a plain `Copy` token; the mutation authority
/// comes from the `&mut` borrow of the list at the call site, not from
/// the cursor itself. A `CursorMut` converts into a [`Cursor`] (via
/// `From`), never the other way round, and the two kinds compare equal
/// when they reference the same node of the same list.
///
/// # Examples
///
/// ```
/// use slot_list::{Cursor, List};
///
/// let mut list = List::new();
/// list.push_back(1);
/// let two = list.push_back(2);
/// list.push_back(3);
///
/// // Mutable and read-only cursors to the same node compare equal.
/// let frozen: Cursor = two.into();
/// assert!(frozen == two);
///
/// *list.get_mut(two).unwrap() = 20;
/// assert_eq!(list.get(frozen), Ok(&20));
/// ```
///
/// [`get_mut`]: crate::List::get_mut
/// [`insert`]: crate::List::insert
/// [`erase`]: crate::List::erase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorMut {
    pub(crate) node: usize,
    pub(crate) list: ListId,
}

impl sealed::Sealed for Cursor {
    fn node(self) -> usize {
        self.node
    }
    fn list(self) -> ListId {
        self.list
    }
    fn assemble(node: usize, list: ListId) -> Self {
        Cursor { node, list }
    }
}

impl Position for Cursor {}

impl sealed::Sealed for CursorMut {
    fn node(self) -> usize {
        self.node
    }
    fn list(self) -> ListId {
        self.list
    }
    fn assemble(node: usize, list: ListId) -> Self {
        CursorMut { node, list }
    }
}

impl Position for CursorMut {}

impl From<CursorMut> for Cursor {
    fn from(cursor: CursorMut) -> Self {
        Cursor {
            node: cursor.node,
            list: cursor.list,
        }
    }
}

impl PartialEq<CursorMut> for Cursor {
    fn eq(&self, other: &CursorMut) -> bool {
        self.node == other.node && self.list == other.list
    }
}

impl PartialEq<Cursor> for CursorMut {
    fn eq(&self, other: &Cursor) -> bool {
        self.node == other.node && self.list == other.list
    }
}

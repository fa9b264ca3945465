use crate::list::{List, HEAD, TAIL};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `List`.
///
/// It walks a pair of chain positions `front..back` toward each other,
/// so it serves both directions of [`DoubleEndedIterator`]; the remaining
/// length is tracked explicitly for [`ExactSizeIterator`].
///
/// # Examples
///
/// ```compile_fail
/// use slot_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    /// Next slot to yield from the front.
    front: usize,
    /// Slot most recently yielded from the back, or `TAIL`.
    back: usize,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            front: list.node(HEAD).next,
            back: TAIL,
            len: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let current = self.front;
        self.front = self.list.node(current).next;
        self.len -= 1;
        Some(self.list.element(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let current = self.list.node(self.back).prev;
        self.back = current;
        self.len -= 1;
        Some(self.list.element(current))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// Though the `IterMut` does not hold a reference to the list, it
/// *borrows* (mutably) from it, so a phantom marker of `&'a mut List<T>`
/// is added to keep the list untouchable while the iterator lives.
///
/// # Examples
///
/// ```compile_fail
/// use slot_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
///
/// // Won't compile, because list is already borrowed mutably.
/// println!("{:?}", list);
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    list: NonNull<List<T>>,
    front: usize,
    back: usize,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let front = list.node(HEAD).next;
        let len = list.len();
        Self {
            list: NonNull::from(list),
            front,
            back: TAIL,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: shared read access through the exclusive borrow the
        // iterator holds; no element reference handed out by `next` can
        // alias the chain links read here.
        let list = unsafe { self.list.as_ref() };
        let mut f = f.debug_tuple("IterMut");
        let mut current = self.front;
        let mut remaining = self.len;
        while remaining > 0 {
            f.field(list.element(current));
            current = list.node(current).next;
            remaining -= 1;
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let current = self.front;
        // SAFETY: the iterator mutably borrows the list for 'a, each data
        // slot is visited at most once, and chain links are never written
        // through the yielded references.
        let list = unsafe { &mut *self.list.as_ptr() };
        self.front = list.node(current).next;
        self.len -= 1;
        Some(list.element_mut(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: see `next`.
        let list = unsafe { &mut *self.list.as_ptr() };
        let current = list.node(self.back).prev;
        self.back = current;
        self.len -= 1;
        Some(list.element_mut(current))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: List::into_iter
#[derive(Clone)]
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator yielding elements by value.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn iterate() {
        let list = List::from_iter(0..10);
        assert!(Iterator::eq(list.iter(), &Vec::from_iter(0..10)));
        assert!(Iterator::eq(list.iter().rev(), &Vec::from_iter((0..10).rev())));
    }

    #[test]
    fn iterate_by_both_ends() {
        let list = List::from_iter(0..4);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        // Fused after exhaustion.
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iterate_mut() {
        let mut list = List::from_iter(0..10);
        list.iter_mut().for_each(|item| *item *= 2);
        assert!(Iterator::eq(list.iter(), &Vec::from_iter((0..10).map(|n| n * 2))));

        // Mutation through the back end as well.
        if let Some(last) = list.iter_mut().next_back() {
            *last = 100;
        }
        assert_eq!(list.back(), Ok(&100));
    }

    #[test]
    fn into_iterate() {
        let list = List::from_iter(0..10);
        assert!(Iterator::eq(list.into_iter(), 0..10));

        let list = List::from_iter(0..10);
        assert!(Iterator::eq(list.into_iter().rev(), (0..10).rev()));
    }

    #[test]
    fn extend_and_collect() {
        let mut list = List::from_iter(0..3);
        list.extend(3..6);
        list.extend(&[6, 7]);
        assert_eq!(Vec::from_iter(list), Vec::from_iter(0..8));

        let list = List::from([1, 2, 3]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Ok(&1));
    }

    #[test]
    fn size_hints_track_consumption() {
        let list = List::from_iter(0..5);
        let mut iter = list.iter();
        assert_eq!(iter.size_hint(), (5, Some(5)));
        iter.next();
        assert_eq!(iter.size_hint(), (4, Some(4)));

        let mut into = List::from_iter(0..5).into_iter();
        assert_eq!(into.size_hint(), (5, Some(5)));
        into.next_back();
        assert_eq!(into.size_hint(), (4, Some(4)));
    }
}

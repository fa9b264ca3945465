use crate::list::{List, Node, Slot, HEAD, TAIL};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Clones the elements into a fresh list. The clone gets its own
    /// arena and its own identity, so cursors of the original are not
    /// honoured by the clone.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

fn element_of<T>(slots: &[Slot<T>], index: usize) -> &T {
    match &slots[index] {
        Slot::Node(Node {
            element: Some(element),
            ..
        }) => element,
        _ => unreachable!("ordered a non-data slot"),
    }
}

impl<T> List<T> {
    /// Sorts the list, preserving the order of equal elements.
    ///
    /// Nodes are rearranged by relinking; elements never move between
    /// slots, so cursors keep referencing the same element afterwards.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* log *n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from([3, 1, 2]);
    /// list.sort();
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sorts the list with a comparator function, preserving the order
    /// of elements the comparator reports as equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from([3, 1, 2]);
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len() < 2 {
            return;
        }

        // Stage the data-node order in a buffer, sort it stably by the
        // elements, then rebuild the chain links in one pass.
        let mut order = Vec::with_capacity(self.len());
        let mut current = self.node(HEAD).next;
        while current != TAIL {
            order.push(current);
            current = self.node(current).next;
        }

        let slots = &self.slots;
        order.sort_by(|&a, &b| compare(element_of(slots, a), element_of(slots, b)));

        let mut prev = HEAD;
        for &index in &order {
            self.connect(prev, index);
            prev = index;
        }
        self.connect(prev, TAIL);
    }

    /// Moves all elements of `other` into `self`, interleaving them so
    /// that a sorted order is preserved when both lists are sorted.
    ///
    /// The merge is stable both ways: equal elements keep their relative
    /// order, and elements of `self` precede equal elements of `other`.
    /// `other` is left empty. Cursors of `self` remain valid; cursors of
    /// `other` do not follow the transferred elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut a = List::from([1, 3, 3, 5]);
    /// let mut b = List::from([2, 3, 4]);
    ///
    /// a.merge(&mut b);
    ///
    /// assert_eq!(Vec::from_iter(a), vec![1, 2, 3, 3, 3, 4, 5]);
    /// assert!(b.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: PartialOrd,
    {
        let mut dest = self.node(HEAD).next;
        while !other.is_empty() {
            let candidate = other.node(HEAD).next;
            // Take from `other` only when strictly smaller, so equal
            // elements already in `self` come first.
            while dest != TAIL && !(other.element(candidate) < self.element(dest)) {
                dest = self.node(dest).next;
            }
            let node = other.detach_node(candidate);
            let prev = self.node(dest).prev;
            let index = self.alloc(node);
            self.attach_node(prev, dest, index);
        }
    }

    /// Reverses the order of the elements in place by relinking. Cursors
    /// keep referencing the same element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if self.len() < 2 {
            return;
        }
        let first = self.node(HEAD).next;
        let last = self.node(TAIL).prev;

        // Swap every data node's link pair, then reattach the reversed
        // chain to the sentinels.
        let mut current = first;
        while current != TAIL {
            let node = self.node_mut(current);
            let next = node.next;
            node.next = node.prev;
            node.prev = next;
            current = next;
        }
        self.node_mut(HEAD).next = last;
        self.node_mut(TAIL).prev = first;
        self.node_mut(last).prev = HEAD;
        self.node_mut(first).next = TAIL;
    }

    /// Removes consecutive equal elements, keeping the first of each run.
    /// On a sorted list this removes all duplicates.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from([1, 1, 2, 2, 2, 3, 1]);
    /// list.unique();
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 1]);
    /// ```
    pub fn unique(&mut self)
    where
        T: PartialEq,
    {
        let mut current = self.node(HEAD).next;
        while current != TAIL {
            let next = self.node(current).next;
            if next != TAIL && self.element(current) == self.element(next) {
                drop(self.detach_node(next));
                // Stay put; the new successor may be another duplicate.
            } else {
                current = next;
            }
        }
    }

    /// Returns `true` if the `List` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }
}

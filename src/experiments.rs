//! A compile-time-checked chain built on `GhostCell` and `StaticRc`,
//! kept as a prototype for a future arena-free backend. Each node is
//! owned by exactly two half-`Rc`s, one per neighbouring link (the
//! chain itself holds the boundary halves), and all aliasing is checked
//! statically through the ghost token.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct Chain<'id, T> {
    head: Option<NodePtr<'id, T>>,
    tail: Option<NodePtr<'id, T>>,
    len: usize,
}

struct Node<'id, T> {
    prev: Option<NodePtr<'id, T>>,
    next: Option<NodePtr<'id, T>>,
    elem: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    fn new(elem: T) -> Self {
        Self {
            prev: None,
            next: None,
            elem,
        }
    }
}

impl<'id, T> Default for Chain<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<'id, T> Chain<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push_front(&mut self, elem: T, token: &mut GhostToken<'id>) {
        let (one, two) = Full::split(Full::new(GhostCell::new(Node::new(elem))));
        match self.head.take() {
            Some(first) => {
                first.deref().borrow_mut(token).prev = Some(one);
                two.deref().borrow_mut(token).next = Some(first);
            }
            None => self.tail = Some(one),
        }
        self.head = Some(two);
        self.len += 1;
    }

    pub fn push_back(&mut self, elem: T, token: &mut GhostToken<'id>) {
        let (one, two) = Full::split(Full::new(GhostCell::new(Node::new(elem))));
        match self.tail.take() {
            Some(last) => {
                last.deref().borrow_mut(token).next = Some(one);
                two.deref().borrow_mut(token).prev = Some(last);
            }
            None => self.head = Some(one),
        }
        self.tail = Some(two);
        self.len += 1;
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let first = self.head.take()?;
        let other = match first.deref().borrow_mut(token).next.take() {
            // The second node's `prev` holds the other half of the first.
            Some(second) => {
                let other = second.deref().borrow_mut(token).prev.take().unwrap();
                self.head = Some(second);
                other
            }
            None => self.tail.take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(first, other)).into_inner().elem)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let last = self.tail.take()?;
        let other = match last.deref().borrow_mut(token).prev.take() {
            Some(previous) => {
                let other = previous.deref().borrow_mut(token).next.take().unwrap();
                self.tail = Some(previous);
                other
            }
            None => self.head.take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(last, other)).into_inner().elem)
    }

    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::Chain;
    use ghost_cell::GhostToken;

    #[test]
    fn chain_push_pop() {
        GhostToken::new(|mut token| {
            let mut chain = Chain::new();
            assert!(chain.is_empty());
            chain.push_back(2, &mut token);
            chain.push_front(1, &mut token);
            chain.push_back(3, &mut token);
            assert_eq!(chain.len(), 3);
            assert_eq!(chain.pop_back(&mut token), Some(3));
            assert_eq!(chain.pop_front(&mut token), Some(1));
            assert_eq!(chain.pop_front(&mut token), Some(2));
            assert_eq!(chain.pop_front(&mut token), None);
            assert!(chain.is_empty());
        })
    }

    #[test]
    fn chain_clear() {
        GhostToken::new(|mut token| {
            let mut chain = Chain::new();
            for i in 0..4 {
                chain.push_back(i, &mut token);
            }
            chain.clear(&mut token);
            assert!(chain.is_empty());
            assert_eq!(chain.len(), 0);
        })
    }
}

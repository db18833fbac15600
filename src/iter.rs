//! Iterators over a [`Tree`][crate::Tree]. Each traversal keeps its own explicit stack (or queue)
//! instead of recursing, so walking a degenerate chain is as safe as walking a balanced tree.
//! Every call to one of the `Tree` methods returning these starts a fresh traversal.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::linked::{Link, Node};

/// Pre-order iterator returned by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes out next.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Ascending iterator returned by [`Tree::inorder`][crate::Tree::inorder].
///
/// The front and the back each walk the tree on their own; counting the items handed out keeps
/// them from crossing.
pub struct Inorder<'a, T> {
    front: Vec<&'a Node<T>>,
    back: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            front: Vec::new(),
            back: Vec::new(),
            remaining: len,
        };
        iter.push_left_edge(root);
        iter.push_right_edge(root);
        iter
    }

    fn push_left_edge(&mut self, mut next: Option<&'a Node<T>>) {
        while let Some(node) = next {
            self.front.push(node);
            next = node.left.as_deref();
        }
    }

    fn push_right_edge(&mut self, mut next: Option<&'a Node<T>>) {
        while let Some(node) = next {
            self.back.push(node);
            next = node.right.as_deref();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.pop()?;
        self.push_left_edge(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Inorder<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.pop()?;
        self.push_right_edge(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Inorder<'_, T> {}
impl<T> FusedIterator for Inorder<'_, T> {}

/// Post-order iterator returned by [`Tree::postorder`][crate::Tree::postorder].
pub struct Postorder<'a, T> {
    /// Nodes paired with whether their children have already been scheduled.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.map(|root| (root, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(&node.data);
            }
            self.stack.push((node, true));
            self.stack
                .extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Postorder<'_, T> {}
impl<T> FusedIterator for Postorder<'_, T> {}

/// Breadth-first iterator returned by [`Tree::levelorder`][crate::Tree::levelorder].
pub struct Levelorder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Levelorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Levelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Levelorder<'_, T> {}
impl<T> FusedIterator for Levelorder<'_, T> {}

/// Owning ascending iterator produced by consuming a [`Tree`][crate::Tree] with `into_iter`.
pub struct IntoIter<T> {
    /// The path down to the next item. Every node here has already had its left child taken.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_edge(root);
        iter
    }

    fn push_left_edge(&mut self, mut next: Link<T>) {
        while let Some(mut node) = next {
            next = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { data, right, .. } = *node;
        self.push_left_edge(right);
        self.remaining -= 1;
        Some(data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        while let Some(mut node) = self.stack.pop() {
            self.stack.extend(node.left.take());
            self.stack.extend(node.right.take());
        }
    }
}

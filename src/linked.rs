//! A link-based BST. Every node owns its children through a `Box` and there are no parent
//! pointers, so the whole structure is plain safe Rust. Nothing keeps the tree balanced while
//! items are added; call [`Tree::rebalance`] to rebuild it with minimal height.
//!
//! # Examples
//!
//! ```
//! use linkedbst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Adding an equal item keeps both.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing an item returns it.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Ok(1));
//!
//! // Removing something that isn't there is an error.
//! assert_eq!(tree.remove(&1), Err(Error::KeyNotPresent));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, log_enabled, trace, Level};

use crate::error::{Error, Result};
use crate::iter::{Inorder, IntoIter, Iter, Levelorder, Postorder};

/// An owning link to a child. `None` marks the empty spot at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one item and exclusively owns its (optional) children.
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// Unlinks the largest node of the subtree rooted at `self` (the in-order predecessor of its
    /// parent) and returns that node's item along with whatever remains of the subtree.
    ///
    /// The largest node never has a right child, so its left child simply takes its place.
    fn split_max(self: Box<Self>) -> (T, Link<T>) {
        let mut spine = Vec::new();
        let mut node = self;
        while let Some(right) = node.right.take() {
            spine.push(node);
            node = right;
        }

        let Node { data, left, .. } = *node;
        let mut rest = left;
        while let Some(mut parent) = spine.pop() {
            parent.right = rest;
            rest = Some(parent);
        }
        (data, rest)
    }
}

/// An unbalanced Binary Search Tree storing items in sorted order. Items that compare equal are
/// all kept; later ones go to the right of earlier ones.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if nothing is stored in the tree.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.len == 0, self.root.is_none());
        self.root.is_none()
    }

    /// The number of items stored in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes every item from the tree.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} items", self.len);
        self.teardown();
    }

    /// Unlinks nodes one at a time so that even a degenerate chain never recurses while being
    /// dropped.
    fn teardown(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Iterates over the items in pre-order: each node before its left subtree, then its right
    /// subtree. This is the default iteration order of a `Tree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&2, &1, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Same traversal as [`Tree::iter`].
    pub fn preorder(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Iterates over the items in ascending order. The iterator can also be walked from the back
    /// to get the items in descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1, &2, &3]);
    /// assert_eq!(tree.inorder().rev().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref(), self.len)
    }

    /// Iterates over the items in post-order: both subtrees of a node before the node itself.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.as_deref(), self.len)
    }

    /// Iterates over the items one depth level at a time, left to right.
    pub fn levelorder(&self) -> Levelorder<'_, T> {
        Levelorder::new(self.root.as_deref(), self.len)
    }

    /// The number of links on the longest path from the root down to a leaf. Both an empty tree
    /// and a tree holding a single item have a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.add(5);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.add(3);
    /// tree.add(7);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        let mut height = 0;
        loop {
            let next: Vec<&Node<T>> = level
                .iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
            if next.is_empty() {
                return height;
            }
            height += 1;
            level = next;
        }
    }

    /// An approximate balance test: the tree counts as balanced when its height is less than
    /// `2 * log2(len + 1) - 1`. An empty tree is never balanced by this measure.
    pub fn is_balanced(&self) -> bool {
        (self.height() as f64) < 2.0 * ((self.len + 1) as f64).log2() - 1.0
    }

    /// Rebuilds the tree with the smallest possible height without changing its contents. The
    /// middle item (index `len / 2`) of the sorted items becomes the root and both halves are
    /// built the same way, so even-sized ranges put one more item on the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree = Tree::from([1, 2, 3, 4, 5]);
    /// assert_eq!(tree.height(), 4);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&3, &2, &1, &5, &4]);
    /// ```
    pub fn rebalance(&mut self) {
        let height_before = log_enabled!(Level::Debug).then(|| self.height());

        let len = self.len;
        let mut items = IntoIter::new(self.root.take(), len);
        self.root = Self::build_balanced(len, &mut items);

        if let Some(height_before) = height_before {
            debug!(
                "rebalanced {} items: height {} -> {}",
                len,
                height_before,
                self.height()
            );
        }
    }

    /// Builds a minimal height subtree from the next `len` items of the ascending `items`.
    fn build_balanced(len: usize, items: &mut IntoIter<T>) -> Link<T> {
        if len == 0 {
            return None;
        }
        let middle = len / 2;
        let left = Self::build_balanced(middle, items);
        let data = items.next()?;
        let right = Self::build_balanced(len - middle - 1, items);

        Some(Box::new(Node { data, left, right }))
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Potentially finds the stored item equal to `item`. If there isn't one, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree = Tree::from(["b", "a", "c"]);
    ///
    /// assert_eq!(tree.find(&"a"), Some(&"a"));
    /// assert_eq!(tree.find(&"z"), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T> {
        let mut pivot = self.root.as_deref();
        while let Some(node) = pivot {
            pivot = match item.cmp(&node.data) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.data),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns `true` if an item equal to `item` is stored in the tree.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Adds `item` to the tree. Items less than a node go into its left subtree, everything else
    /// (including equal items) goes right. The tree is not rebalanced.
    pub fn add(&mut self, item: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if item < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_boxed(item));
        self.len += 1;
        trace!("added item, tree now holds {}", self.len);
    }

    /// Removes one stored item equal to `item` and returns it.
    ///
    /// A node with two children takes over its in-order predecessor's item and the predecessor's
    /// node is unlinked instead. Otherwise the node is replaced by whichever child it has (if any).
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotPresent`] if no such item is stored. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::{Error, Tree};
    ///
    /// let mut tree = Tree::from([2, 1, 3]);
    ///
    /// assert_eq!(tree.remove(&2), Ok(2));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &3]);
    /// assert_eq!(tree.remove(&2), Err(Error::KeyNotPresent));
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T> {
        // `slot` is the link the search descended through: the tree's root slot or the parent's
        // left/right link. Rewriting it splices the target out without any special root case.
        let mut slot = &mut self.root;
        while slot.as_ref().is_some_and(|node| node.data != *item) {
            if let Some(node) = slot {
                slot = if *item < node.data {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }

        // The search ran off the bottom of the tree, so the item isn't stored and nothing has
        // been touched.
        let Some(mut target) = slot.take() else {
            return Err(Error::KeyNotPresent);
        };
        let removed = match (target.left.take(), target.right.take()) {
            (Some(left), Some(right)) => {
                let (predecessor, rest) = left.split_max();
                target.left = rest;
                target.right = Some(right);
                let removed = mem::replace(&mut target.data, predecessor);
                *slot = Some(target);
                removed
            }
            (left, right) => {
                *slot = left.or(right);
                let Node { data, .. } = *target;
                data
            }
        };

        self.len -= 1;
        trace!("removed item, tree now holds {}", self.len);
        Ok(removed)
    }

    /// Swaps `new_item` in for the stored item equal to `item` and returns the old one, or
    /// returns `None` if there is no such item.
    ///
    /// The node is updated in place. It is up to the caller to make sure `new_item` sorts the
    /// same way `item` did; otherwise the ordering of the tree is silently broken.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree = Tree::from([(2, "b"), (1, "a")]);
    ///
    /// assert_eq!(tree.replace(&(1, "a"), (1, "aa")), Some((1, "a")));
    /// assert_eq!(tree.replace(&(3, "c"), (3, "cc")), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        let mut pivot = self.root.as_deref_mut();
        while let Some(node) = pivot {
            pivot = if node.data > *item {
                node.left.as_deref_mut()
            } else if node.data < *item {
                node.right.as_deref_mut()
            } else {
                trace!("replaced item in place");
                return Some(mem::replace(&mut node.data, new_item));
            };
        }
        None
    }

    /// All items `v` with `low <= v <= high`, in ascending order. The whole tree is scanned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree = Tree::from([5, 3, 8, 1, 4, 7, 9]);
    ///
    /// assert_eq!(tree.range_find(&3, &7), [&3, &4, &5, &7]);
    /// assert!(tree.range_find(&7, &3).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T> {
        self.inorder()
            .filter(|item| low <= *item && *item <= high)
            .collect()
    }

    /// The smallest stored item strictly greater than `item`, which need not be in the tree.
    pub fn successor(&self, item: &T) -> Option<&T> {
        self.inorder().find(|candidate| *candidate > item)
    }

    /// The largest stored item strictly less than `item`, which need not be in the tree.
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        self.inorder().rfind(|candidate| *candidate < item)
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    /// Re-adding the items in pre-order reproduces the exact same shape.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("items", &self.inorder().collect::<Vec<_>>())
            .finish()
    }
}

/// Draws the tree rotated a quarter turn counterclockwise: the right subtree above its parent,
/// the left subtree below, and one `"| "` per level of depth.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        let mut next = self.root.as_deref().map(|root| (root, 0));
        loop {
            while let Some((node, depth)) = next {
                stack.push((node, depth));
                next = node.right.as_deref().map(|right| (right, depth + 1));
            }
            let Some((node, depth)) = stack.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(depth), node.data)?;
            next = node.left.as_deref().map(|left| (left, depth + 1));
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Tree<T>
where
    T: Ord,
{
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its items in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

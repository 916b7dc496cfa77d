//! A self-balancing, order-statistic set built on an AVL tree.
//!
//! # Examples
//!
//! ```
//! use avltree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.height(), -1);
//!
//! tree.insert(3);
//! tree.insert(1);
//! tree.insert(2);
//!
//! // Inserting a value that is already present doesn't change anything.
//! assert!(!tree.insert(2));
//! assert_eq!(tree.len(), 3);
//!
//! // Values can be looked up by their position in sorted order.
//! assert_eq!(tree.select(0), Some(&1));
//! assert_eq!(tree.select(2), Some(&3));
//! assert_eq!(tree.select(3), None);
//!
//! assert_eq!(tree.pop_min(), Some(1));
//! assert!(tree.remove(&3));
//! assert_eq!(tree.min(), Some(&2));
//! assert_eq!(tree.max(), Some(&2));
//! ```

use std::fmt;

use crate::node::{self, Link, Node};

/// A set of unique, ordered values kept in an AVL tree. Every node also tracks the size of its
/// subtree so values can be found by rank in `O(lg N)`.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        node::count(&self.root)
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree: the number of edges on the longest path from the root to
    /// a leaf. A tree with a single value has a height of 0 and an empty tree has a height of -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Tree;
    ///
    /// let mut tree: Tree<_> = (0..7).collect();
    /// assert_eq!(tree.height(), 2);
    ///
    /// tree.clear();
    /// assert_eq!(tree.height(), -1);
    /// ```
    pub fn height(&self) -> isize {
        node::height(&self.root)
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns `true` if the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root.as_ref().map_or(false, |root| root.contains(value))
    }

    /// Adds `value` to the tree. Returns `false`, and leaves the tree as it was, if an equal
    /// value is already present.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let (root, inserted) = Node::insert(self.root.take(), value);
        self.root = Some(root);
        inserted
    }

    /// Removes `value` from the tree. Returns `false` if it wasn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Tree;
    ///
    /// let mut tree: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        // The recursive removal assumes the value is somewhere below it.
        if !self.contains(value) {
            return false;
        }
        self.root = self.root.take().and_then(|root| root.remove(value));
        true
    }

    /// Returns the smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root.as_ref().map(|root| root.min())
    }

    /// Returns the largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root.as_ref().map(|root| root.max())
    }

    /// Removes the smallest value in the tree, if there is one.
    pub fn remove_min(&mut self) {
        self.pop_min();
    }

    /// Removes the largest value in the tree, if there is one.
    pub fn remove_max(&mut self) {
        self.pop_max();
    }

    /// Removes and returns the smallest value in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.pop_min(), Some(1));
    /// assert_eq!(tree.pop_min(), Some(2));
    /// assert_eq!(tree.pop_min(), Some(3));
    /// assert_eq!(tree.pop_min(), None);
    /// ```
    pub fn pop_min(&mut self) -> Option<T> {
        let (root, min) = self.root.take()?.remove_min();
        self.root = root;
        Some(min)
    }

    /// Removes and returns the largest value in the tree.
    pub fn pop_max(&mut self) -> Option<T> {
        let (root, max) = self.root.take()?.remove_max();
        self.root = root;
        Some(max)
    }

    /// Returns the `index`th smallest value in the tree, counting from 0, or `None` if
    /// `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Tree;
    ///
    /// let tree: Tree<_> = [0, 2, 3, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.select(0), Some(&0));
    /// assert_eq!(tree.select(3), Some(&3));
    /// assert_eq!(tree.select(4), None);
    /// ```
    pub fn select(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.root.as_ref().map(|root| &root.select(index).value)
    }

    /// Returns how many values in the tree are strictly less than `value`. `value` doesn't need
    /// to be in the tree. For a value that is, this is the index [`Tree::select`] finds it at.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Tree;
    ///
    /// let tree: Tree<_> = [10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.rank(&20), 1);
    /// assert_eq!(tree.rank(&25), 2);
    /// assert_eq!(tree.select(tree.rank(&30)), Some(&30));
    /// ```
    pub fn rank(&self, value: &T) -> usize
    where
        T: Ord,
    {
        self.root.as_ref().map_or(0, |root| root.rank(value))
    }

    /// Asserts every invariant of the tree at every node: ordering, cached heights and counts,
    /// and the AVL balance.
    ///
    /// ## Panics
    ///
    /// When any invariant is broken.
    #[cfg(any(test, feature = "full_validation"))]
    pub fn fully_validate(&self)
    where
        T: Ord + fmt::Debug,
    {
        node::validate(&self.root, None, None);
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
        for value in iter {
            self.insert(value);
        }
    }
}

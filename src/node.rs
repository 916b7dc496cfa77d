//! The augmented AVL node and the recursive engine that mutates it.
//!
//! Every mutating function here takes a subtree root by value and returns the root of the
//! rebuilt subtree. Rotations change which node sits at the top of a subtree so callers must
//! always store whatever comes back, there is no parent pointer to fix things up afterwards.

use std::cmp::{self, Ordering};
use std::fmt;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A node in the tree along with the cached statistics of the subtree rooted at it.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many edges are on the longest path from this node down to a leaf. A node with no
    /// children has a height of 0.
    pub(crate) height: isize,

    /// How many nodes are in the subtree rooted at this node, including this node.
    pub(crate) count: usize,
}

/// Height of a possibly empty subtree. An empty subtree has a height of -1.
pub(crate) fn height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height)
}

/// Number of nodes in a possibly empty subtree.
pub(crate) fn count<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.count)
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("height", &self.height)
            .field("count", &self.count)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
            height: 0,
            count: 1,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Recomputes `height` and `count` from the children. The children must already be correct.
    fn fix_stats(&mut self) {
        self.count = 1 + count(&self.left) + count(&self.right);
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }

    fn balance_factor(&self) -> isize {
        height(&self.left) - height(&self.right)
    }

    /// Rotate to the right. This moves the left child up vertically and `self` down vertically.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root                new_root
    ///       /    \                  /    \
    ///  new_root   z    rotate ->   x   old_root
    ///    /  \                            /  \
    ///   x    y                          y    z
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = self.left.take().expect("Rotate right => left child");
        self.left = new_root.right.take();

        // The new root holds exactly the nodes the old root held.
        new_root.count = self.count;
        self.fix_stats();

        new_root.right = Some(self);
        new_root.height = 1 + cmp::max(height(&new_root.left), height(&new_root.right));
        new_root
    }

    /// Rotate to the left. The mirror image of [`Node::rotate_right`].
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = self.right.take().expect("Rotate left => right child");
        self.right = new_root.left.take();

        new_root.count = self.count;
        self.fix_stats();

        new_root.left = Some(self);
        new_root.height = 1 + cmp::max(height(&new_root.left), height(&new_root.right));
        new_root
    }

    /// Restores the AVL invariant at this node using at most two rotations. The children must
    /// already be balanced and `self`'s stats must already be up to date.
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn balance(mut self: Box<Self>) -> Box<Self> {
        let bf = self.balance_factor();
        let root = if bf < -1 {
            let right = self.right.take().expect("Right heavy => right child");
            self.right = Some(if right.balance_factor() > 0 {
                right.rotate_right()
            } else {
                right
            });
            self.rotate_left()
        } else if bf > 1 {
            let left = self.left.take().expect("Left heavy => left child");
            self.left = Some(if left.balance_factor() < 0 {
                left.rotate_left()
            } else {
                left
            });
            self.rotate_right()
        } else {
            self
        };

        if cfg!(debug_assertions) {
            let left_height = height(&root.left);
            let right_height = height(&root.right);
            assert_eq!(root.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        root
    }

    fn fix_and_balance(mut self: Box<Self>) -> Box<Self> {
        self.fix_stats();
        self.balance()
    }

    pub(crate) fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left().map_or(false, |n| n.contains(value)),
            Ordering::Equal => true,
            Ordering::Greater => self.right().map_or(false, |n| n.contains(value)),
        }
    }

    /// Inserts `value` into the subtree at `link`, returning the new subtree root and whether
    /// the value was added. A value that is already present leaves the subtree untouched.
    pub(crate) fn insert(link: Link<T>, value: T) -> (Box<Self>, bool)
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            return (Self::new_boxed(value), true);
        };

        let inserted = match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, inserted) = Self::insert(node.left.take(), value);
                node.left = Some(left);
                inserted
            }
            Ordering::Equal => return (node, false),
            Ordering::Greater => {
                let (right, inserted) = Self::insert(node.right.take(), value);
                node.right = Some(right);
                inserted
            }
        };

        (node.fix_and_balance(), inserted)
    }

    /// Removes `value` from this subtree and returns what is left of it.
    ///
    /// ## Panics
    ///
    /// When `value` isn't in the subtree. Callers check membership first.
    pub(crate) fn remove(mut self: Box<Self>, value: &T) -> Link<T>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => {
                let left = self.left.take().expect("Removed value => in left subtree");
                self.left = left.remove(value);
            }
            Ordering::Greater => {
                let right = self.right.take().expect("Removed value => in right subtree");
                self.right = right.remove(value);
            }
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, right) => return right,
                (left, None) => return left,
                // Two children: the in-order successor takes this node's place. Its value moves
                // in here and its node is cut out of the right subtree.
                (Some(left), Some(right)) => {
                    let (new_right, successor) = right.remove_min();
                    self.value = successor;
                    self.left = Some(left);
                    self.right = new_right;
                }
            },
        }

        Some(self.fix_and_balance())
    }

    /// Cuts the smallest node out of this subtree. Returns what is left of the subtree and the
    /// value of the node that was cut out.
    pub(crate) fn remove_min(mut self: Box<Self>) -> (Link<T>, T) {
        match self.left.take() {
            None => {
                let Node { value, right, .. } = *self;
                (right, value)
            }
            Some(left) => {
                let (new_left, min) = left.remove_min();
                self.left = new_left;
                (Some(self.fix_and_balance()), min)
            }
        }
    }

    /// Cuts the largest node out of this subtree. The mirror image of [`Node::remove_min`].
    pub(crate) fn remove_max(mut self: Box<Self>) -> (Link<T>, T) {
        match self.right.take() {
            None => {
                let Node { value, left, .. } = *self;
                (left, value)
            }
            Some(right) => {
                let (new_right, max) = right.remove_max();
                self.right = new_right;
                (Some(self.fix_and_balance()), max)
            }
        }
    }

    pub(crate) fn min(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.value
    }

    pub(crate) fn max(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.value
    }

    /// Finds the node holding the `index`th smallest value of this subtree using only the cached
    /// counts.
    ///
    /// ## Panics
    ///
    /// When `index >= self.count`.
    pub(crate) fn select(&self, index: usize) -> &Self {
        let smaller = count(&self.left);
        match smaller.cmp(&index) {
            Ordering::Greater => self
                .left()
                .expect("Index below left count => left child")
                .select(index),
            Ordering::Less => self
                .right()
                .expect("Index within count => right child")
                .select(index - smaller - 1),
            Ordering::Equal => self,
        }
    }

    /// How many values in this subtree are strictly less than `value`.
    pub(crate) fn rank(&self, value: &T) -> usize
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left().map_or(0, |n| n.rank(value)),
            Ordering::Equal => count(&self.left),
            Ordering::Greater => {
                1 + count(&self.left) + self.right().map_or(0, |n| n.rank(value))
            }
        }
    }
}

/// Walks the whole subtree asserting every structural invariant. Returns the subtree's height
/// and count so the parent can check its own cached stats against them.
#[cfg(any(test, feature = "full_validation"))]
pub(crate) fn validate<T>(link: &Link<T>, lower: Option<&T>, upper: Option<&T>) -> (isize, usize)
where
    T: Ord + fmt::Debug,
{
    let Some(node) = link else {
        return (-1, 0);
    };
    if let Some(lower) = lower {
        assert!(
            lower < &node.value,
            "{:?} is in the right subtree of {:?}",
            node.value,
            lower
        );
    }
    if let Some(upper) = upper {
        assert!(
            &node.value < upper,
            "{:?} is in the left subtree of {:?}",
            node.value,
            upper
        );
    }

    let (left_height, left_count) = validate(&node.left, lower, Some(&node.value));
    let (right_height, right_count) = validate(&node.right, Some(&node.value), upper);

    assert_eq!(node.height, 1 + left_height.max(right_height), "{:?}", node.value);
    assert_eq!(node.count, 1 + left_count + right_count, "{:?}", node.value);
    assert!(
        left_height.abs_diff(right_height) <= 1,
        "{:?} is unbalanced: left {} right {}",
        node.value,
        left_height,
        right_height
    );

    (node.height, node.count)
}

//! An unbalanced Binary Search Tree over totally ordered keys.
//!
//! [`Tree`] stores each key exactly once: inserting a key that compares
//! equal to a stored one is reported as an error rather than an overwrite,
//! and the failed insert leaves the tree untouched. Because a key's
//! [`Ord`] may well consider only part of the stored record (a name field,
//! say), [`Tree::locate`] hands back a reference to the *stored* key rather
//! than a bare boolean.
//!
//! No rebalancing is performed. Every operation costs `O(height)`, and the
//! height is whatever the insertion order produced; monotonic insertions
//! degrade the tree to a chain.
//!
//! # Examples
//!
//! ```
//! use ordered::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key).unwrap();
//! }
//!
//! // Sorted iteration falls out of the BST invariant.
//! let sorted: Vec<i32> = tree.in_order().copied().collect();
//! assert_eq!(sorted, [1, 3, 4, 5, 7, 8, 9]);
//!
//! // Range extraction walks only the subtrees that can intersect
//! // the interval and yields a list in the same ascending order.
//! let middle: Vec<i32> = tree.range(&4, &8).iter().copied().collect();
//! assert_eq!(middle, [4, 5, 7, 8]);
//! ```

use std::cmp::Ordering;

use crate::list::List;

/// Errors reported by tree operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError<K> {
    /// The tree already holds a key comparing equal to the inserted one.
    /// The rejected key is handed back so the caller keeps ownership.
    #[error("key already present in the tree")]
    DuplicateKey(K),
    /// No stored key compared equal to the probe.
    #[error("key not found in the tree")]
    NotFound,
}

/// An edge of the tree: either empty or the exclusively owned subtree
/// hanging off it.
type Edge<K> = Option<Box<Node<K>>>;

#[derive(Debug)]
struct Node<K> {
    key: K,
    left: Edge<K>,
    right: Edge<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }

    /// Detaches the rightmost node of this subtree in one pass, returning
    /// its key and the rewritten subtree. The rightmost node never has a
    /// right child, so its left child (if any) takes its place.
    fn detach_rightmost(mut node: Box<Self>) -> (K, Edge<K>) {
        match node.right.take() {
            Some(right) => {
                let (key, rest) = Self::detach_rightmost(right);
                node.right = rest;
                (key, Some(node))
            }
            None => {
                let Node { key, left, .. } = *node;
                (key, left)
            }
        }
    }
}

/// A Binary Search Tree holding each key at most once. This can be used
/// for inserting, locating, and removing keys, for sorted iteration, and
/// for extracting every key inside an inclusive interval.
#[derive(Debug)]
pub struct Tree<K> {
    root: Edge<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1).unwrap();
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given key into the tree.
    ///
    /// If a stored key already compares equal to `key`, nothing is attached
    /// or overwritten and the rejected key comes back inside
    /// [`TreeError::DuplicateKey`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(TreeError::DuplicateKey(1)));
    /// ```
    pub fn insert(&mut self, key: K) -> Result<(), TreeError<K>>
    where
        K: Ord,
    {
        Self::insert_at(&mut self.root, key)
    }

    fn insert_at(edge: &mut Edge<K>, key: K) -> Result<(), TreeError<K>>
    where
        K: Ord,
    {
        match edge {
            None => {
                *edge = Some(Node::new_boxed(key));
                Ok(())
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_at(&mut node.left, key),
                Ordering::Equal => Err(TreeError::DuplicateKey(key)),
                Ordering::Greater => Self::insert_at(&mut node.right, key),
            },
        }
    }

    /// Finds the stored key comparing equal to `key` and returns a
    /// reference to it, or [`TreeError::NotFound`] if the descent reaches
    /// an empty edge first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.locate(&1), Ok(&1));
    /// assert_eq!(tree.locate(&42), Err(TreeError::NotFound));
    /// ```
    pub fn locate(&self, key: &K) -> Result<&K, TreeError<K>>
    where
        K: Ord,
    {
        Self::locate_at(self.root.as_deref(), key)
    }

    fn locate_at<'a>(edge: Option<&'a Node<K>>, key: &K) -> Result<&'a K, TreeError<K>>
    where
        K: Ord,
    {
        match edge {
            None => Err(TreeError::NotFound),
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::locate_at(node.left.as_deref(), key),
                Ordering::Equal => Ok(&node.key),
                Ordering::Greater => Self::locate_at(node.right.as_deref(), key),
            },
        }
    }

    /// Removes the node whose key compares equal to `key` and returns the
    /// evicted key. Fails with [`TreeError::NotFound`], before any relinking
    /// has happened, on an empty tree or an unmatched descent.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children is replaced by its in-order predecessor: the rightmost
    /// node of its left subtree is detached and promoted in a single
    /// recursive rewrite of that subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<K, TreeError<K>>
    where
        K: Ord,
    {
        Self::remove_at(&mut self.root, key)
    }

    fn remove_at(edge: &mut Edge<K>, key: &K) -> Result<K, TreeError<K>>
    where
        K: Ord,
    {
        let Some(node) = edge.as_deref_mut() else {
            return Err(TreeError::NotFound);
        };
        match key.cmp(&node.key) {
            Ordering::Less => return Self::remove_at(&mut node.left, key),
            Ordering::Greater => return Self::remove_at(&mut node.right, key),
            Ordering::Equal => {}
        }

        let node = edge.take().expect("compared equal against this node");
        let Node {
            key: evicted,
            left,
            right,
        } = *node;
        *edge = match (left, right) {
            (None, right) => right,
            (left @ Some(_), None) => left,
            (Some(left), right) => {
                let (predecessor, remainder) = Node::detach_rightmost(left);
                Some(Box::new(Node {
                    key: predecessor,
                    left: remainder,
                    right,
                }))
            }
        };
        Ok(evicted)
    }

    /// Returns an iterator over the stored keys in ascending order.
    ///
    /// The iterator is lazy and read-only; calling `in_order` again
    /// restarts from the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 3, 1] {
    ///     tree.insert(key).unwrap();
    /// }
    ///
    /// let keys: Vec<i32> = tree.in_order().copied().collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root.as_deref())
    }

    /// Collects every key inside the inclusive interval `[low, high]` into
    /// a [`List`], in ascending order.
    ///
    /// The walk prunes: a left subtree is only entered while the current
    /// key is at least `low`, a right subtree only while it is at most
    /// `high`, so subtrees lying entirely outside the interval are never
    /// visited. When `low > high` no key satisfies both bounds and the
    /// result is an empty list, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(key).unwrap();
    /// }
    ///
    /// let extracted: Vec<i32> = tree.range(&4, &8).iter().copied().collect();
    /// assert_eq!(extracted, [4, 5, 7, 8]);
    ///
    /// assert!(tree.range(&8, &4).is_empty());
    /// ```
    pub fn range(&self, low: &K, high: &K) -> List<K>
    where
        K: Ord + Clone,
    {
        let mut extracted = List::new();
        Self::range_into(self.root.as_deref(), low, high, &mut extracted);
        extracted
    }

    fn range_into(edge: Option<&Node<K>>, low: &K, high: &K, out: &mut List<K>)
    where
        K: Ord + Clone,
    {
        let Some(node) = edge else {
            return;
        };
        if node.key >= *low {
            Self::range_into(node.left.as_deref(), low, high, out);
        }
        if node.key >= *low && node.key <= *high {
            out.insert_back(node.key.clone());
        }
        if node.key <= *high {
            Self::range_into(node.right.as_deref(), low, high, out);
        }
    }
}

/// An iterator over a tree's keys in ascending order. Created by
/// [`Tree::in_order`].
///
/// Holds the spine of not-yet-emitted ancestors on an explicit stack, so
/// iteration never recurses.
pub struct InOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut edge: Option<&'a Node<K>>) {
        while let Some(node) = edge {
            self.stack.push(node);
            edge = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

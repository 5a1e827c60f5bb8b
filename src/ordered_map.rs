//! An ordered map built on an unbalanced BST. Every node exclusively owns its two children, so
//! the tree is a plain nest of `Box`es with no parent pointers.
//!
//! # Examples
//!
//! ```
//! use treemap::{OrderedMap, TreemapError};
//!
//! let mut map = OrderedMap::new();
//!
//! // Nothing in here yet.
//! assert!(map.is_empty());
//! assert_eq!(map.get(&1), Err(TreemapError::EmptyContainer));
//!
//! map.insert(1, 'a')?;
//! map.insert(3, 'c')?;
//! assert_eq!(map.get(&1), Ok(&'a'));
//! assert_eq!(map.get(&2), Err(TreemapError::KeyNotFound));
//!
//! // Removing a key hands back its value.
//! assert_eq!(map.remove(&1), Ok(Some('a')));
//! assert_eq!(map.len(), 1);
//! # Ok::<(), TreemapError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Result, TreemapError};
use crate::iter::{Iter, Keys, Values};

/// An owning slot for a subtree. `None` marks the empty pointer at the bottom of a subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A `Node` has a key that is used for searching/sorting and a value that is associated with
/// that key. Either child may be empty.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }

    /// Unlinks the smallest node of the subtree in `slot` and returns it with no children. Its
    /// right child, if any, takes its place. Returns `None` if the subtree is empty.
    fn take_min(mut slot: &mut Link<K, V>) -> Link<K, V> {
        while slot.as_ref()?.left.is_some() {
            slot = match slot {
                Some(node) => &mut node.left,
                None => return None,
            };
        }

        let mut min = slot.take()?;
        *slot = min.right.take();
        Some(min)
    }
}

/// A map from unique, totally ordered keys to values. See the [module docs][self] for an
/// example.
///
/// The tree is never rebalanced: all `O(lg N)` bounds quoted on the methods are averages over
/// random insertion orders, and degrade to `O(N)` when keys arrive sorted.
pub struct OrderedMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for OrderedMap<K, V> {
    fn drop(&mut self) {
        // Unlink nodes onto a heap stack so a chain-shaped tree doesn't recurse once per level.
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Manual implementation of `Clone` so copying a chain-shaped tree doesn't recurse once per
/// level. Nodes are rebuilt in post-order: both children of a node are finished before it.
impl<K, V> Clone for OrderedMap<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        enum Visit<'a, K, V> {
            Enter(Option<&'a Node<K, V>>),
            Build(&'a Node<K, V>),
        }

        let mut work = vec![Visit::Enter(self.root.as_deref())];
        let mut built: Vec<Link<K, V>> = Vec::new();
        while let Some(visit) = work.pop() {
            match visit {
                Visit::Enter(None) => built.push(None),
                Visit::Enter(Some(node)) => {
                    work.push(Visit::Build(node));
                    work.push(Visit::Enter(node.right.as_deref()));
                    work.push(Visit::Enter(node.left.as_deref()));
                }
                Visit::Build(node) => {
                    // The left subtree was entered first so it sits below the right one.
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        key: node.key.clone(),
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Generates a new, empty `OrderedMap`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of entries in the map. `O(1)`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map has no entries. `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Iterates over the entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// for key in [5, 2, 8, 1] {
    ///     map.insert(key, key * 10).unwrap();
    /// }
    ///
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&1, &10), (&2, &20), (&5, &50), (&8, &80)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Iterates over the values in ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Inserts `value` at `key`. Keys are never overwritten: if `key` is already present this
    /// fails with [`TreemapError::DuplicateKey`] and the map is left as it was.
    ///
    /// `O(lg N)` on average.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::{OrderedMap, TreemapError};
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// assert_eq!(map.insert(1, 2), Ok(()));
    /// assert_eq!(map.insert(1, 3), Err(TreemapError::DuplicateKey));
    /// assert_eq!(map.get(&1), Ok(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<()>
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    debug!(len = self.len, "rejected insert of duplicate key");
                    return Err(TreemapError::DuplicateKey);
                }
            };
        }
        *slot = Some(Node::new_boxed(key, value));
        self.len += 1;
        trace!(len = self.len, "inserted entry");

        Ok(())
    }

    /// Removes the entry for `key` and returns its value, or `Ok(None)` if no entry has that key.
    /// Fails with [`TreemapError::EmptyContainer`] when called on an empty map.
    ///
    /// A node with two children is replaced by its in-order successor (the smallest node of its
    /// right subtree).
    ///
    /// `O(lg N)` on average.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::{OrderedMap, TreemapError};
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.remove(&1), Err(TreemapError::EmptyContainer));
    ///
    /// map.insert(1, 2).unwrap();
    /// assert_eq!(map.remove(&7), Ok(None));
    /// assert_eq!(map.len(), 1);
    ///
    /// assert_eq!(map.remove(&1), Ok(Some(2)));
    /// assert!(map.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<Option<V>>
    where
        K: Ord,
    {
        if self.is_empty() {
            return Err(TreemapError::EmptyContainer);
        }

        let removed = Self::remove_from(&mut self.root, key);
        match removed {
            Some(_) => {
                self.len -= 1;
                trace!(len = self.len, "removed entry");
            }
            None => debug!(len = self.len, "remove found no entry for key"),
        }

        Ok(removed)
    }

    /// Descends from `slot` to the node holding `key` and unlinks it.
    fn remove_from(mut slot: &mut Link<K, V>, key: &K) -> Option<V>
    where
        K: Ord,
    {
        loop {
            let ordering = key.cmp(&slot.as_ref()?.key);
            if ordering == Ordering::Equal {
                return Self::unlink(slot);
            }
            slot = match slot {
                Some(node) => {
                    if ordering == Ordering::Less {
                        &mut node.left
                    } else {
                        &mut node.right
                    }
                }
                None => return None,
            };
        }
    }

    /// Takes the node out of `slot`, filling the slot with whatever should replace it, and
    /// returns the node's value.
    fn unlink(slot: &mut Link<K, V>) -> Option<V>
    where
        K: Ord,
    {
        let mut node = slot.take()?;
        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut rest = Some(right);
                match Node::take_min(&mut rest) {
                    Some(mut successor) => {
                        successor.left = Some(left);
                        successor.right = rest;

                        if cfg!(debug_assertions) {
                            if let Some(left) = &successor.left {
                                assert!(left.key < successor.key);
                            }
                            if let Some(right) = &successor.right {
                                assert!(successor.key < right.key);
                            }
                        }
                        Some(successor)
                    }
                    // An empty right subtree leaves the left child as the only replacement.
                    None => Some(left),
                }
            }
        };

        Some(node.value)
    }

    /// Finds the node holding `key` without recursing.
    fn find(&self, key: &K) -> Option<&Node<K, V>>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns the value stored at `key`.
    ///
    /// Fails with [`TreemapError::EmptyContainer`] on an empty map and with
    /// [`TreemapError::KeyNotFound`] if no entry has `key`. `O(lg N)` on average.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::{OrderedMap, TreemapError};
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 2).unwrap();
    ///
    /// assert_eq!(map.get(&1), Ok(&2));
    /// assert_eq!(map.get(&42), Err(TreemapError::KeyNotFound));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V>
    where
        K: Ord,
    {
        if self.is_empty() {
            return Err(TreemapError::EmptyContainer);
        }

        self.find(key)
            .map(|node| &node.value)
            .ok_or(TreemapError::KeyNotFound)
    }

    /// Whether an entry has `key`. `O(lg N)` on average.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Whether any entry holds a value equal to `value`. Values aren't ordered so this visits
    /// every entry: `O(N)`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// The smallest key in the map, found by following left children from the root.
    ///
    /// Fails with [`TreemapError::EmptyContainer`] on an empty map.
    pub fn min_key(&self) -> Result<&K> {
        let mut node = self.root.as_deref().ok_or(TreemapError::EmptyContainer)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// The largest key in the map, found by following right children from the root.
    ///
    /// Fails with [`TreemapError::EmptyContainer`] on an empty map.
    pub fn max_key(&self) -> Result<&K> {
        let mut node = self.root.as_deref().ok_or(TreemapError::EmptyContainer)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.key)
    }

    /// The greatest key less than or equal to `key`.
    ///
    /// Fails with [`TreemapError::KeyOutOfRange`] if every key in the map is greater than `key`.
    /// `key` is first checked against [`min_key`][Self::min_key], so an empty map fails with that
    /// method's [`TreemapError::EmptyContainer`] rather than `KeyOutOfRange`. `O(lg N)` on
    /// average.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::{OrderedMap, TreemapError};
    ///
    /// let mut map = OrderedMap::new();
    /// for key in [10, 20, 30] {
    ///     map.insert(key, ()).unwrap();
    /// }
    ///
    /// assert_eq!(map.floor_key(&20), Ok(&20));
    /// assert_eq!(map.floor_key(&25), Ok(&20));
    /// assert_eq!(map.floor_key(&99), Ok(&30));
    /// assert_eq!(map.floor_key(&5), Err(TreemapError::KeyOutOfRange));
    ///
    /// // With no keys at all, the range check itself fails.
    /// let empty: OrderedMap<i32, ()> = OrderedMap::new();
    /// assert_eq!(empty.floor_key(&5), Err(TreemapError::EmptyContainer));
    /// ```
    pub fn floor_key(&self, key: &K) -> Result<&K>
    where
        K: Ord,
    {
        if key < self.min_key()? {
            return Err(TreemapError::KeyOutOfRange);
        }

        // The last node we stepped right from is the tightest floor seen so far.
        let mut floor = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Ok(&node.key),
                Ordering::Greater => {
                    floor = Some(&node.key);
                    node.right.as_deref()
                }
            };
        }
        floor.ok_or(TreemapError::KeyOutOfRange)
    }

    /// The least key greater than or equal to `key`.
    ///
    /// Fails with [`TreemapError::KeyOutOfRange`] if every key in the map is less than `key`.
    /// `key` is first checked against [`max_key`][Self::max_key], so an empty map fails with that
    /// method's [`TreemapError::EmptyContainer`] rather than `KeyOutOfRange`. `O(lg N)` on
    /// average.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemap::{OrderedMap, TreemapError};
    ///
    /// let mut map = OrderedMap::new();
    /// for key in [10, 20, 30] {
    ///     map.insert(key, ()).unwrap();
    /// }
    ///
    /// assert_eq!(map.ceil_key(&20), Ok(&20));
    /// assert_eq!(map.ceil_key(&15), Ok(&20));
    /// assert_eq!(map.ceil_key(&-1), Ok(&10));
    /// assert_eq!(map.ceil_key(&31), Err(TreemapError::KeyOutOfRange));
    ///
    /// // With no keys at all, the range check itself fails.
    /// let empty: OrderedMap<i32, ()> = OrderedMap::new();
    /// assert_eq!(empty.ceil_key(&31), Err(TreemapError::EmptyContainer));
    /// ```
    pub fn ceil_key(&self, key: &K) -> Result<&K>
    where
        K: Ord,
    {
        if key > self.max_key()? {
            return Err(TreemapError::KeyOutOfRange);
        }

        let mut ceil = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => {
                    ceil = Some(&node.key);
                    node.left.as_deref()
                }
                Ordering::Equal => return Ok(&node.key),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        ceil.ok_or(TreemapError::KeyOutOfRange)
    }
}

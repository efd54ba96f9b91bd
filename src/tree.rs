//! An unbalanced BST whose order is decided by a [`Comparator`] chosen at construction.
//!
//! Every key is stored once. Inserting a key that compares equal to one already present leaves
//! the tree alone, so aggregating data into an existing entry is done with
//! [`find_mut`][Tree::find_mut] instead.
//!
//! # Examples
//!
//! ```
//! use wordtree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Inserting an equal key does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.size(), 1);
//!
//! // Deleting a node returns its key.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::error::Error;
use crate::iter::{InOrder, LevelOrder, PostOrder, PreOrder};
use crate::ordering::Comparator;
use crate::path::{PathTracker, Step};
use crate::util::Removal;

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree over keys of type `K`. Nothing rebalances it, so its shape depends only
/// on the order keys were inserted in and sorted input degrades it into a chain.
pub struct Tree<K> {
    root: Link<K>,
    size: usize,
    comparator: Comparator<K>,
    // Left behind by lookups so `delete` can skip straight to a key that was just found.
    path: RefCell<PathTracker>,
}

impl<K: Ord> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        drop_link(self.root.take());
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("keys", &self.in_order().collect::<Vec<_>>())
            .finish()
    }
}

impl<K: Ord> Tree<K> {
    /// Generates a new, empty `Tree` ordered by `K`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree` ordered by `comparator`. The comparator can't be swapped out
    /// later because the nodes already placed would no longer be in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{Comparator, Tree};
    ///
    /// let by_len = Comparator::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// let mut tree = Tree::with_comparator(by_len);
    /// tree.insert("ccc");
    /// tree.insert("a");
    ///
    /// // "b" has the same length as "a" so it's the same key as far as this tree is concerned.
    /// assert!(!tree.insert("b"));
    /// assert_eq!(tree.find(&"z"), Some(&"a"));
    /// ```
    pub fn with_comparator(comparator: Comparator<K>) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
            path: RefCell::new(PathTracker::default()),
        }
    }

    /// The ordering this tree was built with.
    pub fn comparator(&self) -> &Comparator<K> {
        &self.comparator
    }

    /// The number of keys in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`][Tree::size].
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts `key` as a new leaf and returns `true`. If the tree already holds a key equal to
    /// `key` nothing changes and `false` is returned; the stored key is never overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let path = self.path.get_mut();
        let slot = locate_mut(&mut self.root, &self.comparator, &key, path);
        if slot.is_some() {
            trace!("insert found an equal key after {} steps", path.depth());
            path.clear();
            return false;
        }

        trace!("inserting a leaf at depth {}", path.depth());
        *slot = Some(Box::new(Node::new(key)));
        self.size += 1;
        path.clear();
        true
    }

    /// Potentially finds the stored key equal to `key`. If no node has an equal key, `None` is
    /// returned.
    ///
    /// The returned reference is to the key held by the tree, not the one passed in, which matters
    /// when the comparator only looks at part of `K`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K> {
        let mut path = self.path.borrow_mut();
        path.clear();

        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match self.comparator.compare(key, &node.key) {
                Ordering::Less => {
                    path.push(Step::Left);
                    current = node.left.as_deref();
                }
                Ordering::Greater => {
                    path.push(Step::Right);
                    current = node.right.as_deref();
                }
                Ordering::Equal => {
                    path.mark_found();
                    trace!("find hit after {} steps", path.depth());
                    return Some(&node.key);
                }
            }
        }

        trace!("find missed after {} steps", path.depth());
        None
    }

    /// Like [`find`][Tree::find] but hands back a mutable reference to the stored key.
    ///
    /// Only change parts of the key that the tree's comparator ignores, such as a counter
    /// carried next to the ordered part. Anything else breaks the tree's ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{Comparator, Tree};
    ///
    /// let mut tree = Tree::with_comparator(Comparator::new(|a: &(char, u32), b: &(char, u32)| {
    ///     a.0.cmp(&b.0)
    /// }));
    /// tree.insert(('a', 1));
    ///
    /// if let Some(entry) = tree.find_mut(&('a', 0)) {
    ///     entry.1 += 1;
    /// }
    /// assert_eq!(tree.find(&('a', 0)), Some(&('a', 2)));
    /// ```
    pub fn find_mut(&mut self, key: &K) -> Option<&mut K> {
        locate_mut(&mut self.root, &self.comparator, key, self.path.get_mut())
            .as_deref_mut()
            .map(|node| &mut node.key)
    }

    /// Whether the tree holds a key equal to `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Deletes the node holding a key equal to `key` and returns the stored key. If the tree does
    /// not contain such a node, nothing happens.
    ///
    /// When the previous call on this tree was a successful [`find`][Tree::find] for the same
    /// key, the path it recorded is replayed instead of comparing keys on the way down again.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert_eq!(tree.delete(&5), None);
    /// assert_eq!(tree.in_order().collect::<Vec<_>>(), vec![&3, &8]);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K> {
        let Self {
            root,
            size,
            comparator,
            path,
        } = self;
        let path = path.get_mut();

        if path.is_found() {
            if let Some(slot) = replay_mut(root, comparator, key, path.steps()) {
                trace!("delete is reusing a path of {} steps", path.depth());
                let removal = remove_at(slot);
                return finish_delete(removal, size, path);
            }
        }

        let removal = remove_at(locate_mut(root, comparator, key, path));
        finish_delete(removal, size, path)
    }

    /// The leftmost key, which is the smallest under this tree's comparator. For a tree ordered
    /// by descending frequency that is the most frequent key.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when there are no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{Comparator, Error, Tree};
    ///
    /// let mut tree = Tree::with_comparator(Comparator::natural().reversed());
    /// assert_eq!(tree.minimum(), Err(Error::EmptyTree));
    ///
    /// tree.extend([1, 3, 2]);
    /// assert_eq!(tree.minimum(), Ok(&3));
    /// ```
    pub fn minimum(&self) -> Result<&K, Error> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// The rightmost key. See [`minimum`][Tree::minimum].
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when there are no keys.
    pub fn maximum(&self) -> Result<&K, Error> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.key)
    }

    /// The number of edges on the longest path from the root to a leaf. A single node has height
    /// 0 and an empty tree has height -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// // Sorted input makes a chain.
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        height(&self.root)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        drop_link(self.root.take());
        self.size = 0;
        self.path.get_mut().clear();
    }

    /// Left subtree, then the node, then the right subtree. Keys come out in ascending order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root.as_deref())
    }

    /// The node, then its left subtree, then its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root.as_deref())
    }

    /// Left subtree, then right subtree, then the node.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root.as_deref())
    }

    /// Breadth first: the root, then each level from left to right.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root.as_deref())
    }

    /// Same as [`in_order`][Tree::in_order].
    pub fn iter(&self) -> InOrder<'_, K> {
        self.in_order()
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<K> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

/// A key and its two (possibly empty) subtrees.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    fn child_mut(&mut self, step: Step) -> &mut Link<K> {
        match step {
            Step::Left => &mut self.left,
            Step::Right => &mut self.right,
        }
    }
}

/// Descends from `slot` recording each step in `path` and returns the slot that holds a key
/// equal to `key`, or the empty slot where it would go.
fn locate_mut<'a, K>(
    mut slot: &'a mut Link<K>,
    comparator: &Comparator<K>,
    key: &K,
    path: &mut PathTracker,
) -> &'a mut Link<K> {
    path.clear();
    loop {
        let step = match slot.as_deref() {
            None => return slot,
            Some(node) => match comparator.compare(key, &node.key) {
                Ordering::Less => Step::Left,
                Ordering::Greater => Step::Right,
                Ordering::Equal => {
                    path.mark_found();
                    return slot;
                }
            },
        };
        path.push(step);
        slot = match slot {
            Some(node) => node.child_mut(step),
            None => return slot,
        };
    }
}

/// Follows `steps` down from `slot` without comparing keys. The slot reached is returned only if
/// it holds a key equal to `key`.
fn replay_mut<'a, K>(
    mut slot: &'a mut Link<K>,
    comparator: &Comparator<K>,
    key: &K,
    steps: &[Step],
) -> Option<&'a mut Link<K>> {
    for &step in steps {
        slot = slot.as_mut()?.child_mut(step);
    }
    let node = slot.as_deref()?;
    let equal = comparator.compare(key, &node.key) == Ordering::Equal;
    equal.then_some(slot)
}

/// Bookkeeping shared by both ways `delete` reaches its target.
fn finish_delete<K>(
    removal: Option<Removal<K>>,
    size: &mut usize,
    path: &mut PathTracker,
) -> Option<K> {
    path.clear();
    let removal = removal?;
    *size -= 1;
    debug!("deleted a node with {}", removal.case());
    Some(removal.into_key())
}

/// Takes the node in `slot` out of the tree, keeping everything below it reachable.
fn remove_at<K>(slot: &mut Link<K>) -> Option<Removal<K>> {
    let node = slot.as_mut()?;
    match (node.left.is_some(), node.right.is_some()) {
        (true, true) => {
            // The successor is the smallest key in the right subtree so it fits between the two
            // subtrees. It moves into this node and its old node is the one that goes away.
            let successor = take_min(&mut node.right)?;
            Some(Removal::Successor(mem::replace(&mut node.key, successor)))
        }
        (false, false) => slot.take().map(|node| Removal::Leaf(node.key)),
        _ => {
            let mut node = slot.take()?;
            *slot = node.left.take().or_else(|| node.right.take());
            Some(Removal::Spliced(node.key))
        }
    }
}

/// Unlinks the leftmost node under `slot` and returns its key. The leftmost node has no left
/// child, so its right child (if any) takes its place.
fn take_min<K>(mut slot: &mut Link<K>) -> Option<K> {
    while slot.as_ref()?.left.is_some() {
        slot = &mut slot.as_mut()?.left;
    }
    let mut min = slot.take()?;
    *slot = min.right.take();
    Some(min.key)
}

fn height<K>(link: &Link<K>) -> isize {
    match link {
        None => -1,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

/// Frees a subtree with an explicit stack. Dropping `Box`es recursively would overflow the stack
/// on a long enough chain.
fn drop_link<K>(link: Link<K>) {
    let mut stack: Vec<Box<Node<K>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;
    use crate::util::ideal_height;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same set of keys in both.
    fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
    where
        K: Ord + Clone + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(k) => assert_eq!(bst.insert(k.clone()), set.insert(k.clone())),
                Op::Delete(k) => assert_eq!(bst.delete(k), set.take(k)),
                Op::Find(k) => assert_eq!(bst.find(k), set.get(k)),
                Op::Iter => assert!(bst.in_order().eq(set.iter())),
            }
            assert_eq!(bst.size(), set.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            set.iter().all(|key| tree.find(key) == Some(key))
                && tree.level_order().count() == set.len()
        }
    }

    quickcheck::quickcheck! {
        fn in_order_is_sorted(xs: Vec<i16>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();
            let keys: Vec<_> = tree.in_order().collect();

            keys.windows(2).all(|pair| pair[0] < pair[1])
        }
    }

    quickcheck::quickcheck! {
        fn find_then_delete(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
            let mut tree: Tree<_> = xs.iter().copied().collect();
            let mut set: BTreeSet<_> = xs.into_iter().collect();

            deletes.iter().all(|x| {
                let found = tree.find(x).copied();
                found == set.get(x).copied() && tree.delete(x) == set.take(x)
            }) && tree.size() == set.len()
        }
    }

    quickcheck::quickcheck! {
        fn height_is_bounded(xs: Vec<u8>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();
            let size = tree.size() as isize;

            ideal_height(tree.size()) <= tree.height() && tree.height() <= size - 1
        }
    }
}

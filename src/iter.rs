//! The four ways of walking a [`Tree`][crate::Tree].
//!
//! Each traversal collects references to every key into a queue as soon as it is created and
//! then hands them out one at a time. The references borrow the tree, so it can't change under a
//! traversal, and a new traversal is needed to walk it again.
//!
//! # Examples
//!
//! ```
//! use wordtree::{Error, Tree};
//!
//! let tree: Tree<_> = [2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.in_order().collect::<Vec<_>>(), vec![&1, &2, &3]);
//! assert_eq!(tree.pre_order().collect::<Vec<_>>(), vec![&2, &1, &3]);
//! assert_eq!(tree.post_order().collect::<Vec<_>>(), vec![&1, &3, &2]);
//! assert_eq!(tree.level_order().collect::<Vec<_>>(), vec![&2, &1, &3]);
//!
//! let empty: Tree<i32> = Tree::new();
//! assert_eq!(empty.level_order().try_next(), Err(Error::IteratorExhausted));
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::Error;
use crate::tree::Node;

/// Defines a traversal type that drains a queue of key references filled in by its constructor.
macro_rules! traversal {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name<'a, K> {
            queue: VecDeque<&'a K>,
        }

        impl<'a, K> $name<'a, K> {
            /// Like [`Iterator::next`] but treats running past the last key as an error.
            ///
            /// # Errors
            ///
            /// [`Error::IteratorExhausted`] once every key has been handed out.
            pub fn try_next(&mut self) -> Result<&'a K, Error> {
                self.queue.pop_front().ok_or(Error::IteratorExhausted)
            }
        }

        impl<'a, K> Iterator for $name<'a, K> {
            type Item = &'a K;

            fn next(&mut self) -> Option<Self::Item> {
                self.queue.pop_front()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.queue.len(), Some(self.queue.len()))
            }
        }

        impl<K> ExactSizeIterator for $name<'_, K> {}

        impl<K> FusedIterator for $name<'_, K> {}
    };
}

traversal! {
    /// Keys in ascending order: left subtree, node, right subtree.
    InOrder
}

traversal! {
    /// Node, left subtree, right subtree.
    PreOrder
}

traversal! {
    /// Left subtree, right subtree, node.
    PostOrder
}

traversal! {
    /// Breadth first, one level at a time from left to right.
    LevelOrder
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut queue = VecDeque::new();
        let mut stack = Vec::new();
        let mut current = root;

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            queue.push_back(&node.key);
            current = node.right.as_deref();
        }

        Self { queue }
    }
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut queue = VecDeque::new();
        let mut stack: Vec<_> = root.into_iter().collect();

        while let Some(node) = stack.pop() {
            queue.push_back(&node.key);
            // Right goes on first so the left subtree is popped first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }

        Self { queue }
    }
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut queue = VecDeque::new();
        let mut stack: Vec<_> = root.into_iter().collect();

        // Visiting node, right, left and pushing to the front leaves left, right, node.
        while let Some(node) = stack.pop() {
            queue.push_front(&node.key);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }

        Self { queue }
    }
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut queue = VecDeque::new();
        let mut pending: VecDeque<_> = root.into_iter().collect();

        while let Some(node) = pending.pop_front() {
            queue.push_back(&node.key);
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }

        Self { queue }
    }
}

/// How a node was taken out of the tree. Each variant carries the removed key.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Removal<K> {
    /// The node had no children so its slot was emptied.
    Leaf(K),
    /// The node had one child which moved up into its slot.
    Spliced(K),
    /// The node had two children. Its key was replaced by its in-order successor's key and the
    /// successor node was spliced out of the right subtree instead.
    Successor(K),
}

impl<K> Removal<K> {
    pub(crate) fn into_key(self) -> K {
        match self {
            Self::Leaf(key) | Self::Spliced(key) | Self::Successor(key) => key,
        }
    }

    pub(crate) fn case(&self) -> &'static str {
        match self {
            Self::Leaf(_) => "leaf",
            Self::Spliced(_) => "one child",
            Self::Successor(_) => "two children",
        }
    }
}

/// The smallest height any binary tree holding `n` nodes can have, i.e. `ceil(log2(n + 1)) - 1`.
/// An empty tree has height `-1`.
///
/// This is only useful for reporting how far an unbalanced tree has drifted.
///
/// # Examples
///
/// ```
/// use wordtree::ideal_height;
///
/// assert_eq!(ideal_height(0), -1);
/// assert_eq!(ideal_height(1), 0);
/// assert_eq!(ideal_height(3), 1);
/// assert_eq!(ideal_height(4), 2);
/// ```
pub fn ideal_height(n: usize) -> isize {
    // `ceil(log2(n + 1))` is the number of significant bits in `n`.
    (usize::BITS - n.leading_zeros()) as isize - 1
}

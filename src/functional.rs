//! A functional BST. This is modeled after a BST one would see in
//! a functional language like Haskell. Any operations that one would
//! expect to modify the tree (e.g. `insert` or `delete`) instead return
//! a new tree that references many of the nodes of the original tree.
//!
//! The tree does no rebalancing on its own. Inserting sorted input
//! degrades it to a list; [`Tree::balance`] rebuilds a height-balanced
//! copy on demand.
//!
//! # Examples
//!
//! ```
//! use bstree::functional::{Replacement, Tree};
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(1, 2);
//!
//! // The new tree has this new value but the old one doesn't.
//! assert_eq!(new_tree.find(&1), Some(&2));
//! assert_eq!(tree.find(&1), None);
//!
//! // Insert a new value for the same key gives yet another tree.
//! let newer_tree = new_tree.insert(1, 3);
//!
//! // And delete it for good measure.
//! let newest_tree = newer_tree.delete(&1, Replacement::Successor);
//!
//! // All history is preserved.
//! assert_eq!(newest_tree.find(&1), None);
//! assert_eq!(newer_tree.find(&1), Some(&3));
//! assert_eq!(new_tree.find(&1), Some(&2));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp;
use std::rc::Rc;

/// A Binary Search Tree. This can be used for inserting, finding,
/// and deleting keys and values. Note that this data structure is
/// functional - operations that would modify the tree instead
/// return a new tree.
pub enum Tree<K, V> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a key, value, and two children (which are
    /// both `Tree`s). This enum trivially wraps the [`Node`] struct.
    Node(Node<K, V>),
}

/// Which neighbor replaces a node with two children when it is deleted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Replacement {
    /// The in-order successor - the minimum of the right subtree.
    Successor,
    /// The in-order predecessor - the maximum of the left subtree.
    Predecessor,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Returns a new tree that includes a node
    /// containing the given key and value.
    ///
    /// Inserting a key that is already present replaces its value and
    /// changes nothing structurally. Nodes off the insertion path are
    /// shared with the original tree rather than copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::functional::Tree;
    ///
    /// let tree = Tree::new();
    /// let new_tree = tree.insert(1, 2);
    /// let newer_tree = new_tree.insert(1, 3);
    ///
    /// // All history is preserved.
    /// assert_eq!(newer_tree.find(&1), Some(&3));
    /// assert_eq!(new_tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&1), None);
    /// ```
    pub fn insert(&self, key: K, value: V) -> Self
    where
        K: cmp::Ord,
    {
        match self {
            Self::Leaf => Self::Node(Node::new(key, value)),
            Self::Node(n) => Self::Node(n.insert(key, value)),
        }
    }

    /// Potentially finds the value associated with the given key
    /// in this tree. If no node has the corresponding key, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::functional::Tree;
    ///
    /// let tree = Tree::new();
    /// let tree = tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, k: &K) -> Option<&V>
    where
        K: cmp::Ord,
    {
        match self {
            Self::Leaf => None,
            Self::Node(n) => n.find(k),
        }
    }

    /// Returns the entry with the smallest key, or `None` for an
    /// empty tree. This is the leftmost node, not the deepest.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::functional::Tree;
    ///
    /// let tree = Tree::from_keys([5, 3, 8]);
    /// assert_eq!(tree.find_min(), Some((&3, &1)));
    /// ```
    pub fn find_min(&self) -> Option<(&K, &V)> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => match n.left() {
                Tree::Leaf => Some((n.key(), n.value())),
                left => left.find_min(),
            },
        }
    }

    /// Returns the entry with the largest key, or `None` for an
    /// empty tree. This is the rightmost node, not the deepest.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::functional::Tree;
    ///
    /// let tree = Tree::from_keys([5, 3, 8]);
    /// assert_eq!(tree.find_max(), Some((&8, &2)));
    /// ```
    pub fn find_max(&self) -> Option<(&K, &V)> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => match n.right() {
                Tree::Leaf => Some((n.key(), n.value())),
                right => right.find_max(),
            },
        }
    }

    /// Returns a new tree without a node with the given key.
    /// If the tree contained a node with the key, it is removed.
    /// If the tree never contained a node with the key, a new
    /// tree is constructed that is identical to the previous -
    /// deleting a missing key is a no-op, not an error.
    ///
    /// When the deleted node has two children, `replacement` picks
    /// which neighbor takes its place: the in-order successor or the
    /// in-order predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::functional::{Replacement, Tree};
    ///
    /// let tree = Tree::new();
    /// let tree = tree.insert(1, 2);
    /// let newer_tree = tree.delete(&1, Replacement::Successor);
    ///
    /// // All history is preserved.
    /// assert_eq!(newer_tree.find(&1), None);
    /// assert_eq!(tree.find(&1), Some(&2));
    /// ```
    pub fn delete(&self, k: &K, replacement: Replacement) -> Self
    where
        K: cmp::Ord,
    {
        match self {
            Self::Leaf => Self::new(),
            Self::Node(n) => n.delete(k, replacement).map(Self::Node).unwrap_or_default(),
        }
    }

    /// Visits every entry in ascending key order.
    ///
    /// The accumulator is moved through the recursion and handed back,
    /// never shared between sibling calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::functional::Tree;
    ///
    /// let tree = Tree::from_keys([2, 1, 3]);
    /// assert_eq!(tree.traverse(), vec![(&1, &1), (&2, &0), (&3, &2)]);
    /// ```
    pub fn traverse(&self) -> Vec<(&K, &V)> {
        self.traverse_into(Vec::new())
    }

    fn traverse_into<'a>(&'a self, acc: Vec<(&'a K, &'a V)>) -> Vec<(&'a K, &'a V)> {
        match self {
            Self::Leaf => acc,
            Self::Node(n) => {
                let mut acc = n.left().traverse_into(acc);
                acc.push((n.key(), n.value()));
                n.right().traverse_into(acc)
            }
        }
    }

    /// In-order entries holding shared references, for rebuilding
    /// without a `Clone` bound on `K` or `V`.
    fn entries(&self, acc: Vec<(Rc<K>, Rc<V>)>) -> Vec<(Rc<K>, Rc<V>)> {
        match self {
            Self::Leaf => acc,
            Self::Node(n) => {
                let mut acc = n.left().entries(acc);
                acc.push((Rc::clone(&n.key), Rc::clone(&n.value)));
                n.right().entries(acc)
            }
        }
    }

    /// Builds a height-balanced tree from a key-ascending sequence of
    /// entries by lifting the middle entry to the root and recursing
    /// on the two halves. An empty input produces an empty tree.
    ///
    /// The input must already be sorted by key with no duplicates;
    /// ordering is not validated here.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::functional::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    /// assert_eq!(tree.height(), 1);
    /// assert_eq!(tree.find(&2), Some(&'b'));
    /// ```
    pub fn from_sorted(pairs: Vec<(K, V)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (Rc::new(k), Rc::new(v)))
            .collect::<Vec<_>>();
        Self::build(&entries)
    }

    /// Recursive helper for [`from_sorted`][Tree::from_sorted] and
    /// [`balance`][Tree::balance].
    fn build(entries: &[(Rc<K>, Rc<V>)]) -> Self {
        if entries.is_empty() {
            return Self::Leaf;
        }
        // The midpoint of an even-length slice rounds up. Renderers
        // lay trees out by shape, so this tie-break must stay put.
        let mid = entries.len() / 2;
        let left = Child(Rc::new(Self::build(&entries[..mid])));
        let right = Child(Rc::new(Self::build(&entries[mid + 1..])));
        let (key, value) = &entries[mid];
        Self::Node(Node {
            height: left.levels().max(right.levels()) + 1,
            key: Rc::clone(key),
            value: Rc::clone(value),
            left,
            right,
        })
    }

    /// Returns a height-balanced tree with the same entries as this
    /// one, by traversing in order and rebuilding around midpoints.
    ///
    /// This is the only way the tree ever rebalances; `insert` and
    /// `delete` leave the shape alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::functional::Tree;
    ///
    /// // Ascending inserts degrade to a list...
    /// let skewed = Tree::from_keys(0..7);
    /// assert_eq!(skewed.height(), 6);
    ///
    /// // ...until rebuilt.
    /// let balanced = skewed.balance();
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(balanced.traverse(), skewed.traverse());
    /// ```
    pub fn balance(&self) -> Self {
        let entries = self.entries(Vec::new());
        Self::build(&entries)
    }

    /// Gets the height of this tree: `-1` for an empty tree, `0` for a
    /// single node, and one more than the taller child otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::functional::Tree;
    ///
    /// let tree: Tree<i32, i32> = Tree::new();
    /// assert_eq!(tree.height(), -1);
    /// assert_eq!(tree.insert(1, 1).height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        self.levels() as isize - 1
    }

    /// How many nodes are in this tree.
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.left().len() + 1 + n.right().len(),
        }
    }

    /// Whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// How many levels of nodes this tree has. A single node is one
    /// level; [`height`][Tree::height] is this minus one.
    fn levels(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.height,
        }
    }
}

impl<K: cmp::Ord> Tree<K, usize> {
    /// Builds an (unbalanced) tree by inserting the keys one at a
    /// time, storing each key's position in the input as its value.
    /// The shape is whatever the insertion order produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::functional::Tree;
    ///
    /// let tree = Tree::from_keys([5, 3, 8]);
    /// assert_eq!(tree.find(&3), Some(&1));
    /// assert_eq!(tree.find(&4), None);
    /// ```
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter()
            .enumerate()
            .fold(Self::new(), |tree, (index, key)| tree.insert(key, index))
    }
}

/// How many nodes a perfect binary tree of the given height holds:
/// `2^i` nodes on each level `i` in `0..=height`. A lone root is
/// height 0. Renderers use this to size a full-tree layout; it doesn't
/// look at any actual tree.
///
/// # Examples
///
/// ```
/// use bstree::functional::nodes_for_height;
///
/// assert_eq!(nodes_for_height(0), 1);
/// assert_eq!(nodes_for_height(1), 3);
/// assert_eq!(nodes_for_height(4), 31);
/// ```
pub fn nodes_for_height(height: u32) -> u64 {
    2u64.pow(height + 1) - 1
}

struct Child<K, V>(Rc<Tree<K, V>>);
impl<K, V> Clone for Child<K, V> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}
impl<K, V> Child<K, V> {
    fn new() -> Self {
        Self(Rc::new(Tree::new()))
    }

    fn levels(&self) -> usize {
        self.0.levels()
    }

    fn insert(&self, key: K, value: V) -> Self
    where
        K: cmp::Ord,
    {
        Self(Rc::new(self.0.insert(key, value)))
    }

    fn find(&self, k: &K) -> Option<&V>
    where
        K: cmp::Ord,
    {
        self.0.find(k)
    }

    fn delete(&self, k: &K, replacement: Replacement) -> Self
    where
        K: cmp::Ord,
    {
        Self(Rc::new(self.0.delete(k, replacement)))
    }
}

/// A `Node` has a key that is used for searching/sorting and a value
/// that is associated with that key. It always has two children although
/// those children may be [`Leaf`][Tree::Leaf]s.
///
/// The accessors exist so consumers like renderers can walk a snapshot
/// node by node without going through the `Tree` operations.
pub struct Node<K, V> {
    key: Rc<K>,
    value: Rc<V>,
    left: Child<K, V>,
    right: Child<K, V>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

/// Manual implementation of `Clone` so we don't clone references when the generic parameters
/// aren't `Clone` themselves.
///
/// Note the comment on generic structs in
/// [the docs][<https://doc.rust-lang.org/std/clone/trait.Clone.html#derivable>].
impl<K, V> Clone for Node<K, V> {
    fn clone(&self) -> Self {
        Self {
            height: self.height,
            key: Rc::clone(&self.key),
            left: self.left.clone(),
            right: self.right.clone(),
            value: Rc::clone(&self.value),
        }
    }
}

impl<K, V> Node<K, V> {
    /// Construct a new `Node` with the given `key` and `value`.
    fn new(key: K, value: V) -> Self {
        Self {
            height: 1,
            key: Rc::new(key),
            left: Child::new(),
            right: Child::new(),
            value: Rc::new(value),
        }
    }

    /// This node's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored with this node's key.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// This node's left subtree. Every key in it is smaller than this
    /// node's key.
    pub fn left(&self) -> &Tree<K, V> {
        &self.left.0
    }

    /// This node's right subtree. Every key in it is larger than this
    /// node's key.
    pub fn right(&self) -> &Tree<K, V> {
        &self.right.0
    }

    /// Create a new Node with the same key/value as this node
    /// but with the given children.
    fn clone_with_children(&self, left_child: Child<K, V>, right_child: Child<K, V>) -> Self {
        Self {
            height: left_child.levels().max(right_child.levels()) + 1,
            key: Rc::clone(&self.key),
            left: left_child,
            right: right_child,
            value: Rc::clone(&self.value),
        }
    }

    fn insert(&self, key: K, value: V) -> Self
    where
        K: cmp::Ord,
    {
        match key.cmp(&self.key) {
            cmp::Ordering::Less => {
                let new_left = self.left.insert(key, value);
                self.clone_with_children(new_left, self.right.clone())
            }
            cmp::Ordering::Equal => Self {
                height: self.height,
                key: Rc::clone(&self.key),
                left: self.left.clone(),
                right: self.right.clone(),
                value: Rc::new(value),
            },
            cmp::Ordering::Greater => {
                let new_right = self.right.insert(key, value);
                self.clone_with_children(self.left.clone(), new_right)
            }
        }
    }

    fn find(&self, k: &K) -> Option<&V>
    where
        K: cmp::Ord,
    {
        match k.cmp(&self.key) {
            cmp::Ordering::Less => self.left.find(k),
            cmp::Ordering::Equal => Some(&self.value),
            cmp::Ordering::Greater => self.right.find(k),
        }
    }

    fn delete(&self, k: &K, replacement: Replacement) -> Option<Self>
    where
        K: cmp::Ord,
    {
        match k.cmp(&self.key) {
            cmp::Ordering::Less => {
                let new_left = self.left.delete(k, replacement);
                Some(self.clone_with_children(new_left, self.right.clone()))
            }
            cmp::Ordering::Equal => match (self.left.0.as_ref(), self.right.0.as_ref()) {
                (Tree::Leaf, Tree::Leaf) => None,
                (Tree::Leaf, Tree::Node(right)) => Some(right.clone()),
                (Tree::Node(left), Tree::Leaf) => Some(left.clone()),

                // With two children, the chosen neighbor's key/value
                // move up to this position and the neighbor is deleted
                // from the subtree it came from, so it appears exactly
                // once in the result. The other subtree is shared.
                (Tree::Node(left), Tree::Node(right)) => {
                    let (key, value) = match replacement {
                        Replacement::Successor => right.min_entry(),
                        Replacement::Predecessor => left.max_entry(),
                    };
                    let (new_left, new_right) = match replacement {
                        Replacement::Successor => {
                            (self.left.clone(), self.right.delete(&key, replacement))
                        }
                        Replacement::Predecessor => {
                            (self.left.delete(&key, replacement), self.right.clone())
                        }
                    };
                    Some(Node {
                        height: new_left.levels().max(new_right.levels()) + 1,
                        key,
                        value,
                        left: new_left,
                        right: new_right,
                    })
                }
            },
            cmp::Ordering::Greater => {
                let new_right = self.right.delete(k, replacement);
                Some(self.clone_with_children(self.left.clone(), new_right))
            }
        }
    }

    /// The key and value of the smallest node in this subtree.
    fn min_entry(&self) -> (Rc<K>, Rc<V>) {
        match self.left.0.as_ref() {
            Tree::Leaf => (Rc::clone(&self.key), Rc::clone(&self.value)),
            Tree::Node(l) => l.min_entry(),
        }
    }

    /// The key and value of the largest node in this subtree.
    fn max_entry(&self) -> (Rc<K>, Rc<V>) {
        match self.right.0.as_ref() {
            Tree::Leaf => (Rc::clone(&self.key), Rc::clone(&self.value)),
            Tree::Node(r) => r.max_entry(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The keys from the visualizer's demo tree. Inserted in this
    /// order they produce 5 at the root with 3 and 8 below it.
    const DEMO_KEYS: [i32; 7] = [5, 3, 8, 1, 4, 7, 9];

    fn keys_of<K: Copy, V>(tree: &Tree<K, V>) -> Vec<K> {
        tree.traverse().into_iter().map(|(k, _)| *k).collect()
    }

    fn root_key<K: Copy, V>(tree: &Tree<K, V>) -> K {
        match tree {
            Tree::Leaf => panic!("empty tree has no root"),
            Tree::Node(n) => *n.key(),
        }
    }

    #[test]
    fn test_insert_existing_key_replaces_value() {
        let mut tree = Tree::new();
        tree = tree.insert(1, 2);
        tree = tree.insert(2, 3);
        tree = tree.insert(1, 7);

        assert_eq!(tree.find(&1), Some(&7));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_delete_no_children() {
        let mut tree = Tree::new();
        tree = tree.insert(1, 2);
        tree = tree.insert(2, 3);
        tree = tree.delete(&2, Replacement::Successor);

        assert_eq!(tree.find(&1), Some(&2));
        assert_eq!(tree.find(&2), None);
    }

    #[test]
    fn test_delete_no_left_child() {
        let mut tree = Tree::new();
        tree = tree.insert(1, 2);
        tree = tree.insert(2, 3);
        tree = tree.delete(&1, Replacement::Successor);

        assert_eq!(tree.find(&1), None);
        assert_eq!(tree.find(&2), Some(&3));
    }

    #[test]
    fn test_delete_no_right_child() {
        let mut tree = Tree::new();
        tree = tree.insert(2, 3);
        tree = tree.insert(1, 2);
        tree = tree.delete(&2, Replacement::Predecessor);

        assert_eq!(tree.find(&1), Some(&2));
        assert_eq!(tree.find(&2), None);
    }

    #[test]
    fn test_delete_two_children_successor() {
        let tree = Tree::from_keys(DEMO_KEYS);
        let tree = tree.delete(&5, Replacement::Successor);

        // 7 is the smallest key in the right subtree {8, 7, 9}.
        assert_eq!(root_key(&tree), 7);
        assert_eq!(keys_of(&tree), vec![1, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn test_delete_two_children_predecessor() {
        let tree = Tree::from_keys(DEMO_KEYS);
        let tree = tree.delete(&5, Replacement::Predecessor);

        // 4 is the largest key in the left subtree {3, 1, 4}.
        assert_eq!(root_key(&tree), 4);
        assert_eq!(keys_of(&tree), vec![1, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn test_delete_missing_key_is_noop() {
        let tree = Tree::from_keys(DEMO_KEYS);
        let after = tree.delete(&6, Replacement::Successor);

        assert_eq!(after.traverse(), tree.traverse());

        let empty: Tree<i32, i32> = Tree::new();
        assert!(empty.delete(&6, Replacement::Successor).is_empty());
    }

    #[test]
    fn test_delete_keeps_old_snapshot() {
        let tree = Tree::from_keys(DEMO_KEYS);
        let after = tree.delete(&3, Replacement::Successor);

        assert_eq!(after.find(&3), None);
        assert_eq!(tree.find(&3), Some(&1));
    }

    #[test]
    fn test_find_min_max() {
        let empty: Tree<i32, i32> = Tree::new();
        assert_eq!(empty.find_min(), None);
        assert_eq!(empty.find_max(), None);

        let tree = Tree::from_keys(DEMO_KEYS);
        assert_eq!(tree.find_min(), Some((&1, &3)));
        assert_eq!(tree.find_max(), Some((&9, &6)));
    }

    #[test]
    fn test_traverse_demo_tree() {
        let tree = Tree::from_keys(DEMO_KEYS);

        assert_eq!(keys_of(&tree), vec![1, 3, 4, 5, 7, 8, 9]);
        // Values are positions in the insertion order.
        assert_eq!(tree.find(&4), Some(&4));
        assert_eq!(tree.find(&5), Some(&0));
    }

    #[test]
    fn test_traverse_empty() {
        let tree: Tree<i32, i32> = Tree::new();
        assert!(tree.traverse().is_empty());
    }

    #[test]
    fn test_from_sorted_midpoint_rounds_up() {
        // Four entries: index 2 (not 1) becomes the root.
        let tree = Tree::from_sorted(vec![(1, ()), (2, ()), (3, ()), (4, ())]);
        assert_eq!(root_key(&tree), 3);
        assert_eq!(keys_of(&tree), vec![1, 2, 3, 4]);

        let empty: Tree<i32, ()> = Tree::from_sorted(Vec::new());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_sorted_height() {
        for n in 1usize..=64 {
            let pairs = (0..n as i32).map(|k| (k, ())).collect::<Vec<_>>();
            let tree = Tree::from_sorted(pairs);
            let expected = ((n + 1) as f64).log2().ceil() as isize - 1;
            assert_eq!(tree.height(), expected, "height of {} sorted pairs", n);
        }
    }

    #[test]
    fn test_balance_preserves_entries() {
        let skewed = Tree::from_keys(0..20);
        assert_eq!(skewed.height(), 19);

        let balanced = skewed.balance();
        assert_eq!(balanced.height(), 4);
        assert_eq!(balanced.traverse(), skewed.traverse());
    }

    #[test]
    fn test_balance_empty() {
        let tree: Tree<i32, i32> = Tree::new();
        assert!(tree.balance().is_empty());
    }

    #[test]
    fn test_height() {
        let mut tree = Tree::new();
        assert_eq!(tree.height(), -1);

        tree = tree.insert(1, 1);
        assert_eq!(tree.height(), 0);

        // Insert a value to the right making it taller.
        tree = tree.insert(2, 2);
        assert_eq!(tree.height(), 1);

        // Insert a value to the left not changing the overall height.
        tree = tree.insert(0, 0);
        assert_eq!(tree.height(), 1);

        // Delete that left value to get to the previous heights.
        tree = tree.delete(&0, Replacement::Successor);
        assert_eq!(tree.height(), 1);

        // A chain of right children is as tall as it is long.
        assert_eq!(Tree::from_keys(0..5).height(), 4);
    }

    #[test]
    fn test_node_accessors() {
        let tree = Tree::from_keys(DEMO_KEYS);
        let root = match &tree {
            Tree::Leaf => panic!("demo tree is not empty"),
            Tree::Node(n) => n,
        };

        assert_eq!(root.key(), &5);
        assert_eq!(root.value(), &0);
        assert_eq!(root_key(root.left()), 3);
        assert_eq!(root_key(root.right()), 8);
    }

    #[test]
    fn test_nodes_for_height() {
        assert_eq!(nodes_for_height(0), 1);
        assert_eq!(nodes_for_height(1), 3);
        assert_eq!(nodes_for_height(2), 7);
        assert_eq!(nodes_for_height(5), 63);
    }
}

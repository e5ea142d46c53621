//! A Functional BST. This is modeled after a BST one would see in
//! a functional language like Haskell. Any operation that one would
//! expect to modify the tree (e.g. `insert`) instead returns a new tree
//! that references many of the nodes of the original tree.
//!
//! # Examples
//!
//! ```
//! use pbst::functional::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains("b"));
//! assert_eq!(tree.render(), "()");
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert("b");
//!
//! // The new tree has this new key but the old one doesn't.
//! assert!(new_tree.contains("b"));
//! assert!(!tree.contains("b"));
//!
//! // Inserting the same key again gives yet another tree with two copies of it.
//! let newer_tree = new_tree.insert("b");
//!
//! // All history is preserved.
//! assert_eq!(newer_tree.size(), 2);
//! assert_eq!(new_tree.size(), 1);
//! assert_eq!(tree.size(), 0);
//! assert_eq!(newer_tree.render(), "(b(b))");
//! ```

use std::borrow::Borrow;
use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

#[cfg(feature = "arc")]
type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
type ReferenceCounter<T> = std::rc::Rc<T>;

/// A persistent Binary Search Tree. This can be used for inserting and
/// finding keys. Note that this data structure is functional - operations
/// that would modify the tree instead return a new tree.
///
/// Keys default to `String`, which are ordered byte-wise. Any `Ord` key works.
pub enum Tree<K = String> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a key and two children (which are both `Tree`s).
    /// This enum trivially wraps the [`Node`] struct.
    Node(Node<K>),
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning a tree only bumps the reference counts of its root's children.
impl<K> Clone for Tree<K> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Returns how many keys are in this tree. Duplicate keys are counted once per insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbst::Tree;
    ///
    /// let tree = Tree::new().insert("m").insert("m");
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(Tree::<String>::new().size(), 0);
    /// ```
    pub fn size(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.size,
        }
    }

    /// Returns `true` if there are no keys in this tree.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Checks whether the given key was ever inserted into this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbst::Tree;
    ///
    /// let tree = Tree::new().insert(String::from("x"));
    ///
    /// assert!(tree.contains("x"));
    /// assert!(!tree.contains("y"));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: cmp::Ord + ?Sized,
    {
        let mut tree = self;
        while let Self::Node(n) = tree {
            tree = match key.cmp(<K as Borrow<Q>>::borrow(&n.key)) {
                cmp::Ordering::Less => n.left.tree(),
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => n.right.tree(),
            };
        }

        false
    }

    /// Returns a new tree that includes a node containing the given key.
    /// A key equal to one already in the tree is placed in that node's right
    /// subtree, so the new tree always holds one more key than this one.
    ///
    /// Only the nodes on the path to the new key are rebuilt. Every other
    /// subtree is shared with this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbst::Tree;
    ///
    /// let tree = Tree::new().insert("b");
    /// let new_tree = tree.insert("a").insert("c");
    ///
    /// // All history is preserved.
    /// assert_eq!(new_tree.render(), "((a)b(c))");
    /// assert_eq!(tree.render(), "(b)");
    /// ```
    pub fn insert(&self, key: K) -> Self
    where
        K: cmp::Ord,
    {
        let mut path = Vec::new();
        let mut tree = self;
        while let Self::Node(n) = tree {
            let direction = match key.cmp(&n.key) {
                cmp::Ordering::Less => Direction::Left,
                cmp::Ordering::Equal | cmp::Ordering::Greater => Direction::Right,
            };
            tree = n.child(direction).tree();
            path.push((n, direction));
        }

        path.into_iter()
            .rev()
            .fold(Self::Node(Node::new(key)), |subtree, (n, direction)| {
                Self::Node(n.with_child(direction, Child::from(subtree)))
            })
    }

    /// Renders the tree fully parenthesised, in order. An empty tree is `()`
    /// and a node is its left subtree, key and right subtree written back to
    /// back inside one pair of parentheses, leaving out empty subtrees. No
    /// separators are added, so multi-character keys can run together.
    ///
    /// This is the same as the [`Display`](fmt::Display) output.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbst::Tree;
    ///
    /// let tree = Tree::new().insert("b").insert("a");
    ///
    /// assert_eq!(tree.render(), "((a)b)");
    /// assert_eq!(tree.to_string(), "((a)b)");
    /// ```
    pub fn render(&self) -> String
    where
        K: fmt::Display,
    {
        self.to_string()
    }

    /// Writes the rendering of this tree, formatting keys with `write_key`.
    fn write_with<F>(&self, f: &mut fmt::Formatter<'_>, write_key: F) -> fmt::Result
    where
        F: Fn(&K, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        let root = match self {
            Self::Leaf => return f.write_str("()"),
            Self::Node(n) => n,
        };

        let mut pending = vec![Piece::Node(root)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(n) => {
                    f.write_str("(")?;
                    // Pushed in reverse so they come off the stack left to right.
                    pending.push(Piece::Close);
                    if let Self::Node(right) = n.right.tree() {
                        pending.push(Piece::Node(right));
                    }
                    pending.push(Piece::Key(n.key.as_ref()));
                    if let Self::Node(left) = n.left.tree() {
                        pending.push(Piece::Node(left));
                    }
                }
                Piece::Key(key) => write_key(key, f)?,
                Piece::Close => f.write_str(")")?,
            }
        }

        Ok(())
    }
}

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, <K as fmt::Display>::fmt)
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tree")?;
        self.write_with(f, <K as fmt::Debug>::fmt)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: cmp::Ord,
{
    /// Inserts every key in iteration order, starting from an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbst::Tree;
    ///
    /// let tree: Tree<&str> = ["b", "a", "c"].iter().copied().collect();
    ///
    /// assert_eq!(tree.render(), "((a)b(c))");
    /// ```
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |tree, key| tree.insert(key))
    }
}

/// Which child of a node to descend into.
#[derive(Clone, Copy)]
enum Direction {
    Left,
    Right,
}

/// One step of rendering a tree without recursing.
enum Piece<'a, K> {
    Node(&'a Node<K>),
    Key(&'a K),
    Close,
}

struct Child<K>(ReferenceCounter<Tree<K>>);
impl<K> Clone for Child<K> {
    fn clone(&self) -> Self {
        Self(ReferenceCounter::clone(&self.0))
    }
}
impl<K> From<Tree<K>> for Child<K> {
    fn from(tree: Tree<K>) -> Self {
        Self(ReferenceCounter::new(tree))
    }
}
impl<K> Child<K> {
    fn new() -> Self {
        Self::from(Tree::new())
    }

    fn tree(&self) -> &Tree<K> {
        &self.0
    }

    fn size(&self) -> usize {
        self.0.size()
    }

    /// Moves the node out of this child into `orphans` if no other tree
    /// references it, leaving a `Leaf` in its place.
    fn release(&mut self, orphans: &mut Vec<Node<K>>) {
        if let Some(tree) = ReferenceCounter::get_mut(&mut self.0) {
            if let Tree::Node(n) = mem::take(tree) {
                orphans.push(n);
            }
        }
    }
}

/// A `Node` has a key that is used for searching/sorting. It always has two
/// children although those children may be [`Leaf`][Tree::Leaf]s.
pub struct Node<K> {
    key: ReferenceCounter<K>,
    left: Child<K>,
    right: Child<K>,

    /// How many keys are in the subtree rooted at this node, its own included.
    size: usize,
}

/// Manual implementation of `Clone` so we don't clone references when the generic parameters
/// aren't `Clone` themselves.
///
/// Note the comment on generic structs in
/// [the docs][<https://doc.rust-lang.org/std/clone/trait.Clone.html#derivable>].
impl<K> Clone for Node<K> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            key: ReferenceCounter::clone(&self.key),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

/// Unlinks uniquely owned descendants onto a heap stack before they are
/// dropped, so a long chain of nodes doesn't overflow the call stack.
/// Subtrees still referenced by another tree are left for that tree to drop.
impl<K> Drop for Node<K> {
    fn drop(&mut self) {
        let mut orphans = Vec::new();
        self.left.release(&mut orphans);
        self.right.release(&mut orphans);

        while let Some(mut n) = orphans.pop() {
            n.left.release(&mut orphans);
            n.right.release(&mut orphans);
        }
    }
}

impl<K> Node<K> {
    /// Construct a new `Node` with the given `key` and two empty children.
    fn new(key: K) -> Self {
        let leaf = Child::new();
        Self {
            size: 1,
            key: ReferenceCounter::new(key),
            left: leaf.clone(),
            right: leaf,
        }
    }

    fn child(&self, direction: Direction) -> &Child<K> {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    /// Create a new Node with the same key as this node, the given child on
    /// one side and this node's own child on the other.
    fn with_child(&self, direction: Direction, child: Child<K>) -> Self {
        match direction {
            Direction::Left => self.clone_with_children(child, self.right.clone()),
            Direction::Right => self.clone_with_children(self.left.clone(), child),
        }
    }

    /// Create a new Node with the same key as this node
    /// but with the given children.
    fn clone_with_children(&self, left: Child<K>, right: Child<K>) -> Self {
        Self {
            size: 1 + left.size() + right.size(),
            key: ReferenceCounter::clone(&self.key),
            left,
            right,
        }
    }
}

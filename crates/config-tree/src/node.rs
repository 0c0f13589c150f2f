//! Configuration tree nodes
//!
//! A [`Node`] is either a [`Leaf`] or a [`Branch`] of named children. Trees
//! own their children outright, so a tree is a plain value: clone it, compare
//! it, send it to another thread.
//!
//! # Equality
//!
//! Two branches are equal when they hold the same child names and each pair
//! of children is equal. Child order is kept for iteration and conversion
//! but does not take part in equality.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::leaf::Leaf;
use crate::path::{KeyPath, validate_segment};
use crate::scalar::Scalar;

/// A node of a configuration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Branch(Branch),
}

/// Which variant a [`Node`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Branch,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => f.write_str("leaf"),
            Self::Branch => f.write_str("branch"),
        }
    }
}

/// Named children in insertion order. Names are unique, non-empty and
/// never contain the path separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    children: IndexMap<String, Node>,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Leaf(_) => NodeKind::Leaf,
            Self::Branch(_) => NodeKind::Branch,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// Project onto the leaf variant.
    ///
    /// # Errors
    ///
    /// Returns `WrongVariant` if the node is a branch.
    pub fn as_leaf(&self) -> Result<&Leaf> {
        match self {
            Self::Leaf(leaf) => Ok(leaf),
            Self::Branch(_) => Err(Error::WrongVariant {
                expected: NodeKind::Leaf,
                found: NodeKind::Branch,
            }),
        }
    }

    /// Project onto the branch variant.
    ///
    /// # Errors
    ///
    /// Returns `WrongVariant` if the node is a leaf.
    pub fn as_branch(&self) -> Result<&Branch> {
        match self {
            Self::Branch(branch) => Ok(branch),
            Self::Leaf(_) => Err(Error::WrongVariant {
                expected: NodeKind::Branch,
                found: NodeKind::Leaf,
            }),
        }
    }

    /// Descend `path` through branch children. The root path returns `self`.
    pub fn find(&self, path: impl Into<KeyPath>) -> Option<&Node> {
        let path = path.into();
        let mut current = self;
        for segment in path.segments() {
            current = match current {
                Self::Branch(branch) => branch.get(segment)?,
                Self::Leaf(_) => return None,
            };
        }
        Some(current)
    }

    /// Read the leaf at `path` as `T`.
    ///
    /// Returns `None` when the path is missing, ends on a branch, or holds a
    /// leaf that `T` does not accept (see [`Scalar`]).
    ///
    /// ```
    /// use config_tree::{Branch, Node};
    ///
    /// let tree = Node::from(Branch::from_pairs([("channel", Node::from(0))]).unwrap());
    /// assert_eq!(tree.get::<i64>("channel"), Some(0));
    /// assert_eq!(tree.get::<f64>("channel"), Some(0.0));
    /// assert_eq!(tree.get::<bool>("channel"), None);
    /// assert_eq!(tree.get::<i64>("nope"), None);
    /// ```
    pub fn get<T: Scalar>(&self, path: impl Into<KeyPath>) -> Option<T> {
        match self.find(path)? {
            Self::Leaf(leaf) => T::from_leaf(leaf),
            Self::Branch(_) => None,
        }
    }

    /// Read the leaf at `path` as `T`, failing instead of returning `None`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing is stored at `path`
    /// - `TypeMismatch` if the path holds a branch or a leaf `T` does not accept
    pub fn get_required<T: Scalar>(&self, path: impl Into<KeyPath>) -> Result<T> {
        let path = path.into();
        match self.find(&path) {
            None => Err(Error::not_found(&path)),
            Some(Self::Branch(_)) => Err(Error::TypeMismatch {
                path: path.to_string(),
                expected: T::TYPE_NAME,
                found: NodeKind::Branch.to_string(),
            }),
            Some(Self::Leaf(leaf)) => T::from_leaf(leaf)
                .ok_or_else(|| Error::type_mismatch(&path, T::TYPE_NAME, leaf.kind())),
        }
    }
}

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a branch from ordered `(name, node)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if two pairs share a name and `InvalidName` for
    /// a name that cannot be a path segment.
    pub fn from_pairs<I, K, N>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: Into<Node>,
    {
        let mut branch = Self::new();
        for (name, node) in pairs {
            branch.insert(name, node)?;
        }
        Ok(branch)
    }

    /// Append a child.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if `name` is empty or contains `/`, and
    /// `DuplicateKey` if a child with that name already exists. Either way the
    /// branch is left unchanged.
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<Node>) -> Result<()> {
        let name = name.into();
        validate_segment(&name)?;
        if self.children.contains_key(&name) {
            return Err(Error::DuplicateKey { key: name });
        }
        self.children.insert(name, node.into());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Read the leaf at `path` below this branch as `T`.
    pub fn get_value<T: Scalar>(&self, path: impl Into<KeyPath>) -> Option<T> {
        let path = path.into();
        let (first, rest) = path.segments().split_first()?;
        self.get(first)?.get(KeyPath::from_segments(rest.iter().cloned()))
    }

    /// Read the leaf at `path` below this branch, failing when absent.
    pub fn get_required<T: Scalar>(&self, path: impl Into<KeyPath>) -> Result<T> {
        let path = path.into();
        let Some((first, rest)) = path.segments().split_first() else {
            return Err(Error::TypeMismatch {
                path: path.to_string(),
                expected: T::TYPE_NAME,
                found: NodeKind::Branch.to_string(),
            });
        };
        let child = self.get(first).ok_or_else(|| Error::not_found(&path))?;
        child
            .get_required(KeyPath::from_segments(rest.iter().cloned()))
            .map_err(|err| match err {
                // Report the full path, not the remainder below the child.
                Error::NotFound { .. } => Error::not_found(&path),
                Error::TypeMismatch {
                    expected, found, ..
                } => Error::TypeMismatch {
                    path: path.to_string(),
                    expected,
                    found,
                },
                other => other,
            })
    }

    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    pub(crate) fn insert_unchecked(&mut self, name: String, node: Node) {
        self.children.insert(name, node);
    }
}

impl<'a> IntoIterator for &'a Branch {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl From<Branch> for Node {
    fn from(branch: Branch) -> Self {
        Self::Branch(branch)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

macro_rules! node_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::Leaf(Leaf::from(value))
                }
            }
        )*
    };
}

node_from_scalar!(bool, i32, i64, u32, f64, &str, String);

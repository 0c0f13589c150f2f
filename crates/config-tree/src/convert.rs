//! Conversion between trees and flat key-value pairs
//!
//! Backends store configuration as flat `(path, value)` pairs; callers want
//! nested trees. [`tree_to_key_values`] and [`key_values_to_tree`] convert
//! between the two without losing order or leaf kinds.
//!
//! # Known limitation
//!
//! An empty branch has no leaves and therefore produces no pair. A tree
//! containing empty branches does not survive a round trip: the empty
//! branches are gone after `key_values_to_tree(tree_to_key_values(tree))`.
//! Every other tree round-trips exactly.
//!
//! ```
//! use config_tree::{Leaf, KeyPath, key_values_to_tree, tree_to_key_values};
//!
//! let pairs = vec![
//!     (KeyPath::parse("/dir/bool"), Leaf::Bool(false)),
//!     (KeyPath::parse("/dir/double"), Leaf::Float(45.6)),
//!     (KeyPath::parse("/dir/subdir/int"), Leaf::Int(123)),
//!     (KeyPath::parse("/dir/subdir/subsubdir/string"), Leaf::from("string")),
//! ];
//! let tree = key_values_to_tree(pairs.clone()).unwrap();
//! assert_eq!(tree.get::<i64>("/dir/subdir/int"), Some(123));
//! assert_eq!(tree_to_key_values(&tree), pairs);
//! ```

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::leaf::Leaf;
use crate::node::{Branch, Node};
use crate::path::KeyPath;
use crate::wire;

/// Flat view of a subtree: path string to wire-form value.
pub type KeyValueMap = HashMap<String, String>;

/// Flatten a tree into `(path, leaf)` pairs.
///
/// Pairs come out in depth-first pre-order, following each branch's child
/// order. A leaf at the root yields a single pair at `/`. Empty branches
/// yield nothing.
pub fn tree_to_key_values(tree: &Node) -> Vec<(KeyPath, Leaf)> {
    let mut pairs = Vec::new();
    collect(tree, &KeyPath::root(), &mut pairs);
    pairs
}

fn collect(node: &Node, path: &KeyPath, out: &mut Vec<(KeyPath, Leaf)>) {
    match node {
        Node::Leaf(leaf) => out.push((path.clone(), leaf.clone())),
        Node::Branch(branch) => {
            for (name, child) in branch {
                let mut child_path = path.clone();
                child_path.push_unchecked(name.clone());
                collect(child, &child_path, out);
            }
        }
    }
}

/// Flatten a tree into a [`KeyValueMap`] of wire strings.
pub fn tree_to_key_value_map(tree: &Node) -> KeyValueMap {
    key_values_to_map(tree_to_key_values(tree))
}

/// Render `(path, leaf)` pairs as a [`KeyValueMap`].
pub fn key_values_to_map<I>(pairs: I) -> KeyValueMap
where
    I: IntoIterator<Item = (KeyPath, Leaf)>,
{
    pairs
        .into_iter()
        .map(|(path, leaf)| (path.to_string(), wire::format(&leaf)))
        .collect()
}

/// Assemble a tree from `(path, leaf)` pairs.
///
/// Intermediate branches are created on first reference and shared by
/// later pairs; child order follows first appearance. A single pair at `/`
/// yields a leaf root. No pairs yield an empty branch.
///
/// # Errors
///
/// Returns `ConflictingPath` when a pair needs a branch where a leaf is
/// already stored, a leaf where a branch already exists, or repeats a path.
pub fn key_values_to_tree<I, P, L>(pairs: I) -> Result<Node>
where
    I: IntoIterator<Item = (P, L)>,
    P: Into<KeyPath>,
    L: Into<Leaf>,
{
    let mut root: Option<Node> = None;

    for (path, leaf) in pairs {
        let path = path.into();
        let leaf = leaf.into();
        tracing::trace!(%path, "placing key");

        let Some((last, parents)) = path.segments().split_last() else {
            if root.is_some() {
                return Err(Error::conflicting(&path, "root already holds a value"));
            }
            root = Some(Node::Leaf(leaf));
            continue;
        };

        let node = root.get_or_insert_with(|| Node::Branch(Branch::new()));
        let mut branch = match node {
            Node::Branch(branch) => branch,
            Node::Leaf(_) => return Err(Error::conflicting(&path, "root holds a leaf")),
        };

        for segment in parents {
            if !branch.contains(segment) {
                branch.insert_unchecked(segment.clone(), Node::Branch(Branch::new()));
            }
            branch = match branch.child_mut(segment) {
                Some(Node::Branch(child)) => child,
                _ => {
                    return Err(Error::conflicting(
                        &path,
                        format!("'{segment}' already holds a leaf"),
                    ));
                }
            };
        }

        match branch.get(last) {
            Some(Node::Branch(_)) => {
                return Err(Error::conflicting(&path, "path already holds a branch"));
            }
            Some(Node::Leaf(_)) => {
                return Err(Error::conflicting(&path, "path is listed twice"));
            }
            None => branch.insert_unchecked(last.clone(), Node::Leaf(leaf)),
        }
    }

    Ok(root.unwrap_or_else(|| Node::Branch(Branch::new())))
}

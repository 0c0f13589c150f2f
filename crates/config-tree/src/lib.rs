//! Typed configuration trees for Configuration Store
//!
//! Provides the value model shared by every backend driver:
//!
//! - [`Leaf`]: a scalar value with a fixed kind (bool, integer, float, string, null)
//! - [`Node`] / [`Branch`]: an owned, ordered tree of leaves
//! - [`KeyPath`]: a normalized hierarchical path such as `/equipment_1/serial`
//! - [`convert`]: lossless conversion between trees and flat `(path, leaf)` pairs
//! - [`wire`]: the string form used by backends that only store text
//!
//! # Example
//!
//! ```
//! use config_tree::{Branch, Node, convert};
//!
//! let equipment = Branch::from_pairs([
//!     ("serial", Node::from(33333)),
//!     ("type", Node::from("rorc")),
//! ]).unwrap();
//! let tree = Node::from(Branch::from_pairs([("equipment_1", Node::from(equipment))]).unwrap());
//!
//! assert_eq!(tree.get::<i64>("/equipment_1/serial"), Some(33333));
//! assert_eq!(tree.get::<i64>("/equipment_1/nope"), None);
//!
//! let pairs = convert::tree_to_key_values(&tree);
//! assert_eq!(convert::key_values_to_tree(pairs).unwrap(), tree);
//! ```

pub mod convert;
pub mod error;
pub mod leaf;
pub mod node;
pub mod path;
pub mod scalar;
pub mod wire;

pub use convert::{KeyValueMap, key_values_to_tree, tree_to_key_value_map, tree_to_key_values};
pub use error::{Error, Result};
pub use leaf::{Leaf, LeafKind};
pub use node::{Branch, Node, NodeKind};
pub use path::KeyPath;
pub use scalar::Scalar;

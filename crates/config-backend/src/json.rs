//! JSON file backend
//!
//! Stores configuration as a JSON object tree on disk. Leaves keep their
//! native JSON types, so recursive reads return `true`, `33333` and
//! `"rorc"` rather than strings. Arrays have no place in the path model and
//! are reported as unsupported wherever they are encountered.
//!
//! The file is read on every call and rewritten atomically on every write.
//! Writers serialize on an advisory lock held on a `.<name>.lock` sidecar
//! file, so concurrent updates from several drivers never drop each other's
//! keys.

use std::path::{Path, PathBuf};

use config_tree::path::validate_segment;
use config_tree::{Branch, Error as TreeError, KeyPath, Leaf, Node, tree_to_key_values, wire};
use serde_json::{Map, Number, Value};

use crate::driver::BackendDriver;
use crate::error::{Error, Result};
use crate::io;

const BACKEND: &str = "json";

/// Driver for a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonDriver {
    path: PathBuf,
}

impl JsonDriver {
    /// Open an existing JSON document.
    ///
    /// The file is parsed once up front so a missing or malformed document
    /// fails here rather than on first use.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let driver = Self { path: path.into() };
        driver.load()?;
        tracing::debug!(path = %driver.path.display(), "opened JSON backend");
        Ok(driver)
    }

    /// Open a JSON document, creating an empty one if the file is missing.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let driver = Self { path: path.into() };
        io::with_exclusive_lock(&driver.path, || {
            if io::read_text_if_exists(&driver.path)?.is_none() {
                driver.store(&Value::Object(Map::new()))?;
            }
            Ok(())
        })?;
        driver.load()?;
        Ok(driver)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Value> {
        let content = io::read_text(&self.path)?;
        self.parse(&content)
    }

    fn load_or_empty(&self) -> Result<Value> {
        match io::read_text_if_exists(&self.path)? {
            Some(content) => self.parse(&content),
            None => Ok(Value::Object(Map::new())),
        }
    }

    fn parse(&self, content: &str) -> Result<Value> {
        serde_json::from_str(content).map_err(|e| Error::Parse {
            path: self.path.clone(),
            format: "JSON",
            message: e.to_string(),
        })
    }

    fn store(&self, value: &Value) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        io::write_atomic(&self.path, content.as_bytes())
    }
}

impl BackendDriver for JsonDriver {
    fn name(&self) -> &'static str {
        BACKEND
    }

    fn raw_get(&self, path: &KeyPath) -> Result<Option<String>> {
        Ok(self.get_leaf(path)?.map(|leaf| wire::format(&leaf)))
    }

    fn raw_set(&mut self, path: &KeyPath, value: &str) -> Result<()> {
        self.set_leaf(path, &Leaf::String(value.to_string()))
    }

    fn raw_get_by_prefix(&self, path: &KeyPath) -> Result<Vec<(KeyPath, String)>> {
        Ok(self
            .get_leaves_by_prefix(path)?
            .into_iter()
            .map(|(key, leaf)| (key, wire::format(&leaf)))
            .collect())
    }

    fn get_leaf(&self, path: &KeyPath) -> Result<Option<Leaf>> {
        let document = self.load()?;
        match value_at(&document, path)? {
            None | Some(Value::Object(_)) => Ok(None),
            Some(value) => json_to_leaf(value, path).map(Some),
        }
    }

    fn set_leaf(&mut self, path: &KeyPath, leaf: &Leaf) -> Result<()> {
        io::with_exclusive_lock(&self.path, || {
            let mut document = self.load_or_empty()?;
            set_value_at(&mut document, path, leaf_to_json(leaf))?;
            self.store(&document)
        })?;
        tracing::debug!(%path, file = %self.path.display(), "set JSON value");
        Ok(())
    }

    fn get_leaves_by_prefix(&self, path: &KeyPath) -> Result<Vec<(KeyPath, Leaf)>> {
        let document = self.load()?;
        let Some(subtree) = value_at(&document, path)? else {
            return Ok(Vec::new());
        };
        let node = json_to_node(subtree, path)?;
        let pairs: Vec<_> = tree_to_key_values(&node)
            .into_iter()
            .map(|(key, leaf)| (path.join(&key), leaf))
            .collect();
        tracing::debug!(%path, count = pairs.len(), "listed JSON keys");
        Ok(pairs)
    }
}

/// Find the value at `path`. Arrays along the way are unsupported.
fn value_at<'a>(value: &'a Value, path: &KeyPath) -> Result<Option<&'a Value>> {
    let mut current = value;
    for (depth, segment) in path.segments().iter().enumerate() {
        current = match current {
            Value::Object(map) => match map.get(segment) {
                Some(next) => next,
                None => return Ok(None),
            },
            Value::Array(_) => {
                let at = KeyPath::from_segments(path.segments()[..depth].iter().cloned());
                return Err(array_unsupported(&at));
            }
            _ => return Ok(None),
        };
    }
    Ok(Some(current))
}

/// Store `new_value` at `path`, creating intermediate objects.
fn set_value_at(document: &mut Value, path: &KeyPath, new_value: Value) -> Result<()> {
    let Some((last, parents)) = path.segments().split_last() else {
        return Err(Error::unsupported(BACKEND, "setting a value at the document root"));
    };

    let mut current = document;
    for segment in parents {
        let map = match current {
            Value::Object(map) => map,
            Value::Array(_) => return Err(array_unsupported(path)),
            _ => {
                return Err(TreeError::conflicting(
                    path,
                    format!("a value is stored above '{segment}'"),
                )
                .into());
            }
        };
        current = map
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    let map = match current {
        Value::Object(map) => map,
        Value::Array(_) => return Err(array_unsupported(path)),
        _ => {
            return Err(TreeError::conflicting(path, "the parent path holds a value").into());
        }
    };
    if let Some(Value::Object(_) | Value::Array(_)) = map.get(last) {
        return Err(TreeError::conflicting(path, "path holds a subtree").into());
    }
    map.insert(last.clone(), new_value);
    Ok(())
}

fn array_unsupported(path: &KeyPath) -> Error {
    Error::unsupported(BACKEND, format!("array values (found one at {path})"))
}

/// Convert a JSON value into a tree node.
///
/// # Errors
///
/// Returns `UnsupportedOperation` if the value contains an array, or an
/// object key that cannot be a path segment (empty, or containing `/`);
/// `at` is used to report where.
pub fn json_to_node(value: &Value, at: &KeyPath) -> Result<Node> {
    match value {
        Value::Object(map) => {
            let mut branch = Branch::new();
            for (name, child) in map {
                if validate_segment(name).is_err() {
                    return Err(Error::unsupported(
                        BACKEND,
                        format!(
                            "object key '{name}' under {at}: keys must be non-empty and free of '/'"
                        ),
                    ));
                }
                branch.insert(name.clone(), json_to_node(child, &at.child(name))?)?;
            }
            Ok(Node::Branch(branch))
        }
        other => json_to_leaf(other, at).map(Node::Leaf),
    }
}

fn json_to_leaf(value: &Value, at: &KeyPath) -> Result<Leaf> {
    match value {
        Value::Null => Ok(Leaf::Null),
        Value::Bool(b) => Ok(Leaf::Bool(*b)),
        Value::Number(n) => Ok(number_to_leaf(n)),
        Value::String(s) => Ok(Leaf::String(s.clone())),
        Value::Array(_) => Err(array_unsupported(at)),
        Value::Object(_) => Err(TreeError::WrongVariant {
            expected: config_tree::NodeKind::Leaf,
            found: config_tree::NodeKind::Branch,
        }
        .into()),
    }
}

fn number_to_leaf(n: &Number) -> Leaf {
    match n.as_i64() {
        Some(i) => Leaf::Int(i),
        // u64 above i64::MAX and true floats
        None => Leaf::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn leaf_to_json(leaf: &Leaf) -> Value {
    match leaf {
        Leaf::Null => Value::Null,
        Leaf::Bool(b) => Value::Bool(*b),
        Leaf::Int(i) => Value::Number((*i).into()),
        // JSON has no NaN or infinity
        Leaf::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        Leaf::String(s) => Value::String(s.clone()),
    }
}

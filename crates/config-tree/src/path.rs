//! Hierarchical key paths
//!
//! Configuration keys are addressed by slash-separated paths such as
//! `/equipment_1/serial`. A [`KeyPath`] stores the path as its list of
//! segments, so redundant separators and trailing slashes never affect
//! equality:
//!
//! ```
//! use config_tree::KeyPath;
//!
//! let path = KeyPath::parse("//equipment_1///serial/");
//! assert_eq!(path.segments(), ["equipment_1", "serial"]);
//! assert_eq!(path.to_string(), "/equipment_1/serial");
//! assert_eq!(path, KeyPath::parse("equipment_1/serial"));
//! assert!(KeyPath::parse("/").is_root());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const SEPARATOR: char = '/';

/// Check that `name` can be used as a single path segment.
///
/// ```
/// use config_tree::path::validate_segment;
///
/// assert!(validate_segment("serial").is_ok());
/// assert!(validate_segment("").is_err());
/// assert!(validate_segment("a/b").is_err());
/// ```
pub fn validate_segment(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(name, "names must not be empty"));
    }
    if name.contains(SEPARATOR) {
        return Err(Error::invalid_name(name, "names must not contain '/'"));
    }
    Ok(())
}

/// A rooted, normalized configuration path.
///
/// Segments are opaque non-empty strings; no escaping is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The root path `/`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a path string, collapsing repeated separators and dropping a
    /// trailing one. A missing leading `/` is accepted.
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    /// Build a path from a list of segments, normalizing each one the way
    /// [`KeyPath::parse`] does: `["a/b", "", "c"]` gives `/a/b/c`.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = segments
            .into_iter()
            .flat_map(|segment| Self::parse(segment.as_ref()).segments)
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments; the root has none.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append every segment of `other` to this path.
    pub fn join(&self, other: &KeyPath) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    /// Append one segment. Separators inside `name` split it further.
    pub fn child(&self, name: &str) -> Self {
        self.join(&Self::parse(name))
    }

    /// Append one segment, rejecting names that would not survive a
    /// render and parse cycle.
    pub fn push(&mut self, segment: impl Into<String>) -> Result<()> {
        let segment = segment.into();
        validate_segment(&segment)?;
        self.segments.push(segment);
        Ok(())
    }

    /// Append a segment already known to be valid, such as a branch child name.
    pub(crate) fn push_unchecked(&mut self, segment: String) {
        debug_assert!(validate_segment(&segment).is_ok());
        self.segments.push(segment);
    }

    /// The parent path; `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.segments.split_last()?;
        Some(Self {
            segments: parent.to_vec(),
        })
    }

    /// The last segment; `None` for the root.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Whether `prefix` is this path or one of its ancestors (segment-wise,
    /// so `/ab` does not start with `/a`).
    pub fn starts_with(&self, prefix: &KeyPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// The remainder of this path below `prefix`.
    pub fn strip_prefix(&self, prefix: &KeyPath) -> Option<Self> {
        if !self.starts_with(prefix) {
            return None;
        }
        Some(Self {
            segments: self.segments[prefix.segments.len()..].to_vec(),
        })
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "{SEPARATOR}{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for KeyPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&String> for KeyPath {
    fn from(s: &String) -> Self {
        Self::parse(s)
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

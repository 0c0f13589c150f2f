//! Scalar configuration values

use std::fmt;

/// A terminal configuration value.
///
/// The kind is fixed when the leaf is built; nothing converts implicitly
/// between kinds. `Int(0)` and `Bool(false)` are different values even
/// though a text backend stores both as `"0"`.
///
/// Floats compare by bit pattern, which keeps equality reflexive: a NaN
/// equals an identical NaN, and `-0.0` differs from `0.0`.
#[derive(Debug, Clone)]
pub enum Leaf {
    /// Explicitly absent value (JSON `null`)
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl PartialEq for Leaf {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Leaf {}

/// The kind tag of a [`Leaf`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Null,
    Bool,
    Int,
    Float,
    String,
}

impl Leaf {
    pub fn kind(&self) -> LeafKind {
        match self {
            Self::Null => LeafKind::Null,
            Self::Bool(_) => LeafKind::Bool,
            Self::Int(_) => LeafKind::Int,
            Self::Float(_) => LeafKind::Float,
            Self::String(_) => LeafKind::String,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float value, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl LeafKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "integer",
            Self::Float => "float",
            Self::String => "string",
        }
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the wire form of the leaf (see [`crate::wire`]).
impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::wire::format(self))
    }
}

impl From<bool> for Leaf {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Leaf {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Leaf {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Leaf {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Leaf {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Leaf {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Leaf {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Leaf>> From<Option<T>> for Leaf {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

//! Typed reads out of [`Leaf`] values
//!
//! [`Scalar`] enumerates exactly which leaf kinds each Rust type accepts.
//! Only lossless conversions are allowed:
//!
//! | type                           | accepts                |
//! |--------------------------------|------------------------|
//! | `bool`                         | `Bool`                 |
//! | `i64`                          | `Int`                  |
//! | `i32`, `u32`, `u64`, `usize`   | `Int` within range     |
//! | `f64`                          | `Float`, `Int` (widen) |
//! | `String`                       | `String`               |
//! | `Leaf`                         | anything               |
//!
//! Text is never parsed here; decoding backend strings is the job of
//! [`crate::wire`].

use crate::leaf::Leaf;

/// A Rust type that can be read from a [`Leaf`].
pub trait Scalar: Sized {
    /// Name used in type-mismatch errors.
    const TYPE_NAME: &'static str;

    /// Convert the leaf, or `None` if its kind is not accepted.
    fn from_leaf(leaf: &Leaf) -> Option<Self>;

    /// Decode the text form a string backend stores (see [`crate::wire`]).
    fn from_wire(text: &str) -> Option<Self>;
}

impl Scalar for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_leaf(leaf: &Leaf) -> Option<Self> {
        leaf.as_bool()
    }

    fn from_wire(text: &str) -> Option<Self> {
        crate::wire::parse_bool(text)
    }
}

impl Scalar for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn from_leaf(leaf: &Leaf) -> Option<Self> {
        leaf.as_i64()
    }

    fn from_wire(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }
}

macro_rules! narrow_int_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn from_leaf(leaf: &Leaf) -> Option<Self> {
                    leaf.as_i64().and_then(|i| <$ty>::try_from(i).ok())
                }

                fn from_wire(text: &str) -> Option<Self> {
                    text.trim().parse().ok()
                }
            }
        )*
    };
}

narrow_int_scalar!(i32, u32, u64, usize);

impl Scalar for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn from_leaf(leaf: &Leaf) -> Option<Self> {
        leaf.as_f64()
    }

    fn from_wire(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }
}

impl Scalar for String {
    const TYPE_NAME: &'static str = "string";

    fn from_leaf(leaf: &Leaf) -> Option<Self> {
        leaf.as_str().map(str::to_string)
    }

    fn from_wire(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl Scalar for Leaf {
    const TYPE_NAME: &'static str = "leaf";

    fn from_leaf(leaf: &Leaf) -> Option<Self> {
        Some(leaf.clone())
    }

    fn from_wire(text: &str) -> Option<Self> {
        Some(Leaf::String(text.to_string()))
    }
}

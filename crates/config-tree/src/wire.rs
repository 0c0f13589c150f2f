//! Text form of leaf values
//!
//! Most backends (etcd, Consul, SQL tables, flat files) store every value
//! as a string. This module fixes how leaves are written to and read from
//! that form:
//!
//! - `Bool` → `"1"` / `"0"` (reading also accepts `true` / `false`)
//! - `Int` → decimal text
//! - `Float` → shortest text that reads back to the same value
//! - `String` → verbatim
//! - `Null` → empty string

use crate::leaf::Leaf;

/// Render a leaf in its wire form.
pub fn format(leaf: &Leaf) -> String {
    match leaf {
        Leaf::Null => String::new(),
        Leaf::Bool(true) => "1".to_string(),
        Leaf::Bool(false) => "0".to_string(),
        Leaf::Int(i) => i.to_string(),
        Leaf::Float(f) => f.to_string(),
        Leaf::String(s) => s.clone(),
    }
}

/// Decode a boolean: `1`, `0`, `true`, `false` (ASCII case-insensitive).
pub fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text == "1" || text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text == "0" || text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

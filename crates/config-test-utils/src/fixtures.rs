//! The reference equipment document
//!
//! Two equipments with four typed settings each. [`REFERENCE_JSON`] is what
//! goes on disk; [`reference_tree`] and [`reference_map`] are what a backend
//! must hand back for it.

use std::collections::HashMap;

use config_tree::{Branch, Leaf, Node};

pub const REFERENCE_JSON: &str = r#"{
  "equipment_1":
  {
    "enabled": true,
    "type"   : "rorc",
    "serial" : 33333,
    "channel": 0
  },
  "equipment_2":
  {
    "enabled": true,
    "type"   : "dummy",
    "serial" : -1,
    "channel": 0
  }
}"#;

/// The same document in INI form. Values are text, as in any flat file.
pub const REFERENCE_INI: &str = "\
[equipment_1]
enabled = 1
type = rorc
serial = 33333
channel = 0

[equipment_2]
enabled = 1
type = dummy
serial = -1
channel = 0
";

fn equipment(enabled: bool, kind: &str, serial: i32) -> Node {
    Branch::from_pairs([
        ("enabled", Node::from(enabled)),
        ("type", Node::from(kind)),
        ("serial", Node::from(serial)),
        ("channel", Node::from(0)),
    ])
    .map(Node::Branch)
    .unwrap()
}

pub fn equipment_1() -> Node {
    equipment(true, "rorc", 33333)
}

pub fn equipment_2() -> Node {
    equipment(true, "dummy", -1)
}

/// `equipment_2` with `enabled` flipped.
pub fn bad_equipment_2() -> Node {
    equipment(false, "dummy", -1)
}

/// Tree equivalent to [`REFERENCE_JSON`].
pub fn reference_tree() -> Node {
    Branch::from_pairs([("equipment_1", equipment_1()), ("equipment_2", equipment_2())])
        .map(Node::Branch)
        .unwrap()
}

/// Tree that differs from [`REFERENCE_JSON`] in one leaf.
pub fn bad_reference_tree() -> Node {
    Branch::from_pairs([("equipment_1", equipment_1()), ("equipment_2", bad_equipment_2())])
        .map(Node::Branch)
        .unwrap()
}

/// Flat form of [`REFERENCE_JSON`] with wire-form values.
pub fn reference_map() -> HashMap<String, String> {
    [
        ("/equipment_1/enabled", "1"),
        ("/equipment_1/type", "rorc"),
        ("/equipment_1/serial", "33333"),
        ("/equipment_1/channel", "0"),
        ("/equipment_2/enabled", "1"),
        ("/equipment_2/type", "dummy"),
        ("/equipment_2/serial", "-1"),
        ("/equipment_2/channel", "0"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

/// Four pairs whose paths share and nest prefixes at several depths.
pub fn conversion_pairs() -> Vec<(String, Leaf)> {
    vec![
        ("/dir/bool".to_string(), Leaf::Bool(false)),
        ("/dir/double".to_string(), Leaf::Float(45.6)),
        ("/dir/subdir/int".to_string(), Leaf::Int(123)),
        (
            "/dir/subdir/subsubdir/string".to_string(),
            Leaf::String("string".to_string()),
        ),
    ]
}

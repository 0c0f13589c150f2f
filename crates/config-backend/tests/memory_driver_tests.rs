//! Tests for the in-memory driver

use config_backend::{BackendDriver, Error, MemoryDriver};
use config_tree::{Branch, KeyPath, Leaf, Node};
use pretty_assertions::assert_eq;

fn tree() -> Node {
    let mut equipment = Branch::new();
    equipment.insert("serial", 33333).unwrap();
    equipment.insert("enabled", true).unwrap();
    let mut root = Branch::new();
    root.insert("equipment_1", equipment).unwrap();
    root.insert("name", "readout").unwrap();
    Node::Branch(root)
}

#[test]
fn test_from_tree_lists_in_sorted_order() {
    let driver = MemoryDriver::from_tree(&tree()).unwrap();
    assert_eq!(driver.len(), 3);

    let keys: Vec<_> = driver
        .get_leaves_by_prefix(&KeyPath::root())
        .unwrap()
        .into_iter()
        .map(|(key, leaf)| (key.to_string(), leaf))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("/equipment_1/enabled".to_string(), Leaf::Bool(true)),
            ("/equipment_1/serial".to_string(), Leaf::Int(33333)),
            ("/name".to_string(), Leaf::from("readout")),
        ]
    );
}

#[test]
fn test_root_leaf_tree_is_rejected() {
    let err = MemoryDriver::from_tree(&Node::from(1)).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperation { backend: "memory", .. }));
}

#[test]
fn test_raw_set_stores_strings() {
    let mut driver = MemoryDriver::new();
    assert!(driver.is_empty());

    driver.raw_set(&KeyPath::parse("/a/b"), "1").unwrap();
    assert_eq!(driver.get_leaf(&KeyPath::parse("/a/b")).unwrap(), Some(Leaf::from("1")));
}

#[test]
fn test_boxed_driver_forwards() {
    let mut driver: Box<dyn BackendDriver> = Box::new(MemoryDriver::new());
    driver.set_leaf(&KeyPath::parse("/x"), &Leaf::Float(1.5)).unwrap();

    assert_eq!(driver.name(), "memory");
    assert_eq!(driver.raw_get(&KeyPath::parse("/x")).unwrap().as_deref(), Some("1.5"));
}

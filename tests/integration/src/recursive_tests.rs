//! Recursive retrieval against the reference equipment document
//!
//! Every test writes the reference JSON into a fresh temporary directory
//! and opens it through the factory by URI.

use config_core::{ConfigurationInterface, get_configuration};
use config_test_utils::{TestStore, fixtures, init_tracing};
use config_tree::{KeyPath, Leaf, Node, key_values_to_tree, tree_to_key_values};
use pretty_assertions::assert_eq;

fn open_reference(store: &TestStore) -> Box<dyn ConfigurationInterface> {
    init_tracing();
    store.write_reference_json("recursive_test.json");
    get_configuration(&store.json_uri("recursive_test.json")).unwrap()
}

#[test]
fn test_recursive_root_equals_reference_tree() {
    let store = TestStore::new();
    let conf = open_reference(&store);

    let tree = conf.get_recursive("/").unwrap();
    assert_eq!(tree, fixtures::reference_tree());
    assert_ne!(tree, fixtures::bad_reference_tree());
}

#[test]
fn test_recursive_subtrees_and_prefixes() {
    let store = TestStore::new();
    let mut conf = open_reference(&store);

    assert_eq!(fixtures::reference_tree(), conf.get_recursive("/").unwrap());
    assert_eq!(fixtures::equipment_1(), conf.get_recursive("/equipment_1").unwrap());
    assert_eq!(fixtures::equipment_2(), conf.get_recursive("/equipment_2").unwrap());
    assert_ne!(fixtures::bad_equipment_2(), conf.get_recursive("/equipment_2").unwrap());

    let channel = conf.get_recursive("/equipment_1/channel").unwrap();
    assert_eq!(
        fixtures::equipment_1().get::<i64>("channel"),
        channel.get::<i64>(KeyPath::root())
    );
    assert_eq!(channel, Node::from(0));

    conf.set_prefix("/equipment_1");
    assert_eq!(fixtures::equipment_1(), conf.get_recursive("/").unwrap());

    conf.set_prefix("/equipment_2");
    assert_eq!(fixtures::equipment_2(), conf.get_recursive("/").unwrap());

    conf.set_prefix("/");
    assert_eq!(fixtures::reference_tree(), conf.get_recursive("/").unwrap());
}

#[test]
fn test_iterate_equipments() {
    let store = TestStore::new();
    let conf = open_reference(&store);

    let tree = conf.get_recursive("/").unwrap();
    let mut report = String::new();
    for (name, node) in tree.as_branch().unwrap() {
        let equipment = node.as_branch().unwrap();
        report.push_str(&format!(
            "Equipment '{name}'\nserial  {}\nchannel {}\nenabled {}\ntype    {}\n",
            equipment.get_required::<i32>("serial").unwrap(),
            equipment.get_required::<i32>("channel").unwrap(),
            equipment.get_required::<bool>("enabled").unwrap(),
            equipment.get_required::<String>("type").unwrap(),
        ));

        assert_eq!(equipment.get_value::<i32>("nope"), None);
    }

    assert_eq!(
        report,
        "Equipment 'equipment_1'\nserial  33333\nchannel 0\nenabled true\ntype    rorc\n\
         Equipment 'equipment_2'\nserial  -1\nchannel 0\nenabled true\ntype    dummy\n"
    );
}

#[test]
fn test_recursive_map_equals_reference_map() {
    let store = TestStore::new();
    let conf = open_reference(&store);

    assert_eq!(conf.get_recursive_map("/").unwrap(), fixtures::reference_map());
}

#[test]
fn test_recursive_map_keys_are_usable_with_get() {
    let store = TestStore::new();
    let mut conf = open_reference(&store);
    conf.set_prefix("/equipment_2");

    let map = conf.get_recursive_map("/").unwrap();
    assert_eq!(map.len(), 4);
    assert_eq!(map.get("/serial").map(String::as_str), Some("-1"));
    for key in map.keys() {
        assert!(conf.get(key).unwrap().is_some(), "{key} should be readable");
    }
}

#[test]
fn test_missing_subtree_is_not_found() {
    let store = TestStore::new();
    let conf = open_reference(&store);

    let err = conf.get_recursive("/equipment_3").unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("/equipment_3"));
}

#[test]
fn test_tree_conversion_preserves_order() {
    let pairs = fixtures::conversion_pairs();

    let tree = key_values_to_tree(pairs.clone()).unwrap();
    let back: Vec<(String, Leaf)> = tree_to_key_values(&tree)
        .into_iter()
        .map(|(path, leaf)| (path.to_string(), leaf))
        .collect();
    assert_eq!(back, pairs);
}

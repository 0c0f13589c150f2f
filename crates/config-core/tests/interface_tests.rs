//! Tests for the configuration interface across backends

use config_backend::{FlatFileDriver, JsonDriver, MemoryDriver};
use config_core::{Configuration, ConfigurationExt, ConfigurationInterface};
use config_test_utils::{TestStore, fixtures, init_tracing};
use config_tree::{Leaf, Node};
use pretty_assertions::assert_eq;

fn json_configuration(store: &TestStore) -> Configuration<JsonDriver> {
    let path = store.write_reference_json("config.json");
    Configuration::new(JsonDriver::open(path).unwrap())
}

#[test]
fn test_descendant_only_match_returns_branch() {
    init_tracing();
    let store = TestStore::new();
    let conf = json_configuration(&store);

    // Nothing is stored at /equipment_1 itself
    assert_eq!(conf.get("/equipment_1").unwrap(), None);
    assert_eq!(conf.get_recursive("/equipment_1").unwrap(), fixtures::equipment_1());
}

#[test]
fn test_typed_reads_on_native_types() {
    let store = TestStore::new();
    let conf = json_configuration(&store);

    assert_eq!(conf.get_as::<bool>("/equipment_1/enabled").unwrap(), Some(true));
    assert_eq!(conf.get_as::<f64>("/equipment_1/serial").unwrap(), Some(33333.0));
    assert_eq!(conf.get_or::<i64>("/equipment_1/missing", 5).unwrap(), 5);

    let err = conf.get_as::<bool>("/equipment_1/type").unwrap_err();
    assert!(matches!(
        err,
        config_core::Error::Tree(config_tree::Error::TypeMismatch { .. })
    ));
}

#[test]
fn test_set_then_read_back_typed() {
    let store = TestStore::new();
    let mut conf = json_configuration(&store);

    conf.set_value("/equipment_3/serial", 42).unwrap();
    conf.set_value("/equipment_3/ratio", 0.5).unwrap();

    assert_eq!(conf.get("/equipment_3/serial").unwrap(), Some(Leaf::Int(42)));
    store.assert_file_contains("config.json", "\"equipment_3\"");

    conf.set_prefix("/equipment_3");
    let tree = conf.get_recursive("/").unwrap();
    assert_eq!(tree.get::<f64>("ratio"), Some(0.5));
}

#[test]
fn test_prefix_is_not_validated() {
    let store = TestStore::new();
    let mut conf = json_configuration(&store);

    conf.set_prefix("/does/not/exist");
    assert_eq!(conf.get("value").unwrap(), None);
    assert!(conf.get_recursive("/").unwrap_err().is_not_found());
}

#[test]
fn test_flat_file_capability_gaps() {
    let store = TestStore::new();
    let path = store.write_reference_ini("config.ini");
    let mut conf = Configuration::new(FlatFileDriver::open(path).unwrap());

    assert!(conf.get_recursive("/").unwrap_err().is_unsupported());
    assert!(conf.get_recursive_map("/equipment_1").unwrap_err().is_unsupported());
    assert!(conf.set_value("/a/b/c", 1).unwrap_err().is_unsupported());

    conf.scoped("/equipment_1").set_value("channel", 3).unwrap();
    assert_eq!(conf.get_required_as::<u32>("channel").unwrap(), 3);
}

#[test]
fn test_memory_matches_json_for_the_reference_tree() {
    let store = TestStore::new();
    let json = json_configuration(&store);
    let memory = Configuration::new(MemoryDriver::from_tree(&fixtures::reference_tree()).unwrap());

    assert_eq!(memory.get_recursive("/").unwrap(), json.get_recursive("/").unwrap());
    assert_eq!(memory.get_recursive_map("/").unwrap(), fixtures::reference_map());
    assert_eq!(
        memory.get_recursive("/equipment_2/serial").unwrap(),
        Node::from(-1)
    );
}

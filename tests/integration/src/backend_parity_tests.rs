//! The same reads through every built-in backend
//!
//! JSON and memory keep native types; the flat file hands back text, which
//! the typed getters decode.

use config_backend::MemoryDriver;
use config_core::{Configuration, ConfigurationExt, ConfigurationInterface, get_configuration};
use config_test_utils::{TestStore, fixtures};
use pretty_assertions::assert_eq;

fn backends(store: &TestStore) -> Vec<Box<dyn ConfigurationInterface>> {
    store.write_reference_json("config.json");
    store.write_reference_ini("config.ini");
    vec![
        get_configuration(&store.json_uri("config.json")).unwrap(),
        get_configuration(&store.file_uri("config.ini")).unwrap(),
        Configuration::new(MemoryDriver::from_tree(&fixtures::reference_tree()).unwrap()).boxed(),
    ]
}

#[test]
fn test_typed_reads_agree() {
    let store = TestStore::new();
    for mut conf in backends(&store) {
        let backend = conf.backend();
        assert_eq!(conf.get_as::<i64>("/equipment_1/serial").unwrap(), Some(33333), "{backend}");
        assert_eq!(conf.get_as::<bool>("/equipment_2/enabled").unwrap(), Some(true), "{backend}");
        assert_eq!(
            conf.get_required_as::<String>("/equipment_2/type").unwrap(),
            "dummy",
            "{backend}"
        );

        conf.set_prefix("/equipment_2");
        assert_eq!(conf.get_as::<i32>("serial").unwrap(), Some(-1), "{backend}");
        assert_eq!(conf.get_as::<i32>("nope").unwrap(), None, "{backend}");
        assert!(conf.get_required("nope").unwrap_err().is_not_found(), "{backend}");
    }
}

#[test]
fn test_writes_are_visible_to_new_instances() {
    let store = TestStore::new();
    store.write_reference_json("config.json");
    let mut writer = get_configuration(&store.json_uri("config.json")).unwrap();
    writer.set_value("/equipment_1/channel", 5).unwrap();

    let reader = get_configuration(&store.json_uri("config.json")).unwrap();
    assert_eq!(reader.get_as::<i64>("/equipment_1/channel").unwrap(), Some(5));

    let on_disk: serde_json::Value =
        serde_json::from_str(&store.read_file("config.json")).unwrap();
    assert_eq!(on_disk["equipment_1"]["channel"], serde_json::json!(5));
}

#[test]
fn test_recursive_support_differs_by_backend() {
    let store = TestStore::new();
    for conf in backends(&store) {
        let result = conf.get_recursive("/equipment_1");
        match conf.backend() {
            "file" => assert!(result.unwrap_err().is_unsupported()),
            _ => assert_eq!(result.unwrap(), fixtures::equipment_1()),
        }
    }
}

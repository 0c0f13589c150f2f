//! Tests for the JSON driver

use config_backend::{BackendDriver, Error, JsonDriver};
use config_tree::{KeyPath, Leaf};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

const SEED: &str = r#"{
  "equipment_1": {"enabled": true, "serial": 33333, "type": "rorc", "ratio": 45.6},
  "equipment_2": {"enabled": true, "serial": -1}
}"#;

fn seeded(temp: &TempDir) -> JsonDriver {
    let path = temp.path().join("config.json");
    fs::write(&path, SEED).unwrap();
    JsonDriver::open(&path).unwrap()
}

fn path(text: &str) -> KeyPath {
    KeyPath::parse(text)
}

#[test]
fn test_open_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    let err = JsonDriver::open(temp.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_open_malformed_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("broken.json");
    fs::write(&file, "{ not json").unwrap();

    let err = JsonDriver::open(&file).unwrap_err();
    assert!(matches!(err, Error::Parse { format: "JSON", .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_typed_reads_keep_json_types() {
    let temp = TempDir::new().unwrap();
    let driver = seeded(&temp);

    assert_eq!(driver.get_leaf(&path("/equipment_1/enabled")).unwrap(), Some(Leaf::Bool(true)));
    assert_eq!(driver.get_leaf(&path("/equipment_1/serial")).unwrap(), Some(Leaf::Int(33333)));
    assert_eq!(driver.get_leaf(&path("/equipment_1/ratio")).unwrap(), Some(Leaf::Float(45.6)));
    assert_eq!(driver.get_leaf(&path("/equipment_1")).unwrap(), None);
    assert_eq!(driver.get_leaf(&path("/equipment_3/serial")).unwrap(), None);
}

#[test]
fn test_raw_reads_use_wire_form() {
    let temp = TempDir::new().unwrap();
    let driver = seeded(&temp);

    assert_eq!(driver.raw_get(&path("/equipment_1/enabled")).unwrap().as_deref(), Some("1"));
    assert_eq!(driver.raw_get(&path("/equipment_2/serial")).unwrap().as_deref(), Some("-1"));
    assert_eq!(driver.raw_get(&path("/equipment_1/ratio")).unwrap().as_deref(), Some("45.6"));
}

#[test]
fn test_prefix_listing_in_document_order() {
    let temp = TempDir::new().unwrap();
    let driver = seeded(&temp);

    let pairs = driver.raw_get_by_prefix(&path("/equipment_2")).unwrap();
    assert_eq!(
        pairs,
        vec![
            (path("/equipment_2/enabled"), "1".to_string()),
            (path("/equipment_2/serial"), "-1".to_string()),
        ]
    );
    assert!(driver.raw_get_by_prefix(&path("/nothing")).unwrap().is_empty());
}

#[test]
fn test_prefix_listing_of_a_scalar_is_the_scalar() {
    let temp = TempDir::new().unwrap();
    let driver = seeded(&temp);

    let pairs = driver.get_leaves_by_prefix(&path("/equipment_1/type")).unwrap();
    assert_eq!(pairs, vec![(path("/equipment_1/type"), Leaf::from("rorc"))]);
}

#[test]
fn test_set_persists_and_creates_objects() {
    let temp = TempDir::new().unwrap();
    let mut driver = seeded(&temp);

    driver.set_leaf(&path("/equipment_3/serial"), &Leaf::Int(7)).unwrap();
    driver.raw_set(&path("/equipment_1/type"), "cru").unwrap();

    let on_disk: Value = serde_json::from_str(&fs::read_to_string(driver.path()).unwrap()).unwrap();
    assert_eq!(on_disk["equipment_3"], json!({"serial": 7}));
    assert_eq!(on_disk["equipment_1"]["type"], json!("cru"));

    let reopened = JsonDriver::open(driver.path()).unwrap();
    assert_eq!(reopened.get_leaf(&path("/equipment_3/serial")).unwrap(), Some(Leaf::Int(7)));
}

#[test]
fn test_create_writes_empty_document() {
    let temp = TempDir::new().unwrap();
    let mut driver = JsonDriver::create(temp.path().join("new/config.json")).unwrap();

    assert!(driver.raw_get_by_prefix(&KeyPath::root()).unwrap().is_empty());
    driver.set_leaf(&path("/a"), &Leaf::Bool(false)).unwrap();
    assert_eq!(driver.get_leaf(&path("/a")).unwrap(), Some(Leaf::Bool(false)));
}

#[test]
fn test_arrays_are_unsupported() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("arrays.json");
    fs::write(&file, r#"{"list": [1, 2], "plain": 1}"#).unwrap();
    let driver = JsonDriver::open(&file).unwrap();

    let err = driver.raw_get_by_prefix(&KeyPath::root()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperation { backend: "json", .. }));
    assert!(driver.get_leaf(&path("/list/0")).is_err());
    assert_eq!(driver.get_leaf(&path("/plain")).unwrap(), Some(Leaf::Int(1)));
}

#[test]
fn test_set_conflicts_leave_file_untouched() {
    let temp = TempDir::new().unwrap();
    let mut driver = seeded(&temp);
    let before = fs::read_to_string(driver.path()).unwrap();

    assert!(driver.raw_set(&path("/equipment_1"), "x").is_err());
    assert!(driver.raw_set(&path("/equipment_1/serial/deeper"), "x").is_err());
    assert!(matches!(
        driver.raw_set(&KeyPath::root(), "x").unwrap_err(),
        Error::UnsupportedOperation { .. }
    ));

    assert_eq!(fs::read_to_string(driver.path()).unwrap(), before);
}

#[test]
fn test_keys_with_separator_are_unsupported() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("slash.json");
    fs::write(&file, r#"{"a/b": 1, "a": {"b": 2}}"#).unwrap();
    let driver = JsonDriver::open(&file).unwrap();

    let err = driver.get_leaves_by_prefix(&KeyPath::root()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperation { backend: "json", .. }));
    assert!(err.to_string().contains("'a/b'"));
    assert_eq!(driver.get_leaf(&path("/a/b")).unwrap(), Some(Leaf::Int(2)));
}

#[test]
fn test_empty_keys_are_unsupported() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("empty_key.json");
    fs::write(&file, r#"{"a": {"": 1, "b": 2}}"#).unwrap();
    let driver = JsonDriver::open(&file).unwrap();

    let err = driver.raw_get_by_prefix(&path("/a")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperation { backend: "json", .. }));
    assert!(err.to_string().contains("object key '' under /a"));
}

#[test]
fn test_concurrent_drivers_keep_every_key() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("shared.json");
    JsonDriver::create(&file).unwrap();

    std::thread::scope(|scope| {
        for writer in ["left", "right"] {
            let file = &file;
            scope.spawn(move || {
                let mut driver = JsonDriver::open(file).unwrap();
                for i in 0..20 {
                    driver
                        .set_leaf(&path(&format!("/{writer}/key_{i}")), &Leaf::Int(i))
                        .unwrap();
                }
            });
        }
    });

    let driver = JsonDriver::open(&file).unwrap();
    assert_eq!(driver.get_leaves_by_prefix(&KeyPath::root()).unwrap().len(), 40);
    assert_eq!(driver.get_leaf(&path("/left/key_19")).unwrap(), Some(Leaf::Int(19)));
    assert_eq!(driver.get_leaf(&path("/right/key_0")).unwrap(), Some(Leaf::Int(0)));
}

//! Tests for backend selection through the factory

use config_core::{
    ConfigurationExt, ConfigurationFactory, Error, Scheme, Settings, get_configuration,
};
use config_test_utils::{TestStore, fixtures};
use config_tree::Leaf;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_json_uri_opens_reference_document() {
    let store = TestStore::new();
    store.write_reference_json("config.json");

    let conf = get_configuration(&store.json_uri("config.json")).unwrap();
    assert_eq!(conf.backend(), "json");
    assert_eq!(conf.get_recursive("/").unwrap(), fixtures::reference_tree());
}

#[test]
fn test_json_uri_missing_file() {
    let store = TestStore::new();
    let err = get_configuration(&store.json_uri("missing.json")).err().unwrap();
    assert!(matches!(err, Error::Backend(config_backend::Error::Io { .. })));
}

#[test]
fn test_file_uri_reads_strings() {
    let store = TestStore::new();
    store.write_reference_ini("config.ini");

    let conf = get_configuration(&store.file_uri("config.ini")).unwrap();
    assert_eq!(conf.backend(), "file");
    assert_eq!(
        conf.get("/equipment_1/serial").unwrap(),
        Some(Leaf::from("33333"))
    );
    assert_eq!(conf.get_as::<i64>("/equipment_1/serial").unwrap(), Some(33333));
    assert_eq!(conf.get_as::<bool>("/equipment_2/enabled").unwrap(), Some(true));
}

#[rstest]
#[case("etcd://myetcdserver:4001")]
#[case("etcd-v2://myetcdserver:4001")]
#[case("consul://localhost:8500")]
#[case("mysql://user@localhost/config")]
fn test_network_backends_need_a_driver(#[case] uri: &str) {
    let err = get_configuration(uri).err().unwrap();
    assert!(matches!(
        err,
        Error::Backend(config_backend::Error::BackendUnavailable { .. })
    ));
}

#[test]
fn test_unknown_and_invalid_uris() {
    assert!(matches!(
        get_configuration("zookeeper://host").err().unwrap(),
        Error::UnknownScheme { .. }
    ));
    assert!(matches!(
        get_configuration("/tmp/config.json").err().unwrap(),
        Error::InvalidUri { .. }
    ));
    assert!(matches!(
        get_configuration("config.json").err().unwrap(),
        Error::InvalidUri { .. }
    ));
}

#[test]
fn test_from_settings_applies_prefix() {
    let store = TestStore::new();
    store.write_reference_json("config.json");
    let settings = Settings::new(store.json_uri("config.json")).with_prefix("/equipment_2");

    let conf = ConfigurationFactory::with_builtins()
        .from_settings(&settings)
        .unwrap();
    assert_eq!(conf.prefix().to_string(), "/equipment_2");
    assert_eq!(conf.get_recursive("/").unwrap(), fixtures::equipment_2());
}

#[test]
fn test_settings_file_round_trip_through_factory() {
    let store = TestStore::new();
    store.write_reference_json("config.json");
    let settings_path = store.path("settings.toml");
    Settings::new(store.json_uri("config.json"))
        .save(&settings_path)
        .unwrap();

    let settings = Settings::load(&settings_path).unwrap();
    let conf = ConfigurationFactory::with_builtins()
        .from_settings(&settings)
        .unwrap();
    assert_eq!(conf.get_required_as::<String>("/equipment_1/type").unwrap(), "rorc");
}

#[test]
fn test_replacing_a_builtin() {
    let mut factory = ConfigurationFactory::with_builtins();
    factory.register(Scheme::File, |_| {
        Err(config_backend::Error::unavailable("file", "disabled in this deployment").into())
    });

    let err = factory.get_configuration("file:/etc/app.ini").err().unwrap();
    assert!(err.to_string().contains("disabled in this deployment"));
}

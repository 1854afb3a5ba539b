#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use storefront_gateway::{app_state::AppState, config};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:5000"
  statik_dir: "static" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:5000");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 5000);
    assert!(cfg.catalog.is_none());
}

#[test]
fn rejects_other_versions() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_bad_listen_and_blank_instance() {
    let err = config::load_from_str("version: 1\nserver:\n  listen: \"nope\"\n").expect_err("must fail");
    assert!(err.to_string().contains("server.listen"));

    let err = config::load_from_str("version: 1\ninstance:\n  id: \"  \"\n").expect_err("must fail");
    assert!(err.to_string().contains("instance.id"));
}

#[test]
fn static_dir_can_be_disabled() {
    let cfg = config::load_from_str("version: 1\nserver:\n  static_dir: null\n").unwrap();
    assert!(cfg.server.static_dir.is_none());
}

#[test]
fn configured_catalog_replaces_demo() {
    let yaml = r#"
version: 1
instance:
  id: "pod-a"
catalog:
  - id: 7
    name: "Keyboard"
    price: 49.5
    image: "keyboard.jpg"
    description: "Mechanical keyboard"
    specs:
      Switches: "Brown"
"#;
    let cfg = config::load_from_str(yaml).unwrap();
    let state = AppState::from_config(&cfg).unwrap();
    assert_eq!(state.instance_id(), "pod-a");
    assert_eq!(state.catalog().len(), 1);
    assert_eq!(state.catalog().get(7).unwrap().specs["Switches"], "Brown");
}

#[test]
fn duplicate_ids_fail_at_state_build() {
    let yaml = r#"
version: 1
catalog:
  - { id: 1, name: "a", price: 1.0, image: "a.jpg", description: "a" }
  - { id: 1, name: "b", price: 2.0, image: "b.jpg", description: "b" }
"#;
    let cfg = config::load_from_str(yaml).unwrap();
    let err = AppState::from_config(&cfg).err().expect("must fail");
    assert_eq!(err.client_code().as_str(), "INVALID_CATALOG");
}

#[test]
fn empty_catalog_is_rejected() {
    let err = config::load_from_str("version: 1\ncatalog: []\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

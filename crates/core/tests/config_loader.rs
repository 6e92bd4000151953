use std::fs;

use tempfile::tempdir;

use legidoc_core::config::{ConfigError, ConfigLoader};

#[test]
fn loads_minimal_config() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(
        &path,
        r#"
version = 1
templates_dir = "/srv/templates"
"#,
    )
    .unwrap();

    let cfg = ConfigLoader::load(Some(&path)).unwrap();
    assert_eq!(cfg.templates_dir, std::path::Path::new("/srv/templates"));
    // No providers declared: builtin table applies
    assert_eq!(cfg.providers.display_names()[0], "OVH");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn providers_override_keeps_declaration_order() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(
        &path,
        r#"
version = 1
templates_dir = "/srv/templates"

[[providers]]
key = "gandi"
name = "Gandi"
address = "63-65 boulevard Masséna, 75013 Paris, France"
website = "https://www.gandi.net"

[[providers]]
key = "autre"
name = "Autre"
address = ""
website = ""
"#,
    )
    .unwrap();

    let cfg = ConfigLoader::load(Some(&path)).unwrap();
    assert_eq!(cfg.providers.display_names(), vec!["Gandi", "Autre"]);
    let gandi = cfg.providers.lookup_by_name("Gandi").unwrap();
    assert_eq!(gandi.website, "https://www.gandi.net");
}

#[test]
fn logging_section_is_parsed() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(
        &path,
        r#"
version = 1
templates_dir = "/srv/templates"

[logging]
level = "debug"
file = "/tmp/legidoc.log"
file_level = "trace"
"#,
    )
    .unwrap();

    let cfg = ConfigLoader::load(Some(&path)).unwrap();
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.file_level.as_deref(), Some("trace"));
    assert!(cfg.logging.file.is_some());
}

#[test]
fn explicit_missing_path_is_not_found() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("nope.toml");
    let err = ConfigLoader::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn wrong_version_is_rejected() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "version = 2\ntemplates_dir = \"x\"\n").unwrap();
    let err = ConfigLoader::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::BadVersion(2)));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "version = ???").unwrap();
    let err = ConfigLoader::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_, _)));
}

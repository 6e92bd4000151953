use assert_cmd::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn list_providers_shows_config_declared_registry() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    fs::write(
        &cfg_path,
        r#"
version = 1
templates_dir = "templates"

[[providers]]
key = "gandi"
name = "Gandi"
address = "63-65 boulevard Masséna, 75013 Paris, France"
website = "https://www.gandi.net"
"#,
    )
    .unwrap();

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("legidoc"));
    cmd.env("NO_COLOR", "1");
    cmd.args(["--config", cfg_path.to_str().unwrap(), "list-providers"]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Gandi"))
        .stdout(predicates::str::contains("https://www.gandi.net"));
}

#[test]
fn list_providers_defaults_to_builtin_registry() {
    let tmp = tempdir().unwrap();
    let xdg = tmp.path().join("xdg");
    fs::create_dir_all(&xdg).unwrap();

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("legidoc"));
    cmd.env("XDG_CONFIG_HOME", &xdg);
    cmd.env("NO_COLOR", "1");
    cmd.arg("list-providers");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("OVH"))
        .stdout(predicates::str::contains("Hostinger"));
}

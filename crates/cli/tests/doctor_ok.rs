use assert_cmd::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn doctor_reports_resolved_config() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    fs::write(
        &cfg_path,
        r#"
version = 1
templates_dir = "/srv/templates"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("legidoc"));
    cmd.env("NO_COLOR", "1");
    cmd.args(["--config", cfg_path.to_str().unwrap(), "doctor"]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("OK   legidoc doctor"))
        .stdout(predicates::str::contains("/srv/templates"))
        .stdout(predicates::str::contains("providers: 5"))
        .stdout(predicates::str::contains("logging.level: debug"));
}

mod common;

use assert_cmd::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn generate_batch_substitutes_values_and_expands_provider() {
    let tmp = tempdir().unwrap();
    let xdg = tmp.path().join("xdg");
    fs::create_dir_all(&xdg).unwrap();

    common::write_docx(
        &tmp.path().join("templates").join("mentions-legales.docx"),
        "Société {nomSociete}, hébergée par {hebergeur} ({adresseHebergeur}). Newsletter: {accepteNewsletter}. Activités: {activites}.",
    );

    let values_path = tmp.path().join("values.toml");
    fs::write(
        &values_path,
        r#"
nomSociete = "ACME"
hebergeur = "OVH"
accepteNewsletter = true
activites = ["conseil", "formation"]
"#,
    )
    .unwrap();

    let output_path = tmp.path().join("out.docx");

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("legidoc"));
    cmd.current_dir(tmp.path());
    cmd.env("XDG_CONFIG_HOME", &xdg);
    cmd.env("NO_COLOR", "1");
    cmd.args([
        "generate",
        "--template",
        "mentions-legales",
        "--values",
        values_path.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
        "--batch",
    ]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("OK   legidoc generate"))
        .stdout(predicates::str::contains("out.docx"));

    let xml = common::document_xml(&fs::read(&output_path).unwrap());
    assert!(xml.contains("Société ACME"));
    assert!(xml.contains("hébergée par OVH"));
    assert!(xml.contains("2 rue Kellermann, 59100 Roubaix, France"));
    assert!(xml.contains("Newsletter: Oui"));
    assert!(xml.contains("Activités: conseil, formation"));
}

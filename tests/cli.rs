use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Stages a template directory next to the test binary, where the tool
/// resolves its template root from.
fn stage_template(kind: &str) {
    let exe = Path::new(env!("CARGO_BIN_EXE_stackgen"));
    let template = exe.parent().unwrap().join("templates").join(kind);
    fs::create_dir_all(template.join("src")).unwrap();
    fs::write(template.join("README.md"), format!("# {kind} starter\n")).unwrap();
    fs::write(template.join("src/index.js"), "console.log('hi');\n").unwrap();
}

#[test]
fn missing_name_is_a_usage_error() {
    Command::cargo_bin("stackgen")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("<NAME>"));
}

#[test]
fn unknown_type_fails_without_creating_directory() {
    let tmp = tempfile::tempdir().unwrap();

    Command::cargo_bin("stackgen")
        .unwrap()
        .current_dir(tmp.path())
        .args(["edge", "--type", "gateway"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown project type: gateway"));

    assert!(!tmp.path().join("edge").exists());
}

#[test]
fn existing_target_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("shop")).unwrap();

    Command::cargo_bin("stackgen")
        .unwrap()
        .current_dir(tmp.path())
        .arg("shop")
        .assert()
        .failure()
        .stderr(predicate::str::contains("shop already exists"));
}

#[test]
fn scaffolds_monolith_by_default() {
    stage_template("monolith");
    let tmp = tempfile::tempdir().unwrap();

    Command::cargo_bin("stackgen")
        .unwrap()
        .current_dir(tmp.path())
        .arg("shop")
        .assert()
        .success()
        .stdout(predicate::str::contains("Looking for template at:"))
        .stdout(predicate::str::contains("Project shop of type monolith"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("shop/README.md")).unwrap(),
        "# monolith starter\n",
    );
    assert!(tmp.path().join("shop/src/index.js").exists());
}

#[test]
fn scaffolds_microservice_with_type_flag() {
    stage_template("microservice");
    let tmp = tempfile::tempdir().unwrap();

    Command::cargo_bin("stackgen")
        .unwrap()
        .current_dir(tmp.path())
        .args(["billing", "--type", "microservice"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Project billing of type microservice",
        ));

    assert!(tmp.path().join("billing/src/index.js").exists());
}

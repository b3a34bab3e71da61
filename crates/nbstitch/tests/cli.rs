use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_displays_usage() {
    Command::cargo_bin("nbstitch")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn assemble_writes_a_notebook_and_reports_it() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = dir.path().join("a.py");
    let reqs = dir.path().join("r.txt");
    let output = dir.path().join("out.ipynb");
    fs::write(&source, "x = 1\n").unwrap();
    fs::write(&reqs, "numpy\n").unwrap();

    Command::cargo_bin("nbstitch")
        .expect("binary exists")
        .current_dir(dir.path())
        .arg("assemble")
        .arg(&source)
        .arg("--output")
        .arg(&output)
        .arg("--requirements")
        .arg(&reqs)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 cells"));

    assert!(output.is_file());
}

#[test]
fn assemble_fails_loudly_on_bad_destination() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = dir.path().join("a.py");
    let reqs = dir.path().join("r.txt");
    fs::write(&source, "x = 1\n").unwrap();
    fs::write(&reqs, "numpy\n").unwrap();

    Command::cargo_bin("nbstitch")
        .expect("binary exists")
        .current_dir(dir.path())
        .arg("assemble")
        .arg(&source)
        .arg("--output")
        .arg(dir.path().join("out.txt"))
        .arg("--requirements")
        .arg(&reqs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid file extension"));
}

#[test]
fn completions_render_for_bash() {
    Command::cargo_bin("nbstitch")
        .expect("binary exists")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nbstitch"));
}

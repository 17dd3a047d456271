use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const PAGE: &str = r#"
<html>
    <body>
        <ul id="q1">
            <li class="option green-box">cat</li>
            <li class="option red-box">dog</li>
            <li class="option green-box">bird</li>
        </ul>
        <ul id="q2">
            <li class="option gray-box">fish</li>
        </ul>
    </body>
</html>
"#;

fn page_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(PAGE.as_bytes()).expect("write fixture");
    file
}

#[test]
fn test_scan_outputs_json_array() {
    let file = page_file();

    Command::cargo_bin("greenbox")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains(r#""correct": "cat;bird""#))
        .stdout(predicate::str::contains(r#""wrong": "dog""#))
        .stdout(predicate::str::contains(r#""id": "q2""#));
}

#[test]
fn test_single_container_outputs_one_object() {
    let file = page_file();

    Command::cargo_bin("greenbox")
        .unwrap()
        .arg(file.path())
        .args(["--container", "q2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains(r#""wrong": "fish""#))
        .stdout(predicate::str::contains("q1").not());
}

#[test]
fn test_missing_container_exits_nonzero() {
    let file = page_file();

    Command::cargo_bin("greenbox")
        .unwrap()
        .arg(file.path())
        .args(["--container", "zzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("container not found: zzz"));
}

#[test]
fn test_text_format() {
    let file = page_file();

    Command::cargo_bin("greenbox")
        .unwrap()
        .arg(file.path())
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id: q1"))
        .stdout(predicate::str::contains("correct: cat;bird"))
        .stdout(predicate::str::contains("wrong: dog"));
}

#[test]
fn test_stdin_input() {
    Command::cargo_bin("greenbox")
        .unwrap()
        .arg("-")
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "q1""#));
}

#[test]
fn test_marker_override() {
    let file = page_file();

    Command::cargo_bin("greenbox")
        .unwrap()
        .arg(file.path())
        .args(["--marker", "red-box", "--container", "q1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""correct": "dog""#))
        .stdout(predicate::str::contains(r#""wrong": "cat;bird""#));
}

#[test]
fn test_output_file() {
    let file = page_file();
    let out = NamedTempFile::new().expect("create temp file");

    Command::cargo_bin("greenbox")
        .unwrap()
        .arg(file.path())
        .args(["--output"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let written = std::fs::read_to_string(out.path()).expect("read output");
    assert!(written.contains(r#""correct": "cat;bird""#));
}

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn lines_flag_restricts_the_snippet_to_a_range() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("a.txt");
    fs::write(&input_path, "one\ntwo\nthree\nfour\nfive\n").unwrap();

    let mut cmd = cargo_bin_cmd!("snip");
    cmd.arg("copy")
        .arg(input_path.as_os_str())
        .arg("--lines")
        .arg("2:4")
        .arg("--language")
        .arg("text")
        .arg("--no-path")
        .arg("--stdout");

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout, "```text\ntwo\nthree\nfour\n```");
}

#[test]
fn empty_selection_reports_and_copies_nothing() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("a.txt");
    fs::write(&input_path, "one\ntwo\n").unwrap();

    let mut cmd = cargo_bin_cmd!("snip");
    cmd.arg("copy")
        .arg(input_path.as_os_str())
        .arg("--lines")
        .arg("5:9")
        .arg("--stdout");

    // Informational, not a failure: exits zero, renders nothing.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("nothing copied"))
        .stdout(predicate::str::contains("```").not());
}

#[test]
fn malformed_lines_value_is_an_error() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("a.txt");
    fs::write(&input_path, "one\n").unwrap();

    let mut cmd = cargo_bin_cmd!("snip");
    cmd.arg("copy")
        .arg(input_path.as_os_str())
        .arg("--lines")
        .arg("9:2")
        .arg("--stdout");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --lines value"));
}

#[test]
fn reads_content_from_stdin() {
    let mut cmd = cargo_bin_cmd!("snip");
    cmd.arg("copy")
        .arg("-")
        .arg("--language")
        .arg("rust")
        .arg("--no-path")
        .arg("--stdout")
        .write_stdin("fn main() {}");

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout, "```rust\nfn main() {}\n```");
}

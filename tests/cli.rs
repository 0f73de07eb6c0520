use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn scan_file_with_default_format() {
    let mut cmd = cargo_bin_cmd!("mdtags");
    cmd.arg(fixture_path("showcase.md"));

    let output_pred = predicate::str::contains("<document>")
        .and(predicate::str::contains("<header weight=\"1\">Caption 1</header>"))
        .and(predicate::str::contains("<paragraph weight=\"1\"/>"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn scan_stdin_as_json() {
    let mut cmd = cargo_bin_cmd!("mdtags");
    cmd.arg("-").arg("--format").arg("json").write_stdin("# Title\nbody");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"header\"").and(predicate::str::contains("\"text\": \"body\"")));
}

#[test]
fn char_offsets_backend_from_flag() {
    let mut cmd = cargo_bin_cmd!("mdtags");
    cmd.args(["-", "-f", "json", "--backend", "char-offsets"])
        .write_stdin("é *x*");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"start_position\": 2"));
}

#[test]
fn config_file_selects_format() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(config, "[output]\nformat = \"treeviz\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("mdtags");
    cmd.arg("-")
        .arg("--config")
        .arg(config.path())
        .write_stdin("plain ~~struck~~");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("∼ struck"));
}

#[test]
fn format_flag_overrides_config_file() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(config, "[output]\nformat = \"treeviz\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("mdtags");
    cmd.arg("-")
        .arg("--config")
        .arg(config.path())
        .args(["--format", "yaml"])
        .write_stdin("plain");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kind: normal"));
}

#[test]
fn zero_indent_width_is_rejected() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(config, "[scanner]\nlist_indent_width = 0").expect("write config");

    let mut cmd = cargo_bin_cmd!("mdtags");
    cmd.arg("-").arg("--config").arg(config.path()).write_stdin("- item");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("list_indent_width must be at least 1"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("mdtags");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("json")
            .and(predicate::str::contains("treeviz"))
            .and(predicate::str::contains("yaml")),
    );
}

#[test]
fn unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("mdtags");
    cmd.args(["-", "--format", "html"]).write_stdin("text");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format 'html' not found"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("mdtags");
    cmd.arg(fixture_path("does-not-exist.md"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

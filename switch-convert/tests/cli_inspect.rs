use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn inspect_lists_parsed_records() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("switch-convert"));
    cmd.arg("inspect")
        .arg(fixture("fixtures/hp-2530.cfg"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "source=hp vlans=3 interfaces=4 device_lines=2",
        ))
        .stdout(predicate::str::contains("device hostname name=HP-2530-L1"))
        .stdout(predicate::str::contains(
            "vlan 901 name=Voice ip=- voice=true untagged=- tagged=1,2",
        ))
        .stdout(predicate::str::contains("interface 3 mode=- access=1"));
}

#[test]
fn inspect_json_serializes_model() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("switch-convert"));
    let output = cmd
        .arg("inspect")
        .arg(fixture("fixtures/cisco-2960.cfg"))
        .arg("--from")
        .arg("cisco")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["source"], "cisco");
    assert_eq!(value["vlans"]["10"]["ip_address"], "10.0.10.2 255.255.255.0");
    assert_eq!(value["interfaces"]["2"]["voice_vlan"], "901");
    assert_eq!(value["interfaces"]["4"]["shutdown"], "on");
}

#[test]
fn inspect_refuses_aruba_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("aruba.cfg");
    fs::write(&input, "interface 1/1/1\n    vlan trunk native 1\n").expect("write input");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("switch-convert"));
    cmd.arg("inspect")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no reader for aruba6100 configs"));
}

#[test]
fn detect_names_each_dialect() {
    for (path, expected) in [
        ("fixtures/cisco-2960.cfg", "dialect=cisco"),
        ("fixtures/hp-2530.cfg", "dialect=hp"),
        ("fixtures/ambiguous.cfg", "dialect=unknown"),
    ] {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("switch-convert"));
        cmd.arg("detect")
            .arg(fixture(path))
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("{expected}\n")));
    }
}

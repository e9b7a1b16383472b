mod common;

use std::fs;

use predicates::prelude::*;
use serde_json::json;

use common::{TestFixture, clean_snapshot, external_link_snapshot, h5lint, parse_report};

#[test]
fn missing_file_exits_two_without_json() {
    let fixture = TestFixture::new();

    h5lint(&fixture)
        .arg("does-not-exist.h5")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("FileNotFound"));
}

#[test]
fn native_container_exits_two() {
    let fixture = TestFixture::new();
    let mut bytes = vec![0x89, b'H', b'D', b'F', b'\r', b'\n', 0x1a, b'\n'];
    bytes.extend_from_slice(&[0u8; 256]);
    fixture.create_file("native.h5", &bytes);

    h5lint(&fixture)
        .arg("native.h5")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("superblock at offset 0"));
}

#[test]
fn malformed_snapshot_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_file("broken.json", b"{\"objects\": ");

    h5lint(&fixture)
        .arg("broken.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Open"));
}

#[test]
fn clean_file_exits_zero_with_report() {
    let fixture = TestFixture::new();
    fixture.create_snapshot("clean.json", &clean_snapshot());

    let output = h5lint(&fixture).arg("clean.json").assert().success();
    let report = parse_report(&output.get_output().stdout);

    let top: Vec<&String> = report.as_object().unwrap().keys().collect();
    assert_eq!(top, vec!["findings", "summary"]);
    assert_eq!(report["findings"], json!([]));
    assert_eq!(report["summary"]["file"], "clean.json");
    assert_eq!(report["summary"]["num_objects"], 2);
    assert!(report["summary"]["size_bytes"].as_u64().unwrap() > 0);
}

#[test]
fn safety_findings_exit_one() {
    let fixture = TestFixture::new();
    fixture.create_snapshot("ext.json", &external_link_snapshot());

    let output = h5lint(&fixture).arg("ext.json").assert().code(1);
    let report = parse_report(&output.get_output().stdout);

    assert_eq!(report["summary"]["num_links_external"], 1);
    assert_eq!(report["summary"]["counts"]["safety"], 1);
    assert_eq!(report["summary"]["counts"]["warn"], 1);
    let external = &report["findings"][0];
    assert_eq!(external["level"], "safety");
    assert_eq!(external["code"], "EXTERNAL_LINK");
    assert_eq!(external["path"], "/");
    assert_eq!(
        external["extra"],
        json!({"target_file": "other.h5", "target_path": "/data", "member": "extlink"})
    );
}

#[test]
fn soft_fail_exits_zero_despite_findings() {
    let fixture = TestFixture::new();
    fixture.create_snapshot("ext.json", &external_link_snapshot());

    h5lint(&fixture)
        .args(["ext.json", "--soft-fail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXTERNAL_LINK"));
}

#[test]
fn warnings_alone_exit_zero() {
    let fixture = TestFixture::new();
    fixture.create_snapshot(
        "tiny.json",
        &json!({"objects": {
            "root": {"type": "group", "members": [
                {"name": "d", "link": "hard", "object": "d"}
            ]},
            "d": {"type": "dataset", "shape": [100], "dtype": "float32", "chunks": [1],
                  "fillvalue": {"dtype": "f4", "value": "nan"}}
        }}),
    );

    let output = h5lint(&fixture).arg("tiny.json").assert().success();
    let report = parse_report(&output.get_output().stdout);

    let codes: Vec<&str> = report["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["TINY_CHUNKS", "NAN_VALUES"]);
}

#[test]
fn userblock_is_a_safety_finding() {
    let fixture = TestFixture::new();
    let mut doc = clean_snapshot();
    doc["userblock_bytes"] = json!(512);
    fixture.create_snapshot("ub.json", &doc);

    let output = h5lint(&fixture).arg("ub.json").assert().code(1);
    let report = parse_report(&output.get_output().stdout);

    assert_eq!(report["summary"]["userblock_bytes"], 512);
    assert_eq!(report["findings"][0]["code"], "USERBLOCK_PRESENT");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let fixture = TestFixture::new();
    fixture.create_snapshot("ext.json", &external_link_snapshot());

    let first = h5lint(&fixture).arg("ext.json").output().unwrap();
    let second = h5lint(&fixture).arg("ext.json").output().unwrap();

    assert!(!first.stdout.is_empty());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn text_format_prints_summary() {
    let fixture = TestFixture::new();
    fixture.create_snapshot("ext.json", &external_link_snapshot());

    h5lint(&fixture)
        .args(["ext.json", "--format", "text"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("◉ SAFETY EXTERNAL_LINK /"))
        .stdout(predicate::str::contains("Summary: ext.json"));
}

#[test]
fn output_flag_writes_report_to_file() {
    let fixture = TestFixture::new();
    fixture.create_snapshot("clean.json", &clean_snapshot());

    h5lint(&fixture)
        .args(["clean.json", "--output", "report.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read(fixture.path().join("report.json")).unwrap();
    let report = parse_report(&written);
    assert_eq!(report["summary"]["num_datasets"], 1);
}

#[test]
fn logs_stay_off_stdout() {
    let fixture = TestFixture::new();
    fixture.create_snapshot("clean.json", &clean_snapshot());

    let output = h5lint(&fixture).args(["clean.json", "-vvv"]).output().unwrap();

    assert!(output.status.success());
    parse_report(&output.stdout);
    assert!(String::from_utf8_lossy(&output.stderr).contains("scan finished"));
}

#[test]
fn unwritten_huge_dataset_still_produces_report() {
    let fixture = TestFixture::new();
    fixture.create_snapshot(
        "sparse.json",
        &json!({"objects": {
            "root": {"type": "group", "members": [
                {"name": "cube", "link": "hard", "object": "cube"}
            ]},
            "cube": {"type": "dataset",
                     "shape": [4_000_000_000_u64, 4_000_000_000_u64, 4_000_000_000_u64],
                     "dtype": "float64",
                     "fillvalue": {"dtype": "f8", "value": "inf"}}
        }}),
    );

    let output = h5lint(&fixture).arg("sparse.json").assert().success();
    let report = parse_report(&output.get_output().stdout);

    assert_eq!(report["findings"][0]["code"], "INF_VALUES");
    assert_eq!(report["findings"][0]["path"], "/cube");
    assert_eq!(report["summary"]["num_datasets"], 1);
}

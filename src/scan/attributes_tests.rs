use serde_json::{Value, json};

use super::*;
use crate::reader::SnapshotReader;
use crate::scan::finding::Code;

fn run(attributes: Value, threshold: u64) -> ScanContext {
    let reader = SnapshotReader::from_value(json!({"objects": {
        "root": {"type": "group", "attributes": attributes}
    }}))
    .unwrap();
    let root = reader.root().unwrap().id;
    let mut ctx = ScanContext::new("f", None);
    inspect_attributes(&mut ctx, &reader, root, "/", threshold);
    ctx
}

fn codes(ctx: &ScanContext) -> Vec<Code> {
    ctx.findings().iter().map(|f| f.code).collect()
}

#[test]
fn clean_attributes_produce_nothing() {
    let ctx = run(json!({"units": "K", "scale": 2.0}), 1_000_000);
    assert!(ctx.findings().is_empty());
}

#[test]
fn huge_attribute_reports_name_and_size() {
    let ctx = run(
        json!({"payload": {"dtype": "float64", "shape": [200, 1000]}}),
        1_000_000,
    );

    let finding = &ctx.findings()[0];
    assert_eq!(finding.code, Code::HugeAttribute);
    assert_eq!(finding.level, Level::Warn);
    assert_eq!(finding.path, "/");
    assert_eq!(finding.extra["attribute"], json!("payload"));
    assert_eq!(finding.extra["size"], json!(1_600_000));
}

#[test]
fn size_equal_to_threshold_is_not_huge() {
    let ctx = run(json!({"payload": {"dtype": "uint8", "shape": [1000]}}), 1000);
    assert!(ctx.findings().is_empty());
}

#[test]
fn text_size_is_encoded_length() {
    let ctx = run(json!({"note": "ééé"}), 5);
    assert_eq!(ctx.findings()[0].extra["size"], json!(6));
}

#[test]
fn suspicious_attribute_name() {
    let ctx = run(json!({"../evil": 1}), 1_000_000);

    assert_eq!(codes(&ctx), vec![Code::SuspiciousAttrName]);
    assert_eq!(ctx.findings()[0].level, Level::Safety);
    assert_eq!(ctx.findings()[0].extra["attribute"], json!("../evil"));
}

#[test]
fn read_failure_does_not_stop_remaining_attributes() {
    let ctx = run(
        json!({
            "bad": {"error": "decode failed"},
            "a//b": 1,
            "big": {"dtype": "float64", "shape": [200_000]}
        }),
        1_000_000,
    );

    // json! objects iterate in key order: "a//b", "bad", "big".
    assert_eq!(
        codes(&ctx),
        vec![
            Code::SuspiciousAttrName,
            Code::AttrReadFail,
            Code::HugeAttribute
        ]
    );
    let failure = &ctx.findings()[1];
    assert_eq!(failure.level, Level::Error);
    assert_eq!(failure.extra["attribute"], json!("bad"));
    assert_eq!(failure.extra["error"], json!("decode failed"));
}

#[test]
fn unreadable_name_is_still_checked() {
    let ctx = run(json!({"..": {"error": "nope"}}), 1_000_000);
    assert_eq!(
        codes(&ctx),
        vec![Code::AttrReadFail, Code::SuspiciousAttrName]
    );
}

#[test]
fn unreadable_attribute_table_yields_one_failure() {
    let reader = SnapshotReader::from_value(json!({"objects": {
        "root": {"type": "group", "attributes_error": "corrupt attribute heap"}
    }}))
    .unwrap();
    let root = reader.root().unwrap().id;
    let mut ctx = ScanContext::new("f", None);

    inspect_attributes(&mut ctx, &reader, root, "/", 1_000_000);

    assert_eq!(codes(&ctx), vec![Code::AttrReadFail]);
    assert!(!ctx.findings()[0].extra.contains_key("attribute"));
}

#[test]
fn many_declared_shape_attributes_are_each_reported() {
    let attributes: serde_json::Map<String, Value> = (0..48)
        .map(|i| {
            (
                format!("block{i:02}"),
                json!({"dtype": "float64", "shape": [100_000, 100_000]}),
            )
        })
        .collect();

    let ctx = run(Value::Object(attributes), 1_000_000);

    assert_eq!(ctx.findings().len(), 48);
    assert!(ctx.findings().iter().all(|f| f.code == Code::HugeAttribute));
    assert_eq!(ctx.findings()[0].extra["attribute"], json!("block00"));
    assert_eq!(ctx.findings()[0].extra["size"], json!(80_000_000_000_u64));
}

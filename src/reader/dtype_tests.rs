use super::*;

#[test]
fn parses_long_numeric_names() {
    assert_eq!(Dtype::parse("float64"), Dtype::Float(8));
    assert_eq!(Dtype::parse("float32"), Dtype::Float(4));
    assert_eq!(Dtype::parse("int16"), Dtype::Int(2));
    assert_eq!(Dtype::parse("UINT8"), Dtype::UInt(1));
}

#[test]
fn parses_aliases() {
    assert_eq!(Dtype::parse("double"), Dtype::Float(8));
    assert_eq!(Dtype::parse("int"), Dtype::Int(8));
    assert_eq!(Dtype::parse("bool"), Dtype::Bool);
    assert_eq!(Dtype::parse(" vlen-str "), Dtype::VarText(TextEncoding::Utf8));
    assert_eq!(Dtype::parse("bytes"), Dtype::VarText(TextEncoding::Ascii));
}

#[test]
fn shorthand_is_case_sensitive() {
    assert_eq!(Dtype::parse("f8"), Dtype::Float(8));
    assert_eq!(Dtype::parse("i4"), Dtype::Int(4));
    assert_eq!(Dtype::parse("u8"), Dtype::UInt(8));
    assert_eq!(
        Dtype::parse("U8"),
        Dtype::FixedText {
            len: 8,
            encoding: TextEncoding::Utf8
        }
    );
}

#[test]
fn parses_fixed_text() {
    assert_eq!(
        Dtype::parse("S16"),
        Dtype::FixedText {
            len: 16,
            encoding: TextEncoding::Ascii
        }
    );
}

#[test]
fn unknown_names_stay_opaque() {
    assert_eq!(Dtype::parse("compound"), Dtype::Opaque("compound".to_string()));
    assert_eq!(Dtype::parse("float12"), Dtype::Opaque("float12".to_string()));
    assert_eq!(Dtype::parse("f3"), Dtype::Opaque("f3".to_string()));
}

#[test]
fn display_uses_canonical_names() {
    assert_eq!(Dtype::parse("f4").to_string(), "float32");
    assert_eq!(Dtype::parse("u2").to_string(), "uint16");
    assert_eq!(Dtype::parse("string").to_string(), "vlen-str");
    assert_eq!(Dtype::parse("S3").to_string(), "S3");
    assert_eq!(Dtype::parse("enum").to_string(), "enum");
}

#[test]
fn element_width_in_bytes() {
    assert_eq!(Dtype::Bool.element_width(), Some(1));
    assert_eq!(Dtype::parse("int32").element_width(), Some(4));
    assert_eq!(Dtype::parse("S10").element_width(), Some(10));
    assert_eq!(Dtype::parse("vlen-str").element_width(), None);
}

#[test]
fn predicates() {
    assert!(Dtype::Float(2).is_float());
    assert!(!Dtype::Int(8).is_float());
    assert!(Dtype::VarText(TextEncoding::Ascii).is_var_text());
    assert!(!Dtype::parse("S4").is_var_text());
}

#[test]
fn serde_uses_the_display_name() {
    let json = serde_json::to_string(&Dtype::Float(4)).unwrap();
    assert_eq!(json, "\"float32\"");

    let back: Dtype = serde_json::from_str("\"i8\"").unwrap();
    assert_eq!(back, Dtype::Int(8));
}

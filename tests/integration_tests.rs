use approx::assert_relative_eq;
use currency_format::prelude::*;
use serde_json::json;

fn major_symbol() -> FormatOptions {
    FormatOptions::new()
        .with_currency_display(CurrencyDisplay::Symbol)
        .with_input_unit(Unit::Major)
}

/// The documented formatting examples, end to end.
#[test]
fn formatting_examples() {
    assert_eq!(
        format_currency("IDR", 10500.0, &FormatOptions::default()).unwrap(),
        Some("IDR 10.500".to_string())
    );
    assert_eq!(
        format_currency("MYR", -99.1, &major_symbol()).unwrap(),
        Some("-RM 99.10".to_string())
    );

    let always = FormatOptions::new()
        .with_sign_display(SignDisplay::Always)
        .with_input_unit(Unit::Minor);
    assert_eq!(
        format_currency("SGD", 123456.0, &always).unwrap(),
        Some("+SGD 1,234.56".to_string())
    );
}

/// The documented parsing examples, end to end.
#[test]
fn parsing_examples() {
    assert_eq!(
        unformat_currency("IDR", "Rp 10.500", &ParseOptions::default()).unwrap(),
        10500.0
    );
    assert_eq!(
        unformat_currency("MYR", "RM 33.99", &ParseOptions::default()).unwrap(),
        3399.0
    );
    let major = ParseOptions::new().with_output_unit(Unit::Major);
    assert_relative_eq!(
        unformat_currency("MYR", "RM 33.99", &major).unwrap(),
        33.99
    );
    assert!(unformat_currency("USD", "Invalid Format", &ParseOptions::default())
        .unwrap()
        .is_nan());
}

/// Malformed codes fail hard everywhere; unknown-but-valid codes do not.
#[test]
fn code_validation_is_consistent() {
    for bad in ["usd", "12A", "US", "EURO", ""] {
        assert!(matches!(rule(bad), Err(CurrencyError::InvalidCodeFormat(_))));
        assert!(to_minor_unit(bad, 1.0).is_err());
        assert!(to_major_unit(bad, 1.0).is_err());
        assert!(format_currency(bad, 1.0, &FormatOptions::default()).is_err());
        assert!(unformat_currency(bad, "1", &ParseOptions::default()).is_err());
    }

    assert_eq!(rule("XYZ").unwrap(), &DEFAULT_RULE);
    assert_eq!(
        format_currency("XYZ", 1234567.0, &FormatOptions::default()).unwrap(),
        Some("XYZ 1.234.567".to_string())
    );
    assert_eq!(
        unformat_currency("XYZ", "XYZ 1.234.567", &ParseOptions::default()).unwrap(),
        1234567.0
    );
}

/// Formatting a parsed display string reproduces it.
#[test]
fn format_parse_format_is_stable() {
    let cases = [
        ("USD", 123456.0),
        ("EUR", -98765.0),
        ("IDR", 10500.0),
        ("BHD", 1234567.0),
        ("VNC", 25000.0),
        ("GBP", 1.0),
    ];
    for display in [CurrencyDisplay::Code, CurrencyDisplay::Symbol, CurrencyDisplay::None] {
        let options = FormatOptions::new().with_currency_display(display);
        for (code, minor) in cases {
            let first = format_currency(code, minor, &options).unwrap().unwrap();
            let parsed = unformat_currency(code, &first, &ParseOptions::default()).unwrap();
            assert_eq!(parsed, minor, "{code} {display}: {first}");
            let second = format_currency(code, parsed, &options).unwrap().unwrap();
            assert_eq!(first, second);
        }
    }
}

/// Three-place currencies keep all three digits through a round trip.
#[test]
fn three_place_currencies() {
    for code in ["BHD", "JOD", "OMR"] {
        assert_eq!(to_major_unit(code, 1234.0).unwrap(), 1.234);
        assert_eq!(to_minor_unit(code, 1.234).unwrap(), 1234.0);
        let text = format_currency(code, 1234.0, &FormatOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(text, format!("{code} 1.234"));
    }
}

/// A batch of heterogeneous values formats without per-item error handling.
#[test]
fn batch_with_bad_items() {
    let values = vec![json!(10500), json!("10500"), json!(null), json!(-250000)];
    let options = FormatOptions::new()
        .with_currency_display(CurrencyDisplay::Symbol)
        .with_fallback("—");
    let formatted = format_values("IDR", &values, &options).unwrap();
    assert_eq!(
        formatted,
        vec![
            Some("Rp10.500".to_string()),
            Some("—".to_string()),
            Some("—".to_string()),
            Some("-Rp250.000".to_string()),
        ]
    );

    let texts = vec![json!("Rp10.500"), json!(10500), json!("Rp 1,2,3")];
    let parsed = unformat_values("IDR", &texts, &ParseOptions::default()).unwrap();
    assert_eq!(parsed[0], 10500.0);
    assert!(parsed[1].is_nan());
    assert!(parsed[2].is_nan());
}

/// Rules serialize for inspection; absent symbols are omitted.
#[test]
fn rule_serializes() {
    let json = serde_json::to_value(rule("USD").unwrap()).unwrap();
    assert_eq!(json["decimal_places"], 2);
    assert_eq!(json["symbol"], "US$");
    assert_eq!(json["pattern"], "%s %v");

    let json = serde_json::to_value(rule("AED").unwrap()).unwrap();
    assert!(json.get("symbol").is_none());
}

/// Options can be loaded from JSON configuration.
#[test]
fn options_from_json() {
    let options: FormatOptions = serde_json::from_value(json!({
        "sign_display": "never",
        "currency_display": "none",
        "input_unit": "major",
        "fallback": "n/a"
    }))
    .unwrap();
    assert_eq!(
        format_currency("EUR", -1234.5, &options).unwrap(),
        Some("1.234,50".to_string())
    );
    assert_eq!(
        format_currency("EUR", f64::NAN, &options).unwrap(),
        Some("n/a".to_string())
    );
}

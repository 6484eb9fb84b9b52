use order_scenario::utils::display::{body_to_value, pretty_json, try_pretty};
use serde_json::{Value, json};

#[test]
fn test_try_pretty_formats_json() {
    let formatted = try_pretty(r#"{"success":true,"margin":90}"#);
    assert!(formatted.contains('\n'));
    assert!(formatted.contains(r#""success": true"#));
}

#[test]
fn test_try_pretty_keeps_plain_text() {
    assert_eq!(try_pretty("Internal Server Error"), "Internal Server Error");
    assert_eq!(try_pretty(""), "");
    assert_eq!(try_pretty(r#"{"truncated": "#), r#"{"truncated": "#);
}

#[test]
fn test_pretty_json_of_struct() {
    let formatted = pretty_json(&json!({"symbol": "BTC"}));
    assert_eq!(formatted, "{\n  \"symbol\": \"BTC\"\n}");
}

#[test]
fn test_body_to_value() {
    assert_eq!(body_to_value(r#"{"a": 1}"#), json!({"a": 1}));
    assert_eq!(body_to_value("[]"), json!([]));
    assert_eq!(body_to_value("ok"), Value::String("ok".to_string()));
}

//! Integration tests for the Value type.

use quire::foundation::{Token, Value, ValueType};

#[test]
fn every_value_carries_a_type_tag() {
    assert_eq!(Value::Number(1.0).value_type(), ValueType::Number);
    assert_eq!(Value::from("s").value_type(), ValueType::String);
    assert_eq!(Value::Block(vec![]).value_type(), ValueType::Block);
}

#[test]
fn conversions() {
    assert_eq!(Value::from(2.5), Value::Number(2.5));
    assert_eq!(Value::from("ab"), Value::String("ab".to_string()));
    assert_eq!(Value::from("ab".to_string()), Value::String("ab".to_string()));
}

#[test]
fn stringification_keeps_trailing_zero() {
    // Concatenation overloads rely on whole numbers rendering as "3.0".
    assert_eq!(Value::Number(3.0).to_string(), "3.0");
    assert_eq!(Value::Number(-1.0).to_string(), "-1.0");
    assert_eq!(Value::Number(1.25).to_string(), "1.25");
}

#[test]
fn stringification_of_strings_is_raw() {
    assert_eq!(Value::from("no quotes").to_string(), "no quotes");
}

#[test]
fn block_values_hold_quoted_code() {
    let body = vec![Token::Number(1.0), Token::Symbol('+')];
    let value = Value::Block(body.clone());
    assert_eq!(value.as_block(), Some(body.as_slice()));
    assert_eq!(value.as_number(), None);
    assert_eq!(value.as_str(), None);
}

#[test]
fn type_tag_display_names() {
    assert_eq!(ValueType::Number.to_string(), "num");
    assert_eq!(ValueType::String.to_string(), "str");
    assert_eq!(ValueType::Block.to_string(), "block");
}

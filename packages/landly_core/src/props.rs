//! Lenient accessors over block props.
//!
//! Props come from model output, so every accessor degrades to "absent" on a
//! type mismatch instead of failing.

use serde_json::{Map, Value};

pub type Props = Map<String, Value>;

pub fn get_str<'a>(props: &'a Props, key: &str) -> Option<&'a str> {
    props.get(key).and_then(Value::as_str)
}

/// The string under `key` when it is a string (even an empty one), `default` otherwise
pub fn string_or<'a>(props: &'a Props, key: &str, default: &'a str) -> &'a str {
    get_str(props, key).unwrap_or(default)
}

/// Trimmed value under `key`, `None` when absent, non-string or blank
pub fn non_blank<'a>(props: &'a Props, key: &str) -> Option<&'a str> {
    get_str(props, key).map(str::trim).filter(|s| !s.is_empty())
}

pub fn is_blank(props: &Props, key: &str) -> bool {
    non_blank(props, key).is_none()
}

pub fn as_object(value: Option<&Value>) -> Option<&Props> {
    value.and_then(Value::as_object)
}

/// Object entries of a list value; non-list values and non-object entries are skipped
pub fn object_list(value: Option<&Value>) -> Vec<&Props> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

/// String entries of a list value; anything else is skipped
pub fn string_list(value: Option<&Value>) -> Vec<&str> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// `true` for a JSON `true` or a case-insensitive `"true"` string
pub fn flag(props: &Props, key: &str) -> bool {
    match props.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Display text for scalar values: strings as-is, numbers in JSON notation
pub fn scalar_text(props: &Props, key: &str) -> Option<String> {
    match props.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

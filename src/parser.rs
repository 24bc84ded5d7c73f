//! Defensive numeric parsing
//!
//! Extracts numbers from untyped JSON values, substituting a caller-supplied
//! default instead of failing. Inputs come from externally sourced product
//! payloads (image details, nutrient tables) and must never crash a caller.

use serde_json::{Map, Value};

/// Read a value as `f32`, falling back to `default` on null, missing, or
/// unparseable input
pub fn get_as_f32(value: Option<&Value>, default: f32) -> f32 {
    match value {
        None | Some(Value::Null) => default,
        Some(Value::Number(n)) => n.as_f64().map_or(default, |v| v as f32),
        Some(Value::String(s)) => parse_f64(s, f64::from(default)) as f32,
        Some(_) => default,
    }
}

/// Read a value as `i32`, truncating toward zero; falls back to `default`
/// on null, missing, or unparseable input
pub fn get_as_i32(value: Option<&Value>, default: i32) -> i32 {
    match value {
        None | Some(Value::Null) => default,
        Some(Value::Number(n)) => n.as_f64().map_or(default, |v| v as i32),
        Some(Value::String(s)) => parse_f64(s, f64::from(default)) as i32,
        Some(_) => default,
    }
}

/// Look up `key` in `map` and read it as `f32`; a missing map, missing key,
/// or absent entry degrades to `default`
pub fn get_as_f32_from(map: Option<&Map<String, Value>>, key: Option<&str>, default: f32) -> f32 {
    match (map, key) {
        (Some(map), Some(key)) => get_as_f32(map.get(key), default),
        _ => default,
    }
}

/// Look up `key` in `map` and read it as `i32`; a missing map, missing key,
/// or absent entry degrades to `default`
pub fn get_as_i32_from(map: Option<&Map<String, Value>>, key: Option<&str>, default: i32) -> i32 {
    match (map, key) {
        (Some(map), Some(key)) => get_as_i32(map.get(key), default),
        _ => default,
    }
}

fn parse_f64(number: &str, default: f64) -> f64 {
    let trimmed = number.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_as_f32_from_string() {
        assert_eq!(get_as_f32(Some(&json!("3.2")), 1.5), 3.2);
        assert_eq!(get_as_f32(Some(&json!("abc")), 1.5), 1.5);
        assert_eq!(get_as_f32(Some(&json!("")), 1.5), 1.5);
        assert_eq!(get_as_f32(Some(&json!("   ")), 1.5), 1.5);
    }

    #[test]
    fn test_get_as_f32_from_number() {
        assert_eq!(get_as_f32(Some(&json!(3.2)), 1.5), 3.2);
        assert_eq!(get_as_f32(Some(&json!(5)), 1.5), 5.0);
    }

    #[test]
    fn test_get_as_f32_null_and_missing() {
        assert_eq!(get_as_f32(Some(&Value::Null), 1.5), 1.5);
        assert_eq!(get_as_f32(None, 1.5), 1.5);
    }

    #[test]
    fn test_get_as_f32_non_scalar() {
        assert_eq!(get_as_f32(Some(&json!([1, 2])), 1.5), 1.5);
        assert_eq!(get_as_f32(Some(&json!({"a": 1})), 1.5), 1.5);
        assert_eq!(get_as_f32(Some(&json!(true)), 1.5), 1.5);
    }

    #[test]
    fn test_get_as_i32_truncates() {
        assert_eq!(get_as_i32(Some(&json!(2.7)), 0), 2);
        assert_eq!(get_as_i32(Some(&json!(-2.7)), 0), -2);
        assert_eq!(get_as_i32(Some(&json!("3.9")), 0), 3);
    }

    #[test]
    fn test_get_as_i32_defaults() {
        assert_eq!(get_as_i32(Some(&json!("abc")), 7), 7);
        assert_eq!(get_as_i32(None, 7), 7);
    }

    #[test]
    fn test_map_lookup() {
        let details = json!({"x": 5, "y": "2.5"});
        let map = details.as_object().unwrap();
        assert_eq!(get_as_i32_from(Some(map), Some("x"), 0), 5);
        assert_eq!(get_as_f32_from(Some(map), Some("y"), 0.0), 2.5);
    }

    #[test]
    fn test_map_lookup_degrades_to_default() {
        let empty = Map::new();
        assert_eq!(get_as_i32_from(Some(&empty), Some("x"), 0), 0);
        assert_eq!(get_as_i32_from(None, Some("x"), 4), 4);
        assert_eq!(get_as_i32_from(Some(&empty), None, 4), 4);
    }
}

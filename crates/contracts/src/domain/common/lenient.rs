//! Tolerant decoders for wire fields that are interpreted numerically.
//!
//! The backend stores `is_featured` and `proficiency` as loosely typed
//! columns. A bad value must degrade to a falsy/zero reading instead of
//! failing the whole portfolio payload.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Truthiness of a wire flag: non-zero numbers, `true` and numeric strings
/// other than zero. Everything else reads as `false`.
pub fn flag_from_value(value: &Value) -> bool {
    let number = match value {
        Value::Bool(b) => return *b,
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    matches!(number, Some(v) if v != 0.0 && !v.is_nan())
}

/// Percentage in 0..=100. Non-numeric input reads as 0, out of range input is clamped.
pub fn percent_from_value(value: &Value) -> u8 {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(v) if v.is_finite() => v.round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(flag_from_value(&value))
}

/// Flags go back on the wire as 0/1, the shape the backend stores.
pub fn serialize_flag<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}

pub fn deserialize_percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(percent_from_value(&value))
}

/// `null` and a missing key both become an empty list.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flag_truthiness() {
        assert!(flag_from_value(&json!(1)));
        assert!(flag_from_value(&json!(2)));
        assert!(flag_from_value(&json!(true)));
        assert!(flag_from_value(&json!("1")));
        assert!(!flag_from_value(&json!(0)));
        assert!(!flag_from_value(&json!("0")));
        assert!(!flag_from_value(&json!(false)));
        assert!(!flag_from_value(&json!(null)));
        assert!(!flag_from_value(&json!("yes")));
        assert!(!flag_from_value(&json!([1])));
    }

    #[test]
    fn test_percent_clamps_and_defaults() {
        assert_eq!(percent_from_value(&json!(80)), 80);
        assert_eq!(percent_from_value(&json!(79.6)), 80);
        assert_eq!(percent_from_value(&json!("65")), 65);
        assert_eq!(percent_from_value(&json!(140)), 100);
        assert_eq!(percent_from_value(&json!(-5)), 0);
        assert_eq!(percent_from_value(&json!("high")), 0);
        assert_eq!(percent_from_value(&json!(null)), 0);
    }
}

//! Coercion of ambiguously typed item identifiers.
//!
//! The format allows an item `id` to arrive as a JSON string, integer, or
//! float, and requires readers to normalize all three to a string. This is
//! the only field in the format with more than one admissible wire type.

use serde_json::Value;

/// Coerces a scalar JSON value to the canonical string identifier.
///
/// Priority order is fixed: a string is taken verbatim; an integer-valued
/// number renders as plain decimal with no fractional part (`42` → `"42"`);
/// any other number renders through `f64`'s `Display` (`4.5` → `"4.5"`).
/// Objects, arrays, booleans, and null yield `None` — the codec turns that
/// into a decode failure naming the type it found.
pub fn coerce(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| f.to_string())
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_taken_verbatim() {
        assert_eq!(coerce(&json!("abc")).as_deref(), Some("abc"));
        assert_eq!(coerce(&json!("4.50")).as_deref(), Some("4.50"));
    }

    #[test]
    fn test_integer_renders_without_fraction() {
        assert_eq!(coerce(&json!(42)).as_deref(), Some("42"));
        assert_eq!(coerce(&json!(-7)).as_deref(), Some("-7"));
        assert_eq!(coerce(&json!(0)).as_deref(), Some("0"));
    }

    #[test]
    fn test_u64_beyond_i64_range() {
        assert_eq!(
            coerce(&json!(18_446_744_073_709_551_615u64)).as_deref(),
            Some("18446744073709551615")
        );
    }

    #[test]
    fn test_float_renders_via_display() {
        assert_eq!(coerce(&json!(4.5)).as_deref(), Some("4.5"));
        assert_eq!(coerce(&json!(-0.25)).as_deref(), Some("-0.25"));
    }

    #[test]
    fn test_non_scalars_rejected() {
        assert_eq!(coerce(&json!(null)), None);
        assert_eq!(coerce(&json!(true)), None);
        assert_eq!(coerce(&json!([1])), None);
        assert_eq!(coerce(&json!({"id": 1})), None);
    }
}

//! Emptiness checks and fallback selection.

use crate::value::Value;

/// True when `v` holds the zero value of its kind.
///
/// Records and timestamps are never empty, whatever their fields hold.
pub fn is_empty(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Str(s) => s.is_empty(),
        Value::Bytes(data) => data.is_empty(),
        Value::Seq(items) => items.is_empty(),
        Value::Map(map) => map.is_empty(),
        Value::Bool(b) => !*b,
        Value::Int(i) => *i == 0,
        Value::Uint(u) => *u == 0,
        Value::Float(f) => *f == 0.0,
        Value::Complex { re, im } => *re == 0.0 && *im == 0.0,
        Value::Record(_) | Value::Time(_) => false,
    }
}

/// `d` unless the first of `given` is present and non-empty.
pub fn default(d: &Value, given: &[Value]) -> Value {
    match given.first() {
        Some(v) if !is_empty(v) => v.clone(),
        _ => d.clone(),
    }
}

/// First non-empty value, or null.
pub fn coalesce(values: &[Value]) -> Value {
    values
        .iter()
        .find(|v| !is_empty(v))
        .cloned()
        .unwrap_or(Value::Null)
}

pub fn ternary(vt: &Value, vf: &Value, cond: bool) -> Value {
    if cond {
        vt.clone()
    } else {
        vf.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Map, Record};

    #[test]
    fn zero_values_are_empty() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&Value::from("")));
        assert!(is_empty(&Value::Seq(vec![])));
        assert!(is_empty(&Value::Map(Map::new())));
        assert!(is_empty(&Value::from(0)));
        assert!(is_empty(&Value::Uint(0)));
        assert!(is_empty(&Value::Float(0.0)));
        assert!(is_empty(&Value::complex(0.0, 0.0)));
        assert!(is_empty(&Value::Bool(false)));
        assert!(is_empty(&Value::bytes(Vec::new())));
    }

    #[test]
    fn non_zero_values_are_not_empty() {
        assert!(!is_empty(&Value::from("x")));
        assert!(!is_empty(&Value::from(vec![0])));
        assert!(!is_empty(&Value::Bool(true)));
        assert!(!is_empty(&Value::complex(0.0, 1.0)));
    }

    #[test]
    fn records_are_never_empty() {
        assert!(!is_empty(&Value::Record(Record::new("Empty"))));
        let zeroed = Record::new("Point").with_field("x", 0).with_field("y", 0);
        assert!(!is_empty(&Value::Record(zeroed)));
    }

    #[test]
    fn coalesce_picks_first_non_empty() {
        let values = [Value::from(0), Value::from(""), Value::Null, Value::from(5)];
        assert_eq!(coalesce(&values), Value::from(5));
        assert_eq!(coalesce(&values[..3]), Value::Null);
        assert_eq!(coalesce(&[]), Value::Null);
    }

    #[test]
    fn default_prefers_given_when_present() {
        let d = Value::from("fallback");
        assert_eq!(default(&d, &[]), d);
        assert_eq!(default(&d, &[Value::from("")]), d);
        assert_eq!(default(&d, &[Value::from("set")]), Value::from("set"));
    }

    #[test]
    fn ternary_selects_by_condition() {
        let (a, b) = (Value::from("yes"), Value::from("no"));
        assert_eq!(ternary(&a, &b, true), a);
        assert_eq!(ternary(&a, &b, false), b);
    }
}

//! Positional argument access for registered helpers.
//!
//! Scalar conversions are total: strings go through `str_val`, integers
//! through `to_int64`. Only a missing argument or a wrong-kind composite is an
//! error.

use chrono::{DateTime, FixedOffset};

use crate::coerce;
use crate::empty::is_empty;
use crate::error::{Error, Result};
use crate::strings::str_val;
use crate::utils::validation::require_arg;
use crate::value::{Map, Value};

static NULL: Value = Value::Null;

pub struct Args<'a> {
    name: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(name: &'a str, values: &'a [Value]) -> Self {
        Self { name, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, index: usize) -> Result<&'a Value> {
        require_arg(
            self.values.get(index),
            &format!("{}: argument {}", self.name, index + 1),
        )
    }

    /// The argument at `index`, or null when absent.
    pub fn value_or_null(&self, index: usize) -> &'a Value {
        self.values.get(index).unwrap_or(&NULL)
    }

    pub fn opt(&self, index: usize) -> Option<&'a Value> {
        self.values.get(index)
    }

    /// Arguments from `index` on; empty when there are fewer.
    pub fn rest(&self, index: usize) -> &'a [Value] {
        self.values.get(index..).unwrap_or(&[])
    }

    pub fn string(&self, index: usize) -> Result<String> {
        self.value(index).map(str_val)
    }

    pub fn strings_from(&self, index: usize) -> Vec<String> {
        self.rest(index).iter().map(str_val).collect()
    }

    pub fn int(&self, index: usize) -> Result<i64> {
        self.value(index).map(coerce::to_int64)
    }

    pub fn float(&self, index: usize) -> Result<f64> {
        self.value(index).map(coerce::to_float64)
    }

    /// Truthiness: any non-empty value counts as true.
    pub fn bool(&self, index: usize) -> Result<bool> {
        self.value(index).map(|v| !is_empty(v))
    }

    pub fn map(&self, index: usize) -> Result<Map> {
        match self.value(index)? {
            Value::Map(map) => Ok(map.clone()),
            Value::Null => Ok(Map::new()),
            other => Err(self.wrong_kind(index, "map", other)),
        }
    }

    pub fn maps_from(&self, index: usize) -> Result<Vec<Map>> {
        (index..self.len()).map(|i| self.map(i)).collect()
    }

    /// A timestamp, or Unix seconds.
    pub fn time(&self, index: usize) -> Result<DateTime<FixedOffset>> {
        match self.value(index)? {
            Value::Time(t) => Ok(*t),
            v @ (Value::Int(_) | Value::Uint(_)) => Ok(crate::date::resolve(v)),
            other => Err(self.wrong_kind(index, "time", other)),
        }
    }

    fn wrong_kind(&self, index: usize, expected: &str, got: &Value) -> Error {
        Error::validation_invalid_argument(
            format!("{}: argument {}", self.name, index + 1),
            format!("expected {}, got {}", expected, got.type_name()),
            None,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn missing_argument_names_position() {
        let values = [Value::from("a")];
        let args = Args::new("substr", &values);
        let err = args.int(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationMissingArgument);
        assert_eq!(err.details["args"][0], "substr: argument 2");
    }

    #[test]
    fn scalars_coerce_totally() {
        let values = [Value::from("12"), Value::from(3), Value::Null];
        let args = Args::new("f", &values);
        assert_eq!(args.int(0).unwrap(), 12);
        assert_eq!(args.string(1).unwrap(), "3");
        assert!(!args.bool(2).unwrap());
        assert_eq!(args.value_or_null(7), &Value::Null);
        assert_eq!(args.rest(1).len(), 2);
        assert!(args.rest(9).is_empty());
    }

    #[test]
    fn composites_check_kind() {
        let values = [Value::from("text"), Value::Null];
        let args = Args::new("keys", &values);
        let err = args.map(0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
        assert_eq!(err.details["problem"], "expected map, got string");
        assert!(args.map(1).unwrap().is_empty());
    }

    #[test]
    fn time_accepts_unix_seconds() {
        let values = [Value::from(60)];
        let args = Args::new("dateModify", &values);
        assert_eq!(args.time(0).unwrap().timestamp(), 60);
    }
}

//! Sequence helpers for dynamically-typed callers.
//!
//! Each function accepts any [`Value`] and fails with `value.not_a_sequence`
//! when it is not sequence-like. That failure is a misuse of the helper, not a
//! data problem, so it aborts the call instead of producing an empty result.

use crate::coerce;
use crate::empty::is_empty;
use crate::error::{Error, Result};
use crate::value::Value;

pub fn first(list: &Value) -> Result<Value> {
    let items = list.items("take first")?;
    Ok(super::first(&items[..]).cloned().unwrap_or(Value::Null))
}

pub fn last(list: &Value) -> Result<Value> {
    let items = list.items("take last")?;
    Ok(super::last(&items[..]).cloned().unwrap_or(Value::Null))
}

pub fn rest(list: &Value) -> Result<Value> {
    let items = list.items("take rest")?;
    if items.is_empty() {
        return Ok(Value::Null);
    }
    Ok(Value::Seq(super::rest(&items[..]).to_vec()))
}

pub fn initial(list: &Value) -> Result<Value> {
    let items = list.items("take initial")?;
    if items.is_empty() {
        return Ok(Value::Null);
    }
    Ok(Value::Seq(super::initial(&items[..]).to_vec()))
}

pub fn reverse(list: &Value) -> Result<Value> {
    let items = list.items("reverse")?;
    Ok(Value::Seq(super::reverse(&items[..])))
}

pub fn uniq(list: &Value) -> Result<Value> {
    let items = list.items("uniq")?;
    Ok(Value::Seq(super::uniq(&items[..])))
}

pub fn without(list: &Value, omit: &[Value]) -> Result<Value> {
    let items = list.items("without")?;
    Ok(Value::Seq(super::without(&items[..], omit)))
}

pub fn has(needle: &Value, haystack: &Value) -> Result<bool> {
    let items = haystack.items("has")?;
    Ok(super::has(needle, &items[..]))
}

pub fn push(list: &Value, item: Value) -> Result<Value> {
    let items = list.items("push")?;
    Ok(Value::Seq(super::push(&items[..], item)))
}

pub fn prepend(list: &Value, item: Value) -> Result<Value> {
    let items = list.items("prepend")?;
    Ok(Value::Seq(super::prepend(&items[..], item)))
}

/// Elements that are not empty.
pub fn compact(list: &Value) -> Result<Value> {
    let items = list.items("compact")?;
    Ok(items.iter().filter(|item| !is_empty(item)).cloned().collect())
}

/// `indices` holds an optional start and an optional end, coerced to integers.
pub fn slice(list: &Value, indices: &[Value]) -> Result<Value> {
    let items = list.items("slice")?;
    if items.is_empty() {
        return Ok(Value::Null);
    }

    let start = indices.first().map(|v| index(v, "start")).transpose()?;
    let end = indices.get(1).map(|v| index(v, "end")).transpose()?;

    super::slice(&items[..], start, end)
        .map(|part| Value::Seq(part.to_vec()))
        .ok_or_else(|| {
            Error::validation_invalid_argument(
                "indices",
                format!(
                    "slice bounds [{}:{}] out of range for length {}",
                    start.unwrap_or(0),
                    end.unwrap_or(items.len()),
                    items.len()
                ),
                None,
                None,
            )
        })
}

fn index(v: &Value, field: &str) -> Result<usize> {
    let raw = coerce::to_int64(v);
    usize::try_from(raw).map_err(|_| {
        Error::validation_invalid_argument(
            field,
            format!("slice index {} is negative", raw),
            None,
            None,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn ints(values: &[i64]) -> Value {
        Value::from(values.to_vec())
    }

    #[test]
    fn scalars_are_rejected_with_typed_error() {
        let scalar = Value::from(3);
        for result in [first(&scalar), last(&scalar), rest(&scalar), reverse(&scalar)] {
            assert_eq!(result.unwrap_err().code, ErrorCode::ValueNotASequence);
        }
        assert!(has(&Value::from(1), &Value::from("abc")).is_err());
        assert!(push(&Value::Null, Value::from(1)).is_err());
    }

    #[test]
    fn ends_of_a_sequence() {
        let list = ints(&[1, 2, 3]);
        assert_eq!(first(&list).unwrap(), Value::from(1));
        assert_eq!(last(&list).unwrap(), Value::from(3));
        assert_eq!(rest(&list).unwrap(), ints(&[2, 3]));
        assert_eq!(initial(&list).unwrap(), ints(&[1, 2]));
    }

    #[test]
    fn empty_sequences_yield_null() {
        let empty = Value::Seq(vec![]);
        assert_eq!(first(&empty).unwrap(), Value::Null);
        assert_eq!(last(&empty).unwrap(), Value::Null);
        assert_eq!(rest(&empty).unwrap(), Value::Null);
        assert_eq!(initial(&empty).unwrap(), Value::Null);
        assert_eq!(slice(&empty, &[]).unwrap(), Value::Null);
    }

    #[test]
    fn uniq_treats_equal_composites_as_duplicates() {
        let list = Value::Seq(vec![ints(&[1]), ints(&[1]), ints(&[2])]);
        assert_eq!(uniq(&list).unwrap(), Value::Seq(vec![ints(&[1]), ints(&[2])]));
        assert_eq!(uniq(&ints(&[1, 1, 2, 2, 3])).unwrap(), ints(&[1, 2, 3]));
    }

    #[test]
    fn push_returns_new_sequence() {
        let list = ints(&[1, 2]);
        let saved = list.clone();
        assert_eq!(push(&list, Value::from(3)).unwrap(), ints(&[1, 2, 3]));
        assert_eq!(prepend(&list, Value::from(0)).unwrap(), ints(&[0, 1, 2]));
        assert_eq!(list, saved);
    }

    #[test]
    fn slice_coerces_indices() {
        let list = ints(&[1, 2, 3, 4, 5]);
        assert_eq!(slice(&list, &[Value::from(1), Value::from(3)]).unwrap(), ints(&[2, 3]));
        assert_eq!(slice(&ints(&[1, 2, 3]), &[Value::from("2")]).unwrap(), ints(&[3]));
        assert_eq!(slice(&list, &[]).unwrap(), list);
    }

    #[test]
    fn slice_rejects_bad_bounds() {
        let list = ints(&[1, 2, 3]);
        let err = slice(&list, &[Value::from(-1)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
        assert!(slice(&list, &[Value::from(2), Value::from(1)]).is_err());
        assert!(slice(&list, &[Value::from(0), Value::from(4)]).is_err());
    }

    #[test]
    fn compact_drops_empty_elements() {
        let list = Value::Seq(vec![
            Value::from(0),
            Value::from("a"),
            Value::Null,
            Value::from(""),
            Value::Bool(true),
        ]);
        assert_eq!(
            compact(&list).unwrap(),
            Value::Seq(vec![Value::from("a"), Value::Bool(true)])
        );
    }

    #[test]
    fn has_and_without_use_deep_equality() {
        let list = Value::Seq(vec![Value::from("a"), ints(&[1, 2])]);
        assert!(has(&ints(&[1, 2]), &list).unwrap());
        assert_eq!(
            without(&list, &[ints(&[1, 2])]).unwrap(),
            Value::Seq(vec![Value::from("a")])
        );
    }

    #[test]
    fn byte_strings_are_sequences() {
        let data = Value::bytes(b"ab".to_vec());
        assert_eq!(first(&data).unwrap(), Value::Uint(97));
        assert_eq!(reverse(&data).unwrap(), Value::Seq(vec![Value::Uint(98), Value::Uint(97)]));
    }
}

//! Total numeric coercion.
//!
//! Every function here maps any [`Value`] to a number without failing.
//! Text is parsed as base-10; a bad parse or an unsupported kind yields zero.

use crate::value::Value;

pub fn to_float64(v: &Value) -> f64 {
    match v {
        Value::Str(s) => s.parse::<f64>().unwrap_or(0.0),
        Value::Int(i) => *i as f64,
        Value::Uint(u) => *u as f64,
        Value::Float(f) => *f,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

pub fn to_int64(v: &Value) -> i64 {
    match v {
        Value::Str(s) => s.parse::<i64>().unwrap_or(0),
        Value::Int(i) => *i,
        // Values past the signed range clamp rather than wrap.
        Value::Uint(u) => i64::try_from(*u).unwrap_or(i64::MAX),
        // `as` truncates toward zero and saturates; NaN becomes 0.
        Value::Float(f) => *f as i64,
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

pub fn to_int(v: &Value) -> isize {
    let wide = to_int64(v);
    isize::try_from(wide).unwrap_or(if wide < 0 { isize::MIN } else { isize::MAX })
}

/// Base-10 parse of text, zero on failure.
pub fn atoi(s: &str) -> i64 {
    s.parse::<i64>().unwrap_or(0)
}

pub fn max(first: &Value, rest: &[Value]) -> i64 {
    rest.iter()
        .map(to_int64)
        .fold(to_int64(first), |acc, b| acc.max(b))
}

pub fn min(first: &Value, rest: &[Value]) -> i64 {
    rest.iter()
        .map(to_int64)
        .fold(to_int64(first), |acc, b| acc.min(b))
}

/// `0..count`, stepping down when `count` is negative.
pub fn until(count: i64) -> Vec<i64> {
    let step = if count < 0 { -1 } else { 1 };
    until_step(0, count, step)
}

/// Integers from `start` toward `stop` (exclusive) by `step`.
///
/// A step of zero, or one pointing away from `stop`, yields nothing.
pub fn until_step(start: i64, stop: i64, step: i64) -> Vec<i64> {
    let mut out = Vec::new();

    if stop < start {
        if step >= 0 {
            return out;
        }
        let mut i = start;
        while i > stop {
            out.push(i);
            i = match i.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
        return out;
    }

    if step <= 0 {
        return out;
    }
    let mut i = start;
    while i < stop {
        out.push(i);
        i = match i.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    out
}

pub fn floor(v: &Value) -> f64 {
    to_float64(v).floor()
}

pub fn ceil(v: &Value) -> f64 {
    to_float64(v).ceil()
}

/// Round to `places` decimal digits, rounding up once the discarded fraction
/// reaches `round_on` (0.5 when absent).
pub fn round(v: &Value, places: i64, round_on: Option<f64>) -> f64 {
    let round_on = round_on.unwrap_or(0.5);
    let val = to_float64(v);
    let pow = 10f64.powf(places as f64);
    let digit = pow * val;
    let div = digit.fract();

    let rounded = if div >= round_on {
        digit.ceil()
    } else {
        digit.floor()
    };
    rounded / pow
}

pub fn add(values: &[Value]) -> i64 {
    values
        .iter()
        .map(to_int64)
        .fold(0i64, |acc, b| acc.wrapping_add(b))
}

pub fn add1(v: &Value) -> i64 {
    to_int64(v).wrapping_add(1)
}

pub fn sub(a: &Value, b: &Value) -> i64 {
    to_int64(a).wrapping_sub(to_int64(b))
}

pub fn mul(first: &Value, rest: &[Value]) -> i64 {
    rest.iter()
        .map(to_int64)
        .fold(to_int64(first), |acc, b| acc.wrapping_mul(b))
}

/// Integer division; a zero divisor yields 0.
pub fn div(a: &Value, b: &Value) -> i64 {
    to_int64(a).checked_div(to_int64(b)).unwrap_or(0)
}

/// Remainder; a zero divisor yields 0.
pub fn modulo(a: &Value, b: &Value) -> i64 {
    to_int64(a).checked_rem(to_int64(b)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_parses_as_base10_integer() {
        assert_eq!(to_int64(&Value::from("42")), 42);
        assert_eq!(to_int64(&Value::from("-17")), -17);
        assert_eq!(to_int64(&Value::from("4.2")), 0);
        assert_eq!(to_int64(&Value::from("0x10")), 0);
        assert_eq!(to_int64(&Value::from("")), 0);
    }

    #[test]
    fn platform_int_truncates_and_clamps() {
        assert_eq!(to_int(&Value::from("42")), 42);
        assert_eq!(to_int(&Value::from("nope")), 0);
        assert_eq!(to_int(&Value::Float(-3.9)), -3);
        assert_eq!(to_int(&Value::Float(7.99)), 7);
        assert_eq!(to_int(&Value::Bool(true)), 1);
        assert_eq!(to_int(&Value::Uint(u64::MAX)), isize::MAX);
        assert_eq!(to_int(&Value::Null), 0);
    }

    #[test]
    fn bools_become_one_or_zero() {
        assert_eq!(to_int64(&Value::Bool(true)), 1);
        assert_eq!(to_int64(&Value::Bool(false)), 0);
        assert_eq!(to_float64(&Value::Bool(true)), 1.0);
    }

    #[test]
    fn oversized_unsigned_clamps_to_max() {
        assert_eq!(to_int64(&Value::Uint(u64::MAX)), i64::MAX);
        assert_eq!(to_int64(&Value::Uint(7)), 7);
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(to_int64(&Value::Float(2.9)), 2);
        assert_eq!(to_int64(&Value::Float(-2.9)), -2);
        assert_eq!(to_int64(&Value::Float(f64::NAN)), 0);
    }

    #[test]
    fn unsupported_kinds_are_zero() {
        assert_eq!(to_int64(&Value::Null), 0);
        assert_eq!(to_float64(&Value::from(vec![1, 2])), 0.0);
        assert_eq!(to_float64(&Value::from("nope")), 0.0);
    }

    #[test]
    fn text_parses_as_float() {
        assert_eq!(to_float64(&Value::from("2.5")), 2.5);
        assert_eq!(to_float64(&Value::Uint(3)), 3.0);
    }

    #[test]
    fn max_and_min_fold_over_coerced_values() {
        let rest = [Value::from(5), Value::from("3")];
        assert_eq!(max(&Value::from(1), &rest), 5);
        assert_eq!(min(&Value::from(1), &rest), 1);
        assert_eq!(max(&Value::from(7), &[]), 7);
    }

    #[test]
    fn until_counts_in_both_directions() {
        assert_eq!(until(3), vec![0, 1, 2]);
        assert_eq!(until(-3), vec![0, -1, -2]);
        assert_eq!(until_step(0, 10, 3), vec![0, 3, 6, 9]);
        assert!(until_step(0, 10, 0).is_empty());
        assert!(until_step(10, 0, 1).is_empty());
    }

    #[test]
    fn round_honours_places_and_threshold() {
        assert_eq!(round(&Value::Float(1.23456), 2, None), 1.23);
        assert_eq!(round(&Value::Float(2.5), 0, None), 3.0);
        assert_eq!(round(&Value::Float(2.5), 0, Some(0.6)), 2.0);
    }

    #[test]
    fn division_by_zero_is_zero() {
        assert_eq!(div(&Value::from(10), &Value::from(0)), 0);
        assert_eq!(modulo(&Value::from(10), &Value::from(0)), 0);
        assert_eq!(div(&Value::from(10), &Value::from(3)), 3);
    }

    #[test]
    fn arithmetic_coerces_operands() {
        assert_eq!(add(&[Value::from(1), Value::from("2"), Value::Bool(true)]), 4);
        assert_eq!(mul(&Value::from(2), &[Value::from(3), Value::from(4)]), 24);
        assert_eq!(add1(&Value::from("9")), 10);
    }
}

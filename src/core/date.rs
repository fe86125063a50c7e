//! Date formatting and arithmetic.
//!
//! A `when` argument is either a timestamp or an integer count of Unix
//! seconds. Anything else stands for the current time. Zone names are IANA
//! identifiers; `"Local"` is the host zone and an unknown name falls back to
//! UTC. Formats use strftime syntax.

use std::fmt::{self, Write};

use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::value::Value;

pub const LOCAL_ZONE: &str = "Local";
pub const HTML_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

fn epoch() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}

/// The instant a `when` argument stands for.
pub fn resolve(when: &Value) -> DateTime<FixedOffset> {
    let seconds = match when {
        Value::Time(t) => return *t,
        Value::Int(secs) => Some(*secs),
        Value::Uint(secs) => i64::try_from(*secs).ok(),
        _ => None,
    };
    seconds
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|t| t.fixed_offset())
        .unwrap_or_else(now)
}

fn render<Z>(t: &DateTime<Z>, format: &str) -> String
where
    Z: TimeZone,
    Z::Offset: fmt::Display,
{
    let mut out = String::new();
    // An unknown specifier makes the formatter fail part-way.
    if write!(out, "{}", t.format(format)).is_err() {
        out.clear();
    }
    out
}

/// Render `t` in the named zone.
pub fn format_in_zone(t: &DateTime<FixedOffset>, format: &str, zone: &str) -> String {
    if zone == LOCAL_ZONE {
        return render(&t.with_timezone(&Local), format);
    }
    let tz = zone.parse::<Tz>().unwrap_or(Tz::UTC);
    render(&t.with_timezone(&tz), format)
}

pub fn date(format: &str, when: &Value) -> String {
    date_in_zone(format, when, LOCAL_ZONE)
}

pub fn date_in_zone(format: &str, when: &Value, zone: &str) -> String {
    format_in_zone(&resolve(when), format, zone)
}

pub fn html_date(when: &Value) -> String {
    date_in_zone(HTML_DATE_FORMAT, when, LOCAL_ZONE)
}

pub fn html_date_in_zone(when: &Value, zone: &str) -> String {
    date_in_zone(HTML_DATE_FORMAT, when, zone)
}

/// Shift `when` by a duration such as `1h30m` or `-15m`. An unparsable
/// duration leaves the time unchanged.
pub fn date_modify(duration: &str, when: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    parse_duration(duration)
        .and_then(|d| when.checked_add_signed(d))
        .unwrap_or(when)
}

/// Time elapsed since `when`, to the second, e.g. `1h2m3s`.
pub fn date_ago(when: &Value) -> String {
    let elapsed = Utc::now().signed_duration_since(resolve(when));
    let rounded = (elapsed.num_milliseconds() as f64 / 1000.0).round() as i64;
    format_seconds(rounded)
}

/// Parse `text` with `format` in the host zone. Failure yields the Unix epoch.
pub fn to_date(format: &str, text: &str) -> DateTime<FixedOffset> {
    if let Ok(t) = DateTime::parse_from_str(text, format) {
        return t;
    }
    let naive = NaiveDateTime::parse_from_str(text, format).ok().or_else(|| {
        NaiveDate::parse_from_str(text, format)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    });
    naive
        .and_then(|n| Local.from_local_datetime(&n).earliest())
        .map(|t| t.fixed_offset())
        .unwrap_or_else(epoch)
}

fn unit_nanos(unit: &str) -> Option<f64> {
    let nanos = match unit {
        "ns" => 1.0,
        "us" | "µs" | "μs" => 1e3,
        "ms" => 1e6,
        "s" => 1e9,
        "m" => 60e9,
        "h" => 3600e9,
        _ => return None,
    };
    Some(nanos)
}

/// Parse a signed sequence of decimal numbers with unit suffixes
/// (`ns`, `us`, `ms`, `s`, `m`, `h`), such as `2h45m` or `-1.5s`.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if rest == "0" {
        return Some(Duration::zero());
    }
    if rest.is_empty() {
        return None;
    }

    let mut total = 0.0f64;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let number = &rest[..number_len];
        if number.is_empty() || number == "." {
            return None;
        }
        let amount: f64 = number.parse().ok()?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        total += amount * unit_nanos(&rest[..unit_len])?;
        rest = &rest[unit_len..];
    }

    if total > i64::MAX as f64 {
        return None;
    }
    let nanos = total.round() as i64;
    Some(Duration::nanoseconds(if negative { -nanos } else { nanos }))
}

/// Render whole seconds as `45s`, `2m5s`, or `1h0m0s`.
pub fn format_seconds(seconds: i64) -> String {
    if seconds == 0 {
        return "0s".to_string();
    }
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    match (hours, minutes) {
        (0, 0) => format!("{}{}s", sign, secs),
        (0, _) => format!("{}{}m{}s", sign, minutes, secs),
        _ => format!("{}{}h{}m{}s", sign, hours, minutes, secs),
    }
}

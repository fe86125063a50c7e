//! String helpers.
//!
//! Widths, counts, and offsets are measured in characters, and out-of-range
//! positions clamp instead of panicking.

use heck::{ToKebabCase, ToSnakeCase, ToUpperCamelCase};
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::value::{Map, Value};

const ABBREV_MARKER: &str = "...";

/// Upper bound on text built by repetition.
pub const MAX_BUILT_LEN: usize = 1 << 30;

/// Text form of any value. Byte strings decode as UTF-8 (lossily).
pub fn str_val(v: &Value) -> String {
    match v {
        Value::Str(s) => s.clone(),
        Value::Bytes(data) => String::from_utf8_lossy(data).into_owned(),
        other => other.to_string(),
    }
}

/// Sequence elements as strings; any other value becomes a one-element list.
pub fn str_slice(v: &Value) -> Vec<String> {
    match v {
        Value::Seq(items) => items.iter().map(str_val).collect(),
        Value::Bytes(data) => data.iter().map(|b| b.to_string()).collect(),
        other => vec![str_val(other)],
    }
}

fn char_prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fn char_range(chars: &[char], start: usize, end: usize) -> String {
    let end = end.min(chars.len());
    let start = start.min(end);
    chars[start..end].iter().collect()
}

/// Shorten `s` to `width` characters, ending in an ellipsis.
pub fn abbrev(width: i64, s: &str) -> String {
    if width < 4 {
        return s.to_string();
    }
    abbreviate_full(s, 0, width as usize)
}

/// Abbreviate around an offset, with ellipses on either side as needed.
pub fn abbrev_both(left: i64, right: i64, s: &str) -> String {
    if right < 4 || (left > 0 && right < 7) {
        return s.to_string();
    }
    abbreviate_full(s, left.max(0) as usize, right as usize)
}

fn abbreviate_full(s: &str, offset: usize, max_width: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();
    if len <= max_width {
        return s.to_string();
    }

    let keep = max_width - ABBREV_MARKER.len();
    let mut offset = offset.min(len);
    if len - offset < keep {
        offset = len - keep;
    }

    if offset <= 4 {
        return format!("{}{}", char_range(&chars, 0, keep), ABBREV_MARKER);
    }
    if offset + keep < len {
        let tail: String = chars[offset..].iter().collect();
        return format!("{}{}", ABBREV_MARKER, abbreviate_full(&tail, 0, keep));
    }
    format!("{}{}", ABBREV_MARKER, char_range(&chars, len - keep, len))
}

/// First letter of each whitespace-separated word.
pub fn initials(s: &str) -> String {
    s.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Lowercase the first character.
pub fn untitle(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Uppercase the first letter of every word.
pub fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for ch in s.chars() {
        if at_boundary {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_boundary = !(ch.is_alphanumeric() || ch == '_' || ch == '\'');
    }
    out
}

pub fn trunc(count: i64, s: &str) -> String {
    if count < 0 {
        return String::new();
    }
    char_prefix(s, count as usize)
}

/// A negative `start` takes the prefix up to `end`; a negative `end` takes
/// everything from `start`.
pub fn substring(start: i64, end: i64, s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if start < 0 {
        return char_range(&chars, 0, end.max(0) as usize);
    }
    if end < 0 {
        return char_range(&chars, start as usize, chars.len());
    }
    char_range(&chars, start as usize, end as usize)
}

fn count_of(n: i64) -> usize {
    if n <= 0 {
        return 0;
    }
    usize::try_from(n).unwrap_or(usize::MAX)
}

/// Reject `count` copies of `unit` bytes when the total passes
/// [`MAX_BUILT_LEN`].
fn check_built_len(field: &str, unit: usize, count: usize) -> Result<()> {
    match unit.checked_mul(count) {
        Some(len) if len <= MAX_BUILT_LEN => Ok(()),
        _ => Err(Error::validation_invalid_argument(
            field,
            format!(
                "{} copies of {} bytes exceed the {} byte limit",
                count, unit, MAX_BUILT_LEN
            ),
            None,
            None,
        )),
    }
}

pub fn indent(spaces: i64, v: &str) -> Result<String> {
    let spaces = count_of(spaces);
    let lines = v.matches('\n').count() + 1;
    check_built_len("spaces", spaces, lines)?;
    let pad = " ".repeat(spaces);
    Ok(format!("{}{}", pad, v.replace('\n', &format!("\n{}", pad))))
}

pub fn nindent(spaces: i64, v: &str) -> Result<String> {
    Ok(format!("\n{}", indent(spaces, v)?))
}

pub fn replace(old: &str, new: &str, src: &str) -> String {
    src.replace(old, new)
}

pub fn plural<'a>(one: &'a str, many: &'a str, count: i64) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Double-quoted literal with backslash escapes.
pub fn quote_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn quote(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| quote_text(&str_val(v)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn squote(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| format!("'{}'", v))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn cat(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn join(sep: &str, v: &Value) -> String {
    str_slice(v).join(sep)
}

/// Split into at most `n` parts (`n < 0` means all, `n == 0` means none).
/// An empty separator splits between characters.
fn split_parts(orig: &str, sep: &str, n: i64) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    if sep.is_empty() {
        let chars: Vec<char> = orig.chars().collect();
        let limit = if n < 0 { chars.len() } else { (n as usize).min(chars.len()) };
        let mut parts: Vec<String> = Vec::with_capacity(limit);
        for (i, ch) in chars.iter().enumerate() {
            if limit > 0 && i == limit - 1 {
                parts.push(chars[i..].iter().collect());
                break;
            }
            parts.push(ch.to_string());
        }
        return parts;
    }

    if n < 0 {
        orig.split(sep).map(str::to_string).collect()
    } else {
        orig.splitn(n as usize, sep).map(str::to_string).collect()
    }
}

fn indexed_parts(parts: Vec<String>) -> Map {
    parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| (format!("_{}", i), Value::Str(part)))
        .collect()
}

/// Split into a map keyed `_0`, `_1`, ...
pub fn split(sep: &str, orig: &str) -> Map {
    indexed_parts(split_parts(orig, sep, -1))
}

pub fn splitn(sep: &str, n: i64, orig: &str) -> Map {
    indexed_parts(split_parts(orig, sep, n))
}

pub fn split_list(sep: &str, orig: &str) -> Vec<String> {
    split_parts(orig, sep, -1)
}

pub fn repeat(count: i64, s: &str) -> Result<String> {
    let count = count_of(count);
    check_built_len("count", s.len(), count)?;
    Ok(s.repeat(count))
}

/// Strip any leading and trailing characters found in `cutset`.
pub fn trim_all(cutset: &str, s: &str) -> String {
    s.trim_matches(|c: char| cutset.contains(c)).to_string()
}

pub fn trim_prefix(prefix: &str, s: &str) -> String {
    s.strip_prefix(prefix).unwrap_or(s).to_string()
}

pub fn trim_suffix(suffix: &str, s: &str) -> String {
    s.strip_suffix(suffix).unwrap_or(s).to_string()
}

pub fn nospace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn swapcase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else if ch.is_lowercase() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn snakecase(s: &str) -> String {
    s.to_snake_case()
}

pub fn camelcase(s: &str) -> String {
    s.to_upper_camel_case()
}

pub fn kebabcase(s: &str) -> String {
    s.to_kebab_case()
}

/// Word-wrap at spaces, joining lines with `newline`. Words longer than
/// `width` are split only when `wrap_long_words` is set.
pub fn wrap_custom(s: &str, width: i64, newline: &str, wrap_long_words: bool) -> String {
    let width = width.max(1) as usize;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in s.split(' ').filter(|w| !w.is_empty()) {
        let mut chars: Vec<char> = word.chars().collect();

        while wrap_long_words && chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.iter().collect());
            chars = rest;
        }

        if chars.is_empty() {
            continue;
        }
        let word_len = chars.len();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += word_len;
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines.join(newline)
}

pub fn wrap(width: i64, s: &str) -> String {
    wrap_custom(s, width, "\n", false)
}

pub fn wrap_with(width: i64, sep: &str, s: &str) -> String {
    wrap_custom(s, width, sep, true)
}

/// Sorted string forms of a sequence's elements.
pub fn sort_alpha(v: &Value) -> Vec<String> {
    let mut out = str_slice(v);
    if matches!(v, Value::Seq(_) | Value::Bytes(_)) {
        out.sort();
    }
    out
}

pub fn rand_alpha_num(count: i64) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(count.max(0) as usize)
        .map(char::from)
        .collect()
}

pub fn rand_alpha(count: i64) -> String {
    const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    rand_from(LETTERS, count)
}

pub fn rand_numeric(count: i64) -> String {
    rand_from(b"0123456789", count)
}

/// Printable ASCII, space through tilde.
pub fn rand_ascii(count: i64) -> String {
    let mut rng = rand::thread_rng();
    (0..count.max(0))
        .map(|_| char::from(rng.gen_range(b' '..=b'~')))
        .collect()
}

fn rand_from(charset: &[u8], count: i64) -> String {
    let mut rng = rand::thread_rng();
    (0..count.max(0))
        .map(|_| char::from(charset[rng.gen_range(0..charset.len())]))
        .collect()
}

pub fn shuffle(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars.shuffle(&mut rand::thread_rng());
    chars.into_iter().collect()
}

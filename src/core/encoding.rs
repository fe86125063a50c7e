//! JSON, base64, base32 and single-record CSV encodings.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::value::Value;

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Compact JSON. Values always serialize, so failure renders as `""`.
pub fn to_json(v: &Value) -> String {
    serde_json::to_string(v).unwrap_or_default()
}

pub fn to_pretty_json(v: &Value) -> String {
    serde_json::to_string_pretty(v).unwrap_or_default()
}

pub fn base64_encode(s: &str) -> String {
    BASE64.encode(s.as_bytes())
}

/// Decoded text, or the decoder's error message when `s` is not valid base64.
pub fn base64_decode(s: &str) -> String {
    match BASE64.decode(s) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => e.to_string(),
    }
}

pub fn base32_encode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(bytes.len().div_ceil(5) * 8);

    for chunk in bytes.chunks(5) {
        let mut block = [0u8; 5];
        block[..chunk.len()].copy_from_slice(chunk);
        let bits = block.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b));

        let symbols = (chunk.len() * 8).div_ceil(5);
        for i in 0..8 {
            if i < symbols {
                let index = ((bits >> (35 - i * 5)) & 0x1f) as usize;
                out.push(char::from(BASE32_ALPHABET[index]));
            } else {
                out.push('=');
            }
        }
    }
    out
}

/// Decoded text, or an error message when `s` is not valid padded base32.
pub fn base32_decode(s: &str) -> String {
    match decode_base32(s) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(offset) => format!("illegal base32 data at input byte {}", offset),
    }
}

fn decode_base32(s: &str) -> std::result::Result<Vec<u8>, usize> {
    let input = s.as_bytes();
    if input.len() % 8 != 0 {
        return Err(input.len());
    }

    let mut out = Vec::with_capacity(input.len() / 8 * 5);
    for (block_index, block) in input.chunks(8).enumerate() {
        let padding = block.iter().rev().take_while(|b| **b == b'=').count();
        let data_len = 8 - padding;
        let produced = match data_len {
            8 => 5,
            7 => 4,
            5 => 3,
            4 => 2,
            2 => 1,
            _ => return Err(block_index * 8 + data_len),
        };
        if padding > 0 && block_index + 1 != input.len() / 8 {
            return Err(block_index * 8 + data_len);
        }

        let mut bits = 0u64;
        for (i, symbol) in block.iter().enumerate() {
            let value = if i < data_len {
                BASE32_ALPHABET
                    .iter()
                    .position(|a| a == symbol)
                    .ok_or(block_index * 8 + i)? as u64
            } else {
                0
            };
            bits = (bits << 5) | value;
        }
        for i in 0..produced {
            out.push((bits >> (32 - i * 8)) as u8);
        }
    }
    Ok(out)
}

/// Fields of the first comma-separated record in `text`.
///
/// Quoted fields may contain commas, newlines, and doubled quotes. An empty
/// input has no fields.
pub fn read_as_csv(text: &str) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    if text.is_empty() {
        return Ok(fields);
    }

    let mut chars = text.chars().peekable();
    let mut field = String::new();
    let mut column = 0usize;

    loop {
        if chars.peek() == Some(&'"') {
            chars.next();
            column += 1;
            loop {
                match chars.next() {
                    None => {
                        return Err(csv_error("extraneous or missing \" in quoted-field", column))
                    }
                    Some('"') if chars.peek() == Some(&'"') => {
                        chars.next();
                        field.push('"');
                    }
                    Some('"') => break,
                    Some(c) => field.push(c),
                }
                column += 1;
            }
            match chars.peek() {
                None | Some(',') | Some('\n') | Some('\r') => {}
                Some(_) => {
                    return Err(csv_error("extraneous or missing \" in quoted-field", column))
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if matches!(c, ',' | '\n' | '\r') {
                    break;
                }
                if c == '"' {
                    return Err(csv_error("bare \" in non-quoted-field", column));
                }
                field.push(c);
                chars.next();
                column += 1;
            }
        }

        fields.push(std::mem::take(&mut field));
        match chars.next() {
            Some(',') => column += 1,
            _ => break,
        }
    }
    Ok(fields)
}

fn csv_error(problem: &str, column: usize) -> Error {
    Error::validation_invalid_argument(
        "csv",
        format!("parse error on column {}: {}", column, problem),
        None,
        None,
    )
}

/// Read a CSV record of `key=value` (or `key:value`) entries into a map.
/// Entries with neither separator are skipped.
pub fn read_as_map(text: &str) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for entry in read_as_csv(text)? {
        let split = entry.split_once('=').or_else(|| entry.split_once(':'));
        if let Some((key, value)) = split {
            map.insert(key.to_string(), value.to_string());
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;

    #[test]
    fn json_encodings() {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::from(vec![1, 2]));
        let v = Value::Map(map);
        assert_eq!(to_json(&v), r#"{"a":[1,2]}"#);
        assert_eq!(to_pretty_json(&v), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn base64_round_trips_and_reports_errors() {
        assert_eq!(base64_encode("hello"), "aGVsbG8=");
        assert_eq!(base64_decode("aGVsbG8="), "hello");
        assert_ne!(base64_decode("not base64!"), "");
    }

    #[test]
    fn base32_matches_rfc_vectors() {
        assert_eq!(base32_encode(""), "");
        assert_eq!(base32_encode("f"), "MY======");
        assert_eq!(base32_encode("fo"), "MZXQ====");
        assert_eq!(base32_encode("foo"), "MZXW6===");
        assert_eq!(base32_encode("foob"), "MZXW6YQ=");
        assert_eq!(base32_encode("fooba"), "MZXW6YTB");
        assert_eq!(base32_encode("foobar"), "MZXW6YTBOI======");
        assert_eq!(base32_decode("MZXW6YTBOI======"), "foobar");
        assert_eq!(base32_decode("MZXW6==="), "foo");
    }

    #[test]
    fn base32_decode_reports_bad_input() {
        assert!(base32_decode("MZXW6").starts_with("illegal base32 data"));
        assert!(base32_decode("MZ1W6===").starts_with("illegal base32 data"));
    }

    #[test]
    fn csv_reads_one_record() {
        assert_eq!(read_as_csv("a,b,c").unwrap(), vec!["a", "b", "c"]);
        assert_eq!(
            read_as_csv(r#""x,y","say ""hi""",z"#).unwrap(),
            vec!["x,y", r#"say "hi""#, "z"]
        );
        assert_eq!(read_as_csv("a,b\nc,d").unwrap(), vec!["a", "b"]);
        assert_eq!(read_as_csv("a,").unwrap(), vec!["a", ""]);
        assert!(read_as_csv("").unwrap().is_empty());
    }

    #[test]
    fn csv_rejects_stray_quotes() {
        assert!(read_as_csv(r#"a"b"#).is_err());
        assert!(read_as_csv(r#""open"#).is_err());
    }

    #[test]
    fn read_as_map_accepts_both_separators() {
        let map = read_as_map("a=1,b:2,c").unwrap();
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
        assert_eq!(map.get("b").map(String::as_str), Some("2"));
        assert!(!map.contains_key("c"));
    }
}

//! Map helpers. Maps are ordered by key, so `keys` and `values` are stable.

use crate::empty::is_empty;
use crate::strings::str_val;
use crate::value::{Map, Value};

/// Build a map from alternating keys and values. A trailing key maps to `""`.
pub fn dict(pairs: &[Value]) -> Map {
    pairs
        .chunks(2)
        .map(|pair| {
            let value = pair.get(1).cloned().unwrap_or_else(|| Value::from(""));
            (str_val(&pair[0]), value)
        })
        .collect()
}

pub fn set(mut d: Map, key: impl Into<String>, value: Value) -> Map {
    d.insert(key.into(), value);
    d
}

pub fn unset(mut d: Map, key: &str) -> Map {
    d.remove(key);
    d
}

pub fn has_key(d: &Map, key: &str) -> bool {
    d.contains_key(key)
}

/// Values stored under `key` in each map that has it.
pub fn pluck(key: &str, dicts: &[Map]) -> Vec<Value> {
    dicts.iter().filter_map(|d| d.get(key).cloned()).collect()
}

pub fn keys(dicts: &[Map]) -> Vec<String> {
    dicts.iter().flat_map(|d| d.keys().cloned()).collect()
}

pub fn pick<K: AsRef<str>>(d: &Map, keys: &[K]) -> Map {
    keys.iter()
        .filter_map(|k| {
            let k = k.as_ref();
            d.get(k).map(|v| (k.to_string(), v.clone()))
        })
        .collect()
}

pub fn omit<K: AsRef<str>>(d: &Map, keys: &[K]) -> Map {
    d.iter()
        .filter(|(k, _)| !keys.iter().any(|omitted| omitted.as_ref() == k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Fill keys that `dst` lacks (or holds empty) from each source in turn.
/// Nested maps merge recursively; populated values in `dst` are kept.
pub fn merge(mut dst: Map, srcs: &[Map]) -> Map {
    for src in srcs {
        merge_into(&mut dst, src);
    }
    dst
}

fn merge_into(dst: &mut Map, src: &Map) {
    for (key, incoming) in src {
        if let (Some(Value::Map(existing)), Value::Map(nested)) = (dst.get_mut(key), incoming) {
            merge_into(existing, nested);
            continue;
        }
        if dst.get(key).map_or(true, is_empty) {
            dst.insert(key.clone(), incoming.clone());
        }
    }
}

pub fn values(d: &Map) -> Vec<Value> {
    d.values().cloned().collect()
}

pub fn list(values: &[Value]) -> Value {
    Value::Seq(values.to_vec())
}

//! Runtime type inspection.

use crate::value::Value;

/// Concrete type name: `int64`, `[]interface {}`, or a record's own name.
pub fn type_of(v: &Value) -> String {
    v.type_name().into_owned()
}

pub fn type_is(target: &str, v: &Value) -> bool {
    target == v.type_name()
}

/// Like [`type_is`], but a record named `*target` also matches.
pub fn type_is_like(target: &str, v: &Value) -> bool {
    let name = v.type_name();
    name == target || name.strip_prefix('*') == Some(target)
}

pub fn kind_of(v: &Value) -> &'static str {
    v.kind().as_str()
}

pub fn kind_is(target: &str, v: &Value) -> bool {
    target == kind_of(v)
}

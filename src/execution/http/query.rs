//! Query-string serialization for request parameters.
//!
//! Follows the `qs` stringify conventions that API servers written against
//! browser clients expect:
//! - scalars become `key=value`
//! - `null` becomes `key=`
//! - nested objects become `key[sub]=value`
//! - arrays become `key[0]=value`, `key[1]=value`, ...
//!
//! The output is a list of unencoded pairs in parameter order; the transport
//! performs the percent-encoding.

use serde_json::Value;

use crate::types::Params;

/// Flatten parameters into ordered query pairs.
pub fn stringify(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        push_value(key.clone(), value, &mut pairs);
    }
    pairs
}

fn push_value(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => out.push((key, String::new())),
        Value::Bool(b) => out.push((key, b.to_string())),
        Value::Number(n) => out.push((key, n.to_string())),
        Value::String(s) => out.push((key, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_value(format!("{key}[{index}]"), item, out);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                push_value(format!("{key}[{sub}]"), item, out);
            }
        }
    }
}

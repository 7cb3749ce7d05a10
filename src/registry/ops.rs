//! Compute functions behind the catalog entries.
//!
//! Every function takes the current chain value and either produces the
//! next value or a `ComputeError`. Kind checks happen here, at application
//! time: nesting rules keep most mismatches out of reach, but a value can
//! legitimately change kind mid-chain (`.split(' ')`, `Object.keys()`), so
//! the runtime check is the authority.

use crate::error::ComputeError;
use crate::value::TypedValue;
use serde_json::Value;
use std::cmp::Ordering;

fn expect_text(value: TypedValue) -> Result<String, ComputeError> {
    match value {
        TypedValue::Text(s) => Ok(s),
        other => Err(ComputeError::kind_mismatch("text", other.kind())),
    }
}

fn expect_list(value: TypedValue) -> Result<Vec<Value>, ComputeError> {
    match value {
        TypedValue::List(items) => Ok(items),
        other => Err(ComputeError::kind_mismatch("a list", other.kind())),
    }
}

pub fn to_upper_case(value: TypedValue) -> Result<TypedValue, ComputeError> {
    Ok(TypedValue::Text(expect_text(value)?.to_uppercase()))
}

pub fn to_lower_case(value: TypedValue) -> Result<TypedValue, ComputeError> {
    Ok(TypedValue::Text(expect_text(value)?.to_lowercase()))
}

pub fn trim(value: TypedValue) -> Result<TypedValue, ComputeError> {
    Ok(TypedValue::Text(expect_text(value)?.trim().to_string()))
}

/// Split on single spaces, keeping empty pieces, as `.split(' ')` does.
pub fn split(value: TypedValue) -> Result<TypedValue, ComputeError> {
    let text = expect_text(value)?;
    let pieces = text.split(' ').map(|p| Value::String(p.to_string())).collect();
    Ok(TypedValue::List(pieces))
}

/// Numeric order for all-number lists, lexicographic for all-string lists.
/// Mixed kinds are a runtime failure rather than a silent stringify-sort.
pub fn sort(value: TypedValue) -> Result<TypedValue, ComputeError> {
    let mut items = expect_list(value)?;
    if items.iter().all(Value::is_number) {
        items.sort_by(|a, b| a.as_f64().partial_cmp(&b.as_f64()).unwrap_or(Ordering::Equal));
    } else if items.iter().all(Value::is_string) {
        items.sort_by(|a, b| a.as_str().cmp(&b.as_str()));
    } else {
        return Err(ComputeError::new("cannot sort a list that mixes value kinds"));
    }
    Ok(TypedValue::List(items))
}

pub fn reverse(value: TypedValue) -> Result<TypedValue, ComputeError> {
    let mut items = expect_list(value)?;
    items.reverse();
    Ok(TypedValue::List(items))
}

/// Drop duplicates, first occurrence wins. Lists here are short; a linear
/// scan keeps `Value` free of any hashing requirement.
pub fn unique(value: TypedValue) -> Result<TypedValue, ComputeError> {
    let items = expect_list(value)?;
    let mut seen: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    Ok(TypedValue::List(seen))
}

/// Join scalar elements with `", "`. Null joins as an empty piece, numbers
/// and booleans as their JSON text; nested lists/mappings refuse to join.
pub fn join(value: TypedValue) -> Result<TypedValue, ComputeError> {
    let items = expect_list(value)?;
    let mut pieces = Vec::with_capacity(items.len());
    for item in &items {
        match item {
            Value::String(s) => pieces.push(s.clone()),
            Value::Null => pieces.push(String::new()),
            Value::Number(n) => pieces.push(n.to_string()),
            Value::Bool(b) => pieces.push(b.to_string()),
            Value::Array(_) | Value::Object(_) => {
                return Err(ComputeError::new("cannot join nested list or mapping elements"));
            }
        }
    }
    Ok(TypedValue::Text(pieces.join(", ")))
}

pub fn keys(value: TypedValue) -> Result<TypedValue, ComputeError> {
    match value {
        TypedValue::Mapping(map) => Ok(TypedValue::List(
            map.keys().cloned().map(Value::String).collect(),
        )),
        other => Err(ComputeError::kind_mismatch("a mapping", other.kind())),
    }
}

pub fn values(value: TypedValue) -> Result<TypedValue, ComputeError> {
    match value {
        TypedValue::Mapping(map) => Ok(TypedValue::List(map.into_iter().map(|(_, v)| v).collect())),
        other => Err(ComputeError::kind_mismatch("a mapping", other.kind())),
    }
}

/// `[key, value]` pairs in insertion order, as `Object.entries()` yields.
pub fn entries(value: TypedValue) -> Result<TypedValue, ComputeError> {
    match value {
        TypedValue::Mapping(map) => Ok(TypedValue::List(
            map.into_iter()
                .map(|(k, v)| Value::Array(vec![Value::String(k), v]))
                .collect(),
        )),
        other => Err(ComputeError::kind_mismatch("a mapping", other.kind())),
    }
}

//! Base payload protocol: the null/empty funnel and per-entity schema decode.
//!
//! Every entity is built the same way: [`parse_data`] decides whether a raw
//! value carries anything at all, then the entity's [`FromPayload::from_map`]
//! pops its fields out of the owned map. Keys are popped (not read) so each
//! one is consumed exactly once, and required-field failures name the entity
//! and field instead of substituting defaults.

use serde_json::{Map, Value};

use crate::{errors::Error, port::ApiHandle, Result};

/// The single null/empty funnel for entity construction.
///
/// Absent, `null` and `{}` inputs all mean "no entity" (`Ok(None)`). A
/// non-empty object yields its key/value map for the per-entity decode to
/// consume. Anything else is a malformed payload for `entity`.
pub fn parse_data(entity: &'static str, value: Option<Value>) -> Result<Option<Map<String, Value>>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(if map.is_empty() { None } else { Some(map) }),
        Some(other) => Err(Error::Payload {
            entity,
            detail: format!("expected object, got {}", json_kind(&other)),
        }),
    }
}

/// Shared decode seam implemented by every entity.
///
/// `from_map` is the per-entity schema: it renames server keys that collide
/// with reserved words (`from`, `type`) and recursively decodes nested
/// entities. The `api` handle is threaded through every constructor so
/// entities with outward behavior can retain it.
pub trait FromPayload: Sized {
    /// Entity name used in decode error messages.
    const ENTITY: &'static str;

    /// Decode from an owned, non-empty payload map.
    fn from_map(map: &mut Map<String, Value>, api: &ApiHandle) -> Result<Self>;

    /// Decode a raw value, funnelling null handling through [`parse_data`].
    fn decode(value: Option<Value>, api: &ApiHandle) -> Result<Option<Self>> {
        match parse_data(Self::ENTITY, value)? {
            Some(mut map) => Self::from_map(&mut map, api).map(Some),
            None => Ok(None),
        }
    }
}

/// Pop a raw nested value; absent keys become `None`.
pub fn take(map: &mut Map<String, Value>, key: &str) -> Option<Value> {
    map.remove(key)
}

/// Pop a required string field.
pub fn req_str(entity: &'static str, map: &mut Map<String, Value>, key: &'static str) -> Result<String> {
    match map.remove(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(mismatch(entity, key, "string", &other)),
        None => Err(missing(entity, key)),
    }
}

/// Pop a required integer field.
pub fn req_i64(entity: &'static str, map: &mut Map<String, Value>, key: &'static str) -> Result<i64> {
    match map.remove(key) {
        Some(value) => value
            .as_i64()
            .ok_or_else(|| mismatch(entity, key, "integer", &value)),
        None => Err(missing(entity, key)),
    }
}

/// Pop an optional string field; explicit `null` counts as absent.
pub fn opt_str(entity: &'static str, map: &mut Map<String, Value>, key: &'static str) -> Result<Option<String>> {
    match map.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(mismatch(entity, key, "string", &other)),
    }
}

/// Pop an optional integer field; explicit `null` counts as absent.
pub fn opt_i64(entity: &'static str, map: &mut Map<String, Value>, key: &'static str) -> Result<Option<i64>> {
    match map.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| mismatch(entity, key, "integer", &value)),
    }
}

/// Pop and decode a required nested entity.
pub fn req_entity<T: FromPayload>(
    entity: &'static str,
    map: &mut Map<String, Value>,
    key: &'static str,
    api: &ApiHandle,
) -> Result<T> {
    T::decode(map.remove(key), api)?.ok_or_else(|| missing(entity, key))
}

pub(crate) fn missing(entity: &'static str, field: &'static str) -> Error {
    Error::Payload {
        entity,
        detail: format!("missing required field `{field}`"),
    }
}

pub(crate) fn mismatch(entity: &'static str, field: &'static str, expected: &str, got: &Value) -> Error {
    Error::Payload {
        entity,
        detail: format!("field `{field}`: expected {expected}, got {}", json_kind(got)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

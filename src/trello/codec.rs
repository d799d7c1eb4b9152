//! Entity codec: wire JSON to canonical entities and back.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::trello::error::{TrelloError, TrelloResult};

/// Where an encoded entity is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// JSON request body: canonical names, native JSON scalars.
    Body,
    /// Query string: Trello wire names, every value rendered as a string.
    Query,
}

/// A Trello entity with a declarative schema.
pub trait Entity: Serialize + DeserializeOwned {
    /// Human-readable entity kind used in error messages.
    const KIND: &'static str;

    /// Canonical field name to Trello wire name, for fields that differ.
    const WIRE_NAMES: &'static [(&'static str, &'static str)] = &[];

    fn id(&self) -> &str;

    /// Post-decode fixups and checks on nested data.
    fn normalize(&mut self) -> TrelloResult<()> {
        Ok(())
    }

    fn wire_name(field: &str) -> &str {
        Self::WIRE_NAMES
            .iter()
            .find(|(canonical, _)| *canonical == field)
            .map(|(_, wire)| *wire)
            .unwrap_or(field)
    }
}

pub(crate) fn ensure_id(kind: &str, id: &str) -> TrelloResult<()> {
    if id.trim().is_empty() {
        return Err(TrelloError::validation(format!("{} payload has an empty id", kind)));
    }
    Ok(())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode one entity from a JSON object.
pub fn decode<T: Entity>(value: Value) -> TrelloResult<T> {
    if !value.is_object() {
        return Err(TrelloError::validation(format!(
            "{} payload must be a JSON object, got {}",
            T::KIND,
            json_type(&value)
        )));
    }

    let mut entity: T = serde_json::from_value(value)
        .map_err(|e| TrelloError::validation(format!("invalid {} payload: {}", T::KIND, e)))?;

    ensure_id(T::KIND, entity.id())?;
    entity.normalize()?;
    Ok(entity)
}

/// Decode a JSON array of entities, preserving order.
pub fn decode_many<T: Entity>(value: Value) -> TrelloResult<Vec<T>> {
    match value {
        Value::Array(items) => items.into_iter().map(decode).collect(),
        other => Err(TrelloError::validation(format!(
            "expected a JSON array of {} payloads, got {}",
            T::KIND,
            json_type(&other)
        ))),
    }
}

/// Encode an entity as a flat map for the given target.
pub fn encode<T: Entity>(entity: &T, target: Target) -> TrelloResult<Map<String, Value>> {
    let fields = match serde_json::to_value(entity) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            return Err(TrelloError::validation(format!(
                "{} encoded to {}, expected an object",
                T::KIND,
                json_type(&other)
            )));
        }
        Err(e) => {
            return Err(TrelloError::validation(format!(
                "failed to encode {}: {}",
                T::KIND,
                e
            )));
        }
    };

    match target {
        Target::Body => Ok(fields),
        Target::Query => Ok(fields
            .into_iter()
            .filter_map(|(key, value)| {
                query_value(&value).map(|v| (T::wire_name(&key).to_string(), Value::String(v)))
            })
            .collect()),
    }
}

/// Render a scalar for a query string. Trello expects booleans as the
/// literals `true` / `false`. Nulls and nested values have no query form.
pub fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

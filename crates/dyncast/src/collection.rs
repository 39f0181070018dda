use crate::{
    error::{CastError, Target},
    text::to_string_e,
    traits::FromValue,
    value::{Value, indirect::resolve},
};
use std::collections::BTreeMap;

// Element-wise drivers: plain generic iteration over the element coercion,
// no runtime shape inspection. The first failing element propagates.

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        let (resolved, _) = resolve(value);
        match resolved {
            Value::List(items) => items.iter().map(T::from_value).collect(),
            _ => Err(CastError::invalid_cast(resolved, Target::List)),
        }
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        let (resolved, _) = resolve(value);
        match resolved {
            Value::Map(entries) => entries
                .iter()
                .map(|(key, value)| Ok((to_string_e(key)?, T::from_value(value)?)))
                .collect(),
            // a JSON object in textual form coerces element-wise
            Value::Text(text) => {
                let json: serde_json::Value = serde_json::from_str(text)
                    .map_err(|source| CastError::parse(text, Target::Map, source.into()))?;
                match Value::from(json) {
                    mapped @ Value::Map(_) => Self::from_value(&mapped),
                    other => Err(CastError::invalid_cast(&other, Target::Map)),
                }
            }
            _ => Err(CastError::invalid_cast(resolved, Target::Map)),
        }
    }
}

/// Strict coercion to a vector of `T`.
pub fn to_vec_e<T: FromValue>(value: &Value) -> Result<Vec<T>, CastError> {
    Vec::from_value(value)
}

/// Lenient variant of [`to_vec_e`]; failures map to an empty vector.
#[must_use]
pub fn to_vec<T: FromValue>(value: &Value) -> Vec<T> {
    to_vec_e(value).unwrap_or_default()
}

/// Strict coercion to a string-keyed map of `T`.
pub fn to_map_e<T: FromValue>(value: &Value) -> Result<BTreeMap<String, T>, CastError> {
    BTreeMap::from_value(value)
}

/// Lenient variant of [`to_map_e`]; failures map to an empty map.
#[must_use]
pub fn to_map<T: FromValue>(value: &Value) -> BTreeMap<String, T> {
    to_map_e(value).unwrap_or_default()
}

/// Strict coercion to a vector of strings. Lists coerce element-wise, bare
/// text splits on whitespace, and any other stringifiable scalar promotes
/// to a single-element vector.
pub fn to_string_vec_e(value: &Value) -> Result<Vec<String>, CastError> {
    let (resolved, _) = resolve(value);
    match resolved {
        Value::List(items) => items.iter().map(to_string_e).collect(),
        Value::Text(text) => Ok(text.split_whitespace().map(ToString::to_string).collect()),
        Value::Null => Err(CastError::invalid_cast(resolved, Target::List)),
        other => to_string_e(other).map(|s| vec![s]),
    }
}

/// Lenient variant of [`to_string_vec_e`].
#[must_use]
pub fn to_string_vec(value: &Value) -> Vec<String> {
    to_string_vec_e(value).unwrap_or_default()
}

///
/// TESTS
///

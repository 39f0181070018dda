pub mod indirect;

mod serialize;

#[cfg(test)]
mod tests;

use crate::traits::DynValue;
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};
use derive_more::From;
use std::sync::Arc;

///
/// Value
///
/// The dynamically-typed coercion input. A closed sum over the runtime
/// shapes the engines understand; anything else travels as [`Value::Dyn`]
/// and funnels into alias resolution and the capability hooks.
///
/// Null   → the absence marker (coerces to each kind's zero value).
/// Option → reference indirection; `Option(None)` is a typed nil link.
///
/// Values are never mutated by coercion.
///

#[derive(Clone, Debug, From)]
pub enum Value {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Text(String),
    /// JSON-number literal: arbitrary-precision decimal text, parsed on
    /// demand by the numeric and temporal engines.
    #[from(ignore)]
    Number(String),
    Blob(Vec<u8>),
    #[from(ignore)]
    Timestamp(DateTime<FixedOffset>),
    Duration(TimeDelta),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
    #[from(ignore)]
    Option(Option<Box<Value>>),
    #[from(ignore)]
    Null,
    #[from(ignore)]
    Dyn(Arc<dyn DynValue>),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Wrap a JSON-number literal.
    #[must_use]
    pub fn number(literal: impl Into<String>) -> Self {
        Self::Number(literal.into())
    }

    /// Wrap a dynamic payload. The payload participates in coercion only
    /// through its [`DynValue`] capabilities.
    #[must_use]
    pub fn dynamic(payload: impl DynValue + 'static) -> Self {
        Self::Dyn(Arc::new(payload))
    }

    /// Build a `Value::List` from owned items.
    #[must_use]
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    ///
    /// TYPES
    ///

    /// Diagnostic name of the value's runtime shape.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int8(_) => "i8",
            Self::Int16(_) => "i16",
            Self::Int32(_) => "i32",
            Self::Int64(_) => "i64",
            Self::Uint8(_) => "u8",
            Self::Uint16(_) => "u16",
            Self::Uint32(_) => "u32",
            Self::Uint64(_) => "u64",
            Self::Float32(_) => "f32",
            Self::Float64(_) => "f64",
            Self::Text(_) => "string",
            Self::Number(_) => "number",
            Self::Blob(_) => "blob",
            Self::Timestamp(_) => "timestamp",
            Self::Duration(_) => "duration",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Option(_) => "option",
            Self::Null => "nil",
            Self::Dyn(payload) => payload.type_name(),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the value is one of the numeric variants.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int8(_)
                | Self::Int16(_)
                | Self::Int32(_)
                | Self::Int64(_)
                | Self::Uint8(_)
                | Self::Uint16(_)
                | Self::Uint32(_)
                | Self::Uint64(_)
                | Self::Float32(_)
                | Self::Float64(_)
        )
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&[(Self, Self)]> {
        if let Self::Map(entries) = self {
            Some(entries.as_slice())
        } else {
            None
        }
    }
}

/// Resolve a named wrapper carried as a dynamic payload to its underlying
/// basic value. Returns `None` for shapes the engines already understand;
/// callers retry coercion on the resolved value.
#[must_use]
pub fn resolve_alias(value: &Value) -> Option<Value> {
    match value {
        Value::Dyn(payload) => payload.as_basic(),
        _ => None,
    }
}

// Structural equality; dynamic payloads compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int8(a), Self::Int8(b)) => a == b,
            (Self::Int16(a), Self::Int16(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::Uint8(a), Self::Uint8(b)) => a == b,
            (Self::Uint16(a), Self::Uint16(b)) => a == b,
            (Self::Uint32(a), Self::Uint32(b)) => a == b,
            (Self::Uint64(a), Self::Uint64(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a == b,
            (Self::Float64(a), Self::Float64(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Blob(a), Self::Blob(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            (Self::Duration(a), Self::Duration(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Option(a), Self::Option(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Dyn(a), Self::Dyn(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

///
/// CONVERSION
///

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[allow(clippy::cast_possible_wrap)]
impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Self::Int64(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Uint64(n as u64)
    }
}

// A typed reference: `None` is a nil link, `Some` chains to the inner value.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        Self::Option(opt.map(|v| Box::new(v.into())))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Timestamp(dt.fixed_offset())
    }
}

// Calendar enums are normalized to their ordinal integer at the boundary
// (Sunday = 0, January = 1).
impl From<chrono::Weekday> for Value {
    fn from(day: chrono::Weekday) -> Self {
        Self::Int64(i64::from(day.num_days_from_sunday()))
    }
}

impl From<chrono::Month> for Value {
    fn from(month: chrono::Month) -> Self {
        Self::Int64(i64::from(month.number_from_month()))
    }
}

// JSON adapter: numbers keep their decimal text so the engines decide how
// to interpret them per target kind.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.to_string()),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Self::Text(k), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

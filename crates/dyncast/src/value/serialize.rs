use crate::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};

// Diagnostic / round-trip serialization. Timestamps render as RFC 3339
// text, durations as nanosecond counts, dynamic payloads as their type name.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int8(n) => serializer.serialize_i8(*n),
            Self::Int16(n) => serializer.serialize_i16(*n),
            Self::Int32(n) => serializer.serialize_i32(*n),
            Self::Int64(n) => serializer.serialize_i64(*n),
            Self::Uint8(n) => serializer.serialize_u8(*n),
            Self::Uint16(n) => serializer.serialize_u16(*n),
            Self::Uint32(n) => serializer.serialize_u32(*n),
            Self::Uint64(n) => serializer.serialize_u64(*n),
            Self::Float32(n) => serializer.serialize_f32(*n),
            Self::Float64(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(s) => serialize_number(s, serializer),
            Self::Blob(bytes) => serializer.serialize_bytes(bytes),
            Self::Timestamp(t) => serializer.serialize_str(&t.to_rfc3339()),
            Self::Duration(d) => {
                serializer.serialize_i64(d.num_nanoseconds().unwrap_or(i64::MAX))
            }
            Self::List(items) => serializer.collect_seq(items.iter()),
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Option(Some(inner)) => inner.serialize(serializer),
            Self::Option(None) | Self::Null => serializer.serialize_unit(),
            Self::Dyn(payload) => serializer.serialize_str(payload.type_name()),
        }
    }
}

// Emit the narrowest numeric representation the literal fits; anything the
// formats cannot hold stays textual.
fn serialize_number<S: Serializer>(literal: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if let Ok(n) = literal.parse::<i64>() {
        return serializer.serialize_i64(n);
    }
    if let Ok(n) = literal.parse::<u64>() {
        return serializer.serialize_u64(n);
    }
    if let Ok(n) = literal.parse::<f64>() {
        return serializer.serialize_f64(n);
    }

    serializer.serialize_str(literal)
}

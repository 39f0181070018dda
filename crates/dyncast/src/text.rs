use crate::{
    error::{CastError, Target},
    temporal::format_duration,
    value::{Value, indirect::resolve, resolve_alias},
};

/// Strict string coercion. Numbers render in decimal (floats in shortest
/// round-trip notation), timestamps as RFC 3339, durations in the
/// suffixed-unit grammar.
pub fn to_string_e(value: &Value) -> Result<String, CastError> {
    let (resolved, _) = resolve(value);
    match resolved {
        Value::Text(s) | Value::Number(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int8(n) => Ok(n.to_string()),
        Value::Int16(n) => Ok(n.to_string()),
        Value::Int32(n) => Ok(n.to_string()),
        Value::Int64(n) => Ok(n.to_string()),
        Value::Uint8(n) => Ok(n.to_string()),
        Value::Uint16(n) => Ok(n.to_string()),
        Value::Uint32(n) => Ok(n.to_string()),
        Value::Uint64(n) => Ok(n.to_string()),
        Value::Float32(n) => Ok(n.to_string()),
        Value::Float64(n) => Ok(n.to_string()),
        Value::Blob(bytes) => String::from_utf8(bytes.clone())
            .map_err(|_| CastError::invalid_cast(resolved, Target::Text)),
        Value::Null => Ok(String::new()),
        Value::Timestamp(t) => Ok(t.to_rfc3339()),
        Value::Duration(d) => Ok(format_duration(*d)),
        other => match resolve_alias(other) {
            Some(basic) => to_string_e(&basic),
            None => Err(CastError::invalid_cast(other, Target::Text)),
        },
    }
}

/// Lenient variant of [`to_string_e`]; failures map to the empty string.
#[must_use]
pub fn to_string(value: &Value) -> String {
    to_string_e(value).unwrap_or_default()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeDelta, TimeZone};

    #[test]
    fn scalars_render() {
        assert_eq!(to_string_e(&Value::Int64(-8)).unwrap(), "-8");
        assert_eq!(to_string_e(&Value::Uint64(8)).unwrap(), "8");
        assert_eq!(to_string_e(&Value::Float64(8.31)).unwrap(), "8.31");
        assert_eq!(to_string_e(&Value::Float32(8.0)).unwrap(), "8");
        assert_eq!(to_string_e(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(to_string_e(&Value::Null).unwrap(), "");
        assert_eq!(to_string_e(&Value::number("8.31")).unwrap(), "8.31");
        assert_eq!(to_string_e(&Value::Text("mayonegg".into())).unwrap(), "mayonegg");
    }

    #[test]
    fn blobs_must_be_utf8() {
        assert_eq!(
            to_string_e(&Value::Blob(b"one time".to_vec())).unwrap(),
            "one time"
        );
        assert!(
            to_string_e(&Value::Blob(vec![0xff, 0xfe]))
                .unwrap_err()
                .is_invalid_cast()
        );
    }

    #[test]
    fn temporals_render() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2009, 11, 10, 23, 0, 0)
            .unwrap();
        assert_eq!(
            to_string_e(&Value::Timestamp(dt)).unwrap(),
            "2009-11-10T23:00:00+00:00"
        );
        assert_eq!(
            to_string_e(&Value::Duration(TimeDelta::minutes(5))).unwrap(),
            "5m0s"
        );
    }

    #[test]
    fn collections_do_not_stringify() {
        assert!(
            to_string_e(&Value::List(vec![Value::Int64(1)]))
                .unwrap_err()
                .is_invalid_cast()
        );
        assert_eq!(to_string(&Value::List(vec![])), "");
    }
}

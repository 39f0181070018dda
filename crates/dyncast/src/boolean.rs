use crate::{
    error::{CastError, ParseError, Target},
    number,
    value::{Value, indirect::resolve, resolve_alias},
};

/// Strict boolean coercion. Numeric kinds are truthy when non-zero; strings
/// use the strict literal set (`1/t/T/TRUE/true/True` and the matching
/// falsy spellings).
pub fn to_bool_e(value: &Value) -> Result<bool, CastError> {
    let (resolved, _) = resolve(value);
    match resolved {
        Value::Bool(b) => Ok(*b),
        Value::Null => Ok(false),
        Value::Int8(n) => Ok(*n != 0),
        Value::Int16(n) => Ok(*n != 0),
        Value::Int32(n) => Ok(*n != 0),
        Value::Int64(n) => Ok(*n != 0),
        Value::Uint8(n) => Ok(*n != 0),
        Value::Uint16(n) => Ok(*n != 0),
        Value::Uint32(n) => Ok(*n != 0),
        Value::Uint64(n) => Ok(*n != 0),
        Value::Float32(n) => Ok(*n != 0.0),
        Value::Float64(n) => Ok(*n != 0.0),
        Value::Duration(d) => Ok(!d.is_zero()),
        Value::Text(text) => parse_literal(text)
            .ok_or_else(|| CastError::parse(text, Target::Bool, ParseError::Bool)),
        Value::Number(_) => number::to_i64_e(resolved)
            .map(|n| n != 0)
            .map_err(|_| CastError::invalid_cast(resolved, Target::Bool)),
        other => match resolve_alias(other) {
            Some(basic) => to_bool_e(&basic),
            None => Err(CastError::invalid_cast(other, Target::Bool)),
        },
    }
}

/// Lenient variant of [`to_bool_e`]; failures map to `false`.
#[must_use]
pub fn to_bool(value: &Value) -> bool {
    to_bool_e(value).unwrap_or_default()
}

const fn parse_literal(text: &str) -> Option<bool> {
    match text.as_bytes() {
        b"1" | b"t" | b"T" | b"true" | b"TRUE" | b"True" => Some(true),
        b"0" | b"f" | b"F" | b"false" | b"FALSE" | b"False" => Some(false),
        _ => None,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DynValue;
    use chrono::TimeDelta;

    fn v_txt(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn literals() {
        for truthy in ["1", "t", "T", "true", "TRUE", "True"] {
            assert!(to_bool_e(&v_txt(truthy)).unwrap(), "literal {truthy:?}");
        }
        for falsy in ["0", "f", "F", "false", "FALSE", "False"] {
            assert!(!to_bool_e(&v_txt(falsy)).unwrap(), "literal {falsy:?}");
        }

        assert!(to_bool_e(&v_txt("maybe")).unwrap_err().is_parse());
        assert!(to_bool_e(&v_txt("truthy")).unwrap_err().is_parse());
    }

    #[test]
    fn numbers_are_truthy_when_nonzero() {
        assert!(to_bool_e(&Value::Int64(1)).unwrap());
        assert!(to_bool_e(&Value::Int64(-1)).unwrap());
        assert!(!to_bool_e(&Value::Int64(0)).unwrap());
        assert!(!to_bool_e(&Value::Float32(0.0)).unwrap());
        assert!(to_bool_e(&Value::Uint8(3)).unwrap());
        assert!(!to_bool_e(&Value::Duration(TimeDelta::zero())).unwrap());
        assert!(to_bool_e(&Value::Duration(TimeDelta::seconds(1))).unwrap());
    }

    #[test]
    fn json_numbers_go_through_integer_coercion() {
        assert!(to_bool_e(&Value::number("1")).unwrap());
        assert!(!to_bool_e(&Value::number("0")).unwrap());
        assert!(to_bool_e(&Value::number("1.0")).unwrap());
        assert!(
            to_bool_e(&Value::number("1.5"))
                .unwrap_err()
                .is_invalid_cast()
        );
    }

    #[test]
    fn nil_and_fallbacks() {
        assert!(!to_bool_e(&Value::Null).unwrap());
        assert!(!to_bool(&v_txt("maybe")));
        assert!(to_bool_e(&Value::from(Some(true))).unwrap());
    }

    #[derive(Debug)]
    struct Flag(bool);

    impl DynValue for Flag {
        fn type_name(&self) -> &'static str {
            "Flag"
        }

        fn as_basic(&self) -> Option<Value> {
            Some(Value::Bool(self.0))
        }
    }

    #[test]
    fn aliases_resolve() {
        assert!(to_bool_e(&Value::dynamic(Flag(true))).unwrap());
        assert!(to_bool_e(&Value::List(vec![])).unwrap_err().is_invalid_cast());
    }
}

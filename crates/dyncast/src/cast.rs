use crate::{
    boolean, error::CastError, number, temporal, text,
    traits::{AcceptValue, FromValue},
    value::Value,
};
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

///
/// FromValue IMPLEMENTATIONS
///

macro_rules! impl_from_value_number {
    ( $( $ty:ty ),* $(,)? ) => { $(
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self, CastError> {
                number::cast_number(value, None)
            }
        }
    )* };
}

impl_from_value_number! {
    i8, i16, i32, i64, isize,
    u8, u16, u32, u64, usize,
    f32, f64,
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        boolean::to_bool_e(value)
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        text::to_string_e(value)
    }
}

impl FromValue for DateTime<FixedOffset> {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        temporal::to_datetime_e(value)
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        temporal::to_datetime_e(value).map(|dt| dt.with_timezone(&Utc))
    }
}

impl FromValue for TimeDelta {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        temporal::to_duration_e(value)
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        Ok(value.clone())
    }
}

///
/// AcceptValue IMPLEMENTATIONS
///
/// Built-in target kinds accept through the engine, so the engine's rules
/// always win over user hooks for shapes it understands.
///

macro_rules! impl_accept_value {
    ( $( $ty:ty ),* $(,)? ) => { $(
        impl AcceptValue for $ty {
            fn accept(&mut self, value: &Value) -> Result<(), CastError> {
                *self = <$ty>::from_value(value)?;
                Ok(())
            }
        }
    )* };
}

impl_accept_value! {
    bool,
    i8, i16, i32, i64, isize,
    u8, u16, u32, u64, usize,
    f32, f64,
    String,
    DateTime<FixedOffset>,
    DateTime<Utc>,
    TimeDelta,
}

///
/// GENERIC ENTRY POINTS
///

/// Strict generic coercion to any [`FromValue`] target.
pub fn to_e<T: FromValue>(value: &Value) -> Result<T, CastError> {
    T::from_value(value)
}

/// Lenient generic coercion; failures map to the target's zero value.
#[must_use]
pub fn to<T: FromValue + Default>(value: &Value) -> T {
    to_e(value).unwrap_or_default()
}

/// Strict coercion with a caller-supplied fallback, invoked only when the
/// default conversion path fails. The fallback receives the original input.
pub fn to_or_else_e<T, F>(value: &Value, fallback: F) -> Result<T, CastError>
where
    T: FromValue,
    F: FnOnce(&Value) -> Result<T, CastError>,
{
    T::from_value(value).or_else(|_| fallback(value))
}

/// Lenient variant of [`to_or_else_e`]; a failing fallback maps to the
/// target's zero value.
pub fn to_or_else<T, F>(value: &Value, fallback: F) -> T
where
    T: FromValue + Default,
    F: FnOnce(&Value) -> Result<T, CastError>,
{
    to_or_else_e(value, fallback).unwrap_or_default()
}

/// Coercion that aborts on failure. Reserved for call sites that have
/// already validated the input shape out-of-band.
#[track_caller]
#[must_use]
pub fn must<T: FromValue>(value: &Value) -> T {
    match T::from_value(value) {
        Ok(v) => v,
        Err(err) => panic!("coercion failed: {err}"),
    }
}

/// Strict assignment through the target's [`AcceptValue`] capability.
pub fn set_value_e<T: AcceptValue>(target: &mut T, value: &Value) -> Result<(), CastError> {
    target.accept(value)
}

/// Lenient assignment; failures leave the target untouched.
pub fn set_value<T: AcceptValue>(target: &mut T, value: &Value) {
    let _ = target.accept(value);
}

///
/// TESTS
///

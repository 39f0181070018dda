use crate::{error::CastError, value::Value};
use std::fmt;

///
/// FromValue
///
/// The generic coercion entry point: a closed-by-convention set of basic
/// target kinds (booleans, every integer and float width, strings,
/// timestamps, durations, and element-wise collections of these) that can be
/// produced from a [`Value`]. Implementations dispatch to the per-kind
/// strict engines.
///

pub trait FromValue: Sized {
    /// Coerce `value` into `Self`, failing with a typed error.
    fn from_value(value: &Value) -> Result<Self, CastError>;
}

///
/// AcceptValue
///
/// Opt-in capability for target types that accept custom coercion logic.
///
/// Built-in target kinds carry implementations that delegate to the engine,
/// so a user-supplied hook can never shadow a built-in coercion for inputs
/// the engine already understands. Custom implementations should try their
/// own rules and may fall back to the built-in engines for everything else.
///

pub trait AcceptValue {
    /// Accept coercion of `value` into `self`.
    fn accept(&mut self, value: &Value) -> Result<(), CastError>;
}

///
/// DynValue
///
/// Dynamic payloads the engine does not natively understand, carried in
/// [`Value::Dyn`]. Implementors opt into capabilities by overriding the
/// default methods. Capabilities are consulted only in the
/// default/unrecognized branch of each engine, after every built-in rule
/// for the payload's shape has been tried.
///

pub trait DynValue: fmt::Debug + Send + Sync {
    /// Name used for this payload in diagnostics.
    fn type_name(&self) -> &'static str;

    /// Alias resolution: a named wrapper over a basic kind exposes the
    /// canonical basic value here. The engine retries coercion on the
    /// resolved value.
    fn as_basic(&self) -> Option<Value> {
        None
    }

    /// Fallible floating-point extraction. Honored when the target kind is
    /// `f64`, and as a nanosecond count for duration targets.
    fn try_float(&self) -> Option<Result<f64, CastError>> {
        None
    }

    /// Infallible floating-point extraction. Same targets as
    /// [`DynValue::try_float`], consulted after it.
    fn float(&self) -> Option<f64> {
        None
    }
}

use crate::value::Value;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Width
/// Bit width of an integer target kind.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
    Native,
}

///
/// FloatWidth
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FloatWidth {
    W32,
    W64,
}

///
/// Target
///
/// Closed set of coercion target kinds. The target determines which engine
/// branch runs and names the requested type in diagnostics.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Target {
    Bool,
    Int(Width),
    Uint(Width),
    Float(FloatWidth),
    Text,
    Timestamp,
    Duration,
    List,
    Map,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bool => "bool",
            Self::Int(Width::W8) => "i8",
            Self::Int(Width::W16) => "i16",
            Self::Int(Width::W32) => "i32",
            Self::Int(Width::W64) => "i64",
            Self::Int(Width::Native) => "isize",
            Self::Uint(Width::W8) => "u8",
            Self::Uint(Width::W16) => "u16",
            Self::Uint(Width::W32) => "u32",
            Self::Uint(Width::W64) => "u64",
            Self::Uint(Width::Native) => "usize",
            Self::Float(FloatWidth::W32) => "f32",
            Self::Float(FloatWidth::W64) => "f64",
            Self::Text => "string",
            Self::Timestamp => "timestamp",
            Self::Duration => "duration",
            Self::List => "list",
            Self::Map => "map",
        };
        write!(f, "{label}")
    }
}

///
/// Bounds
/// Legal integer domain of a bounded target, carried by range failures.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    pub min: i128,
    pub max: i128,
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

///
/// CastError
///
/// Coercion failure taxonomy. Every engine surfaces errors through its
/// return channel; only the lenient public variants discard them.
///

#[derive(Debug, ThisError)]
pub enum CastError {
    /// The input's runtime shape has no conversion rule for the target kind.
    #[error("unable to cast {value:?} of type {} to {target}", .value.type_name())]
    InvalidCast { value: Value, target: Target },

    /// The input is numerically valid but outside the legal domain of the
    /// target (negative value to an unsigned target, or magnitude overflow).
    #[error("value {value:?} is out of range for {target}{}", fmt_bounds(.bounds))]
    Range {
        value: Value,
        target: Target,
        bounds: Option<Bounds>,
    },

    /// Textual input that is not well-formed for the attempted grammar.
    /// The underlying parse error is preserved as the cause.
    #[error("unable to cast {input:?} to {target}: {source}")]
    Parse {
        input: String,
        target: Target,
        source: ParseError,
    },
}

impl CastError {
    pub(crate) fn invalid_cast(value: &Value, target: Target) -> Self {
        Self::InvalidCast {
            value: value.clone(),
            target,
        }
    }

    pub(crate) fn range(value: &Value, target: Target, bounds: Option<Bounds>) -> Self {
        Self::Range {
            value: value.clone(),
            target,
            bounds,
        }
    }

    pub(crate) fn parse(input: &str, target: Target, source: ParseError) -> Self {
        Self::Parse {
            input: input.to_string(),
            target,
            source,
        }
    }

    /// The target kind the failed coercion was asked to produce.
    #[must_use]
    pub const fn target(&self) -> Target {
        match self {
            Self::InvalidCast { target, .. }
            | Self::Range { target, .. }
            | Self::Parse { target, .. } => *target,
        }
    }

    #[must_use]
    pub const fn is_invalid_cast(&self) -> bool {
        matches!(self, Self::InvalidCast { .. })
    }

    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

fn fmt_bounds(bounds: &Option<Bounds>) -> String {
    bounds.map_or_else(String::new, |b| format!(" {b}"))
}

///
/// ParseError
/// Underlying grammar failures, wrapped by [`CastError::Parse`].
///

#[derive(Debug, ThisError)]
pub enum ParseError {
    #[error("invalid boolean literal")]
    Bool,

    #[error("no date/time format matched")]
    Date,

    #[error(transparent)]
    DateTime(#[from] chrono::ParseError),

    #[error("invalid duration: {reason}")]
    Duration { reason: &'static str },

    #[error(transparent)]
    Float(#[from] std::num::ParseFloatError),

    #[error(transparent)]
    Int(#[from] std::num::ParseIntError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

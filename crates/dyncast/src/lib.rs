//! Strict, explicit coercion of loosely-typed values into primitive
//! targets: booleans, every integer and float width, strings, timestamps,
//! durations, and element-wise collections of these. Inputs arrive as a
//! tagged [`Value`]; every conversion either produces the requested kind or
//! reports precisely why no valid conversion exists.
#![warn(unreachable_pub)]

pub mod boolean;
pub mod cast;
pub mod collection;
pub mod error;
pub mod number;
pub mod temporal;
pub mod text;
pub mod traits;
pub mod value;

pub use crate::{
    boolean::{to_bool, to_bool_e},
    cast::{must, set_value, set_value_e, to, to_e, to_or_else, to_or_else_e},
    collection::{
        to_map, to_map_e, to_string_vec, to_string_vec_e, to_vec, to_vec_e,
    },
    error::{Bounds, CastError, FloatWidth, ParseError, Target, Width},
    number::{
        Number, to_f32, to_f32_e, to_f64, to_f64_e, to_i8, to_i8_e, to_i16, to_i16_e, to_i32,
        to_i32_e, to_i64, to_i64_e, to_isize, to_isize_e, to_number, to_number_base,
        to_number_base_e, to_number_e, to_u8, to_u8_e, to_u16, to_u16_e, to_u32, to_u32_e, to_u64,
        to_u64_e, to_usize, to_usize_e,
    },
    temporal::{
        format_duration, to_datetime, to_datetime_e, to_datetime_in, to_datetime_in_e,
        to_duration, to_duration_e,
    },
    text::{to_string, to_string_e},
    traits::{AcceptValue, DynValue, FromValue},
    value::Value,
};

///
/// Prelude
///
/// Domain vocabulary only; the conversion functions live at the crate root.
///

pub mod prelude {
    pub use crate::{
        error::{CastError, Target},
        traits::{AcceptValue, DynValue, FromValue},
        value::Value,
    };
}

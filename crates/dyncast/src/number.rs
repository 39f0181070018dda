use crate::{
    error::{Bounds, CastError, FloatWidth, ParseError, Target, Width},
    value::{Value, indirect::resolve, resolve_alias},
};
use num_traits::{Bounded, ToPrimitive};
use std::{borrow::Cow, num::IntErrorKind};

use self::repr::{NumberParseError, NumberRepr};

mod repr {
    use super::{ParseError, Target};

    ///
    /// NumberRepr
    ///
    /// Per-width representation plumbing behind the sealed [`super::Number`]
    /// trait. The `from_*` conversions are deliberately unchecked (`as`
    /// casts): the direct-kind fast path narrows and widens without range
    /// checks, and only textual parsing enforces the width.
    ///

    pub trait NumberRepr: Copy {
        const TARGET: Target;
        const UNSIGNED: bool;

        fn from_i64(n: i64) -> Self;
        fn from_u64(n: u64) -> Self;
        fn from_f64(n: f64) -> Self;
        fn parse(text: &str, base: Option<u32>) -> Result<Self, NumberParseError>;
    }

    /// Intermediate parse outcome, mapped to the error taxonomy by the
    /// engine (domain failures become range errors, grammar failures keep
    /// their cause).
    pub enum NumberParseError {
        Negative,
        Overflow,
        Invalid(ParseError),
    }
}

///
/// Number
///
/// Closed set of numeric target kinds: every signed/unsigned integer width
/// (including the native word) plus `f32`/`f64`. Sealed; the per-width
/// implementations are generated below.
///

pub trait Number: NumberRepr + Bounded + ToPrimitive {}

macro_rules! signed_number {
    ( $( $ty:ty => $target:expr ),* $(,)? ) => { $(
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_precision_loss, clippy::cast_sign_loss)]
        impl NumberRepr for $ty {
            const TARGET: Target = $target;
            const UNSIGNED: bool = false;

            fn from_i64(n: i64) -> Self { n as Self }
            fn from_u64(n: u64) -> Self { n as Self }
            fn from_f64(n: f64) -> Self { n as Self }

            fn parse(text: &str, base: Option<u32>) -> Result<Self, NumberParseError> {
                parse_int(text, base, <$ty>::from_str_radix)
            }
        }

        impl Number for $ty {}
    )* };
}

macro_rules! unsigned_number {
    ( $( $ty:ty => $target:expr ),* $(,)? ) => { $(
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_precision_loss, clippy::cast_sign_loss)]
        impl NumberRepr for $ty {
            const TARGET: Target = $target;
            const UNSIGNED: bool = true;

            fn from_i64(n: i64) -> Self { n as Self }
            fn from_u64(n: u64) -> Self { n as Self }
            fn from_f64(n: f64) -> Self { n as Self }

            fn parse(text: &str, base: Option<u32>) -> Result<Self, NumberParseError> {
                parse_uint(text, base, <$ty>::from_str_radix)
            }
        }

        impl Number for $ty {}
    )* };
}

macro_rules! float_number {
    ( $( $ty:ty => $target:expr ),* $(,)? ) => { $(
        #[allow(clippy::cast_possible_truncation)]
        impl NumberRepr for $ty {
            const TARGET: Target = $target;
            const UNSIGNED: bool = false;

            fn from_i64(n: i64) -> Self { n as Self }
            fn from_u64(n: u64) -> Self { n as Self }
            fn from_f64(n: f64) -> Self { n as Self }

            // Out-of-range float parses land on IEEE infinities; floats
            // never overflow-fail. Base control does not apply.
            fn parse(text: &str, _base: Option<u32>) -> Result<Self, NumberParseError> {
                text.parse::<$ty>()
                    .map_err(|err| NumberParseError::Invalid(err.into()))
            }
        }

        impl Number for $ty {}
    )* };
}

signed_number! {
    i8 => Target::Int(Width::W8),
    i16 => Target::Int(Width::W16),
    i32 => Target::Int(Width::W32),
    i64 => Target::Int(Width::W64),
    isize => Target::Int(Width::Native),
}

unsigned_number! {
    u8 => Target::Uint(Width::W8),
    u16 => Target::Uint(Width::W16),
    u32 => Target::Uint(Width::W32),
    u64 => Target::Uint(Width::W64),
    usize => Target::Uint(Width::Native),
}

float_number! {
    f32 => Target::Float(FloatWidth::W32),
    f64 => Target::Float(FloatWidth::W64),
}

///
/// ENGINE
///

/// Direct-kind fast path. Numeric kinds convert unchecked, booleans map to
/// 0/1, the absence marker maps to 0. Textual kinds fall through so the
/// caller proceeds to parsing.
fn direct_number<T: Number>(value: &Value) -> Option<T> {
    match value {
        Value::Int8(n) => Some(T::from_i64(i64::from(*n))),
        Value::Int16(n) => Some(T::from_i64(i64::from(*n))),
        Value::Int32(n) => Some(T::from_i64(i64::from(*n))),
        Value::Int64(n) => Some(T::from_i64(*n)),
        Value::Uint8(n) => Some(T::from_u64(u64::from(*n))),
        Value::Uint16(n) => Some(T::from_u64(u64::from(*n))),
        Value::Uint32(n) => Some(T::from_u64(u64::from(*n))),
        Value::Uint64(n) => Some(T::from_u64(*n)),
        Value::Float32(n) => Some(T::from_f64(f64::from(*n))),
        Value::Float64(n) => Some(T::from_f64(*n)),
        Value::Bool(b) => Some(T::from_i64(i64::from(*b))),
        Value::Null => Some(T::from_i64(0)),
        _ => None,
    }
}

/// Unsigned fast path. The second flag distinguishes "recognized but
/// negative" (`false`: the caller must fail with a range error, never fall
/// through to parsing) from "not numeric at all" (`true`).
fn direct_unsigned<T: Number>(value: &Value) -> (Option<T>, bool) {
    match value {
        Value::Int8(n) if *n < 0 => (None, false),
        Value::Int16(n) if *n < 0 => (None, false),
        Value::Int32(n) if *n < 0 => (None, false),
        Value::Int64(n) if *n < 0 => (None, false),
        Value::Float32(n) if *n < 0.0 => (None, false),
        Value::Float64(n) if *n < 0.0 => (None, false),
        _ => (direct_number(value), true),
    }
}

fn cast_signed<T: Number>(value: &Value, base: Option<u32>) -> Result<T, CastError> {
    let (resolved, _) = resolve(value);
    if let Some(n) = direct_number(resolved) {
        return Ok(n);
    }

    match resolved {
        Value::Text(text) | Value::Number(text) => parse_text(text, resolved, base),
        Value::Dyn(payload) => {
            if T::TARGET == Target::Float(FloatWidth::W64) {
                if let Some(result) = payload.try_float() {
                    // provider failures are not parse failures; report the shape
                    return result
                        .map(T::from_f64)
                        .map_err(|_| CastError::invalid_cast(resolved, T::TARGET));
                }
                if let Some(f) = payload.float() {
                    return Ok(T::from_f64(f));
                }
            }

            match resolve_alias(resolved) {
                Some(basic) => cast_signed(&basic, base),
                None => Err(CastError::invalid_cast(resolved, T::TARGET)),
            }
        }
        _ => Err(CastError::invalid_cast(resolved, T::TARGET)),
    }
}

fn cast_unsigned<T: Number>(value: &Value, base: Option<u32>) -> Result<T, CastError> {
    let (resolved, _) = resolve(value);
    let (direct, sign_ok) = direct_unsigned(resolved);
    if let Some(n) = direct {
        return Ok(n);
    }
    if !sign_ok {
        return Err(range_error::<T>(resolved));
    }

    match resolved {
        Value::Text(text) | Value::Number(text) => parse_text(text, resolved, base),
        Value::Dyn(payload) => {
            if T::TARGET == Target::Float(FloatWidth::W64) {
                if let Some(result) = payload.try_float() {
                    return match result {
                        Ok(f) if f < 0.0 => Err(range_error::<T>(resolved)),
                        Ok(f) => Ok(T::from_f64(f)),
                        Err(_) => Err(CastError::invalid_cast(resolved, T::TARGET)),
                    };
                }
                if let Some(f) = payload.float() {
                    if f < 0.0 {
                        return Err(range_error::<T>(resolved));
                    }
                    return Ok(T::from_f64(f));
                }
            }

            match resolve_alias(resolved) {
                Some(basic) => cast_unsigned(&basic, base),
                None => Err(CastError::invalid_cast(resolved, T::TARGET)),
            }
        }
        _ => Err(CastError::invalid_cast(resolved, T::TARGET)),
    }
}

pub(crate) fn cast_number<T: Number>(value: &Value, base: Option<u32>) -> Result<T, CastError> {
    if T::UNSIGNED {
        cast_unsigned(value, base)
    } else {
        cast_signed(value, base)
    }
}

fn parse_text<T: Number>(text: &str, value: &Value, base: Option<u32>) -> Result<T, CastError> {
    if text.is_empty() {
        return Ok(T::from_i64(0));
    }

    T::parse(text, base).map_err(|err| match err {
        NumberParseError::Negative | NumberParseError::Overflow => range_error::<T>(value),
        NumberParseError::Invalid(source) => CastError::parse(text, T::TARGET, source),
    })
}

fn range_error<T: Number>(value: &Value) -> CastError {
    let bounds = T::min_value()
        .to_i128()
        .zip(T::max_value().to_i128())
        .map(|(min, max)| Bounds { min, max });

    CastError::range(value, T::TARGET, bounds)
}

///
/// PARSING
///

fn parse_int<T>(
    text: &str,
    base: Option<u32>,
    parse: impl Fn(&str, u32) -> Result<T, std::num::ParseIntError>,
) -> Result<T, NumberParseError> {
    let normalized = normalize_decimal(text);
    let result = match base {
        // explicit base: digits only, no prefixes or separators
        Some(radix) => parse(&normalized, radix),
        None => {
            let (digits, radix) = split_base(&normalized);
            parse(&digits, radix)
        }
    };

    result.map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumberParseError::Overflow,
        _ => NumberParseError::Invalid(err.into()),
    })
}

fn parse_uint<T>(
    text: &str,
    base: Option<u32>,
    parse: impl Fn(&str, u32) -> Result<T, std::num::ParseIntError>,
) -> Result<T, NumberParseError> {
    let normalized = normalize_decimal(text);
    let trimmed = normalized.strip_prefix('+').unwrap_or(&normalized);

    // A recognizable negative number is a domain failure for unsigned
    // targets, not a grammar failure.
    if let Some(rest) = trimmed.strip_prefix('-')
        && (rest.parse::<u128>().is_ok() || trimmed.parse::<f64>().is_ok())
    {
        return Err(NumberParseError::Negative);
    }

    let result = match base {
        Some(radix) => parse(trimmed, radix),
        None => {
            let (digits, radix) = split_base(trimmed);
            parse(&digits, radix)
        }
    };

    result.map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumberParseError::Overflow,
        _ => NumberParseError::Invalid(err.into()),
    })
}

/// Auto-detect the radix from the conventional prefixes (`0x`, `0o`, `0b`,
/// legacy leading `0` for octal) and strip digit-separating underscores.
/// Malformed separators are left in place so the subsequent parse fails.
fn split_base(text: &str) -> (String, u32) {
    let (sign, body) = match text.as_bytes().first() {
        Some(b'+') => ("+", &text[1..]),
        Some(b'-') => ("-", &text[1..]),
        _ => ("", text),
    };

    let (body, radix) = if let Some(rest) = strip_prefix2(body, "0x", "0X") {
        (rest, 16)
    } else if let Some(rest) = strip_prefix2(body, "0o", "0O") {
        (rest, 8)
    } else if let Some(rest) = strip_prefix2(body, "0b", "0B") {
        (rest, 2)
    } else if body.len() > 1 && body.starts_with('0') {
        (&body[1..], 8)
    } else {
        (body, 10)
    };

    let body = if body.contains('_') && valid_underscores(body) {
        Cow::Owned(body.replace('_', ""))
    } else {
        Cow::Borrowed(body)
    };

    (format!("{sign}{body}"), radix)
}

fn strip_prefix2<'a>(body: &'a str, lower: &str, upper: &str) -> Option<&'a str> {
    body.strip_prefix(lower).or_else(|| body.strip_prefix(upper))
}

// Separators must sit between digits.
fn valid_underscores(body: &str) -> bool {
    let bytes = body.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_alphanumeric()
                && bytes[i + 1].is_ascii_alphanumeric())
    })
}

/// Decimal normalization for integer-target parsing.
///
/// A string shaped `[-+]?digits(.digits)?` whose fractional part is empty or
/// all zeros is truncated at the decimal point (`"10.00"` → `"10"`); a bare
/// sign left over becomes `"-0"`/`"+0"` and an empty result becomes `"0"`.
/// A non-zero fractional remainder, scientific notation, or any stray
/// character passes through unmodified so the integer parse fails loudly
/// instead of silently truncating. Idempotent on already-normalized input.
pub(crate) fn normalize_decimal(text: &str) -> Cow<'_, str> {
    if !text.contains('.') {
        return Cow::Borrowed(text);
    }

    let Some((integer, fraction)) = split_decimal(text) else {
        return Cow::Borrowed(text);
    };
    if !fraction.bytes().all(|b| b == b'0') {
        return Cow::Borrowed(text);
    }

    match integer {
        "-" | "+" => Cow::Owned(format!("{integer}0")),
        "" => Cow::Borrowed("0"),
        _ => Cow::Borrowed(integer),
    }
}

/// Split `[-+]?digits(.digits)?` into the signed integer part and the
/// fraction digits; `None` when the shape does not match.
fn split_decimal(text: &str) -> Option<(&str, &str)> {
    let body = text.strip_prefix(['-', '+']).unwrap_or(text);
    let sign_len = text.len() - body.len();

    let (int_digits, fraction) = match body.split_once('.') {
        Some((i, f)) => (i, f),
        None => (body, ""),
    };

    if !int_digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((&text[..sign_len + int_digits.len()], fraction))
}

///
/// PUBLIC SURFACE
///

/// Strict generic numeric coercion.
pub fn to_number_e<T: Number>(value: &Value) -> Result<T, CastError> {
    cast_number(value, None)
}

/// Lenient generic numeric coercion; failures map to zero.
#[must_use]
pub fn to_number<T: Number + Default>(value: &Value) -> T {
    to_number_e(value).unwrap_or_default()
}

/// Strict numeric coercion parsing integer text in the given radix instead
/// of auto-detection.
pub fn to_number_base_e<T: Number>(value: &Value, base: u32) -> Result<T, CastError> {
    cast_number(value, Some(base))
}

/// Lenient variant of [`to_number_base_e`].
#[must_use]
pub fn to_number_base<T: Number + Default>(value: &Value, base: u32) -> T {
    to_number_base_e(value, base).unwrap_or_default()
}

macro_rules! number_casts {
    ( $( $fn:ident, $fn_e:ident => $ty:ty ),* $(,)? ) => { $(
        #[doc = concat!("Strict coercion to `", stringify!($ty), "`.")]
        pub fn $fn_e(value: &Value) -> Result<$ty, CastError> {
            cast_number(value, None)
        }

        #[doc = concat!("Lenient coercion to `", stringify!($ty), "`; failures map to zero.")]
        #[must_use]
        pub fn $fn(value: &Value) -> $ty {
            $fn_e(value).unwrap_or_default()
        }
    )* };
}

number_casts! {
    to_i8, to_i8_e => i8,
    to_i16, to_i16_e => i16,
    to_i32, to_i32_e => i32,
    to_i64, to_i64_e => i64,
    to_isize, to_isize_e => isize,
    to_u8, to_u8_e => u8,
    to_u16, to_u16_e => u16,
    to_u32, to_u32_e => u32,
    to_u64, to_u64_e => u64,
    to_usize, to_usize_e => usize,
    to_f32, to_f32_e => f32,
    to_f64, to_f64_e => f64,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DynValue;
    use proptest::prelude::*;

    fn v_txt(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn direct_kinds_convert() {
        assert_eq!(to_i64_e(&Value::Int32(-7)).unwrap(), -7);
        assert_eq!(to_i64_e(&Value::Uint8(7)).unwrap(), 7);
        assert_eq!(to_f64_e(&Value::Int64(3)).unwrap(), 3.0);
        assert_eq!(to_i64_e(&Value::Bool(true)).unwrap(), 1);
        assert_eq!(to_i64_e(&Value::Null).unwrap(), 0);
        assert_eq!(to_u8_e(&Value::Float64(52.0)).unwrap(), 52);
    }

    #[test]
    fn narrowing_is_unchecked_on_the_fast_path() {
        // the width check applies to textual parsing only
        assert_eq!(to_i8_e(&Value::Int64(300)).unwrap(), 300_i64 as i8);
    }

    #[test]
    fn strings_parse() {
        assert_eq!(to_i64_e(&v_txt("52")).unwrap(), 52);
        assert_eq!(to_i64_e(&v_txt("-52")).unwrap(), -52);
        assert_eq!(to_i64_e(&v_txt("+52")).unwrap(), 52);
        assert_eq!(to_f64_e(&v_txt("8.31")).unwrap(), 8.31);
        assert_eq!(to_i64_e(&v_txt("")).unwrap(), 0);
        assert!(to_i64_e(&v_txt("fifty")).unwrap_err().is_parse());
    }

    #[test]
    fn json_numbers_parse_like_strings() {
        assert_eq!(to_i64_e(&Value::number("52")).unwrap(), 52);
        assert_eq!(to_u8_e(&Value::number("10.00")).unwrap(), 10);
        assert!(to_u8_e(&Value::number("-1")).unwrap_err().is_range());
    }

    #[test]
    fn unsigned_rejects_negative_values() {
        // every arrival shape of a negative value fails with a range error
        assert!(to_u8_e(&Value::Int64(-1)).unwrap_err().is_range());
        assert!(to_u8_e(&Value::Float64(-0.5)).unwrap_err().is_range());
        assert!(to_u8_e(&v_txt("-1")).unwrap_err().is_range());
        assert!(to_u64_e(&v_txt("-1.5")).unwrap_err().is_range());
        assert!(to_u8_e(&Value::number("-1")).unwrap_err().is_range());
    }

    #[test]
    fn unsigned_boundary() {
        assert_eq!(to_u8_e(&v_txt("255")).unwrap(), 255);
        let err = to_u8_e(&v_txt("256")).unwrap_err();
        match err {
            CastError::Range {
                bounds: Some(bounds),
                ..
            } => assert_eq!(bounds, Bounds { min: 0, max: 255 }),
            other => panic!("expected range error, got {other:?}"),
        }
    }

    #[test]
    fn signed_boundary() {
        assert_eq!(to_i8_e(&v_txt("127")).unwrap(), 127);
        assert_eq!(to_i8_e(&v_txt("-128")).unwrap(), -128);
        assert!(to_i8_e(&v_txt("128")).unwrap_err().is_range());
        assert!(to_i8_e(&v_txt("-129")).unwrap_err().is_range());
    }

    #[test]
    fn decimal_strings_with_zero_fraction_truncate() {
        assert_eq!(to_i64_e(&v_txt("10.00")).unwrap(), 10);
        assert_eq!(to_i64_e(&v_txt("-0001.0")).unwrap(), -1);
        assert_eq!(to_i64_e(&v_txt("+12.")).unwrap(), 12);
    }

    #[test]
    fn decimal_strings_with_nonzero_fraction_fail() {
        assert!(to_i64_e(&v_txt("10.017")).unwrap_err().is_parse());
        assert!(to_u8_e(&v_txt("10.017")).unwrap_err().is_parse());
        // float targets take the raw string
        assert_eq!(to_f64_e(&v_txt("10.017")).unwrap(), 10.017);
    }

    #[test]
    fn ambiguous_suffixes_pass_through_and_fail() {
        assert!(to_i64_e(&v_txt("10.0E9")).unwrap_err().is_parse());
        assert!(to_i64_e(&v_txt("10.0i")).unwrap_err().is_parse());
        assert!(to_i64_e(&v_txt("10...17")).unwrap_err().is_parse());
        assert_eq!(to_f64_e(&v_txt("10.0E9")).unwrap(), 1.0e10);
    }

    #[test]
    fn normalize_decimal_table() {
        let cases = [
            ("10", "10"),
            ("10.0", "10"),
            ("10.00", "10"),
            ("10.017", "10.017"),
            ("-0001.0", "-0001"),
            ("+12.", "+12"),
            ("-.0", "-0"),
            ("+.0", "+0"),
            (".", "0"),
            (".0", "0"),
            (".5", ".5"),
            ("10000000000000.0000000000", "10000000000000"),
            ("10...17", "10...17"),
            ("10.foobar", "10.foobar"),
            ("10.0E9", "10.0E9"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_decimal(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn base_auto_detection() {
        assert_eq!(to_i64_e(&v_txt("0x1A")).unwrap(), 26);
        assert_eq!(to_i64_e(&v_txt("0b101")).unwrap(), 5);
        assert_eq!(to_i64_e(&v_txt("0o17")).unwrap(), 15);
        assert_eq!(to_i64_e(&v_txt("017")).unwrap(), 15);
        assert_eq!(to_i64_e(&v_txt("1_000")).unwrap(), 1000);
        assert_eq!(to_i64_e(&v_txt("-0x10")).unwrap(), -16);
        assert!(to_i64_e(&v_txt("_1")).unwrap_err().is_parse());
        assert!(to_i64_e(&v_txt("08")).unwrap_err().is_parse());
    }

    #[test]
    fn explicit_base_disables_prefixes() {
        assert_eq!(to_number_base_e::<i64>(&v_txt("08"), 10).unwrap(), 8);
        assert_eq!(to_number_base_e::<i64>(&v_txt("010"), 8).unwrap(), 8);
        assert_eq!(to_number_base_e::<i64>(&v_txt("08"), 16).unwrap(), 8);
        assert!(to_number_base_e::<i64>(&v_txt("0x08"), 10).is_err());
        assert_eq!(to_number_base_e::<u8>(&v_txt("ff"), 16).unwrap(), 255);
    }

    #[test]
    fn lenient_variants_zero_on_failure() {
        assert_eq!(to_i64(&v_txt("nope")), 0);
        assert_eq!(to_u8(&v_txt("-1")), 0);
        assert_eq!(to_f64(&v_txt("8.31")), 8.31);
    }

    #[derive(Debug)]
    struct Meters(i32);

    impl DynValue for Meters {
        fn type_name(&self) -> &'static str {
            "Meters"
        }

        fn as_basic(&self) -> Option<Value> {
            Some(Value::Int32(self.0))
        }
    }

    #[derive(Debug)]
    struct Ratio(f64);

    impl DynValue for Ratio {
        fn type_name(&self) -> &'static str {
            "Ratio"
        }

        fn try_float(&self) -> Option<Result<f64, CastError>> {
            Some(Ok(self.0))
        }
    }

    #[test]
    fn aliases_are_transparent() {
        let wrapped = Value::dynamic(Meters(1234));
        assert_eq!(to_i64_e(&wrapped).unwrap(), to_i64_e(&Value::Int32(1234)).unwrap());
        assert_eq!(to_u16_e(&wrapped).unwrap(), 1234);

        let negative = Value::dynamic(Meters(-5));
        assert!(to_u16_e(&negative).unwrap_err().is_range());
    }

    #[test]
    fn float_capability_applies_to_f64_only() {
        let ratio = Value::dynamic(Ratio(2.5));
        assert_eq!(to_f64_e(&ratio).unwrap(), 2.5);
        assert!(to_i64_e(&ratio).unwrap_err().is_invalid_cast());
        assert!(to_f32_e(&ratio).unwrap_err().is_invalid_cast());
    }

    #[test]
    fn references_resolve_before_dispatch() {
        assert_eq!(to_i64_e(&Value::from(Some(52_i64))).unwrap(), 52);
        assert_eq!(to_i64_e(&Value::from(None::<i64>)).unwrap(), 0);
        assert!(to_u8_e(&Value::from(Some(-1_i64))).unwrap_err().is_range());
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(s in "[-+]?[0-9]{0,18}(\\.[0-9]{0,6})?") {
            let once = normalize_decimal(&s).into_owned();
            let twice = normalize_decimal(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn negative_inputs_never_reach_unsigned_targets(n in i64::MIN..0) {
            prop_assert!(to_u64_e(&Value::Int64(n)).unwrap_err().is_range());
            prop_assert!(to_u64_e(&v_txt(&n.to_string())).unwrap_err().is_range());
            prop_assert!(to_u64_e(&Value::number(n.to_string())).unwrap_err().is_range());
        }

        #[test]
        fn width_boundaries_hold(n in any::<i16>()) {
            let text = v_txt(&n.to_string());
            let result = to_i8_e(&text);
            if i8::try_from(n).is_ok() {
                prop_assert_eq!(result.unwrap(), n as i8);
            } else {
                prop_assert!(result.unwrap_err().is_range());
            }
        }
    }
}

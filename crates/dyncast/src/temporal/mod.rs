pub mod format;

use crate::{
    error::{CastError, ParseError, Target},
    number::normalize_decimal,
    value::{Value, indirect::resolve, resolve_alias},
};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
};
use std::borrow::Cow;

use self::format::{TIME_FORMATS, ZoneStyle};

///
/// TIMESTAMPS
///

/// Strict timestamp coercion; inputs without explicit zone information are
/// interpreted in UTC.
pub fn to_datetime_e(value: &Value) -> Result<DateTime<FixedOffset>, CastError> {
    to_datetime_in_e(value, &Utc)
}

/// Lenient variant of [`to_datetime_e`]; failures map to the Unix epoch.
#[must_use]
pub fn to_datetime(value: &Value) -> DateTime<FixedOffset> {
    to_datetime_e(value).unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
}

/// Strict timestamp coercion interpreting inputs without explicit zone
/// information in `location` (pass `&chrono::Local` for the process zone).
pub fn to_datetime_in_e<Tz: TimeZone>(
    value: &Value,
    location: &Tz,
) -> Result<DateTime<FixedOffset>, CastError> {
    let (resolved, _) = resolve(value);
    match resolved {
        Value::Timestamp(t) => Ok(*t),
        Value::Int8(n) => epoch_seconds(resolved, i64::from(*n)),
        Value::Int16(n) => epoch_seconds(resolved, i64::from(*n)),
        Value::Int32(n) => epoch_seconds(resolved, i64::from(*n)),
        Value::Int64(n) => epoch_seconds(resolved, *n),
        Value::Uint8(n) => epoch_seconds(resolved, i64::from(*n)),
        Value::Uint16(n) => epoch_seconds(resolved, i64::from(*n)),
        Value::Uint32(n) => epoch_seconds(resolved, i64::from(*n)),
        Value::Uint64(n) => match i64::try_from(*n) {
            Ok(secs) => epoch_seconds(resolved, secs),
            Err(_) => Err(CastError::range(resolved, Target::Timestamp, None)),
        },
        Value::Float32(f) => float_epoch(resolved, f64::from(*f)),
        Value::Float64(f) => float_epoch(resolved, *f),
        // Fractional JSON-number timestamps are rejected, not truncated;
        // only an all-zero fraction counts as whole seconds.
        Value::Number(text) => match normalize_decimal(text).parse::<i64>() {
            Ok(secs) => epoch_seconds(resolved, secs),
            Err(_) => Err(CastError::invalid_cast(resolved, Target::Timestamp)),
        },
        Value::Text(text) => parse_datetime(text, location),
        other => match resolve_alias(other) {
            Some(basic) => to_datetime_in_e(&basic, location),
            None => Err(CastError::invalid_cast(other, Target::Timestamp)),
        },
    }
}

/// Lenient variant of [`to_datetime_in_e`].
#[must_use]
pub fn to_datetime_in<Tz: TimeZone>(value: &Value, location: &Tz) -> DateTime<FixedOffset> {
    to_datetime_in_e(value, location).unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
}

fn epoch_seconds(value: &Value, secs: i64) -> Result<DateTime<FixedOffset>, CastError> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| CastError::range(value, Target::Timestamp, None))
}

#[allow(clippy::cast_possible_truncation)]
fn float_epoch(value: &Value, seconds: f64) -> Result<DateTime<FixedOffset>, CastError> {
    if !seconds.is_finite() {
        return Err(CastError::invalid_cast(value, Target::Timestamp));
    }

    // truncate toward the whole second
    epoch_seconds(value, seconds.trunc() as i64)
}

/// Try each format descriptor in table order; the first successful parse
/// wins. Wall-clock-only and named-zone formats are reconstructed in
/// `location`; numeric offsets are preserved as parsed.
pub(crate) fn parse_datetime<Tz: TimeZone>(
    text: &str,
    location: &Tz,
) -> Result<DateTime<FixedOffset>, CastError> {
    for format in TIME_FORMATS {
        match format.zone {
            ZoneStyle::Numeric | ZoneStyle::NumericAndNamed => {
                let parsed = if format.pattern == "%+" {
                    DateTime::parse_from_rfc3339(text)
                } else {
                    DateTime::parse_from_str(text, format.pattern)
                };
                if let Ok(dt) = parsed {
                    return Ok(dt);
                }
            }
            ZoneStyle::None | ZoneStyle::Named => {
                if let Some(wall) = parse_wall_clock(text, format.pattern) {
                    return location
                        .from_local_datetime(&wall)
                        .earliest()
                        .map(|dt| dt.fixed_offset())
                        .ok_or_else(|| {
                            CastError::parse(text, Target::Timestamp, ParseError::Date)
                        });
                }
            }
            ZoneStyle::TimeOnly => {
                if let Some(wall) = parse_wall_clock(text, format.pattern) {
                    return Ok(Utc.from_utc_datetime(&wall).fixed_offset());
                }
            }
        }
    }

    Err(CastError::parse(text, Target::Timestamp, ParseError::Date))
}

// Wall-clock parse for formats without a usable offset. Date-only formats
// resolve at midnight, time-only formats against the zero date, and the
// year-less stamp formats against year zero.
fn parse_wall_clock(text: &str, pattern: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, pattern) {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(time) = NaiveTime::parse_from_str(text, pattern) {
        return NaiveDate::from_ymd_opt(0, 1, 1).map(|date| date.and_time(time));
    }

    let padded = format!("0000 {text}");
    let padded_pattern = format!("%Y {pattern}");
    NaiveDateTime::parse_from_str(&padded, &padded_pattern).ok()
}

///
/// DURATIONS
///

/// Strict duration coercion. Numeric kinds are raw nanosecond counts;
/// strings use the suffixed-unit grammar, with `ns` assumed when no unit
/// character is present.
#[allow(clippy::cast_possible_truncation)]
pub fn to_duration_e(value: &Value) -> Result<TimeDelta, CastError> {
    let (resolved, _) = resolve(value);
    match resolved {
        Value::Duration(d) => Ok(*d),
        Value::Int8(n) => Ok(TimeDelta::nanoseconds(i64::from(*n))),
        Value::Int16(n) => Ok(TimeDelta::nanoseconds(i64::from(*n))),
        Value::Int32(n) => Ok(TimeDelta::nanoseconds(i64::from(*n))),
        Value::Int64(n) => Ok(TimeDelta::nanoseconds(*n)),
        Value::Uint8(n) => Ok(TimeDelta::nanoseconds(i64::from(*n))),
        Value::Uint16(n) => Ok(TimeDelta::nanoseconds(i64::from(*n))),
        Value::Uint32(n) => Ok(TimeDelta::nanoseconds(i64::from(*n))),
        #[allow(clippy::cast_possible_wrap)]
        Value::Uint64(n) => Ok(TimeDelta::nanoseconds(*n as i64)),
        Value::Float32(f) => Ok(TimeDelta::nanoseconds(f64::from(*f) as i64)),
        Value::Float64(f) => Ok(TimeDelta::nanoseconds(*f as i64)),
        Value::Text(text) => {
            let candidate = if text.contains(['n', 's', 'u', 'µ', 'm', 'h']) {
                Cow::Borrowed(text.as_str())
            } else {
                Cow::Owned(format!("{text}ns"))
            };
            parse_duration(&candidate)
                .map_err(|source| CastError::parse(text, Target::Duration, source))
        }
        Value::Number(text) => text
            .parse::<f64>()
            .map(|f| TimeDelta::nanoseconds(f as i64))
            .map_err(|source| CastError::parse(text, Target::Duration, source.into())),
        Value::Dyn(payload) => {
            if let Some(result) = payload.try_float() {
                return result.map(|f| TimeDelta::nanoseconds(f as i64));
            }
            if let Some(f) = payload.float() {
                return Ok(TimeDelta::nanoseconds(f as i64));
            }
            match resolve_alias(resolved) {
                Some(basic) => to_duration_e(&basic),
                None => Err(CastError::invalid_cast(resolved, Target::Duration)),
            }
        }
        _ => Err(CastError::invalid_cast(resolved, Target::Duration)),
    }
}

/// Lenient variant of [`to_duration_e`]; failures map to the zero duration.
#[must_use]
pub fn to_duration(value: &Value) -> TimeDelta {
    to_duration_e(value).unwrap_or_else(|_| TimeDelta::zero())
}

/// Parse the suffixed-unit duration grammar: an optional sign followed by
/// one or more `<decimal number><unit>` terms, with units `ns`, `us`/`µs`,
/// `ms`, `s`, `m`, `h`. A plain `"0"` needs no unit.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn parse_duration(text: &str) -> Result<TimeDelta, ParseError> {
    let fail = |reason: &'static str| ParseError::Duration { reason };

    let mut rest = text;
    let mut negative = false;
    if let Some(r) = rest.strip_prefix('-') {
        negative = true;
        rest = r;
    } else if let Some(r) = rest.strip_prefix('+') {
        rest = r;
    }

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(fail("empty duration"));
    }

    let mut total: i64 = 0;
    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_digits, after_int) = rest.split_at(int_len);

        let (frac_digits, after_frac) = match after_int.strip_prefix('.') {
            Some(r) => {
                let n = r.bytes().take_while(u8::is_ascii_digit).count();
                (&r[..n], &r[n..])
            }
            None => ("", after_int),
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(fail("expected a number"));
        }

        let (scale, after_unit) = match_unit(after_frac).ok_or_else(|| fail("unknown unit"))?;

        let int_part: i64 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| fail("number overflows"))?
        };
        let mut nanos = int_part
            .checked_mul(scale)
            .ok_or_else(|| fail("duration overflows"))?;

        if !frac_digits.is_empty() {
            let fraction: f64 = format!("0.{frac_digits}")
                .parse()
                .map_err(|_| fail("invalid fraction"))?;
            nanos = nanos
                .checked_add((fraction * scale as f64) as i64)
                .ok_or_else(|| fail("duration overflows"))?;
        }

        total = total
            .checked_add(nanos)
            .ok_or_else(|| fail("duration overflows"))?;
        rest = after_unit;
    }

    if negative {
        total = -total;
    }

    Ok(TimeDelta::nanoseconds(total))
}

fn match_unit(rest: &str) -> Option<(i64, &str)> {
    const UNITS: &[(&str, i64)] = &[
        ("ns", 1),
        ("us", 1_000),
        ("µs", 1_000),
        ("μs", 1_000),
        ("ms", 1_000_000),
        ("s", 1_000_000_000),
        ("m", 60 * 1_000_000_000),
        ("h", 3_600 * 1_000_000_000),
    ];

    UNITS
        .iter()
        .find_map(|(unit, scale)| rest.strip_prefix(unit).map(|after| (*scale, after)))
}

/// Render a duration in the suffixed-unit style the parser accepts:
/// `"1h30m0.5s"`, `"1.5µs"`, `"0s"`.
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    let Some(nanos) = duration.num_nanoseconds() else {
        // outside the nanosecond-representable window; seconds precision
        return format!("{}s", duration.num_seconds());
    };
    if nanos == 0 {
        return "0s".to_string();
    }

    let sign = if nanos < 0 { "-" } else { "" };
    let total = nanos.unsigned_abs();
    let mut out = String::new();

    if total < 1_000_000_000 {
        let (scale, unit) = if total < 1_000 {
            (1, "ns")
        } else if total < 1_000_000 {
            (1_000, "µs")
        } else {
            (1_000_000, "ms")
        };
        out.push_str(&format!(
            "{}{}{}",
            total / scale,
            frac_digits(total % scale, scale),
            unit
        ));
    } else {
        let secs = total / 1_000_000_000;
        let frac = frac_digits(total % 1_000_000_000, 1_000_000_000);
        let hours = secs / 3600;
        let minutes = (secs / 60) % 60;
        if hours > 0 {
            out.push_str(&format!("{hours}h"));
        }
        if hours > 0 || secs >= 60 {
            out.push_str(&format!("{minutes}m"));
        }
        out.push_str(&format!("{}{}s", secs % 60, frac));
    }

    format!("{sign}{out}")
}

fn frac_digits(value: u64, scale: u64) -> String {
    if value == 0 || scale == 1 {
        return String::new();
    }

    let width = scale.ilog10() as usize;
    let mut digits = format!("{value:0width$}");
    while digits.ends_with('0') {
        digits.pop();
    }

    format!(".{digits}")
}

///
/// TESTS
///

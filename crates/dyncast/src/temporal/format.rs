///
/// ZoneStyle
///
/// Classification of a textual date/time pattern by the timezone
/// information it encodes. Drives the location-inference rules: parses
/// without an explicit offset are reinterpreted in the caller's default
/// location, parses with one keep it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ZoneStyle {
    /// No timezone information at all.
    None,
    /// Named abbreviation only (no offset). The name cannot be resolved
    /// portably, so it is matched, discarded, and replaced by the default
    /// location.
    Named,
    /// Explicit numeric offset; preserved as parsed.
    Numeric,
    /// Numeric offset plus a redundant zone name.
    NumericAndNamed,
    /// Clock time without a date; resolved against the zero date in UTC.
    TimeOnly,
}

///
/// TimeFormat
///

#[derive(Clone, Copy, Debug)]
pub struct TimeFormat {
    pub pattern: &'static str,
    pub zone: ZoneStyle,
}

const fn entry(pattern: &'static str, zone: ZoneStyle) -> TimeFormat {
    TimeFormat { pattern, zone }
}

/// The ordered parse-attempt table. Most common formats first; the first
/// pattern that parses wins. Order, membership, and zone classification
/// mirror the canonical list (RFC 3339 and ISO-8601 variants, RFC
/// 2822/850/1123 mail formats, and the usual log/stamp layouts).
pub const TIME_FORMATS: &[TimeFormat] = &[
    entry("%+", ZoneStyle::Numeric), // RFC 3339
    entry("%Y-%m-%dT%H:%M:%S", ZoneStyle::None),
    entry("%a, %d %b %Y %H:%M:%S %z", ZoneStyle::Numeric), // RFC 1123 with numeric zone
    entry("%a, %d %b %Y %H:%M:%S %Z", ZoneStyle::Named),   // RFC 1123
    entry("%d %b %y %H:%M %z", ZoneStyle::Numeric),        // RFC 822 with numeric zone
    entry("%d %b %y %H:%M %Z", ZoneStyle::Named),          // RFC 822
    entry("%A, %d-%b-%y %H:%M:%S %Z", ZoneStyle::Named),   // RFC 850
    entry("%Y-%m-%d %H:%M:%S%.f %z %Z", ZoneStyle::NumericAndNamed),
    entry("%Y-%m-%dT%H:%M:%S%z", ZoneStyle::Numeric),
    entry("%Y-%m-%d %H:%M:%S", ZoneStyle::None),
    entry("%a %b %e %H:%M:%S %Y", ZoneStyle::None),     // asctime
    entry("%a %b %e %H:%M:%S %Z %Y", ZoneStyle::Named), // unix date
    entry("%a %b %d %H:%M:%S %z %Y", ZoneStyle::Numeric), // ruby date
    entry("%Y-%m-%d %H:%M:%S%:z", ZoneStyle::Numeric),
    entry("%Y-%m-%d", ZoneStyle::None),
    entry("%d %b %Y", ZoneStyle::None),
    entry("%Y-%m-%d %H:%M:%S %:z", ZoneStyle::Numeric),
    entry("%Y-%m-%d %H:%M:%S %z", ZoneStyle::Numeric),
    entry("%I:%M%p", ZoneStyle::TimeOnly),
    entry("%b %e %H:%M:%S", ZoneStyle::TimeOnly),
    entry("%b %e %H:%M:%S%.3f", ZoneStyle::TimeOnly),
    entry("%b %e %H:%M:%S%.6f", ZoneStyle::TimeOnly),
    entry("%b %e %H:%M:%S%.9f", ZoneStyle::TimeOnly),
];

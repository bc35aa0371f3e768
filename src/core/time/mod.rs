//! CSS `<time>` literal parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Optional sign, digits with an optional decimal point, `s` or `ms`
    /// (case-insensitive), optional surrounding whitespace, nothing else.
    static ref TIME_RE: Regex = Regex::new(r"(?i)^\s*([+-]?)([0-9.]+)(s|ms)\s*$").unwrap();
}

/// Parse a CSS `<time>` literal into a whole number of milliseconds.
///
/// `None` or empty input parses to `0`. Anything that does not match the
/// time grammar parses to `NaN`; this function never panics.
///
/// The magnitude is rounded up to the next whole millisecond before the
/// sign is reapplied, so `"-1500.2ms"` parses to `-1501` (ceiling of the
/// unsigned magnitude, then negation — not ceiling of the signed value).
///
/// See <https://developer.mozilla.org/en-US/docs/Web/CSS/time>
pub fn parse_time(time: Option<&str>) -> f64 {
    let Some(text) = time else {
        return 0.0;
    };
    if text.is_empty() {
        return 0.0;
    }
    let Some(caps) = TIME_RE.captures(text) else {
        return f64::NAN;
    };
    // The digit class admits things like "1.2.3"; a failed conversion is
    // the same sentinel as a failed match
    let Ok(mut value) = caps[2].parse::<f64>() else {
        return f64::NAN;
    };
    if caps[3].eq_ignore_ascii_case("s") {
        value *= 1000.0;
    }
    value = value.ceil();
    if &caps[1] == "-" {
        value = -value;
    }
    value
}

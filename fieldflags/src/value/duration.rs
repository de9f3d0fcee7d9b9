//! Duration literal grammar.
//!
//! A literal is an optionally signed sequence of decimal numbers, each with
//! an optional fraction and a mandatory unit, such as `300ms`, `1.5h` or
//! `2h45m`. Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.
//! A bare `0` is also accepted. [`std::time::Duration`] is unsigned, so a
//! negative literal is rejected unless it is zero.

use std::time::Duration;

use thiserror::Error;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;

/// Reasons a duration literal is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DurationError {
    /// The literal is empty.
    #[error("empty duration")]
    Empty,
    /// The literal denotes a negative, non-zero span.
    #[error("negative durations are not supported")]
    Negative,
    /// A group does not start with a number.
    #[error("expected a number at `{0}`")]
    MissingNumber(String),
    /// A number is not followed by a unit.
    #[error("missing unit in `{0}`")]
    MissingUnit(String),
    /// A unit is not one of the recognised suffixes.
    #[error("unknown unit `{0}`")]
    UnknownUnit(String),
    /// The span does not fit in a [`Duration`].
    #[error("duration out of range")]
    Overflow,
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SECOND,
        "m" => NANOS_PER_SECOND * SECONDS_PER_MINUTE,
        "h" => NANOS_PER_SECOND * SECONDS_PER_HOUR,
        _ => return None,
    };
    Some(u128::from(nanos))
}

/// Parses a duration literal.
///
/// # Errors
///
/// Returns a [`DurationError`] describing the first problem found.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use fieldflags::value::parse_duration;
///
/// assert_eq!(parse_duration("1h30m").ok(), Some(Duration::from_secs(5_400)));
/// assert_eq!(parse_duration("1.5s").ok(), Some(Duration::from_millis(1_500)));
/// assert!(parse_duration("10").is_err());
/// ```
pub fn parse_duration(raw: &str) -> Result<Duration, DurationError> {
    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut rest = body;
    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_fraction) = after_whole
            .strip_prefix('.')
            .map_or(("", after_whole), split_digits);
        if whole.is_empty() && fraction.is_empty() {
            return Err(DurationError::MissingNumber(rest.to_owned()));
        }
        let unit_end = after_fraction
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after_fraction.len());
        let (unit, remainder) = after_fraction.split_at(unit_end);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(raw.to_owned()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_owned()))?;
        let group = group_nanos(whole, fraction, scale)?;
        total = total.checked_add(group).ok_or(DurationError::Overflow)?;
        rest = remainder;
    }

    if negative && total > 0 {
        return Err(DurationError::Negative);
    }
    from_total_nanos(total)
}

fn from_total_nanos(total: u128) -> Result<Duration, DurationError> {
    let per_second = u128::from(NANOS_PER_SECOND);
    let secs =
        u64::try_from(total.div_euclid(per_second)).map_err(|_| DurationError::Overflow)?;
    let nanos =
        u32::try_from(total.rem_euclid(per_second)).map_err(|_| DurationError::Overflow)?;
    Ok(Duration::new(secs, nanos))
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn group_nanos(whole: &str, fraction: &str, scale: u128) -> Result<u128, DurationError> {
    let mut value: u128 = 0;
    for digit in whole.bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(digit - b'0')))
            .ok_or(DurationError::Overflow)?;
    }
    let mut nanos = value.checked_mul(scale).ok_or(DurationError::Overflow)?;

    // Digits beyond nanosecond precision are dropped.
    let mut place = scale;
    for digit in fraction.bytes() {
        place = place.div_euclid(10);
        if place == 0 {
            break;
        }
        nanos = nanos
            .checked_add(u128::from(digit - b'0') * place)
            .ok_or(DurationError::Overflow)?;
    }
    Ok(nanos)
}

/// Renders a duration in the canonical literal form.
///
/// Spans of a second or more use `h`, `m` and `s` groups (`1h30m0s`,
/// `2m5.5s`); shorter spans use the largest fitting sub-second unit
/// (`250ms`, `1.5µs`, `40ns`). The output always parses back with
/// [`parse_duration`].
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    if duration.is_zero() {
        return "0s".to_owned();
    }
    let secs = duration.as_secs();
    let nanos = u64::from(duration.subsec_nanos());
    if secs == 0 {
        return if nanos < NANOS_PER_MICRO {
            format!("{nanos}ns")
        } else if nanos < NANOS_PER_MILLI {
            let micros = decimal(
                nanos.div_euclid(NANOS_PER_MICRO),
                nanos.rem_euclid(NANOS_PER_MICRO),
                3,
            );
            format!("{micros}µs")
        } else {
            let millis = decimal(
                nanos.div_euclid(NANOS_PER_MILLI),
                nanos.rem_euclid(NANOS_PER_MILLI),
                6,
            );
            format!("{millis}ms")
        };
    }

    let hours = secs.div_euclid(SECONDS_PER_HOUR);
    let minutes = secs
        .rem_euclid(SECONDS_PER_HOUR)
        .div_euclid(SECONDS_PER_MINUTE);
    let seconds = decimal(secs.rem_euclid(SECONDS_PER_MINUTE), nanos, 9);
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

fn decimal(whole: u64, fraction: u64, width: usize) -> String {
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

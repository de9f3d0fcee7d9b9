//! Typed values carried by flags.
//!
//! [`FlagValue`] ties each supported Rust scalar to its [`FlagKind`], its
//! zero value and its literal grammar. The binder uses it to resolve
//! defaults from metadata and the clap engine uses it to parse tokens and
//! environment values, so both sides accept exactly the same literals.

mod boolean;
mod duration;

use std::fmt;
use std::num::FpCategory;
use std::time::Duration;

use thiserror::Error;

use crate::model::FlagKind;

pub use boolean::parse_bool;
pub use duration::{DurationError, format_duration, parse_duration};

/// A literal that could not be parsed for a flag kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value `{value}`: {reason}")]
pub struct ValueError {
    kind: FlagKind,
    value: String,
    reason: String,
}

impl ValueError {
    pub(crate) fn new(kind: FlagKind, value: &str, reason: impl fmt::Display) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            reason: reason.to_string(),
        }
    }

    /// Kind the literal was parsed for.
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        self.kind
    }

    /// The rejected literal.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Why the literal was rejected.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A scalar type that can back a flag.
///
/// Implemented for exactly the eight supported kinds: `bool`, `String`,
/// [`Duration`], `f64`, `i32`, `i64`, `u32` and `u64`.
pub trait FlagValue: Clone + fmt::Debug + Send + Sync + 'static {
    /// Flag kind selected by this type.
    const KIND: FlagKind;

    /// Returns `true` for the type's zero value.
    fn is_zero(&self) -> bool;

    /// Parses a literal from metadata, the command line or the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when `raw` is not a valid literal for the
    /// kind.
    fn parse_literal(raw: &str) -> Result<Self, ValueError>;

    /// Renders the value so that [`FlagValue::parse_literal`] reads it back.
    fn render(&self) -> String;
}

impl FlagValue for bool {
    const KIND: FlagKind = FlagKind::Bool;

    fn is_zero(&self) -> bool {
        !*self
    }

    fn parse_literal(raw: &str) -> Result<Self, ValueError> {
        parse_bool(raw).ok_or_else(|| ValueError::new(Self::KIND, raw, "expected true or false"))
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl FlagValue for String {
    const KIND: FlagKind = FlagKind::String;

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn parse_literal(raw: &str) -> Result<Self, ValueError> {
        Ok(raw.to_owned())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl FlagValue for Duration {
    const KIND: FlagKind = FlagKind::Duration;

    fn is_zero(&self) -> bool {
        Duration::is_zero(self)
    }

    fn parse_literal(raw: &str) -> Result<Self, ValueError> {
        parse_duration(raw).map_err(|err| ValueError::new(Self::KIND, raw, err))
    }

    fn render(&self) -> String {
        format_duration(*self)
    }
}

impl FlagValue for f64 {
    const KIND: FlagKind = FlagKind::Float64;

    fn is_zero(&self) -> bool {
        self.classify() == FpCategory::Zero
    }

    fn parse_literal(raw: &str) -> Result<Self, ValueError> {
        let value: Self = raw
            .parse()
            .map_err(|err| ValueError::new(Self::KIND, raw, err))?;
        if value.is_infinite() && !spells_infinity(raw) {
            return Err(ValueError::new(Self::KIND, raw, "value out of range"));
        }
        Ok(value)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// Whether `raw` names infinity rather than overflowing into it.
fn spells_infinity(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

macro_rules! integer_flag_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl FlagValue for $ty {
                const KIND: FlagKind = FlagKind::$kind;

                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn parse_literal(raw: &str) -> Result<Self, ValueError> {
                    raw.parse()
                        .map_err(|err| ValueError::new(Self::KIND, raw, err))
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_flag_value!(i32 => Int, i64 => Int64, u32 => Uint, u64 => Uint64);

#[cfg(test)]
mod tests;

//! Flag descriptors.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::FlagSummary;
use crate::value::FlagValue;

/// The fixed set of flag kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    /// `bool`.
    Bool,
    /// `String`.
    String,
    /// [`Duration`].
    Duration,
    /// `f64`.
    Float64,
    /// `i32`.
    Int,
    /// `i64`.
    Int64,
    /// `u32`.
    Uint,
    /// `u64`.
    Uint64,
}

impl FlagKind {
    /// Lower-case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::String => "string",
            Self::Duration => "duration",
            Self::Float64 => "float64",
            Self::Int => "int",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint64 => "uint64",
        }
    }

    /// String form of the kind's zero value.
    ///
    /// A `value` metadata literal equal to this string never sets a default.
    #[must_use]
    pub const fn zero_literal(self) -> &'static str {
        match self {
            Self::Bool => "false",
            Self::String => "",
            Self::Duration => "0s",
            Self::Float64 | Self::Int | Self::Int64 | Self::Uint | Self::Uint64 => "0",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a flag name into its comma-separated aliases.
///
/// Parts are trimmed and empty parts are dropped, so `"path, p"` yields
/// `path` and `p`.
pub(crate) fn split_names(name: &str) -> impl Iterator<Item = &str> {
    name.split(',').map(str::trim).filter(|part| !part.is_empty())
}

/// A flag of one concrete kind bound to a destination.
#[derive(Debug)]
pub struct TypedFlag<'a, T> {
    name: String,
    usage: String,
    env_var: Option<String>,
    hidden: bool,
    default: Option<T>,
    destination: &'a mut T,
}

impl<'a, T: FlagValue> TypedFlag<'a, T> {
    /// Creates a flag.
    ///
    /// `env_var` of `None` binds no environment variable. `default` of
    /// `None` leaves the destination untouched unless the flag is supplied.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        usage: impl Into<String>,
        env_var: Option<String>,
        hidden: bool,
        default: Option<T>,
        destination: &'a mut T,
    ) -> Self {
        Self {
            name: name.into(),
            usage: usage.into(),
            env_var,
            hidden,
            default,
            destination,
        }
    }

    /// Full flag name, possibly a comma-separated alias list.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text; empty when none was given.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Environment variable that can also supply the value.
    #[must_use]
    pub fn env_var(&self) -> Option<&str> {
        self.env_var.as_deref()
    }

    /// Whether the flag is left out of help output.
    #[must_use]
    pub const fn hidden(&self) -> bool {
        self.hidden
    }

    /// Default applied when neither the command line nor the environment
    /// supplies a value.
    #[must_use]
    pub const fn default(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// Reads the bound destination.
    #[must_use]
    pub fn current(&self) -> &T {
        &*self.destination
    }

    /// Writes a parsed value through to the bound destination.
    pub fn assign(&mut self, value: T) {
        *self.destination = value;
    }
}

/// A flag of any supported kind.
#[derive(Debug)]
pub enum Flag<'a> {
    /// Boolean switch.
    Bool(TypedFlag<'a, bool>),
    /// Free-form string.
    String(TypedFlag<'a, String>),
    /// Duration literal such as `1h30m`.
    Duration(TypedFlag<'a, Duration>),
    /// 64-bit float.
    Float64(TypedFlag<'a, f64>),
    /// 32-bit signed integer.
    Int(TypedFlag<'a, i32>),
    /// 64-bit signed integer.
    Int64(TypedFlag<'a, i64>),
    /// 32-bit unsigned integer.
    Uint(TypedFlag<'a, u32>),
    /// 64-bit unsigned integer.
    Uint64(TypedFlag<'a, u64>),
}

/// Runs `$body` with `$typed` bound to the inner [`TypedFlag`].
macro_rules! each_flag {
    ($flag:expr, $typed:ident => $body:expr) => {
        match $flag {
            $crate::model::Flag::Bool($typed) => $body,
            $crate::model::Flag::String($typed) => $body,
            $crate::model::Flag::Duration($typed) => $body,
            $crate::model::Flag::Float64($typed) => $body,
            $crate::model::Flag::Int($typed) => $body,
            $crate::model::Flag::Int64($typed) => $body,
            $crate::model::Flag::Uint($typed) => $body,
            $crate::model::Flag::Uint64($typed) => $body,
        }
    };
}

pub(crate) use each_flag;

macro_rules! flag_from_typed {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<TypedFlag<'a, $ty>> for Flag<'a> {
                fn from(flag: TypedFlag<'a, $ty>) -> Self {
                    Self::$variant(flag)
                }
            }
        )*
    };
}

flag_from_typed!(
    bool => Bool,
    String => String,
    Duration => Duration,
    f64 => Float64,
    i32 => Int,
    i64 => Int64,
    u32 => Uint,
    u64 => Uint64,
);

impl Flag<'_> {
    /// Kind of the flag.
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        match self {
            Self::Bool(_) => FlagKind::Bool,
            Self::String(_) => FlagKind::String,
            Self::Duration(_) => FlagKind::Duration,
            Self::Float64(_) => FlagKind::Float64,
            Self::Int(_) => FlagKind::Int,
            Self::Int64(_) => FlagKind::Int64,
            Self::Uint(_) => FlagKind::Uint,
            Self::Uint64(_) => FlagKind::Uint64,
        }
    }

    /// Full flag name, possibly a comma-separated alias list.
    #[must_use]
    pub fn name(&self) -> &str {
        each_flag!(self, typed => typed.name())
    }

    /// The individual aliases of [`Flag::name`].
    pub fn names(&self) -> impl Iterator<Item = &str> {
        split_names(self.name())
    }

    /// Help text; empty when none was given.
    #[must_use]
    pub fn usage(&self) -> &str {
        each_flag!(self, typed => typed.usage())
    }

    /// Environment variable that can also supply the value.
    #[must_use]
    pub fn env_var(&self) -> Option<&str> {
        each_flag!(self, typed => typed.env_var())
    }

    /// Whether the flag is left out of help output.
    #[must_use]
    pub fn hidden(&self) -> bool {
        each_flag!(self, typed => typed.hidden())
    }

    /// Default rendered as a literal of the flag's kind.
    #[must_use]
    pub fn default_value(&self) -> Option<String> {
        each_flag!(self, typed => typed.default().map(FlagValue::render))
    }

    /// Owned snapshot of the flag's descriptive attributes.
    #[must_use]
    pub fn summary(&self) -> FlagSummary {
        FlagSummary {
            kind: self.kind(),
            name: self.name().to_owned(),
            usage: self.usage().to_owned(),
            env_var: self.env_var().map(ToOwned::to_owned),
            hidden: self.hidden(),
            default: self.default_value(),
        }
    }
}

//! Owned snapshots of a bound command tree.
//!
//! Summaries drop the destinations, so they can outlive the configuration
//! borrow, be compared across builds, and be serialised for display.

use serde::Serialize;

use super::FlagKind;

/// Descriptive attributes of one flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagSummary {
    /// Flag kind.
    pub kind: FlagKind,
    /// Full name, possibly a comma-separated alias list.
    pub name: String,
    /// Help text.
    pub usage: String,
    /// Bound environment variable.
    pub env_var: Option<String>,
    /// Whether help output omits the flag.
    pub hidden: bool,
    /// Default rendered as a literal.
    pub default: Option<String>,
}

/// A command and everything below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSummary {
    /// Command name.
    pub name: String,
    /// Help text.
    pub usage: String,
    /// Flags in binding order.
    pub flags: Vec<FlagSummary>,
    /// Child commands.
    pub subcommands: Vec<CommandSummary>,
}

/// A whole application tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSummary {
    /// Application name.
    pub name: String,
    /// Help text.
    pub usage: String,
    /// Version string.
    pub version: Option<String>,
    /// Root flags in binding order.
    pub flags: Vec<FlagSummary>,
    /// Top-level commands.
    pub commands: Vec<CommandSummary>,
}

impl FlagSummary {
    fn without_default(mut self) -> Self {
        self.default = None;
        self
    }
}

impl CommandSummary {
    fn without_defaults(self) -> Self {
        Self {
            flags: self.flags.into_iter().map(FlagSummary::without_default).collect(),
            subcommands: self
                .subcommands
                .into_iter()
                .map(Self::without_defaults)
                .collect(),
            ..self
        }
    }
}

impl AppSummary {
    /// Returns the summary with every flag default cleared.
    ///
    /// Two builds over the same struct type produce equal structures even
    /// when the struct's in-memory values (and hence defaults) differ.
    #[must_use]
    pub fn structure(self) -> Self {
        Self {
            flags: self.flags.into_iter().map(FlagSummary::without_default).collect(),
            commands: self
                .commands
                .into_iter()
                .map(CommandSummary::without_defaults)
                .collect(),
            ..self
        }
    }
}

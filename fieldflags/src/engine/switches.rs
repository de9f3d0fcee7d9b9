//! Switch bookkeeping for one clap command.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::Flag;
use crate::{FieldFlagsError, FieldFlagsResult};

/// One command-line switch of a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Switch {
    /// `-p`
    Short(char),
    /// `--path`
    Long(String),
}

impl Switch {
    fn parse(part: &str) -> Option<Self> {
        if part.starts_with('-') {
            return None;
        }
        let mut chars = part.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Self::Short(c)),
            (Some(_), Some(_)) => Some(Self::Long(part.to_owned())),
            (None, _) => None,
        }
    }

    /// Alias text without dashes.
    pub(super) fn id(&self) -> String {
        match self {
            Self::Short(c) => c.to_string(),
            Self::Long(name) => name.clone(),
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short(c) => write!(f, "-{c}"),
            Self::Long(name) => write!(f, "--{name}"),
        }
    }
}

/// Switches already claimed within one command.
#[derive(Debug, Default)]
pub(super) struct SwitchSet(BTreeSet<String>);

impl SwitchSet {
    /// A set holding clap's help switches.
    pub(super) fn help() -> Self {
        let mut set = Self::default();
        set.0.insert("--help".to_owned());
        set.0.insert("-h".to_owned());
        set
    }

    /// Adds clap's version switches.
    pub(super) fn reserve_version(&mut self) {
        self.0.insert("--version".to_owned());
        self.0.insert("-V".to_owned());
    }

    /// Claims every switch of `flag` for the command `command`.
    pub(super) fn claim(&mut self, command: &str, flag: &Flag<'_>) -> FieldFlagsResult<Vec<Switch>> {
        let invalid = || FieldFlagsError::InvalidFlagName {
            command: command.to_owned(),
            flag: flag.name().to_owned(),
        };
        let switches = flag
            .names()
            .map(Switch::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;
        if switches.is_empty() {
            return Err(invalid());
        }
        for switch in &switches {
            let rendered = switch.to_string();
            if !self.0.insert(rendered.clone()) {
                return Err(FieldFlagsError::DuplicateFlag {
                    command: command.to_owned(),
                    flag: rendered,
                });
            }
        }
        Ok(switches)
    }
}

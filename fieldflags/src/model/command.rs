//! Command tree nodes.

use super::{AppSummary, CommandSummary, Flag};
use crate::{Diagnostics, FieldFlagsResult, Introspect};

fn find_flag<'f, 'a>(flags: &'f [Flag<'a>], name: &str) -> Option<&'f Flag<'a>> {
    flags
        .iter()
        .find(|flag| flag.name() == name || flag.names().any(|alias| alias == name))
}

/// A named command with its own flags and child commands.
#[derive(Debug)]
pub struct Command<'a> {
    pub(crate) name: String,
    pub(crate) usage: String,
    pub(crate) flags: Vec<Flag<'a>>,
    pub(crate) subcommands: Vec<Command<'a>>,
}

impl<'a> Command<'a> {
    /// Creates an empty command.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: String::new(),
            flags: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    /// Sets the help text.
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Seeds a flag ahead of binding.
    #[must_use]
    pub fn with_flag(mut self, flag: impl Into<Flag<'a>>) -> Self {
        self.flags.push(flag.into());
        self
    }

    /// Adds a child command.
    #[must_use]
    pub fn with_subcommand(mut self, command: Self) -> Self {
        self.subcommands.push(command);
        self
    }

    /// Command name as typed on the command line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text; empty when none was given.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Flags in binding order.
    #[must_use]
    pub fn flags(&self) -> &[Flag<'a>] {
        &self.flags
    }

    /// Looks a flag up by its full name or any alias.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&Flag<'a>> {
        find_flag(&self.flags, name)
    }

    /// Child commands in declaration order.
    #[must_use]
    pub fn subcommands(&self) -> &[Self] {
        &self.subcommands
    }

    /// Looks a child command up by exact name.
    #[must_use]
    pub fn subcommand(&self, name: &str) -> Option<&Self> {
        self.subcommands.iter().find(|command| command.name == name)
    }

    /// Owned snapshot of the command and everything below it.
    #[must_use]
    pub fn summary(&self) -> CommandSummary {
        CommandSummary {
            name: self.name.clone(),
            usage: self.usage.clone(),
            flags: self.flags.iter().map(Flag::summary).collect(),
            subcommands: self.subcommands.iter().map(Self::summary).collect(),
        }
    }
}

/// Root of a command tree.
///
/// The application name doubles as the first segment of every derived
/// environment variable name.
///
/// # Examples
///
/// ```
/// use fieldflags::{App, Command, Introspect};
///
/// #[derive(Default, Introspect)]
/// struct Conf {
///     verbose: bool,
///     start: Start,
/// }
///
/// #[derive(Default, Introspect)]
/// struct Start {
///     #[fieldflags(name = "path,p", value = "/tmp")]
///     path: String,
/// }
///
/// let mut conf = Conf::default();
/// let mut app = App::new("gistcli").with_command(Command::new("start"));
/// let diagnostics = app.bind(&mut conf)?;
/// assert!(diagnostics.is_empty());
/// assert!(app.flag("verbose").is_some());
/// assert_eq!(
///     app.command("start").and_then(|c| c.flag("p")).and_then(|f| f.env_var()),
///     Some("GISTCLI_START_PATH"),
/// );
/// # Ok::<(), fieldflags::FieldFlagsError>(())
/// ```
#[derive(Debug)]
pub struct App<'a> {
    pub(crate) name: String,
    pub(crate) usage: String,
    pub(crate) version: Option<String>,
    pub(crate) flags: Vec<Flag<'a>>,
    pub(crate) commands: Vec<Command<'a>>,
}

impl<'a> App<'a> {
    /// Creates an application with no flags or commands.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: String::new(),
            version: None,
            flags: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Sets the help text.
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Sets the version reported by `--version`.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Seeds a root flag ahead of binding.
    #[must_use]
    pub fn with_flag(mut self, flag: impl Into<Flag<'a>>) -> Self {
        self.flags.push(flag.into());
        self
    }

    /// Adds a top-level command.
    #[must_use]
    pub fn with_command(mut self, command: Command<'a>) -> Self {
        self.commands.push(command);
        self
    }

    /// Application name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text; empty when none was given.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Version string, if any.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Root flags in binding order.
    #[must_use]
    pub fn flags(&self) -> &[Flag<'a>] {
        &self.flags
    }

    /// Looks a root flag up by its full name or any alias.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&Flag<'a>> {
        find_flag(&self.flags, name)
    }

    /// Top-level commands in declaration order.
    #[must_use]
    pub fn commands(&self) -> &[Command<'a>] {
        &self.commands
    }

    /// Looks a top-level command up by exact name.
    #[must_use]
    pub fn command(&self, name: &str) -> Option<&Command<'a>> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Binds the fields of `config` into this tree.
    ///
    /// See [`crate::build`].
    ///
    /// # Errors
    ///
    /// Returns an error when the fields of `config` cannot be enumerated.
    pub fn bind<C>(&mut self, config: &'a mut C) -> FieldFlagsResult<Diagnostics>
    where
        C: Introspect + ?Sized,
    {
        crate::build(self, config)
    }

    /// Owned snapshot of the whole tree.
    #[must_use]
    pub fn summary(&self) -> AppSummary {
        AppSummary {
            name: self.name.clone(),
            usage: self.usage.clone(),
            version: self.version.clone(),
            flags: self.flags.iter().map(Flag::summary).collect(),
            commands: self.commands.iter().map(Command::summary).collect(),
        }
    }
}

//! Command-line parsing through `clap`.
//!
//! The engine turns a bound [`App`] into a [`clap::Command`], lets clap
//! tokenise the arguments, render help and consult environment variables,
//! then writes every value found on the selected command path back through
//! the flag destinations. Values are parsed with [`FlagValue::parse_literal`],
//! the same grammar the binder uses for `value` metadata.

mod switches;

use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches};

use crate::model::{App, Command, Flag, FlagKind, TypedFlag, each_flag};
use crate::value::FlagValue;
use crate::FieldFlagsResult;

use switches::{Switch, SwitchSet};

/// The command path selected on the command line.
///
/// Returned by [`App::try_run_from`] once every parsed value has been
/// written back, so callers dispatch on it after the configuration borrow
/// is released.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    path: Vec<String>,
}

impl Invocation {
    /// Selected command names from the root down, for example
    /// `["start", "server"]`. Empty when no command was given.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Innermost selected command.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Whether the root application was invoked without a command.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the selected path equals `path`.
    #[must_use]
    pub fn is(&self, path: &[&str]) -> bool {
        self.path.len() == path.len() && self.path.iter().zip(path).all(|(a, b)| a == b)
    }
}

impl App<'_> {
    /// Builds the clap command for this tree.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateFlag`] when two flags of one command claim the
    /// same switch, or claim `--help`/`-h` (and `--version`/`-V` on an app
    /// with a version). Returns [`InvalidFlagName`] for a flag without a
    /// usable name.
    ///
    /// [`DuplicateFlag`]: crate::FieldFlagsError::DuplicateFlag
    /// [`InvalidFlagName`]: crate::FieldFlagsError::InvalidFlagName
    pub fn to_clap(&self) -> FieldFlagsResult<clap::Command> {
        let mut reserved = SwitchSet::help();
        let mut cmd = clap::Command::new(self.name.clone());
        if !self.usage.is_empty() {
            cmd = cmd.about(self.usage.clone());
        }
        if let Some(version) = &self.version {
            reserved.reserve_version();
            cmd = cmd.version(version.clone());
        }
        cmd = with_args(cmd, &self.name, &self.flags, reserved)?;
        for command in &self.commands {
            cmd = cmd.subcommand(command_to_clap(command)?);
        }
        Ok(cmd)
    }

    /// Parses `args` and writes the values into the bound destinations.
    ///
    /// `args` starts with the binary name, as [`std::env::args_os`] does.
    /// Only flags of the root and of the selected command path are written;
    /// a flag is written when the command line, its environment variable or
    /// its default supplies a value.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`App::to_clap`], and [`CliParsing`] when clap
    /// rejects the arguments or the user asked for help or the version.
    /// Check [`is_display_request`] to tell the two apart.
    ///
    /// [`CliParsing`]: crate::FieldFlagsError::CliParsing
    /// [`is_display_request`]: crate::FieldFlagsError::is_display_request
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldflags::{App, Introspect};
    ///
    /// #[derive(Introspect, Default)]
    /// struct Conf {
    ///     port: u32,
    ///     verbose: bool,
    /// }
    ///
    /// let mut conf = Conf::default();
    /// let mut app = App::new("demo");
    /// app.bind(&mut conf)?;
    /// let invocation = app.try_run_from(["demo", "--port", "8080", "--verbose"])?;
    /// assert!(invocation.is_root());
    /// assert_eq!(conf.port, 8080);
    /// assert!(conf.verbose);
    /// # Ok::<(), fieldflags::FieldFlagsError>(())
    /// ```
    pub fn try_run_from<I, T>(mut self, args: I) -> FieldFlagsResult<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.to_clap()?.try_get_matches_from(args)?;
        write_flags(&mut self.flags, &matches)?;
        let mut path = Vec::new();
        if let Some((name, sub_matches)) = matches.subcommand() {
            if let Some(command) = self.commands.iter_mut().find(|c| c.name == name) {
                write_command(command, sub_matches, &mut path)?;
            }
        }
        tracing::debug!(app = %self.name, path = ?path, "parsed command line");
        Ok(Invocation { path })
    }

    /// Parses the process arguments.
    ///
    /// # Errors
    ///
    /// See [`App::try_run_from`].
    pub fn try_run(self) -> FieldFlagsResult<Invocation> {
        self.try_run_from(std::env::args_os())
    }
}

fn command_to_clap(command: &Command<'_>) -> FieldFlagsResult<clap::Command> {
    let mut cmd = clap::Command::new(command.name.clone());
    if !command.usage.is_empty() {
        cmd = cmd.about(command.usage.clone());
    }
    cmd = with_args(cmd, &command.name, &command.flags, SwitchSet::help())?;
    for sub in &command.subcommands {
        cmd = cmd.subcommand(command_to_clap(sub)?);
    }
    Ok(cmd)
}

fn with_args(
    mut cmd: clap::Command,
    command_name: &str,
    flags: &[Flag<'_>],
    mut claimed: SwitchSet,
) -> FieldFlagsResult<clap::Command> {
    for flag in flags {
        let switches = claimed.claim(command_name, flag)?;
        let arg = each_flag!(flag, typed => to_arg(typed, &switches));
        cmd = cmd.arg(arg);
    }
    Ok(cmd)
}

/// Arg id of a flag: its first alias.
fn arg_id<'f>(flag: &'f Flag<'_>) -> Option<&'f str> {
    flag.names().next()
}

fn to_arg<T: FlagValue>(flag: &TypedFlag<'_, T>, switches: &[Switch]) -> Arg {
    let mut arg = Arg::new(switches.first().map(Switch::id).unwrap_or_default())
        .value_parser(T::parse_literal)
        .hide(flag.hidden());

    let mut has_short = false;
    let mut has_long = false;
    for switch in switches {
        match *switch {
            Switch::Short(c) if has_short => arg = arg.visible_short_alias(c),
            Switch::Short(c) => {
                arg = arg.short(c);
                has_short = true;
            }
            Switch::Long(ref name) if has_long => arg = arg.visible_alias(name.clone()),
            Switch::Long(ref name) => {
                arg = arg.long(name.clone());
                has_long = true;
            }
        }
    }

    if !flag.usage().is_empty() {
        arg = arg.help(flag.usage().to_owned());
    }
    if let Some(env) = flag.env_var() {
        arg = arg.env(env.to_owned());
    }
    if let Some(default) = flag.default() {
        arg = arg.default_value(default.render());
    }

    if matches!(T::KIND, FlagKind::Int | FlagKind::Int64 | FlagKind::Float64) {
        arg = arg.allow_negative_numbers(true);
    }

    if T::KIND == FlagKind::Bool {
        arg.action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
    } else {
        arg.action(ArgAction::Set)
            .value_name(T::KIND.as_str().to_uppercase())
    }
}

fn write_command(
    command: &mut Command<'_>,
    matches: &ArgMatches,
    path: &mut Vec<String>,
) -> FieldFlagsResult<()> {
    path.push(command.name.clone());
    write_flags(&mut command.flags, matches)?;
    if let Some((name, sub_matches)) = matches.subcommand() {
        if let Some(sub) = command.subcommands.iter_mut().find(|c| c.name == name) {
            write_command(sub, sub_matches, path)?;
        }
    }
    Ok(())
}

fn write_flags(flags: &mut [Flag<'_>], matches: &ArgMatches) -> FieldFlagsResult<()> {
    for flag in flags {
        let Some(id) = arg_id(flag).map(ToOwned::to_owned) else {
            continue;
        };
        each_flag!(flag, typed => write_back(typed, &id, matches))?;
    }
    Ok(())
}

fn write_back<T: FlagValue>(
    flag: &mut TypedFlag<'_, T>,
    id: &str,
    matches: &ArgMatches,
) -> FieldFlagsResult<()> {
    if let Some(value) = matches.try_get_one::<T>(id)? {
        flag.assign(value.clone());
    }
    Ok(())
}

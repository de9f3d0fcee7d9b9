//! Binding of introspected fields into a command tree.
//!
//! [`build`] walks the fields of a configuration struct in name order and
//! decides, per field, between three outcomes:
//!
//! * the field names an existing command, so its children bind into that
//!   command's flags and subcommands;
//! * the field is a scalar, so it becomes a flag in the current list;
//! * the field is a nested struct, so its children bind into the current
//!   list with the field name as prefix.
//!
//! Attribute problems are collected as [`Diagnostics`] instead of aborting.

mod defaults;
mod naming;

use crate::diagnostics::{Attribute, Diagnostic, Diagnostics};
use crate::introspect::{FieldMap, Metadata, Slot, keys};
use crate::model::{App, Command, Flag, TypedFlag, split_names};
use crate::value::{FlagValue, parse_bool};
use crate::{FieldFlagsResult, Introspect};

/// Binds every field of `config` into `app`.
///
/// Flags borrow their destinations from `config`, so the struct stays
/// mutably borrowed until `app` is dropped or run. Commands already present
/// in `app` receive the flags of the like-named fields; no command is ever
/// created. The app name seeds derived environment variables.
///
/// # Errors
///
/// Returns an error only when the fields of `config` cannot be enumerated.
/// Malformed attributes are reported through the returned [`Diagnostics`].
///
/// # Examples
///
/// ```
/// use fieldflags::{App, Introspect, build};
///
/// #[derive(Introspect)]
/// struct Conf {
///     #[fieldflags(value = "33")]
///     retries: i32,
/// }
///
/// let mut conf = Conf { retries: 0 };
/// let mut app = App::new("demo");
/// let diagnostics = build(&mut app, &mut conf)?;
/// assert!(diagnostics.is_empty());
/// let flag = app.flag("retries").expect("bound flag");
/// assert_eq!(flag.env_var(), Some("DEMO_RETRIES"));
/// assert_eq!(flag.default_value().as_deref(), Some("33"));
/// # Ok::<(), fieldflags::FieldFlagsError>(())
/// ```
pub fn build<'a, C>(app: &mut App<'a>, config: &'a mut C) -> FieldFlagsResult<Diagnostics>
where
    C: Introspect + ?Sized,
{
    let fields = config.fields()?;
    tracing::debug!(app = %app.name, config = fields.type_name(), "binding fields");
    let mut binder = Binder {
        app_name: app.name.clone(),
        diagnostics: Diagnostics::new(),
    };
    binder.process(&Scope::default(), fields, &mut app.commands, &mut app.flags);
    Ok(binder.diagnostics)
}

/// Where a field map is being bound.
#[derive(Debug, Default)]
struct Scope {
    /// Name prefix for conventional flag names.
    prefix: String,
    /// Command whose name joins derived environment variables.
    command: String,
    /// Dotted path of the enclosing field.
    path: String,
}

impl Scope {
    fn child_path(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_owned()
        } else {
            format!("{}.{field}", self.path)
        }
    }
}

/// Flag attributes shared by every kind.
struct SharedParts {
    name: String,
    usage: String,
    env_var: Option<String>,
    hidden: bool,
}

struct Binder {
    app_name: String,
    diagnostics: Diagnostics,
}

impl Binder {
    fn process<'a>(
        &mut self,
        scope: &Scope,
        fields: FieldMap<'a>,
        commands: &mut [Command<'a>],
        flags: &mut Vec<Flag<'a>>,
    ) {
        for (key, field) in fields {
            let path = scope.child_path(&key);
            let (metadata, slot) = field.into_parts();
            self.report_unknown_keys(&path, &metadata);

            if let Some(command) = commands
                .iter_mut()
                .find(|command| naming::matches_command(&command.name, &key))
            {
                self.bind_command(command, path, slot);
                continue;
            }

            let flag: Flag<'a> = match slot {
                Slot::Bool(destination) => self.typed_flag(scope, &path, &key, &metadata, destination).into(),
                Slot::String(destination) => self.typed_flag(scope, &path, &key, &metadata, destination).into(),
                Slot::Duration(destination) => self.typed_flag(scope, &path, &key, &metadata, destination).into(),
                Slot::Float64(destination) => self.typed_flag(scope, &path, &key, &metadata, destination).into(),
                Slot::Int(destination) => self.typed_flag(scope, &path, &key, &metadata, destination).into(),
                Slot::Int64(destination) => self.typed_flag(scope, &path, &key, &metadata, destination).into(),
                Slot::Uint(destination) => self.typed_flag(scope, &path, &key, &metadata, destination).into(),
                Slot::Uint64(destination) => self.typed_flag(scope, &path, &key, &metadata, destination).into(),
                Slot::Nested(children) => {
                    // Prefix groups merge into the current list; any command
                    // structure below them has nowhere to go.
                    let inner = Scope {
                        prefix: key,
                        command: String::new(),
                        path,
                    };
                    self.process(&inner, children, &mut [], flags);
                    continue;
                }
            };
            flags.push(flag);
        }
    }

    fn bind_command<'a>(&mut self, command: &mut Command<'a>, path: String, slot: Slot<'a>) {
        let children = match slot {
            Slot::Nested(children) => children,
            scalar => {
                let kind = scalar.kind().map_or("nested", |kind| kind.as_str());
                self.diagnostics.push(Diagnostic::new(
                    path,
                    Attribute::Destination,
                    kind,
                    format!(
                        "scalar field matches command `{}` and binds no flag",
                        command.name
                    ),
                ));
                return;
            }
        };
        tracing::debug!(command = %command.name, field = %path, "binding command fields");
        let inner = Scope {
            prefix: String::new(),
            command: command.name.clone(),
            path,
        };
        self.process(&inner, children, &mut command.subcommands, &mut command.flags);
    }

    fn typed_flag<'a, T: FlagValue>(
        &mut self,
        scope: &Scope,
        path: &str,
        field: &str,
        metadata: &Metadata,
        destination: &'a mut T,
    ) -> TypedFlag<'a, T> {
        let parts = self.shared_parts(scope, path, field, metadata);
        let literal = metadata.get(keys::VALUE);
        let default = match defaults::resolve(&*destination, literal) {
            Ok(default) => default,
            Err(err) => {
                self.diagnostics.push(Diagnostic::new(
                    path,
                    Attribute::Value,
                    literal.unwrap_or_default(),
                    err,
                ));
                None
            }
        };
        tracing::debug!(
            flag = %parts.name,
            kind = %T::KIND,
            command = %scope.command,
            env = parts.env_var.as_deref().unwrap_or("-"),
            "bound flag"
        );
        TypedFlag::new(
            parts.name,
            parts.usage,
            parts.env_var,
            parts.hidden,
            default,
            destination,
        )
    }

    fn shared_parts(&mut self, scope: &Scope, path: &str, field: &str, metadata: &Metadata) -> SharedParts {
        let name = match metadata.get(keys::NAME) {
            Some(name) if split_names(name).next().is_some() => name.to_owned(),
            Some(name) => {
                self.diagnostics.push(Diagnostic::new(
                    path,
                    Attribute::Name,
                    name,
                    "name override has no usable alias",
                ));
                naming::flag_name(&scope.prefix, field)
            }
            None => naming::flag_name(&scope.prefix, field),
        };

        let usage = metadata.get(keys::USAGE).unwrap_or_default().to_owned();

        let env_var = match metadata.get(keys::ENVVAR) {
            Some("-") => None,
            Some(env) if !env.is_empty() => Some(env.to_owned()),
            _ => naming::env_var(&self.app_name, &scope.command, &name),
        };

        let hidden = metadata.get(keys::HIDDEN).is_some_and(|raw| {
            parse_bool(raw).unwrap_or_else(|| {
                self.diagnostics.push(Diagnostic::new(
                    path,
                    Attribute::Hidden,
                    raw,
                    "expected true or false",
                ));
                false
            })
        });

        SharedParts {
            name,
            usage,
            env_var,
            hidden,
        }
    }

    fn report_unknown_keys(&mut self, path: &str, metadata: &Metadata) {
        for key in metadata.unknown_keys() {
            self.diagnostics.push(Diagnostic::new(
                path,
                Attribute::Metadata,
                key,
                "unrecognised metadata key",
            ));
        }
    }
}

//! Flag names, environment variables and command matching.

use crate::model::split_names;

/// Maps a field name to its flag form: lower case, `_` as `-`.
fn flag_case(raw: &str) -> String {
    raw.to_lowercase().replace('_', "-")
}

/// Computes the conventional flag name of `field` inside `prefix`.
pub(super) fn flag_name(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        flag_case(field)
    } else {
        format!("{}-{}", flag_case(prefix), flag_case(field))
    }
}

/// Longest alias of `name`; the first wins a tie.
pub(super) fn longest_alias(name: &str) -> &str {
    split_names(name).fold("", |best, part| {
        if part.len() > best.len() { part } else { best }
    })
}

/// Derives the environment variable for a flag called `name`.
///
/// Returns `None` when every part is empty.
pub(super) fn env_var(app: &str, command: &str, name: &str) -> Option<String> {
    let joined = [app, command, longest_alias(name)]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if joined.is_empty() {
        return None;
    }
    Some(joined.replace('-', "_").to_uppercase())
}

/// Whether the field `field` selects the command called `command`.
///
/// Matching ignores case and treats `_` as `-` on both sides.
pub(super) fn matches_command(command: &str, field: &str) -> bool {
    fn fold(raw: &str) -> impl Iterator<Item = char> + '_ {
        raw.chars()
            .map(|c| if c == '_' { '-' } else { c })
            .flat_map(char::to_lowercase)
    }
    fold(command).eq(fold(field))
}

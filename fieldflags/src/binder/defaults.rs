//! Default value resolution.

use crate::value::{FlagValue, ValueError};

/// Picks the default for a flag whose destination currently holds `current`.
///
/// A non-zero `current` always wins. Otherwise a `literal` that differs from
/// the kind's zero literal is parsed. Anything else leaves the flag without a
/// default.
///
/// # Errors
///
/// Returns the parse failure of `literal`; the caller records it and binds
/// the flag without a default.
pub(super) fn resolve<T: FlagValue>(current: &T, literal: Option<&str>) -> Result<Option<T>, ValueError> {
    if !current.is_zero() {
        return Ok(Some(current.clone()));
    }
    match literal {
        Some(raw) if raw != T::KIND.zero_literal() => T::parse_literal(raw).map(Some),
        _ => Ok(None),
    }
}

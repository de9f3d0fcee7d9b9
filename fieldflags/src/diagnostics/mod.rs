//! Non-fatal problems found while binding fields.
//!
//! A malformed `value` literal or a `hidden` flag that is not a boolean never
//! aborts a build. The binder skips the offending attribute, records a
//! [`Diagnostic`] and carries on; callers inspect the returned
//! [`Diagnostics`] to decide whether the problems matter.

use std::fmt;

/// The field attribute a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// `name` metadata.
    Name,
    /// `hidden` metadata.
    Hidden,
    /// `value` metadata.
    Value,
    /// The field's memory slot.
    Destination,
    /// A metadata key the binder does not recognise.
    Metadata,
}

impl Attribute {
    /// Lower-case attribute name as written in metadata.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Hidden => "hidden",
            Self::Value => "value",
            Self::Destination => "destination",
            Self::Metadata => "metadata",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One skipped attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    field: String,
    attribute: Attribute,
    value: String,
    reason: String,
}

impl Diagnostic {
    pub(crate) fn new(
        field: impl Into<String>,
        attribute: Attribute,
        value: impl Into<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self {
            field: field.into(),
            attribute,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Dotted path of the field, for example `start.path`.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Attribute that was skipped.
    #[must_use]
    pub const fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// Offending raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Why the value was skipped.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field `{}`: ignored {} `{}`: {}",
            self.field, self.attribute, self.value, self.reason
        )
    }
}

/// Diagnostics collected by one build, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records `diagnostic` and logs it at warn level.
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            field = %diagnostic.field,
            attribute = %diagnostic.attribute,
            value = %diagnostic.value,
            "{}",
            diagnostic.reason
        );
        self.0.push(diagnostic);
    }

    /// Iterates over the diagnostics.
    #[must_use = "iterators should be consumed to inspect diagnostics"]
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Diagnostics about `field`.
    pub fn for_field<'d>(&'d self, field: &'d str) -> impl Iterator<Item = &'d Diagnostic> {
        self.0.iter().filter(move |d| d.field == field)
    }

    /// Number of diagnostics.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the build was clean.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {d}", i + 1)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

//! Field introspection.
//!
//! [`Introspect`] enumerates the fields of a configuration struct as a
//! [`FieldMap`]: each entry pairs the field's [`Metadata`] with a [`Slot`],
//! an exclusive handle into the struct's memory. Scalar fields become leaf
//! slots; nested structs become nested maps.
//!
//! `#[derive(Introspect)]` writes the implementation for plain structs.
//! Hand-written implementations can build a [`FieldMap`] directly.

mod metadata;

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::time::Duration;

use crate::model::FlagKind;
use crate::{FieldFlagsError, FieldFlagsResult};

pub use metadata::{Metadata, keys};

/// Types whose fields can be bound to flags.
pub trait Introspect {
    /// Enumerates the fields of `self`.
    ///
    /// # Errors
    ///
    /// Returns an error when the fields cannot be enumerated, for example
    /// when two fields share a name.
    fn fields(&mut self) -> FieldFlagsResult<FieldMap<'_>>;
}

/// Exclusive handle to one field.
#[derive(Debug)]
pub enum Slot<'a> {
    /// `bool` field.
    Bool(&'a mut bool),
    /// `String` field.
    String(&'a mut String),
    /// [`Duration`] field.
    Duration(&'a mut Duration),
    /// `f64` field.
    Float64(&'a mut f64),
    /// `i32` field.
    Int(&'a mut i32),
    /// `i64` field.
    Int64(&'a mut i64),
    /// `u32` field.
    Uint(&'a mut u32),
    /// `u64` field.
    Uint64(&'a mut u64),
    /// Nested struct.
    Nested(FieldMap<'a>),
}

impl Slot<'_> {
    /// Flag kind of a leaf slot; `None` for nested structs.
    #[must_use]
    pub const fn kind(&self) -> Option<FlagKind> {
        match self {
            Self::Bool(_) => Some(FlagKind::Bool),
            Self::String(_) => Some(FlagKind::String),
            Self::Duration(_) => Some(FlagKind::Duration),
            Self::Float64(_) => Some(FlagKind::Float64),
            Self::Int(_) => Some(FlagKind::Int),
            Self::Int64(_) => Some(FlagKind::Int64),
            Self::Uint(_) => Some(FlagKind::Uint),
            Self::Uint64(_) => Some(FlagKind::Uint64),
            Self::Nested(_) => None,
        }
    }
}

/// Conversion of a field into a [`Slot`].
///
/// Implemented for the eight scalar flag types and for every type that
/// implements [`Introspect`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be bound to a flag",
    note = "fields must be bool, String, Duration, f64, i32, i64, u32, u64 or a struct implementing `Introspect`",
    note = "mark the field with `#[fieldflags(skip)]` to leave it out"
)]
pub trait IntoSlot {
    /// Borrows the field as a slot.
    ///
    /// # Errors
    ///
    /// Propagates introspection failures of nested structs.
    fn slot(&mut self) -> FieldFlagsResult<Slot<'_>>;
}

macro_rules! scalar_slot {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl IntoSlot for $ty {
                fn slot(&mut self) -> FieldFlagsResult<Slot<'_>> {
                    Ok(Slot::$variant(self))
                }
            }
        )*
    };
}

scalar_slot!(
    bool => Bool,
    String => String,
    Duration => Duration,
    f64 => Float64,
    i32 => Int,
    i64 => Int64,
    u32 => Uint,
    u64 => Uint64,
);

impl<T: Introspect> IntoSlot for T {
    fn slot(&mut self) -> FieldFlagsResult<Slot<'_>> {
        Ok(Slot::Nested(self.fields()?))
    }
}

/// One introspected field.
#[derive(Debug)]
pub struct Field<'a> {
    metadata: Metadata,
    slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Pairs metadata with a slot.
    #[must_use]
    pub const fn new(metadata: Metadata, slot: Slot<'a>) -> Self {
        Self { metadata, slot }
    }

    /// Declared metadata.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Memory handle.
    #[must_use]
    pub const fn slot(&self) -> &Slot<'a> {
        &self.slot
    }

    /// Child fields of a nested struct.
    #[must_use]
    pub const fn children(&self) -> Option<&FieldMap<'a>> {
        match &self.slot {
            Slot::Nested(children) => Some(children),
            _ => None,
        }
    }

    /// Splits the field into its metadata and slot.
    #[must_use]
    pub fn into_parts(self) -> (Metadata, Slot<'a>) {
        (self.metadata, self.slot)
    }
}

/// Fields of one struct, ordered by name.
#[derive(Debug)]
pub struct FieldMap<'a> {
    type_name: &'static str,
    fields: BTreeMap<String, Field<'a>>,
}

impl<'a> FieldMap<'a> {
    /// Creates an empty map for the type called `type_name`.
    #[must_use]
    pub const fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: BTreeMap::new(),
        }
    }

    /// Adds a field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldFlagsError::DuplicateField`] when `name` is already
    /// present.
    pub fn insert(&mut self, name: impl Into<String>, field: Field<'a>) -> FieldFlagsResult<()> {
        match self.fields.entry(name.into()) {
            btree_map::Entry::Occupied(entry) => Err(FieldFlagsError::DuplicateField {
                type_name: self.type_name.to_owned(),
                field: entry.key().clone(),
            }),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(field);
                Ok(())
            }
        }
    }

    /// Name of the owning type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Looks a field up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field<'a>> {
        self.fields.get(name)
    }

    /// Field names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the map has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for FieldMap<'a> {
    type Item = (String, Field<'a>);
    type IntoIter = btree_map::IntoIter<String, Field<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

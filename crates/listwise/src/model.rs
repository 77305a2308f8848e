//! Module: model
//! Responsibility: static field metadata for record types.
//! Does not own: instance access (`traits::Record`) or path resolution.

///
/// RecordModel
///
/// Declared field facts for one record type. Produced by hand-written
/// `Record` impls or by `#[derive(Record)]`; always `'static`.
///

#[derive(Clone, Copy, Debug)]
pub struct RecordModel {
    pub name: &'static str,
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    /// Case-insensitive field lookup (ASCII fold).
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }
}

///
/// FieldModel
///

#[derive(Clone, Copy, Debug)]
pub struct FieldModel {
    pub name: &'static str,
    pub kind: FieldKind,
}

///
/// FieldKind
///

#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    /// Leaf field producing a scalar `Value`.
    Scalar,

    /// Field whose type is itself a record. The model is reached through a
    /// thunk so that mutually nested record types stay constructible.
    Nested(fn() -> &'static RecordModel),
}

impl FieldKind {
    #[must_use]
    pub const fn is_nested(self) -> bool {
        matches!(self, Self::Nested(_))
    }
}

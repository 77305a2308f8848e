use crate::{
    model::RecordModel,
    value::{Float64, Value},
};
use std::hash::Hash;

///
/// Record
///
/// The field registry contract: static field metadata plus by-name instance
/// access. Implement by hand for per-type registration, or derive it with
/// `#[derive(Record)]`.
///
/// `field` is keyed by the canonical (model) names; case-insensitive
/// matching happens once, at path resolution.
///

pub trait Record {
    /// Static field metadata for this record type.
    fn model() -> &'static RecordModel
    where
        Self: Sized;

    /// Look up a field by its canonical model name.
    fn field(&self, name: &str) -> Option<Field<'_>>;
}

///
/// Field
///
/// One field access result: a scalar value or a nested record.
///

pub enum Field<'a> {
    Value(Value),
    Record(&'a dyn Record),
}

///
/// FieldValue
///
/// Conversion from a concrete field type into the runtime `Value`.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

macro_rules! impl_field_value {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_field_value! {
    bool, Float64, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64,
}

///
/// Identity
///
/// Entities that expose a primary key at the repository boundary.
///

pub trait Identity {
    type Key: Clone + Eq + Hash;

    fn id(&self) -> Self::Key;
}

mod compare;
mod float;
mod rank;


pub use float::Float64;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Value
///
/// Runtime field value produced by record accessors.
///
/// Null → the field's value is Option::None (or carries no ordering key).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Float64(Float64),
    Int(i64),
    /// Ordered list of values. List order is preserved for comparison.
    List(Vec<Self>),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the value is one of the numeric variants supported
    /// by cross-variant numeric comparison.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Float64(_) | Self::Int(_) | Self::Uint(_))
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    ///
    /// COMPARISON
    ///

    /// Stable canonical rank used by the cross-variant fallback order.
    #[must_use]
    pub(crate) const fn canonical_rank(&self) -> u8 {
        rank::canonical_rank(self)
    }

    /// Total canonical comparator: deterministic for every pair of values.
    #[must_use]
    pub fn canonical_cmp(left: &Self, right: &Self) -> Ordering {
        compare::canonical_cmp(left, right)
    }

    /// Strict comparator for identical orderable variants.
    ///
    /// Returns `None` for mismatched variants.
    #[must_use]
    pub(crate) fn strict_order_cmp(left: &Self, right: &Self) -> Option<Ordering> {
        compare::strict_order_cmp(left, right)
    }

    /// Cross-variant numeric comparison; returns `None` if non-numeric.
    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Option<Ordering> {
        compare::cmp_numeric(self, other)
    }

    /// Sort-key comparator: nulls first, natural order where the variant
    /// has one, deterministic canonical fallback otherwise.
    #[must_use]
    pub fn order_cmp(left: &Self, right: &Self) -> Ordering {
        compare::order_cmp(left, right)
    }

    ///
    /// EMPTY
    ///

    #[must_use]
    pub const fn is_empty(&self) -> Option<bool> {
        match self {
            Self::List(xs) => Some(xs.is_empty()),
            Self::Text(s) => Some(s.is_empty()),
            Self::Null => Some(true),

            _ => None,
        }
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool    => Bool,
    Float64 => Float64,
    i8      => Int,
    i16     => Int,
    i32     => Int,
    i64     => Int,
    &str    => Text,
    String  => Text,
    u8      => Uint,
    u16     => Uint,
    u32     => Uint,
    u64     => Uint,
}

// Non-finite floats carry no ordering key and degrade to Null.
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Float64::try_new(v).map_or(Self::Null, Self::Float64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::from(f64::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}

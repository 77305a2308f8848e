use crate::value::Value;
use std::cmp::Ordering;

// Integer-to-f64 promotion is only exact inside the 53-bit mantissa range.
const F64_SAFE_I128: i128 = 1i128 << 53;

///
/// NumericRepr
///

enum NumericRepr {
    I128(i128),
    F64(f64),
    None,
}

fn numeric_repr(value: &Value) -> NumericRepr {
    match value {
        Value::Int(i) => NumericRepr::I128(i128::from(*i)),
        Value::Uint(u) => NumericRepr::I128(i128::from(*u)),
        Value::Float64(f) => NumericRepr::F64(f.get()),
        _ => NumericRepr::None,
    }
}

#[expect(clippy::cast_precision_loss)]
fn to_f64_lossless(v: i128) -> Option<f64> {
    (-F64_SAFE_I128..=F64_SAFE_I128)
        .contains(&v)
        .then_some(v as f64)
}

/// Cross-variant numeric comparison; returns `None` if either side is
/// non-numeric or an exact comparison is not possible.
#[must_use]
pub fn cmp_numeric(left: &Value, right: &Value) -> Option<Ordering> {
    match (numeric_repr(left), numeric_repr(right)) {
        (NumericRepr::I128(a), NumericRepr::I128(b)) => Some(a.cmp(&b)),
        (NumericRepr::F64(a), NumericRepr::F64(b)) => a.partial_cmp(&b),
        (NumericRepr::I128(a), NumericRepr::F64(b)) => {
            to_f64_lossless(a).and_then(|a| a.partial_cmp(&b))
        }
        (NumericRepr::F64(a), NumericRepr::I128(b)) => {
            to_f64_lossless(b).and_then(|b| a.partial_cmp(&b))
        }
        _ => None,
    }
}

/// Strict comparator for identical orderable variants.
///
/// Returns `None` for mismatched variants.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Float64(a), Value::Float64(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Total canonical comparator used as the deterministic cross-variant
/// fallback.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Mixed-variant comparisons are rank-only and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = left.canonical_rank().cmp(&right.canonical_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

/// Ordering used by sort keys: null sorts before every non-null value,
/// then the natural same-variant order, then the numeric family, then the
/// canonical rank fallback.
#[must_use]
pub fn order_cmp(left: &Value, right: &Value) -> Ordering {
    match (left.is_null(), right.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => strict_order_cmp(left, right)
            .or_else(|| cmp_numeric(left, right))
            .unwrap_or_else(|| canonical_cmp(left, right)),
    }
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    #[allow(clippy::match_same_arms)]
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Float64(a), Value::Float64(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::List(a), Value::List(b)) => canonical_cmp_value_list(a, b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Uint(a), Value::Uint(b)) => a.cmp(b),
        (Value::Null, Value::Null) => Ordering::Equal,
        _ => Ordering::Equal,
    }
}

fn canonical_cmp_value_list(left: &[Value], right: &[Value]) -> Ordering {
    for (left, right) in left.iter().zip(right.iter()) {
        let cmp = canonical_cmp(left, right);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    left.len().cmp(&right.len())
}

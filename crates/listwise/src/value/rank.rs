use crate::value::Value;

///
/// Canonical Value Rank
///
/// Stable rank used for cross-variant ordering.
///
/// IMPORTANT:
/// Rank order is part of deterministic sort behavior and must remain fixed;
/// callers are promised a consistent (if unspecified) cross-variant order.
///
#[must_use]
pub const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) => 2,
        Value::Uint(_) => 3,
        Value::Float64(_) => 4,
        Value::Text(_) => 5,
        Value::List(_) => 6,
    }
}

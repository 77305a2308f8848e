//! Dynamic multi-key ordering and offset/limit windowing for in-memory
//! record collections.
//!
//! A sort is requested as text (`"-createdAt,name"`), resolved at runtime
//! against the field metadata of the element type (including nested,
//! dot-separated paths), and applied as one stable, lexicographically
//! composed ordering followed by offset/limit windowing.
//!
//! ## Crate layout
//! - `sort`: the textual sort specification (`[+|-]path` tokens) and parser.
//! - `model` / `traits`: the pluggable field registry (`RecordModel`
//!   metadata, the `Record` trait, `#[derive(Record)]`).
//! - `value`: runtime field values and their comparison semantics.
//! - `resolve`: field-path resolution into cached accessor chains.
//! - `order`: composable ordering operations over resolved chains.
//! - `shape`: the shaping pipeline (`ListOptions::apply`) and its policies.
//! - `repo`: the repository boundary and an in-memory reference
//!   implementation.

pub mod error;
pub mod model;
pub mod options;
pub mod order;
pub mod repo;
pub mod resolve;
pub mod shape;
pub mod sort;
pub mod traits;
pub mod value;

pub use listwise_derive::Record;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::{
    error::Error,
    options::ListOptions,
    shape::SortPolicy,
    sort::{OrderDirection, SortKey, SortSpec},
    traits::Record,
    value::Value,
};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        Record,
        error::Error,
        options::ListOptions,
        order::SortOrdering,
        repo::{MemRepository, Repository as _},
        resolve::AccessorChain,
        shape::SortPolicy,
        sort::{OrderDirection, SortKey, SortSpec},
        traits::{Field, FieldValue as _, Identity},
        value::{Float64, Value},
    };
}

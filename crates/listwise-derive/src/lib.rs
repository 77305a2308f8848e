//! Derive macro for the listwise field registry.

mod record;

use proc_macro::TokenStream;

/// Derive `listwise::traits::Record` for a struct with named fields.
///
/// Fields are exposed under their declared names. `Option<T>` fields yield
/// `Value::Null` when `None`; `Vec<T>` fields yield `Value::List`. Mark a
/// field whose type itself implements `Record` with `#[record(nested)]` to
/// make its fields path-addressable (`"address.city"`).
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}

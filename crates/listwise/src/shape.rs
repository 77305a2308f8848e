//! Module: shape
//! Responsibility: the list shaping pipeline (resolve → order → window).
//! Does not own: field metadata, comparison semantics, or the repository
//! boundary.

use crate::{
    options::ListOptions,
    order::SortOrdering,
    resolve::AccessorChain,
    sort::SortSpec,
    traits::Record,
};

///
/// SortPolicy
///
/// What to do when a requested sort key fails to resolve.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortPolicy {
    /// Drop the entire requested ordering if any key fails to resolve; the
    /// input order is preserved. This is the historical contract of the
    /// repository boundary and the default.
    #[default]
    BestEffortOrNone,

    /// Keep the keys that do resolve and skip the rest.
    BestEffortPartial,
}

impl ListOptions {
    /// Apply multi-key ordering and offset/limit windowing, producing a
    /// finite, materialized page. Resolution failures follow the default
    /// `SortPolicy::BestEffortOrNone`; they never fail the call.
    #[must_use]
    pub fn apply<T: Record + 'static>(&self, items: Vec<T>) -> Vec<T> {
        self.apply_with_policy(items, SortPolicy::default())
    }

    /// Apply with an explicit resolution-failure policy.
    #[must_use]
    pub fn apply_with_policy<T: Record + 'static>(
        &self,
        mut items: Vec<T>,
        policy: SortPolicy,
    ) -> Vec<T> {
        if let Some(ordering) = resolve_sort::<T>(&self.sort, policy) {
            ordering.sort(&mut items);
        }

        apply_window(&mut items, self.offset, self.limit);
        items
    }
}

/// Resolve a sort specification into a composed ordering, honoring
/// `policy`. Returns `None` when no ordering should be applied.
pub fn resolve_sort<T: Record + 'static>(
    spec: &SortSpec,
    policy: SortPolicy,
) -> Option<SortOrdering> {
    if spec.is_empty() {
        return None;
    }

    let mut keys = Vec::with_capacity(spec.len());
    for key in spec {
        match AccessorChain::resolve::<T>(&key.field) {
            Ok(chain) => keys.push((chain, key.direction)),
            Err(error) => match policy {
                SortPolicy::BestEffortOrNone => {
                    tracing::debug!(%error, spec = %spec, "sort specification dropped");
                    return None;
                }
                SortPolicy::BestEffortPartial => {
                    tracing::debug!(%error, field = key.field.as_str(), "sort key skipped");
                }
            },
        }
    }

    if keys.is_empty() {
        return None;
    }

    Some(SortOrdering::new(keys))
}

/// Apply offset/limit windowing to an in-memory vector, in-place.
pub fn apply_window<T>(rows: &mut Vec<T>, offset: u32, limit: Option<u32>) {
    let total = rows.len();
    let start = usize::try_from(offset).unwrap_or(usize::MAX);

    // If offset is past the end, clear everything.
    if start >= total {
        rows.clear();
        return;
    }

    let end = match limit {
        Some(limit) => start
            .saturating_add(usize::try_from(limit).unwrap_or(usize::MAX))
            .min(total),
        None => total,
    };

    // Drop leading rows, then truncate to window size.
    rows.drain(..start);
    rows.truncate(end - start);
}

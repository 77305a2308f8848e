//! Module: repo
//! Responsibility: the repository boundary contract and an in-memory
//! reference implementation of its ordering/paging guarantee.

use crate::{
    options::ListOptions,
    traits::{Identity, Record},
};
use thiserror::Error as ThisError;

///
/// Repository
///
/// Simple data-interaction contract: filtered, ordered, paged listing plus
/// key-addressed CRUD. `list` returns a finite, concrete page shaped by
/// `ListOptions`; filter application and storage belong to implementors.
///

pub trait Repository<T: Record + Identity> {
    type Filter;
    type Error;

    /// List entities matching `filter`, shaped by `options`.
    fn list(&self, filter: &Self::Filter, options: &ListOptions) -> Result<Vec<T>, Self::Error>;

    /// Count entities matching `filter`.
    fn count(&self, filter: &Self::Filter) -> Result<usize, Self::Error>;

    /// Fetch a single entity by key, if present.
    fn get(&self, key: &T::Key) -> Result<Option<T>, Self::Error>;

    /// Add a new entity and return the stored value.
    fn add(&mut self, item: T) -> Result<T, Self::Error>;

    /// Update an existing entity and return the stored value.
    fn update(&mut self, item: T) -> Result<T, Self::Error>;

    /// Delete by key. Returns true when an entity was removed.
    fn delete(&mut self, key: &T::Key) -> Result<bool, Self::Error>;
}

///
/// RepoError
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum RepoError {
    /// `add` would overwrite an entity with the same key.
    #[error("an entity with this key already exists")]
    DuplicateKey,

    /// `update` addressed an entity that is not stored.
    #[error("no entity with this key exists")]
    MissingEntity,
}

/// Filter callback used by the in-memory repository.
pub type MemFilter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

///
/// MemRepository
///
/// Vec-backed reference implementation; `list` materializes a filtered
/// snapshot and runs it through the shaping pipeline, which is the whole
/// of the contract's ordering/paging guarantee.
///

#[derive(Clone, Debug, Default)]
pub struct MemRepository<T> {
    items: Vec<T>,
}

impl<T> MemRepository<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> MemRepository<T>
where
    T: Identity,
{
    fn position(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|item| item.id() == *key)
    }
}

impl<T> Repository<T> for MemRepository<T>
where
    T: Record + Identity + Clone + 'static,
{
    type Filter = MemFilter<T>;
    type Error = RepoError;

    fn list(&self, filter: &Self::Filter, options: &ListOptions) -> Result<Vec<T>, Self::Error> {
        let matched: Vec<T> = self
            .items
            .iter()
            .filter(|item| filter(item))
            .cloned()
            .collect();

        Ok(options.apply(matched))
    }

    fn count(&self, filter: &Self::Filter) -> Result<usize, Self::Error> {
        Ok(self.items.iter().filter(|item| filter(item)).count())
    }

    fn get(&self, key: &T::Key) -> Result<Option<T>, Self::Error> {
        Ok(self.position(key).map(|index| self.items[index].clone()))
    }

    fn add(&mut self, item: T) -> Result<T, Self::Error> {
        if self.position(&item.id()).is_some() {
            return Err(RepoError::DuplicateKey);
        }

        self.items.push(item.clone());
        Ok(item)
    }

    fn update(&mut self, item: T) -> Result<T, Self::Error> {
        let index = self
            .position(&item.id())
            .ok_or(RepoError::MissingEntity)?;
        self.items[index] = item.clone();

        Ok(item)
    }

    fn delete(&mut self, key: &T::Key) -> Result<bool, Self::Error> {
        match self.position(key) {
            Some(index) => {
                self.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

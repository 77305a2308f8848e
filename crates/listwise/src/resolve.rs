//! Module: resolve
//! Responsibility: field-path resolution and accessor-chain evaluation.
//! Does not own: comparison semantics (`value`) or windowing (`shape`).
//! Boundary: resolution is pure per (record type, path) and cached
//! process-wide; the cache is never invalidated within a process run.

use crate::{
    error::Error,
    model::{FieldKind, RecordModel},
    traits::{Field, Record},
    value::Value,
};
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

type ChainKey = (TypeId, Box<str>);
type ChainMap = HashMap<ChainKey, AccessorChain>;

fn chain_cache() -> &'static RwLock<ChainMap> {
    static CACHE: OnceLock<RwLock<ChainMap>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

// Resolution is pure, so a poisoned lock still guards valid chains.
fn cache_read() -> RwLockReadGuard<'static, ChainMap> {
    chain_cache().read().unwrap_or_else(PoisonError::into_inner)
}

fn cache_write() -> RwLockWriteGuard<'static, ChainMap> {
    chain_cache()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
}

///
/// AccessorChain
///
/// Canonical per-segment accessors for one (record type, field path) pair.
/// Built fresh on first use and cached for the process lifetime; duplicate
/// concurrent builds are harmless because resolution is idempotent.
///

#[derive(Clone, Debug)]
pub struct AccessorChain {
    segments: Arc<[&'static str]>,
}

impl AccessorChain {
    /// Resolve `path` against the field metadata of `T`, failing fast on the
    /// first segment that does not resolve. No partial chains are returned.
    pub fn resolve<T: Record + 'static>(path: &str) -> Result<Self, Error> {
        let key = (TypeId::of::<T>(), Box::from(path));
        if let Some(chain) = cache_read().get(&key) {
            return Ok(chain.clone());
        }

        let chain = Self::build(T::model(), path)?;
        // First writer wins; a concurrent build of the same key produced an
        // identical chain.
        Ok(cache_write().entry(key).or_insert(chain).clone())
    }

    fn build(model: &'static RecordModel, path: &str) -> Result<Self, Error> {
        let mut segments = Vec::new();
        let mut current = model;
        let mut parts = path.split('.').peekable();

        while let Some(part) = parts.next() {
            let field = current
                .field(part)
                .ok_or_else(|| Error::field_not_found(current.name, part))?;
            segments.push(field.name);

            if let Some(next) = parts.peek() {
                match field.kind {
                    FieldKind::Nested(nested) => current = nested(),
                    // Scalar segments cannot be descended into; report the
                    // scalar field as the lookup target.
                    FieldKind::Scalar => {
                        return Err(Error::field_not_found(field.name, *next));
                    }
                }
            }
        }

        Ok(Self {
            segments: segments.into(),
        })
    }

    /// Canonical (model-cased) segments of this chain.
    #[must_use]
    pub fn segments(&self) -> &[&'static str] {
        &self.segments
    }

    /// Dotted canonical path, for diagnostics.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join(".")
    }

    /// Evaluate the chain on one record. A null (or model-contradicting)
    /// value at any intermediate segment short-circuits to `Value::Null`;
    /// evaluation never faults.
    #[must_use]
    pub fn eval(&self, record: &dyn Record) -> Value {
        let Some((last, inner)) = self.segments.split_last() else {
            return Value::Null;
        };

        let mut current = record;
        for segment in inner {
            match current.field(segment) {
                Some(Field::Record(next)) => current = next,
                _ => return Value::Null,
            }
        }

        match current.field(last) {
            Some(Field::Value(value)) => value,
            // Nested-record leaves carry no scalar ordering key.
            _ => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldModel;

    struct Address {
        city: Option<String>,
    }

    struct Person {
        name: String,
        age: u32,
        address: Option<Address>,
    }

    impl Record for Address {
        fn model() -> &'static RecordModel {
            static MODEL: RecordModel = RecordModel {
                name: "Address",
                fields: &[FieldModel {
                    name: "city",
                    kind: FieldKind::Scalar,
                }],
            };
            &MODEL
        }

        fn field(&self, name: &str) -> Option<Field<'_>> {
            match name {
                "city" => Some(Field::Value(
                    self.city
                        .as_ref()
                        .map_or(Value::Null, |city| Value::Text(city.clone())),
                )),
                _ => None,
            }
        }
    }

    impl Record for Person {
        fn model() -> &'static RecordModel {
            static MODEL: RecordModel = RecordModel {
                name: "Person",
                fields: &[
                    FieldModel {
                        name: "name",
                        kind: FieldKind::Scalar,
                    },
                    FieldModel {
                        name: "age",
                        kind: FieldKind::Scalar,
                    },
                    FieldModel {
                        name: "address",
                        kind: FieldKind::Nested(Address::model),
                    },
                ],
            };
            &MODEL
        }

        fn field(&self, name: &str) -> Option<Field<'_>> {
            match name {
                "name" => Some(Field::Value(Value::Text(self.name.clone()))),
                "age" => Some(Field::Value(Value::Uint(u64::from(self.age)))),
                "address" => Some(match self.address.as_ref() {
                    Some(address) => Field::Record(address),
                    None => Field::Value(Value::Null),
                }),
                _ => None,
            }
        }
    }

    fn person(name: &str, age: u32, city: Option<&str>) -> Person {
        Person {
            name: name.to_string(),
            age,
            address: city.map(|city| Address {
                city: Some(city.to_string()),
            }),
        }
    }

    #[test]
    fn resolves_flat_paths_case_insensitively() {
        let chain = AccessorChain::resolve::<Person>("AGE").expect("path should resolve");
        assert_eq!(chain.segments(), &["age"]);
        assert_eq!(chain.eval(&person("Ann", 30, None)), Value::Uint(30));
    }

    #[test]
    fn resolves_nested_paths() {
        let chain =
            AccessorChain::resolve::<Person>("address.City").expect("path should resolve");
        assert_eq!(chain.path(), "address.city");
        assert_eq!(
            chain.eval(&person("Ann", 30, Some("Riga"))),
            Value::Text("Riga".to_string())
        );
    }

    #[test]
    fn null_intermediate_segment_short_circuits_to_null() {
        let chain =
            AccessorChain::resolve::<Person>("address.city").expect("path should resolve");
        assert_eq!(chain.eval(&person("Ann", 30, None)), Value::Null);
    }

    #[test]
    fn unknown_segment_fails_fast_naming_segment_and_record() {
        let err = AccessorChain::resolve::<Person>("salary").expect_err("should not resolve");
        assert_eq!(
            err,
            Error::FieldNotFound {
                record: "Person",
                segment: "salary".to_string(),
            }
        );

        let err =
            AccessorChain::resolve::<Person>("address.street").expect_err("should not resolve");
        assert_eq!(
            err,
            Error::FieldNotFound {
                record: "Address",
                segment: "street".to_string(),
            }
        );
    }

    #[test]
    fn scalar_segments_cannot_be_descended_into() {
        let err = AccessorChain::resolve::<Person>("name.len").expect_err("should not resolve");
        assert_eq!(
            err,
            Error::FieldNotFound {
                record: "name",
                segment: "len".to_string(),
            }
        );
    }

    #[test]
    fn resolution_is_cached_per_type_and_path() {
        let first = AccessorChain::resolve::<Person>("age").expect("path should resolve");
        let second = AccessorChain::resolve::<Person>("age").expect("path should resolve");

        // Same cached chain, not a rebuilt one.
        assert!(Arc::ptr_eq(&first.segments, &second.segments));
    }

    #[test]
    fn cache_does_not_leak_across_record_types() {
        assert!(AccessorChain::resolve::<Address>("city").is_ok());
        assert!(AccessorChain::resolve::<Address>("age").is_err());
    }
}

//! Module: order
//! Responsibility: composable ordering operations over resolved chains.
//! Does not own: path resolution or the null/fallback comparison rules
//! (those live in `resolve` and `value`).

use crate::{resolve::AccessorChain, sort::OrderDirection, traits::Record, value::Value};
use std::cmp::Ordering;

///
/// SortOrdering
///
/// Lexicographic composition of per-key ordering operations: the first key
/// decides unless it reports equality, in which case the next key is
/// consulted. An ordering can only be built from resolved chains, so an
/// unresolved path is impossible by construction here.
///

#[derive(Clone, Debug)]
pub struct SortOrdering {
    keys: Vec<(AccessorChain, OrderDirection)>,
}

impl SortOrdering {
    #[must_use]
    pub const fn new(keys: Vec<(AccessorChain, OrderDirection)>) -> Self {
        Self { keys }
    }

    #[must_use]
    pub fn single(chain: AccessorChain, direction: OrderDirection) -> Self {
        Self::new(vec![(chain, direction)])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compare two records under the composed ordering. Descending keys
    /// reverse their comparison wholesale, so nulls sort first ascending
    /// and last descending.
    #[must_use]
    pub fn compare<T: Record>(&self, left: &T, right: &T) -> Ordering {
        for (chain, direction) in &self.keys {
            let ordering = Value::order_cmp(&chain.eval(left), &chain.eval(right));
            let ordering = match direction {
                OrderDirection::Asc => ordering,
                OrderDirection::Desc => ordering.reverse(),
            };

            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }

    /// Sort rows in place. The sort is stable: rows comparing equal under
    /// every key keep their input order.
    pub fn sort<T: Record>(&self, rows: &mut [T]) {
        if rows.len() > 1 && !self.keys.is_empty() {
            rows.sort_by(|left, right| self.compare(left, right));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{FieldKind, FieldModel, RecordModel},
        traits::{Field, FieldValue},
    };

    struct Row {
        name: String,
        age: u64,
        score: Option<i64>,
    }

    impl Record for Row {
        fn model() -> &'static RecordModel {
            static MODEL: RecordModel = RecordModel {
                name: "Row",
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
                        name: "score",
                        kind: FieldKind::Scalar,
                    },
                ],
            };
            &MODEL
        }

        fn field(&self, name: &str) -> Option<Field<'_>> {
            match name {
                "name" => Some(Field::Value(self.name.to_value())),
                "age" => Some(Field::Value(self.age.to_value())),
                "score" => Some(Field::Value(self.score.to_value())),
                _ => None,
            }
        }
    }

    fn row(name: &str, age: u64, score: Option<i64>) -> Row {
        Row {
            name: name.to_string(),
            age,
            score,
        }
    }

    fn chain(path: &str) -> AccessorChain {
        AccessorChain::resolve::<Row>(path).expect("path should resolve")
    }

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|row| row.name.as_str()).collect()
    }

    #[test]
    fn single_key_sorts_ascending() {
        let mut rows = vec![row("Bob", 30, None), row("Ann", 25, None)];
        SortOrdering::single(chain("age"), OrderDirection::Asc).sort(&mut rows);

        assert_eq!(names(&rows), vec!["Ann", "Bob"]);
    }

    #[test]
    fn descending_reverses_the_element_order_without_ties() {
        let mut asc = vec![row("A", 1, None), row("B", 2, None), row("C", 3, None)];
        let mut desc = vec![row("A", 1, None), row("B", 2, None), row("C", 3, None)];

        SortOrdering::single(chain("age"), OrderDirection::Asc).sort(&mut asc);
        SortOrdering::single(chain("age"), OrderDirection::Desc).sort(&mut desc);

        let mut reversed = names(&asc);
        reversed.reverse();
        assert_eq!(names(&desc), reversed);
    }

    #[test]
    fn later_keys_break_ties_left_to_right() {
        let mut rows = vec![
            row("Bob", 30, None),
            row("Ann", 30, None),
            row("Cid", 25, None),
        ];
        let ordering = SortOrdering::new(vec![
            (chain("age"), OrderDirection::Asc),
            (chain("name"), OrderDirection::Asc),
        ]);
        ordering.sort(&mut rows);

        assert_eq!(names(&rows), vec!["Cid", "Ann", "Bob"]);
    }

    #[test]
    fn equal_rows_keep_their_input_order() {
        let mut rows = vec![
            row("first", 30, None),
            row("second", 30, None),
            row("third", 30, None),
        ];
        SortOrdering::single(chain("age"), OrderDirection::Asc).sort(&mut rows);

        assert_eq!(names(&rows), vec!["first", "second", "third"]);
    }

    #[test]
    fn nulls_sort_first_ascending_and_last_descending() {
        let mut rows = vec![row("a", 1, Some(5)), row("b", 2, None), row("c", 3, Some(1))];
        SortOrdering::single(chain("score"), OrderDirection::Asc).sort(&mut rows);
        assert_eq!(names(&rows), vec!["b", "c", "a"]);

        let mut rows = vec![row("a", 1, Some(5)), row("b", 2, None), row("c", 3, Some(1))];
        SortOrdering::single(chain("score"), OrderDirection::Desc).sort(&mut rows);
        assert_eq!(names(&rows), vec!["a", "c", "b"]);
    }
}

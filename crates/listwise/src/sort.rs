use crate::error::Error;
use derive_more::{Deref, IntoIterator};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};
use std::{fmt, str::FromStr};

/// Delimiters accepted between sort tokens when none are supplied.
pub const DEFAULT_DELIMITERS: [char; 3] = [',', ' ', ';'];

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Desc)
    }
}

///
/// SortKey
///
/// One (field path, direction) pair. Token form is `path` for ascending and
/// `-path` for descending; a leading `+` is accepted and stripped.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortKey {
    pub field: String,
    #[serde(default)]
    pub direction: OrderDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Desc)
    }

    /// Parse one token. Returns `None` when the token carries no field path
    /// (empty, whitespace-only, or a bare sign); a parsed key never holds an
    /// empty path.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let (direction, field) = match token.strip_prefix('-') {
            Some(rest) => (OrderDirection::Desc, rest),
            None => (
                OrderDirection::Asc,
                token.strip_prefix('+').unwrap_or(token),
            ),
        };

        if field.trim().is_empty() {
            return None;
        }

        Some(Self::new(field, direction))
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::invalid_options(format!("empty sort token: `{s}`")))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.direction.is_descending() {
            "-"
        } else {
            ""
        };
        write!(f, "{prefix}{}", self.field)
    }
}

///
/// SortSpec
///
/// Ordered sort keys; the first key is the primary sort key and later keys
/// break ties left to right. An empty spec means "no ordering requested".
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
pub struct SortSpec(#[into_iterator(owned, ref)] Vec<SortKey>);

impl SortSpec {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a delimited sort specification with the default delimiter set
    /// (comma, space, semicolon). Empty and whitespace-only input yields an
    /// empty spec, not an error; empty tokens are discarded.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, &DEFAULT_DELIMITERS)
    }

    /// Parse a delimited sort specification with a caller-supplied
    /// delimiter set.
    #[must_use]
    pub fn parse_with(text: &str, delimiters: &[char]) -> Self {
        text.split(delimiters)
            .filter_map(SortKey::parse)
            .collect()
    }

    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }
}

impl From<Vec<SortKey>> for SortSpec {
    fn from(keys: Vec<SortKey>) -> Self {
        Self(keys)
    }
}

impl From<&str> for SortSpec {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl FromIterator<SortKey> for SortSpec {
    fn from_iter<I: IntoIterator<Item = SortKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, key) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}")?;
        }

        Ok(())
    }
}

// Serializes to the compact text form; accepts either that form or an
// explicit key sequence on the way in.
impl Serialize for SortSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SortSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SortSpecVisitor;

        impl<'de> Visitor<'de> for SortSpecVisitor {
            type Value = SortSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sort specification string or a sequence of sort keys")
            }

            fn visit_str<E: de::Error>(self, text: &str) -> Result<Self::Value, E> {
                Ok(SortSpec::parse(text))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut keys = Vec::new();
                while let Some(key) = seq.next_element::<SortKey>()? {
                    keys.push(key);
                }

                Ok(SortSpec(keys))
            }
        }

        deserializer.deserialize_any(SortSpecVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_signed_and_unsigned_tokens() {
        assert_eq!(SortKey::parse("name"), Some(SortKey::asc("name")));
        assert_eq!(SortKey::parse("+name"), Some(SortKey::asc("name")));
        assert_eq!(SortKey::parse("-name"), Some(SortKey::desc("name")));
        assert_eq!(
            SortKey::parse("-address.city"),
            Some(SortKey::desc("address.city"))
        );
    }

    #[test]
    fn rejects_tokens_without_a_field_path() {
        assert_eq!(SortKey::parse(""), None);
        assert_eq!(SortKey::parse("   "), None);
        assert_eq!(SortKey::parse("+"), None);
        assert_eq!(SortKey::parse("-"), None);
    }

    #[test]
    fn from_str_surfaces_empty_tokens_as_errors() {
        assert!("".parse::<SortKey>().is_err());
        assert_eq!(
            "-age".parse::<SortKey>().expect("valid token"),
            SortKey::desc("age")
        );
    }

    #[test]
    fn spec_parse_splits_on_all_default_delimiters() {
        let spec = SortSpec::parse("-createdAt,name age;rank");
        let keys = spec.keys();

        assert_eq!(keys.len(), 4);
        assert_eq!(keys[0], SortKey::desc("createdAt"));
        assert_eq!(keys[1], SortKey::asc("name"));
        assert_eq!(keys[2], SortKey::asc("age"));
        assert_eq!(keys[3], SortKey::asc("rank"));
    }

    #[test]
    fn spec_parse_discards_empty_tokens() {
        let spec = SortSpec::parse(",, name ,; -age ;");
        assert_eq!(
            spec.keys(),
            &[SortKey::asc("name"), SortKey::desc("age")]
        );
    }

    #[test]
    fn empty_and_whitespace_input_yield_an_empty_spec() {
        assert!(SortSpec::parse("").is_empty());
        assert!(SortSpec::parse("   ").is_empty());
    }

    #[test]
    fn parse_with_honors_custom_delimiters() {
        let spec = SortSpec::parse_with("name|-age", &['|']);
        assert_eq!(
            spec.keys(),
            &[SortKey::asc("name"), SortKey::desc("age")]
        );
    }

    #[test]
    fn display_round_trips_parsed_specs() {
        let spec = SortSpec::parse("-createdAt, name");
        assert_eq!(spec.to_string(), "-createdAt,name");
        assert_eq!(SortSpec::parse(&spec.to_string()), spec);
    }

    #[test]
    fn deserializes_from_string_or_key_sequence() {
        let from_text: SortSpec = serde_json::from_str(r#""-createdAt,name""#)
            .expect("string form should deserialize");
        let from_seq: SortSpec = serde_json::from_str(
            r#"[{"field": "createdAt", "direction": "desc"}, {"field": "name"}]"#,
        )
        .expect("sequence form should deserialize");

        assert_eq!(from_text, from_seq);
    }

    proptest! {
        // Round-trip stability for any spec built from valid tokens.
        #[test]
        fn serialize_then_parse_is_identity(
            keys in proptest::collection::vec(
                ("[A-Za-z][A-Za-z0-9_]{0,6}(\\.[A-Za-z][A-Za-z0-9_]{0,6}){0,2}", any::<bool>()),
                0..5,
            )
        ) {
            let spec: SortSpec = keys
                .into_iter()
                .map(|(field, desc)| if desc { SortKey::desc(field) } else { SortKey::asc(field) })
                .collect();

            prop_assert_eq!(SortSpec::parse(&spec.to_string()), spec);
        }
    }
}

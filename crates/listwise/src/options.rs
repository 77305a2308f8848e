use crate::{error::Error, sort::SortSpec};
use serde::{Deserialize, Serialize};

///
/// ListOptions
///
/// Per-request shaping parameters: multi-key sort, offset, limit.
/// Constructed per call and immutable for the duration of one shaping
/// pass; an absent limit means "unbounded".
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "RawListOptions")]
pub struct ListOptions {
    pub sort: SortSpec,
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sort: SortSpec::new(),
            offset: 0,
            limit: None,
        }
    }

    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<SortSpec>) -> Self {
        self.sort = sort.into();
        self
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

///
/// RawListOptions
///
/// Deserialization shape for the configuration boundary. Signed fields let
/// a malformed negative offset/limit surface as `Error::InvalidOptions`
/// instead of a bare type error.
///

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawListOptions {
    sort: Option<SortSpec>,
    offset: Option<i64>,
    limit: Option<i64>,
}

fn non_negative(field: &str, value: i64) -> Result<u32, Error> {
    if value < 0 {
        return Err(Error::invalid_options(format!(
            "{field} must be non-negative, got {value}"
        )));
    }

    u32::try_from(value)
        .map_err(|_| Error::invalid_options(format!("{field} out of range: {value}")))
}

impl TryFrom<RawListOptions> for ListOptions {
    type Error = Error;

    fn try_from(raw: RawListOptions) -> Result<Self, Self::Error> {
        let offset = match raw.offset {
            Some(offset) => non_negative("offset", offset)?,
            None => 0,
        };
        let limit = raw
            .limit
            .map(|limit| non_negative("limit", limit))
            .transpose()?;

        Ok(Self {
            sort: raw.sort.unwrap_or_default(),
            offset,
            limit,
        })
    }
}

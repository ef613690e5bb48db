//! Query-string parameters accepted by the game-info API.

use crate::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A coarse time window accepted by ranking and kill endpoints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Range {
    /// The current week. This is the default.
    #[default]
    Week,
    /// The previous week.
    LastWeek,
    /// The current month.
    Month,
    /// The previous month.
    LastMonth,
}

impl Range {
    /// Returns the range as it appears in the query string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::LastWeek => "lastWeek",
            Self::Month => "month",
            Self::LastMonth => "lastMonth",
        }
    }

    /// Parses a range, returning `None` for anything that is not an accepted value.
    ///
    /// Passing the result straight to an operation omits unrecognized ranges from the request
    /// rather than failing it.
    #[must_use]
    pub fn lenient(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Self::Week),
            "lastWeek" => Ok(Self::LastWeek),
            "month" => Ok(Self::Month),
            "lastMonth" => Ok(Self::LastMonth),
            other => Err(Error::InvalidFilter {
                name: "range",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for [`Client::get_battles`][crate::Client::get_battles].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    /// Most recent battles first. This is the default.
    #[default]
    Recent,
    /// Battles with the most total fame first.
    TopFame,
}

impl Sort {
    /// Returns the sort order as it appears in the query string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::TopFame => "topfame",
        }
    }

    /// Parses a sort order, returning `None` for anything that is not an accepted value.
    #[must_use]
    pub fn lenient(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl FromStr for Sort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(Self::Recent),
            "topfame" => Ok(Self::TopFame),
            other => Err(Error::InvalidFilter {
                name: "sort",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pagination parameters. Both values are always sent, even when zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Page {
    /// The number of results to skip.
    pub offset: u32,
    /// The maximum number of results to return.
    pub limit: u32,
}

impl Page {
    /// Creates a page with the given offset and limit.
    #[inline]
    #[must_use]
    pub const fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// The default page for battle listings (`limit = 51`).
    #[must_use]
    pub const fn battles() -> Self {
        Self::new(0, 51)
    }

    /// The default page for recent events (`limit = 50`).
    #[must_use]
    pub const fn recent_events() -> Self {
        Self::new(0, 50)
    }

    /// The default page for a single guild match listing (`limit = 6`).
    #[must_use]
    pub const fn matches() -> Self {
        Self::new(0, 6)
    }

    /// The default page for past guild matches (`limit = 51`).
    #[must_use]
    pub const fn past_matches() -> Self {
        Self::new(0, 51)
    }
}

impl Default for Page {
    /// Offset `0`, limit `11`.
    fn default() -> Self {
        Self::new(0, 11)
    }
}

/// Query for `/search`.
#[derive(Clone, Debug, Serialize)]
pub struct SearchQuery {
    /// The search term.
    pub q: String,
}

/// Query for plain paginated endpoints.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct PageQuery {
    pub offset: u32,
    pub limit: u32,
}

impl From<Page> for PageQuery {
    fn from(page: Page) -> Self {
        Self {
            offset: page.offset,
            limit: page.limit,
        }
    }
}

/// Query for paginated endpoints that accept a [`Range`].
#[derive(Copy, Clone, Debug, Serialize)]
pub struct RangedQuery {
    pub offset: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

impl RangedQuery {
    /// Creates a new ranged query. A `None` range is omitted from the query string.
    #[must_use]
    pub const fn new(page: Page, range: Option<Range>) -> Self {
        Self {
            offset: page.offset,
            limit: page.limit,
            range,
        }
    }
}

/// Query for `/battles`.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct BattlesQuery {
    pub offset: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn range_values_use_upstream_spelling() {
        assert_eq!(serde_json::to_value(Range::LastWeek).unwrap(), json!("lastWeek"));
        assert_eq!(serde_json::to_value(Range::LastMonth).unwrap(), json!("lastMonth"));
        assert_eq!(serde_json::to_value(Sort::TopFame).unwrap(), json!("topfame"));
    }

    #[test]
    fn unknown_filters_parse_to_none() {
        assert_eq!(Range::lenient("lastMonth"), Some(Range::LastMonth));
        assert_eq!(Range::lenient("fortnight"), None);
        assert_eq!(Range::lenient("Week"), None);
        assert_eq!(Sort::lenient("topfame"), Some(Sort::TopFame));
        assert_eq!(Sort::lenient("oldest"), None);
    }

    #[test]
    fn missing_range_is_omitted() {
        let query = RangedQuery::new(Page::new(0, 0), Range::lenient("yesterday"));
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            json!({ "offset": 0, "limit": 0 })
        );
    }

    #[test]
    fn battles_query_carries_both_filters() {
        let query = BattlesQuery {
            offset: 10,
            limit: 51,
            range: Some(Range::Month),
            sort: Some(Sort::TopFame),
        };
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            json!({ "offset": 10, "limit": 51, "range": "month", "sort": "topfame" })
        );
    }

    #[test]
    fn page_defaults() {
        assert_eq!(Page::default(), Page::new(0, 11));
        assert_eq!(Page::battles().limit, 51);
        assert_eq!(Page::recent_events().limit, 50);
        assert_eq!(Page::matches().limit, 6);
    }
}

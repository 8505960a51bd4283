//! Query parameters for module views.
//!
//! The host owns these values (typically through UI controls) and passes them
//! to the query engine on every recompute. Parsing from text is where unknown
//! values are rejected; once typed, every value is in range.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::ParseError;
use crate::module::ModuleStatus;

/// Key used to order a module view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Case-insensitive title order
    #[serde(rename = "title")]
    Title,
    /// Chronological, missing dates last
    #[default]
    #[serde(rename = "dueDate")]
    DueDate,
    /// Status priority
    #[serde(rename = "status")]
    Status,
}

impl SortKey {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::DueDate => "dueDate",
            SortKey::Status => "status",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortKey::Title),
            "dueDate" | "due-date" | "due" => Ok(SortKey::DueDate),
            "status" => Ok(SortKey::Status),
            other => Err(ParseError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Ascending or descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// As the key's comparator orders
    #[default]
    Asc,
    /// Comparator result negated
    Desc,
}

impl SortDirection {
    /// Apply the direction to a comparator result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(ParseError::UnknownSortDirection(other.to_string())),
        }
    }
}

/// Restrict a view to one status, or keep every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    /// Keep every module
    #[default]
    All,
    /// Keep modules whose status equals this one
    Only(ModuleStatus),
}

impl StatusFilter {
    /// Whether a module with `status` passes the filter.
    pub fn matches(&self, status: ModuleStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<ModuleStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| ParseError::UnknownStatusFilter(s.to_string()))
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.to_string()
    }
}

/// Parameters of a module view: search, status filter, sort key and direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleQuery {
    /// Case-insensitive substring matched against title or description
    pub search_text: String,

    /// Status restriction
    pub status_filter: StatusFilter,

    /// Ordering key
    pub sort_key: SortKey,

    /// Ordering direction
    pub sort_direction: SortDirection,
}

impl ModuleQuery {
    /// Query with the given search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Query restricted to a status filter.
    pub fn with_status(mut self, filter: StatusFilter) -> Self {
        self.status_filter = filter;
        self
    }

    /// Query sorted by `key` in `direction`.
    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_direction = direction;
        self
    }

    /// Select a sort key the way a column header does: picking the current
    /// key flips the direction, picking a new key resets to ascending.
    pub fn select_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Asc;
        }
    }
}

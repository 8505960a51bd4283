//! Errors raised while turning caller-supplied text into typed values.

/// Errors that can occur when parsing enumerated values or settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not one of `not-started`, `in-progress`, `completed`, `failed`
    #[error("unknown module status: {0}")]
    UnknownStatus(String),

    /// Not one of `all` or a module status
    #[error("unknown status filter: {0}")]
    UnknownStatusFilter(String),

    /// Not one of `title`, `dueDate`, `status`
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Not one of `asc`, `desc`
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),

    /// Not one of `student`, `instructor`
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// Reminder horizon must be at least one day
    #[error("invalid reminder horizon: {0} (must be greater than 0)")]
    InvalidHorizon(u32),
}

//! Catalog source abstraction.

use async_trait::async_trait;
use modtrack_core::{Catalog, Course, CourseId, User, UserId};

/// Error type for catalog operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while reading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Read-only supplier of course and user records.
///
/// Sources hand out snapshots; the progress engine never writes back.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load a course by ID.
    async fn load_course(&self, id: &CourseId) -> Result<Option<Course>>;

    /// List all courses.
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// Load a user by ID.
    async fn load_user(&self, id: &UserId) -> Result<Option<User>>;

    /// List all users.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Load every course and user.
    async fn load_catalog(&self) -> Result<Catalog> {
        Ok(Catalog {
            courses: self.list_courses().await?,
            users: self.list_users().await?,
        })
    }
}

//! Project storage backends.
//!
//! Both backends implement [`ProjectStore`] so the repository can run the
//! same operation against either one.

use async_trait::async_trait;
use portfolio_core::project::Project;

pub mod json_store;
pub mod pg_store;

pub use json_store::JsonProjectStore;
pub use pg_store::PgProjectStore;

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record with this id is already stored.
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// The database rejected the query or could not be reached.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A durable home for project records.
///
/// Operations are single round trips; there is no transaction spanning
/// calls, so a title check followed by an insert can race.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Short backend name for log fields.
    fn name(&self) -> &'static str;

    /// All projects in the backend's natural order.
    async fn list(&self) -> Result<Vec<Project>, StoreError>;

    /// The project with `id`, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, StoreError>;

    /// Whether another project already uses `title` (case-insensitive),
    /// ignoring the project with `exclude_id`.
    async fn title_exists(&self, title: &str, exclude_id: Option<&str>)
        -> Result<bool, StoreError>;

    /// Persist a new project, returning the stored record.
    ///
    /// Fails with [`StoreError::DuplicateId`] when the backend itself
    /// enforces id uniqueness and the id is taken.
    async fn insert(&self, project: &Project) -> Result<Project, StoreError>;

    /// Replace the stored project with the same id.
    ///
    /// Returns `None` if no project with that id exists.
    async fn update(&self, project: &Project) -> Result<Option<Project>, StoreError>;

    /// Remove the project with `id`. Returns `true` if a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

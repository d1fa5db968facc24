//! Hosted Postgres project store (the site's Supabase database).

use async_trait::async_trait;
use portfolio_core::project::Project;

use super::{ProjectStore, StoreError};
use crate::models::project::ProjectRow;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, category, description, completion, details, images, created_at, updated_at";

/// Project store backed by the `projects` table.
#[derive(Debug, Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map a primary-key violation to [`StoreError::DuplicateId`] so it is not
/// mistaken for an unreachable database.
fn insert_error(error: sqlx::Error, id: &str) -> StoreError {
    if let sqlx::Error::Database(db) = &error {
        if db.is_unique_violation() {
            return StoreError::DuplicateId(id.to_string());
        }
    }
    StoreError::Database(error)
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    /// Most recently created first.
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Project::from))
    }

    async fn title_exists(
        &self,
        title: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM projects
                WHERE LOWER(title) = LOWER($1)
                  AND ($2::TEXT IS NULL OR id <> $2)
             )",
        )
        .bind(title)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn insert(&self, project: &Project) -> Result<Project, StoreError> {
        let query = format!(
            "INSERT INTO projects
                (id, title, category, description, completion, details, images, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&project.id)
            .bind(&project.title)
            .bind(&project.category)
            .bind(&project.description)
            .bind(&project.completion)
            .bind(&project.details)
            .bind(&project.images)
            .bind(project.created_at)
            .bind(project.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| insert_error(e, &project.id))?;
        Ok(row.into())
    }

    /// `created_at` is never written; `updated_at` is set from the caller's
    /// record rather than left to a trigger.
    async fn update(&self, project: &Project) -> Result<Option<Project>, StoreError> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                category = $3,
                description = $4,
                completion = $5,
                details = $6,
                images = $7,
                updated_at = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&project.id)
            .bind(&project.title)
            .bind(&project.category)
            .bind(&project.description)
            .bind(&project.completion)
            .bind(&project.details)
            .bind(&project.images)
            .bind(project.updated_at)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Project::from))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

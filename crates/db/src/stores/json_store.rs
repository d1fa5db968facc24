//! Flat-file project store.
//!
//! The whole collection lives in one pretty-printed JSON array. Every call
//! reads the file fresh and every mutation rewrites it whole; there is no
//! locking, so concurrent writers race and the last one wins.
//!
//! Queries treat an unreadable file as empty. Mutations refuse to run
//! against one, so a corrupt file is never overwritten.

use std::path::PathBuf;

use async_trait::async_trait;
use portfolio_core::project::{titles_match, Project};

use super::{ProjectStore, StoreError};

/// Default location of the projects file, relative to the working directory.
pub const DEFAULT_PROJECTS_FILE: &str = "data/projects.json";

/// Project store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonProjectStore {
    path: PathBuf,
}

impl JsonProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every record from the file.
    ///
    /// A missing file is an empty collection. Any I/O or parse failure is
    /// logged and also treated as an empty collection.
    pub async fn read_all(&self) -> Vec<Project> {
        match self.try_read_all().await {
            Ok(projects) => projects,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Failed to read projects file");
                Vec::new()
            }
        }
    }

    /// Read every record ahead of a rewrite, propagating any failure.
    async fn read_for_write(&self) -> Result<Vec<Project>, StoreError> {
        self.try_read_all().await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Projects file unreadable, refusing to rewrite it");
            e
        })
    }

    async fn try_read_all(&self) -> Result<Vec<Project>, StoreError> {
        self.ensure_dir().await?;
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Overwrite the file with `projects`, pretty-printed.
    pub async fn write_all(&self, projects: &[Project]) -> Result<(), StoreError> {
        self.ensure_dir().await?;
        let body = serde_json::to_string_pretty(projects)?;
        tokio::fs::write(&self.path, body).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to write projects file");
            StoreError::from(e)
        })
    }

    async fn ensure_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for JsonProjectStore {
    fn name(&self) -> &'static str {
        "json"
    }

    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.read_all().await)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, StoreError> {
        Ok(self.read_all().await.into_iter().find(|p| p.id == id))
    }

    async fn title_exists(
        &self,
        title: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, StoreError> {
        Ok(self
            .read_all()
            .await
            .iter()
            .any(|p| titles_match(&p.title, title) && Some(p.id.as_str()) != exclude_id))
    }

    async fn insert(&self, project: &Project) -> Result<Project, StoreError> {
        let mut projects = self.read_for_write().await?;
        projects.push(project.clone());
        self.write_all(&projects).await?;
        Ok(project.clone())
    }

    async fn update(&self, project: &Project) -> Result<Option<Project>, StoreError> {
        let mut projects = self.read_for_write().await?;
        let Some(slot) = projects.iter_mut().find(|p| p.id == project.id) else {
            return Ok(None);
        };
        *slot = project.clone();
        self.write_all(&projects).await?;
        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut projects = self.read_for_write().await?;
        let Some(index) = projects.iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        projects.remove(index);
        self.write_all(&projects).await?;
        Ok(true)
    }
}

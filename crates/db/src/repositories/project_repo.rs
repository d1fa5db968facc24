//! Project repository with primary/secondary store fallback.
//!
//! Every operation runs against the primary store when one is configured.
//! A primary error is logged and the whole operation is repeated against
//! the secondary store. A primary miss (unknown id) also falls through to
//! the secondary before the repository reports `NotFound`. Secondary errors
//! have nowhere left to go and surface as [`CoreError::Internal`].
//!
//! The two stores are never reconciled.

use std::sync::Arc;

use portfolio_core::category::CategoryFilter;
use portfolio_core::error::CoreError;
use portfolio_core::project::{Project, ProjectInput, DUPLICATE_TITLE_MESSAGE, ENTITY};
use portfolio_core::types::now;

use crate::stores::{ProjectStore, StoreError};

/// What a single store made of an operation.
#[derive(Debug)]
enum Outcome<T> {
    /// The operation completed.
    Done(T),
    /// The id is not in this store.
    Missing,
    /// The store answered but the request is invalid (validation, duplicate title).
    Rejected(CoreError),
}

/// Orchestrates project CRUD across an optional primary store and a
/// mandatory secondary store.
#[derive(Clone)]
pub struct ProjectRepo {
    primary: Option<Arc<dyn ProjectStore>>,
    secondary: Arc<dyn ProjectStore>,
}

impl ProjectRepo {
    pub fn new(primary: Option<Arc<dyn ProjectStore>>, secondary: Arc<dyn ProjectStore>) -> Self {
        Self { primary, secondary }
    }

    /// A repository with no primary store.
    pub fn secondary_only(secondary: Arc<dyn ProjectStore>) -> Self {
        Self::new(None, secondary)
    }

    pub fn primary_configured(&self) -> bool {
        self.primary.is_some()
    }

    /// Name of the store tried first.
    pub fn primary_name(&self) -> &'static str {
        self.primary
            .as_ref()
            .map_or(self.secondary.name(), |p| p.name())
    }

    /// List projects, newest first when the primary answers, otherwise in
    /// secondary insertion order. `filter` narrows by category.
    pub async fn list(&self, filter: CategoryFilter) -> Result<Vec<Project>, CoreError> {
        let projects = match self.primary.as_deref() {
            Some(primary) => match primary.list().await {
                Ok(projects) => Some(projects),
                Err(e) => {
                    log_fallback(primary, "list", &e);
                    None
                }
            },
            None => None,
        };

        let projects = match projects {
            Some(projects) => projects,
            None => self.secondary.list().await.map_err(secondary_error)?,
        };

        Ok(projects
            .into_iter()
            .filter(|p| filter.matches(&p.category))
            .collect())
    }

    /// Fetch one project by id.
    pub async fn get(&self, id: &str) -> Result<Project, CoreError> {
        if let Some(primary) = self.primary.as_deref() {
            match primary.find_by_id(id).await {
                Ok(Some(project)) => return Ok(project),
                Ok(None) => log_miss(primary, "get", id),
                Err(e) => log_fallback(primary, "get", &e),
            }
        }

        self.secondary
            .find_by_id(id)
            .await
            .map_err(secondary_error)?
            .ok_or_else(|| not_found(id))
    }

    /// Validate `input` and store a new project.
    ///
    /// The id is the slug of the title and both timestamps are "now".
    pub async fn create(&self, input: &ProjectInput) -> Result<Project, CoreError> {
        let project = Project::create(input.validate()?, now())?;

        if let Some(primary) = self.primary.as_deref() {
            match create_in(primary, &project).await {
                Ok(outcome) => return resolve(outcome, &project.id),
                Err(e) => log_fallback(primary, "create", &e),
            }
        }

        let outcome = create_in(self.secondary.as_ref(), &project)
            .await
            .map_err(secondary_error)?;
        resolve(outcome, &project.id)
    }

    /// Merge `input` over the project with `id`.
    ///
    /// Existence is checked before the payload is validated, so an unknown
    /// id is `NotFound` whatever the body holds.
    pub async fn update(&self, id: &str, input: &ProjectInput) -> Result<Project, CoreError> {
        if let Some(primary) = self.primary.as_deref() {
            match update_in(primary, id, input).await {
                Ok(Outcome::Missing) => log_miss(primary, "update", id),
                Ok(outcome) => return resolve(outcome, id),
                Err(e) => log_fallback(primary, "update", &e),
            }
        }

        let outcome = update_in(self.secondary.as_ref(), id, input)
            .await
            .map_err(secondary_error)?;
        resolve(outcome, id)
    }

    /// Hard-delete the project with `id`.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        if let Some(primary) = self.primary.as_deref() {
            match primary.delete(id).await {
                Ok(true) => return Ok(()),
                Ok(false) => log_miss(primary, "delete", id),
                Err(e) => log_fallback(primary, "delete", &e),
            }
        }

        let deleted = self
            .secondary
            .delete(id)
            .await
            .map_err(secondary_error)?;
        if deleted {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

async fn create_in(
    store: &dyn ProjectStore,
    project: &Project,
) -> Result<Outcome<Project>, StoreError> {
    if store.title_exists(&project.title, None).await? {
        return Ok(Outcome::Rejected(duplicate_title()));
    }
    // Distinct titles can share a slug ("Villas" and "Villas!").
    if store.find_by_id(&project.id).await?.is_some() {
        return Ok(Outcome::Rejected(duplicate_id(&project.id)));
    }
    let stored = match store.insert(project).await {
        Ok(stored) => stored,
        Err(StoreError::DuplicateId(id)) => return Ok(Outcome::Rejected(duplicate_id(&id))),
        Err(e) => return Err(e),
    };
    tracing::info!(store = store.name(), id = %stored.id, "Project created");
    Ok(Outcome::Done(stored))
}

async fn update_in(
    store: &dyn ProjectStore,
    id: &str,
    input: &ProjectInput,
) -> Result<Outcome<Project>, StoreError> {
    let Some(existing) = store.find_by_id(id).await? else {
        return Ok(Outcome::Missing);
    };

    let valid = match input.validate() {
        Ok(valid) => valid,
        Err(e) => return Ok(Outcome::Rejected(e)),
    };

    if store.title_exists(&valid.title, Some(id)).await? {
        return Ok(Outcome::Rejected(duplicate_title()));
    }

    let merged = existing.merged(valid, now());
    match store.update(&merged).await? {
        Some(stored) => {
            tracing::info!(store = store.name(), id = %stored.id, "Project updated");
            Ok(Outcome::Done(stored))
        }
        None => Ok(Outcome::Missing),
    }
}

fn resolve<T>(outcome: Outcome<T>, id: &str) -> Result<T, CoreError> {
    match outcome {
        Outcome::Done(value) => Ok(value),
        Outcome::Missing => Err(not_found(id)),
        Outcome::Rejected(e) => Err(e),
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY,
        id: id.to_string(),
    }
}

fn duplicate_title() -> CoreError {
    CoreError::Conflict(DUPLICATE_TITLE_MESSAGE.to_string())
}

fn duplicate_id(id: &str) -> CoreError {
    CoreError::Conflict(format!("Project with id '{id}' already exists"))
}

fn secondary_error(e: StoreError) -> CoreError {
    CoreError::Internal(e.to_string())
}

fn log_fallback(primary: &dyn ProjectStore, op: &'static str, error: &StoreError) {
    tracing::warn!(op, store = primary.name(), error = %error, "Primary store failed, falling back");
}

fn log_miss(primary: &dyn ProjectStore, op: &'static str, id: &str) {
    tracing::debug!(op, store = primary.name(), id, "Not in primary store, checking fallback");
}

//! Handlers for the `/projects` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::project::{Project, ProjectInput};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::ListProjectsParams;
use crate::state::AppState;

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProjectInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let Json(input) = payload?;
    let project = state.projects.create(&input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = state.projects.list(params.filter()?).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = state.projects.get(&id).await?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProjectInput>, JsonRejection>,
) -> AppResult<Json<Project>> {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            // An unknown id is a 404 whatever the body looks like.
            state.projects.get(&id).await?;
            return Err(rejection.into());
        }
    };
    let project = state.projects.update(&id, &input).await?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    state.projects.delete(&id).await?;
    Ok(Json(DeleteResponse {
        message: "Project deleted successfully",
    }))
}

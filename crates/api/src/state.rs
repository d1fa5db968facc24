use std::sync::Arc;

use portfolio_db::repositories::ProjectRepo;
use portfolio_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Project repository (primary store with JSON fallback).
    pub projects: ProjectRepo,
    /// Pool behind the primary store, when one is configured. Used by the
    /// health check only; handlers go through `projects`.
    pub pool: Option<DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

//! Repository layer.
//!
//! Repositories turn store calls into domain results and own the
//! primary/secondary fallback policy.

pub mod project_repo;

pub use project_repo::ProjectRepo;

//! Query parameter types for API handlers.

use portfolio_core::category::CategoryFilter;
use portfolio_core::error::CoreError;
use serde::Deserialize;

/// Query parameters for `GET /projects` (`?category=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsParams {
    pub category: Option<String>,
}

impl ListProjectsParams {
    /// Parse the category filter; absent means all projects.
    pub fn filter(&self) -> Result<CategoryFilter, CoreError> {
        self.category
            .as_deref()
            .map_or(Ok(CategoryFilter::All), |c| c.parse())
    }
}

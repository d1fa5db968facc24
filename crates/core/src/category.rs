//! Project categories and the public listing filter.

use std::str::FromStr;

use crate::error::CoreError;

/// Category labels offered by the admin project form.
///
/// Stored categories are free text; this list is the set the admin panel
/// presents, not a constraint enforced on writes.
pub const CATEGORIES: &[&str] = &[
    "Residential Construction",
    "Commercial Construction",
    "Renovations & Remodeling",
    "Land Subdivision",
    "Road Construction",
    "Landscaping & Outdoor Living",
];

/// Filter applied by the public projects listing (`?category=`).
///
/// Matching is a case-insensitive substring test on the stored category,
/// so labels outside [`CATEGORIES`] still land in a sensible bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Residential,
    Commercial,
    Renovations,
    Roads,
}

impl CategoryFilter {
    /// Whether a project with the given category passes this filter.
    pub fn matches(self, category: &str) -> bool {
        let upper = category.to_uppercase();
        match self {
            Self::All => true,
            Self::Residential => upper.contains("RESIDENTIAL"),
            Self::Commercial => upper.contains("COMMERCIAL"),
            Self::Renovations => upper.contains("RENOVATION") || upper.contains("REMODELING"),
            Self::Roads => upper.contains("ROAD"),
        }
    }

    /// Query-string value.
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Renovations => "renovations",
            Self::Roads => "roads",
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            "renovations" => Ok(Self::Renovations),
            "roads" => Ok(Self::Roads),
            other => Err(CoreError::Validation(format!(
                "Unknown category filter '{other}'. Must be one of: all, residential, commercial, renovations, roads"
            ))),
        }
    }
}

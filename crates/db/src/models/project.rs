//! Database row shape for the `projects` table.

use portfolio_core::project::Project;
use portfolio_core::types::Timestamp;
use sqlx::FromRow;

/// A row from the `projects` table (snake_case timestamp columns).
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub completion: String,
    pub details: Vec<String>,
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            category: row.category,
            description: row.description,
            completion: row.completion,
            details: row.details,
            images: row.images,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn row_timestamps_become_camel_case_fields() {
        let created = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let updated = chrono::Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap();
        let row = ProjectRow {
            id: "luxury-villas".into(),
            title: "Luxury Villas".into(),
            category: "Residential Construction".into(),
            description: "Six villas".into(),
            completion: "2024".into(),
            details: vec!["Pool".into()],
            images: vec![],
            created_at: created,
            updated_at: updated,
        };

        let json = serde_json::to_value(Project::from(row)).unwrap();
        assert_eq!(json["createdAt"], "2024-03-01T08:00:00.000Z");
        assert_eq!(json["updatedAt"], "2024-03-02T08:00:00.000Z");
        assert_eq!(json["details"], serde_json::json!(["Pool"]));
    }
}

//! Project entity, request input, and the write-side rules applied before
//! a project reaches any store.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::slug::slugify;
use crate::types::{iso8601, Timestamp};

/// Entity name used in error messages.
pub const ENTITY: &str = "Project";

/// Message returned when a title collides with an existing project.
pub const DUPLICATE_TITLE_MESSAGE: &str = "Project with this title already exists";

/// A portfolio entry as served by the API and stored in the JSON file.
///
/// Field order is the on-disk order; keep it stable so rewriting the file
/// does not shuffle keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub completion: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(with = "iso8601")]
    pub created_at: Timestamp,
    #[serde(with = "iso8601")]
    pub updated_at: Timestamp,
}

/// Request body for `POST /projects` and `PUT /projects/{id}`.
///
/// Every field is optional at the parsing level so that missing fields
/// surface as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completion: Option<String>,
    #[serde(default)]
    pub details: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

/// A [`ProjectInput`] that passed validation.
///
/// `details` is already cleaned. `None` for `details`/`images` means the
/// caller did not send the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProjectInput {
    pub title: String,
    pub category: String,
    pub description: String,
    pub completion: String,
    pub details: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

impl ProjectInput {
    /// Check the required fields and clean `details`.
    ///
    /// `title`, `category`, `description` and `completion` must be present
    /// and contain something other than whitespace. The error message lists
    /// every missing field.
    pub fn validate(&self) -> Result<ValidProjectInput, CoreError> {
        let required = [
            ("title", &self.title),
            ("category", &self.category),
            ("description", &self.description),
            ("completion", &self.completion),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| !is_present(value.as_deref()))
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(CoreError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(ValidProjectInput {
            title: self.title.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            completion: self.completion.clone().unwrap_or_default(),
            details: self.details.as_deref().map(clean_details),
            images: self.images.clone(),
        })
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Drop empty and whitespace-only entries, preserving order.
///
/// Kept entries are stored as sent (not trimmed).
pub fn clean_details(details: &[String]) -> Vec<String> {
    details
        .iter()
        .filter(|d| !d.trim().is_empty())
        .cloned()
        .collect()
}

/// Case-insensitive title comparison used by the duplicate-title check.
pub fn titles_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl Project {
    /// Build a new project from validated input.
    ///
    /// The id is the slug of the title; both timestamps are `now`. A title
    /// with no letters or digits has no usable id and is rejected.
    pub fn create(input: ValidProjectInput, now: Timestamp) -> Result<Self, CoreError> {
        let id = slugify(&input.title);
        if id.trim_matches('-').is_empty() {
            return Err(CoreError::Validation(
                "Title must contain at least one letter or digit".to_string(),
            ));
        }
        Ok(Self {
            id,
            title: input.title,
            category: input.category,
            description: input.description,
            completion: input.completion,
            details: input.details.unwrap_or_default(),
            images: input.images.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Return a copy with `input` merged over this project.
    ///
    /// Required fields are replaced. `details` and `images` are replaced
    /// only when supplied. `id` and `created_at` never change, and
    /// `updated_at` never moves before `created_at`.
    pub fn merged(&self, input: ValidProjectInput, now: Timestamp) -> Self {
        Self {
            id: self.id.clone(),
            title: input.title,
            category: input.category,
            description: input.description,
            completion: input.completion,
            details: input.details.unwrap_or_else(|| self.details.clone()),
            images: input.images.unwrap_or_else(|| self.images.clone()),
            created_at: self.created_at,
            updated_at: now.max(self.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts(secs: i64) -> Timestamp {
        chrono::Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn full_input() -> ProjectInput {
        ProjectInput {
            title: Some("Driveway Asphalting!".into()),
            category: Some("Road Construction".into()),
            description: Some("Resurfaced a 200m private driveway".into()),
            completion: Some("2024".into()),
            details: Some(vec!["Good work".into(), "  ".into(), "".into()]),
            images: None,
        }
    }

    #[test]
    fn validate_accepts_full_input_and_cleans_details() {
        let valid = full_input().validate().unwrap();
        assert_eq!(valid.details, Some(vec!["Good work".to_string()]));
        assert_eq!(valid.images, None);
    }

    #[test]
    fn validate_lists_every_missing_field() {
        let input = ProjectInput {
            title: Some("".into()),
            category: None,
            description: Some("   ".into()),
            completion: Some("2023".into()),
            ..Default::default()
        };
        match input.validate() {
            Err(CoreError::Validation(msg)) => {
                assert_eq!(msg, "Missing required fields: title, category, description");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_derives_id_and_stamps_both_timestamps() {
        let project = Project::create(full_input().validate().unwrap(), ts(100)).unwrap();
        assert_eq!(project.id, "driveway-asphalting");
        assert_eq!(project.created_at, ts(100));
        assert_eq!(project.updated_at, ts(100));
        assert_eq!(project.details, vec!["Good work"]);
        assert!(project.images.is_empty());
    }

    #[test]
    fn create_rejects_title_without_letters_or_digits() {
        for title in ["!!!", " & ", "¿?"] {
            let mut input = full_input();
            input.title = Some(title.into());
            let result = Project::create(input.validate().unwrap(), ts(100));
            assert!(
                matches!(result, Err(CoreError::Validation(_))),
                "title {title:?} should be rejected"
            );
        }
    }

    #[test]
    fn merged_keeps_id_and_created_at() {
        let original = Project::create(full_input().validate().unwrap(), ts(100)).unwrap();
        let mut input = full_input();
        input.title = Some("Driveway Resurfacing".into());
        let updated = original.merged(input.validate().unwrap(), ts(200));

        assert_eq!(updated.id, "driveway-asphalting");
        assert_eq!(updated.title, "Driveway Resurfacing");
        assert_eq!(updated.created_at, ts(100));
        assert_eq!(updated.updated_at, ts(200));
    }

    #[test]
    fn merged_keeps_lists_when_not_supplied() {
        let mut input = full_input();
        input.images = Some(vec!["eleven-star/projects/driveway-1".into()]);
        let original = Project::create(input.validate().unwrap(), ts(100)).unwrap();

        let mut patch = full_input();
        patch.details = None;
        patch.images = None;
        let updated = original.merged(patch.validate().unwrap(), ts(200));

        assert_eq!(updated.details, original.details);
        assert_eq!(updated.images, original.images);
    }

    #[test]
    fn merged_replaces_lists_when_supplied() {
        let original = Project::create(full_input().validate().unwrap(), ts(100)).unwrap();
        let mut patch = full_input();
        patch.details = Some(vec![]);
        let updated = original.merged(patch.validate().unwrap(), ts(200));
        assert!(updated.details.is_empty());
    }

    #[test]
    fn merged_never_moves_updated_at_before_created_at() {
        let original = Project::create(full_input().validate().unwrap(), ts(500)).unwrap();
        let updated = original.merged(full_input().validate().unwrap(), ts(100));
        assert_eq!(updated.updated_at, ts(500));
    }

    #[test]
    fn titles_match_ignores_case() {
        assert!(titles_match("Luxury Villas", "luxury villas"));
        assert!(!titles_match("Luxury Villas", "Luxury Villa"));
    }

    #[test]
    fn serializes_camel_case_with_millisecond_timestamps() {
        let project = Project::create(full_input().validate().unwrap(), ts(0)).unwrap();
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00.000Z");
        assert_eq!(json["updatedAt"], "1970-01-01T00:00:00.000Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn deserializes_offset_timestamps() {
        let json = serde_json::json!({
            "id": "a",
            "title": "A",
            "category": "Land Subdivision",
            "description": "d",
            "completion": "2022",
            "createdAt": "2024-01-02T03:04:05.123456+00:00",
            "updatedAt": "2024-01-02T03:04:05.123Z"
        });
        let project: Project = serde_json::from_value(json).unwrap();
        assert!(project.details.is_empty());
        assert_eq!(
            serde_json::to_value(&project).unwrap()["createdAt"],
            "2024-01-02T03:04:05.123Z"
        );
    }
}

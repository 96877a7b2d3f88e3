use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::validation::ValidationResult;
use crate::domain::validator::Entity;
use crate::domain::value_objects::{Description, Name};
use crate::domain::RequestResult;

/// A grouping videos can be filed under.
///
/// Only reachable through the factories below, all of which validate the
/// name and description, so a `Category` in hand is always well formed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    /// Assigned by persistence; 0 until stored
    id: i64,

    name: Name,

    description: Description,

    /// Creation timestamp
    created_at: DateTime<Utc>,

    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Category {
    /// Identifier of a category that has not been stored yet
    pub const UNSAVED_ID: i64 = 0;

    /// Create a new, not yet persisted category
    pub fn create(name: &str, description: &str) -> RequestResult<Category> {
        let now = Utc::now();
        Self::build(Self::UNSAVED_ID, name, description, now, now)
    }

    /// Rebuild a category from stored columns
    pub fn from_persistence(
        id: i64,
        name: &str,
        description: &str,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> RequestResult<Category> {
        Self::build(id, name, description, created_at, updated_at)
    }

    fn build(
        id: i64,
        name: &str,
        description: &str,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> RequestResult<Category> {
        let mut validation = ValidationResult::new();
        let name = validation.capture(Name::create(name));
        let description = validation.capture(Description::create(description));

        match (name, description) {
            (Some(name), Some(description)) => RequestResult::Success(Self {
                id,
                name,
                description,
                created_at,
                updated_at,
            }),
            _ => validation.into(),
        }
    }

    /// Same category addressed by `id`; used on the update path
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Replace name and description, refreshing `updated_at`.
    /// Leaves `self` untouched when either value is rejected.
    pub fn update(&mut self, name: &str, description: &str) -> RequestResult<()> {
        let mut validation = ValidationResult::new();
        let name = validation.capture(Name::create(name));
        let description = validation.capture(Description::create(description));

        match (name, description) {
            (Some(name), Some(description)) => {
                self.name = name;
                self.description = description;
                self.updated_at = Utc::now();
                RequestResult::Success(())
            }
            _ => validation.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Category {
    const NAME: &'static str = "Category";

    fn has_identity(&self) -> bool {
        self.id > Self::UNSAVED_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RequestStatus;

    #[test]
    fn test_create_round_trips_inputs() {
        let category = Category::create("Programming", "Talks and live coding")
            .into_data()
            .unwrap();

        assert_eq!(category.name().value(), "Programming");
        assert_eq!(category.description().value(), "Talks and live coding");
        assert_eq!(category.id(), Category::UNSAVED_ID);
        assert!(!category.has_identity());
    }

    #[test]
    fn test_create_reports_every_bad_field() {
        let result = Category::create("ab", "");

        assert_eq!(result.status(), RequestStatus::Validations);
        let fields: Vec<&str> = result.validations().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Name", "Description"]);
    }

    #[test]
    fn test_with_id_gives_identity() {
        let category = Category::create("Programming", "Talks").into_data().unwrap().with_id(9);
        assert_eq!(category.id(), 9);
        assert!(category.has_identity());
    }

    #[test]
    fn test_update_rejects_without_mutating() {
        let mut category = Category::create("Programming", "Talks").into_data().unwrap();
        let before = category.clone();

        let result = category.update("x", "Still fine");

        assert_eq!(result.status(), RequestStatus::Validations);
        assert_eq!(category, before);
    }

    #[test]
    fn test_update_applies_valid_values() {
        let mut category = Category::create("Programming", "Talks").into_data().unwrap();
        assert!(category.update("Gaming", "Speedruns").is_success());
        assert_eq!(category.name().value(), "Gaming");
        assert_eq!(category.description().value(), "Speedruns");
        assert!(category.updated_at() >= category.created_at());
    }
}

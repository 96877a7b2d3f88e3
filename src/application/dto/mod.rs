// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// - Request DTOs carry raw primitives exactly as they arrive
// - `check()` is the coarse presence/length gate run before a use case;
//   the domain validates again, with the full rules
// - Response DTOs are built from entities only

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, Description, Name, ValidationResult, Video};
use crate::use_cases::{
    CreateCategoryRequest, CreateVideoRequest, PageRequest, UpdateCategoryRequest,
    UpdateVideoRequest,
};

/// Presence plus an upper bound on characters
fn check_text(result: &mut ValidationResult, field: &'static str, value: &str, max: usize) {
    if value.trim().is_empty() {
        result.add_error(field, format!("{} is required", field));
    } else if value.chars().count() > max {
        result.add_error(field, format!("{} must be at most {} characters", field, max));
    }
}

// ============================================================================
// CATEGORY DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRequestDto {
    pub name: String,
    pub description: String,
}

impl CategoryRequestDto {
    pub fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        check_text(&mut result, Name::FIELD, &self.name, Name::MAX_LENGTH);
        check_text(&mut result, Description::FIELD, &self.description, Description::MAX_LENGTH);
        result
    }
}

impl From<CategoryRequestDto> for CreateCategoryRequest {
    fn from(dto: CategoryRequestDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryRequestDto {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl UpdateCategoryRequestDto {
    pub fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        check_text(&mut result, Name::FIELD, &self.name, Name::MAX_LENGTH);
        check_text(&mut result, Description::FIELD, &self.description, Description::MAX_LENGTH);
        result
    }
}

impl From<UpdateCategoryRequestDto> for UpdateCategoryRequest {
    fn from(dto: UpdateCategoryRequestDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryIdDto {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().value().to_string(),
            description: category.description().value().to_string(),
            created_at: category.created_at().to_rfc3339(),
            updated_at: category.updated_at().to_rfc3339(),
        }
    }
}

// ============================================================================
// VIDEO DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRequestDto {
    pub title: String,
    pub description: String,
    pub url: String,
    pub user_id: String,
}

/// Video fields share one coarse rule set for create and update
fn check_video_fields(title: &str, description: &str, url: &str, user_id: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.ensure(!title.trim().is_empty(), "Title", "Title is required");
    check_text(
        &mut result,
        "Description",
        description,
        crate::domain::video::DESCRIPTION_MAX_LENGTH,
    );
    result
        .ensure(!url.trim().is_empty(), "Url", "Url is required")
        .ensure(!user_id.trim().is_empty(), "UserId", "UserId is required");
    result
}

impl VideoRequestDto {
    pub fn check(&self) -> ValidationResult {
        check_video_fields(&self.title, &self.description, &self.url, &self.user_id)
    }
}

impl From<VideoRequestDto> for CreateVideoRequest {
    fn from(dto: VideoRequestDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            url: dto.url,
            user_id: dto.user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVideoRequestDto {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub url: String,
    pub user_id: String,
}

impl UpdateVideoRequestDto {
    pub fn check(&self) -> ValidationResult {
        check_video_fields(&self.title, &self.description, &self.url, &self.user_id)
    }
}

impl From<UpdateVideoRequestDto> for UpdateVideoRequest {
    fn from(dto: UpdateVideoRequestDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            url: dto.url,
            user_id: dto.user_id,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VideoIdDto {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResponseDto {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub url: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Video> for VideoResponseDto {
    fn from(video: Video) -> Self {
        Self {
            id: video.id().map(|id| id.to_string()),
            title: video.title().to_string(),
            description: video.description().to_string(),
            url: video.url().to_string(),
            user_id: video.user_id().to_string(),
            created_at: video.created_at().to_rfc3339(),
            updated_at: video.updated_at().to_rfc3339(),
        }
    }
}

// ============================================================================
// PAGING DTOs
// ============================================================================

/// Missing fields fall back to the first page of ten
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequestDto {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_page() -> u32 {
    PageRequest::default().page
}

fn default_size() -> u32 {
    PageRequest::default().size
}

impl Default for PageRequestDto {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
        }
    }
}

impl From<PageRequestDto> for PageRequest {
    fn from(dto: PageRequestDto) -> Self {
        PageRequest::new(dto.page, dto.size)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponseDto<T> {
    pub page: u32,
    pub size: u32,
    pub items: Vec<T>,
}

impl<T> PagedResponseDto<T> {
    pub fn new<E>(paging: PageRequest, entities: Vec<E>) -> Self
    where
        T: From<E>,
    {
        Self {
            page: paging.page,
            size: paging.size,
            items: entities.into_iter().map(T::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_check_is_coarse() {
        // Too short for `Name`, but present and under the cap
        let dto = CategoryRequestDto {
            name: "ab".to_string(),
            description: "Talks".to_string(),
        };
        assert!(dto.check().is_valid());

        let dto = CategoryRequestDto {
            name: "x".repeat(51),
            description: "  ".to_string(),
        };
        let fields: Vec<String> = dto.check().into_errors().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["Name", "Description"]);
    }

    #[test]
    fn test_video_check_reports_missing_fields() {
        let dto = VideoRequestDto {
            title: String::new(),
            description: "d".repeat(201),
            url: "https://cdn/v.mp4".to_string(),
            user_id: String::new(),
        };
        let fields: Vec<String> = dto.check().into_errors().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["Title", "Description", "UserId"]);
    }

    #[test]
    fn test_update_video_dto_accepts_missing_id() {
        let dto: UpdateVideoRequestDto = serde_json::from_str(
            r#"{"title":"t","description":"long enough","url":"u","user_id":"x"}"#,
        )
        .unwrap();
        assert!(dto.id.is_none());
        assert!(UpdateVideoRequest::from(dto).id.is_none());
    }

    #[test]
    fn test_page_request_defaults() {
        let dto: PageRequestDto = serde_json::from_str("{}").unwrap();
        assert_eq!(PageRequest::from(dto), PageRequest::new(1, 10));
    }

    #[test]
    fn test_category_response_from_entity() {
        let category = Category::create("Programming", "Talks")
            .into_data()
            .unwrap()
            .with_id(3);
        let dto = CategoryResponseDto::from(category);
        assert_eq!(dto.id, 3);
        assert_eq!(dto.name, "Programming");
        assert_eq!(dto.description, "Talks");
    }

    #[test]
    fn test_paged_response_converts_items() {
        let categories = vec![
            Category::create("Gaming", "Speedruns").into_data().unwrap().with_id(1),
            Category::create("Music", "Live sets").into_data().unwrap().with_id(2),
        ];
        let page: PagedResponseDto<CategoryResponseDto> =
            PagedResponseDto::new(PageRequest::new(1, 2), categories);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].name, "Music");
    }
}

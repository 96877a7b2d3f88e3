// src/use_cases/use_case_tests.rs
//
// Orchestration tests against mocked repositories.
//
// The mocks carry the counting: `.never()` fails the test if the use case
// reaches persistence, `.times(1)` if it calls more than once.

use std::sync::Arc;

use mockall::predicate::eq;
use uuid::Uuid;

use super::*;
use crate::domain::{Category, CategoryValidator, RequestStatus, Video, VideoValidator};
use crate::repositories::{MockCategoryRepository, MockVideoRepository};

// ============================================================================
// HELPERS
// ============================================================================

fn create_category_use_case(repo: MockCategoryRepository) -> CreateCategoryUseCase {
    CreateCategoryUseCase::new(Arc::new(repo), Arc::new(CategoryValidator))
}

fn update_category_use_case(repo: MockCategoryRepository) -> UpdateCategoryUseCase {
    UpdateCategoryUseCase::new(Arc::new(repo), Arc::new(CategoryValidator))
}

fn create_video_use_case(repo: MockVideoRepository) -> CreateVideoUseCase {
    CreateVideoUseCase::new(Arc::new(repo), Arc::new(VideoValidator))
}

fn update_video_use_case(repo: MockVideoRepository) -> UpdateVideoUseCase {
    UpdateVideoUseCase::new(Arc::new(repo), Arc::new(VideoValidator))
}

fn category_request(name: &str, description: &str) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn video_request(description: &str) -> CreateVideoRequest {
    CreateVideoRequest {
        title: "Pin and Unpin".to_string(),
        description: description.to_string(),
        url: "https://cdn.onforkhub.dev/v/pin.mp4".to_string(),
        user_id: "user-1".to_string(),
    }
}

fn stored_category(id: i64) -> Category {
    Category::create("Programming", "Talks").into_data().unwrap().with_id(id)
}

// ============================================================================
// CREATE CATEGORY
// ============================================================================

#[tokio::test]
async fn test_create_category_null_request_never_touches_repository() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_create().never();

    let result = create_category_use_case(repo).execute(None).await;

    assert!(matches!(result, Err(AppError::ArgumentNull(_))));
}

#[tokio::test]
async fn test_create_category_factory_failure_is_error_without_io() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_create().never();

    let result = create_category_use_case(repo)
        .execute(Some(category_request("ab", "Short name")))
        .await
        .unwrap();

    assert_eq!(result.status(), RequestStatus::Error);
    assert!(result.validations().is_empty());
    assert!(result.data().is_none());
    assert_eq!(
        result.message().as_deref(),
        Some("Name: Name must be between 3 and 50 characters")
    );
}

#[tokio::test]
async fn test_create_category_factory_failure_lists_every_field() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_create().never();

    let result = create_category_use_case(repo)
        .execute(Some(category_request("", " ")))
        .await
        .unwrap();

    assert_eq!(result.status(), RequestStatus::Error);
    let message = result.message().unwrap_or_default();
    assert!(message.starts_with("Name: "), "{}", message);
    assert!(message.contains("; Description: "), "{}", message);
}

#[tokio::test]
async fn test_create_category_persists_exactly_once() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|category| RequestResult::Success(category.with_id(11)));

    let result = create_category_use_case(repo)
        .execute(Some(category_request("Programming", "Talks and live coding")))
        .await
        .unwrap();

    let category = result.into_data().unwrap();
    assert_eq!(category.id(), 11);
    assert_eq!(category.name().value(), "Programming");
    assert_eq!(category.description().value(), "Talks and live coding");
}

#[tokio::test]
async fn test_create_category_repository_failure_is_error_without_data() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|_| RequestResult::error("database is locked"));

    let result = create_category_use_case(repo)
        .execute(Some(category_request("Programming", "Talks")))
        .await
        .unwrap();

    assert_eq!(result.status(), RequestStatus::Error);
    assert!(result.data().is_none());
    assert_eq!(result.message().as_deref(), Some("database is locked"));
}

#[tokio::test]
async fn test_create_category_conflict_passes_through() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|_| RequestResult::already_exists("Category 'Programming' already exists"));

    let result = create_category_use_case(repo)
        .execute(Some(category_request("Programming", "Talks")))
        .await
        .unwrap();

    assert_eq!(result.status(), RequestStatus::EntityAlreadyExists);
}

// ============================================================================
// UPDATE / DELETE / QUERY CATEGORY
// ============================================================================

#[tokio::test]
async fn test_update_category_without_id_is_rejected() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_update().never();

    let result = update_category_use_case(repo)
        .execute(Some(UpdateCategoryRequest {
            id: 0,
            name: "Programming".to_string(),
            description: "Talks".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(result.validations().len(), 1);
    assert_eq!(result.validations()[0].field, "Id");
}

#[tokio::test]
async fn test_update_category_sends_identified_entity() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_update()
        .withf(|category| category.id() == 5 && category.name().value() == "Gaming")
        .times(1)
        .returning(RequestResult::Success);

    let result = update_category_use_case(repo)
        .execute(Some(UpdateCategoryRequest {
            id: 5,
            name: "Gaming".to_string(),
            description: "Speedruns".to_string(),
        }))
        .await
        .unwrap();

    assert!(result.is_success());
}

#[tokio::test]
async fn test_delete_category_rejects_non_positive_id() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_delete().never();

    let result = DeleteCategoryUseCase::new(Arc::new(repo))
        .execute(Some(-1))
        .await
        .unwrap();

    assert_eq!(result.status(), RequestStatus::Validations);
}

#[tokio::test]
async fn test_get_category_not_found_passes_through() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_get_by_id()
        .with(eq(8))
        .times(1)
        .returning(|id| RequestResult::not_found(format!("Category {} not found", id)));

    let result = GetCategoryByIdUseCase::new(Arc::new(repo))
        .execute(Some(8))
        .await
        .unwrap();

    assert_eq!(result.status(), RequestStatus::EntityNotFound);
}

#[tokio::test]
async fn test_get_categories_forwards_paging() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_get()
        .with(eq(2), eq(10))
        .times(1)
        .returning(|_, _| RequestResult::Success(vec![stored_category(11), stored_category(12)]));

    let result = GetCategoriesUseCase::new(Arc::new(repo))
        .execute(Some(PageRequest::new(2, 10)))
        .await
        .unwrap();

    assert_eq!(result.into_data().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_categories_rejects_bad_paging() {
    let mut repo = MockCategoryRepository::new();
    repo.expect_get().never();

    let result = GetCategoriesUseCase::new(Arc::new(repo))
        .execute(Some(PageRequest::new(0, 10)))
        .await
        .unwrap();

    assert_eq!(result.validations()[0].field, "Page");
}

// ============================================================================
// VIDEOS
// ============================================================================

#[tokio::test]
async fn test_create_video_null_request_never_touches_repository() {
    let mut repo = MockVideoRepository::new();
    repo.expect_create().never();

    let result = create_video_use_case(repo).execute(None).await;

    assert!(matches!(result, Err(AppError::ArgumentNull(_))));
}

#[tokio::test]
async fn test_create_video_short_description_fails_validation() {
    let mut repo = MockVideoRepository::new();
    repo.expect_create().never();

    let result = create_video_use_case(repo)
        .execute(Some(video_request("tiny")))
        .await
        .unwrap();

    assert_eq!(result.status(), RequestStatus::Validations);
    assert_eq!(result.validations().len(), 1);
    assert_eq!(result.validations()[0].field, "Description");
}

#[tokio::test]
async fn test_create_video_missing_fields_are_all_reported() {
    let mut repo = MockVideoRepository::new();
    repo.expect_create().never();

    let result = create_video_use_case(repo)
        .execute(Some(CreateVideoRequest {
            title: String::new(),
            description: "A long enough description".to_string(),
            url: String::new(),
            user_id: String::new(),
        }))
        .await
        .unwrap();

    assert_eq!(result.status(), RequestStatus::Error);
    assert_eq!(
        result.message().as_deref(),
        Some("Title: Title is required; Url: Url is required; UserId: UserId is required")
    );
}

#[tokio::test]
async fn test_create_video_missing_title_and_short_description_both_reported() {
    let mut repo = MockVideoRepository::new();
    repo.expect_create().never();

    let result = create_video_use_case(repo)
        .execute(Some(CreateVideoRequest {
            title: String::new(),
            description: "abc".to_string(),
            url: "https://x".to_string(),
            user_id: "u".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(result.status(), RequestStatus::Error);
    assert!(result.data().is_none());
    let message = result.message().unwrap_or_default();
    let fields: Vec<&str> = message
        .split("; ")
        .filter_map(|entry| entry.split(": ").next())
        .collect();
    assert_eq!(fields, vec!["Title", "Description"]);
}

#[tokio::test]
async fn test_create_video_persists_exactly_once() {
    let id = Uuid::new_v4();
    let mut repo = MockVideoRepository::new();
    repo.expect_create()
        .times(1)
        .returning(move |video| RequestResult::Success(video.with_id(id)));

    let result = create_video_use_case(repo)
        .execute(Some(video_request("How pinning works under the hood")))
        .await
        .unwrap();

    assert_eq!(result.into_data().and_then(|v| v.id()), Some(id));
}

#[tokio::test]
async fn test_create_video_repository_failure_is_error_without_data() {
    let mut repo = MockVideoRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|_| RequestResult::error("Create video failed: disk I/O error"));

    let result = create_video_use_case(repo)
        .execute(Some(video_request("How pinning works under the hood")))
        .await
        .unwrap();

    assert_eq!(result.status(), RequestStatus::Error);
    assert!(result.into_data().is_none());
}

#[tokio::test]
async fn test_update_video_without_id_reports_only_id() {
    let mut repo = MockVideoRepository::new();
    repo.expect_update().never();

    let result = update_video_use_case(repo)
        .execute(Some(UpdateVideoRequest {
            id: None,
            title: "Pin and Unpin".to_string(),
            description: "How pinning works".to_string(),
            url: "https://cdn/v.mp4".to_string(),
            user_id: "user-1".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(result.validations().len(), 1);
    assert_eq!(result.validations()[0].field, "Id");
}

#[tokio::test]
async fn test_update_video_forwards_identified_entity() {
    let id = Uuid::new_v4();
    let mut repo = MockVideoRepository::new();
    repo.expect_update()
        .withf(move |video: &Video| video.id() == Some(id))
        .times(1)
        .returning(RequestResult::Success);

    let result = update_video_use_case(repo)
        .execute(Some(UpdateVideoRequest {
            id: Some(id),
            title: "Pin and Unpin".to_string(),
            description: "How pinning works".to_string(),
            url: "https://cdn/v.mp4".to_string(),
            user_id: "user-1".to_string(),
        }))
        .await
        .unwrap();

    assert!(result.is_success());
}

#[tokio::test]
async fn test_delete_video_forwards_id() {
    let id = Uuid::new_v4();
    let mut repo = MockVideoRepository::new();
    repo.expect_delete()
        .with(eq(id))
        .times(1)
        .returning(|id| RequestResult::not_found(format!("Video {} not found", id)));

    let result = DeleteVideoUseCase::new(Arc::new(repo))
        .execute(Some(id))
        .await
        .unwrap();

    assert_eq!(result.status(), RequestStatus::EntityNotFound);
}

#[tokio::test]
async fn test_get_video_null_request_is_argument_error() {
    let mut repo = MockVideoRepository::new();
    repo.expect_get_by_id().never();

    let result = GetVideoByIdUseCase::new(Arc::new(repo)).execute(None).await;

    assert!(matches!(result, Err(AppError::ArgumentNull(_))));
}

#[tokio::test]
async fn test_get_videos_rejects_oversized_page() {
    let mut repo = MockVideoRepository::new();
    repo.expect_get().never();

    let result = GetVideosUseCase::new(Arc::new(repo))
        .execute(Some(PageRequest::new(1, PageRequest::MAX_SIZE + 1)))
        .await
        .unwrap();

    assert_eq!(result.validations()[0].field, "Size");
}

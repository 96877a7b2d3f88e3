// src/application/state.rs

use std::sync::Arc;

use crate::domain::{CategoryValidator, VideoValidator};
use crate::repositories::{CategoryRepository, VideoRepository};
use crate::use_cases::{
    CreateCategoryUseCase, CreateVideoUseCase, DeleteCategoryUseCase, DeleteVideoUseCase,
    GetCategoriesUseCase, GetCategoryByIdUseCase, GetVideoByIdUseCase, GetVideosUseCase,
    UpdateCategoryUseCase, UpdateVideoUseCase,
};

/// Application state shared by every command.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
/// Repositories are built in main.rs and passed here.
pub struct AppState {
    pub create_category: Arc<CreateCategoryUseCase>,
    pub update_category: Arc<UpdateCategoryUseCase>,
    pub delete_category: Arc<DeleteCategoryUseCase>,
    pub get_category_by_id: Arc<GetCategoryByIdUseCase>,
    pub get_categories: Arc<GetCategoriesUseCase>,

    pub create_video: Arc<CreateVideoUseCase>,
    pub update_video: Arc<UpdateVideoUseCase>,
    pub delete_video: Arc<DeleteVideoUseCase>,
    pub get_video_by_id: Arc<GetVideoByIdUseCase>,
    pub get_videos: Arc<GetVideosUseCase>,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        videos: Arc<dyn VideoRepository>,
    ) -> Self {
        let category_validator = Arc::new(CategoryValidator);
        let video_validator = Arc::new(VideoValidator);

        Self {
            create_category: Arc::new(CreateCategoryUseCase::new(
                categories.clone(),
                category_validator.clone(),
            )),
            update_category: Arc::new(UpdateCategoryUseCase::new(
                categories.clone(),
                category_validator,
            )),
            delete_category: Arc::new(DeleteCategoryUseCase::new(categories.clone())),
            get_category_by_id: Arc::new(GetCategoryByIdUseCase::new(categories.clone())),
            get_categories: Arc::new(GetCategoriesUseCase::new(categories)),

            create_video: Arc::new(CreateVideoUseCase::new(videos.clone(), video_validator.clone())),
            update_video: Arc::new(UpdateVideoUseCase::new(videos.clone(), video_validator)),
            delete_video: Arc::new(DeleteVideoUseCase::new(videos.clone())),
            get_video_by_id: Arc::new(GetVideoByIdUseCase::new(videos.clone())),
            get_videos: Arc::new(GetVideosUseCase::new(videos)),
        }
    }
}

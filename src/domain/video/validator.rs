use super::entity::Video;
use crate::domain::validation::ValidationResult;
use crate::domain::validator::EntityValidator;

pub const DESCRIPTION_MIN_LENGTH: usize = 5;
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

/// Video rules, each checked independently:
///
/// 1. Title is required
/// 2. Description is 5 to 200 characters
/// 3. Url is required
/// 4. UserId is required
/// 5. Updates address a stored video (Id present)
#[derive(Debug, Default, Clone, Copy)]
pub struct VideoValidator;

impl EntityValidator<Video> for VideoValidator {
    fn validate_fields(&self, video: &Video) -> ValidationResult {
        check_video_fields(video.title(), video.description(), video.url(), video.user_id())
    }
}

/// Rules 1 to 4 over raw field values.
///
/// Shared with the `Video` factory so a rejected build reports the same
/// complete error set the validator would.
pub fn check_video_fields(title: &str, description: &str, url: &str, user_id: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.ensure(!title.trim().is_empty(), "Title", "Title is required");

    let description_length = description.chars().count();
    result.ensure(
        (DESCRIPTION_MIN_LENGTH..=DESCRIPTION_MAX_LENGTH).contains(&description_length),
        "Description",
        format!(
            "Description must be between {} and {} characters",
            DESCRIPTION_MIN_LENGTH, DESCRIPTION_MAX_LENGTH
        ),
    );

    result.ensure(!url.trim().is_empty(), "Url", "Url is required");
    result.ensure(!user_id.trim().is_empty(), "UserId", "UserId is required");

    result
}

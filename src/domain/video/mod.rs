pub mod entity;
pub mod validator;

pub use entity::Video;
pub use validator::{
    check_video_fields, VideoValidator, DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH,
};

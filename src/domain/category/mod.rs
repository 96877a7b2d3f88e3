pub mod entity;
pub mod validator;

pub use entity::Category;
pub use validator::CategoryValidator;

pub mod error;
pub mod health;
pub mod lists;

pub use error::ApiError;

// Common types and utilities shared across the application

pub mod database;
pub mod error;
pub mod validation;

pub use error::{ApiError, ApiResult};
pub use validation::{current_year, FieldError, ValidationErrors, Validator};

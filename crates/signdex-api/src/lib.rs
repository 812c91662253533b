//! HTTP client for the sign dictionary web service.

pub mod client;
pub mod error;

pub use client::{DEFAULT_BASE_URL, DictionaryClient};
pub use error::{ApiError, ApiErrorCode, ApiResult};

//! # Matchday Core
//!
//! Shared error and response types for the Matchday API.
//!
//! - [`errors`]: the [`AppError`] taxonomy and its HTTP translation
//! - [`response`]: the `{status, message, data}` envelope
//!
//! # Example
//!
//! ```ignore
//! use matchday_core::{ApiResponse, AppError};
//!
//! fn find(id: &str) -> Result<ApiResponse<String>, AppError> {
//!     Err(AppError::not_found(format!("Player with ID {} not found", id)))
//! }
//! ```

pub mod errors;
pub mod response;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind, FieldError, field_errors};
pub use response::{ApiResponse, ResponseStatus};

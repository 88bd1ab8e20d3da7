//! Unified error system
//!
//! This module provides the error handling system shared by the whole
//! application:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Menu errors
//! - 7xxx: Table errors
//! - 8xxx: Staff errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::TableOccupied);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::NotFound, "Order 42 not found");
//!
//! // Create an error with details
//! let err = AppError::validation("Price must be greater than zero")
//!     .with_detail("field", "price");
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};

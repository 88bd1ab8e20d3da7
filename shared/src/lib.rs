//! Shared types for the Galley POS console
//!
//! Domain models, status enums, the unified error system and pagination
//! types used by the `galley` binary. DB row types derive `sqlx::FromRow`
//! behind the `db` feature so the crate stays usable without the storage
//! stack.

pub mod error;
pub mod models;
pub mod query;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use query::{PageRequest, PaginatedResponse};

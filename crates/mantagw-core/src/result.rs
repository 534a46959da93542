//! Convenience result type alias for mantagw.

use crate::error::AppError;

/// A specialized `Result` type for gateway and store operations.
pub type AppResult<T> = Result<T, AppError>;

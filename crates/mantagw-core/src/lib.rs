//! # mantagw-core
//!
//! Core crate for mantagw. Contains the object-layer capability traits,
//! the remote directory-store trait, configuration schemas, object-layer
//! types, path helpers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other mantagw crates.

pub mod config;
pub mod error;
pub mod path;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

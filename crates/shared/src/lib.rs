//! Shared configuration and error types for Spendcast.
//!
//! This crate provides the pieces used by every other crate:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

//! # shoplist-common
//!
//! Shared utilities including configuration, error handling, password hashing,
//! and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, validate_password_length, verify_password, MIN_PASSWORD_LENGTH};
pub use config::{AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment};
pub use error::AppError;
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};

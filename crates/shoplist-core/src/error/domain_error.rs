//! Domain errors - error types for the domain layer
//!
//! Empty results are not errors here: a lookup that finds nothing returns
//! `None`, an empty `Vec` or `false`.

use thiserror::Error;

use crate::value_objects::{ListId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("List not found: {0}")]
    ListNotFound(ListId),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("A list with this name already exists")]
    ListNameAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Query timed out after {millis}ms")]
    QueryTimeout { millis: u64 },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ListNotFound(_) => "UNKNOWN_LIST",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ListNameAlreadyExists => "LIST_NAME_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::QueryTimeout { .. } => "QUERY_TIMEOUT",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ListNotFound(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::ListNameAlreadyExists)
    }

    /// Check if the backing store failed or rejected the query
    pub fn is_query_error(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::QueryTimeout { .. })
    }
}

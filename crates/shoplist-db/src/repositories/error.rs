//! Error handling utilities for repositories

use std::future::Future;
use std::time::Duration;

use shoplist_core::error::DomainError;
use shoplist_core::traits::RepoResult;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Check for a foreign key violation and return appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_missing_parent: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_missing_parent();
        }
    }
    map_db_error(e)
}

/// Classify an insert failure that may hit either a unique or a foreign key
/// constraint
pub fn map_insert_violation<U, F>(e: SqlxError, on_unique: U, on_missing_parent: F) -> DomainError
where
    U: FnOnce() -> DomainError,
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
        if db_err.is_foreign_key_violation() {
            return on_missing_parent();
        }
    }
    map_db_error(e)
}

/// Run a query under a deadline
///
/// The outer result carries the timeout, the inner one the query's own
/// outcome so callers can still classify constraint violations.
pub async fn bounded<T, Q>(limit: Duration, query: Q) -> RepoResult<Result<T, SqlxError>>
where
    Q: Future<Output = Result<T, SqlxError>>,
{
    tokio::time::timeout(limit, query)
        .await
        .map_err(|_| DomainError::QueryTimeout {
            millis: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        })
}

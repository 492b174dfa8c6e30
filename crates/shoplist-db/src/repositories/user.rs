//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use shoplist_common::auth::{hash_password, verify_password};
use shoplist_core::entities::User;
use shoplist_core::error::DomainError;
use shoplist_core::traits::{RepoResult, UserRepository};
use shoplist_core::value_objects::UserId;

use crate::models::{CredentialsRow, UserModel};
use crate::pool::Database;

use super::error::{bounded, map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    db: Database,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, password))]
    async fn validate_credentials(&self, email: &str, password: &str) -> RepoResult<Option<String>> {
        let row = bounded(
            self.db.query_timeout(),
            sqlx::query_as::<_, CredentialsRow>(
                r"
                SELECT name, password_hash
                FROM users
                WHERE email = $1
                ",
            )
            .bind(email)
            .fetch_optional(self.db.pool()),
        )
        .await?
        .map_err(map_db_error)?;

        let Some(row) = row else {
            debug!("No user with this email");
            return Ok(None);
        };

        match verify_password(password, &row.password_hash) {
            Ok(true) => Ok(Some(row.name)),
            Ok(false) => Ok(None),
            Err(e) => {
                // A stored value that is not a hash can never match
                warn!(error = %e, "Unreadable password hash");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = bounded(
            self.db.query_timeout(),
            sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
                ",
            )
            .bind(email)
            .fetch_one(self.db.pool()),
        )
        .await?
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password))]
    async fn create_user(&self, name: &str, email: &str, password: &str) -> RepoResult<UserId> {
        let password_hash =
            hash_password(password).map_err(|e| DomainError::InternalError(e.to_string()))?;

        let id = bounded(
            self.db.query_timeout(),
            sqlx::query_scalar::<_, i64>(
                r"
                INSERT INTO users (name, email, password_hash)
                VALUES ($1, $2, $3)
                RETURNING id
                ",
            )
            .bind(name)
            .bind(email)
            .bind(&password_hash)
            .fetch_one(self.db.pool()),
        )
        .await?
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        debug!(user_id = id, "User created");
        Ok(UserId::new(id))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = bounded(
            self.db.query_timeout(),
            sqlx::query_as::<_, UserModel>(
                r"
                SELECT id, name, email
                FROM users
                WHERE id = $1
                ",
            )
            .bind(id.into_inner())
            .fetch_optional(self.db.pool()),
        )
        .await?
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = bounded(
            self.db.query_timeout(),
            sqlx::query_as::<_, UserModel>(
                r"
                SELECT id, name, email
                FROM users
                WHERE email = $1
                ",
            )
            .bind(email)
            .fetch_optional(self.db.pool()),
        )
        .await?
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}

//! User database model

use sqlx::FromRow;

/// Database model for users table, without the password hash
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Name and stored hash looked up during a login attempt
#[derive(Debug, Clone, FromRow)]
pub struct CredentialsRow {
    pub name: String,
    pub password_hash: String,
}

//! User entity - a registered account that owns shopping lists

use serde::Serialize;

use crate::value_objects::UserId;

/// Registered user
///
/// The stored password hash never leaves the database layer, so it is not
/// part of the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// Create a new User
    pub fn new(id: UserId, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

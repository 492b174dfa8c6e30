//! Request DTOs for the service layer
//!
//! All request DTOs implement `Deserialize`; the ones with field rules also
//! implement `Validate`.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Account Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    /// Length is checked by the account service with the shared password rule
    pub password: String,
}

impl RegisterRequest {
    /// Check that every field was filled in
    pub fn has_blank_field(&self) -> bool {
        [&self.name, &self.email, &self.password]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

/// User login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// List Requests
// ============================================================================

/// One submitted item of a new list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i32,
    pub store: String,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: i32, store: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            store: store.into(),
        }
    }
}

/// Create list request: the list name and its items, in display order
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateListRequest {
    #[validate(length(min = 1, max = 100, message = "List name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub products: Vec<NewProduct>,
}

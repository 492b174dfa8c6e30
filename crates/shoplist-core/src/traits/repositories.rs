//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the database layer provides
//! the implementation. Every operation is a stateless request/response
//! against the shared connection pool.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::entities::{List, ListData, Product, User};
use crate::error::DomainError;
use crate::value_objects::{ListId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check an email/password pair, returning the user's name on a match
    ///
    /// A wrong email or password is `Ok(None)`, not an error.
    async fn validate_credentials(&self, email: &str, password: &str) -> RepoResult<Option<String>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user, returning its generated id
    async fn create_user(&self, name: &str, email: &str, password: &str) -> RepoResult<UserId>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;
}

// ============================================================================
// List Repository
// ============================================================================

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Check if any list, regardless of owner, has this exact name
    async fn list_name_exists(&self, name: &str) -> RepoResult<bool>;

    /// Create a new list, returning its generated id
    async fn create_list(&self, owner_id: UserId, name: &str) -> RepoResult<ListId>;

    /// Find list by ID
    async fn find_by_id(&self, id: ListId) -> RepoResult<Option<List>>;

    /// All lists owned by a user, each with its products
    async fn get_lists_for_user(&self, owner_id: UserId) -> RepoResult<Vec<ListData>>;
}

// ============================================================================
// Product Repository
// ============================================================================

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Add a product to a list
    async fn create_product(
        &self,
        list_id: ListId,
        name: &str,
        quantity: i32,
        store: &str,
    ) -> RepoResult<()>;

    /// All products of a list, in insertion order
    async fn get_products_for_list(&self, list_id: ListId) -> RepoResult<Vec<Product>>;
}

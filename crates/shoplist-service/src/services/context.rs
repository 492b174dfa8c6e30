//! Service context - dependency container for services
//!
//! Holds the repositories the services need, behind their traits so tests
//! can swap in mocks.

use std::sync::Arc;

use shoplist_core::traits::{ListRepository, ProductRepository, UserRepository};
use shoplist_db::{Database, PgListRepository, PgProductRepository, PgUserRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    list_repo: Arc<dyn ListRepository>,
    product_repo: Arc<dyn ProductRepository>,
}

impl ServiceContext {
    /// Create a new service context from repository implementations
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        list_repo: Arc<dyn ListRepository>,
        product_repo: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            user_repo,
            list_repo,
            product_repo,
        }
    }

    /// Wire the PostgreSQL repositories around one shared database handle
    pub fn from_database(db: &Database) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(db.clone())),
            Arc::new(PgListRepository::new(db.clone())),
            Arc::new(PgProductRepository::new(db.clone())),
        )
    }

    /// Get user repository
    #[inline]
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get list repository
    #[inline]
    pub fn list_repo(&self) -> &dyn ListRepository {
        self.list_repo.as_ref()
    }

    /// Get product repository
    #[inline]
    pub fn product_repo(&self) -> &dyn ProductRepository {
        self.product_repo.as_ref()
    }
}

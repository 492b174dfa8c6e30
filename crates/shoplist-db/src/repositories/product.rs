//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use tracing::instrument;

use shoplist_core::entities::Product;
use shoplist_core::error::DomainError;
use shoplist_core::traits::{ProductRepository, RepoResult};
use shoplist_core::value_objects::ListId;

use crate::models::ProductModel;
use crate::pool::Database;

use super::error::{bounded, map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    db: Database,
}

impl PgProductRepository {
    /// Create a new PgProductRepository
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn create_product(
        &self,
        list_id: ListId,
        name: &str,
        quantity: i32,
        store: &str,
    ) -> RepoResult<()> {
        bounded(
            self.db.query_timeout(),
            sqlx::query(
                r"
                INSERT INTO products (list_id, name, quantity, store)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(list_id.into_inner())
            .bind(name)
            .bind(quantity)
            .bind(store)
            .execute(self.db.pool()),
        )
        .await?
        .map_err(|e| map_foreign_key_violation(e, || DomainError::ListNotFound(list_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_products_for_list(&self, list_id: ListId) -> RepoResult<Vec<Product>> {
        let results = bounded(
            self.db.query_timeout(),
            sqlx::query_as::<_, ProductModel>(
                r"
                SELECT id, list_id, name, quantity, store
                FROM products
                WHERE list_id = $1
                ORDER BY id
                ",
            )
            .bind(list_id.into_inner())
            .fetch_all(self.db.pool()),
        )
        .await?
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Product::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgProductRepository>();
    }
}

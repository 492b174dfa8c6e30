//! PostgreSQL implementation of ListRepository

use async_trait::async_trait;
use tracing::{debug, instrument};

use shoplist_core::entities::{List, ListData};
use shoplist_core::error::DomainError;
use shoplist_core::traits::{ListRepository, RepoResult};
use shoplist_core::value_objects::{ListId, UserId};

use crate::mappers::group_list_rows;
use crate::models::{ListModel, ListProductRow};
use crate::pool::Database;

use super::error::{bounded, map_db_error, map_insert_violation};

/// PostgreSQL implementation of ListRepository
#[derive(Clone)]
pub struct PgListRepository {
    db: Database,
}

impl PgListRepository {
    /// Create a new PgListRepository
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ListRepository for PgListRepository {
    #[instrument(skip(self))]
    async fn list_name_exists(&self, name: &str) -> RepoResult<bool> {
        let result = bounded(
            self.db.query_timeout(),
            sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS(SELECT 1 FROM lists WHERE name = $1)
                ",
            )
            .bind(name)
            .fetch_one(self.db.pool()),
        )
        .await?
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create_list(&self, owner_id: UserId, name: &str) -> RepoResult<ListId> {
        let id = bounded(
            self.db.query_timeout(),
            sqlx::query_scalar::<_, i64>(
                r"
                INSERT INTO lists (owner_id, name)
                VALUES ($1, $2)
                RETURNING id
                ",
            )
            .bind(owner_id.into_inner())
            .bind(name)
            .fetch_one(self.db.pool()),
        )
        .await?
        .map_err(|e| {
            map_insert_violation(
                e,
                || DomainError::ListNameAlreadyExists,
                || DomainError::UserNotFound(owner_id),
            )
        })?;

        debug!(list_id = id, "List created");
        Ok(ListId::new(id))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ListId) -> RepoResult<Option<List>> {
        let result = bounded(
            self.db.query_timeout(),
            sqlx::query_as::<_, ListModel>(
                r"
                SELECT id, owner_id, name
                FROM lists
                WHERE id = $1
                ",
            )
            .bind(id.into_inner())
            .fetch_optional(self.db.pool()),
        )
        .await?
        .map_err(map_db_error)?;

        Ok(result.map(List::from))
    }

    #[instrument(skip(self))]
    async fn get_lists_for_user(&self, owner_id: UserId) -> RepoResult<Vec<ListData>> {
        // One round-trip for all lists and products; grouped client-side
        let rows = bounded(
            self.db.query_timeout(),
            sqlx::query_as::<_, ListProductRow>(
                r"
                SELECT l.id AS list_id, l.name AS list_name,
                       p.id AS product_id, p.name AS product_name, p.quantity, p.store
                FROM lists l
                LEFT JOIN products p ON p.list_id = l.id
                WHERE l.owner_id = $1
                ORDER BY l.id, p.id
                ",
            )
            .bind(owner_id.into_inner())
            .fetch_all(self.db.pool()),
        )
        .await?
        .map_err(map_db_error)?;

        let lists = group_list_rows(rows);
        debug!(count = lists.len(), "Lists loaded");

        Ok(lists)
    }
}

//! Shopping list service
//!
//! Creates lists with their products and reads a user's lists back.

use shoplist_core::{ListData, ListId, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::CreateListRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Shopping list service
pub struct ShoppingListService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ShoppingListService<'a> {
    /// Create a new ShoppingListService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a list and insert its products in submission order
    ///
    /// The inserts are not wrapped in a transaction: if a product insert
    /// fails, the list and the products before it stay.
    #[instrument(skip(self, request), fields(list_name = %request.name, products = request.products.len()))]
    pub async fn create_list(
        &self,
        owner_id: UserId,
        request: CreateListRequest,
    ) -> ServiceResult<ListId> {
        request
            .validate()
            .map_err(|e| ServiceError::from_validation_errors(&e, &["name"]))?;

        if self.ctx.list_repo().list_name_exists(&request.name).await? {
            return Err(ServiceError::conflict(
                "The list with such name already exists",
            ));
        }

        let list_id = self
            .ctx
            .list_repo()
            .create_list(owner_id, &request.name)
            .await?;

        for product in &request.products {
            self.ctx
                .product_repo()
                .create_product(list_id, &product.name, product.quantity, &product.store)
                .await?;
        }

        info!(list_id = %list_id, "List created");

        Ok(list_id)
    }

    /// All lists of a user with their products
    #[instrument(skip(self))]
    pub async fn view_lists(&self, owner_id: UserId) -> ServiceResult<Vec<ListData>> {
        Ok(self.ctx.list_repo().get_lists_for_user(owner_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;
    use mockall::Sequence;
    use shoplist_core::traits::{MockListRepository, MockProductRepository, MockUserRepository};
    use shoplist_core::{DomainError, Product, ProductId};

    use super::*;
    use crate::dto::NewProduct;

    fn context(list_repo: MockListRepository, product_repo: MockProductRepository) -> ServiceContext {
        ServiceContext::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(list_repo),
            Arc::new(product_repo),
        )
    }

    fn groceries_request() -> CreateListRequest {
        CreateListRequest {
            name: "Groceries".to_string(),
            products: vec![
                NewProduct::new("Milk", 2, "StoreA"),
                NewProduct::new("Bread", 1, "StoreB"),
            ],
        }
    }

    #[tokio::test]
    async fn test_create_list_inserts_products_in_order() {
        let mut list_repo = MockListRepository::new();
        list_repo
            .expect_list_name_exists()
            .with(eq("Groceries"))
            .returning(|_| Ok(false));
        list_repo
            .expect_create_list()
            .withf(|owner_id, name| *owner_id == UserId::new(1) && name == "Groceries")
            .times(1)
            .returning(|_, _| Ok(ListId::new(7)));

        let mut seq = Sequence::new();
        let mut product_repo = MockProductRepository::new();
        product_repo
            .expect_create_product()
            .withf(|list_id, name, quantity, store| {
                *list_id == ListId::new(7) && name == "Milk" && *quantity == 2 && store == "StoreA"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(()));
        product_repo
            .expect_create_product()
            .withf(|list_id, name, quantity, store| {
                *list_id == ListId::new(7) && name == "Bread" && *quantity == 1 && store == "StoreB"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(()));

        let ctx = context(list_repo, product_repo);
        let id = ShoppingListService::new(&ctx)
            .create_list(UserId::new(1), groceries_request())
            .await
            .unwrap();

        assert_eq!(id, ListId::new(7));
    }

    #[tokio::test]
    async fn test_create_list_existing_name_is_conflict() {
        let mut list_repo = MockListRepository::new();
        list_repo.expect_list_name_exists().returning(|_| Ok(true));
        list_repo.expect_create_list().never();

        let mut product_repo = MockProductRepository::new();
        product_repo.expect_create_product().never();

        let ctx = context(list_repo, product_repo);
        let err = ShoppingListService::new(&ctx)
            .create_list(UserId::new(1), groceries_request())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Conflict(ref msg) if msg == "The list with such name already exists"
        ));
    }

    #[tokio::test]
    async fn test_create_list_requires_name() {
        let ctx = context(MockListRepository::new(), MockProductRepository::new());
        let err = ShoppingListService::new(&ctx)
            .create_list(
                UserId::new(1),
                CreateListRequest {
                    name: String::new(),
                    products: Vec::new(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_create_list_stops_at_first_failed_product() {
        let mut list_repo = MockListRepository::new();
        list_repo.expect_list_name_exists().returning(|_| Ok(false));
        list_repo
            .expect_create_list()
            .returning(|_, _| Ok(ListId::new(7)));

        let mut product_repo = MockProductRepository::new();
        product_repo
            .expect_create_product()
            .times(1)
            .returning(|_, _, _, _| Err(DomainError::QueryTimeout { millis: 5000 }));

        let ctx = context(list_repo, product_repo);
        let err = ShoppingListService::new(&ctx)
            .create_list(UserId::new(1), groceries_request())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Domain(DomainError::QueryTimeout { .. })));
    }

    #[tokio::test]
    async fn test_view_lists() {
        let mut list_repo = MockListRepository::new();
        list_repo
            .expect_get_lists_for_user()
            .with(eq(UserId::new(1)))
            .returning(|_| {
                Ok(vec![ListData {
                    name: "Groceries".to_string(),
                    products: vec![Product::new(
                        ProductId::new(1),
                        ListId::new(7),
                        "Milk".to_string(),
                        2,
                        "StoreA".to_string(),
                    )],
                }])
            });

        let ctx = context(list_repo, MockProductRepository::new());
        let lists = ShoppingListService::new(&ctx)
            .view_lists(UserId::new(1))
            .await
            .unwrap();

        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "Groceries");
        assert_eq!(lists[0].products[0].name, "Milk");
    }

    #[tokio::test]
    async fn test_view_lists_for_user_without_lists() {
        let mut list_repo = MockListRepository::new();
        list_repo
            .expect_get_lists_for_user()
            .returning(|_| Ok(Vec::new()));

        let ctx = context(list_repo, MockProductRepository::new());
        let lists = ShoppingListService::new(&ctx)
            .view_lists(UserId::new(2))
            .await
            .unwrap();

        assert!(lists.is_empty());
    }
}

//! Product model -> entity mapper

use shoplist_core::entities::Product;
use shoplist_core::value_objects::{ListId, ProductId};

use crate::models::ProductModel;

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: ProductId::new(model.id),
            list_id: ListId::new(model.list_id),
            name: model.name,
            quantity: model.quantity,
            store: model.store,
        }
    }
}

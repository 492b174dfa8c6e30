//! Product entity - a single shopping item inside a list

use serde::Serialize;

use crate::value_objects::{ListId, ProductId};

/// Shopping item with a quantity and the store to buy it from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub list_id: ListId,
    pub name: String,
    /// Expected to be non-negative; not enforced at this layer
    pub quantity: i32,
    pub store: String,
}

impl Product {
    /// Create a new Product
    pub fn new(id: ProductId, list_id: ListId, name: String, quantity: i32, store: String) -> Self {
        Self {
            id,
            list_id,
            name,
            quantity,
            store,
        }
    }
}

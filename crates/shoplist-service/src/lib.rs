//! # shoplist-service
//!
//! Application layer: the registration, login, list creation and list viewing
//! flows that a presentation layer calls into. Inputs are validated here;
//! persistence goes through the repository traits from `shoplist-core`.

pub mod dto;
pub mod services;

pub use dto::{CreateListRequest, LoginRequest, NewProduct, RegisterRequest};
pub use services::{
    AccountService, ServiceContext, ServiceError, ServiceResult, ShoppingListService,
};

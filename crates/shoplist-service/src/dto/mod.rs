//! Data transfer objects

mod requests;

pub use requests::{CreateListRequest, LoginRequest, NewProduct, RegisterRequest};

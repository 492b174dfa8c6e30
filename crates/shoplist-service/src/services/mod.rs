//! Business logic services
//!
//! Validation and orchestration of repository operations.

pub mod account;
pub mod context;
pub mod error;
pub mod list;

// Re-export all services for convenience
pub use account::AccountService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use list::ShoppingListService;

//! Repository traits

mod repositories;

pub use repositories::{ListRepository, ProductRepository, RepoResult, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockListRepository, MockProductRepository, MockUserRepository};

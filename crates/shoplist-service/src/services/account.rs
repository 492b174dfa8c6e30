//! Account service
//!
//! Handles user registration and login.

use shoplist_common::{validate_password_length, AppError};
use shoplist_core::UserId;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserId> {
        if request.has_blank_field() {
            return Err(ServiceError::validation("All fields are required"));
        }

        request
            .validate()
            .map_err(|e| ServiceError::from_validation_errors(&e, &["email"]))?;

        validate_password_length(&request.password)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already exists"));
        }

        let user_id = self
            .ctx
            .user_repo()
            .create_user(&request.name, &request.email, &request.password)
            .await?;

        info!(user_id = %user_id, "User registered successfully");

        Ok(user_id)
    }

    /// Check credentials and return the user's name
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<String> {
        let name = self
            .ctx
            .user_repo()
            .validate_credentials(&request.email, &request.password)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: wrong credentials");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        info!("User logged in");
        Ok(name)
    }
}

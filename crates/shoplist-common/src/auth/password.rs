//! Password hashing and verification utilities
//!
//! Uses Argon2id for password hashing. Stored values are PHC strings, so the
//! salt and parameters travel with the hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Shortest password accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// # Errors
/// Returns an error if the stored value is not a valid PHC hash string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Check the registration length rule
///
/// # Errors
/// Returns a validation error if the password is shorter than
/// [`MIN_PASSWORD_LENGTH`] characters
pub fn validate_password_length(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "Password should be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let password = "pw123456";
        let hash = hash_password(password).unwrap();

        assert!(hash.starts_with("$argon2"));
        // Different salt every time
        let hash2 = hash_password(password).unwrap();
        assert_ne!(hash, hash2);
    }

    #[test]
    fn test_verify_password_success() {
        let hash = hash_password("pw123456").unwrap();
        assert!(verify_password("pw123456", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_failure() {
        let hash = hash_password("pw123456").unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_non_phc_value() {
        let result = verify_password("pw123456", "pw123456");
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password_length("pw123456").is_ok());
        assert!(validate_password_length("12345678910").is_ok());

        let result = validate_password_length("short");
        match result {
            Err(AppError::Validation(msg)) => assert!(msg.contains("at least 8 characters")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

//! Password hashing and temporary password generation

use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::warn;

use crate::errors::{DomainError, DomainResult};

/// Length of passwords issued by the forgot-password flow
pub const TEMPORARY_PASSWORD_LENGTH: usize = 10;

/// Random password drawn from `[A-Za-z0-9]`
pub fn generate_temporary_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TEMPORARY_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}

/// Salted bcrypt hash, computed off the async executor
pub(crate) async fn hash_password(plain: &str, cost: u32) -> DomainResult<String> {
    let plain = plain.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Password hashing task failed: {}", e),
        })?
        .map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
}

/// Check a password against a stored hash; a malformed hash never matches
pub(crate) async fn verify_password(plain: &str, hash: &str) -> DomainResult<bool> {
    let plain = plain.to_string();
    let hash = hash.to_string();
    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Password verification task failed: {}", e),
        })?;

    match outcome {
        Ok(valid) => Ok(valid),
        Err(e) => {
            warn!(error = %e, "Stored password hash could not be parsed");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporary_password_shape() {
        let password = generate_temporary_password();
        assert_eq!(password.len(), TEMPORARY_PASSWORD_LENGTH);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(password, generate_temporary_password());
    }

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("s3cret", 4).await.unwrap();
        assert_ne!(hash, "s3cret");
        assert!(verify_password("s3cret", &hash).await.unwrap());
        assert!(!verify_password("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_hash_does_not_match() {
        assert!(!verify_password("s3cret", "not-a-hash").await.unwrap());
    }
}

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    otp_code::OtpCode,
    password::Password,
    user::{NewUser, User},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence for user records. Lookups are a closed set; the store is
/// the authoritative guard for email uniqueness.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Hash the password and persist the record. A duplicate email fails
    /// with [`UserStoreError::UserAlreadyExists`] regardless of any
    /// pre-check the caller performed.
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError>;

    /// Look up by email and verify the password against the stored hash.
    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError>;

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError>;

    async fn find_by_id(&self, id: i64) -> Result<User, UserStoreError>;
}

// RevokedTokenStore port trait and errors
#[derive(Debug, Error)]
pub enum RevokedTokenStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Deny-list of access tokens that must be rejected despite passing
/// signature checks.
#[async_trait]
pub trait RevokedTokenStore: Send + Sync {
    /// Record the token as revoked. The entry expires after
    /// `ttl_seconds`, which callers set to the token's own remaining
    /// validity so the list never outlives the tokens it names.
    async fn revoke_token(
        &self,
        token: String,
        ttl_seconds: u64,
    ) -> Result<(), RevokedTokenStoreError>;

    async fn is_revoked(&self, token: &str) -> Result<bool, RevokedTokenStoreError>;
}

// OtpCodeStore port trait and errors
#[derive(Debug, Error)]
pub enum OtpCodeStoreError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Transient storage for account-confirmation codes, keyed by email.
/// At most one live code per email; a new put overwrites the prior one.
#[async_trait]
pub trait OtpCodeStore: Send + Sync {
    async fn put_code(
        &self,
        email: &Email,
        code: OtpCode,
        ttl_seconds: u64,
    ) -> Result<(), OtpCodeStoreError>;

    /// Returns `None` for a missing or expired entry.
    async fn get_code(&self, email: &Email) -> Result<Option<OtpCode>, OtpCodeStoreError>;

    async fn delete_code(&self, email: &Email) -> Result<(), OtpCodeStoreError>;
}

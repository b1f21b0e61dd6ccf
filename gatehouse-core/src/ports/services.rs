use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, token_pair::TokenPair};

/// Which signing secret and lifetime a token was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

/// The decoded, verified view of a token's payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    pub user_id: i64,
    pub email: Email,
    /// Expiry as a unix timestamp; logout uses it to bound the
    /// revocation entry's lifetime.
    pub expires_at: i64,
}

#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for TokenIssuerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidToken, Self::InvalidToken) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Signs and verifies the two bearer token classes. Stateless: holds
/// configuration only.
pub trait TokenIssuer: Send + Sync {
    fn issue_access(&self, user_id: i64, email: &Email) -> Result<String, TokenIssuerError>;

    fn issue_refresh(&self, user_id: i64, email: &Email) -> Result<String, TokenIssuerError>;

    fn issue_pair(&self, user_id: i64, email: &Email) -> Result<TokenPair, TokenIssuerError> {
        Ok(TokenPair {
            access_token: self.issue_access(user_id, email)?,
            refresh_token: self.issue_refresh(user_id, email)?,
        })
    }

    /// Validate signature and expiry against the secret for the given
    /// token class. A token signed for the other class fails.
    fn verify(&self, token: &str, kind: TokenKind) -> Result<TokenClaims, TokenIssuerError>;
}

/// Outbound email delivery.
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String>;
}

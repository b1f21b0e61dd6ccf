use chrono::Utc;
use gatehouse_core::{RevokedTokenStore, RevokedTokenStoreError, TokenIssuer, TokenKind};

/// Error types for logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token is revoked")]
    TokenRevoked,
    #[error("Revoked token store error: {0}")]
    RevokedTokenStoreError(#[from] RevokedTokenStoreError),
}

/// Logout use case - revokes the presented access token
pub struct LogoutUseCase<R, T>
where
    R: RevokedTokenStore,
    T: TokenIssuer,
{
    revoked_token_store: R,
    token_issuer: T,
}

impl<R, T> LogoutUseCase<R, T>
where
    R: RevokedTokenStore,
    T: TokenIssuer,
{
    pub fn new(revoked_token_store: R, token_issuer: T) -> Self {
        Self {
            revoked_token_store,
            token_issuer,
        }
    }

    /// Execute the logout use case
    ///
    /// The revocation entry's TTL is the token's own remaining validity,
    /// so the deny-list never outlives the tokens it names.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub async fn execute(&self, token: String) -> Result<(), LogoutError> {
        let claims = self
            .token_issuer
            .verify(&token, TokenKind::Access)
            .map_err(|_| LogoutError::InvalidToken)?;

        if self.revoked_token_store.is_revoked(&token).await? {
            return Err(LogoutError::TokenRevoked);
        }

        // verify() already rejected expired tokens; the clamp only
        // guards against clock skew around the expiry instant.
        let remaining = (claims.expires_at - Utc::now().timestamp()).max(1) as u64;

        self.revoked_token_store.revoke_token(token, remaining).await?;

        Ok(())
    }
}

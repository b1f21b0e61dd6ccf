use chrono::Utc;
use gatehouse_core::{
    Email, RevokedTokenStore, TokenClaims, TokenIssuer, TokenIssuerError, TokenKind,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Signing configuration: a distinct secret and lifetime per token
/// class, loaded from the environment by the hosting process.
#[derive(Clone)]
pub struct JwtConfig {
    pub access_secret: Secret<String>,
    pub access_ttl_seconds: i64,
    pub refresh_secret: Secret<String>,
    pub refresh_ttl_seconds: i64,
}

/// Wire-level claims payload. `userId` matches the shape consumers of
/// these tokens already decode.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    fn secret_for(&self, kind: TokenKind) -> &[u8] {
        match kind {
            TokenKind::Access => self.config.access_secret.expose_secret().as_bytes(),
            TokenKind::Refresh => self.config.refresh_secret.expose_secret().as_bytes(),
        }
    }

    fn ttl_for(&self, kind: TokenKind) -> i64 {
        match kind {
            TokenKind::Access => self.config.access_ttl_seconds,
            TokenKind::Refresh => self.config.refresh_ttl_seconds,
        }
    }

    fn issue(
        &self,
        user_id: i64,
        email: &Email,
        kind: TokenKind,
    ) -> Result<String, TokenIssuerError> {
        let delta = chrono::Duration::try_seconds(self.ttl_for(kind)).ok_or(
            TokenIssuerError::UnexpectedError("Failed to create token duration".to_string()),
        )?;

        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenIssuerError::UnexpectedError(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        // Cast timestamps to usize, which is what Claims expects
        let exp: usize = exp.try_into().map_err(|_| {
            TokenIssuerError::UnexpectedError("Failed to cast i64 to usize".to_string())
        })?;
        let iat: usize = now.timestamp().try_into().map_err(|_| {
            TokenIssuerError::UnexpectedError("Failed to cast i64 to usize".to_string())
        })?;

        let claims = Claims {
            user_id,
            email: email.as_str().to_owned(),
            iat,
            exp,
        };

        encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret_for(kind)),
        )
        .map_err(|e| TokenIssuerError::UnexpectedError(e.to_string()))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue_access(&self, user_id: i64, email: &Email) -> Result<String, TokenIssuerError> {
        self.issue(user_id, email, TokenKind::Access)
    }

    fn issue_refresh(&self, user_id: i64, email: &Email) -> Result<String, TokenIssuerError> {
        self.issue(user_id, email, TokenKind::Refresh)
    }

    fn verify(&self, token: &str, kind: TokenKind) -> Result<TokenClaims, TokenIssuerError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret_for(kind)),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| TokenIssuerError::InvalidToken)?;

        // A claims payload that no longer parses is as invalid as a bad
        // signature.
        let email = Email::try_from(claims.email).map_err(|_| TokenIssuerError::InvalidToken)?;

        Ok(TokenClaims {
            user_id: claims.user_id,
            email,
            expires_at: claims.exp as i64,
        })
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Missing token")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token is revoked")]
    TokenRevoked,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Guard for endpoints requiring an authenticated caller: signature and
/// expiry against the access secret, then the deny-list. A revoked
/// token is rejected regardless of cryptographic validity.
pub async fn validate_access_token(
    token: &str,
    token_issuer: &dyn TokenIssuer,
    revoked_token_store: &dyn RevokedTokenStore,
) -> Result<TokenClaims, TokenAuthError> {
    let claims = token_issuer
        .verify(token, TokenKind::Access)
        .map_err(|_| TokenAuthError::InvalidToken)?;

    let is_revoked = revoked_token_store
        .is_revoked(token)
        .await
        .map_err(|e| TokenAuthError::UnexpectedError(e.to_string()))?;

    if is_revoked {
        return Err(TokenAuthError::TokenRevoked);
    }

    Ok(claims)
}

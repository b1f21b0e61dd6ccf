use axum::http::{HeaderMap, header::AUTHORIZATION};

use crate::token::TokenAuthError;

/// Pull the bearer token out of the Authorization header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, TokenAuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(TokenAuthError::MissingToken)?;

    let value = header.to_str().map_err(|_| TokenAuthError::MissingToken)?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(TokenAuthError::MissingToken)
}

use axum::{Json, extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse};
use gatehouse_application::RefreshTokenUseCase;
use gatehouse_core::{TokenIssuer, TokenKind, TokenPair};

use crate::http::bearer::extract_bearer_token;

use super::error::AuthApiError;

#[tracing::instrument(name = "Refresh token", skip_all)]
pub async fn refresh_token<T>(
    State(token_issuer): State<T>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AuthApiError>
where
    T: TokenIssuer + Clone + 'static,
{
    let token = extract_bearer_token(&headers)?;

    // The guard for this route is the refresh secret itself; revocation
    // is not consulted for refresh tokens.
    let claims = token_issuer
        .verify(token, TokenKind::Refresh)
        .map_err(|_| AuthApiError::AuthenticationError("Invalid token".to_string()))?;

    let refresh_token = token.to_owned();
    let use_case = RefreshTokenUseCase::new(token_issuer);
    let access_token = use_case.execute(claims.user_id, &claims.email).await?;

    // The presented refresh token is passed through, not reissued.
    Ok((
        StatusCode::OK,
        Json(TokenPair {
            access_token,
            refresh_token,
        }),
    ))
}

use axum::{Json, extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse};
use gatehouse_application::GetProfileUseCase;
use gatehouse_core::{RevokedTokenStore, TokenIssuer, UserStore};

use crate::http::bearer::extract_bearer_token;
use crate::token::validate_access_token;

use super::error::AuthApiError;

#[tracing::instrument(name = "Me", skip_all)]
pub async fn me<U, R, T>(
    State((user_store, revoked_token_store, token_issuer)): State<(U, R, T)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    R: RevokedTokenStore + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let token = extract_bearer_token(&headers)?;
    let claims = validate_access_token(token, &token_issuer, &revoked_token_store).await?;

    let use_case = GetProfileUseCase::new(user_store);
    let profile = use_case.execute(claims.user_id).await?;

    Ok((StatusCode::OK, Json(profile)))
}

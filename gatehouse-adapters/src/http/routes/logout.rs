use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse};
use gatehouse_application::LogoutUseCase;
use gatehouse_core::{RevokedTokenStore, TokenIssuer};

use crate::http::bearer::extract_bearer_token;

use super::error::AuthApiError;

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<R, T>(
    State((revoked_token_store, token_issuer)): State<(R, T)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AuthApiError>
where
    R: RevokedTokenStore + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let token = extract_bearer_token(&headers)?.to_owned();

    let use_case = LogoutUseCase::new(revoked_token_store, token_issuer);
    use_case.execute(token).await?;

    Ok((StatusCode::OK, String::from("Logged out successfully!")))
}

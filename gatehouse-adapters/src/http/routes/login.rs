use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use gatehouse_application::LoginUseCase;
use gatehouse_core::{Email, Password, TokenIssuer, UserStore};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::{AuthResponse, error::AuthApiError};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, T>(
    State((user_store, token_issuer)): State<(U, T)>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    if request.email.is_empty() || request.password.expose_secret().is_empty() {
        return Err(AuthApiError::MissingCredentials);
    }

    // Parse failures read as bad credentials, not validation errors, so
    // nothing distinguishes a malformed address from an unknown one.
    let email =
        Email::try_from(request.email).map_err(|_| AuthApiError::InvalidCredentials)?;
    let password =
        Password::try_from(request.password).map_err(|_| AuthApiError::InvalidCredentials)?;

    let use_case = LoginUseCase::new(user_store, token_issuer);
    let authenticated = use_case.execute(email, password).await?;

    Ok((StatusCode::OK, Json(AuthResponse::from(authenticated))))
}

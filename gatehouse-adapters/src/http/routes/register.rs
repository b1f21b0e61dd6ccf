use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use gatehouse_application::RegisterUseCase;
use gatehouse_core::{Email, NewUser, Password, TokenIssuer, UserName, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::{AuthResponse, error::AuthApiError};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, T>(
    State((user_store, token_issuer)): State<(U, T)>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    // Field validation surfaces the first error encountered.
    let name = UserName::try_from(request.name)?;
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = RegisterUseCase::new(user_store, token_issuer);
    let registration = use_case.execute(NewUser::new(name, email, password)).await?;

    Ok((StatusCode::CREATED, Json(AuthResponse::from(registration))))
}

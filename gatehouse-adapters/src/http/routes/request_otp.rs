use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use gatehouse_application::RequestOtpUseCase;
use gatehouse_core::{Email, EmailClient, OtpCodeStore, UserStore};
use serde::Deserialize;

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct RequestOtpParams {
    pub email: String,
}

#[tracing::instrument(name = "Request OTP", skip_all)]
pub async fn request_otp<U, O, E>(
    State((user_store, otp_code_store, email_client)): State<(U, O, E)>,
    Query(params): Query<RequestOtpParams>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    O: OtpCodeStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let email = Email::try_from(params.email)?;

    let use_case = RequestOtpUseCase::new(user_store, otp_code_store, email_client);
    use_case.execute(email).await?;

    Ok((StatusCode::OK, String::from("OTP code sent!")))
}

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use gatehouse_application::ConfirmOtpUseCase;
use gatehouse_core::{Email, EmailClient, OtpCodeStore, UserStore};
use serde::Deserialize;

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct ConfirmOtpRequest {
    pub email: String,
    #[serde(rename = "otpCode")]
    pub otp_code: String,
}

// Shares the confirm-account state tuple with the GET handler; only
// the OTP store is consulted here.
#[tracing::instrument(name = "Confirm OTP", skip_all)]
pub async fn confirm_otp<U, O, E>(
    State((_user_store, otp_code_store, _email_client)): State<(U, O, E)>,
    Json(request): Json<ConfirmOtpRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    O: OtpCodeStore + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let email = Email::try_from(request.email)?;

    let use_case = ConfirmOtpUseCase::new(otp_code_store);
    use_case.execute(&email, &request.otp_code).await?;

    Ok((StatusCode::OK, String::from("Account confirmed!")))
}

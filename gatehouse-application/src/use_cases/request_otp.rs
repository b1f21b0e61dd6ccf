use gatehouse_core::{
    Email, EmailClient, OTP_TTL_SECONDS, OtpCode, OtpCodeStore, OtpCodeStoreError, UserStore,
    UserStoreError,
};

pub const OTP_EMAIL_SUBJECT: &str = "Account verification";

/// Error types for OTP request use case
#[derive(Debug, thiserror::Error)]
pub enum RequestOtpError {
    #[error("Email not found")]
    EmailNotFound,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("OTP code store error: {0}")]
    OtpCodeStoreError(#[from] OtpCodeStoreError),
    #[error("Failed to send email: {0}")]
    EmailError(String),
}

/// OTP request use case - generates a fresh code, mails it, and stores
/// it with a 60 second lifetime, overwriting any prior code for the
/// same address.
pub struct RequestOtpUseCase<U, O, E>
where
    U: UserStore,
    O: OtpCodeStore,
    E: EmailClient,
{
    user_store: U,
    otp_code_store: O,
    email_client: E,
}

impl<U, O, E> RequestOtpUseCase<U, O, E>
where
    U: UserStore,
    O: OtpCodeStore,
    E: EmailClient,
{
    pub fn new(user_store: U, otp_code_store: O, email_client: E) -> Self {
        Self {
            user_store,
            otp_code_store,
            email_client,
        }
    }

    #[tracing::instrument(name = "RequestOtpUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<(), RequestOtpError> {
        // Unlike login, an unknown address is reported as such here.
        self.user_store
            .find_by_email(&email)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => RequestOtpError::EmailNotFound,
                other => RequestOtpError::UserStoreError(other),
            })?;

        let code = OtpCode::new();

        self.email_client
            .send_email(
                &email,
                OTP_EMAIL_SUBJECT,
                &format!("Your OTP code is {code}. It is only valid for 1 minute"),
            )
            .await
            .map_err(RequestOtpError::EmailError)?;

        self.otp_code_store
            .put_code(&email, code, OTP_TTL_SECONDS)
            .await?;

        Ok(())
    }
}

use gatehouse_core::{Email, OtpCodeStore, OtpCodeStoreError};

/// Error types for OTP confirmation use case
#[derive(Debug, thiserror::Error)]
pub enum ConfirmOtpError {
    #[error("Invalid OTP code")]
    InvalidOtp,
    #[error("OTP code store error: {0}")]
    OtpCodeStoreError(#[from] OtpCodeStoreError),
}

/// OTP confirmation use case - single-use comparison of the submitted
/// code against the stored one. A missing or expired entry never
/// matches, so it reads as `InvalidOtp` too.
pub struct ConfirmOtpUseCase<O>
where
    O: OtpCodeStore,
{
    otp_code_store: O,
}

impl<O> ConfirmOtpUseCase<O>
where
    O: OtpCodeStore,
{
    pub fn new(otp_code_store: O) -> Self {
        Self { otp_code_store }
    }

    #[tracing::instrument(name = "ConfirmOtpUseCase::execute", skip(self, submitted_code))]
    pub async fn execute(&self, email: &Email, submitted_code: &str) -> Result<(), ConfirmOtpError> {
        match self.otp_code_store.get_code(email).await? {
            Some(code) if code.matches(submitted_code) => {
                self.otp_code_store.delete_code(email).await?;
                Ok(())
            }
            _ => Err(ConfirmOtpError::InvalidOtp),
        }
    }
}

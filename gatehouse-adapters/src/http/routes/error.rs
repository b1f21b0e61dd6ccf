use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gatehouse_application::{
    ConfirmOtpError, GetProfileError, LoginError, LogoutError, RefreshTokenError, RegisterError,
    RequestOtpError,
};
use gatehouse_core::{
    OtpCodeStoreError, RevokedTokenStoreError, TokenIssuerError, UserError, UserStoreError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::token::TokenAuthError;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email is already taken")]
    EmailTaken,

    #[error("Please provide both email and password")]
    MissingCredentials,

    #[error("Email or password is incorrect")]
    InvalidCredentials,

    #[error("Missing token")]
    MissingToken,

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Email not found")]
    EmailNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid OTP code")]
    InvalidOtp,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::InvalidInput(_)
            | AuthApiError::MissingCredentials
            | AuthApiError::MissingToken => (StatusCode::BAD_REQUEST, self.to_string()),

            AuthApiError::EmailTaken => (StatusCode::CONFLICT, self.to_string()),

            AuthApiError::InvalidCredentials
            | AuthApiError::AuthenticationError(_)
            | AuthApiError::InvalidOtp => (StatusCode::UNAUTHORIZED, self.to_string()),

            AuthApiError::EmailNotFound | AuthApiError::UserNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }

            AuthApiError::UnexpectedError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<UserError> for AuthApiError {
    fn from(error: UserError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<UserStoreError> for AuthApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => AuthApiError::EmailTaken,
            UserStoreError::UserNotFound => AuthApiError::UserNotFound,
            UserStoreError::IncorrectPassword => AuthApiError::InvalidCredentials,
            UserStoreError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<TokenAuthError> for AuthApiError {
    fn from(error: TokenAuthError) -> Self {
        match error {
            TokenAuthError::InvalidToken | TokenAuthError::TokenRevoked => {
                AuthApiError::AuthenticationError(error.to_string())
            }
            TokenAuthError::MissingToken => AuthApiError::MissingToken,
            TokenAuthError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<TokenIssuerError> for AuthApiError {
    fn from(error: TokenIssuerError) -> Self {
        match error {
            TokenIssuerError::InvalidToken => {
                AuthApiError::AuthenticationError(error.to_string())
            }
            TokenIssuerError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<RevokedTokenStoreError> for AuthApiError {
    fn from(error: RevokedTokenStoreError) -> Self {
        AuthApiError::UnexpectedError(error.to_string())
    }
}

impl From<OtpCodeStoreError> for AuthApiError {
    fn from(error: OtpCodeStoreError) -> Self {
        AuthApiError::UnexpectedError(error.to_string())
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::EmailTaken => AuthApiError::EmailTaken,
            RegisterError::UserStoreError(e) => e.into(),
            RegisterError::TokenIssuerError(e) => e.into(),
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => AuthApiError::InvalidCredentials,
            LoginError::UserStoreError(e) => e.into(),
            LoginError::TokenIssuerError(e) => e.into(),
        }
    }
}

impl From<LogoutError> for AuthApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::InvalidToken | LogoutError::TokenRevoked => {
                AuthApiError::AuthenticationError(error.to_string())
            }
            LogoutError::RevokedTokenStoreError(e) => e.into(),
        }
    }
}

impl From<RefreshTokenError> for AuthApiError {
    fn from(error: RefreshTokenError) -> Self {
        match error {
            RefreshTokenError::TokenIssuerError(e) => e.into(),
        }
    }
}

impl From<GetProfileError> for AuthApiError {
    fn from(error: GetProfileError) -> Self {
        match error {
            GetProfileError::UserNotFound => AuthApiError::UserNotFound,
            GetProfileError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<RequestOtpError> for AuthApiError {
    fn from(error: RequestOtpError) -> Self {
        match error {
            RequestOtpError::EmailNotFound => AuthApiError::EmailNotFound,
            RequestOtpError::UserStoreError(e) => e.into(),
            RequestOtpError::OtpCodeStoreError(e) => e.into(),
            RequestOtpError::EmailError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<ConfirmOtpError> for AuthApiError {
    fn from(error: ConfirmOtpError) -> Self {
        match error {
            ConfirmOtpError::InvalidOtp => AuthApiError::InvalidOtp,
            ConfirmOtpError::OtpCodeStoreError(e) => e.into(),
        }
    }
}

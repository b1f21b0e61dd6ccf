mod confirm_otp;
mod error;
mod login;
mod logout;
mod me;
mod refresh_token;
mod register;
mod request_otp;

pub use confirm_otp::{ConfirmOtpRequest, confirm_otp};
pub use error::{AuthApiError, ErrorResponse};
pub use login::{LoginRequest, login};
pub use logout::logout;
pub use me::me;
pub use refresh_token::refresh_token;
pub use register::{RegisterRequest, register};
pub use request_otp::{RequestOtpParams, request_otp};

use gatehouse_application::{Authenticated, Registration};
use gatehouse_core::UserProfile;
use serde::Serialize;

/// Body returned by register and login: the fresh pair plus the user
/// with the hash stripped.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserProfile,
}

impl From<Registration> for AuthResponse {
    fn from(registration: Registration) -> Self {
        Self {
            access_token: registration.tokens.access_token,
            refresh_token: registration.tokens.refresh_token,
            user: registration.user,
        }
    }
}

impl From<Authenticated> for AuthResponse {
    fn from(authenticated: Authenticated) -> Self {
        Self {
            access_token: authenticated.tokens.access_token,
            refresh_token: authenticated.tokens.refresh_token,
            user: authenticated.user,
        }
    }
}

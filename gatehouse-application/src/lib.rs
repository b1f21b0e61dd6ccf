pub mod use_cases;

pub use use_cases::{
    confirm_otp::{ConfirmOtpError, ConfirmOtpUseCase},
    get_profile::{GetProfileError, GetProfileUseCase},
    login::{Authenticated, LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    refresh_token::{RefreshTokenError, RefreshTokenUseCase},
    register::{RegisterError, RegisterUseCase, Registration},
    request_otp::{RequestOtpError, RequestOtpUseCase},
};

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    otp_code::{OTP_TTL_SECONDS, OtpCode},
    password::Password,
    role::Role,
    token_pair::TokenPair,
    user::{NewUser, User, UserError, UserProfile},
    user_name::UserName,
};

pub use ports::{
    repositories::{
        OtpCodeStore, OtpCodeStoreError, RevokedTokenStore, RevokedTokenStoreError, UserStore,
        UserStoreError,
    },
    services::{EmailClient, TokenClaims, TokenIssuer, TokenIssuerError, TokenKind},
};

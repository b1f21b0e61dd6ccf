//! # Gatehouse - Authentication Service Library
//!
//! This is a facade crate that re-exports all public APIs from the
//! gatehouse components. Use this crate to get access to all
//! authentication functionality in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `OtpCode`, etc.
//! - **Port traits**: `UserStore`, `RevokedTokenStore`, `OtpCodeStore`,
//!   `TokenIssuer`, `EmailClient`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `RedisRevokedTokenStore`,
//!   `JwtTokenIssuer`, `PostmarkEmailClient`, etc.
//! - **Service**: `GatehouseService` - the main entry point

/// Core domain types and value objects
pub mod core {
    pub use gatehouse_core::*;
}

// Re-export most commonly used core types at the root level
pub use gatehouse_core::{
    Email, NewUser, OtpCode, Password, Role, TokenPair, User, UserError, UserName, UserProfile,
};

/// Port trait definitions
pub mod ports {
    pub use gatehouse_core::{
        EmailClient, OtpCodeStore, OtpCodeStoreError, RevokedTokenStore, RevokedTokenStoreError,
        TokenClaims, TokenIssuer, TokenIssuerError, TokenKind, UserStore, UserStoreError,
    };
}

// Re-export port traits at root level
pub use gatehouse_core::{
    EmailClient, OtpCodeStore, OtpCodeStoreError, RevokedTokenStore, RevokedTokenStoreError,
    TokenClaims, TokenIssuer, TokenIssuerError, TokenKind, UserStore, UserStoreError,
};

/// Application use cases
pub mod use_cases {
    pub use gatehouse_application::*;
}

// Re-export use cases at root level
pub use gatehouse_application::{
    ConfirmOtpUseCase, GetProfileUseCase, LoginUseCase, LogoutUseCase, RefreshTokenUseCase,
    RegisterUseCase, RequestOtpUseCase,
};

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use gatehouse_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use gatehouse_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use gatehouse_adapters::email::*;
    }

    /// Token issuance and validation
    pub mod token {
        pub use gatehouse_adapters::token::*;
    }

    /// Configuration
    pub mod config {
        pub use gatehouse_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use gatehouse_adapters::{
    email::{MockEmailClient, PostmarkEmailClient},
    persistence::{
        HashMapOtpCodeStore, HashMapUserStore, HashSetRevokedTokenStore, PostgresUserStore,
        RedisOtpCodeStore, RedisRevokedTokenStore,
    },
    token::{JwtConfig, JwtTokenIssuer},
};

/// Main service entry point
pub use gatehouse_service_lib::{
    GatehouseService, configure_postgresql, configure_redis, get_redis_client, init_tracing,
};

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

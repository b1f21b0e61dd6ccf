mod gatehouse_service;
mod helpers;
mod tracing;

pub use gatehouse_service::GatehouseService;
pub use helpers::{configure_postgresql, configure_redis, get_postgres_pool, get_redis_client};
pub use self::tracing::init_tracing;

// Re-export commonly used types
pub use gatehouse_core::{EmailClient, OtpCodeStore, RevokedTokenStore, TokenIssuer, UserStore};

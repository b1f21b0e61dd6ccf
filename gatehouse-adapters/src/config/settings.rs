use ::config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

use crate::token::JwtConfig;

/// Process configuration, loaded from the environment (a `.env` file is
/// honored when the binary calls `dotenvy::dotenv()` first). Secrets
/// stay wrapped until the component that signs or connects needs them.
#[derive(Debug, Clone, Deserialize)]
pub struct GatehouseSettings {
    #[serde(default = "defaults::app_address")]
    pub app_address: String,

    pub database_url: Secret<String>,

    #[serde(default = "defaults::redis_host_name")]
    pub redis_host_name: String,

    pub jwt_access_secret: Secret<String>,
    #[serde(default = "defaults::jwt_access_ttl_seconds")]
    pub jwt_access_ttl_seconds: i64,
    pub jwt_refresh_secret: Secret<String>,
    #[serde(default = "defaults::jwt_refresh_ttl_seconds")]
    pub jwt_refresh_ttl_seconds: i64,

    pub postmark_auth_token: Secret<String>,
}

impl GatehouseSettings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            access_secret: self.jwt_access_secret.clone(),
            access_ttl_seconds: self.jwt_access_ttl_seconds,
            refresh_secret: self.jwt_refresh_secret.clone(),
            refresh_ttl_seconds: self.jwt_refresh_ttl_seconds,
        }
    }
}

mod defaults {
    pub fn app_address() -> String {
        super::super::constants::prod::APP_ADDRESS.to_owned()
    }

    pub fn redis_host_name() -> String {
        "127.0.0.1".to_owned()
    }

    // Access tokens live minutes, refresh tokens days.
    pub fn jwt_access_ttl_seconds() -> i64 {
        900
    }

    pub fn jwt_refresh_ttl_seconds() -> i64 {
        604_800
    }
}

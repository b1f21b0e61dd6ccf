use std::sync::Arc;

use gatehouse_adapters::{
    config::{GatehouseSettings, prod},
    email::PostmarkEmailClient,
    persistence::{PostgresUserStore, RedisOtpCodeStore, RedisRevokedTokenStore},
    token::JwtTokenIssuer,
};
use gatehouse_core::Email;
use gatehouse_service_lib::{GatehouseService, configure_postgresql, configure_redis, init_tracing};
use reqwest::Client as HttpClient;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    dotenvy::dotenv().ok();
    let settings = GatehouseSettings::load()?;

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(&settings).await;

    // Setup Redis connection, shared by the revocation and OTP stores
    let redis_conn = Arc::new(RwLock::new(configure_redis(&settings)));

    // Create stores
    let user_store = PostgresUserStore::new(pg_pool);
    let revoked_token_store = RedisRevokedTokenStore::new(redis_conn.clone());
    let otp_code_store = RedisOtpCodeStore::new(redis_conn);

    // Create the token issuer
    let token_issuer = JwtTokenIssuer::new(settings.jwt_config());

    // Create email client
    let http_client = HttpClient::builder()
        .timeout(prod::email_client::TIMEOUT)
        .build()?;

    let email_client = PostmarkEmailClient::new(
        prod::email_client::BASE_URL.to_owned(),
        Email::try_from(prod::email_client::SENDER.to_owned())?,
        settings.postmark_auth_token.clone(),
        http_client,
    );

    let service = GatehouseService::new(
        user_store,
        revoked_token_store,
        otp_code_store,
        token_issuer,
        email_client,
    );

    let listener = tokio::net::TcpListener::bind(&settings.app_address).await?;
    service.run_standalone(listener, None).await?;

    Ok(())
}

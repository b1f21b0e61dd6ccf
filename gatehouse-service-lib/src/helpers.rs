use gatehouse_adapters::config::GatehouseSettings;
use redis::{Client, RedisResult};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Configure and return a PostgreSQL connection pool
///
/// Creates the pool from the configured database URL and runs all
/// pending migrations.
///
/// # Panics
/// Panics if unable to create the pool or run migrations
pub async fn configure_postgresql(settings: &GatehouseSettings) -> PgPool {
    let pg_pool = get_postgres_pool(settings.database_url.expose_secret())
        .await
        .expect("Failed to create Postgres connection pool");

    // Run database migrations
    sqlx::migrate!("../gatehouse-service/migrations")
        .run(&pg_pool)
        .await
        .expect("Failed to run migrations");

    pg_pool
}

/// Configure and return a Redis connection
///
/// # Panics
/// Panics if unable to connect to Redis
pub fn configure_redis(settings: &GatehouseSettings) -> redis::Connection {
    get_redis_client(&settings.redis_host_name)
        .expect("Failed to get Redis client")
        .get_connection()
        .expect("Failed to get Redis connection")
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}

/// Create a Redis client
pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}

use std::sync::Arc;

use gatehouse_core::{Email, OtpCode, OtpCodeStore, OtpCodeStoreError};
use redis::{Commands, Connection};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct RedisOtpCodeStore {
    conn: Arc<RwLock<Connection>>,
}

impl RedisOtpCodeStore {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl OtpCodeStore for RedisOtpCodeStore {
    #[tracing::instrument(name = "Storing OTP code in Redis", skip_all)]
    async fn put_code(
        &self,
        email: &Email,
        code: OtpCode,
        ttl_seconds: u64,
    ) -> Result<(), OtpCodeStoreError> {
        let key = get_key(email);

        // SET with EX overwrites any prior code and its deadline.
        let mut conn = self.conn.write().await;
        conn.set_ex(key, code.as_str(), ttl_seconds)
            .map_err(|e| OtpCodeStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Reading OTP code from Redis", skip_all)]
    async fn get_code(&self, email: &Email) -> Result<Option<OtpCode>, OtpCodeStoreError> {
        let key = get_key(email);
        let mut conn = self.conn.write().await;
        let stored: Option<String> = conn
            .get(&key)
            .map_err(|e| OtpCodeStoreError::UnexpectedError(e.to_string()))?;

        stored
            .map(|value| OtpCode::parse(value).map_err(OtpCodeStoreError::UnexpectedError))
            .transpose()
    }

    #[tracing::instrument(name = "Deleting OTP code from Redis", skip_all)]
    async fn delete_code(&self, email: &Email) -> Result<(), OtpCodeStoreError> {
        let key = get_key(email);
        let mut conn = self.conn.write().await;
        conn.del(&key)
            .map_err(|e| OtpCodeStoreError::UnexpectedError(e.to_string()))
    }
}

// Key prefix namespaces OTP entries inside the shared store.
const OTP_CODE_KEY_PREFIX: &str = "otpCode_";

fn get_key(email: &Email) -> String {
    format!("{}{}", OTP_CODE_KEY_PREFIX, email.as_str())
}

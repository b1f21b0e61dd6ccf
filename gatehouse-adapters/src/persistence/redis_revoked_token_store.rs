use std::sync::Arc;

use gatehouse_core::{RevokedTokenStore, RevokedTokenStoreError};
use redis::{Commands, Connection};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct RedisRevokedTokenStore {
    conn: Arc<RwLock<Connection>>,
}

impl RedisRevokedTokenStore {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl RevokedTokenStore for RedisRevokedTokenStore {
    #[tracing::instrument(name = "Revoking token in Redis", skip_all)]
    async fn revoke_token(
        &self,
        token: String,
        ttl_seconds: u64,
    ) -> Result<(), RevokedTokenStoreError> {
        let key = get_key(&token);

        let mut conn = self.conn.write().await;
        conn.set_ex(key, true, ttl_seconds)
            .map_err(|e| RevokedTokenStoreError::DatabaseError(e.to_string()))
    }

    #[tracing::instrument(name = "Checking token revocation in Redis", skip_all)]
    async fn is_revoked(&self, token: &str) -> Result<bool, RevokedTokenStoreError> {
        let key = get_key(token);
        let mut conn = self.conn.write().await;
        conn.exists(&key)
            .map_err(|e| RevokedTokenStoreError::DatabaseError(e.to_string()))
    }
}

// Key prefix namespaces the deny-list inside the shared store.
const REVOKED_TOKEN_KEY_PREFIX: &str = "blacklist_";

fn get_key(token: &str) -> String {
    format!("{}{}", REVOKED_TOKEN_KEY_PREFIX, token)
}

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use gatehouse_core::{RevokedTokenStore, RevokedTokenStoreError};

/// In-memory deny-list for tests and local runs. Entries never expire;
/// the process does not outlive the tokens it revokes.
#[derive(Default, Clone)]
pub struct HashSetRevokedTokenStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl HashSetRevokedTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RevokedTokenStore for HashSetRevokedTokenStore {
    async fn revoke_token(
        &self,
        token: String,
        _ttl_seconds: u64,
    ) -> Result<(), RevokedTokenStoreError> {
        self.tokens.write().await.insert(token);
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, RevokedTokenStoreError> {
        Ok(self.tokens.read().await.contains(token))
    }
}

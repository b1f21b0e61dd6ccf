use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use gatehouse_core::{Email, OtpCode, OtpCodeStore, OtpCodeStoreError};

/// In-memory OTP store for tests and local runs. Expiry is enforced
/// lazily on read, so tests can observe a dead entry without waiting
/// for a sweeper.
#[derive(Default, Clone)]
pub struct HashMapOtpCodeStore {
    codes: Arc<RwLock<HashMap<Email, (OtpCode, Instant)>>>,
}

impl HashMapOtpCodeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl OtpCodeStore for HashMapOtpCodeStore {
    async fn put_code(
        &self,
        email: &Email,
        code: OtpCode,
        ttl_seconds: u64,
    ) -> Result<(), OtpCodeStoreError> {
        let deadline = Instant::now() + Duration::from_secs(ttl_seconds);
        self.codes
            .write()
            .await
            .insert(email.clone(), (code, deadline));
        Ok(())
    }

    async fn get_code(&self, email: &Email) -> Result<Option<OtpCode>, OtpCodeStoreError> {
        let mut codes = self.codes.write().await;
        match codes.get(email) {
            Some((code, deadline)) if *deadline > Instant::now() => Ok(Some(code.clone())),
            Some(_) => {
                codes.remove(email);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete_code(&self, email: &Email) -> Result<(), OtpCodeStoreError> {
        self.codes.write().await.remove(email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::try_from("alice@example.com".to_owned()).unwrap()
    }

    fn code() -> OtpCode {
        OtpCode::parse("123456".to_owned()).unwrap()
    }

    #[tokio::test]
    async fn test_put_get_delete_round_trip() {
        let store = HashMapOtpCodeStore::new();
        store.put_code(&email(), code(), 60).await.unwrap();

        assert_eq!(Some(code()), store.get_code(&email()).await.unwrap());

        store.delete_code(&email()).await.unwrap();
        assert_eq!(None, store.get_code(&email()).await.unwrap());
    }

    #[tokio::test]
    async fn test_expired_codes_read_as_missing() {
        let store = HashMapOtpCodeStore::new();
        store.put_code(&email(), code(), 0).await.unwrap();

        assert_eq!(None, store.get_code(&email()).await.unwrap());
    }

    #[tokio::test]
    async fn test_a_new_code_overwrites_the_prior_one() {
        let store = HashMapOtpCodeStore::new();
        store.put_code(&email(), code(), 60).await.unwrap();
        let newer = OtpCode::parse("654321".to_owned()).unwrap();
        store.put_code(&email(), newer.clone(), 60).await.unwrap();

        assert_eq!(Some(newer), store.get_code(&email()).await.unwrap());
    }
}

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use gatehouse_core::{Email, NewUser, Password, User, UserStore, UserStoreError};

use super::password_hasher::{compute_password_hash, verify_password_hash};

/// In-memory user store for tests and local runs. Hashes passwords the
/// same way the PostgreSQL store does, so the plaintext-never-stored
/// invariant holds here too.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
    next_id: Arc<RwLock<i64>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let password_hash = compute_password_hash(new_user.password.clone())
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let mut users = self.users.write().await;
        if users.contains_key(&new_user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let mut next_id = self.next_id.write().await;
        *next_id += 1;

        let user = User::new(
            *next_id,
            new_user.name,
            new_user.email.clone(),
            password_hash,
            new_user.role,
        );
        users.insert(new_user.email, user.clone());
        Ok(user)
    }

    async fn authenticate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let user = self.find_by_email(email).await?;

        verify_password_hash(user.password_hash().clone(), password.clone())
            .await
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_id(&self, id: i64) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|user| user.id() == id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}

use gatehouse_core::{UserProfile, UserStore, UserStoreError};

/// Error types for profile lookup
#[derive(Debug, thiserror::Error)]
pub enum GetProfileError {
    #[error("User not found")]
    UserNotFound,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

/// Profile use case - resolves the authenticated caller's own record
pub struct GetProfileUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> GetProfileUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "GetProfileUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: i64) -> Result<UserProfile, GetProfileError> {
        let user = self
            .user_store
            .find_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => GetProfileError::UserNotFound,
                other => GetProfileError::UserStoreError(other),
            })?;

        Ok(user.profile())
    }
}

use gatehouse_core::{
    NewUser, TokenIssuer, TokenIssuerError, TokenPair, UserProfile, UserStore, UserStoreError,
};

/// Outcome of a successful registration: a fresh token pair plus the
/// created user, hash stripped.
#[derive(Debug, Clone)]
pub struct Registration {
    pub tokens: TokenPair,
    pub user: UserProfile,
}

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Email is already taken")]
    EmailTaken,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Token issuer error: {0}")]
    TokenIssuerError(#[from] TokenIssuerError),
}

/// Register use case - creates a user and issues their first token pair
pub struct RegisterUseCase<U, T>
where
    U: UserStore,
    T: TokenIssuer,
{
    user_store: U,
    token_issuer: T,
}

impl<U, T> RegisterUseCase<U, T>
where
    U: UserStore,
    T: TokenIssuer,
{
    pub fn new(user_store: U, token_issuer: T) -> Self {
        Self {
            user_store,
            token_issuer,
        }
    }

    /// Execute the register use case
    ///
    /// The email pre-check is a fast path only; the store's uniqueness
    /// constraint is the authoritative guard, so a concurrent duplicate
    /// surfaces as `EmailTaken` from `add_user` as well.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all, fields(email = %new_user.email))]
    pub async fn execute(&self, new_user: NewUser) -> Result<Registration, RegisterError> {
        match self.user_store.find_by_email(&new_user.email).await {
            Ok(_) => return Err(RegisterError::EmailTaken),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => return Err(RegisterError::UserStoreError(e)),
        }

        // Create-then-issue is sequential, not transactional.
        let user = self
            .user_store
            .add_user(new_user)
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => RegisterError::EmailTaken,
                other => RegisterError::UserStoreError(other),
            })?;

        let tokens = self.token_issuer.issue_pair(user.id(), user.email())?;

        Ok(Registration {
            tokens,
            user: user.profile(),
        })
    }
}

use gatehouse_core::{
    Email, Password, TokenIssuer, TokenIssuerError, TokenPair, UserProfile, UserStore,
    UserStoreError,
};

/// Outcome of a successful login: a fresh token pair plus the user
/// record with the hash stripped.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub tokens: TokenPair,
    pub user: UserProfile,
}

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Token issuer error: {0}")]
    TokenIssuerError(#[from] TokenIssuerError),
}

/// Login use case - verifies credentials and issues a fresh token pair
pub struct LoginUseCase<U, T>
where
    U: UserStore,
    T: TokenIssuer,
{
    user_store: U,
    token_issuer: T,
}

impl<U, T> LoginUseCase<U, T>
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

    /// Execute the login use case
    ///
    /// Unknown email and wrong password collapse to the same
    /// `InvalidCredentials` outcome.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<Authenticated, LoginError> {
        let user = self
            .user_store
            .authenticate_user(&email, &password)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound | UserStoreError::IncorrectPassword => {
                    LoginError::InvalidCredentials
                }
                other => LoginError::UserStoreError(other),
            })?;

        let tokens = self.token_issuer.issue_pair(user.id(), user.email())?;

        Ok(Authenticated {
            tokens,
            user: user.profile(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::{NewUser, Role, TokenClaims, TokenKind, User, UserName};
    use secrecy::{ExposeSecret, Secret};

    #[derive(Clone)]
    struct MockUserStore {
        email: String,
        password: String,
    }

    #[async_trait::async_trait]
    impl UserStore for MockUserStore {
        async fn add_user(&self, _new_user: NewUser) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn authenticate_user(
            &self,
            email: &Email,
            password: &Password,
        ) -> Result<User, UserStoreError> {
            if email.as_str() != self.email {
                return Err(UserStoreError::UserNotFound);
            }
            if password.as_ref().expose_secret() != &self.password {
                return Err(UserStoreError::IncorrectPassword);
            }
            Ok(User::new(
                1,
                UserName::try_from("Alice".to_owned()).unwrap(),
                email.clone(),
                Secret::from("$argon2id$stub".to_owned()),
                Role::User,
            ))
        }

        async fn find_by_email(&self, _email: &Email) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: i64) -> Result<User, UserStoreError> {
            unimplemented!()
        }
    }

    #[derive(Clone)]
    struct MockTokenIssuer;

    impl TokenIssuer for MockTokenIssuer {
        fn issue_access(&self, user_id: i64, _email: &Email) -> Result<String, TokenIssuerError> {
            Ok(format!("access-{user_id}"))
        }

        fn issue_refresh(&self, user_id: i64, _email: &Email) -> Result<String, TokenIssuerError> {
            Ok(format!("refresh-{user_id}"))
        }

        fn verify(&self, _token: &str, _kind: TokenKind) -> Result<TokenClaims, TokenIssuerError> {
            unimplemented!()
        }
    }

    fn store() -> MockUserStore {
        MockUserStore {
            email: "alice@example.com".to_owned(),
            password: "secret1".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let use_case = LoginUseCase::new(store(), MockTokenIssuer);

        let email = Email::try_from("alice@example.com".to_owned()).unwrap();
        let password = Password::try_from(Secret::from("secret1".to_owned())).unwrap();

        let authenticated = use_case.execute(email, password).await.unwrap();
        assert_eq!(1, authenticated.user.id);
        assert_eq!("access-1", authenticated.tokens.access_token);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let use_case = LoginUseCase::new(store(), MockTokenIssuer);

        let known = Email::try_from("alice@example.com".to_owned()).unwrap();
        let unknown = Email::try_from("bob@example.com".to_owned()).unwrap();
        let wrong = Password::try_from(Secret::from("not-it".to_owned())).unwrap();

        let wrong_password = use_case.execute(known, wrong.clone()).await;
        let unknown_email = use_case.execute(unknown, wrong).await;

        assert!(matches!(wrong_password, Err(LoginError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(LoginError::InvalidCredentials)));
    }
}

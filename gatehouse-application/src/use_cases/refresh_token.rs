use gatehouse_core::{Email, TokenIssuer, TokenIssuerError};

/// Error types for refresh token use case
#[derive(Debug, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Token issuer error: {0}")]
    TokenIssuerError(#[from] TokenIssuerError),
}

/// Refresh use case - issues a new access token against claims the
/// caller already validated with the refresh secret. The refresh token
/// itself is passed through by the caller, never reissued here.
pub struct RefreshTokenUseCase<T>
where
    T: TokenIssuer,
{
    token_issuer: T,
}

impl<T> RefreshTokenUseCase<T>
where
    T: TokenIssuer,
{
    pub fn new(token_issuer: T) -> Self {
        Self { token_issuer }
    }

    #[tracing::instrument(name = "RefreshTokenUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: i64, email: &Email) -> Result<String, RefreshTokenError> {
        Ok(self.token_issuer.issue_access(user_id, email)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::{TokenClaims, TokenKind};

    #[derive(Clone)]
    struct MockTokenIssuer;

    impl TokenIssuer for MockTokenIssuer {
        fn issue_access(&self, user_id: i64, email: &Email) -> Result<String, TokenIssuerError> {
            Ok(format!("access-{user_id}-{email}"))
        }

        fn issue_refresh(&self, _user_id: i64, _email: &Email) -> Result<String, TokenIssuerError> {
            unimplemented!()
        }

        fn verify(&self, _token: &str, _kind: TokenKind) -> Result<TokenClaims, TokenIssuerError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_refresh_issues_a_new_access_token() {
        let use_case = RefreshTokenUseCase::new(MockTokenIssuer);
        let email = Email::try_from("alice@example.com".to_owned()).unwrap();

        let token = use_case.execute(7, &email).await.unwrap();
        assert_eq!("access-7-alice@example.com", token);
    }
}

use gatehouse_core::{
    Email, NewUser, Password, Role, User, UserName, UserStore, UserStoreError,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres};

use super::password_hasher::{compute_password_hash, verify_password_hash};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    role: String,
}

impl UserRow {
    /// A row that no longer parses as domain types is a data-integrity
    /// failure, not a lookup miss.
    fn into_user(self) -> Result<User, UserStoreError> {
        let name = UserName::try_from(self.name)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let email = Email::try_from(self.email)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let role: Role = self
            .role
            .parse()
            .map_err(UserStoreError::UnexpectedError)?;

        Ok(User::new(
            self.id,
            name,
            email,
            Secret::from(self.password_hash),
            role,
        ))
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let password_hash = compute_password_hash(new_user.password.clone())
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (name, email, password_hash, role)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, email, password_hash, role
            "#,
        )
        .bind(new_user.name.as_str())
        .bind(new_user.email.as_str())
        .bind(password_hash.expose_secret())
        .bind(new_user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // Unique-constraint violation: the authoritative
                // email-uniqueness guard.
                if db_err.constraint().is_some() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        row.into_user()
    }

    #[tracing::instrument(name = "Validating user credentials in PostgreSQL", skip_all)]
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

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, password_hash, role
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row.into_user()
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: i64) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, password_hash, role
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row.into_user()
    }
}

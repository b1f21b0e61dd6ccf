use secrecy::Secret;
use serde::Serialize;
use thiserror::Error;

use super::{email::Email, password::Password, role::Role, user_name::UserName};

/// Field-level validation failures, surfaced to callers as the first
/// error encountered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Name must contain at least 4 characters")]
    NameTooShort,
    #[error("Email is not a valid email address")]
    InvalidEmail,
    #[error("Password must contain at least 6 characters")]
    PasswordTooShort,
}

/// Registration input: validated fields plus the plaintext password.
/// The user store hashes the password on insert; it is never persisted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub password: Password,
    pub role: Role,
}

impl NewUser {
    pub fn new(name: UserName, email: Email, password: Password) -> Self {
        Self {
            name,
            email,
            password,
            role: Role::default(),
        }
    }
}

/// A persisted user record. Carries the password hash; strip it with
/// [`User::profile`] before anything leaves the service boundary.
#[derive(Debug, Clone)]
pub struct User {
    id: i64,
    name: UserName,
    email: Email,
    password_hash: Secret<String>,
    role: Role,
}

impl User {
    pub fn new(
        id: i64,
        name: UserName,
        email: Email,
        password_hash: Secret<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            role,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The externally exposed shape, with the password hash stripped.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: UserName,
    pub email: Email,
    pub role: Role,
}

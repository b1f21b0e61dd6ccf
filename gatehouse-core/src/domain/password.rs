use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A plaintext password candidate. Only ever held in memory behind
/// [`Secret`]; the stores persist a salted hash, never this value.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserError::PasswordTooShort);
        }
        Ok(Self(value))
    }
}

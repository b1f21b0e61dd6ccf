use serde::{Deserialize, Serialize};

use super::user::UserError;

pub const MIN_NAME_LENGTH: usize = 4;

/// A display name of at least four characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().chars().count() < MIN_NAME_LENGTH {
            return Err(UserError::NameTooShort);
        }
        Ok(Self(value))
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lifetime of a stored OTP entry. A code submitted after this window
/// reads back as missing and fails confirmation.
pub const OTP_TTL_SECONDS: u64 = 60;

/// A six-digit one-time passcode delivered by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OtpCode(String);

impl OtpCode {
    /// Generate a uniformly random code in 100000..=999999.
    pub fn new() -> Self {
        let code = rand::rng().random_range(100_000..=999_999);
        Self(code.to_string())
    }

    /// Parse a stored code. Submitted candidates are compared as plain
    /// strings via [`OtpCode::matches`], so arbitrary input never needs
    /// to parse.
    pub fn parse(value: String) -> Result<Self, String> {
        if value.len() == 6 && value.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(value))
        } else {
            Err(format!("invalid OTP code: {value}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, submitted: &str) -> bool {
        self.0 == submitted
    }
}

impl Default for OtpCode {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<String> for OtpCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<OtpCode> for String {
    fn from(code: OtpCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

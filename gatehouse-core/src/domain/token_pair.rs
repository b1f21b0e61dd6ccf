use serde::Serialize;

/// A freshly issued access/refresh token pair. Tokens are opaque signed
/// strings here; the issuer owns their structure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

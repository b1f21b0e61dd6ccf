use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use gatehouse_core::Password;
use secrecy::{ExposeSecret, Secret};

// Argon2id with a fixed work factor; hashing runs on the blocking pool
// so request tasks are not stalled.

#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            let hasher = Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
            );
            hasher
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Password,
) -> Result<(), String> {
    let current_span: tracing::Span = tracing::Span::current();
    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
            )
            .verify_password(
                password_candidate.as_ref().expose_secret().as_bytes(),
                &expected_password_hash,
            )
            .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

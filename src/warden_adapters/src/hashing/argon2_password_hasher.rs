use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use warden_core::{HashedPassword, Password, PasswordHasher, PasswordHasherError};

use crate::config::HashingSettings;

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`).
///
/// Cost parameters only apply to new hashes. Verification reads the
/// parameters embedded in the digest, so older digests keep working after
/// the settings change.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(settings: &HashingSettings) -> Result<Self, PasswordHasherError> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.argon2();
        let password = password.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| HashedPassword::new(Secret::from(h.to_string())))
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        digest: &HashedPassword,
        password: &Password,
    ) -> Result<bool, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let verifier = self.argon2();
        let digest = digest.clone();
        let password = password.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let expected_password_hash = PasswordHash::new(digest.as_ref().expose_secret())
                    .map_err(|_| PasswordHasherError::InvalidDigest)?;

                match verifier.verify_password(
                    password.as_ref().expose_secret().as_bytes(),
                    &expected_password_hash,
                ) {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => {
                        tracing::warn!(error = %e, "Stored digest is not usable");
                        Err(PasswordHasherError::InvalidDigest)
                    }
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }
}

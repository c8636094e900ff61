use warden_core::{
    Email, Password, PasswordHasher, PasswordHasherError, UserFilter, UserStore, UserStoreError,
};

/// Error types for validate login use case
#[derive(Debug, thiserror::Error)]
pub enum ValidateLoginError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Validate login use case - checks credentials without revealing which part was wrong
pub struct ValidateLoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> ValidateLoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the validate login use case
    ///
    /// # Returns
    /// Ok(true) only when the email is registered and the password matches.
    /// An unknown email is Ok(false), never an error.
    #[tracing::instrument(name = "ValidateLoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<bool, ValidateLoginError> {
        let Some(user) = self.user_store.find_user(UserFilter::Email(&email)).await? else {
            // Burn the same hashing cost as a real check so the response time
            // does not tell unknown emails apart from wrong passwords.
            if let Err(e) = self.password_hasher.hash(&password).await {
                tracing::warn!(error = %e, "Hashing for unknown email failed");
            }
            return Ok(false);
        };

        Ok(self
            .password_hasher
            .verify(user.hashed_password(), &password)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeHasher, MockUserStore, email, password};
    use secrecy::Secret;
    use warden_core::HashedPassword;

    async fn store_with_user(hasher: &FakeHasher) -> MockUserStore {
        let store = MockUserStore::default();
        let digest = hasher.hash(&password("pw")).await.unwrap();
        store.add_user(email("b@x.com"), digest).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_correct_password() {
        let hasher = FakeHasher::default();
        let store = store_with_user(&hasher).await;
        let use_case = ValidateLoginUseCase::new(&store, &hasher);

        assert!(use_case.execute(email("b@x.com"), password("pw")).await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let hasher = FakeHasher::default();
        let store = store_with_user(&hasher).await;
        let use_case = ValidateLoginUseCase::new(&store, &hasher);

        assert!(
            !use_case
                .execute(email("b@x.com"), password("wrong"))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_unknown_email_is_false_and_still_hashes() {
        let hasher = FakeHasher::default();
        let store = store_with_user(&hasher).await;
        let calls_before = hasher.hash_calls();
        let use_case = ValidateLoginUseCase::new(&store, &hasher);

        let result = use_case
            .execute(email("nobody@x.com"), password("pw"))
            .await
            .unwrap();

        assert!(!result);
        assert_eq!(hasher.hash_calls(), calls_before + 1);
    }

    #[tokio::test]
    async fn test_malformed_digest_is_an_error() {
        let hasher = FakeHasher::default();
        let store = MockUserStore::default();
        store
            .add_user(
                email("b@x.com"),
                HashedPassword::new(Secret::from("not-a-digest".to_string())),
            )
            .await
            .unwrap();
        let use_case = ValidateLoginUseCase::new(&store, &hasher);

        let result = use_case.execute(email("b@x.com"), password("pw")).await;
        assert!(matches!(
            result,
            Err(ValidateLoginError::PasswordHasherError(
                PasswordHasherError::InvalidDigest
            ))
        ));
    }
}

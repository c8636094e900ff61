use warden_core::{Email, SessionToken, UserFilter, UserStore, UserStoreError, UserUpdate};

/// Create session use case - opens a session for an already validated user
///
/// The password is not checked here; callers run `ValidateLoginUseCase` first.
pub struct CreateSessionUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> CreateSessionUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    /// Execute the create session use case
    ///
    /// # Returns
    /// The new session token, or None when no user has this email.
    /// Any previous session of the user is replaced.
    #[tracing::instrument(name = "CreateSessionUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<Option<SessionToken>, UserStoreError> {
        let Some(user) = self.user_store.find_user(UserFilter::Email(&email)).await? else {
            return Ok(None);
        };

        let session_id = SessionToken::new();
        self.user_store
            .update_user(user.id(), UserUpdate::new().session_id(Some(session_id.clone())))
            .await?;

        Ok(Some(session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeHasher, MockUserStore, email, password};
    use warden_core::PasswordHasher;

    #[tokio::test]
    async fn test_create_session_persists_token() {
        let store = MockUserStore::default();
        let digest = FakeHasher::default().hash(&password("pw")).await.unwrap();
        let user = store.add_user(email("b@x.com"), digest).await.unwrap();
        let use_case = CreateSessionUseCase::new(&store);

        let token = use_case.execute(email("b@x.com")).await.unwrap().unwrap();

        let stored = store.get(user.id()).await.unwrap();
        assert_eq!(stored.session_id(), Some(&token));
    }

    #[tokio::test]
    async fn test_new_session_replaces_old_one() {
        let store = MockUserStore::default();
        let digest = FakeHasher::default().hash(&password("pw")).await.unwrap();
        let user = store.add_user(email("b@x.com"), digest).await.unwrap();
        let use_case = CreateSessionUseCase::new(&store);

        let first = use_case.execute(email("b@x.com")).await.unwrap().unwrap();
        let second = use_case.execute(email("b@x.com")).await.unwrap().unwrap();

        assert_ne!(first, second);
        let stored = store.get(user.id()).await.unwrap();
        assert_eq!(stored.session_id(), Some(&second));
    }

    #[tokio::test]
    async fn test_unknown_email_returns_none() {
        let store = MockUserStore::default();
        let use_case = CreateSessionUseCase::new(&store);

        let result = use_case.execute(email("nobody@x.com")).await.unwrap();
        assert!(result.is_none());
    }
}

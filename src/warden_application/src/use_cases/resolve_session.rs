use warden_core::{SessionToken, User, UserFilter, UserStore, UserStoreError};

/// Resolve session use case - maps a session token back to its user
pub struct ResolveSessionUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> ResolveSessionUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "ResolveSessionUseCase::execute", skip(self))]
    pub async fn execute(&self, session_id: &SessionToken) -> Result<Option<User>, UserStoreError> {
        self.user_store
            .find_user(UserFilter::SessionId(session_id))
            .await
    }
}

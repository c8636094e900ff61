use warden_core::{UserId, UserStore, UserStoreError, UserUpdate};

/// Destroy session use case - clears the session of a user
pub struct DestroySessionUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> DestroySessionUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    /// Execute the destroy session use case
    ///
    /// An unknown user id is a no-op, not an error.
    #[tracing::instrument(name = "DestroySessionUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: UserId) -> Result<(), UserStoreError> {
        match self
            .user_store
            .update_user(user_id, UserUpdate::new().session_id(None))
            .await
        {
            Err(UserStoreError::UserNotFound) => {
                tracing::debug!("No user to log out");
                Ok(())
            }
            result => result,
        }
    }
}

use warden_core::{Email, ResetToken, UserFilter, UserStore, UserStoreError, UserUpdate};

/// Error types for request password reset use case
#[derive(Debug, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Unknown user")]
    UnknownUser,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Request password reset use case - issues a single-use reset token
pub struct RequestPasswordResetUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> RequestPasswordResetUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    /// Execute the request password reset use case
    ///
    /// # Returns
    /// The reset token now stored on the user. A pending token is replaced.
    #[tracing::instrument(name = "RequestPasswordResetUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<ResetToken, RequestPasswordResetError> {
        let user = self
            .user_store
            .find_user(UserFilter::Email(&email))
            .await?
            .ok_or(RequestPasswordResetError::UnknownUser)?;

        let reset_token = ResetToken::new();
        self.user_store
            .update_user(user.id(), UserUpdate::new().reset_token(Some(reset_token.clone())))
            .await?;

        Ok(reset_token)
    }
}

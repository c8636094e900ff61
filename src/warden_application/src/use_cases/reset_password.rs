use warden_core::{
    Password, PasswordHasher, PasswordHasherError, ResetToken, UserFilter, UserStore,
    UserStoreError, UserUpdate,
};

/// Error types for reset password use case
#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Invalid reset token")]
    InvalidResetToken,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Reset password use case - consumes a reset token and sets a new password
pub struct ResetPasswordUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> ResetPasswordUseCase<'a, U, H>
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

    /// Execute the reset password use case
    ///
    /// # Arguments
    /// * `reset_token` - Token previously issued by `RequestPasswordResetUseCase`
    /// * `new_password` - The new password to set
    ///
    /// # Returns
    /// Ok(()) on success. The token is cleared in the same update, so a second
    /// call with it fails with ResetPasswordError::InvalidResetToken, even
    /// when both calls run concurrently.
    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self, new_password))]
    pub async fn execute(
        &self,
        reset_token: ResetToken,
        new_password: Password,
    ) -> Result<(), ResetPasswordError> {
        let user = self
            .user_store
            .find_user(UserFilter::ResetToken(&reset_token))
            .await?
            .ok_or(ResetPasswordError::InvalidResetToken)?;

        let hashed_password = self.password_hasher.hash(&new_password).await?;

        // Guarded on the token so two resets racing on it cannot both win.
        let update = UserUpdate::new()
            .hashed_password(hashed_password)
            .reset_token(None)
            .only_if_reset_token(reset_token);

        match self.user_store.update_user(user.id(), update).await {
            Ok(()) => Ok(()),
            Err(UserStoreError::UserNotFound) => Err(ResetPasswordError::InvalidResetToken),
            Err(e) => Err(e.into()),
        }
    }
}

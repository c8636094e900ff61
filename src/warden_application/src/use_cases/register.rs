use warden_core::{
    Email, Password, PasswordHasher, PasswordHasherError, User, UserFilter, UserStore,
    UserStoreError,
};

/// Error types for register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Register use case - creates a new account
pub struct RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
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

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `password` - Clear text password, hashed before it reaches the store
    ///
    /// # Returns
    /// The stored user, or RegisterError::UserAlreadyExists if the email is taken
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<User, RegisterError> {
        if self
            .user_store
            .find_user(UserFilter::Email(&email))
            .await?
            .is_some()
        {
            return Err(RegisterError::UserAlreadyExists);
        }

        let hashed_password = self.password_hasher.hash(&password).await?;

        // A concurrent registration can still win the race; the store's unique
        // constraint is the authority.
        self.user_store
            .add_user(email, hashed_password)
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => RegisterError::UserAlreadyExists,
                e => e.into(),
            })
    }
}

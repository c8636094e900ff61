use warden_core::{
    Email, Password, PasswordHasher, ResetToken, SessionToken, User, UserId, UserStore,
    UserStoreError,
};

use crate::use_cases::{
    CreateSessionUseCase, DestroySessionUseCase, RegisterError, RegisterUseCase,
    RequestPasswordResetError, RequestPasswordResetUseCase, ResetPasswordError,
    ResetPasswordUseCase, ResolveSessionUseCase, ValidateLoginError, ValidateLoginUseCase,
};

/// Entry point for registration, login checks, sessions and password resets.
///
/// Owns the user store and password hasher it was built with; nothing is
/// shared through globals. Stores are expected to be cheap to clone (internal
/// `Arc`), so one `AuthService` per application state is enough.
///
/// Each user moves independently between "no session"/"has session" and
/// "no reset pending"/"reset pending". The two never constrain each other.
#[derive(Clone)]
pub struct AuthService<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    password_hasher: H,
}

impl<U, H> AuthService<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: U, password_hasher: H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    pub async fn register(&self, email: Email, password: Password) -> Result<User, RegisterError> {
        RegisterUseCase::new(&self.user_store, &self.password_hasher)
            .execute(email, password)
            .await
    }

    pub async fn validate_login(
        &self,
        email: Email,
        password: Password,
    ) -> Result<bool, ValidateLoginError> {
        ValidateLoginUseCase::new(&self.user_store, &self.password_hasher)
            .execute(email, password)
            .await
    }

    /// Opens a session without checking a password; call
    /// [`validate_login`](Self::validate_login) first.
    pub async fn create_session(&self, email: Email) -> Result<Option<SessionToken>, UserStoreError> {
        CreateSessionUseCase::new(&self.user_store)
            .execute(email)
            .await
    }

    pub async fn resolve_session(
        &self,
        session_id: &SessionToken,
    ) -> Result<Option<User>, UserStoreError> {
        ResolveSessionUseCase::new(&self.user_store)
            .execute(session_id)
            .await
    }

    pub async fn destroy_session(&self, user_id: UserId) -> Result<(), UserStoreError> {
        DestroySessionUseCase::new(&self.user_store)
            .execute(user_id)
            .await
    }

    pub async fn request_password_reset(
        &self,
        email: Email,
    ) -> Result<ResetToken, RequestPasswordResetError> {
        RequestPasswordResetUseCase::new(&self.user_store)
            .execute(email)
            .await
    }

    pub async fn reset_password(
        &self,
        reset_token: ResetToken,
        new_password: Password,
    ) -> Result<(), ResetPasswordError> {
        ResetPasswordUseCase::new(&self.user_store, &self.password_hasher)
            .execute(reset_token, new_password)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeHasher, MockUserStore, email, password};

    fn service() -> AuthService<MockUserStore, FakeHasher> {
        AuthService::new(MockUserStore::default(), FakeHasher::default())
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let auth = service();
        auth.register(email("b@x.com"), password("pw"))
            .await
            .unwrap();
        assert!(
            auth.validate_login(email("b@x.com"), password("pw"))
                .await
                .unwrap()
        );

        let token = auth
            .create_session(email("b@x.com"))
            .await
            .unwrap()
            .unwrap();
        let user = auth.resolve_session(&token).await.unwrap().unwrap();
        assert_eq!(user.email(), &email("b@x.com"));

        auth.destroy_session(user.id()).await.unwrap();
        assert!(auth.resolve_session(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_password_reset_is_single_use() {
        let auth = service();
        auth.register(email("b@x.com"), password("pw"))
            .await
            .unwrap();

        let reset = auth
            .request_password_reset(email("b@x.com"))
            .await
            .unwrap();
        auth.reset_password(reset.clone(), password("newpw"))
            .await
            .unwrap();

        assert!(
            auth.validate_login(email("b@x.com"), password("newpw"))
                .await
                .unwrap()
        );
        assert!(
            !auth
                .validate_login(email("b@x.com"), password("pw"))
                .await
                .unwrap()
        );

        let second = auth.reset_password(reset, password("again")).await;
        assert!(matches!(second, Err(ResetPasswordError::InvalidResetToken)));
    }

    #[tokio::test]
    async fn test_session_and_reset_are_independent() {
        let auth = service();
        auth.register(email("b@x.com"), password("pw"))
            .await
            .unwrap();

        let session = auth
            .create_session(email("b@x.com"))
            .await
            .unwrap()
            .unwrap();
        let reset = auth
            .request_password_reset(email("b@x.com"))
            .await
            .unwrap();
        auth.reset_password(reset, password("newpw")).await.unwrap();

        let user = auth.resolve_session(&session).await.unwrap().unwrap();
        assert_eq!(user.session_id(), Some(&session));
        assert_eq!(user.reset_token(), None);
    }

    #[tokio::test]
    async fn test_unknown_inputs_return_none() {
        let auth = service();

        assert!(
            auth.create_session(email("nobody@x.com"))
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            auth.resolve_session(&SessionToken::new())
                .await
                .unwrap()
                .is_none()
        );
        assert!(auth.destroy_session(UserId::new(99)).await.is_ok());
        assert!(matches!(
            auth.request_password_reset(email("nobody@x.com")).await,
            Err(RequestPasswordResetError::UnknownUser)
        ));
    }
}

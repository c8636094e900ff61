use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    hashed_password::HashedPassword,
    token::{ResetToken, SessionToken},
    user::{User, UserId},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Lookup key for [`UserStore::find_user`]. Every variant names a unique column,
/// so a lookup yields at most one user.
#[derive(Debug, Clone, Copy)]
pub enum UserFilter<'a> {
    Email(&'a Email),
    SessionId(&'a SessionToken),
    ResetToken(&'a ResetToken),
}

/// Partial update of the mutable user fields.
///
/// `None` leaves a field untouched. For the nullable token columns,
/// `Some(None)` clears the column.
///
/// `expected_reset_token` makes the update conditional: it only applies while
/// the row still holds that reset token, otherwise the store answers
/// [`UserStoreError::UserNotFound`] and changes nothing.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub hashed_password: Option<HashedPassword>,
    pub session_id: Option<Option<SessionToken>>,
    pub reset_token: Option<Option<ResetToken>>,
    pub expected_reset_token: Option<ResetToken>,
}

impl UserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hashed_password(mut self, hashed_password: HashedPassword) -> Self {
        self.hashed_password = Some(hashed_password);
        self
    }

    pub fn session_id(mut self, session_id: Option<SessionToken>) -> Self {
        self.session_id = Some(session_id);
        self
    }

    pub fn reset_token(mut self, reset_token: Option<ResetToken>) -> Self {
        self.reset_token = Some(reset_token);
        self
    }

    pub fn only_if_reset_token(mut self, reset_token: ResetToken) -> Self {
        self.expected_reset_token = Some(reset_token);
        self
    }

    /// Whether the current row satisfies `expected_reset_token`.
    pub fn precondition_holds(&self, user: &User) -> bool {
        match &self.expected_reset_token {
            Some(expected) => user.reset_token() == Some(expected),
            None => true,
        }
    }

    /// True when no column would change. The precondition is not a change.
    pub fn is_empty(&self) -> bool {
        self.hashed_password.is_none() && self.session_id.is_none() && self.reset_token.is_none()
    }

    pub fn apply_to(self, user: &mut User) {
        if let Some(hashed_password) = self.hashed_password {
            user.set_hashed_password(hashed_password);
        }
        if let Some(session_id) = self.session_id {
            user.session_id = session_id;
        }
        if let Some(reset_token) = self.reset_token {
            user.reset_token = reset_token;
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user with no session and no pending reset.
    async fn add_user(
        &self,
        email: Email,
        hashed_password: HashedPassword,
    ) -> Result<User, UserStoreError>;
    async fn find_user(&self, filter: UserFilter<'_>) -> Result<Option<User>, UserStoreError>;
    async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<(), UserStoreError>;
}

use std::fmt;

use thiserror::Error;

use super::{
    email::Email,
    hashed_password::HashedPassword,
    token::{ResetToken, SessionToken},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Email must not be empty")]
    InvalidEmail,
}

/// Store-assigned primary key of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered account.
///
/// `id` and `email` never change once the store has created the row. The
/// remaining fields move only through [`UserUpdate`](crate::UserUpdate).
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    hashed_password: HashedPassword,
    pub(crate) session_id: Option<SessionToken>,
    pub(crate) reset_token: Option<ResetToken>,
}

impl User {
    /// A freshly registered user: no open session and no pending reset.
    pub fn new(id: UserId, email: Email, hashed_password: HashedPassword) -> Self {
        Self {
            id,
            email,
            hashed_password,
            session_id: None,
            reset_token: None,
        }
    }

    /// Rebuilds a user from a persisted row.
    pub fn from_parts(
        id: UserId,
        email: Email,
        hashed_password: HashedPassword,
        session_id: Option<SessionToken>,
        reset_token: Option<ResetToken>,
    ) -> Self {
        Self {
            id,
            email,
            hashed_password,
            session_id,
            reset_token,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn hashed_password(&self) -> &HashedPassword {
        &self.hashed_password
    }

    pub fn session_id(&self) -> Option<&SessionToken> {
        self.session_id.as_ref()
    }

    pub fn reset_token(&self) -> Option<&ResetToken> {
        self.reset_token.as_ref()
    }

    pub(crate) fn set_hashed_password(&mut self, hashed_password: HashedPassword) {
        self.hashed_password = hashed_password;
    }
}

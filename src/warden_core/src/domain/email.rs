use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// A user's login name, kept behind [`Secret`] so it stays out of logs.
///
/// Only the empty string is refused; addresses such as `admin@localhost` are
/// valid identifiers here.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(UserError::InvalidEmail);
        }
        Ok(Self(value))
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

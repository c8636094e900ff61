use std::fmt;

use uuid::Uuid;

/// Opaque session identifier stored on the user row while a session is open.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh token from the OS random source.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

/// Single-use token that authorises setting a new password.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ResetToken(String);

impl ResetToken {
    /// Generates a fresh token from the OS random source.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ResetToken {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for ResetToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for ResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResetToken([REDACTED])")
    }
}

use secrecy::Secret;

/// A clear text password supplied by a caller. Any string is accepted,
/// including the empty one.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl From<Secret<String>> for Password {
    fn from(value: Secret<String>) -> Self {
        Self(value)
    }
}

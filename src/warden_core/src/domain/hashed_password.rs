use secrecy::Secret;

/// Encoded output of a [`PasswordHasher`](crate::PasswordHasher): algorithm,
/// parameters, salt and hash in one string. Opaque to everything but the hasher.
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(digest: Secret<String>) -> Self {
        Self(digest)
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

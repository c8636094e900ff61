use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use warden_core::{
    Email, HashedPassword, Password, PasswordHasher, PasswordHasherError, User, UserFilter, UserId,
    UserStore, UserStoreError, UserUpdate,
};

pub fn email(raw: &str) -> Email {
    Email::try_from(Secret::from(raw.to_string())).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::from(Secret::from(raw.to_string()))
}

#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl MockUserStore {
    pub async fn get(&self, id: UserId) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id() == id).cloned()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn add_user(
        &self,
        email: Email,
        hashed_password: HashedPassword,
    ) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email() == &email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let user = User::new(UserId::new(users.len() as i64 + 1), email, hashed_password);
        users.push(user.clone());
        Ok(user)
    }

    async fn find_user(&self, filter: UserFilter<'_>) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| matches_filter(&filter, u)).cloned())
    }

    async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or(UserStoreError::UserNotFound)?;
        if !update.precondition_holds(user) {
            return Err(UserStoreError::UserNotFound);
        }
        update.apply_to(user);
        Ok(())
    }
}

fn matches_filter(filter: &UserFilter<'_>, user: &User) -> bool {
    match filter {
        UserFilter::Email(email) => user.email() == *email,
        UserFilter::SessionId(token) => user.session_id() == Some(*token),
        UserFilter::ResetToken(token) => user.reset_token() == Some(*token),
    }
}

const FAKE_DIGEST_PREFIX: &str = "fake$";

/// Fast stand-in for a real hasher. Digests are the prefixed clear text.
#[derive(Clone, Default)]
pub struct FakeHasher {
    hash_calls: Arc<AtomicUsize>,
}

impl FakeHasher {
    pub fn hash_calls(&self) -> usize {
        self.hash_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHasherError> {
        self.hash_calls.fetch_add(1, Ordering::SeqCst);
        Ok(HashedPassword::new(Secret::from(format!(
            "{FAKE_DIGEST_PREFIX}{}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(
        &self,
        digest: &HashedPassword,
        password: &Password,
    ) -> Result<bool, PasswordHasherError> {
        let stored = digest
            .as_ref()
            .expose_secret()
            .strip_prefix(FAKE_DIGEST_PREFIX)
            .ok_or(PasswordHasherError::InvalidDigest)?;
        Ok(stored == password.as_ref().expose_secret().as_str())
    }
}

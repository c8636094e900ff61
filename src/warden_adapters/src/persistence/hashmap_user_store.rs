use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

use warden_core::{
    Email, HashedPassword, ResetToken, SessionToken, User, UserFilter, UserId, UserStore,
    UserStoreError, UserUpdate,
};

/// In-memory user table. Email, session id and reset token are unique
/// indexes, the same constraints the Postgres schema declares.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<Users>>,
}

#[derive(Default)]
struct Users {
    last_id: i64,
    by_id: HashMap<UserId, User>,
    by_email: HashMap<Email, UserId>,
    by_session_id: HashMap<SessionToken, UserId>,
    by_reset_token: HashMap<ResetToken, UserId>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    #[tracing::instrument(name = "Adding user to HashMap", skip_all)]
    async fn add_user(
        &self,
        email: Email,
        hashed_password: HashedPassword,
    ) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.by_email.contains_key(&email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        users.last_id += 1;
        let id = UserId::new(users.last_id);
        let user = User::new(id, email.clone(), hashed_password);

        users.by_email.insert(email, id);
        users.by_id.insert(id, user.clone());
        Ok(user)
    }

    #[tracing::instrument(name = "Retrieving user from HashMap", skip_all)]
    async fn find_user(&self, filter: UserFilter<'_>) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        let id = match filter {
            UserFilter::Email(email) => users.by_email.get(email),
            UserFilter::SessionId(token) => users.by_session_id.get(token),
            UserFilter::ResetToken(token) => users.by_reset_token.get(token),
        };

        Ok(id.and_then(|id| users.by_id.get(id)).cloned())
    }

    #[tracing::instrument(name = "Updating user in HashMap", skip(self, update))]
    async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<(), UserStoreError> {
        let mut guard = self.users.write().await;
        let users = &mut *guard;
        let user = users
            .by_id
            .get_mut(&id)
            .ok_or(UserStoreError::UserNotFound)?;
        if !update.precondition_holds(user) {
            return Err(UserStoreError::UserNotFound);
        }

        let new_session_id = update.session_id.as_ref();
        let new_reset_token = update.reset_token.as_ref();

        // Check both indexes before touching either, so a rejected update leaves no trace.
        if let Some(Some(token)) = new_session_id {
            ensure_unowned(&users.by_session_id, token, id)?;
        }
        if let Some(Some(token)) = new_reset_token {
            ensure_unowned(&users.by_reset_token, token, id)?;
        }

        if let Some(token) = new_session_id {
            reindex(&mut users.by_session_id, user.session_id(), token.as_ref(), id);
        }
        if let Some(token) = new_reset_token {
            reindex(&mut users.by_reset_token, user.reset_token(), token.as_ref(), id);
        }

        update.apply_to(user);
        Ok(())
    }
}

fn ensure_unowned<T: Eq + Hash>(
    index: &HashMap<T, UserId>,
    token: &T,
    id: UserId,
) -> Result<(), UserStoreError> {
    match index.get(token) {
        Some(owner) if *owner != id => Err(UserStoreError::UnexpectedError(
            "token already assigned to another user".to_string(),
        )),
        _ => Ok(()),
    }
}

fn reindex<T: Eq + Hash + Clone>(
    index: &mut HashMap<T, UserId>,
    old: Option<&T>,
    new: Option<&T>,
    id: UserId,
) {
    if let Some(old) = old {
        index.remove(old);
    }
    if let Some(new) = new {
        index.insert(new.clone(), id);
    }
}

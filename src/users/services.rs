use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, warn};

use super::dto::{EmailItem, NewUser, UsernameItem};
use super::repo_types::User;
use crate::{error::ApiError, storage::UserStore};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

impl NewUser {
    /// Turns a request body into a record, rejecting blank or malformed fields.
    pub fn validate(self) -> Result<User, ApiError> {
        if self.username.trim().is_empty() {
            return Err(ApiError::InvalidUser("username must not be empty".into()));
        }
        if !is_valid_email(&self.email) {
            return Err(ApiError::InvalidUser("Invalid email".into()));
        }
        Ok(User {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            email: self.email,
            extra: Default::default(),
        })
    }
}

pub fn usernames(users: &[User]) -> Vec<UsernameItem> {
    users
        .iter()
        .map(|u| UsernameItem {
            id: u.id,
            username: u.username.clone(),
        })
        .collect()
}

/// First record with exactly this username; later duplicates are never returned.
pub fn find_email(users: &[User], name: &str) -> Option<EmailItem> {
    users.iter().find(|u| u.username == name).map(|u| EmailItem {
        id: u.id,
        email: u.email.clone(),
    })
}

/// The in-memory user list plus the store it is persisted to.
///
/// The list starts out absent and becomes present once [`UserDirectory::load`]
/// succeeds. Appends go through a single writer so each save sees every
/// earlier append.
pub struct UserDirectory {
    store: Arc<dyn UserStore>,
    users: RwLock<Option<Arc<Vec<User>>>>,
    writer: Mutex<()>,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            users: RwLock::new(None),
            writer: Mutex::new(()),
        }
    }

    pub async fn load(&self) -> anyhow::Result<usize> {
        info!("reading users file");
        let users = self.store.load().await?;
        let count = users.len();
        *self.users.write().await = Some(Arc::new(users));
        info!(count, "users loaded");
        Ok(count)
    }

    pub async fn snapshot(&self) -> Option<Arc<Vec<User>>> {
        self.users.read().await.clone()
    }

    /// Appends `user` and writes the whole list back to the store.
    ///
    /// A failed save leaves the append in memory.
    pub async fn add(&self, user: User) -> Result<usize, ApiError> {
        let _writer = self.writer.lock().await;

        let updated = {
            let mut slot = self.users.write().await;
            let list = slot.as_mut().ok_or(ApiError::UsersNotLoaded)?;
            Arc::make_mut(list).push(user);
            Arc::clone(list)
        };

        if let Err(e) = self.store.save(&updated).await {
            error!(error = %e, "failed to write users file");
            warn!(count = updated.len(), "in-memory users ahead of users file");
            return Err(ApiError::SaveFailed);
        }
        info!(count = updated.len(), "user saved");
        Ok(updated.len())
    }
}

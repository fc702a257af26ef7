use std::path::PathBuf;

use anyhow::Context;
use axum::async_trait;
use tracing::debug;

use crate::users::repo_types::User;

/// Backing store for the full user list.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn load(&self) -> anyhow::Result<Vec<User>>;
    /// Overwrites whatever the store holds with `users`.
    async fn save(&self, users: &[User]) -> anyhow::Result<()>;
}

/// A bare JSON array of users in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn load(&self) -> anyhow::Result<Vec<User>> {
        let data = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("read {}", self.path.display()))?;
        let users: Vec<User> = serde_json::from_slice(&data)
            .with_context(|| format!("parse {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = users.len(), "users file parsed");
        Ok(users)
    }

    async fn save(&self, users: &[User]) -> anyhow::Result<()> {
        let body = serde_json::to_vec(users).context("serialize users")?;
        tokio::fs::write(&self.path, body)
            .await
            .with_context(|| format!("write {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = users.len(), "users file written");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Keeps the last saved list in memory.
    pub struct MemoryStore {
        users: Mutex<Vec<User>>,
    }

    impl MemoryStore {
        pub fn new(users: Vec<User>) -> Self {
            Self {
                users: Mutex::new(users),
            }
        }

        pub fn saved(&self) -> Vec<User> {
            self.users.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserStore for MemoryStore {
        async fn load(&self) -> anyhow::Result<Vec<User>> {
            Ok(self.saved())
        }

        async fn save(&self, users: &[User]) -> anyhow::Result<()> {
            *self.users.lock().unwrap() = users.to_vec();
            Ok(())
        }
    }

    /// Loads fine, never saves.
    pub struct FailingStore {
        initial: Vec<User>,
    }

    impl FailingStore {
        pub fn new(initial: Vec<User>) -> Self {
            Self { initial }
        }
    }

    #[async_trait]
    impl UserStore for FailingStore {
        async fn load(&self) -> anyhow::Result<Vec<User>> {
            Ok(self.initial.clone())
        }

        async fn save(&self, _users: &[User]) -> anyhow::Result<()> {
            anyhow::bail!("disk full")
        }
    }
}

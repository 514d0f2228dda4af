// SPDX-License-Identifier: PMPL-1.0-or-later
//! In-memory user store
//!
//! Holds users in insertion order for the lifetime of the process. The
//! sequence sits behind a single lock so concurrent requests cannot reorder
//! appends or observe a half-built list.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{NewUser, User};

/// Cloneable handle to the shared user sequence
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All users in the order they were created
    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// Assign an id to the new user, append it and return it
    pub async fn create(&self, input: NewUser) -> User {
        let user = User::from(input);
        let mut users = self.users.write().await;
        users.push(user.clone());
        debug!(id = %user.id, total = users.len(), "Stored user");
        user
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

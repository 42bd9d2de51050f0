// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process storage for local development and tests.
//!
//! Records are kept in insertion order, so query results are deterministic.

use crate::models::{Exercise, LogQuery, User};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// Shared in-memory collections. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub async fn insert_user(&self, user: &User) {
        self.inner.write().await.users.push(user.clone());
    }

    pub async fn get_user(&self, user_id: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
    }

    pub async fn list_users(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    pub async fn insert_exercise(&self, exercise: &Exercise) {
        self.inner.write().await.exercises.push(exercise.clone());
    }

    pub async fn find_exercises(&self, query: &LogQuery) -> Vec<Exercise> {
        let limit = query.limit.map_or(usize::MAX, |l| l as usize);

        self.inner
            .read()
            .await
            .exercises
            .iter()
            .filter(|e| query.matches(e))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Number of stored (users, exercises).
    pub async fn counts(&self) -> (usize, usize) {
        let inner = self.inner.read().await;
        (inner.users.len(), inner.exercises.len())
    }
}

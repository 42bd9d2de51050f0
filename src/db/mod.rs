//! Database layer.
//!
//! [`Db`] is the single storage handle passed to handlers. It dispatches to
//! Firestore in production, to an in-process store for local development
//! and tests, or to an offline mock that fails every call.

pub mod firestore;
pub mod memory;

pub use self::firestore::FirestoreStore;
pub use memory::MemoryStore;

use crate::config::StoreLocation;
use crate::error::AppError;
use crate::models::{Exercise, LogQuery, User};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const EXERCISES: &str = "exercises";
}

#[derive(Clone)]
enum Backend {
    Firestore(FirestoreStore),
    Memory(MemoryStore),
    Offline,
}

/// Storage handle shared by all requests.
#[derive(Clone)]
pub struct Db {
    backend: Backend,
}

impl Db {
    /// Connect to the configured storage location.
    pub async fn connect(location: &StoreLocation) -> Result<Self, AppError> {
        let backend = match location {
            StoreLocation::Memory => {
                tracing::info!("Using in-memory storage");
                Backend::Memory(MemoryStore::default())
            }
            StoreLocation::Firestore { project_id } => {
                Backend::Firestore(FirestoreStore::new(project_id).await?)
            }
        };
        Ok(Self { backend })
    }

    /// Create an empty in-memory database.
    pub fn new_memory() -> Self {
        Self {
            backend: Backend::Memory(MemoryStore::default()),
        }
    }

    /// Create a mock database for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self {
            backend: Backend::Offline,
        }
    }

    /// Release the storage connection.
    pub async fn close(self) {
        match self.backend {
            Backend::Firestore(store) => {
                drop(store);
                tracing::info!("Firestore connection closed");
            }
            Backend::Memory(store) => {
                let (users, exercises) = store.counts().await;
                tracing::info!(users, exercises, "In-memory storage discarded");
            }
            Backend::Offline => {}
        }
    }

    fn offline() -> AppError {
        AppError::Database("Database not connected (offline mode)".to_string())
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Store a new user.
    pub async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(store) => store.insert_user(user).await,
            Backend::Memory(store) => {
                store.insert_user(user).await;
                Ok(())
            }
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        match &self.backend {
            Backend::Firestore(store) => store.get_user(user_id).await,
            Backend::Memory(store) => Ok(store.get_user(user_id).await),
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// List all users in registration order.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        match &self.backend {
            Backend::Firestore(store) => store.list_users().await,
            Backend::Memory(store) => Ok(store.list_users().await),
            Backend::Offline => Err(Self::offline()),
        }
    }

    // ─── Exercise Operations ─────────────────────────────────────

    /// Store a new exercise.
    pub async fn insert_exercise(&self, exercise: &Exercise) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(store) => store.insert_exercise(exercise).await,
            Backend::Memory(store) => {
                store.insert_exercise(exercise).await;
                Ok(())
            }
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// Find exercises matching a log query, in insertion order, capped at its limit.
    pub async fn find_exercises(&self, query: &LogQuery) -> Result<Vec<Exercise>, AppError> {
        match &self.backend {
            Backend::Firestore(store) => store.find_exercises(query).await,
            Backend::Memory(store) => Ok(store.find_exercises(query).await),
            Backend::Offline => Err(Self::offline()),
        }
    }
}

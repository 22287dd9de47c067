use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use tracing::debug;
use userdir_types::{seed_users, CreateUserInput, IdStrategy, UpdateUserInput, User};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Пользователь с ID {id} не найден")]
    NotFound { id: String },
    #[error("User store lock poisoned")]
    Poisoned,
}

/// Storage seam for the resolver layer. Every call sees the store in a consistent state.
pub trait UserRepository: Send + Sync {
    fn list(&self) -> Result<Vec<User>, StoreError>;

    fn get(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Appends a user with a freshly assigned id and returns it.
    fn insert(&self, input: CreateUserInput) -> Result<User, StoreError>;

    /// Overwrites the supplied fields of an existing user.
    fn update(&self, update: &UpdateUserInput) -> Result<User, StoreError>;

    /// Removes the first user with `id`. `Ok(None)` when there was none.
    fn delete(&self, id: &str) -> Result<Option<User>, StoreError>;
}

struct StoreState {
    users: Vec<User>,
    next_id: u64,
}

pub struct MemoryStore {
    state: Mutex<StoreState>,
    id_strategy: IdStrategy,
}

impl MemoryStore {
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self::with_users(Vec::new(), id_strategy)
    }

    pub fn seeded(id_strategy: IdStrategy) -> Self {
        Self::with_users(seed_users(), id_strategy)
    }

    pub fn with_users(users: Vec<User>, id_strategy: IdStrategy) -> Self {
        let next_id = users.len() as u64 + 1;
        Self {
            state: Mutex::new(StoreState { users, next_id }),
            id_strategy,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, StoreError> {
        self.state.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded(IdStrategy::default())
    }
}

impl StoreState {
    fn assign_id(&mut self, strategy: IdStrategy) -> String {
        match strategy {
            IdStrategy::Length => (self.users.len() + 1).to_string(),
            IdStrategy::Monotonic => {
                let id = self.next_id;
                self.next_id += 1;
                id.to_string()
            }
        }
    }
}

impl UserRepository for MemoryStore {
    fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.lock()?.users.clone())
    }

    fn get(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.lock()?.users.iter().find(|u| u.id == id).cloned())
    }

    fn insert(&self, input: CreateUserInput) -> Result<User, StoreError> {
        let mut state = self.lock()?;
        let id = state.assign_id(self.id_strategy);
        let user = User {
            id,
            name: input.name,
            age: input.age,
            is_married: input.is_married,
        };
        state.users.push(user.clone());
        debug!("Inserted user {} ({} total)", user.id, state.users.len());
        Ok(user)
    }

    fn update(&self, update: &UpdateUserInput) -> Result<User, StoreError> {
        let mut state = self.lock()?;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| StoreError::NotFound {
                id: update.id.clone(),
            })?;
        user.apply(update);
        debug!("Updated user {}", user.id);
        Ok(user.clone())
    }

    fn delete(&self, id: &str) -> Result<Option<User>, StoreError> {
        let mut state = self.lock()?;
        let Some(index) = state.users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };
        let removed = state.users.remove(index);
        debug!("Deleted user {} ({} left)", id, state.users.len());
        Ok(Some(removed))
    }
}

//! In-memory user store

use std::collections::BTreeMap;

use crate::{
    error::{StoreError, StoreResult},
    user::User,
};

/// Keyed collection of user records with monotonic id assignment.
///
/// Ids come from a counter that only ever increases, so an id freed by
/// `delete` is never handed out again. Because of that, ascending-id
/// iteration of the map is exactly insertion order, which keeps `list`
/// deterministic without an ordered-map dependency.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: BTreeMap<u64, User>,
    next_id: u64,
}

impl UserStore {
    /// Create an empty store. The first assigned id is 1.
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a store preloaded with the two demo records.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.create("Alice".to_string(), "alice@example.com".to_string());
        store.create("Bob".to_string(), "bob@example.com".to_string());
        store
    }

    /// All current records in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    /// Look up a single record by id.
    pub fn get(&self, id: u64) -> StoreResult<User> {
        self.users
            .get(&id)
            .cloned()
            .ok_or(StoreError::UserNotFound { id })
    }

    /// Insert a new record under a freshly assigned id and return it.
    ///
    /// Always succeeds; the store performs no duplicate-email check.
    pub fn create(&mut self, name: String, email: String) -> User {
        let id = self.next_id;
        self.next_id += 1;

        let user = User { id, name, email };
        self.users.insert(id, user.clone());
        user
    }

    /// Overwrite both mutable fields of an existing record. The id is
    /// unchanged.
    pub fn replace(&mut self, id: u64, name: String, email: String) -> StoreResult<User> {
        let user = self
            .users
            .get_mut(&id)
            .ok_or(StoreError::UserNotFound { id })?;
        user.name = name;
        user.email = email;
        Ok(user.clone())
    }

    /// Overwrite only the fields that are present, leaving the rest
    /// untouched. `None` means "leave unchanged", not "clear".
    pub fn partial_update(
        &mut self,
        id: u64,
        name: Option<String>,
        email: Option<String>,
    ) -> StoreResult<User> {
        let user = self
            .users
            .get_mut(&id)
            .ok_or(StoreError::UserNotFound { id })?;
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        Ok(user.clone())
    }

    /// Remove and return an existing record. The counter is untouched, so
    /// the id is never reassigned by a later `create`.
    pub fn delete(&mut self, id: u64) -> StoreResult<User> {
        self.users
            .remove(&id)
            .ok_or(StoreError::UserNotFound { id })
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

// In-memory registry of repository records.
//
// The collection is process-local and discarded on shutdown. It is
// owned exclusively by this type; callers only see the five operations,
// so the storage could later be swapped for a real backend without
// touching the HTTP contract.
//
// Lookups are a first-match linear scan on exact id equality. Insertion
// order is preserved and is the order `list` returns.

use std::sync::RwLock;

use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::registry::models::{Repository, RepositoryPayload};

/// The in-memory repository collection
#[derive(Debug, Default)]
pub struct RepositoryRegistry {
    // Handlers never hold this lock across an await point.
    items: RwLock<Vec<Repository>>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the full collection, in insertion order
    pub fn list(&self) -> Vec<Repository> {
        self.items.read().expect("registry lock poisoned").clone()
    }

    /// Append a fresh repository built from the payload
    pub fn insert(&self, payload: RepositoryPayload) -> Repository {
        let repository = Repository::new(payload);
        let mut items = self.items.write().expect("registry lock poisoned");
        items.push(repository.clone());
        repository
    }

    /// Replace `title`, `url` and `techs` of the matching record,
    /// carrying `id` and `likes` forward
    pub fn update(&self, id: Uuid, payload: RepositoryPayload) -> Result<Repository> {
        let mut items = self.items.write().expect("registry lock poisoned");
        let repository = items
            .iter_mut()
            .find(|repo| repo.id == id)
            .ok_or(AppError::RepositoryNotFound)?;

        repository.title = payload.title;
        repository.url = payload.url;
        repository.techs = payload.techs;

        Ok(repository.clone())
    }

    /// Remove the matching record, keeping the relative order of the rest
    pub fn remove(&self, id: Uuid) -> Result<()> {
        let mut items = self.items.write().expect("registry lock poisoned");
        let index = items
            .iter()
            .position(|repo| repo.id == id)
            .ok_or(AppError::RepositoryNotFound)?;

        items.remove(index);
        Ok(())
    }

    /// Increment the like counter of the matching record by exactly 1
    pub fn like(&self, id: Uuid) -> Result<Repository> {
        let mut items = self.items.write().expect("registry lock poisoned");
        let repository = items
            .iter_mut()
            .find(|repo| repo.id == id)
            .ok_or(AppError::RepositoryNotFound)?;

        repository.likes += 1;
        Ok(repository.clone())
    }
}

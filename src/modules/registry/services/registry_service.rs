// Validation and orchestration in front of the registry.
//
// Two stateless gates run before any lookup, in the same order the
// routes declare them: the id gate, then the url gate. A request that
// fails both reports "invalid uuid".

use std::sync::Arc;

use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::registry::models::{Repository, RepositoryPayload};
use crate::modules::registry::repositories::RepositoryRegistry;

const GITHUB_PREFIXES: [&str; 2] = ["http://github.com/", "https://github.com/"];

/// Check the optional `url` field of a payload.
///
/// Only constrains the field when it is supplied and non-empty; an
/// absent or empty url passes unconditionally.
pub fn validate_repository_url(url: Option<&str>) -> Result<()> {
    match url {
        Some(url) if !url.is_empty() => {
            if GITHUB_PREFIXES.iter().any(|prefix| url.starts_with(prefix)) {
                Ok(())
            } else {
                Err(AppError::InvalidRepositoryUrl)
            }
        }
        _ => Ok(()),
    }
}

/// Check that a path parameter is a syntactically valid UUID.
pub fn parse_repository_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::InvalidUuid)
}

/// Service for registry business logic
pub struct RegistryService {
    registry: Arc<RepositoryRegistry>,
}

impl RegistryService {
    pub fn new(registry: Arc<RepositoryRegistry>) -> Self {
        Self { registry }
    }

    /// Full ordered collection; always succeeds
    pub fn list_repositories(&self) -> Vec<Repository> {
        self.registry.list()
    }

    /// Validate the url shape, then append a fresh repository
    pub fn create_repository(&self, payload: RepositoryPayload) -> Result<Repository> {
        validate_repository_url(payload.url.as_deref())?;

        let repository = self.registry.insert(payload);
        tracing::debug!(id = %repository.id, "repository created");
        Ok(repository)
    }

    /// Validate id then url, then replace the payload fields wholesale
    pub fn update_repository(&self, id: &str, payload: RepositoryPayload) -> Result<Repository> {
        let id = parse_repository_id(id)?;
        validate_repository_url(payload.url.as_deref())?;

        self.registry.update(id, payload)
    }

    /// Validate the id, then remove the matching repository
    pub fn delete_repository(&self, id: &str) -> Result<()> {
        let id = parse_repository_id(id)?;

        self.registry.remove(id)?;
        tracing::debug!(%id, "repository deleted");
        Ok(())
    }

    /// Validate the id, then bump the like counter
    pub fn like_repository(&self, id: &str) -> Result<Repository> {
        let id = parse_repository_id(id)?;

        self.registry.like(id)
    }
}

// Registry module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Repository, RepositoryPayload};
pub use repositories::RepositoryRegistry;
pub use services::RegistryService;

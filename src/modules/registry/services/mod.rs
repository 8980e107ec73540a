pub mod registry_service;

pub use registry_service::{parse_repository_id, validate_repository_url, RegistryService};

pub mod repository;

pub use repository::{Repository, RepositoryPayload};

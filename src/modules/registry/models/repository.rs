// Repository record tracked by the registry.
//
// Every field except `id` and `likes` comes straight from the client
// payload. The original API never required `title` or `techs` to be
// present, so they stay optional end to end; absent fields are omitted
// from JSON output rather than serialized as null.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reference to an external code repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Unique id, generated server-side, immutable after creation
    pub id: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Must point at github when present; unchecked when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub techs: Option<Vec<String>>,

    /// Like counter, starts at 0, only ever incremented
    pub likes: u64,
}

impl Repository {
    /// Build a fresh repository from a client payload
    pub fn new(payload: RepositoryPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: payload.title,
            url: payload.url,
            techs: payload.techs,
            likes: 0,
        }
    }
}

/// Client-supplied fields for create and update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryPayload {
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Vec<String>>,
}

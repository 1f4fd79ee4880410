//! Remote file store contract.
//!
//! Calls are blocking here; the async runtime adapter moves them off the
//! UI thread and reports completions as messages.

use serde::{Deserialize, Serialize};

use crate::models::{FileId, ProjectId};

pub type Result<T> = std::result::Result<T, RemoteError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Network or HTTP layer failure.
    Transport(String),
    /// The server answered, but not with success. Local edits are intact.
    Persist(String),
    /// The referenced file or project no longer exists.
    NotFound(String),
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::Transport(msg) => write!(f, "Transport error: {}", msg),
            RemoteError::Persist(msg) => write!(f, "Persist failure: {}", msg),
            RemoteError::NotFound(what) => write!(f, "Not found: {}", what),
        }
    }
}

impl std::error::Error for RemoteError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListing {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub files: Vec<FileListing>,
}

pub trait RemoteStore: Send + Sync {
    fn list_projects(&self) -> Result<Vec<ProjectListing>>;

    fn read_file(&self, file: FileId) -> Result<String>;

    /// Succeeds only when the server explicitly acknowledges the write.
    fn write_file(&self, file: FileId, contents: &str) -> Result<()>;

    fn create_file(&self, project: ProjectId, name: &str) -> Result<()>;

    fn delete_file(&self, file: FileId) -> Result<()>;
}

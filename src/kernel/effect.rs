use crate::kernel::registry::TabId;
use crate::models::{FileId, ProjectId};

/// Identifies one write request; handed back with its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket {
    pub file: FileId,
    pub tab: TabId,
    /// Session version whose text was sent.
    pub version: u64,
    /// Remove the tab once the write is acknowledged.
    pub close_after: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ListProjects,
    ReadFile(FileId),
    WriteFile {
        ticket: SaveTicket,
        contents: String,
    },
    CreateFile {
        project: ProjectId,
        name: String,
    },
    DeleteFile(FileId),
}

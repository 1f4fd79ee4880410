use crate::kernel::effect::SaveTicket;
use crate::kernel::services::ports::{ProjectListing, RemoteError};
use crate::models::{FileId, ProjectId};

/// Completion of one remote call, posted back to the workbench thread.
#[derive(Debug)]
pub enum AppMessage {
    ProjectsListed {
        result: Result<Vec<ProjectListing>, RemoteError>,
    },
    FileRead {
        file: FileId,
        result: Result<String, RemoteError>,
    },
    FileWritten {
        ticket: SaveTicket,
        result: Result<(), RemoteError>,
    },
    FileCreated {
        project: ProjectId,
        name: String,
        result: Result<(), RemoteError>,
    },
    FileDeleted {
        file: FileId,
        result: Result<(), RemoteError>,
    },
}

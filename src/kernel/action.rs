use crate::kernel::effect::SaveTicket;
use crate::kernel::registry::TabId;
use crate::kernel::services::ports::{ProjectListing, RemoteError};
use crate::kernel::session::SessionEdit;
use crate::kernel::state::CloseChoice;
use crate::models::{FileId, ProjectId};

#[derive(Debug, Clone)]
pub enum Action {
    LoadProjects,
    ProjectsLoaded {
        projects: Vec<ProjectListing>,
    },
    ProjectsLoadFailed {
        error: RemoteError,
    },
    ToggleProject(ProjectId),
    OpenFile(FileId),
    ActivateTab(TabId),
    Edit {
        tab: TabId,
        edit: SessionEdit,
    },
    FileLoaded {
        file: FileId,
        text: String,
    },
    FileLoadFailed {
        file: FileId,
        error: RemoteError,
    },
    SaveActive,
    SaveFile(FileId),
    FileSaved {
        ticket: SaveTicket,
        result: Result<(), RemoteError>,
    },
    CloseTab(TabId),
    CloseChoice(CloseChoice),
    RequestDeleteFile(FileId),
    ConfirmDelete(bool),
    DeleteFile(FileId),
    FileDeleted {
        file: FileId,
        result: Result<(), RemoteError>,
    },
    RequestCreateFile(ProjectId),
    SubmitNewFile(String),
    CreateFile {
        project: ProjectId,
        name: String,
    },
    FileCreated {
        project: ProjectId,
        name: String,
        result: Result<(), RemoteError>,
    },
    DismissDialog,
    DismissError,
}

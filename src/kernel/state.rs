use rustc_hash::FxHashSet;

use crate::kernel::registry::{TabId, TabRegistry};
use crate::kernel::services::ports::EditorConfig;
use crate::models::{File, FileId, Project, ProjectId};

/// Answer to the save-on-close dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    Cancel,
    Discard,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    SaveOnClose {
        tab: TabId,
    },
    ConfirmDelete {
        file: FileId,
        name: String,
    },
    NewFile {
        project: ProjectId,
        error: Option<String>,
    },
}

impl Dialog {
    pub fn message(&self) -> String {
        match self {
            Dialog::SaveOnClose { .. } => "Save changes to file?".to_string(),
            Dialog::ConfirmDelete { name, .. } => {
                format!("Are you sure you want to remove the file '{}'?", name)
            }
            Dialog::NewFile { error: Some(error), .. } => format!("New file name ({})", error),
            Dialog::NewFile { error: None, .. } => "New file name".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub dialog: Option<Dialog>,
    pub last_error: Option<String>,
}

/// What the text surface should show: the active tab's session, and whether
/// it accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorView {
    pub tab: Option<TabId>,
    pub read_only: bool,
}

#[derive(Debug)]
pub struct AppState {
    pub config: EditorConfig,
    pub projects: Vec<Project>,
    pub tabs: TabRegistry,
    pub ui: UiState,
    /// Files with a content fetch in flight.
    pub pending_reads: FxHashSet<FileId>,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            projects: Vec::new(),
            tabs: TabRegistry::new(),
            ui: UiState::default(),
            pending_reads: FxHashSet::default(),
        }
    }

    pub fn find_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn find_file(&self, id: FileId) -> Option<&File> {
        find_file(&self.projects, id)
    }

    pub fn find_file_mut(&mut self, id: FileId) -> Option<&mut File> {
        find_file_mut(&mut self.projects, id)
    }

    pub fn editor_view(&self) -> EditorView {
        match self.tabs.active() {
            Some(tab) => EditorView {
                tab: Some(tab.id),
                read_only: tab.session.is_read_only(),
            },
            None => EditorView {
                tab: None,
                read_only: true,
            },
        }
    }
}

pub(crate) fn find_file(projects: &[Project], id: FileId) -> Option<&File> {
    projects.iter().find_map(|p| p.find_file(id))
}

pub(crate) fn find_file_mut(projects: &mut [Project], id: FileId) -> Option<&mut File> {
    projects.iter_mut().find_map(|p| p.find_file_mut(id))
}

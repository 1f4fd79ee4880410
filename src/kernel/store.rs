//! Workspace controller.
//!
//! `Store::dispatch` is the only way state changes. It never performs IO:
//! remote calls come back as [`Effect`]s for the caller to run, and their
//! completions re-enter as [`Action`]s, one at a time.

use super::{Action, AppState, Effect};

mod dialog;
mod listing;
mod persist;
mod tabs;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: true,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::LoadProjects => DispatchResult {
                effects: vec![Effect::ListProjects],
                state_changed: false,
            },
            Action::ProjectsLoaded { projects } => self.reduce_projects_loaded(projects),
            Action::ProjectsLoadFailed { error } => {
                tracing::warn!(error = %error, "project listing unavailable");
                self.state.ui.last_error = Some(format!("Could not list projects: {}", error));
                DispatchResult::changed()
            }
            Action::ToggleProject(id) => match self.state.find_project_mut(id) {
                Some(project) => {
                    project.is_unfolded = !project.is_unfolded;
                    DispatchResult::changed()
                }
                None => DispatchResult::unchanged(),
            },
            Action::OpenFile(file) => self.reduce_open_file(file),
            Action::ActivateTab(tab) => self.reduce_activate_tab(tab),
            Action::Edit { tab, edit } => self.reduce_edit(tab, edit),
            Action::FileLoaded { file, text } => self.reduce_file_loaded(file, text),
            Action::FileLoadFailed { file, error } => self.reduce_file_load_failed(file, error),
            Action::SaveActive => self.reduce_save_active(),
            Action::SaveFile(file) => self.reduce_save_file(file),
            Action::FileSaved { ticket, result } => self.reduce_file_saved(ticket, result),
            Action::CloseTab(tab) => self.reduce_close_tab(tab),
            Action::CloseChoice(choice) => self.reduce_close_choice(choice),
            Action::RequestDeleteFile(file) => self.reduce_request_delete_file(file),
            Action::ConfirmDelete(confirmed) => self.reduce_confirm_delete(confirmed),
            Action::DeleteFile(file) => DispatchResult {
                effects: vec![Effect::DeleteFile(file)],
                state_changed: false,
            },
            Action::FileDeleted { file, result } => self.reduce_file_deleted(file, result),
            Action::RequestCreateFile(project) => self.reduce_request_create_file(project),
            Action::SubmitNewFile(name) => self.reduce_submit_new_file(name),
            Action::CreateFile { project, name } => self.reduce_create_file(project, name),
            Action::FileCreated {
                project,
                name,
                result,
            } => self.reduce_file_created(project, name, result),
            Action::DismissDialog => {
                if self.state.ui.dialog.take().is_some() {
                    DispatchResult::changed()
                } else {
                    DispatchResult::unchanged()
                }
            }
            Action::DismissError => {
                if self.state.ui.last_error.take().is_some() {
                    DispatchResult::changed()
                } else {
                    DispatchResult::unchanged()
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;

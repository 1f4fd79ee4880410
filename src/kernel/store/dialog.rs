use crate::kernel::services::ports::RemoteError;
use crate::kernel::state::Dialog;
use crate::kernel::Effect;
use crate::models::{FileId, ProjectId};

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_request_delete_file(&mut self, file_id: FileId) -> DispatchResult {
        let Some(file) = self.state.find_file(file_id) else {
            return DispatchResult::unchanged();
        };
        self.state.ui.dialog = Some(Dialog::ConfirmDelete {
            file: file_id,
            name: file.name.clone(),
        });
        DispatchResult::changed()
    }

    pub(super) fn reduce_confirm_delete(&mut self, confirmed: bool) -> DispatchResult {
        let file_id = match self.state.ui.dialog {
            Some(Dialog::ConfirmDelete { file, .. }) => file,
            _ => return DispatchResult::unchanged(),
        };
        self.state.ui.dialog = None;
        DispatchResult {
            effects: if confirmed {
                vec![Effect::DeleteFile(file_id)]
            } else {
                Vec::new()
            },
            state_changed: true,
        }
    }

    /// A deleted file's tab is dropped without saving; there is nothing left
    /// to save to. The listing is then refreshed.
    pub(super) fn reduce_file_deleted(
        &mut self,
        file_id: FileId,
        result: Result<(), RemoteError>,
    ) -> DispatchResult {
        if let Err(error) = result {
            tracing::warn!(file = file_id.raw(), error = %error, "delete_file failed");
            self.state.ui.last_error = Some(format!("Could not delete file: {}", error));
            return DispatchResult::changed();
        }

        tracing::info!(file = file_id.raw(), "file deleted");
        let mut result = match self.state.tabs.find_by_file_id(file_id).map(|t| t.id) {
            Some(tab_id) => self.remove_tab(tab_id),
            None => DispatchResult::unchanged(),
        };
        result.effects.push(Effect::ListProjects);
        result
    }

    pub(super) fn reduce_request_create_file(&mut self, project: ProjectId) -> DispatchResult {
        if self.state.find_project(project).is_none() {
            return DispatchResult::unchanged();
        }
        self.state.ui.dialog = Some(Dialog::NewFile {
            project,
            error: None,
        });
        DispatchResult::changed()
    }

    pub(super) fn reduce_submit_new_file(&mut self, name: String) -> DispatchResult {
        let Some(Dialog::NewFile { project, error }) = self.state.ui.dialog.as_mut() else {
            return DispatchResult::unchanged();
        };

        let value = name.trim();
        if value.is_empty() {
            let prev = error.replace("Name required".to_string());
            return DispatchResult {
                effects: Vec::new(),
                state_changed: prev.is_none(),
            };
        }

        let effect = Effect::CreateFile {
            project: *project,
            name: value.to_string(),
        };
        self.state.ui.dialog = None;
        DispatchResult {
            effects: vec![effect],
            state_changed: true,
        }
    }

    pub(super) fn reduce_create_file(&mut self, project: ProjectId, name: String) -> DispatchResult {
        let name = name.trim();
        if name.is_empty() {
            return DispatchResult::unchanged();
        }
        DispatchResult {
            effects: vec![Effect::CreateFile {
                project,
                name: name.to_string(),
            }],
            state_changed: false,
        }
    }

    /// The new file shows up through the listing refresh; it is not opened.
    pub(super) fn reduce_file_created(
        &mut self,
        project: ProjectId,
        name: String,
        result: Result<(), RemoteError>,
    ) -> DispatchResult {
        match result {
            Ok(()) => {
                tracing::info!(project = project.raw(), name = %name, "file created");
                DispatchResult {
                    effects: vec![Effect::ListProjects],
                    state_changed: false,
                }
            }
            Err(error) => {
                tracing::warn!(project = project.raw(), name = %name, error = %error, "create_file failed");
                self.state.ui.last_error = Some(format!("Could not create {}: {}", name, error));
                DispatchResult::changed()
            }
        }
    }
}

use crate::kernel::effect::SaveTicket;
use crate::kernel::services::ports::RemoteError;
use crate::kernel::state::find_file_mut;
use crate::kernel::Effect;
use crate::models::{FileContents, FileId};

use super::DispatchResult;

impl super::Store {
    /// Copy the tab's text into the file cache and, if the session is dirty,
    /// produce the write. A clean session needs no network call. Nothing is
    /// touched while the file's contents are still being fetched.
    pub(super) fn push_file_contents(&mut self, file_id: FileId, close_after: bool) -> Option<Effect> {
        let Some(tab) = self.state.tabs.find_by_file_id(file_id) else {
            tracing::debug!(file = file_id.raw(), "save: no tab bound to file");
            return None;
        };
        if tab.session.is_read_only() {
            tracing::debug!(file = file_id.raw(), "save: contents not loaded yet");
            return None;
        }
        let text = tab.session.text();
        let dirty = tab.session.is_dirty();
        let ticket = SaveTicket {
            file: file_id,
            tab: tab.id,
            version: tab.session.version(),
            close_after,
        };

        match find_file_mut(&mut self.state.projects, file_id) {
            Some(file) if file.is_loaded() => file.contents = FileContents::Loaded(text.clone()),
            _ => {
                tracing::debug!(file = file_id.raw(), "save: file not materialized");
                return None;
            }
        }
        if !dirty {
            return None;
        }

        tracing::debug!(file = file_id.raw(), version = ticket.version, "writing file");
        Some(Effect::WriteFile {
            ticket,
            contents: text,
        })
    }

    pub(super) fn reduce_save_file(&mut self, file_id: FileId) -> DispatchResult {
        DispatchResult {
            effects: self.push_file_contents(file_id, false).into_iter().collect(),
            state_changed: false,
        }
    }

    pub(super) fn reduce_save_active(&mut self) -> DispatchResult {
        let Some(file) = self.state.tabs.active().map(|t| t.file) else {
            return DispatchResult::unchanged();
        };
        match file {
            Some(file_id) => self.reduce_save_file(file_id),
            None => {
                self.state.ui.last_error = Some("Cannot save a detached tab".to_string());
                DispatchResult::changed()
            }
        }
    }

    pub(super) fn reduce_file_saved(
        &mut self,
        ticket: SaveTicket,
        result: Result<(), RemoteError>,
    ) -> DispatchResult {
        let Some(tab) = self.state.tabs.find_by_id_mut(ticket.tab) else {
            tracing::debug!(tab = ticket.tab.raw(), "save completed for a closed tab");
            return DispatchResult::unchanged();
        };

        match result {
            Ok(()) => {
                if tab.session.version() == ticket.version {
                    tab.session.mark_clean();
                    tab.modified = false;
                } else {
                    tracing::debug!(
                        tab = ticket.tab.raw(),
                        saved = ticket.version,
                        current = tab.session.version(),
                        "edited while saving, still dirty"
                    );
                }
                tab.session.detach_dirty_watch();
                tab.session.attach_dirty_watch();

                if ticket.close_after {
                    if !tab.session.is_dirty() {
                        return self.remove_tab(ticket.tab);
                    }
                    self.state.ui.last_error =
                        Some(format!("{} changed while saving; tab kept open", tab.display));
                }
            }
            Err(error) => {
                tracing::warn!(file = ticket.file.raw(), error = %error, "write_file failed");
                tab.session.detach_dirty_watch();
                tab.session.attach_dirty_watch();
                self.state.ui.last_error =
                    Some(format!("Could not save {}: {}", tab.display, error));
            }
        }
        DispatchResult::changed()
    }
}

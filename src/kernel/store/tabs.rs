use crate::kernel::registry::{Tab, TabId};
use crate::kernel::services::ports::RemoteError;
use crate::kernel::session::{Session, SessionEdit};
use crate::kernel::state::{find_file, find_file_mut, CloseChoice, Dialog};
use crate::kernel::Effect;
use crate::models::{FileContents, FileId};

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_open_file(&mut self, file_id: FileId) -> DispatchResult {
        let Some(file) = self.state.find_file(file_id) else {
            tracing::debug!(file = file_id.raw(), "open_file: unknown file");
            return DispatchResult::unchanged();
        };
        let name = file.name.clone();
        let text = file.contents.as_text().map(str::to_owned);

        let mut state_changed = false;
        let tab_id = match self.state.tabs.find_by_file_id(file_id) {
            Some(tab) => tab.id,
            None => {
                state_changed = true;
                self.new_tab_from_file(file_id, name, text)
            }
        };
        state_changed |= self.state.tabs.activate(tab_id);

        DispatchResult {
            effects: self.refresh_editor(),
            state_changed,
        }
    }

    fn new_tab_from_file(&mut self, file_id: FileId, name: String, text: Option<String>) -> TabId {
        let id = self.state.tabs.alloc_tab_id();
        let session_id = self.state.tabs.alloc_session_id();
        let config = &self.state.config;

        let session = match text {
            Some(text) => {
                let mut session = Session::new(session_id, &text, config);
                session.attach_dirty_watch();
                session
            }
            None => {
                let mut session = Session::new(session_id, &config.loading_placeholder, config);
                session.set_read_only(true);
                session
            }
        };

        self.state
            .tabs
            .add(Tab::new(id, session, Some(file_id), Some(name)));
        tracing::debug!(tab = id.raw(), file = file_id.raw(), "tab opened");
        id
    }

    pub(super) fn reduce_activate_tab(&mut self, tab_id: TabId) -> DispatchResult {
        if self.state.tabs.find_by_id(tab_id).is_none() {
            return DispatchResult::unchanged();
        }
        let state_changed = self.state.tabs.activate(tab_id);
        DispatchResult {
            effects: self.refresh_editor(),
            state_changed,
        }
    }

    /// Bring the active tab's session in line with its file: fetch content
    /// that is still missing, or make a loaded session writable and watched.
    pub(super) fn refresh_editor(&mut self) -> Vec<Effect> {
        let projects = &self.state.projects;
        let Some(tab) = self.state.tabs.active_mut() else {
            return Vec::new();
        };
        let Some(file_id) = tab.file else {
            return Vec::new();
        };
        let Some(file) = find_file(projects, file_id) else {
            return Vec::new();
        };

        match &file.contents {
            FileContents::Loaded(text) => {
                if tab.session.is_read_only() {
                    tab.session.set_text(text);
                    tab.session.mark_clean();
                    tab.session.set_read_only(false);
                }
                tab.session.attach_dirty_watch();
                Vec::new()
            }
            FileContents::Unloaded => {
                if self.state.pending_reads.insert(file_id) {
                    tracing::debug!(file = file_id.raw(), "fetching file contents");
                    vec![Effect::ReadFile(file_id)]
                } else {
                    Vec::new()
                }
            }
        }
    }

    pub(super) fn reduce_edit(&mut self, tab_id: TabId, edit: SessionEdit) -> DispatchResult {
        let Some(tab) = self.state.tabs.find_by_id_mut(tab_id) else {
            return DispatchResult::unchanged();
        };
        let before = tab.session.version();
        match tab.session.apply(edit) {
            Ok(outcome) => {
                if outcome.became_dirty {
                    tab.modified = true;
                    tracing::debug!(tab = tab_id.raw(), "session became dirty");
                }
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: outcome.version != before,
                }
            }
            Err(error) => {
                tracing::debug!(tab = tab_id.raw(), error = %error, "edit rejected");
                DispatchResult::unchanged()
            }
        }
    }

    pub(super) fn reduce_file_loaded(&mut self, file_id: FileId, text: String) -> DispatchResult {
        self.state.pending_reads.remove(&file_id);
        let tab_waiting = self
            .state
            .tabs
            .find_by_file_id(file_id)
            .is_some_and(|t| t.session.is_read_only());

        let Some(file) = find_file_mut(&mut self.state.projects, file_id) else {
            tracing::debug!(file = file_id.raw(), "contents arrived for a file no longer listed");
            return DispatchResult::unchanged();
        };
        if file.is_loaded() && !tab_waiting {
            tracing::debug!(file = file_id.raw(), "dropping stale contents");
            return DispatchResult::unchanged();
        }
        file.contents = FileContents::Loaded(text);

        if let Some(tab) = self.state.tabs.find_by_file_id_mut(file_id) {
            if let FileContents::Loaded(text) = &file.contents {
                tab.session.set_text(text);
            }
            tab.session.mark_clean();
            tab.session.set_read_only(false);
            tab.session.detach_dirty_watch();
            tab.session.attach_dirty_watch();
            tab.modified = false;
        }
        DispatchResult::changed()
    }

    pub(super) fn reduce_file_load_failed(
        &mut self,
        file_id: FileId,
        error: RemoteError,
    ) -> DispatchResult {
        self.state.pending_reads.remove(&file_id);
        tracing::warn!(file = file_id.raw(), error = %error, "read_file failed");
        let name = self
            .state
            .find_file(file_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| file_id.to_string());
        self.state.ui.last_error = Some(format!("Could not load {}: {}", name, error));
        DispatchResult::changed()
    }

    pub(super) fn reduce_close_tab(&mut self, tab_id: TabId) -> DispatchResult {
        let Some(tab) = self.state.tabs.find_by_id(tab_id) else {
            return DispatchResult::unchanged();
        };
        if !tab.session.is_dirty() {
            return self.remove_tab(tab_id);
        }
        self.state.ui.dialog = Some(Dialog::SaveOnClose { tab: tab_id });
        DispatchResult::changed()
    }

    pub(super) fn reduce_close_choice(&mut self, choice: CloseChoice) -> DispatchResult {
        let tab_id = match self.state.ui.dialog {
            Some(Dialog::SaveOnClose { tab }) => tab,
            _ => return DispatchResult::unchanged(),
        };
        self.state.ui.dialog = None;
        if self.state.tabs.find_by_id(tab_id).is_none() {
            return DispatchResult::changed();
        }

        match choice {
            CloseChoice::Cancel => DispatchResult::changed(),
            CloseChoice::Discard => self.remove_tab(tab_id),
            CloseChoice::Save => self.save_and_close(tab_id),
        }
    }

    fn save_and_close(&mut self, tab_id: TabId) -> DispatchResult {
        let Some(file_id) = self.state.tabs.find_by_id(tab_id).and_then(|t| t.file) else {
            self.state.ui.last_error = Some("Cannot save a detached tab".to_string());
            return DispatchResult::changed();
        };

        let waits = self.state.config.close_waits_for_save;
        let Some(save) = self.push_file_contents(file_id, waits) else {
            return self.remove_tab(tab_id);
        };
        if waits {
            return DispatchResult {
                effects: vec![save],
                state_changed: true,
            };
        }

        let mut result = self.remove_tab(tab_id);
        result.effects.insert(0, save);
        result
    }

    /// Destroy a tab and its session. The file stays.
    pub(super) fn remove_tab(&mut self, tab_id: TabId) -> DispatchResult {
        if self.state.tabs.remove(tab_id).is_none() {
            return DispatchResult::unchanged();
        }
        if self.state.ui.dialog == Some(Dialog::SaveOnClose { tab: tab_id }) {
            self.state.ui.dialog = None;
        }
        tracing::debug!(tab = tab_id.raw(), "tab removed");
        DispatchResult {
            effects: self.refresh_editor(),
            state_changed: true,
        }
    }
}

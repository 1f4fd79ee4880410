use super::Workbench;
use crate::kernel::services::adapters::AppMessage;
use crate::kernel::{Action, Effect};

impl Workbench {
    /// Reduce one action and start the remote calls it asks for.
    /// Returns whether visible state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        self.in_flight += 1;
        match effect {
            Effect::ListProjects => self.runtime.list_projects(),
            Effect::ReadFile(file) => self.runtime.read_file(file),
            Effect::WriteFile { ticket, contents } => self.runtime.write_file(ticket, contents),
            Effect::CreateFile { project, name } => self.runtime.create_file(project, name),
            Effect::DeleteFile(file) => self.runtime.delete_file(file),
        }
    }

    pub(super) fn handle_message(&mut self, msg: AppMessage) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch(message_to_action(msg))
    }
}

pub(super) fn message_to_action(msg: AppMessage) -> Action {
    match msg {
        AppMessage::ProjectsListed { result } => match result {
            Ok(projects) => Action::ProjectsLoaded { projects },
            Err(error) => Action::ProjectsLoadFailed { error },
        },
        AppMessage::FileRead { file, result } => match result {
            Ok(text) => Action::FileLoaded { file, text },
            Err(error) => Action::FileLoadFailed { file, error },
        },
        AppMessage::FileWritten { ticket, result } => Action::FileSaved { ticket, result },
        AppMessage::FileCreated {
            project,
            name,
            result,
        } => Action::FileCreated {
            project,
            name,
            result,
        },
        AppMessage::FileDeleted { file, result } => Action::FileDeleted { file, result },
    }
}

use super::message::AppMessage;
use crate::kernel::effect::SaveTicket;
use crate::kernel::services::ports::{RemoteError, RemoteStore};
use crate::models::{FileId, ProjectId};
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    store: Arc<dyn RemoteStore>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>, store: Arc<dyn RemoteStore>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, tx, store })
    }

    /// Run one blocking store call on the blocking pool and post its
    /// completion. A panicking call still produces a completion, built by
    /// `on_panic`, so the kernel never waits on a lost request.
    fn run<W, P>(&self, op: &'static str, work: W, on_panic: P)
    where
        W: FnOnce(&dyn RemoteStore) -> AppMessage + Send + 'static,
        P: FnOnce(RemoteError) -> AppMessage + Send + 'static,
    {
        let tx = self.tx.clone();
        let store = Arc::clone(&self.store);
        self.runtime.spawn(async move {
            let result = tokio::task::spawn_blocking(move || work(store.as_ref())).await;
            let message = match result {
                Ok(message) => message,
                Err(e) => {
                    tracing::error!(op, error = %e, "remote call task failed");
                    on_panic(RemoteError::Transport(e.to_string()))
                }
            };
            if tx.send(message).is_err() {
                tracing::debug!(op, "completion dropped, receiver gone");
            }
        });
    }

    pub fn list_projects(&self) {
        self.run(
            "list_projects",
            |store| AppMessage::ProjectsListed {
                result: store.list_projects(),
            },
            |error| AppMessage::ProjectsListed { result: Err(error) },
        );
    }

    pub fn read_file(&self, file: FileId) {
        self.run(
            "read_file",
            move |store| AppMessage::FileRead {
                file,
                result: store.read_file(file),
            },
            move |error| AppMessage::FileRead {
                file,
                result: Err(error),
            },
        );
    }

    pub fn write_file(&self, ticket: SaveTicket, contents: String) {
        self.run(
            "write_file",
            move |store| AppMessage::FileWritten {
                ticket,
                result: store.write_file(ticket.file, &contents),
            },
            move |error| AppMessage::FileWritten {
                ticket,
                result: Err(error),
            },
        );
    }

    pub fn create_file(&self, project: ProjectId, name: String) {
        let name_for_panic = name.clone();
        self.run(
            "create_file",
            move |store| {
                let result = store.create_file(project, &name);
                AppMessage::FileCreated {
                    project,
                    name,
                    result,
                }
            },
            move |error| AppMessage::FileCreated {
                project,
                name: name_for_panic,
                result: Err(error),
            },
        );
    }

    pub fn delete_file(&self, file: FileId) {
        self.run(
            "delete_file",
            move |store| AppMessage::FileDeleted {
                file,
                result: store.delete_file(file),
            },
            move |error| AppMessage::FileDeleted {
                file,
                result: Err(error),
            },
        );
    }
}

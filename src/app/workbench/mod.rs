//! Workbench: owns the kernel store and the async runtime.
//!
//! Effects from a dispatch are handed to the runtime; completions come back
//! as `AppMessage`s and are dispatched one at a time from `tick`.

use crate::kernel::services::adapters::{AppMessage, AsyncRuntime};
use crate::kernel::services::ports::{EditorConfig, RemoteStore};
use crate::kernel::{AppState, Store};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

mod bridge;
mod tick;

const MAX_MESSAGE_DRAIN_PER_TICK: usize = 64;

pub struct Workbench {
    store: Store,
    runtime: AsyncRuntime,
    rx: Receiver<AppMessage>,
    /// Remote calls issued but not yet answered.
    in_flight: usize,
}

impl Workbench {
    pub fn new(config: EditorConfig, remote: Arc<dyn RemoteStore>) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let runtime = AsyncRuntime::new(tx, remote)?;
        Ok(Self {
            store: Store::new(AppState::new(config)),
            runtime,
            rx,
            in_flight: 0,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

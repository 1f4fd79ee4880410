//! Headless workspace core (state/action/effect).

pub mod action;
pub mod effect;
pub mod registry;
pub mod services;
pub mod session;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::{Effect, SaveTicket};
pub use registry::{Tab, TabId, TabRegistry};
pub use session::{
    ChangeOutcome, ListenerId, Session, SessionChange, SessionEdit, SessionError, SessionId,
};
pub use state::{AppState, CloseChoice, Dialog, EditorView, UiState};
pub use store::{DispatchResult, Store};

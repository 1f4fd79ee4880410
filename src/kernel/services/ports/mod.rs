//! Service ports: traits + data contracts.

pub mod config;
pub mod remote;
pub mod settings;

pub use config::EditorConfig;
pub use remote::{FileListing, ProjectListing, RemoteError, RemoteStore, Result as RemoteResult};
pub use settings::{EditorSettings, Settings};

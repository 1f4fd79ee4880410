//! Service adapters: OS/network specific implementations (IO/async).

#[cfg(feature = "http")]
pub mod http;
pub mod paths;
pub mod runtime;
pub mod settings;

#[cfg(feature = "http")]
pub use http::HttpRemoteStore;
pub use paths::{ensure_log_dir, get_log_dir};
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, get_settings_path, load_settings,
    load_settings_from,
};

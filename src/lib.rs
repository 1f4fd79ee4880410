//! ecweb - tab/session engine for a remote-file code editor
//!
//! Modules:
//! - models: projects, files, text buffer
//! - kernel: session, tab registry, workspace store, service ports/adapters
//! - app: workbench and console front end

pub mod app;
pub mod kernel;
pub mod models;

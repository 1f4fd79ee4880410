//! Application layer: workbench plus the console front end.

pub mod console;
pub mod render;
mod workbench;

pub use console::{ConsoleCommand, ConsoleError};
pub use workbench::Workbench;

//! Async runtime adapter: runs remote store calls and sends completions back to the workbench.

mod message;
mod runtime;

pub use message::AppMessage;
pub use runtime::AsyncRuntime;

//! Data model layer

pub mod entity;
pub mod text_buffer;

pub use entity::{File, FileContents, FileId, Project, ProjectId};
pub use text_buffer::{slice_to_cow, TextBuffer};

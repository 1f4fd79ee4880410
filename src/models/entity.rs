//! Workspace entities: projects and the files they own.
//!
//! Plain data. Identity is by id; a file's id is unique across the whole
//! workspace, not just within its project.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(u64);

impl ProjectId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl FileId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cached text of a file. `Unloaded` until some tab materializes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileContents {
    #[default]
    Unloaded,
    Loaded(String),
}

impl FileContents {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Loaded(text) => Some(text.as_str()),
            Self::Unloaded => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct File {
    pub id: FileId,
    pub name: String,
    pub contents: FileContents,
    pub project: ProjectId,
}

impl File {
    pub fn new(
        id: FileId,
        name: impl Into<String>,
        contents: FileContents,
        project: ProjectId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            contents,
            project,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.contents.is_loaded()
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub files: Vec<File>,
    /// Tree expansion state; survives listing refreshes.
    pub is_unfolded: bool,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            files: Vec::new(),
            is_unfolded: false,
        }
    }

    pub fn find_file(&self, id: FileId) -> Option<&File> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn find_file_mut(&mut self, id: FileId) -> Option<&mut File> {
        self.files.iter_mut().find(|f| f.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/entity.rs"]
mod tests;

//! Editing session: one text buffer plus its dirty-state bookkeeping.
//!
//! The controller owns the dirty protocol through the *dirty watch*: it is
//! attached once the buffer content is authoritative (after a load or a
//! save), and the first edit that finds the session clean flips `dirty` and
//! reports `became_dirty` exactly once. Further edits while dirty report
//! nothing until the session is marked clean and the watch re-attached.

use crate::kernel::services::ports::EditorConfig;
use crate::models::TextBuffer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A user edit. Positions are (row, grapheme column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEdit {
    Insert {
        at: (usize, usize),
        text: String,
    },
    Delete {
        from: (usize, usize),
        to: (usize, usize),
    },
    ReplaceAll(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionChange {
    pub session: SessionId,
    pub version: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeOutcome {
    pub became_dirty: bool,
    pub version: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    ReadOnly,
    OutOfBounds,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::ReadOnly => write!(f, "Session is read-only"),
            SessionError::OutOfBounds => write!(f, "Edit position is outside the buffer"),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirtyWatch {
    Detached,
    Attached,
}

type ChangeHandler = Box<dyn FnMut(&SessionChange) + Send>;

pub struct Session {
    id: SessionId,
    buffer: TextBuffer,
    dirty: bool,
    read_only: bool,
    version: u64,
    tab_size: u8,
    language_mode: String,
    watch: DirtyWatch,
    listeners: Vec<(ListenerId, ChangeHandler)>,
    next_listener_id: u64,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("dirty", &self.dirty)
            .field("read_only", &self.read_only)
            .field("version", &self.version)
            .field("watch", &self.watch)
            .field("listeners", &self.listeners.len())
            .field("chars", &self.buffer.len_chars())
            .finish()
    }
}

impl Session {
    pub fn new(id: SessionId, initial_text: &str, config: &EditorConfig) -> Self {
        Self {
            id,
            buffer: TextBuffer::from_text(initial_text),
            dirty: false,
            read_only: false,
            version: 0,
            tab_size: config.tab_size,
            language_mode: config.language_mode.clone(),
            watch: DirtyWatch::Detached,
            listeners: Vec::new(),
            next_listener_id: 1,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn tab_size(&self) -> u8 {
        self.tab_size
    }

    pub fn language_mode(&self) -> &str {
        &self.language_mode
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Edit counter; bumped by every user edit, never by [`set_text`](Self::set_text).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Seed authoritative content. Not a user edit: no dirty flag, no listeners.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn attach_dirty_watch(&mut self) {
        self.watch = DirtyWatch::Attached;
    }

    pub fn detach_dirty_watch(&mut self) {
        self.watch = DirtyWatch::Detached;
    }

    pub fn on_change(&mut self, handler: impl FnMut(&SessionChange) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id = self.next_listener_id.saturating_add(1);
        self.listeners.push((id, Box::new(handler)));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Apply a user edit. Edits that change nothing are accepted silently.
    pub fn apply(&mut self, edit: SessionEdit) -> Result<ChangeOutcome, SessionError> {
        if self.read_only {
            return Err(SessionError::ReadOnly);
        }

        let changed = match edit {
            SessionEdit::Insert { at, text } => {
                if text.is_empty() {
                    self.buffer
                        .checked_pos_to_char(at)
                        .ok_or(SessionError::OutOfBounds)?;
                    false
                } else {
                    self.buffer
                        .insert_str(at, &text)
                        .ok_or(SessionError::OutOfBounds)?;
                    true
                }
            }
            SessionEdit::Delete { from, to } => {
                let deleted = self
                    .buffer
                    .delete_range(from, to)
                    .ok_or(SessionError::OutOfBounds)?;
                !deleted.is_empty()
            }
            SessionEdit::ReplaceAll(text) => {
                if self.buffer.text() == text {
                    false
                } else {
                    self.buffer.set_text(&text);
                    true
                }
            }
        };

        if !changed {
            return Ok(ChangeOutcome {
                became_dirty: false,
                version: self.version,
            });
        }

        self.version = self.version.saturating_add(1);
        let became_dirty = if self.dirty {
            false
        } else {
            self.dirty = true;
            self.watch == DirtyWatch::Attached
        };

        let change = SessionChange {
            session: self.id,
            version: self.version,
        };
        for (_, handler) in self.listeners.iter_mut() {
            handler(&change);
        }

        Ok(ChangeOutcome {
            became_dirty,
            version: self.version,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;

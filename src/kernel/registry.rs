//! Open tabs, in strip order, plus the active pointer.
//!
//! The registry is small; every lookup is a linear scan.

use crate::kernel::session::{Session, SessionId};
use crate::models::FileId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl TabId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
pub struct Tab {
    pub id: TabId,
    pub session: Session,
    pub file: Option<FileId>,
    pub display: String,
    /// Set when the session became dirty; cleared by an acknowledged save.
    pub modified: bool,
}

impl Tab {
    pub fn new(id: TabId, session: Session, file: Option<FileId>, display: Option<String>) -> Self {
        let display = display.unwrap_or_else(|| Self::detached_display(id));
        Self {
            id,
            session,
            file,
            display,
            modified: false,
        }
    }

    pub fn detached_display(id: TabId) -> String {
        format!("<detached tab {}>", id)
    }

    pub fn is_detached(&self) -> bool {
        self.file.is_none()
    }

    /// Detach from a file that no longer exists. The session is kept.
    pub fn detach(&mut self) {
        self.file = None;
        self.display = Self::detached_display(self.id);
    }

    pub fn label(&self) -> String {
        if self.modified {
            format!("{}*", self.display)
        } else {
            self.display.clone()
        }
    }
}

#[derive(Debug)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: Option<TabId>,
    next_tab_id: u64,
    next_session_id: u64,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            next_tab_id: 1,
            next_session_id: 1,
        }
    }

    pub fn alloc_tab_id(&mut self) -> TabId {
        let id = TabId::new(self.next_tab_id);
        self.next_tab_id = self.next_tab_id.saturating_add(1);
        id
    }

    pub fn alloc_session_id(&mut self) -> SessionId {
        let id = SessionId::new(self.next_session_id);
        self.next_session_id = self.next_session_id.saturating_add(1);
        id
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tab> {
        self.tabs.iter_mut()
    }

    pub fn find_by_id(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn find_by_file_id(&self, file: FileId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.file == Some(file))
    }

    pub fn find_by_file_id_mut(&mut self, file: FileId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.file == Some(file))
    }

    pub fn find_by_session(&self, session: SessionId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.session.id() == session)
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Append a tab. A second tab for an already-open file is refused.
    pub fn add(&mut self, tab: Tab) -> bool {
        if let Some(file) = tab.file {
            if self.find_by_file_id(file).is_some() {
                tracing::warn!(file = file.raw(), "refusing duplicate tab for file");
                return false;
            }
        }
        self.tabs.push(tab);
        if self.active.is_none() {
            self.active = self.tabs.last().map(|t| t.id);
        }
        true
    }

    /// Remove by identity. When the active tab goes, the tab that slides into
    /// its slot (or the new last tab) becomes active.
    pub fn remove(&mut self, id: TabId) -> Option<Tab> {
        let index = self.index_of(id)?;
        let tab = self.tabs.remove(index);
        if self.tabs.is_empty() {
            self.active = None;
        } else if self.active == Some(id) {
            let next = index.min(self.tabs.len() - 1);
            self.active = Some(self.tabs[next].id);
        }
        Some(tab)
    }

    pub fn activate(&mut self, id: TabId) -> bool {
        if self.find_by_id(id).is_none() || self.active == Some(id) {
            return false;
        }
        self.active = Some(id);
        true
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn active(&self) -> Option<&Tab> {
        self.active.and_then(|id| self.find_by_id(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut Tab> {
        let id = self.active?;
        self.find_by_id_mut(id)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.and_then(|id| self.index_of(id))
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/registry.rs"]
mod tests;

use rustc_hash::FxHashSet;

use crate::kernel::services::ports::ProjectListing;
use crate::kernel::state::find_file;
use crate::models::{File, FileContents, FileId, Project, ProjectId};

use super::DispatchResult;

impl super::Store {
    /// Rebuild the project/file model from a fresh listing.
    ///
    /// Files start unloaded, except those bound to an open tab: they keep
    /// their cache so the tab's session is not reseeded under the user.
    /// Tabs whose file disappeared are detached.
    pub(super) fn reduce_projects_loaded(&mut self, listing: Vec<ProjectListing>) -> DispatchResult {
        let mut seen = FxHashSet::default();
        let mut projects = Vec::with_capacity(listing.len());

        for entry in listing {
            let id = ProjectId::new(entry.id);
            let mut project = Project::new(id, entry.name);
            if let Some(prev) = self.state.find_project(id) {
                project.is_unfolded = prev.is_unfolded;
            }

            for listed in entry.files {
                let file_id = FileId::new(listed.id);
                if !seen.insert(file_id) {
                    tracing::warn!(file = listed.id, project = entry.id, "duplicate file id in listing");
                    continue;
                }
                let contents = if self.state.tabs.find_by_file_id(file_id).is_some() {
                    find_file(&self.state.projects, file_id)
                        .map(|prev| prev.contents.clone())
                        .unwrap_or_default()
                } else {
                    FileContents::Unloaded
                };
                project.files.push(File::new(file_id, listed.name, contents, id));
            }
            projects.push(project);
        }

        self.state.projects = projects;

        let projects = &self.state.projects;
        for tab in self.state.tabs.iter_mut() {
            let Some(file_id) = tab.file else {
                continue;
            };
            match find_file(projects, file_id) {
                Some(file) => {
                    if tab.display != file.name {
                        tab.display = file.name.clone();
                    }
                }
                None => {
                    tracing::info!(tab = tab.id.raw(), file = file_id.raw(), "file gone, detaching tab");
                    tab.detach();
                }
            }
        }

        tracing::debug!(projects = self.state.projects.len(), "project listing applied");
        DispatchResult::changed()
    }
}

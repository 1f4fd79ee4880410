use super::*;
use crate::kernel::effect::SaveTicket;
use crate::kernel::registry::TabId;
use crate::kernel::services::ports::{EditorConfig, FileListing, ProjectListing, RemoteError};
use crate::kernel::session::SessionEdit;
use crate::kernel::state::{CloseChoice, Dialog};
use crate::models::{FileContents, FileId, ProjectId};

fn project(id: u64, name: &str, files: &[(u64, &str)]) -> ProjectListing {
    ProjectListing {
        id,
        name: name.to_string(),
        files: files
            .iter()
            .map(|(id, name)| FileListing {
                id: *id,
                name: name.to_string(),
            })
            .collect(),
    }
}

fn listing() -> Vec<ProjectListing> {
    vec![
        project(1, "crypto", &[(10, "a.ec"), (11, "b.ec")]),
        project(2, "proofs", &[(20, "c.ec")]),
    ]
}

fn store_with(config: EditorConfig) -> Store {
    let mut store = Store::new(AppState::new(config));
    store.dispatch(Action::ProjectsLoaded {
        projects: listing(),
    });
    store
}

fn new_store() -> Store {
    store_with(EditorConfig::default())
}

fn open_loaded(store: &mut Store, file: u64, text: &str) -> TabId {
    store.dispatch(Action::OpenFile(FileId::new(file)));
    store.dispatch(Action::FileLoaded {
        file: FileId::new(file),
        text: text.to_string(),
    });
    store.state().tabs.active_id().expect("active tab")
}

fn type_text(store: &mut Store, tab: TabId, text: &str) -> DispatchResult {
    store.dispatch(Action::Edit {
        tab,
        edit: SessionEdit::Insert {
            at: (0, 0),
            text: text.to_string(),
        },
    })
}

fn tab(store: &Store, id: TabId) -> &crate::kernel::registry::Tab {
    store.state().tabs.find_by_id(id).expect("tab exists")
}

fn write_ticket(effects: &[Effect]) -> SaveTicket {
    match effects {
        [Effect::WriteFile { ticket, .. }, ..] => *ticket,
        other => panic!("expected a write, got {:?}", other),
    }
}

#[test]
fn load_projects_emits_listing_request() {
    let mut store = Store::new(AppState::new(EditorConfig::default()));
    let result = store.dispatch(Action::LoadProjects);

    assert_eq!(result.effects, vec![Effect::ListProjects]);
    assert!(!result.state_changed);
}

#[test]
fn listing_builds_folded_projects_with_unloaded_files() {
    let store = new_store();
    let state = store.state();

    assert_eq!(state.projects.len(), 2);
    assert!(state.projects.iter().all(|p| !p.is_unfolded));
    let file = state.find_file(FileId::new(11)).expect("file 11");
    assert_eq!(file.name, "b.ec");
    assert_eq!(file.project, ProjectId::new(1));
    assert_eq!(file.contents, FileContents::Unloaded);
}

#[test]
fn toggle_project_flips_fold_and_refresh_keeps_it() {
    let mut store = new_store();
    assert!(store.dispatch(Action::ToggleProject(ProjectId::new(1))).state_changed);
    assert!(store.state().find_project(ProjectId::new(1)).unwrap().is_unfolded);

    store.dispatch(Action::ProjectsLoaded {
        projects: listing(),
    });
    assert!(store.state().find_project(ProjectId::new(1)).unwrap().is_unfolded);
    assert!(!store.state().find_project(ProjectId::new(2)).unwrap().is_unfolded);

    assert!(!store.dispatch(Action::ToggleProject(ProjectId::new(9))).state_changed);
}

#[test]
fn duplicate_file_ids_keep_first_occurrence() {
    let mut store = Store::new(AppState::new(EditorConfig::default()));
    store.dispatch(Action::ProjectsLoaded {
        projects: vec![
            project(1, "one", &[(10, "a.ec")]),
            project(2, "two", &[(10, "dup.ec")]),
        ],
    });

    assert_eq!(store.state().find_file(FileId::new(10)).unwrap().name, "a.ec");
    assert!(store.state().find_project(ProjectId::new(2)).unwrap().files.is_empty());
}

#[test]
fn listing_failure_keeps_model_and_records_error() {
    let mut store = new_store();
    store.dispatch(Action::ProjectsLoadFailed {
        error: RemoteError::Transport("refused".to_string()),
    });

    assert_eq!(store.state().projects.len(), 2);
    let error = store.state().ui.last_error.as_deref().unwrap();
    assert!(error.contains("refused"));
}

#[test]
fn open_unloaded_file_shows_placeholder_and_fetches() {
    let mut store = new_store();
    let result = store.dispatch(Action::OpenFile(FileId::new(10)));

    assert!(result.state_changed);
    assert_eq!(result.effects, vec![Effect::ReadFile(FileId::new(10))]);

    let state = store.state();
    let tab = state.tabs.active().expect("active tab");
    assert_eq!(tab.display, "a.ec");
    assert_eq!(tab.file, Some(FileId::new(10)));
    assert_eq!(tab.session.text(), "<loading>");
    assert!(state.editor_view().read_only);
    assert_eq!(state.editor_view().tab, Some(tab.id));
}

#[test]
fn open_unknown_file_is_noop() {
    let mut store = new_store();
    let result = store.dispatch(Action::OpenFile(FileId::new(99)));

    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
    assert!(store.state().tabs.is_empty());
}

#[test]
fn reopening_a_file_reuses_its_tab_without_refetching() {
    let mut store = new_store();
    store.dispatch(Action::OpenFile(FileId::new(10)));
    let first = store.state().tabs.active_id().unwrap();
    let other = store.dispatch(Action::OpenFile(FileId::new(11)));
    assert_eq!(other.effects, vec![Effect::ReadFile(FileId::new(11))]);

    let again = store.dispatch(Action::OpenFile(FileId::new(10)));

    assert!(again.effects.is_empty());
    assert_eq!(store.state().tabs.len(), 2);
    assert_eq!(store.state().tabs.active_id(), Some(first));
}

#[test]
fn loaded_contents_seed_a_clean_writable_session() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "lemma foo.");

    let tab = tab(&store, id);
    assert_eq!(tab.session.text(), "lemma foo.");
    assert!(!tab.session.is_dirty());
    assert!(!tab.session.is_read_only());
    assert!(!tab.modified);
    assert_eq!(
        store.state().find_file(FileId::new(10)).unwrap().contents,
        FileContents::Loaded("lemma foo.".to_string())
    );
    assert!(!store.state().editor_view().read_only);
}

#[test]
fn contents_arriving_for_an_inactive_tab_still_seed_it() {
    let mut store = new_store();
    store.dispatch(Action::OpenFile(FileId::new(10)));
    let background = store.state().tabs.active_id().unwrap();
    store.dispatch(Action::OpenFile(FileId::new(11)));

    store.dispatch(Action::FileLoaded {
        file: FileId::new(10),
        text: "late".to_string(),
    });

    let tab = tab(&store, background);
    assert_eq!(tab.session.text(), "late");
    assert!(!tab.session.is_read_only());
    assert_ne!(store.state().tabs.active_id(), Some(background));
}

#[test]
fn stale_or_unknown_contents_are_dropped() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "first");

    let unknown = store.dispatch(Action::FileLoaded {
        file: FileId::new(99),
        text: "ghost".to_string(),
    });
    let stale = store.dispatch(Action::FileLoaded {
        file: FileId::new(10),
        text: "second".to_string(),
    });

    assert!(!unknown.state_changed);
    assert!(!stale.state_changed);
    assert_eq!(tab(&store, id).session.text(), "first");
}

#[test]
fn failed_fetch_records_error_and_retries_on_activation() {
    let mut store = new_store();
    store.dispatch(Action::OpenFile(FileId::new(10)));
    let failing = store.state().tabs.active_id().unwrap();
    store.dispatch(Action::OpenFile(FileId::new(11)));

    store.dispatch(Action::FileLoadFailed {
        file: FileId::new(10),
        error: RemoteError::NotFound("file 10".to_string()),
    });
    assert!(store
        .state()
        .ui
        .last_error
        .as_deref()
        .unwrap()
        .contains("a.ec"));
    assert!(tab(&store, failing).session.is_read_only());

    let retry = store.dispatch(Action::ActivateTab(failing));
    assert_eq!(retry.effects, vec![Effect::ReadFile(FileId::new(10))]);
}

#[test]
fn first_edit_sets_the_modification_marker() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");

    assert!(type_text(&mut store, id, "a").state_changed);
    type_text(&mut store, id, "b");

    let tab = tab(&store, id);
    assert!(tab.session.is_dirty());
    assert!(tab.modified);
    assert_eq!(tab.label(), "a.ec*");
    assert_eq!(tab.session.text(), "bax");
}

#[test]
fn edits_to_a_loading_tab_are_rejected() {
    let mut store = new_store();
    store.dispatch(Action::OpenFile(FileId::new(10)));
    let id = store.state().tabs.active_id().unwrap();

    let result = type_text(&mut store, id, "early");

    assert!(!result.state_changed);
    assert_eq!(tab(&store, id).session.text(), "<loading>");
    assert!(!tab(&store, id).modified);
}

#[test]
fn saving_a_clean_tab_issues_nothing() {
    let mut store = new_store();
    open_loaded(&mut store, 10, "x");

    let result = store.dispatch(Action::SaveActive);
    assert!(result.effects.is_empty());
}

#[test]
fn saving_a_dirty_tab_writes_current_text() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");

    let result = store.dispatch(Action::SaveFile(FileId::new(10)));

    let ticket = write_ticket(&result.effects);
    assert_eq!(ticket.file, FileId::new(10));
    assert_eq!(ticket.tab, id);
    assert_eq!(ticket.version, tab(&store, id).session.version());
    assert!(!ticket.close_after);
    assert!(matches!(
        &result.effects[0],
        Effect::WriteFile { contents, .. } if contents == "yx"
    ));
    assert_eq!(
        store.state().find_file(FileId::new(10)).unwrap().contents,
        FileContents::Loaded("yx".to_string())
    );
}

#[test]
fn acknowledged_save_clears_dirty_and_marker() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");
    let ticket = write_ticket(&store.dispatch(Action::SaveActive).effects);

    store.dispatch(Action::FileSaved {
        ticket,
        result: Ok(()),
    });

    let t = tab(&store, id);
    assert!(!t.session.is_dirty());
    assert!(!t.modified);
    assert_eq!(t.label(), "a.ec");

    type_text(&mut store, id, "z");
    assert!(tab(&store, id).modified);
}

#[test]
fn save_acknowledged_for_an_older_version_stays_dirty() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");
    let ticket = write_ticket(&store.dispatch(Action::SaveActive).effects);
    type_text(&mut store, id, "z");

    store.dispatch(Action::FileSaved {
        ticket,
        result: Ok(()),
    });

    let t = tab(&store, id);
    assert!(t.session.is_dirty());
    assert!(t.modified);
}

#[test]
fn failed_save_keeps_dirty_marker_and_records_error() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");
    let ticket = write_ticket(&store.dispatch(Action::SaveActive).effects);

    store.dispatch(Action::FileSaved {
        ticket,
        result: Err(RemoteError::Persist("server said no".to_string())),
    });

    let t = tab(&store, id);
    assert!(t.session.is_dirty());
    assert!(t.modified);
    let error = store.state().ui.last_error.as_deref().unwrap();
    assert!(error.contains("Could not save a.ec"));
}

#[test]
fn save_completion_for_a_closed_tab_is_ignored() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");
    let ticket = write_ticket(&store.dispatch(Action::SaveActive).effects);
    store.dispatch(Action::CloseTab(id));
    store.dispatch(Action::CloseChoice(CloseChoice::Discard));

    let result = store.dispatch(Action::FileSaved {
        ticket,
        result: Ok(()),
    });
    assert!(!result.state_changed);
}

#[test]
fn closing_a_clean_tab_activates_its_neighbor() {
    let mut store = new_store();
    let a = open_loaded(&mut store, 10, "a");
    let b = open_loaded(&mut store, 11, "b");
    let c = open_loaded(&mut store, 20, "c");
    store.dispatch(Action::ActivateTab(b));

    let result = store.dispatch(Action::CloseTab(b));

    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    let ids: Vec<_> = store.state().tabs.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a, c]);
    assert_eq!(store.state().tabs.active_id(), Some(c));
}

#[test]
fn closing_the_last_tab_leaves_an_empty_read_only_editor() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "a");

    store.dispatch(Action::CloseTab(id));

    let view = store.state().editor_view();
    assert_eq!(view.tab, None);
    assert!(view.read_only);
    assert!(store.state().tabs.is_empty());
}

#[test]
fn closing_a_dirty_tab_asks_and_cancel_keeps_it() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");

    store.dispatch(Action::CloseTab(id));
    assert_eq!(store.state().ui.dialog, Some(Dialog::SaveOnClose { tab: id }));

    let result = store.dispatch(Action::CloseChoice(CloseChoice::Cancel));
    assert!(result.effects.is_empty());
    assert_eq!(store.state().ui.dialog, None);
    assert_eq!(store.state().tabs.active_id(), Some(id));
    assert!(tab(&store, id).session.is_dirty());
}

#[test]
fn dismissing_the_close_dialog_behaves_like_cancel() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");
    store.dispatch(Action::CloseTab(id));

    assert!(store.dispatch(Action::DismissDialog).state_changed);
    assert!(store.state().tabs.find_by_id(id).is_some());
    assert!(!store.dispatch(Action::CloseChoice(CloseChoice::Discard)).state_changed);
}

#[test]
fn discard_removes_without_saving() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");
    store.dispatch(Action::CloseTab(id));

    let result = store.dispatch(Action::CloseChoice(CloseChoice::Discard));

    assert!(result.effects.is_empty());
    assert!(store.state().tabs.is_empty());
    assert_eq!(
        store.state().find_file(FileId::new(10)).unwrap().contents,
        FileContents::Loaded("x".to_string())
    );
}

#[test]
fn save_and_close_waits_for_acknowledgement() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");
    store.dispatch(Action::CloseTab(id));

    let result = store.dispatch(Action::CloseChoice(CloseChoice::Save));
    let ticket = write_ticket(&result.effects);
    assert!(ticket.close_after);
    assert!(store.state().tabs.find_by_id(id).is_some());

    store.dispatch(Action::FileSaved {
        ticket,
        result: Ok(()),
    });
    assert!(store.state().tabs.is_empty());
}

#[test]
fn save_and_close_keeps_the_tab_when_the_write_fails() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");
    store.dispatch(Action::CloseTab(id));
    let ticket = write_ticket(&store.dispatch(Action::CloseChoice(CloseChoice::Save)).effects);

    store.dispatch(Action::FileSaved {
        ticket,
        result: Err(RemoteError::Transport("timeout".to_string())),
    });

    let t = tab(&store, id);
    assert!(t.session.is_dirty());
    assert!(t.modified);
    assert!(store.state().ui.last_error.is_some());
}

#[test]
fn save_and_close_without_waiting_removes_immediately() {
    let config = EditorConfig {
        close_waits_for_save: false,
        ..EditorConfig::default()
    };
    let mut store = store_with(config);
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");
    store.dispatch(Action::CloseTab(id));

    let result = store.dispatch(Action::CloseChoice(CloseChoice::Save));

    let ticket = write_ticket(&result.effects);
    assert!(!ticket.close_after);
    assert!(store.state().tabs.is_empty());
}

#[test]
fn refresh_rebinds_renamed_files_and_detaches_vanished_ones() {
    let mut store = new_store();
    let kept = open_loaded(&mut store, 10, "x");
    let gone = open_loaded(&mut store, 11, "y");
    type_text(&mut store, kept, "edit ");

    store.dispatch(Action::ProjectsLoaded {
        projects: vec![
            project(1, "crypto", &[(10, "renamed.ec")]),
            project(2, "proofs", &[(20, "c.ec")]),
        ],
    });

    let k = tab(&store, kept);
    assert_eq!(k.display, "renamed.ec");
    assert_eq!(k.label(), "renamed.ec*");
    assert_eq!(k.session.text(), "edit x");
    assert_eq!(
        store.state().find_file(FileId::new(10)).unwrap().contents,
        FileContents::Loaded("x".to_string())
    );

    let g = tab(&store, gone);
    assert!(g.is_detached());
    assert_eq!(g.display, format!("<detached tab {}>", gone));
    assert_eq!(g.session.text(), "y");
    assert_eq!(
        store.state().find_file(FileId::new(20)).unwrap().contents,
        FileContents::Unloaded
    );
}

#[test]
fn detached_tabs_refuse_to_save() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 11, "y");
    type_text(&mut store, id, "z");
    store.dispatch(Action::ProjectsLoaded {
        projects: vec![project(1, "crypto", &[(10, "a.ec")])],
    });

    let result = store.dispatch(Action::SaveActive);
    assert!(result.effects.is_empty());
    assert_eq!(
        store.state().ui.last_error.as_deref(),
        Some("Cannot save a detached tab")
    );

    store.dispatch(Action::DismissError);
    store.dispatch(Action::CloseTab(id));
    let result = store.dispatch(Action::CloseChoice(CloseChoice::Save));
    assert!(result.effects.is_empty());
    assert!(store.state().tabs.find_by_id(id).is_some());
}

#[test]
fn delete_flow_confirms_then_closes_tab_without_saving() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");
    type_text(&mut store, id, "y");

    store.dispatch(Action::RequestDeleteFile(FileId::new(10)));
    let dialog = store.state().ui.dialog.clone().expect("dialog");
    assert_eq!(
        dialog.message(),
        "Are you sure you want to remove the file 'a.ec'?"
    );

    let confirm = store.dispatch(Action::ConfirmDelete(true));
    assert_eq!(confirm.effects, vec![Effect::DeleteFile(FileId::new(10))]);
    assert_eq!(store.state().ui.dialog, None);

    let deleted = store.dispatch(Action::FileDeleted {
        file: FileId::new(10),
        result: Ok(()),
    });
    assert_eq!(deleted.effects, vec![Effect::ListProjects]);
    assert!(store.state().tabs.find_by_id(id).is_none());
}

#[test]
fn declined_delete_issues_nothing() {
    let mut store = new_store();
    store.dispatch(Action::RequestDeleteFile(FileId::new(11)));

    let result = store.dispatch(Action::ConfirmDelete(false));

    assert!(result.effects.is_empty());
    assert_eq!(store.state().ui.dialog, None);
}

#[test]
fn failed_delete_keeps_the_tab() {
    let mut store = new_store();
    let id = open_loaded(&mut store, 10, "x");

    let result = store.dispatch(Action::FileDeleted {
        file: FileId::new(10),
        result: Err(RemoteError::Transport("reset".to_string())),
    });

    assert!(result.effects.is_empty());
    assert!(store.state().tabs.find_by_id(id).is_some());
    assert!(store.state().ui.last_error.is_some());
}

#[test]
fn create_flow_validates_name_and_does_not_open_the_file() {
    let mut store = new_store();
    store.dispatch(Action::RequestCreateFile(ProjectId::new(1)));
    assert_eq!(
        store.state().ui.dialog,
        Some(Dialog::NewFile {
            project: ProjectId::new(1),
            error: None
        })
    );

    let empty = store.dispatch(Action::SubmitNewFile("   ".to_string()));
    assert!(empty.effects.is_empty());
    assert_eq!(
        store.state().ui.dialog,
        Some(Dialog::NewFile {
            project: ProjectId::new(1),
            error: Some("Name required".to_string())
        })
    );

    let submit = store.dispatch(Action::SubmitNewFile(" new.ec ".to_string()));
    assert_eq!(
        submit.effects,
        vec![Effect::CreateFile {
            project: ProjectId::new(1),
            name: "new.ec".to_string()
        }]
    );
    assert_eq!(store.state().ui.dialog, None);

    let created = store.dispatch(Action::FileCreated {
        project: ProjectId::new(1),
        name: "new.ec".to_string(),
        result: Ok(()),
    });
    assert_eq!(created.effects, vec![Effect::ListProjects]);
    assert!(store.state().tabs.is_empty());
}

#[test]
fn failed_create_records_error() {
    let mut store = new_store();
    let result = store.dispatch(Action::FileCreated {
        project: ProjectId::new(1),
        name: "x.ec".to_string(),
        result: Err(RemoteError::Persist("exists".to_string())),
    });

    assert!(result.effects.is_empty());
    let error = store.state().ui.last_error.as_deref().unwrap();
    assert!(error.contains("x.ec"));
}

#[test]
fn saving_while_loading_leaves_the_fetch_intact() {
    let mut store = new_store();
    store.dispatch(Action::OpenFile(FileId::new(10)));
    let id = store.state().tabs.active_id().unwrap();

    let save = store.dispatch(Action::SaveActive);
    assert!(save.effects.is_empty());
    assert_eq!(
        store.state().find_file(FileId::new(10)).unwrap().contents,
        FileContents::Unloaded
    );

    store.dispatch(Action::FileLoaded {
        file: FileId::new(10),
        text: "real".to_string(),
    });
    let t = tab(&store, id);
    assert_eq!(t.session.text(), "real");
    assert!(!t.session.is_read_only());

    store.dispatch(Action::OpenFile(FileId::new(11)));
    store.dispatch(Action::ActivateTab(id));
    type_text(&mut store, id, "x");
    let result = store.dispatch(Action::SaveActive);
    assert!(matches!(
        &result.effects[..],
        [Effect::WriteFile { contents, .. }] if contents == "xreal"
    ));
}

#[test]
fn contents_reach_a_tab_still_showing_the_placeholder() {
    let mut store = new_store();
    store.dispatch(Action::OpenFile(FileId::new(10)));
    let id = store.state().tabs.active_id().unwrap();
    if let Some(file) = store.state.find_file_mut(FileId::new(10)) {
        file.contents = FileContents::Loaded("cached".to_string());
    }

    let result = store.dispatch(Action::FileLoaded {
        file: FileId::new(10),
        text: "fetched".to_string(),
    });

    assert!(result.state_changed);
    assert_eq!(tab(&store, id).session.text(), "fetched");
    assert!(!tab(&store, id).session.is_read_only());
}

fn assert_registry_invariants(store: &Store, step: &str) {
    let tabs = &store.state().tabs;
    let mut files: Vec<FileId> = tabs.iter().filter_map(|t| t.file).collect();
    let bound = files.len();
    files.sort();
    files.dedup();
    assert_eq!(files.len(), bound, "two tabs share a file after {}", step);
    assert_eq!(
        tabs.active_id().is_none(),
        tabs.is_empty(),
        "active pointer out of sync after {}",
        step
    );
    if let Some(active) = tabs.active_id() {
        assert!(tabs.find_by_id(active).is_some(), "dangling active after {}", step);
    }
}

#[test]
fn registry_invariants_hold_across_a_session() {
    let mut store = new_store();
    assert_registry_invariants(&store, "initial listing");

    let mut steps: Vec<(&str, Action)> = vec![
        ("open a", Action::OpenFile(FileId::new(10))),
        (
            "load a",
            Action::FileLoaded {
                file: FileId::new(10),
                text: "a".to_string(),
            },
        ),
        ("open b", Action::OpenFile(FileId::new(11))),
        ("open a again", Action::OpenFile(FileId::new(10))),
        ("open c", Action::OpenFile(FileId::new(20))),
        ("open b again", Action::OpenFile(FileId::new(11))),
        ("close first", Action::CloseTab(TabId::new(1))),
        ("reopen a", Action::OpenFile(FileId::new(10))),
        (
            "delete c",
            Action::FileDeleted {
                file: FileId::new(20),
                result: Ok(()),
            },
        ),
        (
            "refresh without b",
            Action::ProjectsLoaded {
                projects: vec![project(1, "crypto", &[(10, "a.ec")])],
            },
        ),
        (
            "refresh with b back",
            Action::ProjectsLoaded {
                projects: listing(),
            },
        ),
        ("open b after detach", Action::OpenFile(FileId::new(11))),
    ];

    for (step, action) in steps.drain(..) {
        store.dispatch(action);
        assert_registry_invariants(&store, step);
    }

    let ids: Vec<TabId> = store.state().tabs.iter().map(|t| t.id).collect();
    for id in ids {
        store.dispatch(Action::CloseTab(id));
        store.dispatch(Action::CloseChoice(CloseChoice::Discard));
        assert_registry_invariants(&store, "closing everything");
    }
    assert!(store.state().tabs.is_empty());
}

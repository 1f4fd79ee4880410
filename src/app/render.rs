use std::fmt::Write;

use crate::kernel::AppState;

/// Plain-text snapshot of the workspace: tree, tab strip, editor, dialog.
pub fn render(state: &AppState) -> String {
    let mut out = String::new();
    render_tree(state, &mut out);
    render_tabs(state, &mut out);
    render_editor(state, &mut out);
    render_footer(state, &mut out);
    out
}

pub fn render_tree(state: &AppState, out: &mut String) {
    if state.projects.is_empty() {
        out.push_str("(no projects)\n");
        return;
    }
    for project in &state.projects {
        let marker = if project.is_unfolded { 'v' } else { '>' };
        let _ = writeln!(out, "{} [{}] {}", marker, project.id, project.name);
        if !project.is_unfolded {
            continue;
        }
        for file in &project.files {
            let open = if state.tabs.find_by_file_id(file.id).is_some() {
                " (open)"
            } else {
                ""
            };
            let _ = writeln!(out, "    ({}) {}{}", file.id, file.name, open);
        }
    }
}

/// Tab strip: the active tab is bracketed, modified tabs carry `*`.
pub fn render_tabs(state: &AppState, out: &mut String) {
    let active = state.tabs.active_id();
    let labels = state
        .tabs
        .iter()
        .map(|tab| {
            if Some(tab.id) == active {
                format!("[{}:{}]", tab.id, tab.label())
            } else {
                format!(" {}:{} ", tab.id, tab.label())
            }
        })
        .collect::<Vec<_>>();
    if labels.is_empty() {
        out.push_str("tabs: -\n");
    } else {
        let _ = writeln!(out, "tabs: {}", labels.join(""));
    }
}

pub fn render_editor(state: &AppState, out: &mut String) {
    let view = state.editor_view();
    let Some(tab) = view.tab.and_then(|id| state.tabs.find_by_id(id)) else {
        out.push_str("editor: (empty, read-only)\n");
        return;
    };

    let mode = if view.read_only { "read-only" } else { "writable" };
    let _ = writeln!(
        out,
        "editor: {} ({}, {}, tab size {})",
        tab.display,
        mode,
        tab.session.language_mode(),
        tab.session.tab_size()
    );
    let buffer = tab.session.buffer();
    for row in 0..buffer.len_lines() {
        let line = buffer.line(row).unwrap_or_default();
        let _ = writeln!(out, "{:>4} | {}", row, line.trim_end_matches(['\n', '\r']));
    }
}

fn render_footer(state: &AppState, out: &mut String) {
    if let Some(dialog) = &state.ui.dialog {
        let _ = writeln!(out, "dialog: {}", dialog.message());
    }
    if let Some(error) = &state.ui.last_error {
        let _ = writeln!(out, "error: {}", error);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;

//! Line-oriented command front end.
//!
//! Each input line becomes one kernel [`Action`] or a local command.
//! Resolving "the active tab" needs the current state, so parsing borrows it.

use crate::kernel::{Action, AppState, CloseChoice, SessionEdit, TabId};
use crate::models::{FileId, ProjectId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    Empty,
    Unknown(String),
    Usage(&'static str),
    NoActiveTab,
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::Empty => write!(f, "empty command"),
            ConsoleError::Unknown(cmd) => write!(f, "unknown command '{}' (try 'help')", cmd),
            ConsoleError::Usage(usage) => write!(f, "usage: {}", usage),
            ConsoleError::NoActiveTab => write!(f, "no active tab"),
        }
    }
}

impl std::error::Error for ConsoleError {}

#[derive(Debug, Clone)]
pub enum ConsoleCommand {
    Dispatch(Action),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
ls                         refresh project listing
fold <project>             toggle a project
open <file>                open a file in a tab
tab <tab>                  activate a tab
close [tab]                close a tab (active by default)
type <text>                append text to the active tab (\\n for newline)
insert <row> <col> <text>  insert text at a position
delete <r> <c> <r> <c>     delete a range
save                       save the active tab
choose save|discard|cancel answer the save-on-close dialog
new <project>              create a file in a project
name <text>                submit the new file name
rm <file>                  delete a file
confirm yes|no             answer the delete dialog
dismiss                    close the dialog and clear the error
show                       print the workspace
quit                       exit";

pub fn parse(line: &str, state: &AppState) -> Result<ConsoleCommand, ConsoleError> {
    let line = line.trim();
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim_start()),
        None => (line, ""),
    };

    let action = match cmd {
        "" => return Err(ConsoleError::Empty),
        "show" => return Ok(ConsoleCommand::Show),
        "help" | "?" => return Ok(ConsoleCommand::Help),
        "quit" | "exit" => return Ok(ConsoleCommand::Quit),
        "ls" => Action::LoadProjects,
        "fold" => Action::ToggleProject(ProjectId::new(number(rest, "fold <project>")?)),
        "open" => Action::OpenFile(FileId::new(number(rest, "open <file>")?)),
        "tab" => Action::ActivateTab(TabId::new(number(rest, "tab <tab>")?)),
        "close" => {
            let tab = if rest.is_empty() {
                active_tab(state)?
            } else {
                TabId::new(number(rest, "close [tab]")?)
            };
            Action::CloseTab(tab)
        }
        "type" => {
            let tab = active_tab(state)?;
            let at = state
                .tabs
                .active()
                .map(|t| t.session.buffer().end_pos())
                .unwrap_or((0, 0));
            Action::Edit {
                tab,
                edit: SessionEdit::Insert {
                    at,
                    text: unescape(rest),
                },
            }
        }
        "insert" => {
            const USAGE: &str = "insert <row> <col> <text>";
            let mut parts = rest.splitn(3, char::is_whitespace);
            let row = number(parts.next().unwrap_or(""), USAGE)? as usize;
            let col = number(parts.next().unwrap_or(""), USAGE)? as usize;
            let text = parts.next().unwrap_or("");
            Action::Edit {
                tab: active_tab(state)?,
                edit: SessionEdit::Insert {
                    at: (row, col),
                    text: unescape(text),
                },
            }
        }
        "delete" => {
            const USAGE: &str = "delete <row> <col> <row> <col>";
            let nums = rest
                .split_whitespace()
                .map(|s| number(s, USAGE).map(|n| n as usize))
                .collect::<Result<Vec<_>, _>>()?;
            let [r0, c0, r1, c1] = nums[..] else {
                return Err(ConsoleError::Usage(USAGE));
            };
            Action::Edit {
                tab: active_tab(state)?,
                edit: SessionEdit::Delete {
                    from: (r0, c0),
                    to: (r1, c1),
                },
            }
        }
        "save" => Action::SaveActive,
        "choose" => match rest {
            "save" | "yes" => Action::CloseChoice(CloseChoice::Save),
            "discard" | "no" => Action::CloseChoice(CloseChoice::Discard),
            "cancel" => Action::CloseChoice(CloseChoice::Cancel),
            _ => return Err(ConsoleError::Usage("choose save|discard|cancel")),
        },
        "new" => Action::RequestCreateFile(ProjectId::new(number(rest, "new <project>")?)),
        "name" => Action::SubmitNewFile(rest.to_string()),
        "rm" => Action::RequestDeleteFile(FileId::new(number(rest, "rm <file>")?)),
        "confirm" => match rest {
            "yes" | "y" => Action::ConfirmDelete(true),
            "no" | "n" => Action::ConfirmDelete(false),
            _ => return Err(ConsoleError::Usage("confirm yes|no")),
        },
        "dismiss" => {
            if state.ui.dialog.is_some() {
                Action::DismissDialog
            } else {
                Action::DismissError
            }
        }
        other => return Err(ConsoleError::Unknown(other.to_string())),
    };
    Ok(ConsoleCommand::Dispatch(action))
}

fn number(arg: &str, usage: &'static str) -> Result<u64, ConsoleError> {
    arg.trim().parse().map_err(|_| ConsoleError::Usage(usage))
}

fn active_tab(state: &AppState) -> Result<TabId, ConsoleError> {
    state.tabs.active_id().ok_or(ConsoleError::NoActiveTab)
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/app/console.rs"]
mod tests;

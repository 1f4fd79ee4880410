use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use ecweb::app::{console, render, ConsoleCommand, ConsoleError, Workbench};
use ecweb::kernel::services::adapters::{self, HttpRemoteStore};
use ecweb::kernel::services::ports::Settings;
use ecweb::kernel::Action;

mod logging;

const INPUT_POLL: Duration = Duration::from_millis(50);

fn main() -> io::Result<()> {
    let logging = logging::init();

    if let Err(e) = adapters::ensure_settings_file() {
        tracing::warn!(error = %e, "could not create settings file");
    }
    let mut settings = adapters::load_settings().unwrap_or_default();
    if let Some(base_url) = std::env::args().nth(1) {
        settings.base_url = base_url;
    }
    tracing::info!(base_url = %settings.base_url, "starting");

    let remote = HttpRemoteStore::new(
        &settings.base_url,
        Duration::from_millis(settings.request_timeout_ms),
    );
    let mut workbench = Workbench::new(settings.editor_config(), Arc::new(remote))?;

    let mut stdout = io::stdout();
    writeln!(stdout, "ecweb: {} (type 'help')", settings_summary(&settings))?;
    if let Some(guard) = &logging {
        writeln!(stdout, "logs: {}", guard.log_dir().display())?;
    }
    workbench.dispatch(Action::LoadProjects);

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    loop {
        if workbench.tick() {
            write!(stdout, "{}", render::render(workbench.state()))?;
            stdout.flush()?;
        }

        let line = match line_rx.recv_timeout(INPUT_POLL) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        match console::parse(&line, workbench.state()) {
            Ok(ConsoleCommand::Quit) => break,
            Ok(ConsoleCommand::Help) => writeln!(stdout, "{}", console::HELP)?,
            Ok(ConsoleCommand::Show) => write!(stdout, "{}", render::render(workbench.state()))?,
            Ok(ConsoleCommand::Dispatch(action)) => {
                if workbench.dispatch(action) {
                    write!(stdout, "{}", render::render(workbench.state()))?;
                }
            }
            Err(ConsoleError::Empty) => {}
            Err(e) => writeln!(stdout, "{}", e)?,
        }
        stdout.flush()?;
    }

    if workbench.in_flight() > 0 {
        workbench.settle(Duration::from_millis(settings.request_timeout_ms));
    }
    tracing::info!("exiting");
    Ok(())
}

fn settings_summary(settings: &Settings) -> String {
    format!(
        "{} (tab size {}, save-on-close {})",
        settings.base_url,
        settings.editor.tab_size,
        if settings.editor.close_waits_for_save {
            "waits"
        } else {
            "fire-and-forget"
        }
    )
}

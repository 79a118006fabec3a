//! Interactive terminal session for taskctl.
//!
//! # Responsibility
//! - Wire logging, the task store, and the menu loop together.
//! - Keep exit behavior in one place: closed stdin ends the session
//!   quietly, any other I/O failure is reported on stderr.

mod input;
mod menu;
mod render;

use log::{info, warn};
use std::io;
use std::process::ExitCode;
use taskctl_core::TaskStore;

const TASKS_FILE: &str = "tasks.json";
const LOG_SUBDIR: &str = ".taskctl/logs";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            info!("event=session_end module=cli status=ok note=stdin_closed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("taskctl: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> io::Result<()> {
    init_session_logging();

    let mut store = TaskStore::new(TASKS_FILE);
    if let Err(err) = store.load() {
        warn!("event=session_load module=cli status=error error={err}");
        println!("Warning: could not load saved tasks: {err}");
        println!("Starting with an empty task list; saving will overwrite the file.");
        render::pause()?;
    }

    menu::run_session(&mut store)
}

/// Best-effort logging setup; the session stays usable without it.
fn init_session_logging() {
    let log_dir = match std::env::current_dir() {
        Ok(cwd) => cwd.join(LOG_SUBDIR),
        Err(err) => {
            eprintln!("taskctl: logging disabled: {err}");
            return;
        }
    };
    if let Err(err) = taskctl_core::init_logging(
        taskctl_core::default_log_level(),
        &log_dir.to_string_lossy(),
    ) {
        eprintln!("taskctl: logging disabled: {err}");
    }
}

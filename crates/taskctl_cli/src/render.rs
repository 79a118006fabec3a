//! Screen and table output for the interactive session.
//!
//! # Responsibility
//! - Own the logo banner, screen clearing, pauses, and the fixed-width
//!   task table.
//! - Keep column layout and status coloring identical between the list
//!   view and the single-record view.

use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use taskctl_core::{core_version, Priority, Task};

const LOGO: &str = r"
████████╗ █████╗ ███████╗██╗  ██╗ ██████╗████████╗██╗
╚══██╔══╝██╔══██╗██╔════╝██║ ██╔╝██╔════╝╚══██╔══╝██║
   ██║   ███████║███████╗█████╔╝ ██║        ██║   ██║
   ██║   ██╔══██║╚════██║██╔═██╗ ██║        ██║   ██║
   ██║   ██║  ██║███████║██║  ██╗╚██████╗   ██║   ███████╗
   ╚═╝   ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝ ╚═════╝   ╚═╝   ╚══════╝";

const TABLE_RULE: &str = "-----+----------------------+----------+----------+------------";

/// Clears the screen and prints the logo header.
pub fn banner() -> io::Result<()> {
    clear_screen()?;
    println!("{LOGO}");
    println!(
        "      A simple CLI Task Management Tool (taskctl v{})",
        core_version()
    );
    println!();
    Ok(())
}

/// Clears the whole screen and homes the cursor.
pub fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

/// Blocks until Enter, then clears the screen.
///
/// # Errors
/// - `ErrorKind::UnexpectedEof` when stdin is closed.
pub fn pause() -> io::Result<()> {
    print!("\nPress Enter to continue...");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    clear_screen()
}

/// Prints the task table; row numbers are view positions.
pub fn table(tasks: &[&Task]) {
    header();
    for (position, task) in tasks.iter().enumerate() {
        row(position, task);
    }
}

/// Prints one record addressed by its store index, using the table layout.
pub fn single(index: usize, task: &Task) {
    header();
    row(index, task);
}

fn header() {
    println!(
        "\n{:<4} | {:<20} | {:<8} | {:<8} | {:<10}",
        "ID", "Name", "Status", "Priority", "Due Date"
    );
    println!("{TABLE_RULE}");
}

fn row(position: usize, task: &Task) {
    // Pad before styling so the color codes do not widen the column.
    let status = format!("{:<8}", status_label(task.done));
    let status = if task.done {
        status.green()
    } else {
        status.red()
    };
    println!(
        "{:<4} | {:<20} | {} | {:<8} | {:<10}",
        position,
        task.name,
        status,
        priority_label(task.priority),
        due_label(&task.due_date)
    );
}

fn status_label(done: bool) -> &'static str {
    if done {
        "Done"
    } else {
        "Not Done"
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}

fn due_label(due_date: &str) -> &str {
    if due_date.is_empty() {
        "(none)"
    } else {
        due_date
    }
}

//! Line-oriented prompts with re-prompt-until-valid loops.
//!
//! # Responsibility
//! - Read one trimmed line per prompt from stdin.
//! - Keep every validation rule a pure core call; the loops here only
//!   decide whether to ask again.
//!
//! # Invariants
//! - Returned values already satisfy the store's input contracts.
//! - Closed stdin surfaces as `ErrorKind::UnexpectedEof`, never as a spin.

use std::io::{self, Write};
use taskctl_core::{is_valid_due_date, Priority};

/// Prints `label` and reads one trimmed line.
///
/// # Errors
/// - `ErrorKind::UnexpectedEof` when stdin is closed.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

/// Shows `items` as a numbered list under `label` and returns the chosen
/// zero-based position.
pub fn select(label: &str, items: &[&str]) -> io::Result<usize> {
    println!("{label}");
    for (position, item) in items.iter().enumerate() {
        println!("  {}) {item}", position + 1);
    }

    loop {
        let answer = prompt(&format!("Select an option (1-{}): ", items.len()))?;
        match answer.parse::<usize>() {
            Ok(choice) if (1..=items.len()).contains(&choice) => return Ok(choice - 1),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Asks until a non-empty task name is given.
pub fn read_task_name() -> io::Result<String> {
    loop {
        let name = prompt("Enter the task name: ")?;
        if !name.is_empty() {
            return Ok(name);
        }
        println!("Task name cannot be empty. Please try again.");
    }
}

/// Asks until one of low/medium/high is given, in any casing.
pub fn read_priority() -> io::Result<Priority> {
    loop {
        let answer = prompt("Enter the task priority (low, medium, high): ")?;
        match Priority::parse(&answer) {
            Some(priority) => return Ok(priority),
            None => println!("Invalid priority. Please try again."),
        }
    }
}

/// Asks until a `YYYY-MM-DD` due date is given; plain Enter skips.
pub fn read_due_date() -> io::Result<String> {
    loop {
        let answer = prompt("Enter the task due date (YYYY-MM-DD), or press Enter to skip: ")?;
        if is_valid_due_date(&answer) {
            return Ok(answer);
        }
        println!("Invalid date format. Please try again.");
    }
}

/// Asks until a store index in `0..len` is given.
///
/// Returns `Ok(None)` without prompting when the store is empty.
pub fn read_index(len: usize) -> io::Result<Option<usize>> {
    if len == 0 {
        println!("No tasks found.");
        return Ok(None);
    }

    loop {
        let answer = prompt(&format!("Enter the task index (0-{}): ", len - 1))?;
        match answer.parse::<usize>() {
            Ok(index) if index < len => return Ok(Some(index)),
            _ => println!("Invalid task index. Please try again."),
        }
    }
}

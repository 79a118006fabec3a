//! Task record and priority scale.
//!
//! # Responsibility
//! - Define the canonical record shape shared by the store and the views.
//! - Keep the `name`/`done`/`priority`/`dueDate` wire contract in one place.
//! - Provide pure due-date validation for re-prompting input loops.
//!
//! # Invariants
//! - `priority` is a closed enumeration; decoding any other wire value fails.
//! - `done` starts `false` and is only flipped by the store's toggle.
//! - `due_date` is `""` (no due date) or boundary-validated `YYYY-MM-DD`
//!   text; loaded files may carry unparsable text, which readers tolerate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Due-date layout accepted from input and stored in the backing file.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Closed urgency scale for one task.
///
/// The wire encoding is the lowercase variant name, so an out-of-enumeration
/// value in the backing file surfaces as a decode failure instead of
/// arbitrary text reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parses user input case-insensitively into a priority.
    ///
    /// This is the pure validator behind the priority re-prompt loop:
    /// `None` means "ask again", never "store something else".
    pub fn parse(value: &str) -> Option<Priority> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Sort weight for priority views: high first (1), low last (3).
    pub fn weight(self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{value}")
    }
}

/// One tracked to-do item.
///
/// Records have no identity field: a task is addressed by its current
/// zero-based position in the store's sequence, which shifts on deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Display name, stripped of surrounding whitespace at creation.
    pub name: String,
    /// Completion flag; only the store's toggle operation flips it.
    pub done: bool,
    /// Urgency; immutable after creation (there is no edit operation).
    pub priority: Priority,
    /// `YYYY-MM-DD` text, or `""` for no due date. Wire name `dueDate`.
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

impl Task {
    /// Creates a not-yet-done task.
    ///
    /// # Contract
    /// - `due_date` has already passed boundary validation (`""` or a real
    ///   `YYYY-MM-DD` date); the store never re-validates it.
    /// - `name` is stripped of surrounding whitespace here.
    pub fn new(name: impl Into<String>, priority: Priority, due_date: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: name.trim().to_string(),
            done: false,
            priority,
            due_date: due_date.into(),
        }
    }

    /// Parsed calendar date, `None` when absent or unparsable.
    pub fn due(&self) -> Option<NaiveDate> {
        parse_due_date(&self.due_date)
    }
}

/// Returns whether `value` is acceptable due-date input: empty (skip) or a
/// real calendar date written exactly as `YYYY-MM-DD`.
///
/// Acceptance is canonical: the parsed date must format back to the
/// ten-character input unchanged, so shapes the parser tolerates
/// (`2025-1-1`, two-digit or signed years) are rejected here.
///
/// This is the pure validator behind the due-date re-prompt loop; the store
/// itself only ever receives values this function accepted.
pub fn is_valid_due_date(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    match parse_due_date(value) {
        Some(date) => value.len() == 10 && date.format(DUE_DATE_FORMAT).to_string() == value,
        None => false,
    }
}

/// Parses `YYYY-MM-DD` text into a calendar date.
///
/// Returns `None` for empty or unparsable input, including syntactically
/// shaped but impossible dates such as `2025-02-30`. Digit-count lenience
/// is kept so dates in hand-edited files still parse and sort; strict
/// input acceptance lives in `is_valid_due_date`.
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DUE_DATE_FORMAT).ok()
}

//! Stable sort projections over the task sequence.
//!
//! # Responsibility
//! - Produce the four selectable list orderings as borrowed projections.
//! - Keep comparator semantics (priority weights, trailing undated block)
//!   out of the rendering layer.
//!
//! # Invariants
//! - All sorts are stable: equal keys keep their insertion order.
//! - Records without a parsable due date sort after every dated record and
//!   keep their own relative order.
//! - Output positions are view positions, not store indices.

use crate::model::task::Task;
use chrono::NaiveDate;

/// Selectable orderings for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOrdering {
    /// Unchanged insertion order.
    Insertion,
    /// High before medium before low.
    Priority,
    /// Open tasks before completed ones.
    Status,
    /// Earliest due date first; undated or unparsable records trail.
    DueDate,
}

/// Returns a display-only projection of `tasks` under `ordering`.
///
/// The projection borrows the same records; it carries no positional
/// identity, so index-addressed operations must keep using insertion order.
pub fn ordered(tasks: &[Task], ordering: TaskOrdering) -> Vec<&Task> {
    let mut view: Vec<&Task> = tasks.iter().collect();
    match ordering {
        TaskOrdering::Insertion => {}
        TaskOrdering::Priority => view.sort_by_key(|task| task.priority.weight()),
        TaskOrdering::Status => view.sort_by_key(|task| task.done),
        TaskOrdering::DueDate => view.sort_by_cached_key(|task| due_date_key(task)),
    }
    view
}

/// Sort key placing valid dates ascending and invalid or absent dates in a
/// trailing block of equal keys.
fn due_date_key(task: &Task) -> (bool, NaiveDate) {
    match task.due() {
        Some(date) => (false, date),
        None => (true, NaiveDate::MAX),
    }
}

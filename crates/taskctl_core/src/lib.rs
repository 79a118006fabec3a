//! Core domain logic for taskctl.
//! This crate is the single source of truth for task invariants.

pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging};
pub use model::task::{is_valid_due_date, parse_due_date, Priority, Task};
pub use store::task_store::{StoreError, StoreResult, TaskStore};
pub use view::order::{ordered, TaskOrdering};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the task record persisted to the backing file.
//! - Provide the pure validators used at the interaction boundary.
//!
//! # Invariants
//! - A record can only ever hold one of the three enumerated priorities.
//! - Due dates are stored as text; readers parse them tolerantly, input
//!   boundaries validate them strictly.

pub mod task;

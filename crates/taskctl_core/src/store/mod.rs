//! Task persistence and mutation ownership.
//!
//! # Responsibility
//! - Own the ordered task sequence and its single backing file.
//! - Keep every mutation and every file access behind one owner.
//!
//! # Invariants
//! - Each mutating operation rewrites the entire backing file exactly once.
//! - Read-only operations never touch the backing file.
//! - Out-of-range indices leave both memory and file untouched.

pub mod task_store;

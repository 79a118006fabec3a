//! Read-only display orderings.
//!
//! # Responsibility
//! - Project the stored sequence into stable orderings for list rendering.
//!
//! # Invariants
//! - Projections never mutate the input sequence and never perform I/O.
//! - Equal-key records keep their relative insertion order.

pub mod order;

//! Domain records captured by the fuel log.
//!
//! # Invariants
//! - Entries are create-only; nothing mutates them after construction.
//! - Collections keep insertion order, which is also display order.

pub mod entry;

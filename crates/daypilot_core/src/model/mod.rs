//! Domain model for tasks and plan suggestions.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every persisted task is identified by a unique `TaskId`.
//! - Suggestions carry no identity until they are accepted.

pub mod suggestion;
pub mod task;

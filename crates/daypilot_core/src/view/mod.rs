//! View derivation from task state.
//!
//! # Responsibility
//! - Filter and order tasks for display.
//! - Build UI-agnostic view models that hosts render as they see fit.

pub mod model;
pub mod ordering;

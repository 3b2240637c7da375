//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value slot contract the task store persists through.
//! - Isolate SQLite query details from service orchestration.

pub mod kv_repo;

//! Flutter-facing binding crate for DayPilot core.

pub mod api;

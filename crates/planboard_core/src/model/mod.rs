//! Domain model for tracked projects.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one record shape shared by the active/finished board views.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Records are immutable after creation; there is no update path.

pub mod project;

//! Core domain logic for Planboard.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use service::intake::{ProjectDraft, ProjectIntake, ValidationFailure};
pub use store::{ProjectListener, ProjectStore, SharedProjectStore};
pub use validate::{validate, FieldConstraint, FieldValue};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical record held by the project store.
//! - Provide constructors that establish identity and default status.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - A project is immutable once constructed; edits and deletes do not
//!   exist in this domain.
//! - Field-level validation happens before construction, at the intake
//!   boundary; the model does not re-check its inputs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every tracked project.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Board placement for a project.
///
/// Every project starts on the active board; the finished board exists so
/// render collaborators can partition one shared sequence without the store
/// keeping two lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Visible on the active board.
    Active,
    /// Visible on the finished board.
    Finished,
}

/// Canonical record for one tracked project.
///
/// `man_days` stays a float because the inbound form value is free text
/// converted to a number, which admits fractional estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID used for keying render output and auditing.
    pub id: ProjectId,
    /// Short human-readable name. Non-empty by intake contract.
    pub title: String,
    /// Free-form summary. At least five characters by intake contract.
    pub description: String,
    /// Effort estimate in man-days, within [1, 1000] by intake contract.
    pub man_days: f64,
    /// Board placement; `Active` for every freshly created project.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated stable ID.
    ///
    /// # Invariants
    /// - `status` starts as `ProjectStatus::Active`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        man_days: f64,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, man_days)
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by tests and future import paths where identity already exists
    /// externally.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this project lifetime.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        man_days: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            man_days,
            status: ProjectStatus::Active,
        }
    }

    /// Returns whether this project belongs on the active board.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

//! Submission intake service.
//!
//! # Responsibility
//! - Turn raw form field values into validated store entries.
//! - Enforce the reference field constraints in one place.
//!
//! # Invariants
//! - A draft is either fully accepted (all three fields valid, one project
//!   appended) or fully rejected before the store is touched; there is no
//!   partial application.
//! - Rejection carries no per-field detail; the reference surfaces one
//!   generic failure for the whole submission.

use crate::model::project::ProjectId;
use crate::store::SharedProjectStore;
use crate::validate::{validate, FieldConstraint};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

const MIN_DESCRIPTION_CHARS: usize = 5;
const MIN_MAN_DAYS: f64 = 1.0;
const MAX_MAN_DAYS: f64 = 1000.0;

/// Raw field values gathered by a presentation-layer handler.
///
/// All three fields arrive as text; `man_days` is converted to a number
/// during submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub man_days: String,
}

/// The sole intake error: some field constraint failed.
///
/// Deliberately generic; which field failed is not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationFailure;

impl Display for ValidationFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid project input, please try again")
    }
}

impl Error for ValidationFailure {}

/// Use-case service turning drafts into stored projects.
pub struct ProjectIntake {
    store: SharedProjectStore,
}

impl ProjectIntake {
    /// Creates an intake bound to the given store handle.
    pub fn new(store: SharedProjectStore) -> Self {
        Self { store }
    }

    /// Returns a clone of the underlying store handle.
    pub fn store(&self) -> SharedProjectStore {
        self.store.clone()
    }

    /// Validates a draft and, on success, appends it to the store.
    ///
    /// # Contract
    /// - Title: required.
    /// - Description: required, at least five trimmed characters.
    /// - Man-days: required as text, must convert to a number within
    ///   [1, 1000] inclusive.
    /// - On any failure the store is left untouched.
    ///
    /// # Errors
    /// - Returns `ValidationFailure` when any constraint fails, including
    ///   a man-days value that does not parse as a number.
    pub fn submit(&self, draft: &ProjectDraft) -> Result<ProjectId, ValidationFailure> {
        let man_days = match draft.man_days.trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                debug!("event=submission_rejected module=core status=error reason=constraint");
                return Err(ValidationFailure);
            }
        };

        let constraints = [
            FieldConstraint::text(draft.title.clone()).required(),
            FieldConstraint::text(draft.description.clone())
                .required()
                .min_length(MIN_DESCRIPTION_CHARS),
            FieldConstraint::text(draft.man_days.clone()).required(),
            FieldConstraint::number(man_days)
                .min(MIN_MAN_DAYS)
                .max(MAX_MAN_DAYS),
        ];

        if !constraints.iter().all(validate) {
            debug!("event=submission_rejected module=core status=error reason=constraint");
            return Err(ValidationFailure);
        }

        let id = self
            .store
            .add_project(draft.title.trim(), draft.description.trim(), man_days);
        debug!("event=project_submitted module=core status=ok id={id}");
        Ok(id)
    }
}

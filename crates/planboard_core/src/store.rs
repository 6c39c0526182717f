//! Observable project store and its shared composition-root handle.
//!
//! # Responsibility
//! - Own the authoritative ordered project sequence.
//! - Fan out change notifications to registered listeners, in order.
//!
//! # Invariants
//! - Insertion order is display order; the sequence is never reordered.
//! - Every stored project already passed intake validation; the store
//!   trusts its caller and does not re-check fields.
//! - Listeners receive cloned snapshots, never references into store state.
//! - Notification is synchronous: one add runs to completion, including
//!   every listener call, before control returns.

use crate::model::project::{Project, ProjectId};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Callback receiving the full project sequence after every change.
///
/// Stored in registration order; the same closure registered twice is
/// invoked twice per change. There is no removal operation.
pub type ProjectListener = Box<dyn Fn(&[Project])>;

/// Holder of the project sequence and listener sequence.
///
/// The `&mut self` receivers make listener reentrancy unrepresentable for
/// single-owner callers; shared callers go through [`SharedProjectStore`].
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<ProjectListener>,
}

impl ProjectStore {
    /// Creates an empty store with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener at the end of the notification order.
    ///
    /// # Contract
    /// - No uniqueness check is performed.
    /// - A listener must not call back into the store while it is being
    ///   notified.
    pub fn subscribe(&mut self, listener: ProjectListener) {
        self.listeners.push(listener);
    }

    /// Appends a new project and notifies every listener.
    ///
    /// # Contract
    /// - Inputs must already satisfy the intake constraints; this method
    ///   performs no validation and cannot fail.
    /// - Listeners run synchronously, in registration order, each receiving
    ///   a snapshot of the full sequence.
    ///
    /// Returns the generated stable project ID.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        man_days: f64,
    ) -> ProjectId {
        let project = Project::new(title, description, man_days);
        let id = project.id;
        self.projects.push(project);

        debug!(
            "event=project_added module=core status=ok id={} total={}",
            id,
            self.projects.len()
        );

        let snapshot = self.projects.clone();
        for listener in &self.listeners {
            listener(&snapshot);
        }

        id
    }

    /// Returns a snapshot of the current project sequence.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Returns the number of stored projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns whether the store holds no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Cloneable handle to one process-wide store.
///
/// Replaces a hidden global singleton: the composition root constructs the
/// handle once and passes clones to whichever components need the store.
/// Every clone addresses the same underlying sequence, so a listener
/// subscribed through one clone observes projects added through any other.
///
/// Single-threaded by design (`Rc<RefCell<_>>`); the whole add-and-notify
/// path is synchronous, so no locking is needed.
#[derive(Clone, Default)]
pub struct SharedProjectStore {
    inner: Rc<RefCell<ProjectStore>>,
}

impl SharedProjectStore {
    /// Creates a handle owning a fresh empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener on the shared store.
    ///
    /// See [`ProjectStore::subscribe`] for ordering and dedup semantics.
    pub fn subscribe(&self, listener: ProjectListener) {
        self.inner.borrow_mut().subscribe(listener);
    }

    /// Appends a project through the shared store and notifies listeners.
    ///
    /// # Contract
    /// - Same caller-validated contract as [`ProjectStore::add_project`].
    /// - The store stays mutably borrowed while listeners run; a listener
    ///   that calls back into this handle violates the reentrancy rule and
    ///   panics via the `RefCell` borrow guard instead of corrupting the
    ///   notification pass.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        man_days: f64,
    ) -> ProjectId {
        self.inner.borrow_mut().add_project(title, description, man_days)
    }

    /// Returns a snapshot of the current project sequence.
    pub fn projects(&self) -> Vec<Project> {
        self.inner.borrow().projects()
    }

    /// Returns the number of stored projects.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns whether the store holds no projects.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Returns whether two handles address the same underlying store.
    pub fn same_store(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

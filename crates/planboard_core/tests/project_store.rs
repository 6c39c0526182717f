use planboard_core::{Project, ProjectStatus, ProjectStore, SharedProjectStore};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[test]
fn projects_are_kept_in_call_order() {
    let mut store = ProjectStore::new();
    store.add_project("first", "first description", 1.0);
    store.add_project("second", "second description", 2.0);
    store.add_project("third", "third description", 3.0);

    let titles: Vec<String> = store
        .projects()
        .into_iter()
        .map(|project| project.title)
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[test]
fn every_add_generates_a_fresh_id() {
    let mut store = ProjectStore::new();
    for n in 0..5 {
        store.add_project(format!("p{n}"), "some description", 1.0);
    }

    let ids: HashSet<_> = store.projects().into_iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 5);
    assert!(ids.iter().all(|id| !id.is_nil()));
}

#[test]
fn listener_is_invoked_once_per_add_with_growing_snapshots() {
    let mut store = ProjectStore::new();
    let seen_lengths = Rc::new(RefCell::new(Vec::new()));

    let lengths = Rc::clone(&seen_lengths);
    store.subscribe(Box::new(move |projects| {
        lengths.borrow_mut().push(projects.len());
    }));

    for n in 1..=4 {
        store.add_project(format!("p{n}"), "some description", f64::from(n));
    }

    assert_eq!(*seen_lengths.borrow(), vec![1, 2, 3, 4]);
}

#[test]
fn listeners_run_in_registration_order() {
    let mut store = ProjectStore::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    for tag in ["a", "b", "c"] {
        let order = Rc::clone(&order);
        store.subscribe(Box::new(move |_| order.borrow_mut().push(tag)));
    }

    store.add_project("only", "some description", 1.0);
    assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn duplicate_registration_fires_twice_per_change() {
    let mut store = ProjectStore::new();
    let calls = Rc::new(RefCell::new(0));

    for _ in 0..2 {
        let calls = Rc::clone(&calls);
        store.subscribe(Box::new(move |_| *calls.borrow_mut() += 1));
    }

    store.add_project("only", "some description", 1.0);
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn snapshots_are_copies_detached_from_store_state() {
    let mut store = ProjectStore::new();
    let first_snapshot: Rc<RefCell<Vec<Project>>> = Rc::new(RefCell::new(Vec::new()));

    let captured = Rc::clone(&first_snapshot);
    store.subscribe(Box::new(move |projects| {
        if captured.borrow().is_empty() {
            *captured.borrow_mut() = projects.to_vec();
        }
    }));

    store.add_project("first", "first description", 1.0);
    store.add_project("second", "second description", 2.0);

    // The snapshot taken at the first notification is unaffected by the
    // later mutation of the store.
    assert_eq!(first_snapshot.borrow().len(), 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn new_projects_start_on_the_active_board() {
    let mut store = ProjectStore::new();
    store.add_project("only", "some description", 1.0);

    let project = &store.projects()[0];
    assert_eq!(project.status, ProjectStatus::Active);
    assert!(project.is_active());
}

#[test]
fn cloned_handles_address_the_same_store() {
    let root = SharedProjectStore::new();
    let render_side = root.clone();
    assert!(root.same_store(&render_side));

    let seen = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&seen);
    render_side.subscribe(Box::new(move |_| *counter.borrow_mut() += 1));

    root.add_project("shared", "added through other handle", 3.0);

    assert_eq!(*seen.borrow(), 1);
    assert_eq!(render_side.len(), 1);
}

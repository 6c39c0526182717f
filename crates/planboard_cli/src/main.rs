//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `planboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use planboard_core::{ProjectDraft, ProjectIntake, SharedProjectStore};

fn main() {
    println!("planboard_core ping={}", planboard_core::ping());
    println!("planboard_core version={}", planboard_core::core_version());

    // One subscribe -> submit round trip as the composition root would
    // wire it. IDs are random, so only counts are printed.
    let store = SharedProjectStore::new();
    store.subscribe(Box::new(|projects| {
        println!("listener notified projects={}", projects.len());
    }));

    let intake = ProjectIntake::new(store.clone());

    let accepted = intake.submit(&ProjectDraft {
        title: "Build API".to_string(),
        description: "Implements core endpoints".to_string(),
        man_days: "40".to_string(),
    });
    println!("submit accepted={}", accepted.is_ok());

    let rejected = intake.submit(&ProjectDraft {
        title: "Build API".to_string(),
        description: "bad".to_string(),
        man_days: "40".to_string(),
    });
    println!("submit accepted={}", rejected.is_ok());

    println!("store projects={}", store.len());
}

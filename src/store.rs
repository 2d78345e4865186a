//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest committed task snapshot, written only by the store bridge
    pub tasks: Vec<Task>,
    /// Current visibility filter
    pub filter: Filter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Publish a committed task snapshot into the UI state
pub fn store_set_tasks(store: &AppStore, tasks: &[Task]) {
    *store.tasks().write() = tasks.to_vec();
}

/// Change the visibility filter
pub fn store_set_filter(store: &AppStore, filter: Filter) {
    *store.filter().write() = filter;
}

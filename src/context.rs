//! Application Context
//!
//! Commit-side handle to the shared task store, provided via Leptos Context API.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::__reexports::send_wrapper::SendWrapper;
use todo_store::{StoreResult, TaskStore};

/// Shared handle to the single task container
pub type SharedTaskStore = Rc<RefCell<TaskStore>>;

/// App-wide write access to the task collection.
///
/// Reads never go through here: components render from the snapshot the
/// bridge observer publishes into [`crate::store::AppState`].
#[derive(Clone)]
pub struct AppContext {
    store: SendWrapper<SharedTaskStore>,
}

impl AppContext {
    pub fn new(store: SharedTaskStore) -> Self {
        Self { store: SendWrapper::new(store) }
    }

    /// Append a new task, returning its id
    pub fn add_task(&self, text: &str) -> u32 {
        self.store.borrow_mut().add(text)
    }

    /// Flip a task's completion flag
    pub fn toggle_task(&self, id: u32) {
        log_commit_error(self.store.borrow_mut().toggle(id).map(|_| ()));
    }

    /// Delete a task
    pub fn remove_task(&self, id: u32) {
        log_commit_error(self.store.borrow_mut().remove(id).map(|_| ()));
    }

    /// Drop all completed tasks
    pub fn clear_completed(&self) {
        self.store.borrow_mut().clear_completed();
    }
}

/// Commit failures are logged and dropped, the UI keeps its last snapshot
fn log_commit_error(result: StoreResult<()>) {
    if let Err(err) = result {
        web_sys::console::warn_1(&format!("[STORE] commit failed: {}", err).into());
    }
}

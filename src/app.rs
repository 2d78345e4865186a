//! Todo Frontend App
//!
//! Main application component wiring the shared task store to the UI.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::models::Task;
use crate::store::{store_set_tasks, AppState};
use todo_store::TaskStore;

/// Demo tasks shown on first load
const SEED_JSON: &str = r#"[
    {"id": 1, "text": "Walk the dog", "completed": false},
    {"id": 2, "text": "Water the plants", "completed": true}
]"#;

fn seed_tasks() -> Vec<Task> {
    serde_json::from_str(SEED_JSON).unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    // Single source of truth for the task collection
    let tasks = Rc::new(RefCell::new(TaskStore::with_tasks(seed_tasks())));

    // UI state
    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(tasks.clone()));

    // Bridge: every commit publishes its snapshot into the UI state
    tasks.borrow_mut().subscribe(move |snapshot| {
        web_sys::console::log_1(&format!("[APP] committed {} tasks", snapshot.len()).into());
        store_set_tasks(&store, snapshot);
    });

    // Subscribing does not replay, so publish the seed snapshot by hand
    store_set_tasks(&store, tasks.borrow().tasks());

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Todos"</h1>

                <NewTodoForm />

                <TodoList />

                <FilterBar />
            </main>
        </div>
    }
}

//! Todo List Component
//!
//! Renders the tasks visible under the current filter.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

/// Task list under the current visibility filter
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let visible_tasks = move || {
        let filter = store.filter().get();
        store
            .tasks()
            .get()
            .into_iter()
            .filter(|task| filter.accepts(task))
            .collect::<Vec<_>>()
    };

    view! {
        <ul class="todo-list">
            <For
                each=visible_tasks
                key=|task| {
                    // Tuple of all mutable fields so edits cause re-render
                    (task.id, task.text.clone(), task.completed)
                }
                children=move |task| {
                    view! { <TodoItem task=task /> }
                }
            />
        </ul>
    }
}

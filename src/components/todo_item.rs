//! Todo Item Component
//!
//! Individual row in the task list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Task;

/// A single task row
#[component]
pub fn TodoItem(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let completed = task.completed;
    let text = task.text.clone();
    let toggle_ctx = ctx.clone();

    view! {
        <li class=move || if completed { "todo-row completed" } else { "todo-row" }>
            // Checkbox
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| toggle_ctx.toggle_task(id)
            />

            // Text
            <span class="todo-text">{text}</span>

            // Delete button
            <button class="delete-btn" on:click=move |_| ctx.remove_task(id)>"×"</button>
        </li>
    }
}

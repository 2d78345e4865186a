//! New Todo Form Component
//!
//! Form for appending new tasks to the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Form for creating new tasks
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        let text = text.trim();
        // Empty submissions never reach the store
        if text.is_empty() { return; }
        ctx.add_task(text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=create_task>
            <input
                type="text"
                placeholder="What needs doing?"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}

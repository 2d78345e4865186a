//! Filter Bar Component
//!
//! Visibility filter buttons plus task counts.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Filter;
use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

/// Filter options in display order
const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Done"),
];

/// Filter buttons, counts, and completed-task cleanup
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="filter-bar">
            <span class="task-count">
                {move || {
                    let tasks = store.tasks().get();
                    let done = tasks.iter().filter(|t| t.completed).count();
                    format!("{} tasks, {} done", tasks.len(), done)
                }}
            </span>

            {FILTERS.iter().map(|(filter, label)| {
                let f = *filter;
                let is_selected = move || store.filter().get() == f;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store_set_filter(&store, f)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}

            <button class="clear-btn" on:click=move |_| ctx.clear_completed()>
                "Clear done"
            </button>
        </div>
    }
}

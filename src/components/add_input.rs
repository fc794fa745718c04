//! Add Input Component
//!
//! Controlled text field that appends a task on submit.

use leptos::prelude::*;

use crate::models::TaskId;
use crate::store::{use_todo_store, TaskList, TodoStateStoreFields};

/// Text to add for a submitted input value, or `None` when it is blank
pub fn submitted_text(value: &str) -> Option<&str> {
    let text = value.trim();
    (!text.is_empty()).then_some(text)
}

/// Apply a submit: add the field's text to `tasks` if it is not blank,
/// then clear the field.
pub fn submit_task(tasks: &mut TaskList, value: &mut String) -> Option<TaskId> {
    let added = submitted_text(value).and_then(|text| tasks.add(text));
    if let Some(id) = added {
        log::debug!("added task #{id} ({} total)", tasks.len());
    }
    value.clear();
    added
}

/// Input + "Add" button. The field is cleared after every submit.
#[component]
pub fn AddInput() -> impl IntoView {
    let store = use_todo_store();
    let (text, set_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut value = text.get_untracked();
        submit_task(&mut store.tasks().write(), &mut value);
        set_text.set(value);
    };

    view! {
        <form class="input-container" on:submit=add_task>
            <input
                class="input"
                type="text"
                placeholder="Add a new task here..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button class="add-btn" type="submit">"Add"</button>
        </form>
    }
}

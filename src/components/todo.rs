//! Todo Component
//!
//! Owns the task store for the to-do view tree.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddInput, TodoFooter, TodoList};
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn Todo() -> impl IntoView {
    let store = Store::new(TodoState::default());
    provide_context(store);

    let incomplete_count = Signal::derive(move || store.tasks().read().incomplete_count());

    view! {
        <div class="todo">
            <AddInput />
            <TodoList />
            <TodoFooter incomplete_count=incomplete_count />
        </div>
    }
}

//! Todo List Component
//!
//! Renders the tasks in insertion order; clicking one toggles it.

use leptos::prelude::*;

use crate::store::{use_todo_store, TodoStateStoreFields};

pub fn task_class(completed: bool) -> &'static str {
    if completed {
        "todo-item todo-item-active"
    } else {
        "todo-item"
    }
}

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();
    let tasks = move || store.tasks().read().tasks().to_vec();

    view! {
        <div class="todolist-container">
            <div class="todos-container">
                <For
                    each=tasks
                    key=|task| task.id
                    children=move |task| {
                        let id = task.id;
                        // Row stays mounted across toggles; only the class follows the store
                        let completed = move || {
                            store.tasks().read().get(id).is_some_and(|task| task.completed)
                        };
                        view! {
                            <div class="task-container" data-testid="task-container">
                                <div
                                    class=move || task_class(completed())
                                    on:click=move |_| {
                                        store.tasks().write().toggle(id);
                                    }
                                >
                                    {task.text}
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

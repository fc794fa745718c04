//! Todo Footer Component
//!
//! Remaining-task counter and the link to the followers view.

use leptos::prelude::*;

use crate::components::NavLink;
use crate::route::Route;

/// "1 task left", otherwise "{n} tasks left"
pub fn tasks_left_label(count: usize) -> String {
    if count == 1 {
        format!("{count} task left")
    } else {
        format!("{count} tasks left")
    }
}

#[component]
pub fn TodoFooter(#[prop(into)] incomplete_count: Signal<usize>) -> impl IntoView {
    view! {
        <div class="todo-footer">
            <p data-testid="paragraph">{move || tasks_left_label(incomplete_count.get())}</p>
            <NavLink to=Route::Followers label="Followers" />
        </div>
    }
}

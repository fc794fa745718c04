//! Page Components
//!
//! One component per route.

use leptos::prelude::*;

use crate::components::{FollowersList, NavLink, Todo};
use crate::route::Route;

#[component]
pub fn TodoPage() -> impl IntoView {
    view! {
        <div class="todolist-page">
            <h1 class="header">"Todo"</h1>
            <Todo />
        </div>
    }
}

#[component]
pub fn FollowersPage() -> impl IntoView {
    view! {
        <div class="followers-page">
            <h1 class="header">"Followers"</h1>
            <FollowersList />
            <div class="todo-footer">
                <NavLink to=Route::Todo label="Go Back" />
            </div>
        </div>
    }
}

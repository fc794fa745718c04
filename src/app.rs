//! Todo & Followers App
//!
//! Root component: provides context and switches between the two views.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{FollowersPage, TodoPage};
use crate::config::ApiConfig;
use crate::context::{current_path, AppContext};
use crate::route::Route;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (route, set_route) = signal(Route::from_path(&current_path()));

    // Provide context to all children
    let ctx = AppContext::new((route, set_route));
    provide_context(ctx);
    provide_context(ApiConfig::default());

    // Browser back/forward
    let popstate_listener = window_event_listener(ev::popstate, move |_| ctx.sync_with_location());
    on_cleanup(move || popstate_listener.remove());

    view! {
        <div class="app">
            {move || match route.get() {
                Route::Todo => view! { <TodoPage /> }.into_any(),
                Route::Followers => view! { <FollowersPage /> }.into_any(),
            }}
        </div>
    }
}

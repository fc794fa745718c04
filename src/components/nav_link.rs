//! Nav Link Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::route::Route;

/// Unmodified primary-button click. Anything else (new tab, new window,
/// download) is left to the browser.
pub fn is_plain_click(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !(ctrl || meta || shift || alt)
}

/// In-app link: keeps a real `href` but navigates without a page load
#[component]
pub fn NavLink(to: Route, label: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <a
            href=to.path()
            on:click=move |ev: web_sys::MouseEvent| {
                if !is_plain_click(ev.button(), ev.ctrl_key(), ev.meta_key(), ev.shift_key(), ev.alt_key()) {
                    return;
                }
                ev.prevent_default();
                ctx.navigate(to);
            }
        >
            {label}
        </a>
    }
}

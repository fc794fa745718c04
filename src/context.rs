//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::route::Route;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently shown view - read
    pub route: ReadSignal<Route>,
    /// Currently shown view - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Switch view and push the new path onto the browser history
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        let pushed = window()
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(route.path())));
        if let Err(e) = pushed {
            log::warn!("history.pushState failed: {e:?}");
        }
        log::debug!("navigate to {}", route.path());
        self.set_route.set(route);
    }

    /// Follow the browser location after back/forward
    pub fn sync_with_location(&self) {
        self.apply_location(Route::from_path(&current_path()));
    }

    /// Set the route from the location unless it is already shown.
    /// A same-route write would remount the view and drop its state.
    pub fn apply_location(&self, route: Route) -> bool {
        if self.route.get_untracked() == route {
            return false;
        }
        self.set_route.set(route);
        true
    }
}

/// `location.pathname`, or `/` if it cannot be read
pub fn current_path() -> String {
    window().location().pathname().unwrap_or_else(|_| "/".to_string())
}

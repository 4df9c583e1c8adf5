//! Application router component.
//!
//! Handles URL-based routing with the History API. The browser location is
//! the source of truth; explorer links push new entries and `popstate`
//! (back/forward buttons) reloads the view for the restored location.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::explorer::Explorer;
use crate::config::APP_NAME;
use crate::core::actions;
use crate::utils::dom;

/// Main application router.
///
/// On mount it:
/// - loads the listing (or preview) for the current location
/// - fetches the backend version and the signed-in user
/// - listens for `popstate` to follow back/forward navigation
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            actions::on_popstate(ctx);
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    actions::load(ctx, ctx.route());
    actions::load_version(ctx);
    actions::load_user(ctx);

    // Keep the tab title in sync with the current directory
    Effect::new(move |_| {
        let path = ctx.state.with(|s| s.route.display_path());
        dom::set_title(&format!("{} - {}", path, APP_NAME));
    });

    view! { <Explorer /> }
}

//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] holding the
//! explorer's [`ViewState`].

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::{Msg, ViewState};
use crate::models::Route;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// The whole view state sits behind one signal. Components read it through
/// `with`/`get` and change it only by [`dispatch`](Self::dispatch)ing a
/// [`Msg`].
#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: RwSignal<ViewState>,
}

impl AppContext {
    /// Creates a context for the page's current location.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ViewState::new(Route::current())),
        }
    }

    /// Apply a message to the view state.
    pub fn dispatch(&self, msg: Msg) {
        self.state.update(|s| s.update(msg));
    }

    /// Route the view was last loaded for, without tracking.
    pub fn route(&self) -> Route {
        self.state.with_untracked(|s| s.route.clone())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router, which owns navigation events
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #c0392b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #666; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            border: 1px solid #ccc;
                            padding: 0.5rem 1.5rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

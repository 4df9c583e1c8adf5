//! Status bar component.
//!
//! Displays entry counts for the current listing, the backend version and
//! the signed-in user.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::listing::count_kinds;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Footer bar below the explorer.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | `3 folders, 12 files \| dirview v1.2.0 \| alice` |
/// | Mobile (< 480px) | Counts and user only (version hidden) |
#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let counts = Signal::derive(move || {
        let (dirs, files) = ctx.state.with(|s| count_kinds(&s.visible_files()));
        format!(
            "{} folder{}, {} file{}",
            dirs,
            if dirs == 1 { "" } else { "s" },
            files,
            if files == 1 { "" } else { "s" },
        )
    });
    let version = Signal::derive(move || ctx.state.with(|s| format!("{} {}", APP_NAME, s.version)));
    let user = Signal::derive(move || {
        ctx.state
            .with(|s| s.user.as_ref().and_then(|u| u.display_name().map(String::from)))
    });

    view! {
        <footer class=css::bar>
            <div class=css::section>
                <Show when=move || !ctx.state.with(|s| s.preview_mode)>
                    <span class=css::label>
                        <span class=css::value>{counts}</span>
                    </span>
                </Show>
                <span class=css::labelMuted>
                    <span class=css::value>{version}</span>
                </span>
            </div>

            {move || user.get().map(|name| view! {
                <span class=css::user>
                    <span class=css::labelIcon><Icon icon=ic::USER /></span>
                    <span class=css::value>{name}</span>
                </span>
            })}
        </footer>
    }
}

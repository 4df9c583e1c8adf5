//! Path bar component.
//!
//! Renders the breadcrumb trail with clickable segments. The last segment is
//! the current location and is not a link.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::actions;
use crate::models::{Crumb, Route};
use crate::utils::url::encode_path_segment;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Breadcrumb bar displayed above the listing.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let crumbs = Memo::new(move |_| ctx.state.with(|s| s.breadcrumb.clone()));

    view! {
        <nav class=css::pathbar aria-label="Breadcrumb">
            <button
                class=css::segment
                on:click=move |_| actions::navigate(ctx, Route::from_uri("/"))
            >
                <span class=css::icon><Icon icon=ic::HOME /></span>
            </button>
            {move || {
                let crumbs = crumbs.get();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| view! {
                        <span class=css::separator><Icon icon=ic::CHEVRON_RIGHT /></span>
                        <Segment crumb=crumb current=idx == last />
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// One breadcrumb segment.
#[component]
fn Segment(crumb: Crumb, current: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    if current {
        return view! {
            <span class=format!("{} {}", css::segment, css::segmentCurrent)>{crumb.name}</span>
        }
        .into_any();
    }

    // Crumb paths are decoded for display; raw=false only applies to the file itself
    let path = encode_path_segment(&crumb.path);
    let base = ctx.route();
    let target = if base.is_preview_mode() {
        Route::from_uri(&path)
    } else {
        base.with_path(&path)
    };
    let href = target.uri();
    view! {
        <a
            class=css::segment
            href=href
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                actions::navigate(ctx, target.clone());
            }
        >
            {crumb.name}
        </a>
    }
    .into_any()
}

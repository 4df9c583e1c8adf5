//! Preview panel component.
//!
//! Shows the directory README below the listing, or the whole file in
//! explicit preview mode (`raw=false`). Content is already sanitized HTML.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::PreviewKind;
use crate::utils::format::format_bytes;

stylance::import_crate_style!(css, "src/components/explorer/preview.module.css");
stylance::import_crate_style!(md_css, "src/components/explorer/markdown.module.css");

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let filename = Memo::new(move |_| {
        ctx.state
            .with(|s| s.preview.filename.clone())
            .unwrap_or_default()
    });
    let filesize = Memo::new(move |_| ctx.state.with(|s| s.preview.filesize));
    let is_loading = Memo::new(move |_| {
        ctx.state
            .with(|s| s.preview.is_loading() || (s.preview_mode && s.loading))
    });
    let body_class = Memo::new(move |_| {
        match ctx.state.with(|s| s.preview.filetype) {
            PreviewKind::Markdown => format!("{} {}", css::content, md_css::markdown),
            PreviewKind::Text => format!("{} {}", css::content, css::text),
        }
    });
    let html = Memo::new(move |_| ctx.state.with(|s| s.preview.content_html.clone()));

    view! {
        <section class=css::panel aria-label="File preview">
            <header class=css::header>
                <span class=css::icon><Icon icon=ic::FILE_TEXT /></span>
                <span class=css::filename>{move || filename.get()}</span>
                {move || filesize.get().map(|size| view! {
                    <span class=css::filesize>{format_bytes(size)}</span>
                })}
            </header>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <div class=css::loading>"Loading..."</div> }
            >
                <div class=move || body_class.get() inner_html=move || html.get()></div>
            </Show>
        </section>
    }
}

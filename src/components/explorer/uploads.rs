//! Upload panel: one row per uploaded file with its progress.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::Msg;
use crate::models::{Upload, UploadStatus};

stylance::import_crate_style!(css, "src/components/explorer/uploads.module.css");

/// Lists this session's uploads; hidden while there are none.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let uploads = Memo::new(move |_| ctx.state.with(|s| s.uploads.clone()));

    view! {
        <Show when=move || uploads.with(|u| !u.is_empty())>
            <section class=css::panel aria-label="Uploads">
                <header class=css::header>
                    <span class=css::title>"Uploads"</span>
                    <button
                        class=css::clearButton
                        on:click=move |_| ctx.dispatch(Msg::ClearUploads)
                        title="Remove all uploads"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                <For
                    each=move || uploads.get()
                    key=|upload| (upload.id, upload.status.clone())
                    children=|upload| view! { <UploadRow upload=upload /> }
                />
            </section>
        </Show>
    }
}

#[component]
fn UploadRow(upload: Upload) -> impl IntoView {
    let (percent, status, class) = match &upload.status {
        UploadStatus::Uploading(p) => (*p, format!("{}%", p), css::row.to_string()),
        UploadStatus::Done => (100, "done".to_string(), format!("{} {}", css::row, css::done)),
        UploadStatus::Failed(msg) => (100, msg.clone(), format!("{} {}", css::row, css::failed)),
    };

    view! {
        <div class=class>
            <span class=css::name>{upload.name}</span>
            <span class=css::status>{status}</span>
            <div class=css::bar>
                <div class=css::fill style=format!("width: {}%", percent)></div>
            </div>
        </div>
    }
}

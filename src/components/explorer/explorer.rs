//! Main explorer component.
//!
//! ## Layout
//!
//! - **Listing mode**: toolbar, path bar, file list, README preview below
//! - **Preview mode** (`raw=false`): toolbar, path bar, full-width file preview
//!
//! When the directory accepts uploads, files dropped anywhere on the body are
//! uploaded into it.

use leptos::prelude::*;

use leptos::ev::DragEvent;
use leptos_icons::Icon;

use super::{DialogHost, FileList, PathBar, PreviewPanel, Toolbar, UploadPanel};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::status::StatusBar;
use crate::core::actions;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let preview_mode = Memo::new(move |_| ctx.state.with(|s| s.preview_mode));
    let has_preview = Memo::new(move |_| ctx.state.with(|s| s.preview.filename.is_some()));
    let can_upload = Memo::new(move |_| ctx.state.with(|s| s.auth.upload && !s.preview_mode));
    let (dragging, set_dragging) = signal(false);

    // Without preventDefault the browser would open the dropped file itself
    let on_dragover = move |ev: DragEvent| {
        if can_upload.get_untracked() {
            ev.prevent_default();
            set_dragging.set(true);
        }
    };
    let on_drop = move |ev: DragEvent| {
        set_dragging.set(false);
        if !can_upload.get_untracked() {
            return;
        }
        ev.prevent_default();
        let files: Vec<_> = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        if !files.is_empty() {
            actions::upload_files(ctx, files);
        }
    };

    view! {
        <div class=css::explorer>
            <Toolbar />
            <PathBar />

            <main
                class=move || if dragging.get() {
                    format!("{} {}", css::body, css::dropActive)
                } else {
                    css::body.to_string()
                }
                on:dragover=on_dragover
                on:dragleave=move |_| set_dragging.set(false)
                on:drop=on_drop
            >
                <Show when=move || dragging.get()>
                    <div class=css::dropHint>
                        <Icon icon=ic::DROP_ZONE />
                        <span>"Drop files to upload"</span>
                    </div>
                </Show>
                <Show
                    when=move || preview_mode.get()
                    fallback=move || view! {
                        <FileList />
                        <Show when=move || has_preview.get()>
                            <PreviewPanel />
                        </Show>
                    }
                >
                    <PreviewPanel />
                </Show>
                <UploadPanel />
            </main>

            <StatusBar />
            <DialogHost />
        </div>
    }
}

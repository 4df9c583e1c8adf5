//! File list component for explorer view.
//!
//! Displays the visible entries of the current listing as table rows with
//! per-entry actions (download, copy link, info, QR code, preview, delete).
//!
//! Rows capture their links when built, so a row is keyed by the listing's
//! route as well as the entry: a same-named file in another directory never
//! reuses a stale row.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::RAW_PARAM;
use crate::core::actions;
use crate::core::install::{Origin, download_url, has_qr_code, install_url};
use crate::core::listing::row_key;
use crate::models::{FileEntry, FileIcon, MtimeFormat, Route};
use crate::utils::format::{
    format_bytes, format_from_now, format_timestamp, local_utc_offset_secs, now_ms,
};
use crate::utils::url::encode_uri;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let entries = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.visible_files()
                .into_iter()
                .map(|entry| (row_key(&s.route, &entry), entry))
                .collect::<Vec<_>>()
        })
    });
    let loading = Memo::new(move |_| ctx.state.with(|s| s.loading));

    view! {
        <div
            class=move || if loading.get() {
                format!("{} {}", css::list, css::loading)
            } else {
                css::list.to_string()
            }
            role="grid"
            aria-label="File list"
        >
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <span class=css::headerName>"Name"</span>
                <span class=css::headerSize>"Size"</span>
                <span class=css::headerDate>"Modified"</span>
                <span class=css::headerActions></span>
            </div>
            <Show when=move || entries.with(|e| e.is_empty()) && !loading.get()>
                <div class=css::empty>"Empty directory"</div>
            </Show>
            <For
                each=move || entries.get()
                key=|(key, _)| key.clone()
                children=move |(_, entry)| {
                    view! { <FileListItem entry=entry /> }
                }
            />
        </div>
    }
}

#[component]
fn FileListItem(entry: FileEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let can_delete = Memo::new(move |_| ctx.state.with(|s| s.auth.delete));
    let mtime_format = Memo::new(move |_| ctx.state.with(|s| s.mtime_format));

    let route = ctx.route();
    let is_dir = entry.is_dir();
    let icon = ic::file_icon(FileIcon::for_entry(&entry));
    let size = format_bytes(entry.size);
    let mtime = entry.mtime;
    let offset = local_utc_offset_secs();

    // Directories keep the query (search scope); files link to the raw content
    let target = route.join(&entry.name);
    let href = if is_dir { target.uri() } else { target.path.clone() };
    let preview_target = Route::from_uri(&format!("{}?{}=false", target.path, RAW_PARAM));

    let on_open = move |ev: leptos::ev::MouseEvent| {
        if is_dir {
            ev.prevent_default();
            actions::navigate(ctx, target.clone());
        }
    };

    let download = Origin::current()
        .filter(|_| !is_dir)
        .map(|origin| download_url(&origin, &entry.path, &route.search));
    let qr_name = has_qr_code(&entry.name).then(|| entry.name.clone());
    let link = Origin::current()
        .map(|origin| encode_uri(&install_url(&origin, &route.path, Some(&entry.name))));

    let entry_for_info = entry.clone();
    let entry_for_delete = entry.clone();

    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else if entry.is_hidden() {
        format!("{} {}", css::name, css::nameHidden)
    } else {
        css::name.to_string()
    };
    let suffix = if is_dir { "/" } else { "" };

    view! {
        <div class=css::listItem role="row">
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>

            <a class=name_class href=href on:click=on_open>
                {format!("{}{}", entry.name, suffix)}
            </a>

            <span class=css::size>{size}</span>

            <span class=css::date>
                {move || match mtime_format.get() {
                    MtimeFormat::Absolute => format_timestamp(mtime, offset),
                    MtimeFormat::FromNow => format_from_now(mtime, now_ms()),
                }}
            </span>

            <span class=css::actions>
                {download.map(|url| view! {
                    <a class=css::actionButton href=url title="Download">
                        <Icon icon=ic::DOWNLOAD />
                    </a>
                })}
                {link.map(|url| view! { <CopyLinkButton url=url /> })}
                {(!is_dir).then(|| view! {
                    <button
                        class=css::actionButton
                        on:click=move |_| actions::navigate(ctx, preview_target.clone())
                        title="Preview"
                    >
                        <Icon icon=ic::PREVIEW />
                    </button>
                })}
                <button
                    class=css::actionButton
                    on:click=move |_| actions::show_info(ctx, entry_for_info.clone())
                    title="File info"
                >
                    <Icon icon=ic::INFO />
                </button>
                {qr_name.map(|name| view! {
                    <button
                        class=css::actionButton
                        on:click=move |_| actions::show_qr(ctx, Some(name.clone()))
                        title="Install QR code"
                    >
                        <Icon icon=ic::QR_CODE />
                    </button>
                })}
                <Show when=move || can_delete.get()>
                    {
                        let entry = entry_for_delete.clone();
                        view! {
                            <button
                                class=format!("{} {}", css::actionButton, css::danger)
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    actions::delete_path(ctx, entry.clone(), ev.alt_key());
                                }
                                title="Delete (Alt-click skips confirmation)"
                            >
                                <Icon icon=ic::DELETE />
                            </button>
                        }
                    }
                </Show>
            </span>
        </div>
    }
}

/// Copies `url` and briefly shows a check mark.
#[component]
pub fn CopyLinkButton(url: String) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let on_click = move |_: leptos::ev::MouseEvent| {
        actions::copy_link(url.clone(), move || set_copied.set(true));
    };

    view! {
        <button
            class=css::actionButton
            on:click=on_click
            on:mouseleave=move |_| set_copied.set(false)
            title=move || if copied.get() { "Copied" } else { "Copy link" }
        >
            {move || {
                let icon = if copied.get() { ic::COPIED } else { ic::COPY };
                view! { <Icon icon=icon /> }
            }}
        </button>
    }
}

//! User-triggered operations.
//!
//! Every action is an `async` body returning `Result<(), ActionError>`,
//! spawned on the browser's event loop by [`run`]. Failures surface as a
//! blocking alert with the server's status and message; nothing is retried.
//! Requests are never cancelled, so a slow response may overwrite the result
//! of a newer one.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::app::AppContext;
use crate::config::SEARCH_PARAM;
use crate::core::api;
use crate::core::error::{ActionError, FetchError};
use crate::core::install::{Origin, install_url};
use crate::core::names::check_dir_name;
use crate::core::preview::{preview_kind, render_preview};
use crate::core::state::Msg;
use crate::models::{Dialog, FileEntry, PreviewKind, PreviewState, Route};
use crate::utils::dom;
use crate::utils::url::{encode_path_segment, encode_query_value, encode_uri, path_join};

// =============================================================================
// Plumbing
// =============================================================================

/// Spawn an action and report its error, if any.
fn run<F>(action: F)
where
    F: Future<Output = Result<(), ActionError>> + 'static,
{
    spawn_local(async move {
        if let Err(err) = action.await {
            report(&err);
        }
    });
}

/// Log an error and show it to the user.
pub fn report(err: &ActionError) {
    web_sys::console::error_1(&err.to_string().into());
    dom::alert(&err.to_string());
}

fn warn(context: &str, err: &FetchError) {
    web_sys::console::warn_1(&format!("{}: {}", context, err).into());
}

// =============================================================================
// Listing & Navigation
// =============================================================================

/// Load `route` into the view: a listing, or a single file in preview mode.
pub async fn load_listing(ctx: AppContext, route: Route) -> Result<(), FetchError> {
    ctx.dispatch(Msg::LoadStarted);

    if route.is_preview_mode() {
        return load_preview(ctx, &route).await;
    }

    match api::fetch_listing(&route).await {
        Ok(listing) => {
            ctx.dispatch(Msg::ListingLoaded {
                route: route.clone(),
                listing,
            });
            load_readme(ctx, &route).await;
            Ok(())
        }
        Err(err) => {
            ctx.dispatch(Msg::LoadFailed);
            Err(err)
        }
    }
}

/// Reload whatever the browser location points at.
pub fn load(ctx: AppContext, route: Route) {
    run(async move { load_listing(ctx, route).await.map_err(ActionError::from) });
}

/// Load `route` and record it in browser history once it resolved.
pub fn navigate(ctx: AppContext, route: Route) {
    run(async move {
        load_listing(ctx, route.clone()).await?;
        route.push();
        Ok(())
    });
}

/// Back/forward navigation.
///
/// Search results are server-rendered per query, so those pages reload.
pub fn on_popstate(ctx: AppContext) {
    let route = Route::current();
    if route.search_term().is_some() {
        dom::reload();
        return;
    }
    load(ctx, route);
}

/// Run a server-side search below the current directory.
pub fn search(ctx: AppContext, term: &str) {
    let path = ctx.route().path;
    let term = term.trim();
    if term.is_empty() {
        dom::set_href(&path);
    } else {
        dom::set_href(&format!(
            "{}?{}={}",
            path,
            SEARCH_PARAM,
            encode_query_value(term)
        ));
    }
}

// =============================================================================
// Preview
// =============================================================================

/// Fetch and render the README announced by the last listing.
///
/// Failures only log and drop the pending preview: the listing itself is
/// already on screen. A README answering after the user moved on is dropped.
async fn load_readme(ctx: AppContext, route: &Route) {
    let Some(name) = ctx
        .state
        .with_untracked(|s| s.readme_to_load().map(String::from))
    else {
        return;
    };

    let url = path_join(&[&route.path, &encode_path_segment(&name)]);
    let result = api::fetch_text(&url).await;
    if ctx.route() != *route {
        return;
    }
    match result {
        Ok(text) => ctx.dispatch(Msg::ReadmeLoaded(render_preview(
            &name,
            PreviewKind::Markdown,
            None,
            &text,
        ))),
        Err(err) => {
            warn(&format!("load {}", url), &err);
            ctx.dispatch(Msg::ReadmeFailed);
        }
    }
}

/// Explicit preview mode: resolve the file via `/-/info`, then render it.
///
/// The route is committed only once the content is rendered.
async fn load_preview(ctx: AppContext, route: &Route) -> Result<(), FetchError> {
    let result: Result<PreviewState, FetchError> = async {
        let info = api::fetch_info(&route.path).await?;
        let kind = preview_kind(&info.name);
        let text = api::fetch_text(&api::raw_url(&info.path)).await?;
        Ok(render_preview(&info.name, kind, Some(info.size), &text))
    }
    .await;

    match result {
        Ok(preview) => {
            ctx.dispatch(Msg::FileOpened {
                route: route.clone(),
                preview,
            });
            Ok(())
        }
        Err(err) => {
            ctx.dispatch(Msg::LoadFailed);
            Err(err)
        }
    }
}

// =============================================================================
// Mutations
// =============================================================================

/// Create directory `name` in the current directory, then reload.
///
/// Invalid names are rejected before any request is made.
pub fn create_directory(ctx: AppContext, name: String) {
    run(async move {
        let name = check_dir_name(&name)?;
        let dir = ctx.route();
        api::make_directory(&dir.path, name).await?;
        load_listing(ctx, ctx.route()).await?;
        Ok(())
    });
}

/// Delete `entry` from the current directory, then reload.
///
/// Asks first unless `skip_confirm` is set (Alt-click).
pub fn delete_path(ctx: AppContext, entry: FileEntry, skip_confirm: bool) {
    let dir = ctx.route();
    if !skip_confirm {
        let question = format!(
            "Delete {} ?",
            path_join(&[&dir.display_path(), &entry.name])
        );
        if !dom::confirm(&question) {
            return;
        }
    }

    run(async move {
        api::delete_entry(&dir.path, &entry.name).await?;
        load_listing(ctx, ctx.route()).await?;
        Ok(())
    });
}

/// Upload files into the current directory.
///
/// Each file gets a row in the upload panel that tracks its progress. The
/// listing reloads after every upload, whether it succeeded or not; a failed
/// upload is reported in its row rather than by an alert.
pub fn upload_files(ctx: AppContext, files: Vec<File>) {
    let dir = ctx.route();
    for file in files {
        ctx.dispatch(Msg::UploadQueued(file.name()));
        let id = ctx.state.with_untracked(|s| s.upload_seq);
        let dir = dir.clone();
        run(async move {
            let on_progress = move |percent| ctx.dispatch(Msg::UploadProgress { id, percent });
            let uploaded = api::upload_file(&dir.path, &file, on_progress).await;
            if let Err(err) = &uploaded {
                warn(&format!("upload {}", file.name()), err);
            }
            ctx.dispatch(Msg::UploadFinished {
                id,
                error: uploaded.err().map(|e| e.to_string()),
            });
            load_listing(ctx, ctx.route()).await?;
            Ok(())
        });
    }
}

// =============================================================================
// Dialogs & Metadata
// =============================================================================

/// Show the server's metadata for `entry`.
pub fn show_info(ctx: AppContext, entry: FileEntry) {
    run(async move {
        let dir = ctx.route();
        let path = path_join(&[&dir.path, &encode_path_segment(&entry.name)]);
        let info = api::fetch_info_json(&path).await?;
        let body = serde_json::to_string_pretty(&info)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        ctx.dispatch(Msg::OpenDialog(Dialog::Info {
            title: entry.name,
            body,
        }));
        Ok(())
    });
}

/// Show a QR code for installing `name`, or for the directory itself.
pub fn show_qr(ctx: AppContext, name: Option<String>) {
    let Some(origin) = Origin::current() else {
        report(&FetchError::NoWindow.into());
        return;
    };
    let route = ctx.route();
    let url = install_url(&origin, &route.path, name.as_deref());
    let title = name.unwrap_or_else(|| route.display_path());

    ctx.dispatch(Msg::OpenDialog(Dialog::Qr {
        title,
        url: encode_uri(&url),
    }));
}

/// Copy `text` to the clipboard and call `on_copied` once it is there.
pub fn copy_link(text: String, on_copied: impl FnOnce() + 'static) {
    spawn_local(async move {
        match dom::copy_text(&text).await {
            Ok(()) => on_copied(),
            Err(err) => {
                web_sys::console::error_1(&err);
                dom::alert("Copy to clipboard failed");
            }
        }
    });
}

/// Fetch the backend version for the footer.
pub fn load_version(ctx: AppContext) {
    spawn_local(async move {
        match api::fetch_sysinfo().await {
            Ok(info) => ctx.dispatch(Msg::VersionLoaded(info.version)),
            Err(err) => warn("load version", &err),
        }
    });
}

/// Fetch the signed-in user, if the server has auth enabled.
pub fn load_user(ctx: AppContext) {
    spawn_local(async move {
        match api::fetch_user().await {
            Ok(user) => ctx.dispatch(Msg::UserLoaded(user)),
            // Servers without auth have no user endpoint
            Err(err) if err.status() == Some(404) => ctx.dispatch(Msg::UserLoaded(None)),
            Err(err) => warn("load user", &err),
        }
    });
}

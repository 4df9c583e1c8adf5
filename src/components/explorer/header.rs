//! Explorer toolbar component.
//!
//! Contains navigation buttons, the search box and directory actions.
//! Upload and new-folder buttons only appear when the server grants upload
//! rights for the current directory.

use leptos::prelude::*;
use leptos_icons::Icon;
use web_sys::HtmlInputElement;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::Msg;
use crate::core::actions;
use crate::core::breadcrumb::parent_path;
use crate::models::Route;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer toolbar with navigation and actions.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_root = Memo::new(move |_| ctx.state.with(|s| s.route.path == "/"));
    let can_upload = Memo::new(move |_| ctx.state.with(|s| s.auth.upload && !s.preview_mode));

    // Last path segment as the title
    let current_name = Memo::new(move |_| {
        let display = ctx.state.with(|s| s.route.display_path());
        display
            .split('/')
            .rfind(|s| !s.is_empty())
            .unwrap_or("/")
            .to_string()
    });

    view! {
        <header class=css::header>
            <NavButtons is_root=is_root />

            <div class=css::title>
                <span class=css::titleLabel>{move || current_name.get()}</span>
            </div>

            <SearchBox />

            <div class=css::actions>
                <ToggleButtons />
                <button
                    class=css::actionButton
                    on:click=move |_| actions::show_qr(ctx, None)
                    title="QR code for this directory"
                >
                    <Icon icon=ic::QR_CODE />
                </button>
                <Show when=move || can_upload.get()>
                    <UploadButtons />
                </Show>
            </div>
        </header>
    }
}

/// Navigation buttons (home, parent).
#[component]
fn NavButtons(is_root: Memo<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_home = move |_: leptos::ev::MouseEvent| {
        actions::navigate(ctx, Route::from_uri("/"));
    };

    // Parent drops the query: search results and raw=false belong to this page only
    let on_parent = move |_: leptos::ev::MouseEvent| {
        let route = ctx.route();
        actions::navigate(ctx, Route::from_uri(&parent_path(&route.path)));
    };

    view! {
        <div class=css::navButtons>
            <button class=css::navButton on:click=on_home title="Home">
                <Icon icon=ic::HOME />
            </button>
            <button
                class=css::navButton
                on:click=on_parent
                disabled=move || is_root.get()
                title="Go to parent directory"
            >
                <Icon icon=ic::PARENT />
            </button>
        </div>
    }
}

/// Search form; submitting reloads the page with `?search=`.
#[component]
fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (term, set_term) = signal(ctx.route().search_term().unwrap_or_default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions::search(ctx, &term.get_untracked());
    };

    view! {
        <form class=css::search on:submit=on_submit role="search">
            <input
                class=css::searchInput
                type="search"
                placeholder="Search..."
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
            <button class=css::actionButton type="submit" title="Search">
                <Icon icon=ic::SEARCH />
            </button>
        </form>
    }
}

/// Hidden-file and mtime display toggles.
#[component]
fn ToggleButtons() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let show_hidden = Memo::new(move |_| ctx.state.with(|s| s.show_hidden));

    view! {
        <button
            class=css::actionButton
            on:click=move |_| ctx.dispatch(Msg::ToggleHidden)
            title=move || if show_hidden.get() { "Hide hidden files" } else { "Show hidden files" }
        >
            {move || {
                let icon = if show_hidden.get() { ic::HIDE_HIDDEN } else { ic::SHOW_HIDDEN };
                view! { <Icon icon=icon /> }
            }}
        </button>
        <button
            class=css::actionButton
            on:click=move |_| ctx.dispatch(Msg::ToggleMtimeFormat)
            title="Toggle relative times"
        >
            <Icon icon=ic::CLOCK />
        </button>
    }
}

/// New folder and upload buttons.
#[component]
fn UploadButtons() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_new_folder = move |_: leptos::ev::MouseEvent| {
        let dir = ctx.route().display_path();
        let message = format!(
            "current path: {}\nplease enter the new directory name",
            dir
        );
        if let Some(name) = dom::prompt(&message, "")
            && !name.is_empty()
        {
            actions::create_directory(ctx, name);
        }
    };

    let on_files = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            let files = (0..list.length()).filter_map(|i| list.get(i)).collect();
            actions::upload_files(ctx, files);
        }
        // Allow picking the same file again
        input.set_value("");
    };

    view! {
        <button class=css::actionButton on:click=on_new_folder title="New folder">
            <Icon icon=ic::NEW_FOLDER />
        </button>
        <label class=css::actionButton title="Upload files">
            <Icon icon=ic::UPLOAD />
            <input class=css::fileInput type="file" multiple=true on:change=on_files />
        </label>
    }
}

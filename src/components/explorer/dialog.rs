//! Modal dialogs: install QR code and file info.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::file_list::CopyLinkButton;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::Msg;
use crate::models::Dialog;
use crate::utils::render_svg;

stylance::import_crate_style!(css, "src/components/explorer/dialog.module.css");

/// Renders the open [`Dialog`], if any. Clicking the backdrop or pressing
/// the close button dismisses it.
#[component]
pub fn DialogHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let dialog = Memo::new(move |_| ctx.state.with(|s| s.dialog.clone()));

    let close = move || ctx.dispatch(Msg::CloseDialog);

    view! {
        {move || dialog.get().map(|dialog| {
            let (title, body) = match dialog {
                Dialog::Qr { title, url } => (title, view! { <QrBody url=url /> }.into_any()),
                Dialog::Info { title, body } => (
                    title,
                    view! { <pre class=css::info>{body}</pre> }.into_any(),
                ),
            };
            view! {
                <div class=css::backdrop on:click=move |_| close()>
                    <div
                        class=css::dialog
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                    >
                        <header class=css::header>
                            <span class=css::title>{title}</span>
                            <button
                                class=css::closeButton
                                on:click=move |_| close()
                                title="Close"
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </header>
                        <div class=css::content>{body}</div>
                    </div>
                </div>
            }
        })}
    }
}

#[component]
fn QrBody(url: String) -> impl IntoView {
    let svg = render_svg(&url);
    let href = url.clone();
    let copy = url.clone();

    view! {
        {match svg {
            Some(svg) => view! { <div class=css::qr inner_html=svg></div> }.into_any(),
            None => view! { <p class=css::error>"Link too long for a QR code"</p> }.into_any(),
        }}
        <div class=css::linkRow>
            <a class=css::link href=href target="_blank" rel="noopener">{url}</a>
            <CopyLinkButton url=copy />
        </div>
    }
}

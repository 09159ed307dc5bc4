use contracts::shared::ui_state::Toast;
use leptos::prelude::*;

use super::UiService;

const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
    background: rgba(0,0,0,0.5); z-index: 9999; display: flex; align-items: center; \
    justify-content: center;";
const OVERLAY_PANEL_STYLE: &str =
    "background: white; padding: 30px; border-radius: 10px; text-align: center;";

/// Renders the loading overlay and the top-right toast stack.
///
/// Must be mounted exactly once.
#[component]
pub fn UiHost() -> impl IntoView {
    let svc = use_context::<UiService>()
        .expect("UiService not provided in context (provide it in app root)");
    let state = svc.state();

    let overlay = move || {
        state
            .with(|s| s.overlay().map(|o| o.message.clone()))
            .map(|message| {
                view! {
                    <div id="loadingOverlay" style=OVERLAY_STYLE>
                        <div style=OVERLAY_PANEL_STYLE>
                            <div class="spinner-border text-primary mb-3" role="status">
                                <span class="visually-hidden">"Loading..."</span>
                            </div>
                            <p>{message}</p>
                        </div>
                    </div>
                }
            })
    };

    view! {
        {overlay}
        <div class="toast-container position-fixed top-0 end-0 p-3" style="z-index: 9999;">
            <For
                each=move || state.with(|s| s.toasts().to_vec())
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let kind = toast.kind;
                    // Bootstrap fades `.toast.fade` out once `show` is dropped.
                    let class = move || {
                        let fading = state
                            .with(|s| s.toasts().iter().any(|t| t.id == id && t.fading));
                        let shown = if fading { "" } else { " show" };
                        format!("toast fade{} {} text-white", shown, kind.css_class())
                    };

                    view! {
                        <div class=class role="alert">
                            <div class="d-flex">
                                <div class="toast-body">{toast.message}</div>
                                <button
                                    type="button"
                                    class="btn-close btn-close-white me-2 m-auto"
                                    aria-label="Close"
                                    on:click=move |_| svc.dismiss_toast(id)
                                ></button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

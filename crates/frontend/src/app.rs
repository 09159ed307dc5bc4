use crate::shared::ui_service::{UiHost, UiService};
use leptos::prelude::*;

#[component]
pub fn App(ui: UiService) -> impl IntoView {
    // Provide the page-wide UiService to the host via context.
    provide_context(ui);

    view! {
        <UiHost />
    }
}

use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Small inline spinner with a caption. `inline` keeps it on the toolbar line
/// instead of taking a block of its own.
#[component]
pub fn LoadingView(
    #[prop(into)] message: String,
    #[prop(optional)] inline: bool,
) -> impl IntoView {
    let size = if inline {
        SpinnerSize::Tiny
    } else {
        SpinnerSize::Medium
    };

    view! {
        <div class=if inline { "field-loading field-loading--inline" } else { "field-loading" }>
            <Spinner size=size />
            <span class="field-loading__message">{message}</span>
        </div>
    }
}

use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(
    #[prop(into)] message: String,
    #[prop(optional, into)] detail: Option<String>,
) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Warning>
            <strong>{message}</strong>
            {detail.map(|detail| view! { <span class="field-error__detail">{detail}</span> })}
        </MessageBar>
    }
}

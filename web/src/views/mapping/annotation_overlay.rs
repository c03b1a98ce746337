use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance, Label, LabelSize};

use crate::state::use_field_state;

/// Profile card for the focused annotation, with the action that turns it
/// into a dashboard zone.
#[component]
pub fn AnnotationOverlay() -> impl IntoView {
    let state = use_field_state();
    let navigate = use_navigate();
    let focused = Memo::new(move |_| state.with(|s| s.annotations().focused().cloned()));

    move || {
        let navigate = navigate.clone();
        focused.get().map(|annotation| {
            let at = annotation.at();
            let profile = annotation.profile().clone();
            let generate_report = move |_| {
                let promoted = state
                    .try_update(|s| s.promote_focused(&mut rand::thread_rng()))
                    .flatten();
                if promoted.is_some() {
                    navigate("/", Default::default());
                }
            };

            view! {
                <aside class="annotation-overlay">
                    <header class="annotation-overlay__header">
                        <Label size=LabelSize::Large>{profile.place.clone()}</Label>
                        <button
                            class="annotation-overlay__close"
                            on:click=move |_| state.update(|s| s.clear_focus())
                        >
                            "Close"
                        </button>
                    </header>
                    <p class="annotation-overlay__coords">{at.to_string()}</p>
                    <dl class="annotation-overlay__readings">
                        <dt>"Temperature"</dt>
                        <dd>{profile.temperature.clone()}</dd>
                        <dt>"Humidity"</dt>
                        <dd>{profile.humidity.clone()}</dd>
                        <dt>"Soil moisture"</dt>
                        <dd>{profile.moisture.clone()}</dd>
                        <dt>"Soil type"</dt>
                        <dd>{profile.soil_type.to_string()}</dd>
                    </dl>
                    <Button appearance=ButtonAppearance::Primary on_click=generate_report>
                        "Generate Report"
                    </Button>
                </aside>
            }
        })
    }
}

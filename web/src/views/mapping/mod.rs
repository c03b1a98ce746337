pub mod annotation_overlay;
pub mod field_map;

use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Button, ButtonAppearance};

use crate::{components::LoadingView, state::use_field_state};
use annotation_overlay::AnnotationOverlay;
use field_map::FieldMap;

#[component]
pub fn FieldMapping() -> impl IntoView {
    let state = use_field_state();
    let armed = Memo::new(move |_| state.with(|s| s.placement().is_armed()));
    let placing = Memo::new(move |_| state.with(|s| s.placement().in_flight() > 0));

    let search_lat = RwSignal::new(String::new());
    let search_long = RwSignal::new(String::new());
    let locate = move |_| {
        let lat = search_lat.get_untracked();
        let long = search_long.get_untracked();
        state.update(|s| {
            s.recenter(&lat, &long);
        });
    };

    view! {
        <div class="field-mapping">
            <div class="field-mapping__toolbar">
                <A href="/">"Back to dashboard"</A>
                <div class="field-mapping__search">
                    <input
                        type="text"
                        placeholder="Latitude"
                        prop:value=move || search_lat.get()
                        on:input=move |ev| search_lat.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Longitude"
                        prop:value=move || search_long.get()
                        on:input=move |ev| search_long.set(event_target_value(&ev))
                    />
                    <Button appearance=ButtonAppearance::Secondary on_click=locate>"Locate"</Button>
                </div>
                <button
                    class=move || if armed.get() { "placement-toggle placement-toggle--armed" } else { "placement-toggle" }
                    on:click=move |_| state.update(|s| s.toggle_placement())
                >
                    {move || if armed.get() { "Click on Map" } else { "Add Marker" }}
                </button>
                <Show when=move || placing.get()>
                    <LoadingView message="Fetching site data..." inline=true />
                </Show>
            </div>
            <div class="field-mapping__body">
                <FieldMap />
                <AnnotationOverlay />
            </div>
        </div>
    }
}

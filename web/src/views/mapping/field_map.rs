use leptos::{logging::warn, prelude::*};
use leptos_leaflet::{
    leaflet::{Map, MouseEvent},
    prelude::*,
};
use shared_types::{Annotation, LatLong};
use thaw::{Label, LabelSize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::{
    field::placement::{INITIAL_CENTER, INITIAL_ZOOM},
    state::{place_at, use_field_state},
};

#[component]
pub fn FieldMap() -> impl IntoView {
    let state = use_field_state();
    let annotations = Memo::new(move |_| state.with(|s| s.annotations().annotations().to_vec()));
    let center_request = Memo::new(move |_| state.with(|s| s.placement().center()));

    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    Effect::new(move |_| {
        let Some(request) = center_request.get() else {
            return;
        };
        if let Some(map) = map.get_untracked() {
            let target = Position::new(request.at.lat(), request.at.long());
            map.set_view(&target.as_lat_lng(), request.zoom);
        }
    });

    Effect::new(move |_| {
        let Some(map_instance) = map.get() else {
            return;
        };

        let cb: Closure<dyn FnMut(Event)> = Closure::wrap(Box::new(move |event: Event| {
            let click: MouseEvent = event.unchecked_into();
            let lat_lng = click.lat_lng();
            match LatLong::new(lat_lng.lat(), lat_lng.lng()) {
                Ok(at) => place_at(state, at),
                Err(err) => warn!("ignoring map click: {err}"),
            }
        }));

        let raw_map: &EventTarget = map_instance.unchecked_ref();
        if let Err(err) =
            raw_map.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        {
            warn!("could not attach map click listener: {err:?}");
        }

        cb.forget();
    });

    let (lat, long) = INITIAL_CENTER;

    view! {
        <MapContainer
            style="height: 100%; width: 100%; flex: 1"
            center=Position::new(lat, long)
            zoom=INITIAL_ZOOM
            set_view=true
            map=map.write_only()
        >
            <TileLayer
                url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            />
            {move || {
                annotations
                    .get()
                    .into_iter()
                    .map(|annotation| view! { <AnnotationMarker annotation=annotation /> })
                    .collect_view()
            }}
        </MapContainer>
    }
}

#[component]
fn AnnotationMarker(annotation: Annotation) -> impl IntoView {
    let state = use_field_state();
    let id = annotation.id();
    let at = annotation.at();
    let profile = annotation.profile().clone();

    // clicking the pin focuses it, same as a fresh placement
    let focus = MouseEvents::new().on_click(move |_| {
        state.update(|s| {
            s.select_annotation(id);
        });
    });

    view! {
        <Marker position=Position::new(at.lat(), at.long()) draggable=false mouse_events=focus>
            <Popup>
                <Label size=LabelSize::Medium>{profile.place.clone()}</Label>
                <p>{format!("{} · {}", profile.soil_type, profile.temperature)}</p>
            </Popup>
        </Marker>
    }
}

use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::ZoneRecord;

use crate::{
    components::{ErrorView, LoadingView},
    server::regional_weather,
    state::use_field_state,
    views::{status_class, zone_detail::ZoneDetail},
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_field_state();
    let zones = Memo::new(move |_| state.with(|s| s.zones().zones().to_vec()));
    let regional = Resource::new(|| (), |_| async move { regional_weather().await });

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"Field Health"</h1>
                <Suspense fallback=move || view! { <LoadingView message="Loading regional conditions..." inline=true /> }>
                    {move || regional.get().map(|result| match result {
                        Ok(Some(conditions)) => {
                            let reading = conditions.reading();
                            view! {
                                <div class="regional-weather">
                                    <span class="regional-weather__temperature">{reading.temperature}</span>
                                    <span class="regional-weather__humidity">{format!("{} humidity", reading.humidity)}</span>
                                </div>
                            }.into_any()
                        }
                        Ok(None) => view! { <div class="regional-weather regional-weather--empty"></div> }.into_any(),
                        Err(err) => view! {
                            <ErrorView message="Regional conditions unavailable" detail=err.to_string() />
                        }.into_any(),
                    })}
                </Suspense>
                <A href="/mapping">
                    <button class="btn-primary">"Map a new zone"</button>
                </A>
            </header>

            <section class="zone-grid">
                {move || {
                    let zones = zones.get();
                    if zones.is_empty() {
                        view! { <p class="zone-grid__empty">"No zones yet. Place a marker on the map to start one."</p> }.into_any()
                    } else {
                        zones
                            .into_iter()
                            .map(|zone| view! { <ZoneCard zone=zone /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>

            <ZoneDetail />
        </div>
    }
}

#[component]
fn ZoneCard(zone: ZoneRecord) -> impl IntoView {
    let state = use_field_state();
    let status = zone.status();
    let detail_id = zone.id.clone();
    let delete_id = zone.id.clone();

    view! {
        <article
            class=format!("zone-card zone-card--{}", status_class(status))
            on:click=move |_| {
                state.update(|s| {
                    s.select_zone_for_detail(&detail_id);
                });
            }
        >
            <header class="zone-card__header">
                <div>
                    <h3 class="zone-card__name">{zone.name.clone()}</h3>
                    <span class="zone-card__id">{zone.id.to_string()}</span>
                </div>
                <span class="zone-card__status">{status.label()}</span>
            </header>
            <div class="zone-card__score">{zone.score()}</div>
            <dl class="zone-card__readings">
                <dt>"Temp"</dt>
                <dd>{zone.temperature.clone()}</dd>
                <dt>"Humidity"</dt>
                <dd>{zone.humidity.clone()}</dd>
                <dt>"Moisture"</dt>
                <dd>{zone.moisture.clone()}</dd>
            </dl>
            <button
                class="zone-card__delete"
                on:click=move |ev| {
                    // keep the card's detail handler from firing on a removed zone
                    ev.stop_propagation();
                    state.update(|s| {
                        s.delete_zone(&delete_id);
                    });
                }
            >
                "Delete"
            </button>
        </article>
    }
}

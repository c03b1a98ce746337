use leptos::prelude::*;
use thaw::{Label, LabelSize};

use crate::{state::use_field_state, views::status_class};

/// Side panel for the zone picked on the dashboard. Renders nothing while no
/// zone is selected or after the selected zone was deleted.
#[component]
pub fn ZoneDetail() -> impl IntoView {
    let state = use_field_state();
    let detail = Memo::new(move |_| state.with(|s| s.zones().detail().cloned()));

    move || {
        detail.get().map(|zone| {
            let status = zone.status();
            let score = zone.score();
            view! {
                <aside class=format!("zone-detail zone-detail--{}", status_class(status))>
                    <header class="zone-detail__header">
                        <Label size=LabelSize::Large>{format!("{} Detail", zone.name)}</Label>
                        <button
                            class="zone-detail__close"
                            on:click=move |_| state.update(|s| s.close_zone_detail())
                        >
                            "Close"
                        </button>
                    </header>
                    <p class="zone-detail__id">{zone.id.to_string()}</p>
                    <div class="zone-detail__summary">
                        <span class="zone-detail__score">{score}</span>
                        <span class="zone-detail__status">{status.headline()}</span>
                    </div>
                    <dl class="zone-detail__readings">
                        <dt>"Temperature"</dt>
                        <dd>{zone.temperature.clone()}</dd>
                        <dt>"Humidity"</dt>
                        <dd>{zone.humidity.clone()}</dd>
                        <dt>"Soil moisture"</dt>
                        <dd>{zone.moisture.clone()}</dd>
                    </dl>
                </aside>
            }
        })
    }
}

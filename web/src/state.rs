use leptos::{logging::warn, prelude::*, task::spawn_local};
use shared_types::{LatLong, SiteProfile};

use crate::{field::FieldSession, server::enrich_site};

/// The app-wide session, shared through context.
pub type FieldState = RwSignal<FieldSession>;

pub fn provide_field_state() -> FieldState {
    let state = RwSignal::new(FieldSession::default());
    provide_context(state);
    state
}

pub fn use_field_state() -> FieldState {
    expect_context::<FieldState>()
}

/// Routes a map click through the session. When placement is armed the site
/// is enriched in the background and the annotation lands once the profile
/// is complete; disarming meanwhile does not stop it.
pub fn place_at(state: FieldState, at: LatLong) {
    let Some(ticket) = state.try_update(|s| s.click_at(at)).flatten() else {
        return;
    };

    spawn_local(async move {
        let profile = match enrich_site(at.lat(), at.long()).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!("site enrichment failed for {at}: {err}");
                SiteProfile::unavailable(&mut rand::thread_rng())
            }
        };
        state.update(|s| {
            s.complete_placement(ticket, profile);
        });
    });
}

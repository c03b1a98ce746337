use std::future::Future;

use rand::Rng;
use shared_types::{AnnotationId, LatLong, SiteProfile, ZoneId, ZoneRecord};

use super::{
    assessment, AnnotationStore, PlacementController, PlacementTicket, ZoneInventory,
};

/// Application state for the field-mapping screens. Owned by the app root
/// and handed to views through context; views only read it and send intents.
#[derive(Debug, Clone)]
pub struct FieldSession {
    annotations: AnnotationStore,
    placement: PlacementController,
    zones: ZoneInventory,
}

impl Default for FieldSession {
    fn default() -> Self {
        Self::new(ZoneInventory::seeded())
    }
}

impl FieldSession {
    pub fn new(zones: ZoneInventory) -> Self {
        Self {
            annotations: AnnotationStore::new(),
            placement: PlacementController::new(),
            zones,
        }
    }

    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    pub fn placement(&self) -> &PlacementController {
        &self.placement
    }

    pub fn zones(&self) -> &ZoneInventory {
        &self.zones
    }

    pub fn arm_placement(&mut self) {
        self.placement.arm();
    }

    pub fn disarm_placement(&mut self) {
        self.placement.disarm();
    }

    pub fn toggle_placement(&mut self) {
        self.placement.toggle();
    }

    /// First half of a placement: returns a ticket when the click lands in
    /// armed mode. The caller enriches `ticket.at()` and hands the profile to
    /// [`FieldSession::complete_placement`].
    pub fn click_at(&mut self, at: LatLong) -> Option<PlacementTicket> {
        self.placement.handle_click(at)
    }

    /// Second half of a placement: appends and focuses the annotation and
    /// leaves armed mode.
    pub fn complete_placement(
        &mut self,
        ticket: PlacementTicket,
        profile: SiteProfile,
    ) -> AnnotationId {
        let at = self.placement.settle(ticket);
        self.annotations.record(at, profile)
    }

    /// Click-to-annotation in one call for callers that own the session
    /// across the enrichment await.
    pub async fn place_with<F, Fut>(&mut self, at: LatLong, enrich: F) -> Option<AnnotationId>
    where
        F: FnOnce(LatLong) -> Fut,
        Fut: Future<Output = SiteProfile>,
    {
        let ticket = self.click_at(at)?;
        let profile = enrich(ticket.at()).await;
        Some(self.complete_placement(ticket, profile))
    }

    pub fn select_annotation(&mut self, id: AnnotationId) -> bool {
        self.annotations.select(id)
    }

    pub fn clear_focus(&mut self) {
        self.annotations.clear_focus();
    }

    pub fn recenter(&mut self, lat: &str, long: &str) -> bool {
        self.placement.recenter(lat, long)
    }

    /// Assesses the focused annotation and puts the resulting zone at the
    /// front of the inventory. Does nothing without a focused annotation.
    pub fn promote_focused<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ZoneId> {
        let annotation = self.annotations.focused()?;
        let zones = &self.zones;
        let zone = assessment::assess(annotation.profile(), |id| zones.contains(id), rng);
        let id = zone.id.clone();
        self.zones.promote(zone).then_some(id)
    }

    pub fn delete_zone(&mut self, id: &ZoneId) -> Option<ZoneRecord> {
        self.zones.remove(id)
    }

    pub fn select_zone_for_detail(&mut self, id: &ZoneId) -> bool {
        self.zones.select_for_detail(id)
    }

    pub fn close_zone_detail(&mut self) {
        self.zones.close_detail();
    }
}

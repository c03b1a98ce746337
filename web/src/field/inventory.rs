use shared_types::{ZoneId, ZoneRecord};

use super::seed::seed_zones;

/// Dashboard zones, newest first, plus the zone open in the detail view.
///
/// The detail view holds an id, never a copy, and removing that zone clears
/// it in the same call.
#[derive(Debug, Clone, Default)]
pub struct ZoneInventory {
    zones: Vec<ZoneRecord>,
    detail: Option<ZoneId>,
}

impl ZoneInventory {
    pub fn new(zones: Vec<ZoneRecord>) -> Self {
        let mut inventory = Self::default();
        // seed order is display order, so insert oldest first
        for zone in zones.into_iter().rev() {
            inventory.promote(zone);
        }
        inventory
    }

    pub fn seeded() -> Self {
        Self::new(seed_zones())
    }

    /// Puts `zone` at the front. A zone whose id is already present is
    /// refused, keeping ids unique.
    pub fn promote(&mut self, zone: ZoneRecord) -> bool {
        if self.contains(&zone.id) {
            return false;
        }
        self.zones.insert(0, zone);
        true
    }

    /// Removes the zone with `id`, closing the detail view if it showed it.
    /// Unknown ids are a no-op.
    pub fn remove(&mut self, id: &ZoneId) -> Option<ZoneRecord> {
        let index = self.zones.iter().position(|z| &z.id == id)?;
        if self.detail.as_ref() == Some(id) {
            self.detail = None;
        }
        Some(self.zones.remove(index))
    }

    pub fn select_for_detail(&mut self, id: &ZoneId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.detail = Some(id.clone());
        true
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn detail(&self) -> Option<&ZoneRecord> {
        self.detail.as_ref().and_then(|id| self.get(id))
    }

    #[cfg(test)]
    fn detail_id(&self) -> Option<&ZoneId> {
        self.detail.as_ref()
    }

    pub fn get(&self, id: &ZoneId) -> Option<&ZoneRecord> {
        self.zones.iter().find(|z| &z.id == id)
    }

    pub fn contains(&self, id: &ZoneId) -> bool {
        self.get(id).is_some()
    }

    pub fn zones(&self) -> &[ZoneRecord] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: &str, score: u8) -> ZoneRecord {
        ZoneRecord::new(id.into(), format!("Zone {id}"), score, "N/A", "N/A", "50%")
    }

    fn ids(inventory: &ZoneInventory) -> Vec<&str> {
        inventory.zones().iter().map(|z| z.id.as_str()).collect()
    }

    #[test]
    fn promote_puts_newest_first() {
        let mut inventory = ZoneInventory::default();
        inventory.promote(zone("Z1", 70));
        inventory.promote(zone("Z2", 90));
        assert_eq!(ids(&inventory), vec!["Z2", "Z1"]);
    }

    #[test]
    fn promote_refuses_duplicate_ids() {
        let mut inventory = ZoneInventory::default();
        assert!(inventory.promote(zone("Z1", 70)));
        assert!(!inventory.promote(zone("Z1", 95)));
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.zones()[0].score(), 70);
    }

    #[test]
    fn removing_the_detailed_zone_clears_the_detail_view() {
        let mut inventory = ZoneInventory::default();
        inventory.promote(zone("Z1", 70));
        inventory.promote(zone("Z2", 90));
        assert!(inventory.select_for_detail(&"Z1".into()));

        let removed = inventory.remove(&"Z1".into()).unwrap();
        assert_eq!(removed.id.as_str(), "Z1");
        assert!(inventory.detail().is_none());
        assert!(inventory.detail_id().is_none());
        assert_eq!(ids(&inventory), vec!["Z2"]);
    }

    #[test]
    fn removing_another_zone_keeps_the_detail_view() {
        let mut inventory = ZoneInventory::default();
        inventory.promote(zone("Z1", 70));
        inventory.promote(zone("Z2", 90));
        inventory.select_for_detail(&"Z2".into());

        inventory.remove(&"Z1".into());
        assert_eq!(inventory.detail().map(|z| z.id.as_str()), Some("Z2"));
    }

    #[test]
    fn removing_an_absent_id_changes_nothing() {
        let mut inventory = ZoneInventory::default();
        inventory.promote(zone("Z1", 70));
        inventory.select_for_detail(&"Z1".into());

        assert!(inventory.remove(&"nope".into()).is_none());
        assert_eq!(ids(&inventory), vec!["Z1"]);
        assert!(inventory.detail().is_some());
    }

    #[test]
    fn detail_selection_requires_a_known_zone() {
        let mut inventory = ZoneInventory::default();
        assert!(!inventory.select_for_detail(&"Z9".into()));
        assert!(inventory.detail().is_none());
    }

    #[test]
    fn new_keeps_the_given_order() {
        let inventory = ZoneInventory::new(vec![zone("A", 1), zone("B", 2), zone("C", 3)]);
        assert_eq!(ids(&inventory), vec!["A", "B", "C"]);
    }
}

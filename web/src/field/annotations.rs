use shared_types::{Annotation, AnnotationId, LatLong, SiteProfile};

/// Placed map annotations in insertion order plus the one under inspection.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
    focused: Option<AnnotationId>,
    last_id: u64,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fully enriched annotation and focuses it.
    /// Only reachable through a settled placement.
    pub(super) fn record(&mut self, at: LatLong, profile: SiteProfile) -> AnnotationId {
        self.last_id += 1;
        let id = AnnotationId::new(self.last_id);
        self.annotations.push(Annotation::new(id, at, profile));
        self.focused = Some(id);
        id
    }

    /// Focuses `id`. Unknown ids leave the focus untouched.
    pub fn select(&mut self, id: AnnotationId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.focused = Some(id);
        true
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<&Annotation> {
        self.focused.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id() == id)
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn profile() -> SiteProfile {
        SiteProfile::unavailable(&mut StdRng::seed_from_u64(1))
    }

    fn at(lat: f64, long: f64) -> LatLong {
        LatLong::new(lat, long).unwrap()
    }

    #[test]
    fn record_appends_in_order_and_focuses_newest() {
        let mut store = AnnotationStore::new();
        let first = store.record(at(1.0, 1.0), profile());
        let second = store.record(at(2.0, 2.0), profile());

        assert_ne!(first, second);
        let order: Vec<_> = store.annotations().iter().map(|a| a.id()).collect();
        assert_eq!(order, vec![first, second]);
        assert_eq!(store.focused().map(|a| a.id()), Some(second));
    }

    #[test]
    fn ids_increase_monotonically() {
        let mut store = AnnotationStore::new();
        let ids: Vec<_> = (0..5)
            .map(|i| store.record(at(i as f64, 0.0), profile()))
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn select_switches_focus() {
        let mut store = AnnotationStore::new();
        let first = store.record(at(1.0, 1.0), profile());
        store.record(at(2.0, 2.0), profile());

        assert!(store.select(first));
        assert_eq!(store.focused().map(|a| a.at()), Some(at(1.0, 1.0)));
    }

    #[test]
    fn select_of_unknown_id_is_ignored() {
        let mut store = AnnotationStore::new();
        let only = store.record(at(1.0, 1.0), profile());

        assert!(!store.select(AnnotationId::new(99)));
        assert_eq!(store.focused().map(|a| a.id()), Some(only));
    }

    #[test]
    fn clear_focus_keeps_annotations() {
        let mut store = AnnotationStore::new();
        store.record(at(1.0, 1.0), profile());
        store.clear_focus();

        assert!(store.focused().is_none());
        assert_eq!(store.len(), 1);
    }
}

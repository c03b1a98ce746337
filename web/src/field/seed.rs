use shared_types::ZoneRecord;

/// Zones the dashboard shows before anything is promoted.
pub fn seed_zones() -> Vec<ZoneRecord> {
    vec![
        ZoneRecord::new(
            "ZN-8842-NP".into(),
            "North Plateau - Alpha",
            72,
            "32.4°C",
            "42%",
            "18%",
        ),
        ZoneRecord::new(
            "ZN-1120-SR".into(),
            "South River - Delta",
            88,
            "24.1°C",
            "68%",
            "72%",
        ),
        ZoneRecord::new(
            "ZN-5491-ER".into(),
            "East Ridge - Gamma",
            61,
            "28.9°C",
            "55%",
            "41%",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ZoneStatus;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let zones = seed_zones();
        let ids: HashSet<_> = zones.iter().map(|z| z.id.clone()).collect();
        assert_eq!(ids.len(), zones.len());
    }

    #[test]
    fn seed_statuses_follow_scores() {
        let statuses: Vec<_> = seed_zones().iter().map(|z| z.status()).collect();
        assert_eq!(
            statuses,
            vec![ZoneStatus::Moderate, ZoneStatus::Healthy, ZoneStatus::HighRisk]
        );
    }
}

use std::ops::Range;

use rand::Rng;
use shared_types::{SiteProfile, ZoneId, ZoneRecord};

/// Placeholder health scores are drawn uniformly from here.
pub const SCORE_RANGE: Range<u8> = 60..100;

const ID_NUMBERS: Range<u32> = 1000..10000;

/// Builds the zone record a focused annotation is promoted into.
///
/// The score is a random placeholder. `taken` reports ids already in use so
/// the new id never collides with an existing zone.
pub fn assess<R, F>(profile: &SiteProfile, taken: F, rng: &mut R) -> ZoneRecord
where
    R: Rng + ?Sized,
    F: Fn(&ZoneId) -> bool,
{
    let score = rng.gen_range(SCORE_RANGE);
    let id = fresh_zone_id(taken, rng);
    assess_with_score(profile, id, score)
}

pub fn assess_with_score(profile: &SiteProfile, id: ZoneId, score: u8) -> ZoneRecord {
    ZoneRecord::new(
        id,
        profile.zone_name(),
        score,
        profile.temperature.clone(),
        profile.humidity.clone(),
        profile.moisture.clone(),
    )
}

/// `ZN-<4 digits>-NEW`, starting at a random number and walking forward
/// past any ids in use. If every 4-digit id is taken the number grows.
pub fn fresh_zone_id<R, F>(taken: F, rng: &mut R) -> ZoneId
where
    R: Rng + ?Sized,
    F: Fn(&ZoneId) -> bool,
{
    let span = ID_NUMBERS.end - ID_NUMBERS.start;
    let offset = rng.gen_range(0..span);

    let mut attempt = 0u32;
    loop {
        let number = if attempt < span {
            ID_NUMBERS.start + (offset + attempt) % span
        } else {
            ID_NUMBERS.end + (attempt - span)
        };
        let id = ZoneId::new(format!("ZN-{number}-NEW"));
        if !taken(&id) {
            return id;
        }
        attempt += 1;
    }
}

pub mod dashboard;
pub mod mapping;
pub mod zone_detail;

use shared_types::ZoneStatus;

pub(crate) fn status_class(status: ZoneStatus) -> &'static str {
    match status {
        ZoneStatus::Healthy => "healthy",
        ZoneStatus::Moderate => "moderate",
        ZoneStatus::HighRisk => "high-risk",
    }
}

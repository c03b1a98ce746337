use serde::{Deserialize, Serialize};

use crate::{LatLong, SiteProfile};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AnnotationId(u64);

impl AnnotationId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// A placed, enriched map point. Nothing about it changes after creation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Annotation {
    id: AnnotationId,
    at: LatLong,
    profile: SiteProfile,
}

impl Annotation {
    pub fn new(id: AnnotationId, at: LatLong, profile: SiteProfile) -> Self {
        Self { id, at, profile }
    }

    pub fn id(&self) -> AnnotationId {
        self.id
    }

    pub fn at(&self) -> LatLong {
        self.at
    }

    pub fn profile(&self) -> &SiteProfile {
        &self.profile
    }
}

use shared_types::LatLong;

/// Where the map opens.
pub const INITIAL_CENTER: (f64, f64) = (37.7749, -122.4194);
pub const INITIAL_ZOOM: f64 = 13.0;
/// Zoom the map flies to when the user recentres by coordinates.
pub const RECENTER_ZOOM: f64 = 15.0;

/// `arm: Idle -> Armed`, `click: Armed -> Placing -> Idle`, `disarm: Armed -> Idle`.
///
/// `Placing` means at least one enrichment is in flight and the next click
/// will not place anything. Arming again while placing is allowed; the
/// pending placement still lands and disarms when it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    #[default]
    Idle,
    Armed,
    Placing,
}

/// Proof that a click was accepted in armed mode. Settling it is the only
/// way an annotation gets created.
#[derive(Debug, PartialEq)]
#[must_use = "a placement ticket must be settled with its site profile"]
pub struct PlacementTicket {
    at: LatLong,
}

impl PlacementTicket {
    pub fn at(&self) -> LatLong {
        self.at
    }
}

/// A pending viewport move. The generation makes repeated requests for the
/// same point distinct, so the map reacts every time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterRequest {
    pub at: LatLong,
    pub zoom: f64,
    pub generation: u32,
}

#[derive(Debug, Clone, Default)]
pub struct PlacementController {
    mode: PlacementMode,
    in_flight: usize,
    center: Option<CenterRequest>,
}

impl PlacementController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn is_armed(&self) -> bool {
        self.mode == PlacementMode::Armed
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn arm(&mut self) {
        self.mode = PlacementMode::Armed;
    }

    /// Leaves armed mode. Does nothing to placements already in flight.
    pub fn disarm(&mut self) {
        if self.mode == PlacementMode::Armed {
            self.mode = self.resting_mode();
        }
    }

    pub fn toggle(&mut self) {
        if self.is_armed() {
            self.disarm();
        } else {
            self.arm();
        }
    }

    /// Accepts a map click only in armed mode.
    pub fn handle_click(&mut self, at: LatLong) -> Option<PlacementTicket> {
        if !self.is_armed() {
            return None;
        }
        self.in_flight += 1;
        self.mode = PlacementMode::Placing;
        Some(PlacementTicket { at })
    }

    /// Closes out a placement. Armed mode always ends here, even if the user
    /// re-armed while the enrichment was running.
    pub fn settle(&mut self, ticket: PlacementTicket) -> LatLong {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.mode = self.resting_mode();
        ticket.at
    }

    /// Requests a viewport move from two free-text fields. Input that does
    /// not parse to a valid coordinate is ignored and the previous request
    /// stays in place.
    pub fn recenter(&mut self, lat: &str, long: &str) -> bool {
        let Some(at) = LatLong::parse(lat, long) else {
            return false;
        };
        let generation = self.center.map_or(1, |c| c.generation.wrapping_add(1));
        self.center = Some(CenterRequest {
            at,
            zoom: RECENTER_ZOOM,
            generation,
        });
        true
    }

    pub fn center(&self) -> Option<CenterRequest> {
        self.center
    }

    fn resting_mode(&self) -> PlacementMode {
        if self.in_flight > 0 {
            PlacementMode::Placing
        } else {
            PlacementMode::Idle
        }
    }
}

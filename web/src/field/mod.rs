//! Field annotation state, free of any rendering concerns.
//!
//! Each slice owns its data and is only changed through its own methods;
//! [`FieldSession`] composes them and is the single place the UI sends
//! intents to.

pub mod annotations;
pub mod assessment;
pub mod inventory;
pub mod placement;
pub mod seed;
pub mod session;

pub use annotations::AnnotationStore;
pub use inventory::ZoneInventory;
pub use placement::{CenterRequest, PlacementController, PlacementMode, PlacementTicket};
pub use session::FieldSession;

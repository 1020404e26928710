//! Race simulation module
//!
//! All race logic lives here. This module has no rendering or platform
//! dependencies:
//! - Variable timestep supplied by the driver
//! - Seeded RNG only
//! - Stable iteration order (player first, then racers in spawn order)

pub mod path;
pub mod player;
pub mod race;
pub mod racer;
pub mod steering;
pub mod track;

pub use path::{Advance, RaceProgress, WaypointPath};
pub use player::{Player, PlayerInput};
pub use race::{HudView, Race, RaceBuilder};
pub use racer::Racer;
pub use steering::{
    Arrive, PathFollowing, Seek, Steering, SteeringBehavior, SteeringState, integrate,
    tapered_speed,
};
pub use track::{OpenTrack, Rect, TrackMask, TrackProbe, TrackTransform};

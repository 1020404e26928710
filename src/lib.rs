//! Slipstream - actor/component core for a 2D waypoint racer
//!
//! Core modules:
//! - `math`: Vectors, quaternions and matrices with fail-soft edge cases
//! - `ecs`: Actors and their Transform/Shape/Texture components
//! - `sim`: Steering, race progression and the race manager
//! - `renderer`: Draw-target seam and GPU instance records
//! - `resources`: Shared texture handles
//! - `settings`: Data-driven race tuning

pub mod ecs;
pub mod error;
pub mod leaderboard;
pub mod math;
pub mod renderer;
pub mod resources;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use settings::{RaceSettings, SettingsError};

/// Race tuning constants
pub mod consts {
    /// Distance under which a waypoint counts as reached
    pub const WAYPOINT_RADIUS: f32 = 50.0;

    /// Steering taper radii
    pub const PATH_SLOWING_RADIUS: f32 = 200.0;
    pub const ARRIVE_SLOWING_RADIUS: f32 = 150.0;

    /// Racer defaults (pixels/s)
    pub const RACER_MAX_SPEED: f32 = 250.0;

    /// Player defaults
    pub const PLAYER_MAX_SPEED: f32 = 300.0;
    pub const PLAYER_ACCELERATION: f32 = 500.0; // pixels/s²
    pub const PLAYER_FRICTION: f32 = 0.98; // per frame

    /// Texture substituted for unknown keys
    pub const DEFAULT_TEXTURE_KEY: &str = "default";
}

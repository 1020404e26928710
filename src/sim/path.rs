//! Shared waypoint path and per-actor race progress

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::consts::WAYPOINT_RADIUS;
use crate::error::SimError;
use crate::math::Vector2;

/// Read-only closed loop of waypoints, shared by every actor in a race
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointPath {
    points: Arc<[Vector2]>,
    arrival_radius: f32,
}

impl WaypointPath {
    pub fn new(points: Vec<Vector2>) -> Result<Self, SimError> {
        if points.is_empty() {
            return Err(SimError::EmptyPath);
        }
        Ok(Self {
            points: points.into(),
            arrival_radius: WAYPOINT_RADIUS,
        })
    }

    /// Distance under which a waypoint counts as reached
    pub fn with_arrival_radius(mut self, radius: f32) -> Self {
        self.arrival_radius = radius;
        self
    }

    pub fn arrival_radius(&self) -> f32 {
        self.arrival_radius
    }

    /// Never zero
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// Waypoint at `index`, wrapping around the loop
    pub fn get(&self, index: usize) -> Vector2 {
        self.points[index % self.points.len()]
    }

    /// Index of the waypoint before `index`, wrapping to the last one
    pub fn previous_index(&self, index: usize) -> usize {
        let n = self.points.len();
        (index % n + n - 1) % n
    }

    pub fn shares_points_with(&self, other: &WaypointPath) -> bool {
        Arc::ptr_eq(&self.points, &other.points)
    }
}

/// What one progression step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Target not reached yet
    Holding,
    /// Moved on to the next waypoint
    Waypoint,
    /// Wrapped back to the first waypoint
    Lap,
}

/// Waypoint index and completed laps of one actor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceProgress {
    /// Always in `[0, path.len())`
    pub waypoint_index: usize,
    pub lap_count: u32,
}

impl RaceProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current target waypoint
    pub fn target(&self, path: &WaypointPath) -> Vector2 {
        path.get(self.waypoint_index)
    }

    /// Advance at most one waypoint if `position` is within the arrival radius.
    ///
    /// No hysteresis: the check is a pure function of position and index.
    pub fn advance(&mut self, position: Vector2, path: &WaypointPath) -> Advance {
        let target = self.target(path);
        if Vector2::distance(position, target) >= path.arrival_radius() {
            return Advance::Holding;
        }

        self.waypoint_index = (self.waypoint_index + 1) % path.len();
        if self.waypoint_index == 0 {
            self.lap_count += 1;
            Advance::Lap
        } else {
            Advance::Waypoint
        }
    }

    /// Progress score used for ranking
    pub fn score(&self, waypoint_count: usize) -> u64 {
        self.lap_count as u64 * waypoint_count as u64 + self.waypoint_index as u64
    }
}

//! Steering behaviors
//!
//! Every behavior uses the same arrival policy: desired speed is the max
//! speed, scaled by `distance / slowing_radius` inside the slowing radius,
//! and a body sitting exactly on its target stops dead. Steering force is
//! `desired - velocity`, applied over `dt` and clamped to the max speed.

use crate::consts::{ARRIVE_SLOWING_RADIUS, PATH_SLOWING_RADIUS};
use crate::math::{EPSILON, Vector2};

use super::path::WaypointPath;

/// Kinematic state a behavior reads and writes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringState {
    pub position: Vector2,
    pub velocity: Vector2,
    pub max_speed: f32,
    /// Current target on the actor's path, already advanced this frame
    pub waypoint_index: usize,
}

pub trait SteeringBehavior {
    fn apply(&self, state: &mut SteeringState, dt: f32);
}

/// Desired speed at `distance` from the target.
///
/// A non-positive radius disables tapering.
#[inline]
pub fn tapered_speed(max_speed: f32, distance: f32, slowing_radius: f32) -> f32 {
    if slowing_radius > 0.0 && distance < slowing_radius {
        max_speed * (distance / slowing_radius)
    } else {
        max_speed
    }
}

/// Apply a steering force toward `desired` velocity and move
#[inline]
pub fn integrate(state: &mut SteeringState, desired: Vector2, dt: f32) {
    let steering = desired - state.velocity;
    state.velocity += steering * dt;
    if state.velocity.length() > state.max_speed {
        state.velocity = state.velocity.normalized() * state.max_speed;
    }
    state.position += state.velocity * dt;
}

fn steer_toward(state: &mut SteeringState, target: Vector2, slowing_radius: f32, dt: f32) {
    let offset = target - state.position;
    let distance = offset.length();
    if distance <= EPSILON {
        state.velocity = Vector2::ZERO;
        return;
    }

    let speed = tapered_speed(state.max_speed, distance, slowing_radius);
    let desired = offset.normalized() * speed;
    integrate(state, desired, dt);
}

/// Full-speed approach with no taper
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seek {
    pub target: Vector2,
}

impl Seek {
    pub fn new(target: Vector2) -> Self {
        Self { target }
    }
}

impl SteeringBehavior for Seek {
    fn apply(&self, state: &mut SteeringState, dt: f32) {
        steer_toward(state, self.target, 0.0, dt);
    }
}

/// Tapered approach to a fixed point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrive {
    pub target: Vector2,
    pub slowing_radius: f32,
}

impl Arrive {
    pub fn new(target: Vector2) -> Self {
        Self {
            target,
            slowing_radius: ARRIVE_SLOWING_RADIUS,
        }
    }

    pub fn with_slowing_radius(mut self, radius: f32) -> Self {
        self.slowing_radius = radius;
        self
    }
}

impl SteeringBehavior for Arrive {
    fn apply(&self, state: &mut SteeringState, dt: f32) {
        steer_toward(state, self.target, self.slowing_radius, dt);
    }
}

/// Tapered approach to the current waypoint of a shared path.
///
/// Reads the waypoint index from the state; advancing it is the owner's job.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFollowing {
    pub path: WaypointPath,
    pub slowing_radius: f32,
}

impl PathFollowing {
    pub fn new(path: WaypointPath) -> Self {
        Self {
            path,
            slowing_radius: PATH_SLOWING_RADIUS,
        }
    }

    pub fn with_slowing_radius(mut self, radius: f32) -> Self {
        self.slowing_radius = radius;
        self
    }
}

impl SteeringBehavior for PathFollowing {
    fn apply(&self, state: &mut SteeringState, dt: f32) {
        let target = self.path.get(state.waypoint_index);
        steer_toward(state, target, self.slowing_radius, dt);
    }
}

/// The closed set of behaviors an actor can carry
#[derive(Debug, Clone, PartialEq)]
pub enum Steering {
    Seek(Seek),
    Arrive(Arrive),
    PathFollowing(PathFollowing),
}

impl SteeringBehavior for Steering {
    fn apply(&self, state: &mut SteeringState, dt: f32) {
        match self {
            Steering::Seek(b) => b.apply(state, dt),
            Steering::Arrive(b) => b.apply(state, dt),
            Steering::PathFollowing(b) => b.apply(state, dt),
        }
    }
}

impl From<Seek> for Steering {
    fn from(b: Seek) -> Self {
        Steering::Seek(b)
    }
}

impl From<Arrive> for Steering {
    fn from(b: Arrive) -> Self {
        Steering::Arrive(b)
    }
}

impl From<PathFollowing> for Steering {
    fn from(b: PathFollowing) -> Self {
        Steering::PathFollowing(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(x: f32, y: f32, max_speed: f32) -> SteeringState {
        SteeringState {
            position: Vector2::new(x, y),
            velocity: Vector2::ZERO,
            max_speed,
            waypoint_index: 0,
        }
    }

    #[test]
    fn test_taper() {
        assert_eq!(tapered_speed(100.0, 50.0, 200.0), 25.0);
        assert_eq!(tapered_speed(100.0, 250.0, 200.0), 100.0);
        assert_eq!(tapered_speed(100.0, 10.0, 0.0), 100.0);
    }

    #[test]
    fn test_arrive_at_target_stops_exactly() {
        let mut state = at(3.0, 4.0, 100.0);
        state.velocity = Vector2::new(12.0, -7.0);
        Arrive::new(Vector2::new(3.0, 4.0)).apply(&mut state, 0.016);
        assert_eq!(state.velocity.x, 0.0);
        assert_eq!(state.velocity.y, 0.0);
        assert!(!state.position.x.is_nan());
    }

    #[test]
    fn test_arrive_default_slowing_radius() {
        // 75 units out is half of the 150-unit default radius
        let mut state = at(0.0, 0.0, 100.0);
        Arrive::new(Vector2::new(75.0, 0.0)).apply(&mut state, 1.0);
        assert!((state.velocity.x - 50.0).abs() < 1e-4);
        assert!(state.velocity.y.abs() < 1e-6);
    }

    #[test]
    fn test_path_following_ramps_up_from_standstill() {
        let path = WaypointPath::new(vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0),
        ])
        .unwrap();
        let mut state = at(0.0, 0.0, 5.0);
        state.waypoint_index = 1;

        PathFollowing::new(path).apply(&mut state, 1.0);
        assert!(state.velocity.x > 0.0);
        assert!(state.position.x > 0.0);
        assert!(state.position.x <= 5.0);
        assert!(state.position.y.abs() < 1e-6);
    }

    #[test]
    fn test_seek_has_no_taper() {
        let mut state = at(0.0, 0.0, 10.0);
        Seek::new(Vector2::new(20.0, 0.0)).apply(&mut state, 1.0);
        // Full desired speed reached in one unit step
        assert!((state.velocity.x - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_enum_dispatch_matches_behavior() {
        let arrive = Arrive::new(Vector2::new(100.0, 0.0)).with_slowing_radius(50.0);
        let mut a = at(0.0, 0.0, 30.0);
        let mut b = a;
        arrive.apply(&mut a, 0.1);
        Steering::from(arrive).apply(&mut b, 0.1);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_speed_never_exceeds_max(
            tx in -1000.0f32..1000.0,
            ty in -1000.0f32..1000.0,
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            max_speed in 1.0f32..400.0,
            dt in 0.0f32..0.1,
        ) {
            let mut state = at(0.0, 0.0, max_speed);
            state.velocity = Vector2::new(vx, vy);
            Arrive::new(Vector2::new(tx, ty)).apply(&mut state, dt);
            prop_assert!(state.velocity.length() <= max_speed + 1e-3);
            prop_assert!(!state.velocity.x.is_nan() && !state.velocity.y.is_nan());
        }
    }
}

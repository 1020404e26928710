//! AI-driven racer

use crate::ecs::{Actor, Entity};
use crate::error::SimError;
use crate::math::Vector2;
use crate::renderer::DrawTarget;

use super::path::{Advance, RaceProgress, WaypointPath};
use super::steering::{Steering, SteeringBehavior, SteeringState};

/// An actor steered along the race path by its behaviors
#[derive(Debug, Clone)]
pub struct Racer {
    actor: Actor,
    path: WaypointPath,
    progress: RaceProgress,
    velocity: Vector2,
    max_speed: f32,
    behaviors: Vec<Steering>,
    /// 1-indexed race position, 0 until the first leaderboard pass
    place: usize,
}

impl Racer {
    pub fn new(actor: Actor, path: WaypointPath, max_speed: f32) -> Self {
        Self {
            actor,
            path,
            progress: RaceProgress::new(),
            velocity: Vector2::ZERO,
            max_speed,
            behaviors: Vec::new(),
            place: 0,
        }
    }

    pub fn with_behavior(mut self, behavior: impl Into<Steering>) -> Self {
        self.add_behavior(behavior);
        self
    }

    /// Behaviors run in insertion order
    pub fn add_behavior(&mut self, behavior: impl Into<Steering>) {
        self.behaviors.push(behavior.into());
    }

    pub fn behaviors(&self) -> &[Steering] {
        &self.behaviors
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn path(&self) -> &WaypointPath {
        &self.path
    }

    pub fn progress(&self) -> RaceProgress {
        self.progress
    }

    pub fn set_progress(&mut self, progress: RaceProgress) {
        self.progress = progress;
    }

    /// Current target waypoint
    pub fn next_waypoint(&self) -> Vector2 {
        self.progress.target(&self.path)
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed;
    }

    pub fn place(&self) -> usize {
        self.place
    }

    pub fn set_place(&mut self, place: usize) {
        self.place = place;
    }

    pub fn position(&self) -> Result<Vector2, SimError> {
        Ok(self.actor.transform()?.position)
    }
}

impl Entity for Racer {
    fn name(&self) -> &str {
        self.actor.name()
    }

    fn begin_play(&mut self) {
        self.actor.begin_play();
    }

    /// Progression first, then steering toward the (possibly new) target,
    /// then the actor syncs its shape to the moved transform.
    fn update(&mut self, dt: f32) -> Result<(), SimError> {
        let position = self.position()?;

        if self.progress.advance(position, &self.path) == Advance::Lap {
            log::info!(
                "{} completed lap {}",
                self.actor.name(),
                self.progress.lap_count
            );
        }

        let mut state = SteeringState {
            position,
            velocity: self.velocity,
            max_speed: self.max_speed,
            waypoint_index: self.progress.waypoint_index,
        };
        for behavior in &self.behaviors {
            behavior.apply(&mut state, dt);
        }

        self.velocity = state.velocity;
        self.actor.transform_mut()?.set_position(state.position);
        self.actor.update(dt)
    }

    fn render(&self, target: &dyn DrawTarget) {
        self.actor.render(target);
    }

    fn destroy(&mut self) {
        self.actor.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{ComponentKind, Shape, Transform};
    use crate::sim::PathFollowing;

    fn square() -> WaypointPath {
        WaypointPath::new(vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0),
        ])
        .unwrap()
    }

    fn racer_at(path: WaypointPath, position: Vector2, max_speed: f32) -> Racer {
        let mut actor = Actor::new("Bot 1");
        actor.transform_mut().unwrap().set_position(position);
        Racer::new(actor, path.clone(), max_speed).with_behavior(PathFollowing::new(path))
    }

    #[test]
    fn test_first_frame_from_standstill() {
        let mut racer = racer_at(square(), Vector2::ZERO, 5.0);
        racer.update(1.0).unwrap();

        assert_eq!(racer.progress().waypoint_index, 1);
        assert_eq!(racer.next_waypoint(), Vector2::new(10.0, 0.0));
        assert!(racer.velocity().x > 0.0);
        let pos = racer.position().unwrap();
        assert!(pos.x > 0.0 && pos.x <= 5.0);

        // Shape follows the moved transform in the same frame
        let shape = racer.actor().get_component::<Shape>().unwrap();
        assert_eq!(shape.position(), pos);
    }

    #[test]
    fn test_no_advance_when_far_from_target() {
        let path =
            WaypointPath::new(vec![Vector2::new(500.0, 0.0), Vector2::new(900.0, 0.0)]).unwrap();
        let mut racer = racer_at(path, Vector2::ZERO, 100.0);
        racer.update(0.016).unwrap();
        assert_eq!(racer.progress(), RaceProgress::new());
    }

    #[test]
    fn test_missing_transform_is_fatal() {
        let mut actor = Actor::new("Bot 9");
        actor.remove_component(ComponentKind::Transform);
        let mut racer = Racer::new(actor, square(), 5.0);
        assert_eq!(
            racer.update(0.016),
            Err(SimError::missing("Bot 9", ComponentKind::Transform))
        );
    }

    #[test]
    fn test_racer_without_shape_still_moves() {
        let mut actor = Actor::bare("Bot 2");
        actor.add_component(Transform::at(Vector2::new(300.0, 0.0)));
        let path = WaypointPath::new(vec![Vector2::ZERO, Vector2::new(0.0, 500.0)]).unwrap();
        let mut racer =
            Racer::new(actor, path.clone(), 100.0).with_behavior(PathFollowing::new(path));
        racer.update(0.1).unwrap();
        assert!(racer.position().unwrap().x < 300.0);
    }
}

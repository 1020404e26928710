//! Player-controlled racer

use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_ACCELERATION, PLAYER_FRICTION, PLAYER_MAX_SPEED};
use crate::ecs::{Actor, Entity};
use crate::error::SimError;
use crate::math::Vector2;
use crate::renderer::DrawTarget;

use super::path::{Advance, RaceProgress, WaypointPath};

/// Held directions for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl PlayerInput {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Unnormalized direction, screen space (up is -y)
    pub fn axis(&self) -> Vector2 {
        let mut axis = Vector2::ZERO;
        if self.up {
            axis.y -= 1.0;
        }
        if self.down {
            axis.y += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        axis
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    actor: Actor,
    path: WaypointPath,
    progress: RaceProgress,
    velocity: Vector2,
    input: PlayerInput,
    pub max_speed: f32,
    pub acceleration: f32,
    /// Per-frame velocity multiplier, not scaled by dt
    pub friction: f32,
}

impl Player {
    pub fn new(actor: Actor, path: WaypointPath) -> Self {
        Self {
            actor,
            path,
            progress: RaceProgress::new(),
            velocity: Vector2::ZERO,
            input: PlayerInput::default(),
            max_speed: PLAYER_MAX_SPEED,
            acceleration: PLAYER_ACCELERATION,
            friction: PLAYER_FRICTION,
        }
    }

    /// Input consumed by the next `update`
    pub fn set_input(&mut self, input: PlayerInput) {
        self.input = input;
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn progress(&self) -> RaceProgress {
        self.progress
    }

    pub fn set_progress(&mut self, progress: RaceProgress) {
        self.progress = progress;
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    pub fn position(&self) -> Result<Vector2, SimError> {
        Ok(self.actor.transform()?.position)
    }

    /// Move the player onto a point, keeping the shape in step
    pub fn teleport(&mut self, position: Vector2) -> Result<(), SimError> {
        self.actor.transform_mut()?.set_position(position);
        self.actor.sync_shape();
        Ok(())
    }

    fn handle_input(&mut self, dt: f32) -> Result<(), SimError> {
        self.velocity *= self.friction;
        self.velocity += self.input.axis() * (self.acceleration * dt);

        if self.velocity.length() > self.max_speed {
            self.velocity = self.velocity.normalized() * self.max_speed;
        }

        self.actor.transform_mut()?.translate(self.velocity * dt);
        Ok(())
    }
}

impl Entity for Player {
    fn name(&self) -> &str {
        self.actor.name()
    }

    fn begin_play(&mut self) {
        self.actor.begin_play();
    }

    fn update(&mut self, dt: f32) -> Result<(), SimError> {
        let position = self.position()?;
        if self.progress.advance(position, &self.path) == Advance::Lap {
            log::info!(
                "{} completed lap {}",
                self.actor.name(),
                self.progress.lap_count
            );
        }

        self.handle_input(dt)?;
        self.actor.update(dt)
    }

    fn render(&self, target: &dyn DrawTarget) {
        self.actor.render(target);
    }

    fn destroy(&mut self) {
        self.actor.destroy();
    }
}

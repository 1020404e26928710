//! Race manager
//!
//! Owns every actor in a race and advances them once per rendered frame.
//! There is no fixed-step accumulator: `dt` is whatever the window reports.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::ecs::{Actor, Entity, Shape, ShapeKind};
use crate::error::SimError;
use crate::leaderboard::Leaderboard;
use crate::math::Vector2;
use crate::renderer::{DrawTarget, colors};
use crate::resources::TextureCache;
use crate::settings::RaceSettings;

use super::path::{RaceProgress, WaypointPath};
use super::player::{Player, PlayerInput};
use super::racer::Racer;
use super::steering::PathFollowing;
use super::track::{Rect, TrackProbe, TrackTransform};

/// Read-only snapshot for the HUD collaborator
#[derive(Debug, Clone, Copy)]
pub struct HudView<'a> {
    /// Seconds since the race started
    pub elapsed: f32,
    pub leaderboard: &'a Leaderboard,
}

impl HudView<'_> {
    /// Text lines: stopwatch first, then one line per rank
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.leaderboard.len() + 1);
        lines.push(format!("Time: {:.2}", self.elapsed));
        lines.extend(
            self.leaderboard
                .pairs()
                .map(|(name, rank)| format!("{}. {}", rank, name)),
        );
        lines
    }
}

#[derive(Debug, Clone)]
pub struct Race {
    path: WaypointPath,
    track: TrackTransform,
    player: Player,
    racers: Vec<Racer>,
    elapsed: f32,
    leaderboard: Leaderboard,
}

impl Race {
    pub fn new(
        path: WaypointPath,
        track: TrackTransform,
        player: Player,
        racers: Vec<Racer>,
    ) -> Self {
        Self {
            path,
            track,
            player,
            racers,
            elapsed: 0.0,
            leaderboard: Leaderboard::new(),
        }
    }

    pub fn begin_play(&mut self) {
        self.player.begin_play();
        for racer in &mut self.racers {
            racer.begin_play();
        }
        self.refresh_standings();
        log::info!(
            "Race started: {} racers, {} waypoints",
            self.racers.len() + 1,
            self.path.len()
        );
    }

    /// Advance the race by one frame.
    ///
    /// Order: stopwatch, player, racers, off-track check, standings.
    pub fn update(
        &mut self,
        dt: f32,
        input: &PlayerInput,
        probe: &dyn TrackProbe,
    ) -> Result<(), SimError> {
        self.elapsed += dt;

        self.player.set_input(*input);
        self.player.update(dt)?;

        for racer in &mut self.racers {
            racer.update(dt)?;
        }

        self.check_track(probe)?;
        self.refresh_standings();
        Ok(())
    }

    pub fn render(&self, target: &dyn DrawTarget) {
        for racer in &self.racers {
            racer.render(target);
        }
        self.player.render(target);
    }

    pub fn destroy(&mut self) {
        for racer in &mut self.racers {
            racer.destroy();
        }
        self.player.destroy();
    }

    /// Reset the player onto the previous waypoint when off the racing surface
    fn check_track(&mut self, probe: &dyn TrackProbe) -> Result<(), SimError> {
        let position = self.player.position()?;
        if !probe.is_off_track_at(&self.track, position) {
            return Ok(());
        }

        let index = self.path.previous_index(self.player.progress().waypoint_index);
        let reset = self.path.get(index);
        log::debug!(
            "{} left the track at ({:.1}, {:.1}), reset to waypoint {}",
            self.player.name(),
            position.x,
            position.y,
            index
        );
        self.player.teleport(reset)
    }

    fn refresh_standings(&mut self) {
        self.leaderboard = Leaderboard::compute(self.standings(), self.path.len());

        // Racers occupy standings slots 1..=n, after the player
        for (i, racer) in self.racers.iter_mut().enumerate() {
            let place = self.leaderboard.rank_at(i + 1).unwrap_or(0);
            racer.set_place(place);
        }
    }

    /// Progress of every actor, player first. This order breaks ranking ties.
    pub fn standings(&self) -> impl Iterator<Item = (&str, RaceProgress)> {
        std::iter::once((self.player.name(), self.player.progress()))
            .chain(self.racers.iter().map(|r| (r.name(), r.progress())))
    }

    pub fn hud(&self) -> HudView<'_> {
        HudView {
            elapsed: self.elapsed,
            leaderboard: &self.leaderboard,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn path(&self) -> &WaypointPath {
        &self.path
    }

    pub fn track(&self) -> &TrackTransform {
        &self.track
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn racers(&self) -> &[Racer] {
        &self.racers
    }

    pub fn racers_mut(&mut self) -> &mut [Racer] {
        &mut self.racers
    }
}

/// Builds a race grid from settings
#[derive(Debug, Clone)]
pub struct RaceBuilder {
    settings: RaceSettings,
    waypoints: Vec<Vector2>,
    track: Option<TrackTransform>,
    racer_count: usize,
    grid_spacing: Vector2,
}

impl RaceBuilder {
    pub fn new(settings: RaceSettings, waypoints: Vec<Vector2>) -> Self {
        Self {
            settings: settings.validated(),
            waypoints,
            track: None,
            racer_count: 3,
            grid_spacing: Vector2::new(0.0, 40.0),
        }
    }

    pub fn racers(mut self, count: usize) -> Self {
        self.racer_count = count;
        self
    }

    pub fn track(mut self, track: TrackTransform) -> Self {
        self.track = Some(track);
        self
    }

    /// Offset between consecutive grid slots
    pub fn grid_spacing(mut self, spacing: Vector2) -> Self {
        self.grid_spacing = spacing;
        self
    }

    /// Spawn the player and racers on the first waypoint.
    ///
    /// Textures are looked up in `textures` under "player" and "racer";
    /// unknown keys resolve to the default texture.
    pub fn build(self, textures: &mut TextureCache) -> Result<Race, SimError> {
        let path =
            WaypointPath::new(self.waypoints)?.with_arrival_radius(self.settings.waypoint_radius);
        let start = path.get(0);
        let track = self.track.unwrap_or(TrackTransform {
            origin: Vector2::ZERO,
            position: Vector2::ZERO,
            scale: Vector2::ONE,
            bounds: Rect::default(),
        });

        let mut player_actor = Actor::new("Player");
        player_actor.set_shape(ShapeKind::Triangle);
        if let Some(shape) = player_actor.get_component_mut::<Shape>() {
            shape.fill = colors::PLAYER;
        }
        player_actor.set_texture(textures.get("player"));
        player_actor.transform_mut()?.set_position(start);

        let mut player = Player::new(player_actor, path.clone());
        player.max_speed = self.settings.player_max_speed;
        player.acceleration = self.settings.player_acceleration;
        player.friction = self.settings.player_friction;

        let mut rng = Pcg32::seed_from_u64(self.settings.seed);
        let jitter = self.settings.racer_speed_jitter;
        let racer_texture = textures.get("racer");

        let mut racers = Vec::with_capacity(self.racer_count);
        for i in 0..self.racer_count {
            let mut actor = Actor::new(format!("Bot {}", i + 1));
            actor.set_shape(ShapeKind::Triangle);
            if let Some(shape) = actor.get_component_mut::<Shape>() {
                shape.fill = colors::RACER;
            }
            actor.set_texture(racer_texture.clone());
            actor
                .transform_mut()?
                .set_position(start + self.grid_spacing * (i + 1) as f32);

            let factor = if jitter > 0.0 {
                1.0 + rng.random_range(-jitter..=jitter)
            } else {
                1.0
            };
            let max_speed = self.settings.racer_max_speed * factor;

            let behavior = PathFollowing::new(path.clone())
                .with_slowing_radius(self.settings.path_slowing_radius);
            racers.push(Racer::new(actor, path.clone(), max_speed).with_behavior(behavior));
        }

        Ok(Race::new(path, track, player, racers))
    }
}

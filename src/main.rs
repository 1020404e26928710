//! Slipstream headless demo
//!
//! Runs a race on a rectangular loop at 60 Hz and logs the standings.
//! Usage: `slipstream [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::path::PathBuf;

    use slipstream::RaceSettings;
    use slipstream::SimError;
    use slipstream::ecs::Transform;
    use slipstream::math::Vector2;
    use slipstream::renderer::DrawList;
    use slipstream::resources::TextureCache;
    use slipstream::sim::{PlayerInput, RaceBuilder, TrackMask, TrackTransform};

    const FRAME_DT: f32 = 1.0 / 60.0;
    const FRAMES: u32 = 60 * 60;
    const REPORT_EVERY: u32 = 60 * 10;

    /// Corners of the loop, clockwise in screen space
    fn waypoints() -> Vec<Vector2> {
        vec![
            Vector2::new(100.0, 100.0),
            Vector2::new(400.0, 80.0),
            Vector2::new(700.0, 100.0),
            Vector2::new(720.0, 300.0),
            Vector2::new(700.0, 500.0),
            Vector2::new(400.0, 520.0),
            Vector2::new(100.0, 500.0),
            Vector2::new(80.0, 300.0),
        ]
    }

    /// 800x600 track image at 1/10 resolution with a hazardous infield
    fn track() -> (TrackTransform, TrackMask) {
        let transform =
            TrackTransform::from_transform(&Transform::default(), Vector2::new(800.0, 600.0));
        let mut mask = TrackMask::new(80, 60);
        mask.fill(20, 20, 60, 40, true);
        (transform, mask)
    }

    pub fn run() -> Result<(), SimError> {
        let settings_path = std::env::args().nth(1).map(PathBuf::from);
        let settings = RaceSettings::load_or_default(settings_path.as_deref());

        let mut textures = TextureCache::new();
        textures.load("racer", "png");
        textures.load("player", "png");

        let (track, mask) = track();
        let mut race = RaceBuilder::new(settings, waypoints())
            .racers(5)
            .track(track)
            .build(&mut textures)?;
        race.begin_play();

        let frame = DrawList::new();
        let input = PlayerInput::idle();
        for i in 1..=FRAMES {
            race.update(FRAME_DT, &input, &mask)?;
            race.render(&frame);
            let instances = frame.instances();
            frame.drain();

            if i % REPORT_EVERY == 0 {
                log::debug!("Frame {}: {} shape instances", i, instances.len());
                for line in race.hud().lines() {
                    log::info!("{}", line);
                }
            }
        }

        race.destroy();
        if let Some(leader) = race.leaderboard().leader() {
            log::info!("Winner: {} (score {})", leader.name, leader.score);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Slipstream (native) starting...");

    if let Err(e) = demo::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build drives the library from its own host page
}

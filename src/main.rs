//! Moonlight Jump headless driver
//!
//! Natively, simulates a steady climb against a recording host and logs what
//! the terrain does. The web build is driven from JS through `web::TerrainBridge`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use moonlight_jump::Settings;
    use moonlight_jump::sim::{GameEvent, GameState, RecordingHost, update_score};

    env_logger::init();

    // Optional JSON settings file as the first argument
    let settings = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Settings::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path, e);
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or(0x5eed);
    let climb_per_tick = settings.terrain.height_scale * 4.0;
    let mut state = GameState::new(settings.terrain.clone(), seed);
    let mut host = RecordingHost::with_player(settings.terrain.game_height);
    log::info!("Moonlight Jump (native) simulating climb with seed {}", seed);

    let (mut generated, mut removed) = (0u32, 0usize);
    for _ in 0..2_000 {
        if let Some(y) = host.player_y.as_mut() {
            *y -= climb_per_tick;
        }
        for event in update_score(&mut state, &mut host) {
            match event {
                GameEvent::PlatformsGenerated(n) => generated += n,
                GameEvent::PlatformsRemoved(n) => removed += n,
                _ => {}
            }
        }
    }

    println!(
        "Climbed {}m: cursor {}m, {} generated, {} removed, {} active",
        state.best_height,
        state.terrain.last_generated_height(),
        generated,
        removed,
        state.terrain.platforms().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}

//! JavaScript bridge
//!
//! The page keeps its physics engine and DOM; this module owns the terrain and
//! calls back into JS to build and tear down platforms.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::highscores::HighScores;
use crate::settings::Settings;
use crate::sim::{
    GameEvent, GamePhase, GameState, Platform, PlatformHost, PlatformKind, WidthClass, update_score,
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
}

/// Adapts the page's create/remove callbacks to `PlatformHost`
struct JsHost<'a> {
    create: &'a Function,
    remove: &'a Function,
    player_y: Option<f32>,
}

fn set(target: &Object, key: &str, value: JsValue) {
    if Reflect::set(target, &JsValue::from_str(key), &value).is_err() {
        log::warn!("Failed to set platform field '{}'", key);
    }
}

impl PlatformHost for JsHost<'_> {
    fn create_platform(&mut self, platform: &Platform) {
        let desc = Object::new();
        set(&desc, "id", platform.id.into());
        set(&desc, "x", JsValue::from_f64(platform.pos.x as f64));
        set(&desc, "y", JsValue::from_f64(platform.pos.y as f64));
        set(&desc, "type", JsValue::from_str(platform.kind.as_str()));
        set(&desc, "width", platform.width.units().into());

        if let Err(e) = self.create.call1(&JsValue::NULL, &desc) {
            log::warn!("createPlatform({}) threw: {:?}", platform.id, e);
        }
    }

    fn remove_platform(&mut self, platform: &Platform) {
        if let Err(e) = self.remove.call1(&JsValue::NULL, &platform.id.into()) {
            log::warn!("removePlatform({}) threw: {:?}", platform.id, e);
        }
    }

    fn player_y(&self) -> Option<f32> {
        self.player_y
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

/// Terrain and score tracking for one page
#[wasm_bindgen]
pub struct TerrainBridge {
    state: GameState,
    scores: HighScores,
    fixed_seed: Option<u64>,
    create: Function,
    remove: Function,
}

#[wasm_bindgen]
impl TerrainBridge {
    /// `create` receives `{id, x, y, type, width}`, `remove` receives the id.
    /// `seed` overrides the stored seed; with neither, every run is random.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>, create: Function, remove: Function) -> TerrainBridge {
        let settings = Settings::load();
        let fixed_seed = seed.or(settings.seed);
        let seed = fixed_seed.unwrap_or_else(random_seed);
        log::info!("Terrain initialized with seed: {}", seed);

        TerrainBridge {
            state: GameState::new(settings.terrain, seed),
            scores: HighScores::load(),
            fixed_seed,
            create,
            remove,
        }
    }

    /// Per-tick entry point; pass `undefined` before the player exists.
    /// Returns the best height of the run.
    pub fn update_score(&mut self, player_y: Option<f32>) -> u32 {
        let mut host = JsHost {
            create: &self.create,
            remove: &self.remove,
            player_y,
        };

        for event in update_score(&mut self.state, &mut host) {
            if let GameEvent::GameOver { height } = event {
                if let Some(rank) = self.scores.add(height, self.state.seed, js_sys::Date::now()) {
                    log::info!("New high score #{}: {}m", rank, height);
                    self.scores.save();
                }
            }
        }

        self.state.best_height
    }

    /// Create a platform outside the generated batches (the starting layout).
    /// The page builds it in its `create` callback, and cleanup evicts it like
    /// any generated platform. Returns the platform id, or `undefined` for an
    /// unknown type or width.
    pub fn place(&mut self, x: f32, y: f32, kind: &str, width: u32) -> Option<u32> {
        let Some(kind) = PlatformKind::from_str(kind) else {
            log::warn!("Unknown platform type '{}'", kind);
            return None;
        };
        let Some(width) = WidthClass::from_units(width) else {
            log::warn!("Unknown platform width {}", width);
            return None;
        };

        let mut host = JsHost {
            create: &self.create,
            remove: &self.remove,
            player_y: None,
        };
        Some(
            self.state
                .terrain
                .place(glam::Vec2::new(x, y), kind, width, &mut host),
        )
    }

    /// Drop every platform and start a new run
    pub fn reset(&mut self) {
        let mut host = JsHost {
            create: &self.create,
            remove: &self.remove,
            player_y: None,
        };
        let seed = self.fixed_seed.unwrap_or_else(random_seed);
        self.state.reset(seed, &mut host);
    }

    pub fn best_height(&self) -> u32 {
        self.state.best_height
    }

    pub fn last_generated_height(&self) -> u32 {
        self.state.terrain.last_generated_height()
    }

    pub fn platform_count(&self) -> usize {
        self.state.terrain.platforms().len()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }

    /// Best height on the leaderboard, if any
    pub fn top_height(&self) -> Option<u32> {
        self.scores.best()
    }
}

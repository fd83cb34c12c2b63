//! Moonlight Jump - infinite climbing terrain
//!
//! Core modules:
//! - `sim`: Deterministic terrain generation, cleanup and score tracking
//! - `settings`: World dimensions and generation tunables
//! - `highscores`: Best-climb leaderboard
//! - `storage`: LocalStorage persistence
//! - `web`: JavaScript bridge (wasm32 only)

pub mod highscores;
pub mod settings;
pub mod sim;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::HighScores;
pub use settings::{Settings, TerrainConfig};

/// Game configuration constants (defaults for [`TerrainConfig`])
pub mod consts {
    /// World dimensions (pixels)
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Vertical spacing between platforms in a batch (pixels)
    pub const PLATFORM_GAP: f32 = 100.0;
    /// World pixels per metre of climbed height
    pub const HEIGHT_SCALE: f32 = 10.0;

    /// Metres climbed past the cursor before a new batch is generated
    pub const GENERATION_THRESHOLD: u32 = 500;
    /// Platforms emitted per batch
    pub const BATCH_SIZE: u32 = 50;
    /// Platforms further than this below the player are evicted (pixels)
    pub const CLEANUP_MARGIN: f32 = 1000.0;

    /// Every Nth platform in a batch is a spring
    pub const SPRING_INTERVAL: u32 = 8;
    /// Extra spring probability once past `SPRING_CHANCE_AFTER`
    pub const SPRING_CHANCE: f64 = 0.15;
    pub const SPRING_CHANCE_AFTER: u32 = 15;

    /// Horizontal inset from each world edge for platform centres (pixels)
    pub const EDGE_INSET: f32 = 100.0;
    /// Distance above the world floor where batch placement starts (pixels)
    pub const FLOOR_OFFSET: f32 = 100.0;
    /// Falling this far below the world floor ends the run (pixels)
    pub const FALL_MARGIN: f32 = 200.0;
}

/// Climbed height in metres for a world-space Y (inverted: up is smaller)
#[inline]
pub fn height_from_y(y: f32, game_height: f32, height_scale: f32) -> u32 {
    ((game_height - y) / height_scale).floor().max(0.0) as u32
}

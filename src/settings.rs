//! Game settings and terrain tuning
//!
//! Persisted in LocalStorage on the web, read from a JSON file natively.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::storage;

/// Terrain generation tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    // === World ===
    /// World width (pixels)
    pub game_width: f32,
    /// World height (pixels); Y grows downward from the top
    pub game_height: f32,
    /// World pixels per metre of climbed height
    pub height_scale: f32,

    // === Generation ===
    /// Metres past the cursor that trigger a batch
    pub threshold: u32,
    /// Platforms per batch
    pub batch_size: u32,
    /// Vertical gap between consecutive platforms (pixels)
    pub platform_gap: f32,
    /// Horizontal inset from each edge (pixels)
    pub edge_inset: f32,
    /// Distance above the floor where batches are anchored (pixels)
    pub floor_offset: f32,

    // === Platform mix ===
    /// Every Nth platform in a batch is a spring
    pub spring_interval: u32,
    /// Random spring chance (0.0 - 1.0)
    pub spring_chance: f64,
    /// Random springs only appear past this global platform index
    pub spring_chance_after: u32,

    // === Cleanup ===
    /// Platforms further than this below the player are evicted (pixels)
    pub cleanup_margin: f32,
    /// Falling this far below the floor ends the run (pixels)
    pub fall_margin: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            game_width: GAME_WIDTH,
            game_height: GAME_HEIGHT,
            height_scale: HEIGHT_SCALE,

            threshold: GENERATION_THRESHOLD,
            batch_size: BATCH_SIZE,
            platform_gap: PLATFORM_GAP,
            edge_inset: EDGE_INSET,
            floor_offset: FLOOR_OFFSET,

            spring_interval: SPRING_INTERVAL,
            spring_chance: SPRING_CHANCE,
            spring_chance_after: SPRING_CHANCE_AFTER,

            cleanup_margin: CLEANUP_MARGIN,
            fall_margin: FALL_MARGIN,
        }
    }
}

impl TerrainConfig {
    /// Width of the band platform centres are drawn from
    pub fn spawn_band(&self) -> f32 {
        (self.game_width - 2.0 * self.edge_inset).max(0.0)
    }

    /// Whether one batch reaches at least one threshold of climbing,
    /// so consecutive batches leave no gap
    pub fn is_contiguous(&self) -> bool {
        let covered = self.batch_size as f32 * self.platform_gap;
        let climbed = self.threshold as f32 * self.height_scale;
        covered >= climbed
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Terrain generation tuning
    pub terrain: TerrainConfig,
    /// Fixed run seed (random per run when unset)
    pub seed: Option<u64>,
}

impl Settings {
    const STORAGE_KEY: &'static str = "moonlight_jump_settings";

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Stored settings, or defaults when nothing usable is stored
    pub fn load() -> Self {
        Self::from_stored(storage::read(Self::STORAGE_KEY).as_deref())
    }

    fn from_stored(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("No stored settings, using defaults");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded stored settings");
                settings
            }
            Err(e) => {
                log::warn!("Stored settings unreadable ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_contiguous() {
        let config = TerrainConfig::default();
        assert!(config.is_contiguous());
        assert_eq!(config.spawn_band(), 600.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"terrain": {"threshold": 250}, "seed": 7}"#)
            .expect("valid settings");
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.terrain.threshold, 250);
        assert_eq!(settings.terrain.batch_size, BATCH_SIZE);
        assert_eq!(settings.terrain.cleanup_margin, CLEANUP_MARGIN);
    }

    #[test]
    fn test_empty_json_is_default() {
        let settings = Settings::from_json("{}").expect("valid settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.terrain.spring_chance = 0.3;
        let json = settings.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("valid"), settings);
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_stored_settings_fall_back_to_defaults() {
        assert_eq!(Settings::from_stored(None), Settings::default());
        assert_eq!(Settings::from_stored(Some("not json")), Settings::default());
        assert_eq!(Settings::from_stored(Some(r#"{"seed": 3}"#)).seed, Some(3));
        // Nothing is stored natively
        assert_eq!(Settings::load(), Settings::default());
    }

    #[test]
    fn test_contiguity_follows_gap() {
        let wider = TerrainConfig {
            platform_gap: 120.0,
            ..TerrainConfig::default()
        };
        assert!(wider.is_contiguous());

        let tighter = TerrainConfig {
            platform_gap: 80.0,
            ..TerrainConfig::default()
        };
        assert!(!tighter.is_contiguous());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{\"terrain\": 3}").is_err());
    }
}

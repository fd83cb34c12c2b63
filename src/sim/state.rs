//! Game state for a single climb

use serde::{Deserialize, Serialize};

use super::platform::PlatformHost;
use super::terrain::Terrain;
use crate::settings::TerrainConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Player fell out of the world
    GameOver,
}

/// Something the UI layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// New best height (metres)
    HeightRecord(u32),
    PlatformsGenerated(u32),
    PlatformsRemoved(usize),
    GameOver { height: u32 },
}

/// Complete run state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Best height reached this run (metres)
    pub best_height: u32,
    pub terrain: Terrain,
}

impl GameState {
    pub fn new(config: TerrainConfig, seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Playing,
            best_height: 0,
            terrain: Terrain::new(config, seed),
        }
    }

    /// Start a fresh run, releasing every platform the host holds
    pub fn reset(&mut self, seed: u64, host: &mut impl PlatformHost) {
        self.terrain.reset(host);
        let config = self.terrain.config().clone();
        *self = Self::new(config, seed);
        log::info!("Run reset with seed {}", seed);
    }
}

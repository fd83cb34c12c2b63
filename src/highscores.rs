//! Best-climb leaderboard
//!
//! Persisted to LocalStorage, tracks the top 10 heights.

use serde::{Deserialize, Serialize};

use crate::storage;

/// Maximum number of climbs to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Best height of the run (metres)
    pub height: u32,
    /// Run seed, so a climb can be replayed on the same terrain
    pub seed: u64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// Leaderboard sorted by height, highest first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    const STORAGE_KEY: &'static str = "moonlight_jump_highscores";

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a height makes the board
    pub fn qualifies(&self, height: u32) -> bool {
        if height == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| height > e.height).unwrap_or(true)
    }

    /// Record a climb; returns the 1-indexed rank, or None if it missed the board
    pub fn add(&mut self, height: u32, seed: u64, timestamp: f64) -> Option<usize> {
        if !self.qualifies(height) {
            return None;
        }

        let entry = HighScoreEntry {
            height,
            seed,
            timestamp,
        };

        // Ties keep the earlier climb ahead
        let pos = self
            .entries
            .iter()
            .position(|e| height > e.height)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(pos + 1)
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.height)
    }

    /// Stored leaderboard, or an empty one
    pub fn load() -> Self {
        let Some(json) = storage::read(Self::STORAGE_KEY) else {
            return Self::new();
        };
        match serde_json::from_str::<HighScores>(&json) {
            Ok(scores) => {
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Err(e) => {
                log::warn!("Stored high scores unreadable ({}), starting fresh", e);
                Self::new()
            }
        }
    }

    /// Persist the leaderboard; returns whether it was stored
    pub fn save(&self) -> bool {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("High scores not serializable: {}", e);
                return false;
            }
        };
        let stored = storage::write(Self::STORAGE_KEY, &json);
        if stored {
            log::info!("High scores saved ({} entries)", self.entries.len());
        }
        stored
    }
}

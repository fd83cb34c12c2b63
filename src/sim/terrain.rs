//! Infinite terrain generation and cleanup
//!
//! The terrain tracks a generation cursor (the highest height in metres that
//! already has platforms). Once the player climbs a full threshold past the
//! cursor, one batch of platforms is emitted above it and the cursor moves up
//! by exactly one threshold. Platforms that drop too far below the player are
//! evicted after every batch.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::platform::{Platform, PlatformHost, PlatformKind, WidthClass};
use crate::settings::TerrainConfig;

/// Metres of height per step of the global platform index
const INDEX_STRIDE_METRES: u32 = 10;

/// Outcome of a single `generate` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Platforms created this call
    pub generated: u32,
    /// Platforms evicted by the follow-up cleanup
    pub removed: usize,
}

/// Generator state: cursor, active platforms, seeded RNG
#[derive(Debug, Clone)]
pub struct Terrain {
    config: TerrainConfig,
    rng: Pcg32,
    /// Highest height (metres) already populated
    last_generated_height: u32,
    /// Active platforms in creation order
    platforms: Vec<Platform>,
    next_id: u32,
}

impl Terrain {
    pub fn new(config: TerrainConfig, seed: u64) -> Self {
        if !config.is_contiguous() {
            log::warn!(
                "Batches of {} x {}px leave gaps below each {}m threshold",
                config.batch_size,
                config.platform_gap,
                config.threshold
            );
        }
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            last_generated_height: 0,
            platforms: Vec::new(),
            next_id: 1,
        }
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    pub fn last_generated_height(&self) -> u32 {
        self.last_generated_height
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Whether `current_height` has cleared the cursor by more than a threshold
    pub fn should_generate(&self, current_height: u32) -> bool {
        current_height > self.last_generated_height.saturating_add(self.config.threshold)
    }

    /// Generate one batch if the player has climbed far enough, then clean up
    pub fn generate(&mut self, current_height: u32, host: &mut impl PlatformHost) -> BatchReport {
        if !self.should_generate(current_height) {
            return BatchReport::default();
        }

        let target = self.last_generated_height + self.config.threshold;
        let start_y = self.config.game_height
            - self.config.floor_offset
            - target as f32 * self.config.height_scale;
        let base_index = target / INDEX_STRIDE_METRES;

        for i in 0..self.config.batch_size {
            let x = self.rng.random::<f32>() * self.config.spawn_band() + self.config.edge_inset;
            let y = start_y - i as f32 * self.config.platform_gap;
            let kind = self.roll_kind(i, base_index + i);
            let width = if self.rng.random::<f32>() > 0.5 {
                WidthClass::Wide
            } else {
                WidthClass::Narrow
            };
            self.place(Vec2::new(x, y), kind, width, host);
        }

        self.last_generated_height = target;
        log::debug!(
            "Generated {} platforms up to {}m (y {} .. {})",
            self.config.batch_size,
            target,
            start_y,
            start_y - self.config.batch_size.saturating_sub(1) as f32 * self.config.platform_gap
        );

        // One batch per call: a fast climber can leave the cursor behind
        if self.should_generate(current_height) {
            log::warn!(
                "Terrain cursor lagging: height {}m, cursor {}m",
                current_height,
                self.last_generated_height
            );
        }

        BatchReport {
            generated: self.config.batch_size,
            removed: self.cleanup(host),
        }
    }

    /// Spring on the batch cadence, random springs past the warm-up index
    fn roll_kind(&mut self, batch_index: u32, global_index: u32) -> PlatformKind {
        if batch_index.is_multiple_of(self.config.spring_interval) {
            PlatformKind::Spring
        } else if global_index > self.config.spring_chance_after
            && self.rng.random::<f64>() < self.config.spring_chance
        {
            PlatformKind::Spring
        } else {
            PlatformKind::Normal
        }
    }

    /// Create a single platform through the host and track it
    pub fn place(
        &mut self,
        pos: Vec2,
        kind: PlatformKind,
        width: WidthClass,
        host: &mut impl PlatformHost,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let platform = Platform {
            id,
            pos,
            kind,
            width,
        };
        host.create_platform(&platform);
        self.platforms.push(platform);
        id
    }

    /// Drop every platform more than the cleanup margin below the player
    pub fn cleanup(&mut self, host: &mut impl PlatformHost) -> usize {
        let Some(player_y) = host.player_y() else {
            return 0;
        };

        let cutoff = player_y + self.config.cleanup_margin;
        let before = self.platforms.len();
        self.platforms.retain(|platform| {
            if platform.pos.y > cutoff {
                host.remove_platform(platform);
                false
            } else {
                true
            }
        });

        let removed = before - self.platforms.len();
        if removed > 0 {
            log::debug!("Cleaned up {} platforms below y {}", removed, cutoff);
        }
        removed
    }

    /// Remove all platforms and rewind the cursor for a new run
    pub fn reset(&mut self, host: &mut impl PlatformHost) {
        for platform in self.platforms.drain(..) {
            host.remove_platform(&platform);
        }
        self.last_generated_height = 0;
    }
}

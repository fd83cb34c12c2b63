//! Deterministic simulation module
//!
//! All terrain logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable platform order (creation order, by id)
//! - No rendering, physics or platform dependencies

pub mod platform;
pub mod state;
pub mod terrain;
pub mod tick;

pub use platform::{Platform, PlatformHost, PlatformKind, RecordingHost, WidthClass};
pub use state::{GameEvent, GamePhase, GameState};
pub use terrain::{BatchReport, Terrain};
pub use tick::update_score;

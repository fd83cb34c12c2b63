//! Platform descriptors and the physics/render collaborator
//!
//! The simulation only owns platform descriptors. Physics bodies, sensors and
//! visual nodes live in the host, keyed by platform id.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Platform behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Normal,
    /// Launches the player higher than a normal jump
    Spring,
}

impl PlatformKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Normal => "normal",
            PlatformKind::Spring => "spring",
        }
    }

    /// Parse the page's platform type name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(PlatformKind::Normal),
            "spring" => Some(PlatformKind::Spring),
            _ => None,
        }
    }
}

/// Discrete platform width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WidthClass {
    #[default]
    Narrow,
    Wide,
}

impl WidthClass {
    /// Width in tile units as the host understands it
    pub fn units(&self) -> u32 {
        match self {
            WidthClass::Narrow => 4,
            WidthClass::Wide => 5,
        }
    }

    pub fn from_units(units: u32) -> Option<Self> {
        match units {
            4 => Some(WidthClass::Narrow),
            5 => Some(WidthClass::Wide),
            _ => None,
        }
    }
}

/// A platform entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    /// World position (Y grows downward)
    pub pos: Vec2,
    pub kind: PlatformKind,
    pub width: WidthClass,
}

/// Physics/render collaborator driven by the terrain
pub trait PlatformHost {
    /// Build the physics body and visual node for a new platform
    fn create_platform(&mut self, platform: &Platform);

    /// Release everything the host holds for a platform
    fn remove_platform(&mut self, platform: &Platform);

    /// Current player Y, or `None` before the player exists
    fn player_y(&self) -> Option<f32>;
}

/// Host that records every call (tests and the headless driver)
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub player_y: Option<f32>,
    pub created: Vec<u32>,
    pub removed: Vec<u32>,
}

impl RecordingHost {
    pub fn with_player(y: f32) -> Self {
        Self {
            player_y: Some(y),
            ..Default::default()
        }
    }

    /// Ids the host still holds bodies for
    pub fn live_count(&self) -> usize {
        self.created.len().saturating_sub(self.removed.len())
    }
}

impl PlatformHost for RecordingHost {
    fn create_platform(&mut self, platform: &Platform) {
        self.created.push(platform.id);
    }

    fn remove_platform(&mut self, platform: &Platform) {
        self.removed.push(platform.id);
    }

    fn player_y(&self) -> Option<f32> {
        self.player_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_units() {
        assert_eq!(WidthClass::Narrow.units(), 4);
        assert_eq!(WidthClass::Wide.units(), 5);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(PlatformKind::Normal.as_str(), "normal");
        assert_eq!(PlatformKind::Spring.as_str(), "spring");
    }

    #[test]
    fn test_parse_page_names() {
        assert_eq!(PlatformKind::from_str("spring"), Some(PlatformKind::Spring));
        assert_eq!(PlatformKind::from_str("Normal"), Some(PlatformKind::Normal));
        assert_eq!(PlatformKind::from_str("ice"), None);
        assert_eq!(WidthClass::from_units(4), Some(WidthClass::Narrow));
        assert_eq!(WidthClass::from_units(5), Some(WidthClass::Wide));
        assert_eq!(WidthClass::from_units(6), None);
    }

    #[test]
    fn test_live_count_never_underflows() {
        let mut host = RecordingHost::default();
        let platform = Platform {
            id: 1,
            pos: Vec2::ZERO,
            kind: PlatformKind::Normal,
            width: WidthClass::Narrow,
        };
        host.remove_platform(&platform);
        host.remove_platform(&platform);
        assert_eq!(host.live_count(), 0);
    }

    #[test]
    fn test_recording_host_tracks_live() {
        let mut host = RecordingHost::with_player(0.0);
        let platform = Platform {
            id: 3,
            pos: Vec2::ZERO,
            kind: PlatformKind::Normal,
            width: WidthClass::Wide,
        };
        host.create_platform(&platform);
        assert_eq!(host.live_count(), 1);
        host.remove_platform(&platform);
        assert_eq!(host.live_count(), 0);
        assert_eq!(host.removed, vec![3]);
    }
}

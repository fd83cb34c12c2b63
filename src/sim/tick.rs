//! Per-tick score update
//!
//! Called once per game-loop tick. Converts the player's position into a
//! climbed height, feeds new records to the terrain and detects falls.

use super::platform::PlatformHost;
use super::state::{GameEvent, GamePhase, GameState};
use crate::height_from_y;

/// Advance score tracking by one tick
pub fn update_score(state: &mut GameState, host: &mut impl PlatformHost) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }
    let Some(player_y) = host.player_y() else {
        return events;
    };

    let config = state.terrain.config();
    let height = height_from_y(player_y, config.game_height, config.height_scale);
    let floor_limit = config.game_height + config.fall_margin;

    if height > state.best_height {
        state.best_height = height;
        events.push(GameEvent::HeightRecord(height));

        let report = state.terrain.generate(height, host);
        if report.generated > 0 {
            events.push(GameEvent::PlatformsGenerated(report.generated));
        }
        if report.removed > 0 {
            events.push(GameEvent::PlatformsRemoved(report.removed));
        }
    }

    if player_y > floor_limit {
        state.phase = GamePhase::GameOver;
        log::info!("Game over at {}m", state.best_height);
        events.push(GameEvent::GameOver {
            height: state.best_height,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::TerrainConfig;
    use crate::sim::platform::RecordingHost;

    fn state() -> GameState {
        GameState::new(TerrainConfig::default(), 12345)
    }

    #[test]
    fn test_no_player_is_noop() {
        let mut state = state();
        let mut host = RecordingHost::default();
        assert!(update_score(&mut state, &mut host).is_empty());
        assert_eq!(state.best_height, 0);
    }

    #[test]
    fn test_height_record() {
        let mut state = state();
        // 600 - 10 * 42 = 180
        let mut host = RecordingHost::with_player(180.0);

        let events = update_score(&mut state, &mut host);
        assert_eq!(events, vec![GameEvent::HeightRecord(42)]);
        assert_eq!(state.best_height, 42);

        // Falling back does not lower the record
        host.player_y = Some(400.0);
        assert!(update_score(&mut state, &mut host).is_empty());
        assert_eq!(state.best_height, 42);
    }

    #[test]
    fn test_climb_triggers_batch() {
        let mut state = state();
        // 600m up
        let mut host = RecordingHost::with_player(600.0 - 6000.0);

        let events = update_score(&mut state, &mut host);

        assert_eq!(events[0], GameEvent::HeightRecord(600));
        assert_eq!(events[1], GameEvent::PlatformsGenerated(50));
        assert_eq!(state.terrain.last_generated_height(), 500);
        assert_eq!(state.terrain.platforms().len(), 50);
    }

    #[test]
    fn test_starting_layout_is_cleaned_up() {
        use crate::sim::{PlatformKind, WidthClass};
        use glam::Vec2;

        let mut state = state();
        let mut host = RecordingHost::default();
        let floor = state.terrain.place(Vec2::new(400.0, 500.0), PlatformKind::Normal, WidthClass::Wide, &mut host);
        let ledge = state.terrain.place(Vec2::new(300.0, -4450.0), PlatformKind::Spring, WidthClass::Narrow, &mut host);

        // 600m up: cutoff is y -4400
        host.player_y = Some(-5400.0);
        let events = update_score(&mut state, &mut host);

        assert!(events.contains(&GameEvent::PlatformsRemoved(1)));
        assert_eq!(host.removed, vec![floor]);
        assert_eq!(state.terrain.platforms()[0].id, ledge);
        assert_eq!(state.terrain.platforms().len(), 51);
    }

    #[test]
    fn test_fall_ends_run_once() {
        let mut state = state();
        let mut host = RecordingHost::with_player(801.0);

        let events = update_score(&mut state, &mut host);
        assert_eq!(events, vec![GameEvent::GameOver { height: 0 }]);
        assert_eq!(state.phase, GamePhase::GameOver);

        assert!(update_score(&mut state, &mut host).is_empty());
    }

    #[test]
    fn test_fall_boundary_is_strict() {
        let mut state = state();
        let mut host = RecordingHost::with_player(800.0);
        update_score(&mut state, &mut host);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_reset_rewinds_run() {
        let mut state = state();
        let mut host = RecordingHost::with_player(-5400.0);
        update_score(&mut state, &mut host);
        assert_eq!(state.terrain.platforms().len(), 50);

        state.reset(99, &mut host);

        assert_eq!(state.seed, 99);
        assert_eq!(state.best_height, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.terrain.last_generated_height(), 0);
        assert!(state.terrain.platforms().is_empty());
        assert_eq!(host.live_count(), 0);
    }
}

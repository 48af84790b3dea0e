//! Difficulty ramp: every milestone speeds obstacles up and spawns them sooner.

use crate::config::GameConfig;
use crate::entities::ObstacleStream;

/// Apply a pass event that brought the score to `score`.
///
/// On a positive multiple of the milestone the speed grows without bound,
/// and the spawn interval shrinks only while it is still above the floor.
/// The check happens before the decrement, so an interval just above the
/// floor can land below it (65 → 55 with the stock floor of 60).
///
/// A zero milestone never ramps.
///
/// Returns `true` when a ramp step was applied.
pub fn apply_pass(stream: &mut ObstacleStream, score: u32, config: &GameConfig) -> bool {
    if score == 0 || !score.is_multiple_of(config.score_milestone) {
        return false;
    }
    stream.speed += config.speed_increment;
    if stream.spawn_interval > config.spawn_interval_floor {
        stream.spawn_interval = stream
            .spawn_interval
            .saturating_sub(config.spawn_interval_decrement);
    }
    log::debug!(
        "milestone at score {}: speed {:.2}, spawn interval {}",
        score,
        stream.speed,
        stream.spawn_interval
    );
    true
}

//! Obstacle stream: spawning, drifting and discarding obstacles.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Obstacle, ObstacleStream, Orientation};

// ── Orientation sources ───────────────────────────────────────────────────────

/// Where new obstacles get their orientation from. Injected so tests and
/// replays can supply a fixed sequence.
pub trait OrientationSource {
    fn next_orientation(&mut self) -> Orientation;
}

/// 50/50 draw from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomOrientation<R: Rng>(pub R);

impl<R: Rng> OrientationSource for RandomOrientation<R> {
    fn next_orientation(&mut self) -> Orientation {
        if self.0.gen_bool(0.5) {
            Orientation::GapAtTop
        } else {
            Orientation::GapAtBottom
        }
    }
}

/// Replays a fixed sequence, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedOrientations {
    sequence: Vec<Orientation>,
    next: usize,
}

impl ScriptedOrientations {
    /// Panics if `sequence` is empty.
    pub fn new(sequence: Vec<Orientation>) -> Self {
        assert!(!sequence.is_empty(), "scripted orientation sequence is empty");
        Self { sequence, next: 0 }
    }
}

impl OrientationSource for ScriptedOrientations {
    fn next_orientation(&mut self) -> Orientation {
        let orientation = self.sequence[self.next];
        self.next = (self.next + 1) % self.sequence.len();
        orientation
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Count one frame and spawn an obstacle just past the right edge once the
/// interval has elapsed. Returns `true` if an obstacle was spawned.
pub fn spawn_tick(
    stream: &mut ObstacleStream,
    config: &GameConfig,
    source: &mut impl OrientationSource,
) -> bool {
    stream.spawn_timer += 1;
    if stream.spawn_timer < stream.spawn_interval {
        return false;
    }
    let orientation = source.next_orientation();
    stream.obstacles.push(Obstacle {
        x: config.viewport_width + config.obstacle_width,
        orientation,
        passed: false,
    });
    stream.spawn_timer = 0;
    log::trace!("spawned {:?} obstacle", orientation);
    true
}

// ── Drift ─────────────────────────────────────────────────────────────────────

/// Outcome of one `advance_and_prune` pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Advance {
    /// Obstacles whose trailing edge crossed the actor's leading edge this frame.
    pub passed: u32,
    pub pruned: u32,
    /// Set when `hit` reported a collision; the pass stopped there.
    pub collision: bool,
}

/// Move every obstacle left by `speed`, in spawn order.
///
/// Per obstacle: `hit` is asked first, with the obstacle and its position
/// before the move. The first hit aborts the pass; that obstacle is not
/// scored and obstacles after it are left untouched this frame. Otherwise
/// passage is detected (so a passed obstacle stays on screen until it
/// leaves), then the obstacle is dropped once `x + width < 0`.
pub fn advance_and_prune<F>(
    stream: &mut ObstacleStream,
    speed: f64,
    actor_left: f64,
    obstacle_width: f64,
    mut hit: F,
) -> Advance
where
    F: FnMut(&Obstacle, f64) -> bool,
{
    let mut report = Advance::default();
    let mut i = 0;
    while i < stream.obstacles.len() {
        let previous_x = stream.obstacles[i].x;
        stream.obstacles[i].x -= speed;

        if hit(&stream.obstacles[i], previous_x) {
            report.collision = true;
            break;
        }

        let obstacle = &mut stream.obstacles[i];
        if !obstacle.passed && obstacle.x + obstacle_width < actor_left {
            obstacle.passed = true;
            report.passed += 1;
        }

        if obstacle.x + obstacle_width < 0.0 {
            stream.obstacles.remove(i);
            report.pruned += 1;
            log::trace!("pruned obstacle, {} left", stream.obstacles.len());
            continue;
        }
        i += 1;
    }
    report
}

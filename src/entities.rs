//! All game entity types — pure data, no logic.

use crate::config::GameConfig;

/// Which end of an obstacle holds the passable gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Gap at the ceiling; the solid part stands on the floor.
    GapAtTop,
    /// Gap at the floor; the solid part hangs from the ceiling.
    GapAtBottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Start,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    Start,
    End,
}

/// Something a collaborator outside the core should reflect.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    ScoreChanged(u32),
    FinalScore(u32),
    OverlayShown(Overlay),
    OverlayHidden(Overlay),
    Milestone {
        score: u32,
        speed: f64,
        spawn_interval: u32,
    },
}

// ── Actor & obstacles ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    /// `false` = floor, `true` = ceiling. The only mutable actor state.
    pub at_ceiling: bool,
}

impl Actor {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.actor_x,
            width: config.actor_width,
            height: config.actor_height,
            at_ceiling: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    /// Left edge, decreasing every frame.
    pub x: f64,
    pub orientation: Orientation,
    /// Set once the trailing edge has crossed the actor's leading edge.
    pub passed: bool,
}

/// Obstacles in spawn order, which is also their left-to-right screen order.
#[derive(Clone, Debug, PartialEq)]
pub struct ObstacleStream {
    pub obstacles: Vec<Obstacle>,
    /// Frames since the last spawn.
    pub spawn_timer: u32,
    pub spawn_interval: u32,
    /// Pixels per frame.
    pub speed: f64,
}

impl ObstacleStream {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0,
            spawn_interval: config.initial_spawn_interval,
            speed: config.initial_speed,
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Everything a running game owns. Cloneable so the update functions in
/// `compute` can hand back a fresh copy.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub config: GameConfig,
    pub actor: Actor,
    pub stream: ObstacleStream,
    pub score: u32,
    pub status: GameStatus,
    /// Frames updated since the session (re)started.
    pub frame: u64,
    /// Events raised by the most recent transition only.
    pub events: Vec<GameEvent>,
}

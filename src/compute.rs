//! Session state machine and per-frame update.
//!
//! Every public function takes an immutable reference to the current
//! `GameSession` (and, where needed, an orientation source) and returns a
//! brand-new `GameSession`. The returned session's `events` list what the
//! transition wants the outside world to show.

use crate::collision::collides;
use crate::config::GameConfig;
use crate::entities::{
    Actor, GameEvent, GameSession, GameStatus, ObstacleStream, Overlay,
};
use crate::ramp::apply_pass;
use crate::stream::{advance_and_prune, spawn_tick, OrientationSource};

// ── Constructors ─────────────────────────────────────────────────────────────

/// A session waiting on the start screen.
pub fn new_session(config: GameConfig) -> GameSession {
    GameSession {
        actor: Actor::new(&config),
        stream: ObstacleStream::new(&config),
        score: 0,
        status: GameStatus::Start,
        frame: 0,
        events: vec![GameEvent::OverlayShown(Overlay::Start)],
        config,
    }
}

// ── Lifecycle transitions ────────────────────────────────────────────────────

/// Begin (or restart) play from any state, with everything reset.
pub fn start(session: &GameSession) -> GameSession {
    let config = session.config.clone();
    log::info!("session started");
    GameSession {
        actor: Actor::new(&config),
        stream: ObstacleStream::new(&config),
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
        events: vec![
            GameEvent::ScoreChanged(0),
            GameEvent::OverlayHidden(Overlay::Start),
            GameEvent::OverlayHidden(Overlay::End),
        ],
        config,
    }
}

/// Swap the actor between floor and ceiling. Ignored unless playing.
pub fn flip(session: &GameSession) -> GameSession {
    let mut next = session.clone();
    next.events.clear();
    if next.status == GameStatus::Playing {
        next.actor.at_ceiling = !next.actor.at_ceiling;
    }
    next
}

/// Stop play and publish the final score. Ignored unless playing.
pub fn end(session: &GameSession) -> GameSession {
    let mut next = session.clone();
    next.events.clear();
    finish(&mut next);
    next
}

fn finish(session: &mut GameSession) {
    if session.status != GameStatus::Playing {
        return;
    }
    session.status = GameStatus::GameOver;
    session.events.push(GameEvent::FinalScore(session.score));
    session.events.push(GameEvent::OverlayShown(Overlay::End));
    log::info!(
        "game over after {} frames with score {}",
        session.frame,
        session.score
    );
}

// ── Per-frame update ─────────────────────────────────────────────────────────

/// Advance the session by one frame. Does nothing unless playing.
///
/// Order: spawn timer, then a single spawn-order pass over the obstacles that
/// moves them, scores passes, prunes off-screen ones and stops at the first
/// collision. Speed is read once for the whole pass, so a milestone reached
/// mid-pass applies from the next frame on.
pub fn update(session: &GameSession, source: &mut impl OrientationSource) -> GameSession {
    let mut next = session.clone();
    next.events.clear();
    if next.status != GameStatus::Playing {
        return next;
    }
    next.frame += 1;

    spawn_tick(&mut next.stream, &next.config, source);

    let speed = next.stream.speed;
    let width = next.config.obstacle_width;
    let actor = &next.actor;
    let advance = advance_and_prune(&mut next.stream, speed, actor.x, width, |obstacle, previous_x| {
        collides(actor, obstacle, previous_x, width)
    });

    for _ in 0..advance.passed {
        next.score += 1;
        next.events.push(GameEvent::ScoreChanged(next.score));
        if apply_pass(&mut next.stream, next.score, &next.config) {
            next.events.push(GameEvent::Milestone {
                score: next.score,
                speed: next.stream.speed,
                spawn_interval: next.stream.spawn_interval,
            });
        }
    }

    if advance.collision {
        finish(&mut next);
    }
    next
}

//! Clock/driver: applies queued input between frames and runs one
//! update-then-render cycle per display refresh while the game is playing.
//!
//! The host owns the actual timer. It calls [`Driver::frame`] once per
//! refresh and keeps doing so only while `frame` answers [`Schedule::Next`];
//! nothing has to cancel the loop when the game ends.

use std::collections::VecDeque;

use crate::compute::{flip, new_session, start, update};
use crate::config::GameConfig;
use crate::entities::{GameEvent, GameSession, GameStatus, Overlay};
use crate::render::{render, DrawSurface};
use crate::stream::OrientationSource;

/// Input that reaches the core from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Flip,
    Start,
    /// Same as `Start`, offered from the end screen.
    Restart,
    Share,
}

/// Score text and overlay chrome living outside the drawing surface.
pub trait Hud {
    fn show_score(&mut self, text: &str);
    fn show_final_score(&mut self, text: &str);
    fn set_overlay(&mut self, overlay: Overlay, visible: bool);
    /// Hand the score to whatever does sharing. Nothing by default.
    fn share(&mut self, _score: u32) {}
}

/// Whether the host should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Next,
    Stop,
}

pub struct Driver<O: OrientationSource> {
    session: GameSession,
    source: O,
    pending: VecDeque<InputEvent>,
}

impl<O: OrientationSource> Driver<O> {
    pub fn new(config: GameConfig, source: O) -> Self {
        Self {
            session: new_session(config),
            source,
            pending: VecDeque::new(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn is_running(&self) -> bool {
        self.session.status == GameStatus::Playing
    }

    /// Queue input; it takes effect at the next `apply_pending`.
    pub fn enqueue(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Push the events of the current session (e.g. the initial start
    /// overlay) to the HUD.
    pub fn sync_hud<H: Hud + ?Sized>(&self, hud: &mut H) {
        dispatch(&self.session.events, hud);
    }

    /// Apply all queued input, in arrival order, between two frames.
    ///
    /// Returns [`Schedule::Next`] if the game is playing afterwards, which is
    /// how a start or restart gets its first frame scheduled.
    pub fn apply_pending<H: Hud + ?Sized>(&mut self, hud: &mut H) -> Schedule {
        while let Some(event) = self.pending.pop_front() {
            match event {
                InputEvent::Flip => {
                    self.session = flip(&self.session);
                }
                InputEvent::Start | InputEvent::Restart => {
                    self.session = start(&self.session);
                }
                InputEvent::Share => {
                    hud.share(self.session.score);
                    continue;
                }
            }
            dispatch(&self.session.events, hud);
        }
        self.schedule()
    }

    /// One update-then-render cycle. A no-op returning [`Schedule::Stop`]
    /// unless the game is playing.
    pub fn frame<S, H>(&mut self, surface: &mut S, hud: &mut H) -> Schedule
    where
        S: DrawSurface + ?Sized,
        H: Hud + ?Sized,
    {
        if !self.is_running() {
            return Schedule::Stop;
        }
        self.session = update(&self.session, &mut self.source);
        dispatch(&self.session.events, hud);
        render(surface, &self.session);
        self.schedule()
    }

    fn schedule(&self) -> Schedule {
        if self.is_running() {
            Schedule::Next
        } else {
            Schedule::Stop
        }
    }
}

fn dispatch<H: Hud + ?Sized>(events: &[GameEvent], hud: &mut H) {
    for event in events {
        match event {
            GameEvent::ScoreChanged(score) => hud.show_score(&score.to_string()),
            GameEvent::FinalScore(score) => hud.show_final_score(&score.to_string()),
            GameEvent::OverlayShown(overlay) => hud.set_overlay(*overlay, true),
            GameEvent::OverlayHidden(overlay) => hud.set_overlay(*overlay, false),
            GameEvent::Milestone { .. } => {}
        }
    }
}

//! Paints a session onto a drawing surface. No game logic.

use crate::entities::{GameSession, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const ACTOR_COLOR: Color = Color::rgb(0xf6, 0xb9, 0x3b);
pub const OBSTACLE_COLOR: Color = Color::rgb(0x4a, 0x69, 0xbd);

/// A 2D surface in viewport pixel coordinates, origin top-left.
pub trait DrawSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);
}

/// One clear, one fill for the actor, one fill per obstacle.
pub fn render<S: DrawSurface + ?Sized>(surface: &mut S, session: &GameSession) {
    let config = &session.config;
    let width = config.viewport_width;
    let height = config.viewport_height;

    surface.clear_rect(0.0, 0.0, width, height);

    let actor = &session.actor;
    let actor_y = if actor.at_ceiling {
        0.0
    } else {
        height - actor.height
    };
    surface.fill_rect(actor.x, actor_y, actor.width, actor.height, ACTOR_COLOR);

    let solid = config.obstacle_height();
    for obstacle in &session.stream.obstacles {
        let y = match obstacle.orientation {
            Orientation::GapAtTop => config.gap_height,
            Orientation::GapAtBottom => 0.0,
        };
        surface.fill_rect(obstacle.x, y, config.obstacle_width, solid, OBSTACLE_COLOR);
    }
}

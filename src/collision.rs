//! Actor ↔ obstacle collision.
//!
//! Vertical position never enters the test: an obstacle's orientation alone
//! decides which slot (floor or ceiling) it blocks.

use crate::entities::{Actor, Obstacle, Orientation};

/// Horizontal overlap of an obstacle with left edge `x` and the actor.
pub fn overlaps(actor: &Actor, x: f64, obstacle_width: f64) -> bool {
    x < actor.x + actor.width && x + obstacle_width > actor.x
}

/// Whether an obstacle with this orientation occupies the actor's slot.
pub fn blocks_slot(orientation: Orientation, at_ceiling: bool) -> bool {
    match orientation {
        // Solid part on the floor
        Orientation::GapAtTop => !at_ceiling,
        // Solid part on the ceiling
        Orientation::GapAtBottom => at_ceiling,
    }
}

/// Jumped from fully right of the actor to fully left of it in one frame.
fn tunneled(actor: &Actor, previous_x: f64, x: f64, obstacle_width: f64) -> bool {
    previous_x >= actor.x + actor.width && x + obstacle_width <= actor.x
}

/// Collision test for one obstacle after it moved from `previous_x`.
pub fn collides(actor: &Actor, obstacle: &Obstacle, previous_x: f64, obstacle_width: f64) -> bool {
    if !blocks_slot(obstacle.orientation, actor.at_ceiling) {
        return false;
    }
    if overlaps(actor, obstacle.x, obstacle_width) {
        return true;
    }
    if tunneled(actor, previous_x, obstacle.x, obstacle_width) {
        log::warn!(
            "obstacle crossed the actor within one frame ({} -> {})",
            previous_x,
            obstacle.x
        );
        return true;
    }
    false
}

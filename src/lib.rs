//! Gravity Flip - a one-button arcade game.
//!
//! The actor snaps between floor and ceiling to slip through the gap of each
//! obstacle drifting in from the right.
//!
//! - `entities`: pure data (actor, obstacles, session)
//! - `compute`: session state machine and per-frame update
//! - `stream`, `collision`, `ramp`: the pieces `compute::update` is built from
//! - `driver`: frame scheduling and input queue
//! - `render`: paints a session onto any `DrawSurface`

pub mod collision;
pub mod compute;
pub mod config;
pub mod driver;
pub mod entities;
pub mod ramp;
pub mod render;
pub mod stream;

pub use config::{ConfigError, GameConfig};
pub use driver::{Driver, Hud, InputEvent, Schedule};
pub use entities::{GameEvent, GameSession, GameStatus, Orientation, Overlay};
pub use render::{Color, DrawSurface};
pub use stream::{OrientationSource, RandomOrientation, ScriptedOrientations};

//! Terminal snake with malware hazards.
//!
//! The game logic (`grid`, `snake`, `world`, `placement`, `progression`,
//! `engine`, `game`) performs no I/O. `input`, `term`, `render` and `app`
//! wire it to a crossterm terminal.

pub mod app;
pub mod config;
pub mod engine;
pub mod game;
pub mod grid;
pub mod input;
pub mod placement;
pub mod progression;
pub mod render;
pub mod snake;
pub mod term;
pub mod world;

pub use config::GameConfig;
pub use engine::{GameEngine, MoveOutcome, TickReport};
pub use game::{Command, Flow, SnakeGame};
pub use grid::{Grid, Position};
pub use snake::{Direction, Snake};
pub use world::{Collision, Status, World};

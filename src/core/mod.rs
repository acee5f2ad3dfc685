//! Core game types and logic (maze data, player state, input, movement).
//!
//! Re-exports:
//! - `grid`: Rectangular cell buffer
//! - `maze`: Maze file parsing
//! - `player`: Player pose and grid vectors
//! - `input`: Key events and held-key state
//! - `movement`: Rotation and collision-aware movement
//! - `level`: Grid + player + goal for one maze

pub mod grid;
pub mod input;
pub mod level;
pub mod maze;
pub mod movement;
pub mod player;

pub use grid::{Cell, CellCoord, Grid};
pub use input::{InputEvent, Key, KeyState};
pub use level::Level;
pub use maze::{load_maze, Maze, MazeError};
pub use movement::MovementController;
pub use player::{Player, Vec2};

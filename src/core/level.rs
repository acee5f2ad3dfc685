//! One playable level: grid, player and goal.
use crate::core::grid::{CellCoord, Grid};
use crate::core::maze::{Maze, MazeError};
use crate::core::player::{Player, Vec2};

#[derive(Clone, Debug)]
pub struct Level {
    pub grid: Grid,
    pub player: Player,
    pub win: CellCoord,
    pub height: usize,
}

impl Level {
    /// Installs the player at the maze spawn. Mazes whose border has a gap
    /// are refused here, before any ray could walk off the grid.
    pub fn new(maze: Maze, dir: Vec2, plane: Vec2) -> Result<Self, MazeError> {
        if let Some(cell) = maze.grid.border_opening() {
            return Err(MazeError::NonEnclosedMaze { cell });
        }
        Ok(Self {
            player: Player::spawn_at(maze.spawn, dir, plane),
            grid: maze.grid,
            win: maze.win,
            height: maze.height,
        })
    }

    /// True once the floored player position is the goal cell.
    pub fn reached_goal(&self) -> bool {
        self.player.cell() == Some(self.win)
    }
}

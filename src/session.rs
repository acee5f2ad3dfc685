//! Level sequencing: play each maze in turn until the last goal is reached.
use std::collections::VecDeque;

use crate::config::Config;
use crate::core::input::KeyState;
use crate::core::level::Level;
use crate::core::maze::{Maze, MazeError};
use crate::core::movement::MovementController;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    Playing,
    /// The goal was reached and level `level` (zero-based) is now current.
    Advanced { level: usize },
    Completed,
}

pub struct Session {
    current: Option<Level>,
    upcoming: VecDeque<Level>,
    index: usize,
    total: usize,
    movement: MovementController,
}

impl Session {
    /// Builds every level up front so a bad maze fails before anything opens.
    pub fn new(mazes: Vec<Maze>, config: &Config) -> Result<Self, MazeError> {
        let mut upcoming = mazes
            .into_iter()
            .map(|maze| Level::new(maze, config.start_dir, config.start_plane))
            .collect::<Result<VecDeque<_>, _>>()?;
        let total = upcoming.len();
        let current = upcoming.pop_front();
        if current.is_some() {
            tracing::info!(level = 1, total, "level started");
        }
        Ok(Self {
            current,
            upcoming,
            index: 0,
            total,
            movement: MovementController::new(config.move_speed, config.rotation_step),
        })
    }

    pub fn level(&self) -> Option<&Level> {
        self.current.as_ref()
    }

    /// Zero-based index of the current level.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_completed(&self) -> bool {
        self.current.is_none()
    }

    /// One tick: move the player, then check the goal.
    pub fn tick(&mut self, keys: &KeyState) -> Progress {
        let Some(level) = self.current.as_mut() else {
            return Progress::Completed;
        };
        self.movement.step(keys, &mut level.player, &level.grid);
        if !level.reached_goal() {
            return Progress::Playing;
        }

        tracing::info!(level = self.index + 1, total = self.total, "goal reached");
        // release the finished grid before the next one is installed
        self.current = None;
        match self.upcoming.pop_front() {
            Some(next) => {
                self.current = Some(next);
                self.index += 1;
                tracing::info!(level = self.index + 1, total = self.total, "level started");
                Progress::Advanced { level: self.index }
            }
            None => {
                tracing::info!(total = self.total, "all levels completed");
                Progress::Completed
            }
        }
    }
}

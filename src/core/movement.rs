//! Player movement and rotation with per-axis wall collision.
use crate::core::grid::Grid;
use crate::core::input::KeyState;
use crate::core::player::{Player, Vec2};

pub const DEFAULT_MOVE_SPEED: f64 = 0.07;
/// Radians turned per tick while a turn key is held.
pub const DEFAULT_ROTATION_STEP: f64 = 0.03;

/// Rotates `dir` and `plane` together by `sign` rotation steps so the
/// angle between them, the field of view, never changes.
pub fn rotate(plane: &mut Vec2, dir: &mut Vec2, sign: f64) {
    rotate_by(plane, dir, DEFAULT_ROTATION_STEP * sign);
}

pub fn rotate_by(plane: &mut Vec2, dir: &mut Vec2, angle: f64) {
    *dir = dir.rotated(angle);
    *plane = plane.rotated(angle);
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MovementController {
    pub move_speed: f64,
    pub rotation_step: f64,
}

impl Default for MovementController {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            rotation_step: DEFAULT_ROTATION_STEP,
        }
    }
}

impl MovementController {
    pub fn new(move_speed: f64, rotation_step: f64) -> Self {
        Self { move_speed, rotation_step }
    }

    pub fn rotate(&self, player: &mut Player, sign: f64) {
        rotate_by(&mut player.plane, &mut player.dir, self.rotation_step * sign);
    }

    /// Applies one tick of held keys. Turning happens before moving so the
    /// step follows the new heading.
    pub fn step(&self, keys: &KeyState, player: &mut Player, grid: &Grid) {
        if keys.right {
            self.rotate(player, -1.0);
        }
        if keys.left {
            self.rotate(player, 1.0);
        }
        if keys.up {
            self.slide(player, grid, self.move_speed);
        }
        if keys.down {
            self.slide(player, grid, -self.move_speed);
        }
    }

    /// Moves along `dir * amount`, each axis on its own: an axis whose
    /// target cell is a wall stays put while the other one may still move,
    /// which lets the player slide along walls.
    fn slide(&self, player: &mut Player, grid: &Grid, amount: f64) {
        let delta = player.dir.scaled(amount);

        let next_row = player.pos.row + delta.row;
        if grid.is_open(next_row.floor() as i64, player.pos.col.floor() as i64) {
            player.pos.row = next_row;
        }

        let next_col = player.pos.col + delta.col;
        if grid.is_open(player.pos.row.floor() as i64, next_col.floor() as i64) {
            player.pos.col = next_col;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::{Cell, CellCoord};
    use crate::core::maze::parse_maze_str;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPS: f64 = 1e-9;

    fn player_at(cell: CellCoord) -> Player {
        Player::spawn_at(cell, Vec2::new(-1.0, 0.0), Vec2::new(0.0, 0.5))
    }

    fn held(up: bool, down: bool, left: bool, right: bool) -> KeyState {
        KeyState { up, down, left, right, quit: false }
    }

    #[test]
    fn test_rotate_inverse() {
        let mut dir = Vec2::new(-1.0, 0.0);
        let mut plane = Vec2::new(0.0, 0.5);
        rotate(&mut plane, &mut dir, 1.0);
        rotate(&mut plane, &mut dir, -1.0);
        assert!((dir.row + 1.0).abs() < EPS && dir.col.abs() < EPS);
        assert!(plane.row.abs() < EPS && (plane.col - 0.5).abs() < EPS);
    }

    #[test]
    fn test_rotation_preserves_fov() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut dir = Vec2::new(-1.0, 0.0);
        let mut plane = Vec2::new(0.0, 0.5);
        let cross = dir.cross(plane);
        let dot = dir.dot(plane);
        for _ in 0..2_000 {
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            rotate(&mut plane, &mut dir, sign);
        }
        assert!((dir.cross(plane) - cross).abs() < 1e-9);
        assert!((dir.dot(plane) - dot).abs() < 1e-9);
    }

    #[test]
    fn test_forward_blocked_by_wall() {
        let maze = parse_maze_str("111\n1p1\n1w1\n111").unwrap();
        let mut player = player_at(maze.spawn);
        let ctl = MovementController::default();
        // facing row 0, which is wall
        for _ in 0..50 {
            ctl.step(&held(true, false, false, false), &mut player, &maze.grid);
        }
        assert_eq!(player.cell(), Some(maze.spawn));
        assert!(player.pos.row >= 1.0);
    }

    #[test]
    fn test_backward_reaches_goal() {
        let maze = parse_maze_str("111\n1p1\n1w1\n111").unwrap();
        let mut player = player_at(maze.spawn);
        let ctl = MovementController::default();
        for _ in 0..20 {
            ctl.step(&held(false, true, false, false), &mut player, &maze.grid);
        }
        assert_eq!(player.cell(), Some(maze.win));
        // row 3 is wall; the player stops inside row 2
        assert!(player.pos.row < 3.0);
    }

    #[test]
    fn test_slides_along_wall() {
        // Heading diagonally into the top wall: row is blocked, col keeps moving.
        let maze = parse_maze_str("111111\n1p0001\n1000w1\n111111").unwrap();
        let mut player = player_at(maze.spawn);
        player.pos.row = 1.05;
        player.dir = Vec2::new(-1.0, 1.0).scaled(std::f64::consts::FRAC_1_SQRT_2);
        let ctl = MovementController::default();
        let start_col = player.pos.col;
        for _ in 0..10 {
            ctl.step(&held(true, false, false, false), &mut player, &maze.grid);
        }
        assert!(player.pos.row >= 1.0);
        assert!(player.pos.col > start_col + 0.4);
    }

    #[test]
    fn test_step_under_one_cell_cannot_cross_thin_wall() {
        let maze = parse_maze_str("11111\n1p101\n1w001\n11111").unwrap();
        let ctl = MovementController::new(0.99, DEFAULT_ROTATION_STEP);
        for offset in [0.0, 0.5, 0.99] {
            let mut player = player_at(maze.spawn);
            player.pos.col = 1.0 + offset;
            player.dir = Vec2::new(0.0, 1.0);
            for _ in 0..5 {
                ctl.step(&held(true, false, false, false), &mut player, &maze.grid);
                assert_eq!(player.cell(), Some(maze.spawn), "offset {offset}");
            }
        }
    }

    #[test]
    fn test_turn_keys_rotate_in_opposite_directions() {
        let grid = parse_maze_str("111\n1p1\n1w1\n111").unwrap().grid;
        let ctl = MovementController::default();
        let mut left = player_at(CellCoord::new(1, 1));
        let mut right = left;
        ctl.step(&held(false, false, true, false), &mut left, &grid);
        ctl.step(&held(false, false, false, true), &mut right, &grid);
        assert!(left.dir.col < 0.0);
        assert!(right.dir.col > 0.0);
        assert_eq!(left.pos, right.pos);
    }

    #[test]
    fn test_random_walk_never_enters_wall() {
        let maze = parse_maze_str(
            "1111111111\n\
             1p00100001\n\
             1011102101\n\
             1000003001\n\
             1140110041\n\
             10000000w1\n\
             1111111111",
        )
        .unwrap();
        let ctl = MovementController::new(0.3, 0.4);
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut player = player_at(maze.spawn);
        for _ in 0..20_000 {
            let keys = held(rng.gen_bool(0.6), rng.gen_bool(0.3), rng.gen_bool(0.3), rng.gen_bool(0.3));
            ctl.step(&keys, &mut player, &maze.grid);
            let (row, col) = player.floor();
            assert_eq!(maze.grid.get(row, col), Some(Cell::Empty), "player in wall at {row},{col}");
        }
    }
}

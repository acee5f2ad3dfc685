//! Grid ray casting (DDA): per screen column, the nearest wall and how far it is.
use std::error::Error;
use std::fmt;

use crate::core::grid::{Cell, CellCoord, Grid};
use crate::core::player::{Player, Vec2};

/// Which kind of grid boundary the ray crossed into the wall cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitSide {
    /// Stepped along the row axis (a north/south face). Side 0.
    RowAxis,
    /// Stepped along the column axis (an east/west face). Side 1.
    ColAxis,
}

impl HitSide {
    pub fn index(self) -> u8 {
        match self {
            HitSide::RowAxis => 0,
            HitSide::ColAxis => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Perpendicular distance to the wall plane. Not yet clamped.
    pub distance: f64,
    pub side: HitSide,
    pub cell: CellCoord,
    /// Code of the wall cell that was hit.
    pub code: char,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CastError {
    /// The ray stepped off the grid without meeting a wall.
    LeftGrid { row: i64, col: i64 },
    /// Ray direction has no length (direction and camera plane cancel out).
    ZeroDirection,
}

impl fmt::Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastError::LeftGrid { row, col } => {
                write!(f, "ray left the grid at ({row}, {col}) without hitting a wall")
            }
            CastError::ZeroDirection => write!(f, "ray direction is zero"),
        }
    }
}

impl Error for CastError {}

/// Camera-space x of a column: -1 at the left edge, 0 in the middle, towards 1 at the right.
#[inline]
pub fn camera_x(column: u32, columns: u32) -> f64 {
    2.0 * column as f64 / columns as f64 - 1.0
}

/// Casts the ray for screen `column` out of `columns`.
pub fn cast_ray(grid: &Grid, player: &Player, column: u32, columns: u32) -> Result<RayHit, CastError> {
    let cam_x = camera_x(column, columns);
    let ray_dir = player.dir + player.plane.scaled(cam_x);
    cast_dir(grid, player.pos, ray_dir)
}

/// Distance the ray travels between two boundaries of one axis.
/// A zero component never crosses that axis.
#[inline]
fn delta_dist(axis: f64, other: f64) -> f64 {
    if axis == 0.0 {
        f64::INFINITY
    } else {
        (1.0 + (other * other) / (axis * axis)).sqrt()
    }
}

/// Step direction and distance to the first boundary along one axis.
#[inline]
fn first_boundary(pos: f64, cell: i64, dir: f64, delta: f64) -> (i64, f64) {
    if delta.is_infinite() {
        return (1, f64::INFINITY);
    }
    if dir < 0.0 {
        (-1, (pos - cell as f64) * delta)
    } else {
        (1, (cell as f64 + 1.0 - pos) * delta)
    }
}

/// Walks the grid from `pos` along `ray_dir` one boundary at a time until a
/// wall cell is entered. Every step is bounds-checked.
pub fn cast_dir(grid: &Grid, pos: Vec2, ray_dir: Vec2) -> Result<RayHit, CastError> {
    if ray_dir.row == 0.0 && ray_dir.col == 0.0 {
        return Err(CastError::ZeroDirection);
    }

    let mut row = pos.row.floor() as i64;
    let mut col = pos.col.floor() as i64;

    let delta_row = delta_dist(ray_dir.row, ray_dir.col);
    let delta_col = delta_dist(ray_dir.col, ray_dir.row);
    let (step_row, mut side_row) = first_boundary(pos.row, row, ray_dir.row, delta_row);
    let (step_col, mut side_col) = first_boundary(pos.col, col, ray_dir.col, delta_col);

    let (side, code) = loop {
        let side = if side_row < side_col {
            side_row += delta_row;
            row += step_row;
            HitSide::RowAxis
        } else {
            side_col += delta_col;
            col += step_col;
            HitSide::ColAxis
        };
        match grid.get(row, col) {
            None => return Err(CastError::LeftGrid { row, col }),
            Some(Cell::Wall(code)) => break (side, code),
            Some(Cell::Empty) => {}
        }
    };

    let distance = match side {
        HitSide::RowAxis => (row as f64 - pos.row + (1 - step_row) as f64 / 2.0) / ray_dir.row,
        HitSide::ColAxis => (col as f64 - pos.col + (1 - step_col) as f64 / 2.0) / ray_dir.col,
    };

    Ok(RayHit {
        distance,
        side,
        // both indices were accepted by grid.get, so they are non-negative
        cell: CellCoord::new(row as usize, col as usize),
        code,
    })
}

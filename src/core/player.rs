//! Player pose: position, facing direction and camera plane.
use crate::core::grid::CellCoord;

/// 2D vector in grid space. `row` grows downward through the maze file,
/// `col` grows to the right along a line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub row: f64,
    pub col: f64,
}

impl Vec2 {
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Standard 2D rotation by `angle` radians.
    #[inline]
    pub fn rotated(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            row: self.row * cos - self.col * sin,
            col: self.row * sin + self.col * cos,
        }
    }

    #[inline]
    pub fn scaled(self, k: f64) -> Self {
        Self::new(self.row * k, self.col * k)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.row.hypot(self.col)
    }

    /// Cross product z component; its angle with another vector stays fixed under joint rotation.
    #[inline]
    pub fn cross(self, other: Vec2) -> f64 {
        self.row * other.col - self.col * other.row
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.row * other.row + self.col * other.col
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.row + rhs.row, self.col + rhs.col)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub dir: Vec2,
    /// Perpendicular to `dir`; its length sets the field of view.
    pub plane: Vec2,
}

impl Player {
    pub fn new(pos: Vec2, dir: Vec2, plane: Vec2) -> Self {
        Self { pos, dir, plane }
    }

    /// Places the player in the middle of `cell`.
    pub fn spawn_at(cell: CellCoord, dir: Vec2, plane: Vec2) -> Self {
        let pos = Vec2::new(cell.row as f64 + 0.5, cell.col as f64 + 0.5);
        Self::new(pos, dir, plane)
    }

    /// Floored (row, col) of the position, signed so callers can bounds-check.
    #[inline]
    pub fn floor(&self) -> (i64, i64) {
        (self.pos.row.floor() as i64, self.pos.col.floor() as i64)
    }

    /// The cell under the player, `None` if the position went negative.
    pub fn cell(&self) -> Option<CellCoord> {
        let (row, col) = self.floor();
        (row >= 0 && col >= 0).then(|| CellCoord::new(row as usize, col as usize))
    }
}

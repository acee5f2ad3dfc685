//! Rectangular cell grid the player walks and rays travel through.
use std::fmt;

/// Cell code used to square off short rows.
pub const WALL_SENTINEL: char = '#';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Solid cell; the code picks the wall palette.
    Wall(char),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        !self.is_empty()
    }
}

/// Integer (row, col) cell coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Row-major cell buffer with an explicit width. Every row has `width` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Builds a grid from possibly ragged rows, padding each short row with
    /// [`WALL_SENTINEL`] walls up to the widest row.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(width * height);
        for (row_index, mut row) in rows.into_iter().enumerate() {
            if row.len() < width {
                tracing::warn!(
                    row = row_index,
                    len = row.len(),
                    width,
                    "padding short maze row"
                );
                row.resize(width, Cell::Wall(WALL_SENTINEL));
            }
            cells.extend(row);
        }
        Self { cells, width, height }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds-checked lookup. Negative or too-large coordinates give `None`.
    #[inline]
    pub fn get(&self, row: i64, col: i64) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    #[inline]
    pub fn cell(&self, coord: CellCoord) -> Option<Cell> {
        self.get(coord.row as i64, coord.col as i64)
    }

    /// True only for in-bounds Empty cells; everything off the grid blocks.
    #[inline]
    pub fn is_open(&self, row: i64, col: i64) -> bool {
        self.get(row, col).is_some_and(Cell::is_empty)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on a zero chunk size
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// First Empty cell lying on the outer border, scanning row by row.
    /// A ray or a player standing there could leave the grid.
    pub fn border_opening(&self) -> Option<CellCoord> {
        for (row, cells) in self.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let on_border =
                    row == 0 || col == 0 || row + 1 == self.height || col + 1 == self.width;
                if on_border && cell.is_empty() {
                    return Some(CellCoord::new(row, col));
                }
            }
        }
        None
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '0',
                    Cell::Wall(code) => *code,
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

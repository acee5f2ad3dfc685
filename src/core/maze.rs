//! Maze file loading.
//!
//! One text line per grid row. `p` marks the spawn, `w` the goal, `0` an
//! empty cell; any other character is a wall whose character picks its color.
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::grid::{Cell, CellCoord, Grid};

const SPAWN_MARK: char = 'p';
const WIN_MARK: char = 'w';
const EMPTY_MARK: char = '0';

#[derive(Debug)]
pub enum MazeError {
    FileUnreadable { path: PathBuf, source: io::Error },
    EmptyMaze,
    MissingSpawn,
    DuplicateSpawn { first: CellCoord, second: CellCoord },
    MissingWin,
    /// An empty cell touches the grid edge, so rays and the player could leave it.
    NonEnclosedMaze { cell: CellCoord },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::FileUnreadable { path, source } => {
                write!(f, "cannot read maze file {}: {source}", path.display())
            }
            MazeError::EmptyMaze => write!(f, "maze file has no lines"),
            MazeError::MissingSpawn => write!(f, "maze has no spawn marker '{SPAWN_MARK}'"),
            MazeError::DuplicateSpawn { first, second } => {
                write!(f, "maze has two spawn markers, at {first} and {second}")
            }
            MazeError::MissingWin => write!(f, "maze has neither a '{WIN_MARK}' marker nor an empty cell to fall back on"),
            MazeError::NonEnclosedMaze { cell } => {
                write!(f, "maze is not enclosed: empty cell {cell} lies on the border")
            }
        }
    }
}

impl Error for MazeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MazeError::FileUnreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A parsed maze file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub spawn: CellCoord,
    pub win: CellCoord,
    /// Number of lines in the file.
    pub height: usize,
}

pub fn load_maze(path: impl AsRef<Path>) -> Result<Maze, MazeError> {
    let path = path.as_ref();
    let unreadable = |source| MazeError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unreadable)?;
    let maze = parse_maze(BufReader::new(file)).map_err(|err| match err {
        ParseFailure::Io(source) => unreadable(source),
        ParseFailure::Maze(err) => err,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = maze.grid.width(),
        height = maze.height,
        spawn = %maze.spawn,
        win = %maze.win,
        "loaded maze"
    );
    Ok(maze)
}

/// Parses a maze from already-open text (one row per line).
pub fn parse_maze_str(text: &str) -> Result<Maze, MazeError> {
    parse_maze(text.as_bytes()).map_err(|err| match err {
        ParseFailure::Io(source) => MazeError::FileUnreadable {
            path: PathBuf::new(),
            source,
        },
        ParseFailure::Maze(err) => err,
    })
}

enum ParseFailure {
    Io(io::Error),
    Maze(MazeError),
}

impl From<MazeError> for ParseFailure {
    fn from(err: MazeError) -> Self {
        ParseFailure::Maze(err)
    }
}

fn parse_maze<R: BufRead>(reader: R) -> Result<Maze, ParseFailure> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut spawn: Option<CellCoord> = None;
    let mut win: Option<CellCoord> = None;
    let mut found_win = false;

    for (row, line) in reader.lines().enumerate() {
        let line = line.map_err(ParseFailure::Io)?;
        let mut cells = Vec::with_capacity(line.len());
        for (col, ch) in line.chars().enumerate() {
            let here = CellCoord::new(row, col);
            let cell = match ch {
                SPAWN_MARK => {
                    if let Some(first) = spawn {
                        return Err(MazeError::DuplicateSpawn { first, second: here }.into());
                    }
                    spawn = Some(here);
                    Cell::Empty
                }
                WIN_MARK => {
                    win = Some(here);
                    found_win = true;
                    Cell::Empty
                }
                EMPTY_MARK => {
                    // Until a `w` shows up, the latest empty cell stands in as the goal.
                    if !found_win {
                        win = Some(here);
                    }
                    Cell::Empty
                }
                code => Cell::Wall(code),
            };
            cells.push(cell);
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(MazeError::EmptyMaze.into());
    }
    let spawn = spawn.ok_or(MazeError::MissingSpawn)?;
    let win = win.ok_or(MazeError::MissingWin)?;
    let height = rows.len();

    Ok(Maze {
        grid: Grid::from_rows(rows),
        spawn,
        win,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spawn_and_win() {
        let maze = parse_maze_str("111\n1p1\n1w1\n111\n").unwrap();
        assert_eq!(maze.height, 4);
        assert_eq!(maze.spawn, CellCoord::new(1, 1));
        assert_eq!(maze.win, CellCoord::new(2, 1));
        let grid = &maze.grid;
        assert_eq!(grid.get(1, 0), Some(Cell::Wall('1')));
        assert_eq!(grid.get(1, 1), Some(Cell::Empty));
        assert_eq!(grid.get(1, 2), Some(Cell::Wall('1')));
        assert_eq!(grid.get(2, 0), Some(Cell::Wall('1')));
        assert_eq!(grid.get(2, 1), Some(Cell::Empty));
        assert_eq!(grid.get(2, 2), Some(Cell::Wall('1')));
    }

    #[test]
    fn test_win_falls_back_to_empty_cell() {
        let maze = parse_maze_str("111\n1p0\n111").unwrap();
        assert_eq!(maze.win, CellCoord::new(1, 2));
        assert_eq!(maze.spawn, CellCoord::new(1, 1));
    }

    #[test]
    fn test_explicit_win_beats_later_empty_cells() {
        let maze = parse_maze_str("11111\n1pw01\n10001\n11111").unwrap();
        assert_eq!(maze.win, CellCoord::new(1, 2));
    }

    #[test]
    fn test_explicit_win_overrides_earlier_fallback() {
        let maze = parse_maze_str("11111\n10001\n1p0w1\n11111").unwrap();
        assert_eq!(maze.win, CellCoord::new(2, 3));
    }

    #[test]
    fn test_height_counts_lines() {
        let text = "1111\n1p01\n10w1\n1001\n1111\n";
        let maze = parse_maze_str(text).unwrap();
        assert_eq!(maze.height, text.lines().count());
        assert_eq!(maze.grid.height(), maze.height);
    }

    #[test]
    fn test_ragged_rows_keep_height_and_pad() {
        let maze = parse_maze_str("11111\n1pw1\n11111").unwrap();
        assert_eq!(maze.height, 3);
        assert_eq!(maze.grid.width(), 5);
        assert!(maze.grid.get(1, 4).unwrap().is_wall());
    }

    #[test]
    fn test_windows_line_endings() {
        let maze = parse_maze_str("111\r\n1p1\r\n1w1\r\n111\r\n").unwrap();
        assert_eq!(maze.grid.width(), 3);
        assert_eq!(maze.height, 4);
    }

    #[test]
    fn test_empty_file_is_rejected() {
        assert!(matches!(parse_maze_str(""), Err(MazeError::EmptyMaze)));
    }

    #[test]
    fn test_missing_markers() {
        assert!(matches!(
            parse_maze_str("111\n1w1\n111"),
            Err(MazeError::MissingSpawn)
        ));
        assert!(matches!(
            parse_maze_str("111\n1p1\n111"),
            Err(MazeError::MissingWin)
        ));
    }

    #[test]
    fn test_duplicate_spawn() {
        let err = parse_maze_str("1111\n1pp1\n1w01\n1111").unwrap_err();
        match err {
            MazeError::DuplicateSpawn { first, second } => {
                assert_eq!(first, CellCoord::new(1, 1));
                assert_eq!(second, CellCoord::new(1, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unreadable_file() {
        let err = load_maze("/definitely/not/a/maze.txt").unwrap_err();
        assert!(matches!(err, MazeError::FileUnreadable { .. }));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("maze_caster_load_{}.txt", std::process::id()));
        std::fs::write(&path, "1111\n1p01\n1w01\n1111\n").unwrap();
        let maze = load_maze(&path);
        std::fs::remove_file(&path).unwrap();
        let maze = maze.unwrap();
        assert_eq!(maze.height, 4);
        assert_eq!(maze.spawn, CellCoord::new(1, 1));
        assert_eq!(maze.win, CellCoord::new(2, 1));
    }
}

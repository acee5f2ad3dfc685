//! Whole-frame assembly: one ray per screen column.
use crate::backend::RenderBackend;
use crate::core::grid::Grid;
use crate::core::level::Level;
use crate::core::player::Player;
use crate::render::caster::{cast_ray, CastError};
use crate::render::projector::{project, ColumnSlice, GROUND, SKY};

/// Band and color for every column of a `width` x `height` screen.
/// Columns only read the grid and player, so their order does not matter.
pub fn frame_columns(grid: &Grid, player: &Player, width: u32, height: u32) -> Result<Vec<ColumnSlice>, CastError> {
    (0..width)
        .map(|column| {
            let hit = cast_ray(grid, player, column, width)?;
            Ok(project(hit.distance, hit.side, hit.code, height))
        })
        .collect()
}

/// Paints background and walls of `level` into `backend`. Presenting is left to the caller.
pub fn render_frame<B: RenderBackend + ?Sized>(level: &Level, backend: &mut B) -> Result<(), CastError> {
    let (width, height) = backend.size();
    let columns = frame_columns(&level.grid, &level.player, width, height)?;
    backend.draw_background(SKY, GROUND);
    for (column, slice) in (0u32..).zip(columns) {
        backend.draw_column(column, slice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::maze::parse_maze_str;
    use crate::core::player::Vec2;
    use crate::render::framebuffer::Framebuffer;
    use crate::render::projector::{wall_color, Rgba};
    use crate::render::caster::HitSide;

    fn corridor() -> Level {
        let maze = parse_maze_str("1111111\n1000001\n1000001\n100p001\n1111111").unwrap();
        Level::new(maze, Vec2::new(-1.0, 0.0), Vec2::new(0.0, 0.5)).unwrap()
    }

    #[test]
    fn test_frame_has_one_slice_per_column() {
        let level = corridor();
        let columns = frame_columns(&level.grid, &level.player, 64, 48).unwrap();
        assert_eq!(columns.len(), 64);
        assert!(columns.iter().all(|c| c.start <= c.end && c.end < 48));
    }

    #[test]
    fn test_render_into_framebuffer() {
        let level = corridor();
        let mut fb = Framebuffer::new(64, 48);
        render_frame(&level, &mut fb).unwrap();

        // player at (3.5, 3.5) facing row 0: wall 2.5 away, band height 48 / 2.5 = 19
        let mid = 32;
        let wall = wall_color('1', HitSide::RowAxis);
        assert_eq!(fb.get_pixel(mid, 24), wall);
        assert_eq!(fb.get_pixel(mid, 0), SKY);
        assert_eq!(fb.get_pixel(mid, 47), GROUND);
        assert_ne!(fb.get_pixel(mid, 24), Rgba::rgb(0, 0, 0));
    }
}

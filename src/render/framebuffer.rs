//! CPU framebuffer (RGBA8). Serves as an in-memory render backend and as the
//! upload buffer of the windowed one.
use crate::backend::{BackendError, RenderBackend};
use crate::render::projector::{ColumnSlice, Rgba};

pub struct Framebuffer {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub background_color: Rgba,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let bg = Rgba::rgb(0, 0, 0);
        let mut fb = Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
            background_color: bg,
        };
        fb.clear();
        fb
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn clear(&mut self) {
        let Rgba { r, g, b, a } = self.background_color;
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, a]);
        }
    }

    #[inline]
    pub fn set_background_color(&mut self, c: Rgba) {
        self.background_color = c;
    }

    /// Out-of-range coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Rgba {
        match self.index(x, y) {
            Some(i) => Rgba::new(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]),
            None => self.background_color,
        }
    }

    /// Paints rows `start..=end` of column `x`.
    pub fn fill_column(&mut self, x: u32, start: u32, end: u32, color: Rgba) {
        if self.height == 0 {
            return;
        }
        for y in start..=end.min(self.height - 1) {
            self.set_pixel(x, y, color);
        }
    }

    /// Upper half sky, lower half ground.
    pub fn paint_background(&mut self, sky: Rgba, ground: Rgba) {
        let hh = self.height / 2;
        for y in 0..self.height {
            let color = if y < hh { sky } else { ground };
            for x in 0..self.width {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Raw RGBA8 bytes, row-major, ready for a texture upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

impl RenderBackend for Framebuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_background(&mut self, sky: Rgba, ground: Rgba) {
        self.paint_background(sky, ground);
    }

    fn draw_column(&mut self, column: u32, slice: ColumnSlice) {
        self.fill_column(column, slice.start, slice.end, slice.color);
    }

    fn present(&mut self) -> Result<(), BackendError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(255, 0, 0);

    #[test]
    fn test_set_and_get_pixel() {
        let mut fb = Framebuffer::new(4, 3);
        fb.set_pixel(2, 1, RED);
        assert_eq!(fb.get_pixel(2, 1), RED);
        assert_eq!(fb.get_pixel(1, 1), Rgba::rgb(0, 0, 0));
        // out of range writes are dropped, reads give the background
        fb.set_pixel(9, 9, RED);
        assert_eq!(fb.get_pixel(9, 9), fb.background_color);
        assert_eq!(fb.as_bytes().len(), 4 * 3 * 4);
    }

    #[test]
    fn test_fill_column_is_inclusive_and_clipped() {
        let mut fb = Framebuffer::new(2, 5);
        fb.fill_column(1, 1, 10, RED);
        assert_eq!(fb.get_pixel(1, 0), Rgba::rgb(0, 0, 0));
        for y in 1..5 {
            assert_eq!(fb.get_pixel(1, y), RED);
            assert_eq!(fb.get_pixel(0, y), Rgba::rgb(0, 0, 0));
        }
    }

    #[test]
    fn test_background_halves() {
        let sky = Rgba::rgb(1, 2, 3);
        let ground = Rgba::rgb(4, 5, 6);
        let mut fb = Framebuffer::new(3, 4);
        fb.paint_background(sky, ground);
        assert_eq!(fb.get_pixel(0, 0), sky);
        assert_eq!(fb.get_pixel(2, 1), sky);
        assert_eq!(fb.get_pixel(1, 2), ground);
        assert_eq!(fb.get_pixel(2, 3), ground);
    }

    #[test]
    fn test_clear_uses_background_color() {
        let mut fb = Framebuffer::new(2, 2);
        fb.set_background_color(RED);
        fb.clear();
        assert_eq!(fb.get_pixel(1, 1), RED);
    }
}

//! Wall projection and styling: distance to a vertical screen band, cell code to color.
use crate::render::caster::HitSide;

/// Distances at or below zero (or NaN) are pulled up to this before dividing.
pub const MIN_DISTANCE: f64 = 1e-4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }
}

pub const SKY: Rgba = Rgba::rgb(255, 178, 102);
pub const GROUND: Rgba = Rgba::rgb(89, 60, 30);

/// Wall palettes keyed by cell code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    DeepBlue,
    ForestGreen,
    Charcoal,
    BurntOrange,
    Steel,
}

impl Palette {
    pub fn from_code(code: char) -> Self {
        match code {
            '1' => Palette::DeepBlue,
            '2' => Palette::ForestGreen,
            '3' => Palette::Charcoal,
            '4' => Palette::BurntOrange,
            _ => Palette::Steel,
        }
    }

    /// (lit, shadow) shades.
    pub const fn shades(self) -> (Rgba, Rgba) {
        match self {
            Palette::DeepBlue => (Rgba::rgb(0x00, 0x34, 0x66), Rgba::rgb(0x00, 0x28, 0x4D)),
            Palette::ForestGreen => (Rgba::rgb(0x00, 0x5F, 0x37), Rgba::rgb(0x00, 0x47, 0x2B)),
            Palette::Charcoal => (Rgba::rgb(0x36, 0x36, 0x36), Rgba::rgb(0x2C, 0x2C, 0x2C)),
            Palette::BurntOrange => (Rgba::rgb(0xD9, 0x6B, 0x00), Rgba::rgb(0xA3, 0x52, 0x00)),
            Palette::Steel => (Rgba::rgb(0x4B, 0x4B, 0x4B), Rgba::rgb(0x3A, 0x3A, 0x3A)),
        }
    }
}

/// Row-axis faces get the lit shade, column-axis faces the shadow shade.
pub fn wall_color(code: char, side: HitSide) -> Rgba {
    let (lit, shadow) = Palette::from_code(code).shades();
    match side {
        HitSide::RowAxis => lit,
        HitSide::ColAxis => shadow,
    }
}

/// One column's wall band, inclusive on both ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColumnSlice {
    pub start: u32,
    pub end: u32,
    pub color: Rgba,
}

/// Zero, negative and NaN distances become [`MIN_DISTANCE`]. Positive
/// infinity stays and projects to a band on the horizon.
#[inline]
pub fn sanitize_distance(distance: f64) -> f64 {
    if distance.is_nan() || distance <= MIN_DISTANCE {
        MIN_DISTANCE
    } else {
        distance
    }
}

/// Maps a hit to its screen band and color. Pure; draws nothing.
pub fn project(distance: f64, side: HitSide, code: char, screen_height: u32) -> ColumnSlice {
    let distance = sanitize_distance(distance);
    let h = screen_height as i64;
    // `as` saturates, so huge heights from tiny distances stay finite
    let wall_height = (screen_height as f64 / distance) as i64;
    let half = wall_height / 2;
    let last = (h - 1).max(0);
    let start = (h / 2 - half).clamp(0, last);
    let end = (h / 2).saturating_add(half).clamp(0, last);
    ColumnSlice {
        start: start as u32,
        end: end as u32,
        color: wall_color(code, side),
    }
}

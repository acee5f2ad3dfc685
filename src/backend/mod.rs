//! Contracts for the pieces that touch the outside world: painting columns and reading keys.
use std::error::Error;
use std::fmt;

use crate::core::input::InputEvent;
use crate::render::projector::{ColumnSlice, Rgba};

#[cfg(feature = "render")]
pub mod raylib_backend;

#[cfg(feature = "render")]
pub use raylib_backend::RaylibBackend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    Init(String),
    Present(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Init(msg) => write!(f, "backend failed to initialize: {msg}"),
            BackendError::Present(msg) => write!(f, "backend failed to present a frame: {msg}"),
        }
    }
}

impl Error for BackendError {}

/// Receives the finished columns of a frame. Releasing the backend (drop)
/// releases whatever window or device it holds.
pub trait RenderBackend {
    /// (width, height) in pixels; width is also the number of rays per frame.
    fn size(&self) -> (u32, u32);
    fn draw_background(&mut self, sky: Rgba, ground: Rgba);
    fn draw_column(&mut self, column: u32, slice: ColumnSlice);
    fn present(&mut self) -> Result<(), BackendError>;
}

pub trait InputBackend {
    /// Events since the last poll, oldest first.
    fn poll(&mut self) -> Vec<InputEvent>;
}

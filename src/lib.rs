//! First-person grid maze explorer.
//!
//! Maze files are parsed into a [`Grid`](crate::core::Grid), the player moves through it
//! with per-axis collision, and every frame casts one DDA ray per screen
//! column to find the nearest wall, which is projected to a shaded band.

pub mod backend;
pub mod config;
pub mod core;
pub mod logging;
pub mod render;
pub mod session;

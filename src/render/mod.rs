//! Ray casting and column rendering.
//!
//! Re-exports:
//! - `caster`: DDA ray casting per screen column
//! - `projector`: Wall band projection and palette shading
//! - `framebuffer`: CPU framebuffer (in-memory backend)
//! - `frame`: Per-frame column assembly

pub mod caster;
pub mod frame;
pub mod framebuffer;
pub mod projector;

pub use caster::{cast_ray, CastError, HitSide, RayHit};
pub use frame::{frame_columns, render_frame};
pub use framebuffer::Framebuffer;
pub use projector::{project, ColumnSlice, Rgba};

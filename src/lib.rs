//! Integer-only ray tracer
//!
//! Renders two spheres over a checkerboard floor into a 48x40 frame with
//! shadows and one level of mirror reflection, using nothing but 32/64-bit
//! integer arithmetic (Q21.10 fixed point).

pub mod algebra;
pub mod color;
pub mod fixed;
pub mod hit;
pub mod light;
pub mod material;
pub mod plane;
pub mod renderer;
pub mod scene;
pub mod screen;
pub mod sphere;
pub mod trig;

pub use renderer::{render_frame, Tracer};
pub use scene::Scene;

/// Default frame width in pixels.
pub const SCREEN_W: u32 = 48;

/// Default frame height in pixels.
pub const SCREEN_H: u32 = 40;

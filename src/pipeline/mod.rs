use glam::Vec3;

use crate::core::Color;

pub mod buffer;
pub mod edge;
pub mod output;
pub mod rasterizer;
pub mod renderer;
pub mod span;

pub use buffer::PixelBuffer;
pub use renderer::Renderer;

/// One item of an attribute submission. Each variant carries its payload
/// directly; there is no name lookup to fail, and an empty submission list
/// simply updates nothing.
#[derive(Clone, Copy, Debug)]
pub enum Attribute {
    /// Flat shading color, as normalized [0, 1] channels.
    FlatColor(Color),
}

/// One item of a triangle submission.
#[derive(Clone, Copy, Debug)]
pub enum TrianglePart {
    /// Three screen-space vertex positions, (x, y, z) each.
    Positions([Vec3; 3]),
}

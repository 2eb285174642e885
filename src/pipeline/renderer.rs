use log::debug;

use crate::core::{Color, Intensity};
use crate::pipeline::buffer::PixelBuffer;
use crate::pipeline::rasterizer::fill_triangle;
use crate::pipeline::{Attribute, TrianglePart};

/// Render context: owns the pixel buffer and the attribute state that
/// triangle submissions read. One context serializes one frame at a time;
/// nothing here is shared or global.
pub struct Renderer {
    pub width: usize,
    pub height: usize,
    buffer: PixelBuffer,
    flat_color: [Intensity; 3],
}

impl Renderer {
    /// Context with a freshly reset buffer and a white flat color.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: PixelBuffer::new(width, height),
            flat_color: Color::WHITE.to_intensities(),
        }
    }

    /// Start a new frame: background color everywhere, untouched depth.
    pub fn begin_frame(&mut self) {
        self.buffer.reset();
    }

    /// Apply attribute updates. The flat color takes effect for every
    /// triangle submitted afterwards, until overwritten.
    pub fn put_attributes(&mut self, attrs: &[Attribute]) {
        for attr in attrs {
            match attr {
                Attribute::FlatColor(color) => self.flat_color = color.to_intensities(),
            }
        }
    }

    /// Rasterize a triangle submission with the current flat color.
    /// A submission without a positions part is a no-op.
    pub fn put_triangle(&mut self, parts: &[TrianglePart]) {
        for part in parts {
            match part {
                TrianglePart::Positions(verts) => {
                    debug!("rasterizing triangle {:?}", verts);
                    fill_triangle(*verts, self.flat_color, &mut self.buffer);
                }
            }
        }
    }

    /// The finished frame, for the output drains.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }
}

//! Read-only drains over a finished frame. Nothing here rasterizes; these
//! only reorder the pixel buffer's bytes for a consumer.

use std::io::{self, Write};

use minifb::Window;

use crate::pipeline::buffer::PixelBuffer;

impl PixelBuffer {
    /// Serialize the frame as a binary PPM image: the text header
    /// `P6 <width> <height> 255` and one RGB byte triple per pixel,
    /// row-major, top row first.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P6 {} {} 255", self.width, self.height)?;
        let mut bytes = Vec::with_capacity(3 * self.width * self.height);
        for cell in self.cells() {
            bytes.extend_from_slice(&[cell.red, cell.green, cell.blue]);
        }
        out.write_all(&bytes)
    }

    /// Pack the frame into the device byte layout: 3 bytes per pixel in
    /// (blue, green, red) order, same row-major traversal as the file drain.
    pub fn bgr_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(3 * self.width * self.height);
        for cell in self.cells() {
            bytes.extend_from_slice(&[cell.blue, cell.green, cell.red]);
        }
        bytes
    }

    /// Hand the frame to a minifb window as packed 0x00RRGGBB words.
    pub fn present_window(&self, window: &mut Window) -> io::Result<()> {
        let words: Vec<u32> = self
            .cells()
            .iter()
            .map(|cell| {
                ((cell.red as u32) << 16) | ((cell.green as u32) << 8) | cell.blue as u32
            })
            .collect();
        window
            .update_with_buffer(&words, self.width, self.height)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}

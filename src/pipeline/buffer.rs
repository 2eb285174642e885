use crate::core::{Intensity, Pixel, INTENSITY_MAX};
use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSliceMut;

/// Clamp an intensity into the valid [0, 4095] channel domain.
fn clamp(val: Intensity) -> Intensity {
    if val < 0 {
        0
    } else if INTENSITY_MAX < val {
        INTENSITY_MAX
    } else {
        val
    }
}

/// Fixed-size row-major grid of [`Pixel`] cells.
///
/// The buffer does no depth testing of its own: `put` stores
/// unconditionally, and visibility is decided by whoever calls it.
pub struct PixelBuffer {
    pub width: usize,
    pub height: usize,
    data: Vec<Pixel>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        PixelBuffer {
            width,
            height,
            data: vec![Pixel::BACKGROUND; width * height],
        }
    }

    /// Start a new frame: every cell back to white with untouched depth.
    pub fn reset(&mut self) {
        self.data.par_chunks_mut(1024).for_each(|chunk| {
            for cell in chunk {
                cell.reset();
            }
        });
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Write one cell. Out-of-bounds coordinates are silently clipped.
    ///
    /// Channels are clamped to [0, 4095] and quantized to 8 bits by dropping
    /// the low 4 bits. The cell is stored unconditionally, depth included.
    pub fn put(&mut self, x: i32, y: i32, r: Intensity, g: Intensity, b: Intensity, a: bool, z: f32) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        self.data[index] = Pixel {
            red: (clamp(r) >> 4) as u8,
            green: (clamp(g) >> 4) as u8,
            blue: (clamp(b) >> 4) as u8,
            alpha: a,
            depth: z,
        };
    }

    /// Read one cell; `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<&Pixel> {
        self.index(x, y).map(|index| &self.data[index])
    }

    /// All cells in row-major order, top row first.
    pub fn cells(&self) -> &[Pixel] {
        &self.data
    }
}

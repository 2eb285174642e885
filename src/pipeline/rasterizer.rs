use glam::Vec3;

use crate::core::Intensity;
use crate::pipeline::buffer::PixelBuffer;
use crate::pipeline::edge::{build_edges, sort_by_y, Edge, EdgeCursor};
use crate::pipeline::span::Span;

/// Scan-convert one flat-colored triangle into the pixel buffer.
///
/// Vertices are screen-space (x, y, z) in any order. Rows run from
/// `ceil(start.y)` up to but excluding `end.y`, columns from `ceil(left.x)`
/// up to but excluding `right.x` (top-left inclusive, bottom-right
/// exclusive), so triangles sharing an edge neither double-draw nor leave a
/// gap along it. Each covered pixel is written only if its interpolated
/// depth is strictly nearer than what the buffer holds.
pub fn fill_triangle(mut verts: [Vec3; 3], color: [Intensity; 3], buffer: &mut PixelBuffer) {
    sort_by_y(&mut verts);
    let [top, bottom, long] = build_edges(&verts);

    // The long edge spans both halves, so its cursor keeps stepping across
    // the middle vertex; each short edge gets a fresh cursor for its half.
    if top.is_left_of(&long) {
        let mut right = long.start_cursor();
        let mut left = top.start_cursor();
        scan_half(&top, &mut left, &mut right, color, buffer);
        let mut left = bottom.start_cursor();
        scan_half(&bottom, &mut left, &mut right, color, buffer);
    } else {
        let mut left = long.start_cursor();
        let mut right = top.start_cursor();
        scan_half(&top, &mut left, &mut right, color, buffer);
        let mut right = bottom.start_cursor();
        scan_half(&bottom, &mut left, &mut right, color, buffer);
    }
}

/// Walk the scanlines of one triangle half.
///
/// `gate` is the half's short edge: it carries the y range, while `left` and
/// `right` carry the boundary interpolation state. A zero-height gate yields
/// no rows, which is how flat-topped and flat-bottomed halves are skipped.
fn scan_half(
    gate: &Edge,
    left: &mut EdgeCursor,
    right: &mut EdgeCursor,
    color: [Intensity; 3],
    buffer: &mut PixelBuffer,
) {
    let mut y = gate.start.y.ceil() as i32;
    while (y as f32) < gate.end.y {
        let span = Span::between(left.current, right.current);
        let mut pixel = span.cursor();
        let mut x = span.start.x as i32;
        while (x as f32) < span.end.x {
            if let Some(cell) = buffer.get(x, y) {
                if pixel.current.z < cell.depth {
                    buffer.put(x, y, color[0], color[1], color[2], true, pixel.current.z);
                }
            }
            pixel.step_x();
            x += 1;
        }
        left.step_y();
        right.step_y();
        y += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pixel;

    const RED: [Intensity; 3] = [4095, 0, 0];
    const BLUE: [Intensity; 3] = [0, 0, 4095];

    fn v(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3::new(x, y, z)
    }

    fn painted(buffer: &PixelBuffer) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..buffer.height as i32 {
            for x in 0..buffer.width as i32 {
                if *buffer.get(x, y).unwrap() != Pixel::BACKGROUND {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn right_triangle_matches_direct_enumeration() {
        let mut buffer = PixelBuffer::new(20, 20);
        fill_triangle([v(0.0, 0.0, 0.5), v(10.0, 0.0, 0.5), v(0.0, 10.0, 0.5)], RED, &mut buffer);

        // Half-open inclusion for this geometry: x >= 0, y >= 0, x + y < 10.
        let mut expected = Vec::new();
        for y in 0..20 {
            for x in 0..20 {
                if x + y < 10 {
                    expected.push((x, y));
                }
            }
        }
        assert_eq!(painted(&buffer), expected);
        assert_eq!(expected.len(), 55);
    }

    #[test]
    fn no_pixel_lands_outside_the_bounding_box() {
        let mut buffer = PixelBuffer::new(32, 32);
        fill_triangle(
            [v(2.3, 1.7, 0.5), v(15.2, 6.1, 0.5), v(7.7, 17.9, 0.5)],
            RED,
            &mut buffer,
        );
        for (x, y) in painted(&buffer) {
            assert!(x as f32 >= 2.3 && x as f32 <= 15.2, "x {} escaped", x);
            assert!(y as f32 >= 1.7 && y as f32 <= 17.9, "y {} escaped", y);
        }
    }

    #[test]
    fn triangles_sharing_an_edge_partition_the_quad() {
        // The two halves of the square [0,10)^2, split along its diagonal.
        let mut lower = PixelBuffer::new(16, 16);
        let mut upper = PixelBuffer::new(16, 16);
        fill_triangle([v(0.0, 0.0, 0.5), v(10.0, 0.0, 0.5), v(10.0, 10.0, 0.5)], RED, &mut lower);
        fill_triangle([v(0.0, 0.0, 0.5), v(10.0, 10.0, 0.5), v(0.0, 10.0, 0.5)], RED, &mut upper);

        let a = painted(&lower);
        let b = painted(&upper);
        assert_eq!(a.len() + b.len(), 100, "shared edge double-drawn or gapped");
        for p in &a {
            assert!(!b.contains(p), "pixel {:?} drawn by both triangles", p);
        }
        for y in 0..10 {
            for x in 0..10 {
                assert!(
                    a.contains(&(x, y)) || b.contains(&(x, y)),
                    "pixel ({}, {}) left uncovered",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn depth_test_is_commutative_across_submission_order() {
        let near = [v(0.0, 0.0, 0.2), v(8.0, 0.0, 0.2), v(0.0, 8.0, 0.2)];
        let far = [v(0.0, 0.0, 0.7), v(8.0, 0.0, 0.7), v(0.0, 8.0, 0.7)];

        let mut ab = PixelBuffer::new(12, 12);
        fill_triangle(near, RED, &mut ab);
        fill_triangle(far, BLUE, &mut ab);

        let mut ba = PixelBuffer::new(12, 12);
        fill_triangle(far, BLUE, &mut ba);
        fill_triangle(near, RED, &mut ba);

        assert_eq!(ab.cells(), ba.cells());
        assert_eq!(ab.get(0, 0).unwrap().red, 255);
        assert_eq!(ab.get(0, 0).unwrap().blue, 0);
    }

    #[test]
    fn exact_depth_tie_keeps_the_first_write() {
        let tri = [v(0.0, 0.0, 0.5), v(8.0, 0.0, 0.5), v(0.0, 8.0, 0.5)];
        let mut buffer = PixelBuffer::new(12, 12);
        fill_triangle(tri, RED, &mut buffer);
        fill_triangle(tri, BLUE, &mut buffer);
        let cell = buffer.get(2, 2).unwrap();
        assert_eq!((cell.red, cell.blue), (255, 0));
    }

    #[test]
    fn collinear_vertices_write_nothing() {
        let mut buffer = PixelBuffer::new(16, 16);
        fill_triangle([v(0.0, 0.0, 0.5), v(5.0, 5.0, 0.5), v(10.0, 10.0, 0.5)], RED, &mut buffer);
        assert!(painted(&buffer).is_empty());
    }

    #[test]
    fn coincident_vertices_write_nothing() {
        let mut buffer = PixelBuffer::new(16, 16);
        fill_triangle([v(3.0, 3.0, 0.5), v(3.0, 3.0, 0.5), v(8.0, 9.0, 0.5)], RED, &mut buffer);
        assert!(painted(&buffer).is_empty());

        let mut buffer = PixelBuffer::new(16, 16);
        fill_triangle([v(3.0, 3.0, 0.5), v(3.0, 3.0, 0.5), v(3.0, 3.0, 0.5)], RED, &mut buffer);
        assert!(painted(&buffer).is_empty());
    }

    #[test]
    fn single_scanline_triangle_writes_nothing() {
        let mut buffer = PixelBuffer::new(16, 16);
        fill_triangle([v(1.0, 4.0, 0.5), v(5.0, 4.0, 0.5), v(9.0, 4.0, 0.5)], RED, &mut buffer);
        assert!(painted(&buffer).is_empty());
    }

    #[test]
    fn flat_top_triangle_fills_both_sides_of_the_apex() {
        let mut buffer = PixelBuffer::new(16, 16);
        fill_triangle([v(0.0, 0.0, 0.5), v(10.0, 0.0, 0.5), v(5.0, 10.0, 0.5)], RED, &mut buffer);
        let cells = painted(&buffer);
        assert!(!cells.is_empty());
        // The top row spans the full base under the half-open rule.
        for x in 0..10 {
            assert!(cells.contains(&(x, 0)), "base pixel ({}, 0) missing", x);
        }
        // Pixels on either side of the apex column are covered mid-way down.
        assert!(cells.contains(&(4, 4)));
        assert!(cells.contains(&(6, 4)));
    }

    #[test]
    fn off_screen_extent_is_clipped_silently() {
        let mut buffer = PixelBuffer::new(8, 8);
        fill_triangle([v(-4.0, -4.0, 0.5), v(12.0, -4.0, 0.5), v(-4.0, 12.0, 0.5)], RED, &mut buffer);
        // Interior rows that cross the buffer still land; nothing panicked.
        assert!(painted(&buffer).contains(&(0, 0)));
        assert!(painted(&buffer).contains(&(3, 3)));
    }

    #[test]
    fn fractional_vertices_follow_the_ceil_rule() {
        let mut buffer = PixelBuffer::new(16, 16);
        fill_triangle([v(1.5, 1.5, 0.5), v(9.5, 1.5, 0.5), v(1.5, 9.5, 0.5)], RED, &mut buffer);
        let cells = painted(&buffer);
        // First covered row and column are the ceilings of the fractional start.
        assert!(cells.iter().all(|&(x, y)| x >= 2 && y >= 2));
        assert!(cells.contains(&(2, 2)));
        assert!(!cells.contains(&(1, 1)));
    }
}

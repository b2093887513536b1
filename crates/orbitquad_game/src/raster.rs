//! Software rasterizer writing packed colors into a [`FrameBuffer`].
//!
//! Every write is clipped per cell, so shapes may hang off any edge.

use orbitquad_common::{Color, FrameBuffer};

use crate::geometry::deg_to_rad;

/// Angular resolution of [`draw_circle`], in samples per degree.
const CIRCLE_SAMPLES_PER_DEGREE: u32 = 10;

/// Fills `[y, y + size) × [x, x + size)`.
pub fn draw_quad(screen: &mut FrameBuffer, x: i32, y: i32, size: i32, color: Color) {
    let packed = color.to_packed();
    for py in y..y + size {
        for px in x..x + size {
            screen.plot(px, py, packed);
        }
    }
}

/// Fills a disc of `radius` whose bounding box starts at `(x, y)`.
///
/// The perimeter is sampled every 0.1°; each sample on the right half
/// emits one horizontal scanline mirrored around the vertical axis. The
/// overlapping scanlines cover the disc.
pub fn draw_circle(screen: &mut FrameBuffer, x: i32, y: i32, radius: i32, color: Color) {
    let packed = color.to_packed();
    let r = radius as f64;
    for step in 0..360 * CIRCLE_SAMPLES_PER_DEGREE {
        let angle = deg_to_rad(step as f64 / CIRCLE_SAMPLES_PER_DEGREE as f64);
        let x1 = (r * angle.cos()) as i32;
        let y1 = (r * angle.sin()) as i32;

        let row = y + y1 + radius;
        for i in (1 - x1)..=x1 {
            screen.plot(x + i + radius, row, packed);
        }
    }
}

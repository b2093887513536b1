//! Angle conversion and the box test used for collisions.

/// π truncated to seven digits.
pub const PI_APPROX: f64 = 3.141592;

#[inline]
pub fn deg_to_rad(degrees: impl Into<f64>) -> f64 {
    degrees.into() * PI_APPROX / 180.0
}

/// Reports a hit when either box's top-left corner lies inside the other
/// box, bounds inclusive.
///
/// Only corners are tested, so two boxes that cross without containing
/// each other's top-left corner are not reported.
pub fn boxes_overlap(ax: i32, ay: i32, a_size: i32, bx: i32, by: i32, b_size: i32) -> bool {
    corner_inside(bx, by, ax, ay, a_size) || corner_inside(ax, ay, bx, by, b_size)
}

#[inline]
fn corner_inside(px: i32, py: i32, x: i32, y: i32, size: i32) -> bool {
    px >= x && px <= x + size && py >= y && py <= y + size
}

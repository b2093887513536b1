use orbitquad_common::{Color, FrameBuffer};

use crate::config::GameConfig;
use crate::geometry::deg_to_rad;
use crate::raster::draw_circle;

/// Two player circles kept on opposite sides of a circle around the
/// screen center.
///
/// `first` and `second` are the top-left corners of each circle's
/// bounding box, which doubles as its collision box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitingPair {
    /// Rotate counter-clockwise (increasing angle) when set.
    pub rotate_left: bool,
    pub degrees_per_frame: i32,
    pub radius_from_center: i32,
    pub diameter: i32,
    pub total_degree: i32,
    pub first: (i32, i32),
    pub second: (i32, i32),
}

impl OrbitingPair {
    pub fn new(
        rotate_left: bool,
        degrees_per_frame: i32,
        radius_from_center: i32,
        diameter: i32,
    ) -> Self {
        Self {
            rotate_left,
            degrees_per_frame,
            radius_from_center,
            diameter,
            total_degree: 0,
            first: (0, 0),
            second: (0, 0),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            false,
            config.degrees_per_frame,
            config.orbit_radius,
            config.circle_diameter,
        )
    }

    pub fn change_direction(&mut self) {
        self.rotate_left = !self.rotate_left;
    }

    /// Advances one step and recomputes both positions around `center`.
    pub fn compute_location(&mut self, center: (i32, i32)) {
        if self.rotate_left {
            self.total_degree += self.degrees_per_frame;
        } else {
            self.total_degree -= self.degrees_per_frame;
        }
        self.total_degree = normalize_degree(self.total_degree);
        self.place(center);
    }

    /// Recomputes both positions from the current angle without advancing.
    pub fn place(&mut self, center: (i32, i32)) {
        self.first = self.orbit_point(self.total_degree, center);
        self.second = self.orbit_point(self.total_degree + 180, center);
    }

    pub fn draw(&mut self, screen: &mut FrameBuffer, center: (i32, i32)) {
        self.compute_location(center);
        let radius = self.diameter / 2;
        draw_circle(screen, self.first.0, self.first.1, radius, Color::GREEN);
        draw_circle(screen, self.second.0, self.second.1, radius, Color::GREEN);
    }

    fn orbit_point(&self, degree: i32, (cx, cy): (i32, i32)) -> (i32, i32) {
        let angle = deg_to_rad(degree);
        let r = self.radius_from_center as f64;
        ((angle.sin() * r) as i32 + cx, (angle.cos() * r) as i32 + cy)
    }
}

/// Folds an angle back toward `0..=360`.
///
/// Values above 360 wrap by modulo; negative values are mirrored as
/// `360 - degree`, so `-5` becomes `365` and wraps on the next step.
pub fn normalize_degree(degree: i32) -> i32 {
    if degree > 360 {
        degree % 360
    } else if degree < 0 {
        360 - degree
    } else {
        degree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: (i32, i32) = (512, 384);

    #[test]
    fn normalize_keeps_reflection_rule() {
        assert_eq!(normalize_degree(0), 0);
        assert_eq!(normalize_degree(360), 360);
        assert_eq!(normalize_degree(365), 5);
        assert_eq!(normalize_degree(725), 5);
        assert_eq!(normalize_degree(-5), 365);
        assert_eq!(normalize_degree(-400), 760);
    }

    #[test]
    fn clockwise_steps_down_and_reflects() {
        let mut pair = OrbitingPair::new(false, 5, 100, 30);
        pair.compute_location(CENTER);
        assert_eq!(pair.total_degree, 365);
        pair.compute_location(CENTER);
        assert_eq!(pair.total_degree, 360);
        pair.compute_location(CENTER);
        assert_eq!(pair.total_degree, 355);
    }

    #[test]
    fn counter_clockwise_wraps_by_modulo() {
        let mut pair = OrbitingPair::new(true, 5, 100, 30);
        pair.total_degree = 360;
        pair.compute_location(CENTER);
        assert_eq!(pair.total_degree, 5);
        pair.change_direction();
        assert!(!pair.rotate_left);
        pair.compute_location(CENTER);
        assert_eq!(pair.total_degree, 0);
    }

    #[test]
    fn zero_degree_points_straight_down() {
        let mut pair = OrbitingPair::new(false, 5, 100, 30);
        pair.place(CENTER);
        assert_eq!(pair.first, (512, 484));
        assert!((pair.second.1 - 284).abs() <= 1);
        assert!((pair.second.0 - 512).abs() <= 1);
    }

    #[test]
    fn positions_are_diametrically_opposite() {
        let mut pair = OrbitingPair::new(true, 1, 100, 30);
        for degree in 0..=365 {
            pair.total_degree = degree;
            pair.place(CENTER);
            let (fx, fy) = pair.first;
            let (sx, sy) = pair.second;
            assert!((fx + sx - 2 * CENTER.0).abs() <= 1, "x at {degree}°");
            assert!((fy + sy - 2 * CENTER.1).abs() <= 1, "y at {degree}°");

            let dx = (fx - CENTER.0) as f64;
            let dy = (fy - CENTER.1) as f64;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((dist - 100.0).abs() <= 1.5, "radius {dist} at {degree}°");
        }
    }

    #[test]
    fn draw_renders_two_green_discs() {
        let mut fb = FrameBuffer::new(1024, 768);
        let mut pair = OrbitingPair::new(false, 5, 100, 30);
        pair.draw(&mut fb, CENTER);

        let green = Color::GREEN.to_packed();
        for (x, y) in [pair.first, pair.second] {
            assert_eq!(fb.pixel(x + 15, y + 15), Some(green));
        }
        assert_eq!(fb.pixel(CENTER.0, CENTER.1), Some(0));
    }
}

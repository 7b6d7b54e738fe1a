//! Radial chart geometry.
//!
//! Angle zero points up and angles increase clockwise, so a date at the
//! start of the domain sits at twelve o'clock and the year winds around
//! the wheel like a clock face.

use std::f64::consts::FRAC_PI_2;
use std::f64::consts::TAU;

/// A point in the bounded coordinate system of a radial chart,
/// relative to the chart center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Maps an angle and a radius to chart coordinates.
pub fn point_on_circle(angle: f64, radius: f64) -> Point {
    Point {
        x: (angle - FRAC_PI_2).cos() * radius,
        y: (angle - FRAC_PI_2).sin() * radius,
    }
}

/// Maps chart coordinates, relative to the center, back to an angle
/// in `[0, 2π)`.
pub fn angle_of_point(x: f64, y: f64) -> f64 {
    let angle = y.atan2(x) + FRAC_PI_2;

    if angle < 0.0 { angle + TAU } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn angle_zero_points_up() {
        let point = point_on_circle(0.0, 100.0);

        assert!((point.x - 0.0).abs() < TOLERANCE);
        assert!((point.y + 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn angles_increase_clockwise() {
        let quarter = point_on_circle(PI / 2.0, 100.0);
        let half = point_on_circle(PI, 100.0);

        assert!((quarter.x - 100.0).abs() < TOLERANCE);
        assert!((quarter.y - 0.0).abs() < TOLERANCE);
        assert!((half.x - 0.0).abs() < TOLERANCE);
        assert!((half.y - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn angle_of_point_round_trips() {
        for i in 0..16 {
            let angle = i as f64 * TAU / 16.0;
            let point = point_on_circle(angle, 250.0);

            let recovered = angle_of_point(point.x, point.y);
            let difference = (recovered - angle).abs();

            // Angles near 2π wrap back to zero.
            assert!(difference < TOLERANCE || (difference - TAU).abs() < TOLERANCE);
        }
    }
}

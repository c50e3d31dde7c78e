//! Tension-controlled curve smoothing.
//!
//! A cardinal spline variant: tension `1.0` hugs the control points exactly
//! (straight segments), lower values relax each joint toward a Catmull-Rom
//! fit. Used by waved shapes to turn alternating peak points into a smooth
//! contour.

use crate::core::types::{Point, round_to};
use crate::render::path;

/// Per-axis tension smoother emitting cubic path segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tension {
    tension_x: f64,
    tension_y: f64,
}

impl Tension {
    #[must_use]
    pub fn new(tension_x: f64, tension_y: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&tension_x) && (0.0..=1.0).contains(&tension_y),
            "tension outside [0, 1]"
        );
        Self {
            tension_x,
            tension_y,
        }
    }

    /// Returns path segments through `points`, starting from the first point.
    ///
    /// The caller is expected to prepend its own `move_to(points[0])`. A
    /// closed contour (first and last point coincide) wraps its end tangents
    /// around the seam so no kink is visible there.
    #[must_use]
    pub fn smooth(&self, points: &[Point]) -> String {
        let points = dedup_adjacent(points);
        if points.len() < 2 {
            return String::new();
        }
        if self.tension_x >= 1.0 && self.tension_y >= 1.0 {
            return path::polyline(&points);
        }

        let closed = points_coincide(points[0], points[points.len() - 1]);
        let relax_x = (1.0 - self.tension_x) / 6.0;
        let relax_y = (1.0 - self.tension_y) / 6.0;

        let mut data = String::new();
        for i in 0..points.len() - 1 {
            let p1 = points[i];
            let p2 = points[i + 1];
            let p0 = if i == 0 {
                if closed { points[points.len() - 2] } else { p1 }
            } else {
                points[i - 1]
            };
            let p3 = match points.get(i + 2) {
                Some(next) => *next,
                None if closed => points[1],
                None => p2,
            };

            let control_a = Point::new(
                p1.x + (p2.x - p0.x) * relax_x,
                p1.y + (p2.y - p0.y) * relax_y,
            );
            let control_b = Point::new(
                p2.x - (p3.x - p1.x) * relax_x,
                p2.y - (p3.y - p1.y) * relax_y,
            );
            data.push_str(&path::cubic_curve_to(p2, control_a, control_b));
        }
        data
    }
}

fn points_coincide(a: Point, b: Point) -> bool {
    round_to(a.x, 3) == round_to(b.x, 3) && round_to(a.y, 3) == round_to(b.y, 3)
}

fn dedup_adjacent(points: &[Point]) -> Vec<Point> {
    let mut deduped: Vec<Point> = Vec::with_capacity(points.len());
    for point in points {
        if deduped
            .last()
            .is_some_and(|last| points_coincide(*last, *point))
        {
            continue;
        }
        deduped.push(*point);
    }
    deduped
}

#[cfg(test)]
mod tests {
    use super::Tension;
    use crate::core::types::Point;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
        ]
    }

    #[test]
    fn full_tension_degrades_to_polyline() {
        let data = Tension::new(1.0, 1.0).smooth(&square());
        assert!(data.starts_with('L'));
        assert!(!data.contains('C'));
    }

    #[test]
    fn relaxed_tension_emits_one_cubic_per_segment() {
        let data = Tension::new(0.8, 0.8).smooth(&square());
        assert_eq!(data.matches('C').count(), square().len() - 1);
    }

    #[test]
    fn smoothing_is_deterministic() {
        let smoother = Tension::new(0.5, 0.5);
        assert_eq!(smoother.smooth(&square()), smoother.smooth(&square()));
    }

    #[test]
    fn adjacent_duplicates_are_dropped() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0001, 0.0001),
            Point::new(10.0, 0.0),
        ];
        let data = Tension::new(0.8, 0.8).smooth(&points);
        assert_eq!(data.matches('C').count(), 1);
    }

    #[test]
    fn fewer_than_two_points_yield_empty_data() {
        let smoother = Tension::new(0.8, 0.8);
        assert!(smoother.smooth(&[]).is_empty());
        assert!(smoother.smooth(&[Point::new(1.0, 1.0)]).is_empty());
    }
}

//! SVG path-data builders.
//!
//! All coordinates are rounded to three decimals before emission so repeated
//! draws of unchanged geometry produce byte-identical `d` strings.

use crate::core::types::{Point, round_to};

fn fmt_coord(value: f64) -> String {
    format!("{}", round_to(value, 3))
}

fn fmt_point(point: Point) -> String {
    format!("{},{}", fmt_coord(point.x), fmt_coord(point.y))
}

#[must_use]
pub fn move_to(point: Point) -> String {
    format!("M{}", fmt_point(point))
}

#[must_use]
pub fn line_to(point: Point) -> String {
    format!("L{}", fmt_point(point))
}

/// Cubic segment to `to` with control points `control_a` (outgoing) and
/// `control_b` (incoming).
#[must_use]
pub fn cubic_curve_to(to: Point, control_a: Point, control_b: Point) -> String {
    format!(
        "C{} {} {}",
        fmt_point(control_a),
        fmt_point(control_b),
        fmt_point(to)
    )
}

/// Circular arc segment to `to`.
#[must_use]
pub fn arc_to(radius: f64, large_arc: bool, sweep: bool, to: Point) -> String {
    format!(
        "A{},{} 0 {},{} {}",
        fmt_coord(radius),
        fmt_coord(radius),
        u8::from(large_arc),
        u8::from(sweep),
        fmt_point(to)
    )
}

#[must_use]
pub fn close() -> String {
    "Z".to_owned()
}

/// Straight segments through `points`, starting from the second point.
#[must_use]
pub fn polyline(points: &[Point]) -> String {
    points.iter().skip(1).map(|point| line_to(*point)).collect()
}

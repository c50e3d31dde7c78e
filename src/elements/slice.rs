//! Annular arc wedge, the building block of pie slices and progress rings.

use crate::core::types::{Point, cos_deg, sin_deg};
use crate::core::VisualNode;
use crate::elements::Element;
use crate::render::path;
use crate::render::PathPrimitive;

pub const KIND: &str = "slice";

/// Arc wedge between `inner_radius` and `radius`, spanning `arc_degrees`
/// clockwise from `start_angle_degrees`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    node: VisualNode,
    radius: f64,
    inner_radius: f64,
    arc_degrees: f64,
    start_angle_degrees: f64,
    data: String,
}

impl Default for Slice {
    fn default() -> Self {
        Self {
            node: VisualNode::new(),
            radius: 0.0,
            inner_radius: 0.0,
            arc_degrees: 0.0,
            // Progress-style slices grow from 12 o'clock.
            start_angle_degrees: -90.0,
            data: String::new(),
        }
    }
}

impl Slice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        debug_assert!(radius >= 0.0, "negative slice radius");
        if self.radius != radius {
            self.radius = radius;
            self.node.mark_dirty();
        }
    }

    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn set_inner_radius(&mut self, inner_radius: f64) {
        debug_assert!(inner_radius >= 0.0, "negative slice inner radius");
        if self.inner_radius != inner_radius {
            self.inner_radius = inner_radius;
            self.node.mark_dirty();
        }
    }

    #[must_use]
    pub fn arc_degrees(&self) -> f64 {
        self.arc_degrees
    }

    pub fn set_arc_degrees(&mut self, arc_degrees: f64) {
        if self.arc_degrees != arc_degrees {
            self.arc_degrees = arc_degrees;
            self.node.mark_dirty();
        }
    }

    #[must_use]
    pub fn start_angle_degrees(&self) -> f64 {
        self.start_angle_degrees
    }

    pub fn set_start_angle_degrees(&mut self, start_angle_degrees: f64) {
        if self.start_angle_degrees != start_angle_degrees {
            self.start_angle_degrees = start_angle_degrees;
            self.node.mark_dirty();
        }
    }

    /// Last built path data.
    #[must_use]
    pub fn path_data(&self) -> &str {
        &self.data
    }

    #[must_use]
    pub fn to_primitive(&self) -> Option<PathPrimitive> {
        if self.data.is_empty() {
            return None;
        }
        let mut primitive =
            PathPrimitive::new(self.data.clone()).with_opacity(self.node.opacity());
        if let Some(fill) = self.node.fill() {
            primitive = primitive.with_fill(fill, self.node.fill_opacity());
        }
        Some(primitive)
    }

    fn point_at(&self, radius: f64, angle: f64) -> Point {
        Point::new(radius * cos_deg(angle), radius * sin_deg(angle))
    }

    fn build_path(&self) -> String {
        let arc = self.arc_degrees.clamp(0.0, 360.0);
        if self.radius <= 0.0 || arc <= 0.0 {
            return String::new();
        }

        let start = self.start_angle_degrees;
        let end = start + arc;

        if arc >= 360.0 {
            return self.build_ring_path(start);
        }

        let outer_start = self.point_at(self.radius, start);
        let outer_end = self.point_at(self.radius, end);
        let large_arc = arc > 180.0;

        let mut data = String::new();
        if self.inner_radius > 0.0 {
            let inner_start = self.point_at(self.inner_radius, start);
            let inner_end = self.point_at(self.inner_radius, end);
            data.push_str(&path::move_to(outer_start));
            data.push_str(&path::arc_to(self.radius, large_arc, true, outer_end));
            data.push_str(&path::line_to(inner_end));
            data.push_str(&path::arc_to(
                self.inner_radius,
                large_arc,
                false,
                inner_start,
            ));
        } else {
            data.push_str(&path::move_to(Point::new(0.0, 0.0)));
            data.push_str(&path::line_to(outer_start));
            data.push_str(&path::arc_to(self.radius, large_arc, true, outer_end));
        }
        data.push_str(&path::close());
        data
    }

    /// Full 360-degree arc: two half arcs per contour, since a single SVG arc
    /// command cannot express a complete circle.
    fn build_ring_path(&self, start: f64) -> String {
        let mut data = String::new();
        let outer_start = self.point_at(self.radius, start);
        let outer_half = self.point_at(self.radius, start + 180.0);
        data.push_str(&path::move_to(outer_start));
        data.push_str(&path::arc_to(self.radius, false, true, outer_half));
        data.push_str(&path::arc_to(self.radius, false, true, outer_start));
        data.push_str(&path::close());

        if self.inner_radius > 0.0 {
            let inner_start = self.point_at(self.inner_radius, start);
            let inner_half = self.point_at(self.inner_radius, start + 180.0);
            data.push_str(&path::move_to(inner_start));
            data.push_str(&path::arc_to(self.inner_radius, false, false, inner_half));
            data.push_str(&path::arc_to(self.inner_radius, false, false, inner_start));
            data.push_str(&path::close());
        }
        data
    }
}

impl Element for Slice {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn node(&self) -> &VisualNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut VisualNode {
        &mut self.node
    }

    fn draw(&mut self) {
        self.data = self.build_path();
        let _ = self.node.take_dirty();
    }

    fn push_primitives(&self, frame: &mut crate::render::RenderFrame) {
        if !self.node.is_visible() {
            return;
        }
        if let Some(primitive) = self.to_primitive() {
            frame.paths.push(primitive);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Slice;
    use crate::elements::Element;

    #[test]
    fn zero_arc_or_radius_yields_no_path() {
        let mut slice = Slice::new();
        slice.set_radius(50.0);
        slice.draw();
        assert!(slice.path_data().is_empty());

        slice.set_arc_degrees(90.0);
        slice.set_radius(0.0);
        slice.draw();
        assert!(slice.path_data().is_empty());
    }

    #[test]
    fn ring_slice_emits_two_closed_contours() {
        let mut slice = Slice::new();
        slice.set_radius(53.0);
        slice.set_inner_radius(42.0);
        slice.set_arc_degrees(360.0);
        slice.draw();

        let data = slice.path_data();
        assert_eq!(data.matches('M').count(), 2);
        assert_eq!(data.matches('Z').count(), 2);
        assert_eq!(data.matches('A').count(), 4);
    }

    #[test]
    fn partial_arc_uses_large_arc_flag_past_half_turn() {
        let mut slice = Slice::new();
        slice.set_radius(50.0);
        slice.set_inner_radius(45.0);

        slice.set_arc_degrees(90.0);
        slice.draw();
        assert!(slice.path_data().contains("0 0,1"));

        slice.set_arc_degrees(270.0);
        slice.draw();
        assert!(slice.path_data().contains("0 1,1"));
    }

    #[test]
    fn redraw_without_changes_is_stable() {
        let mut slice = Slice::new();
        slice.set_radius(50.0);
        slice.set_inner_radius(45.0);
        slice.set_arc_degrees(108.0);
        slice.draw();
        let first = slice.path_data().to_owned();
        slice.draw();
        assert_eq!(slice.path_data(), first);
    }
}

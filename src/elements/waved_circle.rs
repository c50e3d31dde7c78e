//! Waved (sinusoidally perturbed) circle contour.

use std::f64::consts::PI;

use crate::core::types::{Length, Point, cos_deg, sin_deg};
use crate::core::VisualNode;
use crate::elements::Element;
use crate::render::path;
use crate::render::{PathPrimitive, Tension};

pub const KIND: &str = "waved-circle";

/// Ring whose contours oscillate between an inner and outer peak radius.
///
/// Geometry inputs are independent invalidating properties; nothing is
/// recomputed until `draw` runs, so bursts of property changes coalesce into
/// one rebuild per render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct WavedCircle {
    node: VisualNode,
    radius: f64,
    inner_radius: Length,
    wave_length: f64,
    wave_height: f64,
    tension: f64,
    data: String,
}

impl Default for WavedCircle {
    fn default() -> Self {
        let mut node = VisualNode::new();
        node.set_fill(None);
        node.set_fill_opacity(0.0);
        Self {
            node,
            radius: 0.0,
            inner_radius: Length::Pixels(0.0),
            wave_length: 16.0,
            wave_height: 4.0,
            tension: 0.8,
            data: String::new(),
        }
    }
}

impl WavedCircle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        debug_assert!(radius >= 0.0, "negative radius");
        if self.radius != radius {
            self.radius = radius;
            self.node.mark_dirty();
        }
    }

    #[must_use]
    pub fn inner_radius(&self) -> Length {
        self.inner_radius
    }

    pub fn set_inner_radius(&mut self, inner_radius: Length) {
        if self.inner_radius != inner_radius {
            self.inner_radius = inner_radius;
            self.node.mark_dirty();
        }
    }

    /// Inner radius resolved to pixels; percent values are relative to half
    /// the node's smaller extent.
    #[must_use]
    pub fn pixel_inner_radius(&self) -> f64 {
        self.inner_radius.resolve(self.node.half_extent())
    }

    #[must_use]
    pub fn wave_length(&self) -> f64 {
        self.wave_length
    }

    pub fn set_wave_length(&mut self, wave_length: f64) {
        debug_assert!(wave_length > 0.0, "non-positive wave length");
        if self.wave_length != wave_length {
            self.wave_length = wave_length;
            self.node.mark_dirty();
        }
    }

    #[must_use]
    pub fn wave_height(&self) -> f64 {
        self.wave_height
    }

    pub fn set_wave_height(&mut self, wave_height: f64) {
        if self.wave_height != wave_height {
            self.wave_height = wave_height;
            self.node.mark_dirty();
        }
    }

    #[must_use]
    pub fn tension(&self) -> f64 {
        self.tension
    }

    pub fn set_tension(&mut self, tension: f64) {
        debug_assert!((0.0..=1.0).contains(&tension), "tension outside [0, 1]");
        if self.tension != tension {
            self.tension = tension;
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

    /// Returns the wave vertices the contour at `radius` consists of.
    ///
    /// The requested wave length is snapped so an integer number of waves
    /// tiles the circumference exactly; a mismatched final wave would show as
    /// a seam. Each wave contributes an inner peak at `radius - height/2` and
    /// a half-wave-offset outer peak at `radius + height/2`. The loop runs
    /// through the wave count inclusive, and the final emitted point (the
    /// overshooting outer peak) is dropped, which closes the contour on a
    /// repeat of the starting inner peak.
    #[must_use]
    pub fn wave_points(&self, radius: f64) -> Vec<Point> {
        if radius <= 0.0 || self.wave_length <= 0.0 {
            return Vec::new();
        }

        let circle_length = radius * PI * 2.0;
        let half_wave_height = self.wave_height / 2.0;
        let count = (circle_length / self.wave_length).round().max(1.0) as u64;
        let wave_length = circle_length / count as f64;
        let half_wave_length = wave_length / 2.0;

        let mut points = Vec::with_capacity((count as usize + 1) * 2);
        for i in 0..=count {
            let angle1 = (i as f64 * wave_length) / circle_length * 360.0;
            let angle2 = (i as f64 * wave_length + half_wave_length) / circle_length * 360.0;
            points.push(Point::new(
                (radius - half_wave_height) * cos_deg(angle1),
                (radius - half_wave_height) * sin_deg(angle1),
            ));
            points.push(Point::new(
                (radius + half_wave_height) * cos_deg(angle2),
                (radius + half_wave_height) * sin_deg(angle2),
            ));
        }
        points.pop();
        points
    }

    fn contour(&self, points: &[Point]) -> String {
        match points.first() {
            Some(first) => {
                let smoother = Tension::new(self.tension, self.tension);
                format!("{}{}", path::move_to(*first), smoother.smooth(points))
            }
            None => String::new(),
        }
    }

    fn build_path(&self) -> String {
        let mut data = String::new();

        if self.radius > 0.0 {
            let points = self.wave_points(self.radius);
            data.push_str(&self.contour(&points));
        }

        let inner_radius = self.pixel_inner_radius();
        if inner_radius > 0.0 {
            // Reversed winding so the inner contour cuts a hole out of the fill.
            let mut points = self.wave_points(inner_radius);
            points.reverse();
            data.push_str(&self.contour(&points));
        }

        data
    }
}

impl Element for WavedCircle {
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
        // Single assignment: no partially rebuilt path is ever observable.
        self.data = self.build_path();
        let _ = self.node_mut().take_dirty();
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

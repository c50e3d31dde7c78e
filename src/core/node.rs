use indexmap::IndexMap;
use tracing::trace;

use crate::core::types::Point;
use crate::render::Color;

/// Target property values a node adopts when a named state is applied.
///
/// Transitions are delegated to the host's animation layer; the node only
/// records the requested duration and jumps to the target values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeState {
    pub transition_duration_ms: u64,
    pub opacity: Option<f64>,
    pub fill_opacity: Option<f64>,
    pub visible: Option<bool>,
}

/// Composition-based visual capability shared by every element.
///
/// Elements own a `VisualNode` instead of inheriting from a display-object
/// chain: position, size, paint, visibility, interaction flags and the dirty
/// bit all live here, while geometry stays in the owning element.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    position: Point,
    width: f64,
    height: f64,
    fill: Option<Color>,
    fill_opacity: f64,
    opacity: f64,
    visible: bool,
    interactions_enabled: bool,
    dirty: bool,
    states: IndexMap<String, NodeState>,
}

impl Default for VisualNode {
    fn default() -> Self {
        Self {
            position: Point::default(),
            width: 0.0,
            height: 0.0,
            fill: None,
            fill_opacity: 1.0,
            opacity: 1.0,
            visible: true,
            interactions_enabled: true,
            dirty: true,
            states: IndexMap::new(),
        }
    }
}

impl VisualNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        if self.position != position {
            self.position = position;
            self.mark_dirty();
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative node size");
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.mark_dirty();
        }
    }

    /// Half of the smaller inner extent; percent radii resolve against this.
    #[must_use]
    pub fn half_extent(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    #[must_use]
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Option<Color>) {
        if self.fill != fill {
            self.fill = fill;
            self.mark_dirty();
        }
    }

    #[must_use]
    pub fn fill_opacity(&self) -> f64 {
        self.fill_opacity
    }

    pub fn set_fill_opacity(&mut self, fill_opacity: f64) {
        debug_assert!(
            (0.0..=1.0).contains(&fill_opacity),
            "fill opacity outside [0, 1]"
        );
        if self.fill_opacity != fill_opacity {
            self.fill_opacity = fill_opacity;
            self.mark_dirty();
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        debug_assert!((0.0..=1.0).contains(&opacity), "opacity outside [0, 1]");
        if self.opacity != opacity {
            self.opacity = opacity;
            self.mark_dirty();
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.mark_dirty();
        }
    }

    #[must_use]
    pub fn interactions_enabled(&self) -> bool {
        self.interactions_enabled
    }

    pub fn set_interactions_enabled(&mut self, enabled: bool) {
        self.interactions_enabled = enabled;
    }

    /// Registers (or replaces) a named state.
    pub fn create_state(&mut self, name: impl Into<String>, state: NodeState) {
        self.states.insert(name.into(), state);
    }

    #[must_use]
    pub fn state(&self, name: &str) -> Option<&NodeState> {
        self.states.get(name)
    }

    /// Applies a previously registered state's target values.
    ///
    /// Returns the state's transition duration, or `None` if no such state
    /// exists (in which case nothing changes).
    pub fn apply_state(&mut self, name: &str) -> Option<u64> {
        let state = *self.states.get(name)?;
        trace!(state = name, "applying node state");
        if let Some(opacity) = state.opacity {
            self.set_opacity(opacity);
        }
        if let Some(fill_opacity) = state.fill_opacity {
            self.set_fill_opacity(fill_opacity);
        }
        if let Some(visible) = state.visible {
            self.set_visible(visible);
        }
        Some(state.transition_duration_ms)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears and returns the dirty bit; the render step calls this once per pass.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

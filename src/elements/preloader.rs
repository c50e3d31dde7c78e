//! Progress preloader widget.
//!
//! A composite of two ring slices (full background ring + growing progress
//! ring) and a percentage label. `progress` drives visibility: values in
//! `(0, 1)` reveal the widget subject to the configured delay, `1.0` schedules
//! a deferred fade-out on the next frame tick.

use std::rc::Rc;

use tracing::debug;

use crate::core::clock::{Clock, SystemClock};
use crate::core::scheduler::{FrameScheduler, FrameTask};
use crate::core::theme::{ColorRole, InterfaceColors};
use crate::core::{NodeState, VisualNode};
use crate::elements::{Element, Label, Slice};
use crate::render::{RenderFrame, TextHAlign, TextVAlign};

pub const KIND: &str = "preloader";

pub const HIDDEN_STATE: &str = "hidden";
const HIDDEN_TRANSITION_MS: u64 = 2000;
const DEFAULT_DELAY_MS: i64 = 500;

#[derive(Debug)]
pub struct Preloader {
    node: VisualNode,
    background_slice: Slice,
    progress_slice: Slice,
    label: Label,
    progress: f64,
    delay_ms: i64,
    started_at: Option<i64>,
    clock: Rc<dyn Clock>,
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new(&InterfaceColors::default())
    }
}

impl Preloader {
    #[must_use]
    pub fn new(theme: &InterfaceColors) -> Self {
        Self::with_clock(theme, Rc::new(SystemClock))
    }

    /// Construction with an explicit clock; tests drive a [`ManualClock`]
    /// through here.
    ///
    /// [`ManualClock`]: crate::core::ManualClock
    #[must_use]
    pub fn with_clock(theme: &InterfaceColors, clock: Rc<dyn Clock>) -> Self {
        let mut node = VisualNode::new();
        node.set_fill(Some(theme.get(ColorRole::Background)));
        node.create_state(
            HIDDEN_STATE,
            NodeState {
                transition_duration_ms: HIDDEN_TRANSITION_MS,
                opacity: Some(0.0),
                ..NodeState::default()
            },
        );

        let mut background_slice = Slice::new();
        background_slice.set_radius(53.0);
        background_slice.set_inner_radius(42.0);
        background_slice.set_arc_degrees(360.0);
        background_slice
            .node_mut()
            .set_fill(Some(theme.get(ColorRole::Fill)));
        background_slice.node_mut().set_fill_opacity(0.8);

        let mut progress_slice = Slice::new();
        progress_slice.set_radius(50.0);
        progress_slice.set_inner_radius(45.0);
        progress_slice
            .node_mut()
            .set_fill(Some(theme.get(ColorRole::AlternativeBackground)));
        progress_slice.node_mut().set_fill_opacity(0.2);

        let mut label = Label::new();
        label.set_alignment(TextHAlign::Center, TextVAlign::Middle);
        label.node_mut().set_fill(Some(theme.get(ColorRole::Text)));
        label.node_mut().set_fill_opacity(0.4);

        // Hidden by default; only loading progress reveals the widget.
        node.set_visible(false);
        node.set_opacity(0.0);
        node.set_interactions_enabled(false);

        Self {
            node,
            background_slice,
            progress_slice,
            label,
            progress: 0.0,
            delay_ms: DEFAULT_DELAY_MS,
            started_at: None,
            clock,
        }
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Updates load progress in `[0, 1]` and applies its visibility policy.
    ///
    /// Reaching `1.0` disables interactions and schedules one coalesced
    /// [`FrameTask::HidePreloader`] for the next tick. Values in `(0, 1)`
    /// reveal the widget: immediately when `delay_ms` is zero, otherwise
    /// gated on the delay window. Out-of-range values pass through
    /// unvalidated (debug builds assert).
    pub fn set_progress(&mut self, value: f64, scheduler: &mut FrameScheduler) {
        debug_assert!((0.0..=1.0).contains(&value), "progress outside [0, 1]");
        self.progress = value;

        self.progress_slice.set_arc_degrees(360.0 * value);
        self.label.set_text(format!("{}%", (value * 100.0).round()));

        if value >= 1.0 {
            self.started_at = None;
            // Deferred so the finished frame is presented before the fade-out.
            scheduler.schedule_once(FrameTask::HidePreloader);
            self.node.set_interactions_enabled(false);
        } else if value > 0.0 {
            if self.delay_ms > 0 {
                let now = self.clock.now_millis();
                match self.started_at {
                    None => self.started_at = Some(now),
                    // Legacy gate kept verbatim: this reveals while the delay
                    // window is still open, not after it has elapsed.
                    Some(started) if started + self.delay_ms >= now => self.reveal(),
                    Some(_) => {}
                }
            } else {
                self.reveal();
            }
        }
        self.node.mark_dirty();
    }

    #[must_use]
    pub fn delay_ms(&self) -> i64 {
        self.delay_ms
    }

    /// Delay before the preloader may appear. Loads that start and finish
    /// inside the window never flash the widget.
    pub fn set_delay_ms(&mut self, delay_ms: i64) {
        self.delay_ms = delay_ms;
    }

    fn reveal(&mut self) {
        debug!("revealing preloader");
        self.node.set_visible(true);
        self.node.set_opacity(1.0);
        self.node.set_interactions_enabled(true);
    }

    /// Fades the widget out via its `hidden` state. Idempotent.
    pub fn hide(&mut self) {
        let _ = self.node.apply_state(HIDDEN_STATE);
        self.node.set_visible(false);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.node.is_visible()
    }

    #[must_use]
    pub fn interactions_enabled(&self) -> bool {
        self.node.interactions_enabled()
    }

    #[must_use]
    pub fn label_text(&self) -> &str {
        self.label.text()
    }

    #[must_use]
    pub fn progress_arc_degrees(&self) -> f64 {
        self.progress_slice.arc_degrees()
    }

    #[must_use]
    pub fn background_slice(&self) -> &Slice {
        &self.background_slice
    }

    #[must_use]
    pub fn progress_slice(&self) -> &Slice {
        &self.progress_slice
    }

}

impl Element for Preloader {
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
        self.background_slice.draw();
        self.progress_slice.draw();
        self.label.draw();
        let _ = self.node_mut().take_dirty();
    }

    /// Appends the widget's primitives to `frame` when visible.
    fn push_primitives(&self, frame: &mut RenderFrame) {
        if !self.node.is_visible() {
            return;
        }
        if let Some(primitive) = self.background_slice.to_primitive() {
            frame.paths.push(primitive);
        }
        if let Some(primitive) = self.progress_slice.to_primitive() {
            frame.paths.push(primitive);
        }
        if let Some(primitive) = self.label.to_primitive() {
            frame.texts.push(primitive);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

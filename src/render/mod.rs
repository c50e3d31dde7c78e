mod frame;
mod null_renderer;
pub mod path;
mod primitives;
mod smoothing;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, PathPrimitive, TextHAlign, TextPrimitive, TextVAlign};
pub use smoothing::Tension;

use crate::error::SceneResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from element and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> SceneResult<()>;
}

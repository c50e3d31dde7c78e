//! scenechart: scene-graph chart component toolkit.
//!
//! This crate provides a composition-based visual element model with explicit
//! invalidation, SVG path primitives (slices, waved circles, tension-smoothed
//! curves), a delay-gated progress preloader, and a locale/translation service
//! for chart UI prompts. Rendering backends plug in behind `render::Renderer`.

pub mod api;
pub mod core;
pub mod elements;
pub mod error;
pub mod locale;
pub mod render;
pub mod telemetry;

pub use api::{SceneSurface, SceneSurfaceConfig};
pub use error::{SceneError, SceneResult};

mod surface;

pub use surface::{SceneSurface, SceneSurfaceConfig};

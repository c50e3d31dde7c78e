pub mod label;
pub mod preloader;
pub mod slice;
pub mod waved_circle;

pub use label::Label;
pub use preloader::Preloader;
pub use slice::Slice;
pub use waved_circle::WavedCircle;

use indexmap::IndexMap;

use crate::core::VisualNode;
use crate::error::{SceneError, SceneResult};
use crate::render::RenderFrame;

/// Capability shared by every visual element.
///
/// Elements compose a [`VisualNode`] for position/paint/dirty state and keep
/// their own geometry; `draw` rebuilds cached geometry when needed, and
/// `push_primitives` contributes the element's draw commands to a frame.
pub trait Element {
    fn kind(&self) -> &'static str;
    fn node(&self) -> &VisualNode;
    fn node_mut(&mut self) -> &mut VisualNode;
    fn draw(&mut self);
    fn push_primitives(&self, frame: &mut RenderFrame);

    /// Concrete-type access for hosts holding elements behind the trait.
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

impl std::fmt::Debug for dyn Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element").field("kind", &self.kind()).finish()
    }
}

type ElementFactory = fn() -> Box<dyn Element>;

/// Explicit factory table for constructing elements by kind name.
///
/// Passed via configuration instead of living in process-wide mutable state,
/// so hosts control exactly which element kinds are constructible.
#[derive(Default)]
pub struct ElementRegistry {
    factories: IndexMap<&'static str, ElementFactory>,
}

impl std::fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

impl ElementRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the crate's built-in element kinds.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(slice::KIND, || Box::new(Slice::new()));
        registry.register(label::KIND, || Box::new(Label::new()));
        registry.register(waved_circle::KIND, || Box::new(WavedCircle::new()));
        registry
    }

    pub fn register(&mut self, kind: &'static str, factory: ElementFactory) {
        self.factories.insert(kind, factory);
    }

    pub fn create(&self, kind: &str) -> SceneResult<Box<dyn Element>> {
        self.factories
            .get(kind)
            .map(|factory| factory())
            .ok_or_else(|| SceneError::UnknownElementKind(kind.to_owned()))
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}

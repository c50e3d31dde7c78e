use std::rc::Rc;

use tracing::trace;

use crate::core::clock::Clock;
use crate::core::scheduler::{FrameScheduler, FrameTask};
use crate::core::theme::InterfaceColors;
use crate::core::Viewport;
use crate::elements::{Element, ElementRegistry, Preloader};
use crate::error::SceneResult;
use crate::locale::Language;
use crate::render::{RenderFrame, Renderer};

/// Construction-time settings for a [`SceneSurface`].
#[derive(Debug, Clone)]
pub struct SceneSurfaceConfig {
    viewport: Viewport,
    theme: InterfaceColors,
    preloader_delay_ms: i64,
}

impl SceneSurfaceConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            theme: InterfaceColors::default(),
            preloader_delay_ms: 500,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: InterfaceColors) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_preloader_delay_ms(mut self, delay_ms: i64) -> Self {
        self.preloader_delay_ms = delay_ms;
        self
    }
}

/// Facade tying the component model together: owns the frame scheduler, the
/// preloader, host-created elements, the element factory table and the
/// language service, and drives one renderer.
///
/// All mutation is synchronous on the caller's thread; the only deferred work
/// is whatever sits in the frame-task queue, drained once per `run_frame`.
pub struct SceneSurface<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    theme: InterfaceColors,
    scheduler: FrameScheduler,
    registry: ElementRegistry,
    preloader: Preloader,
    elements: Vec<Box<dyn Element>>,
    language: Language,
}

impl<R: Renderer> std::fmt::Debug for SceneSurface<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneSurface")
            .field("viewport", &self.viewport)
            .field("theme", &self.theme)
            .field("scheduler", &self.scheduler)
            .field("registry", &self.registry)
            .field("preloader", &self.preloader)
            .field("element_count", &self.elements.len())
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> SceneSurface<R> {
    pub fn new(renderer: R, config: SceneSurfaceConfig) -> SceneResult<Self> {
        config.viewport.validate()?;

        let mut preloader = Preloader::new(&config.theme);
        preloader.set_delay_ms(config.preloader_delay_ms);
        preloader.node_mut().set_size(
            f64::from(config.viewport.width),
            f64::from(config.viewport.height),
        );

        Ok(Self {
            renderer,
            viewport: config.viewport,
            theme: config.theme,
            scheduler: FrameScheduler::new(),
            registry: ElementRegistry::with_builtin(),
            preloader,
            elements: Vec::new(),
            language: Language::new(),
        })
    }

    /// Like [`new`](Self::new), with an explicit clock driving the preloader's
    /// delay gate. Used by tests.
    pub fn with_clock(
        renderer: R,
        config: SceneSurfaceConfig,
        clock: Rc<dyn Clock>,
    ) -> SceneResult<Self> {
        let mut surface = Self::new(renderer, config)?;
        let mut preloader = Preloader::with_clock(&surface.theme, clock);
        preloader.set_delay_ms(surface.preloader.delay_ms());
        preloader.node_mut().set_size(
            f64::from(surface.viewport.width),
            f64::from(surface.viewport.height),
        );
        surface.preloader = preloader;
        Ok(surface)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resizes the surface. Queues one geometry rebuild for the next frame so
    /// size-relative element properties pick up the new extent.
    pub fn set_viewport(&mut self, viewport: Viewport) -> SceneResult<()> {
        viewport.validate()?;
        self.viewport = viewport;
        self.preloader
            .node_mut()
            .set_size(f64::from(viewport.width), f64::from(viewport.height));
        self.scheduler.schedule_once(FrameTask::RebuildGeometry);
        Ok(())
    }

    #[must_use]
    pub fn theme(&self) -> &InterfaceColors {
        &self.theme
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn preloader(&self) -> &Preloader {
        &self.preloader
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn language_mut(&mut self) -> &mut Language {
        &mut self.language
    }

    #[must_use]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ElementRegistry {
        &mut self.registry
    }

    /// Reports load progress to the preloader.
    pub fn set_load_progress(&mut self, progress: f64) {
        self.preloader.set_progress(progress, &mut self.scheduler);
    }

    /// Constructs an element by registered kind name and adds it to the scene.
    /// Returns its index.
    pub fn create_element(&mut self, kind: &str) -> SceneResult<usize> {
        let element = self.registry.create(kind)?;
        Ok(self.add_element(element))
    }

    /// Adds a host-constructed element to the scene. Returns its index.
    pub fn add_element(&mut self, element: Box<dyn Element>) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Option<&dyn Element> {
        self.elements.get(index).map(Box::as_ref)
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut Box<dyn Element>> {
        self.elements.get_mut(index)
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Runs one frame: drains due frame tasks, rebuilds element geometry,
    /// assembles the frame and hands it to the renderer.
    pub fn run_frame(&mut self) -> SceneResult<RenderFrame> {
        for task in self.scheduler.take_due() {
            trace!(?task, "running frame task");
            match task {
                FrameTask::HidePreloader => self.preloader.hide(),
                FrameTask::RebuildGeometry => {
                    for element in &mut self.elements {
                        element.node_mut().mark_dirty();
                    }
                }
            }
        }

        self.preloader.draw();
        for element in &mut self.elements {
            if element.node().is_dirty() {
                element.draw();
            }
        }

        let mut frame = RenderFrame::new(self.viewport);
        for element in &self.elements {
            element.push_primitives(&mut frame);
        }
        self.preloader.push_primitives(&mut frame);

        self.renderer.render(&frame)?;
        Ok(frame)
    }
}

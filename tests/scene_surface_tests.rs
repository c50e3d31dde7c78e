use std::rc::Rc;

use scenechart::core::{FrameTask, Length, ManualClock, Viewport};
use scenechart::elements::{Element, WavedCircle};
use scenechart::error::SceneError;
use scenechart::render::NullRenderer;
use scenechart::{SceneSurface, SceneSurfaceConfig};

fn surface() -> SceneSurface<NullRenderer> {
    let config = SceneSurfaceConfig::new(Viewport::new(800, 500)).with_preloader_delay_ms(0);
    SceneSurface::new(NullRenderer::default(), config).expect("surface")
}

#[test]
fn construction_rejects_a_degenerate_viewport() {
    let config = SceneSurfaceConfig::new(Viewport::new(0, 500));
    match SceneSurface::new(NullRenderer::default(), config) {
        Err(SceneError::InvalidViewport { width: 0, height: 500 }) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn an_empty_scene_renders_an_empty_frame() {
    let mut surface = surface();
    let frame = surface.run_frame().expect("frame");

    assert!(frame.is_empty());
    assert_eq!(surface.renderer().frames_rendered, 1);
    assert_eq!(surface.renderer().last_path_count, 0);
}

#[test]
fn load_progress_puts_the_preloader_rings_into_the_frame() {
    let mut surface = surface();
    surface.set_load_progress(0.5);

    let frame = surface.run_frame().expect("frame");
    // Background ring, progress ring, and the percentage label.
    assert_eq!(frame.paths.len(), 2);
    assert_eq!(frame.texts.len(), 1);
    assert_eq!(surface.renderer().last_text_count, 1);
}

#[test]
fn completing_a_load_hides_the_preloader_on_the_next_frame() {
    let mut surface = surface();
    surface.set_load_progress(0.5);
    surface.set_load_progress(1.0);
    assert!(surface.scheduler().is_scheduled(FrameTask::HidePreloader));

    let frame = surface.run_frame().expect("frame");
    assert!(frame.is_empty());
    assert!(!surface.preloader().is_visible());
    assert_eq!(surface.scheduler().pending_count(), 0);
}

#[test]
fn with_clock_drives_the_preloader_delay_gate() {
    let clock = Rc::new(ManualClock::starting_at(0));
    let config = SceneSurfaceConfig::new(Viewport::new(800, 500)).with_preloader_delay_ms(100);
    let mut surface =
        SceneSurface::with_clock(NullRenderer::default(), config, clock.clone()).expect("surface");

    surface.set_load_progress(0.1);
    assert!(!surface.preloader().is_visible());
    clock.advance(50);
    surface.set_load_progress(0.2);
    assert!(surface.preloader().is_visible());
}

#[test]
fn elements_are_created_through_the_registry_and_drawn_lazily() {
    let mut surface = surface();
    let index = surface.create_element("waved-circle").expect("element");
    assert_eq!(surface.element_count(), 1);

    {
        let element = surface.element_mut(index).expect("element");
        let circle = element
            .as_any_mut()
            .downcast_mut::<WavedCircle>()
            .expect("waved circle");
        circle.set_radius(50.0);
        circle.node_mut().set_visible(true);
        circle
            .node_mut()
            .set_fill(Some(scenechart::render::Color::rgb(0.2, 0.4, 0.9)));
        circle.node_mut().set_fill_opacity(1.0);
    }

    let frame = surface.run_frame().expect("frame");
    assert_eq!(frame.paths.len(), 1);

    // A clean element is not redrawn, yet still contributes its cached path.
    let element = surface.element(index).expect("element");
    assert!(!element.node().is_dirty());
    let frame = surface.run_frame().expect("frame");
    assert_eq!(frame.paths.len(), 1);
}

#[test]
fn unknown_element_kinds_are_rejected() {
    let mut surface = surface();
    match surface.create_element("gauge") {
        Err(SceneError::UnknownElementKind(kind)) => assert_eq!(kind, "gauge"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn resizing_queues_one_geometry_rebuild_for_every_element() {
    let mut surface = surface();
    let index = surface.create_element("waved-circle").expect("element");
    {
        let element = surface.element_mut(index).expect("element");
        let circle = element
            .as_any_mut()
            .downcast_mut::<WavedCircle>()
            .expect("waved circle");
        circle.set_radius(40.0);
        circle.set_inner_radius(Length::Pixels(20.0));
    }
    surface.run_frame().expect("frame");
    assert!(!surface.element(index).expect("element").node().is_dirty());

    surface.set_viewport(Viewport::new(400, 300)).expect("resize");
    surface.set_viewport(Viewport::new(640, 480)).expect("resize");
    assert!(surface.scheduler().is_scheduled(FrameTask::RebuildGeometry));
    assert_eq!(surface.scheduler().pending_count(), 1);

    surface.run_frame().expect("frame");
    assert!(!surface.element(index).expect("element").node().is_dirty());
    assert_eq!(surface.scheduler().pending_count(), 0);
}

#[test]
fn set_viewport_validates_and_resizes_the_preloader_node() {
    let mut surface = surface();
    assert!(surface.set_viewport(Viewport::new(0, 0)).is_err());
    assert_eq!(surface.viewport(), Viewport::new(800, 500));

    surface.set_viewport(Viewport::new(400, 300)).expect("resize");
    assert_eq!(surface.viewport(), Viewport::new(400, 300));
}

#[test]
fn language_is_reachable_through_the_surface() {
    let mut surface = surface();
    assert!(surface.language().is_default());

    surface
        .language_mut()
        .set_locale(scenechart::locale::Locale::new().with_prompt("Home", "Accueil"));
    assert_eq!(surface.language().translate("Home", None, &[]), "Accueil");
}

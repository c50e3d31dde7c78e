use proptest::prelude::*;
use scenechart::elements::{Element, WavedCircle};

fn wave_circle(radius: f64, wave_length: f64, wave_height: f64, tension: f64) -> WavedCircle {
    let mut circle = WavedCircle::new();
    circle.set_radius(radius);
    circle.set_wave_length(wave_length);
    circle.set_wave_height(wave_height);
    circle.set_tension(tension);
    circle
}

proptest! {
    #[test]
    fn wave_point_count_is_odd_and_matches_the_snapped_wave_count(
        radius in 1.0f64..2_000.0,
        wave_length in 0.5f64..200.0,
        wave_height in 0.0f64..50.0
    ) {
        let circle = wave_circle(radius, wave_length, wave_height, 0.8);
        let points = circle.wave_points(radius);

        let circumference = radius * std::f64::consts::TAU;
        let count = (circumference / wave_length).round().max(1.0) as usize;
        prop_assert_eq!(points.len(), 2 * count + 1);
    }

    #[test]
    fn wave_points_stay_on_the_two_peak_radii(
        radius in 1.0f64..2_000.0,
        wave_length in 0.5f64..200.0,
        wave_height in 0.0f64..50.0
    ) {
        prop_assume!(wave_height < 2.0 * radius);
        let circle = wave_circle(radius, wave_length, wave_height, 0.8);
        let half_height = wave_height / 2.0;

        for (index, point) in circle.wave_points(radius).iter().enumerate() {
            prop_assert!(point.is_finite());
            let expected = if index % 2 == 0 {
                radius - half_height
            } else {
                radius + half_height
            };
            let distance = point.distance_to_origin();
            prop_assert!(
                (distance - expected).abs() <= expected.abs() * 1e-9 + 1e-9,
                "point {index} at distance {distance}, expected {expected}"
            );
        }
    }

    #[test]
    fn contours_close_without_a_seam(
        radius in 1.0f64..2_000.0,
        wave_length in 0.5f64..200.0,
        wave_height in 0.0f64..50.0
    ) {
        let circle = wave_circle(radius, wave_length, wave_height, 0.8);
        let points = circle.wave_points(radius);

        let first = points.first().expect("first point");
        let last = points.last().expect("last point");
        prop_assert!((first.x - last.x).abs() <= 1e-6 * radius.max(1.0));
        prop_assert!((first.y - last.y).abs() <= 1e-6 * radius.max(1.0));
    }

    #[test]
    fn path_data_is_deterministic_across_rebuilds(
        radius in 1.0f64..500.0,
        wave_length in 1.0f64..64.0,
        wave_height in 0.0f64..16.0,
        tension in 0.0f64..=1.0
    ) {
        let mut circle = wave_circle(radius, wave_length, wave_height, tension);
        circle.draw();
        let first = circle.path_data().to_owned();
        circle.node_mut().mark_dirty();
        circle.draw();
        prop_assert_eq!(circle.path_data(), first.as_str());
    }
}

use linechart_rs::core::{
    PlotInsets, PlotLayout, SamplePoint, Viewport, project_plot_points,
};
use linechart_rs::interaction::{HOVER_RADIUS_PX, hit_test};
use proptest::prelude::*;

proptest! {
    #[test]
    fn projected_count_matches_input_and_x_is_monotone(
        deltas in proptest::collection::vec(0.0f64..3_600.0, 1..64),
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 1..64)
    ) {
        let len = deltas.len().min(values.len());
        prop_assume!(len >= 1);

        let mut time = 0.0;
        let mut samples = Vec::with_capacity(len);
        for i in 0..len {
            time += deltas[i];
            samples.push(SamplePoint::new(time, values[i]));
        }

        let layout = PlotLayout::new(Viewport::new(1200, 700), PlotInsets::default(), 10.0)
            .expect("layout");
        let points = project_plot_points(&samples, &layout).expect("project");

        prop_assert_eq!(points.len(), len);
        prop_assert!((points[0].x - layout.origin_x()).abs() <= 1e-9);
        for pair in points.windows(2) {
            prop_assert!(pair[0].x <= pair[1].x);
        }
        for point in &points {
            prop_assert!(point.x.is_finite());
            prop_assert!(point.y.is_finite());
        }
    }

    #[test]
    fn cursor_on_any_projected_point_hits_some_index(
        deltas in proptest::collection::vec(1.0f64..3_600.0, 2..32),
        values in proptest::collection::vec(-100.0f64..100.0, 2..32),
        pick in 0usize..32
    ) {
        let len = deltas.len().min(values.len());
        prop_assume!(len >= 2);
        let pick = pick % len;

        let mut time = 0.0;
        let mut samples = Vec::with_capacity(len);
        for i in 0..len {
            time += deltas[i];
            samples.push(SamplePoint::new(time, values[i]));
        }

        let layout = PlotLayout::new(Viewport::new(1200, 700), PlotInsets::default(), 10.0)
            .expect("layout");
        let points = project_plot_points(&samples, &layout).expect("project");

        // An exact cursor match always hits, though possibly an earlier
        // overlapping point: first match wins.
        let hit = hit_test(points[pick].x, points[pick].y, &points, HOVER_RADIUS_PX)
            .expect("exact cursor position must hit");
        prop_assert!(hit <= pick);
    }
}

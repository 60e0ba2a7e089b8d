use linechart_rs::api::{ChartConfig, ChartEngine};
use linechart_rs::core::{SamplePoint, Viewport};
use linechart_rs::interaction::HoverState;
use linechart_rs::render::NullRenderer;

const SERIES_JSON: &str = r#"[
    {"01-01-2024 00:00:00": 5},
    {"01-01-2024 00:00:10": 15},
    {"01-01-2024 00:00:20": 10}
]"#;

#[test]
fn engine_smoke_flow() {
    let renderer = NullRenderer::default();
    let config = ChartConfig::new(Viewport::new(600, 450));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    engine.load_series_json(SERIES_JSON).expect("load series");
    assert_eq!(engine.samples().len(), 3);
    assert_eq!(engine.plot_points().len(), 3);

    engine.render().expect("render");
    // Two axis lines plus two polyline segments, one marker per point.
    assert_eq!(engine.renderer().last_line_count, 4);
    assert_eq!(engine.renderer().last_circle_count, 3);
    assert_eq!(engine.renderer().last_text_count, 0);

    let target = engine.plot_points()[1];
    engine.pointer_move(target.x, target.y).expect("move");
    assert_eq!(engine.hover(), HoverState::Hovering(1));
    // Hover adds two crosshair segments and the tooltip label.
    assert_eq!(engine.renderer().last_line_count, 6);
    assert_eq!(engine.renderer().last_text_count, 1);

    engine.pointer_leave().expect("leave");
    assert_eq!(engine.hover(), HoverState::Idle);
    assert!(engine.cursor().is_none());
    assert_eq!(engine.renderer().last_line_count, 4);
    assert_eq!(engine.renderer().last_text_count, 0);
}

#[test]
fn empty_series_renders_axes_only() {
    let renderer = NullRenderer::default();
    let config = ChartConfig::new(Viewport::new(600, 450));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    engine.set_series(Vec::new()).expect("empty series accepted");
    engine.render().expect("render");
    assert_eq!(engine.renderer().last_line_count, 2);
    assert_eq!(engine.renderer().last_circle_count, 0);
}

#[test]
fn viewport_resize_reprojects_points() {
    let renderer = NullRenderer::default();
    let config = ChartConfig::new(Viewport::new(600, 450));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.set_series(vec![SamplePoint::new(0.0, 1.0), SamplePoint::new(10.0, 2.0)])
        .expect("set series");

    let before_last_x = engine.plot_points()[1].x;
    engine.set_viewport(Viewport::new(1200, 450)).expect("resize");
    let after_last_x = engine.plot_points()[1].x;
    assert!(after_last_x > before_last_x);
    assert_eq!(engine.plot_points().len(), 2);
}

#[test]
fn rejected_series_clears_projected_points() {
    let renderer = NullRenderer::default();
    let config = ChartConfig::new(Viewport::new(600, 450));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.load_series_json(SERIES_JSON).expect("load series");
    assert_eq!(engine.plot_points().len(), 3);

    let err = engine
        .set_series(vec![SamplePoint::new(0.0, f64::NAN)])
        .expect_err("non-finite value must be rejected");
    assert!(matches!(err, linechart_rs::ChartError::InvalidData(_)));

    // The old projection must not survive alongside the new samples.
    assert_eq!(engine.samples().len(), 1);
    assert!(engine.plot_points().is_empty());
    engine.render().expect("render");
    assert_eq!(engine.renderer().last_circle_count, 0);
    assert_eq!(engine.renderer().last_line_count, 2);
}

#[test]
fn set_series_resets_stale_hover() {
    let renderer = NullRenderer::default();
    let config = ChartConfig::new(Viewport::new(600, 450));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.load_series_json(SERIES_JSON).expect("load series");

    let target = engine.plot_points()[2];
    engine.pointer_move(target.x, target.y).expect("move");
    assert!(engine.hover().is_hovering());

    engine.set_series(vec![SamplePoint::new(0.0, 1.0)]).expect("set series");
    assert_eq!(engine.hover(), HoverState::Idle);
}

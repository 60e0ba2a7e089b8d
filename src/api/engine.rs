use tracing::{debug, trace};

use crate::api::config::ChartConfig;
use crate::api::scene::build_chart_frame;
use crate::core::{
    PlotLayout, PlotPoint, SamplePoint, Viewport, parse_series_json, project_plot_points,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{CursorPosition, HoverState, PointerState, hit_test};
use crate::render::{RenderFrame, Renderer};

/// Chart state object: owns the series, the cached pixel projection, and the
/// pointer state, and feeds them through the pure core functions on every
/// pass.
///
/// All work is synchronous and single-threaded; the host calls in from its
/// layout and pointer-event hooks.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    layout: PlotLayout,
    samples: Vec<SamplePoint>,
    plot_points: Vec<PlotPoint>,
    pointer: PointerState,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let layout = config.layout()?;
        Ok(Self {
            renderer,
            config,
            layout,
            samples: Vec::new(),
            plot_points: Vec::new(),
            pointer: PointerState::default(),
        })
    }

    /// Replaces the series and rebuilds the plot-point cache.
    ///
    /// Hover state is reset because point indices may no longer line up.
    pub fn set_series(&mut self, samples: Vec<SamplePoint>) -> ChartResult<()> {
        self.samples = samples;
        self.pointer = PointerState::default();
        self.rebuild_plot_points()
    }

    /// Ingests the wire shape (array of single-key timestamp-to-value maps)
    /// using the configured timestamp encoding.
    pub fn load_series_json(&mut self, input: &str) -> ChartResult<()> {
        let samples = parse_series_json(input, self.config.timestamp_format)?;
        self.set_series(samples)
    }

    /// Applies a new canvas size and reprojects the cached plot points.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let mut config = self.config;
        config.viewport = viewport;
        let layout = config.layout()?;
        self.config = config;
        self.layout = layout;
        self.rebuild_plot_points()
    }

    fn rebuild_plot_points(&mut self) -> ChartResult<()> {
        if self.samples.is_empty() {
            self.plot_points.clear();
            return Ok(());
        }
        match project_plot_points(&self.samples, &self.layout) {
            Ok(points) => {
                self.plot_points = points;
                Ok(())
            }
            Err(err) => {
                // A stale projection must not outlive the series that made
                // it; later passes would draw and hit-test dead geometry.
                self.plot_points.clear();
                Err(err)
            }
        }
    }

    /// Handles one pointer-move event in canvas-relative coordinates:
    /// updates hover state from the hit test, then redraws the full frame.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let in_interior = self.layout.interior_contains(x, y);
        let hit = hit_test(x, y, &self.plot_points, self.config.hover_radius_px);
        trace!(x, y, in_interior, hovered = ?hit, "pointer move");
        self.pointer
            .on_pointer_move(CursorPosition::new(x, y, in_interior), hit);
        self.render()
    }

    /// Clears cursor and hover state, then redraws without highlights.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        self.pointer.on_pointer_leave();
        self.render()
    }

    /// Builds the current scene without rendering it.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        build_chart_frame(
            &self.plot_points,
            self.layout,
            &self.config.style,
            self.pointer.cursor(),
            self.pointer.hover(),
        )
    }

    /// Builds the current scene and hands it to the renderer.
    ///
    /// A backend reporting a missing drawing surface is not an engine
    /// failure; the pass is skipped silently, per the no-render policy.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        match self.renderer.render(&frame) {
            Err(ChartError::MissingSurface(reason)) => {
                debug!(%reason, "skipping render pass; drawing surface unavailable");
                Ok(())
            }
            result => result,
        }
    }

    #[must_use]
    pub fn samples(&self) -> &[SamplePoint] {
        &self.samples
    }

    #[must_use]
    pub fn plot_points(&self) -> &[PlotPoint] {
        &self.plot_points
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.pointer.hover()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<CursorPosition> {
        self.pointer.cursor()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        self.layout
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

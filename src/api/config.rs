use serde::{Deserialize, Serialize};

use crate::core::{PlotInsets, PlotLayout, TimestampFormat, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HOVER_RADIUS_PX;
use crate::render::Color;

/// Stroke and label styling for one chart.
///
/// Defaults reproduce the reference chart: thin black axes, a 1px black
/// polyline, 3px markers growing to 6px on hover, and a small blue tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub line_width: f64,
    pub line_color: Color,
    pub axis_width: f64,
    pub axis_color: Color,
    pub marker_radius: f64,
    pub marker_hover_radius: f64,
    pub marker_stroke_width: f64,
    pub marker_color: Color,
    pub crosshair_width: f64,
    pub crosshair_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_color: Color,
    pub tooltip_offset_x_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            line_color: Color::rgb(0.0, 0.0, 0.0),
            axis_width: 0.3,
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            marker_radius: 3.0,
            marker_hover_radius: 6.0,
            marker_stroke_width: 1.0,
            marker_color: Color::rgb(0.0, 0.0, 0.0),
            crosshair_width: 1.0,
            crosshair_color: Color::rgb(0.0, 0.0, 0.0),
            tooltip_font_size_px: 8.0,
            tooltip_color: Color::rgb(0.0, 0.0, 1.0),
            tooltip_offset_x_px: 10.0,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub insets: PlotInsets,
    #[serde(default = "default_point_offset_x")]
    pub point_offset_x: f64,
    #[serde(default)]
    pub timestamp_format: TimestampFormat,
    #[serde(default = "default_hover_radius_px")]
    pub hover_radius_px: f64,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartConfig {
    /// Creates a config with reference-chart margins and styling.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            insets: PlotInsets::default(),
            point_offset_x: default_point_offset_x(),
            timestamp_format: TimestampFormat::default(),
            hover_radius_px: default_hover_radius_px(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_insets(mut self, insets: PlotInsets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn with_point_offset_x(mut self, offset: f64) -> Self {
        self.point_offset_x = offset;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_hover_radius_px(mut self, radius: f64) -> Self {
        self.hover_radius_px = radius;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Resolves the pixel layout, validating viewport and margins.
    pub fn layout(&self) -> ChartResult<PlotLayout> {
        if !self.hover_radius_px.is_finite() || self.hover_radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "hover radius must be finite and > 0".to_owned(),
            ));
        }
        PlotLayout::new(self.viewport, self.insets, self.point_offset_x)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_point_offset_x() -> f64 {
    10.0
}

fn default_hover_radius_px() -> f64 {
    HOVER_RADIUS_PX
}

use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Vertical gap between the lowest plottable point and the axis row. The
/// rest of the bottom inset stays below the axis for labels.
const AXIS_BAND_GAP: f64 = 30.0;
/// Pixel offset of the horizontal axis line end from the viewport right edge.
const AXIS_RIGHT_OFFSET: f64 = 5.0;
/// Upper y bound of the pointer-interactive interior.
const INTERIOR_TOP_BOUND: f64 = 10.0;
/// Right x bound of the pointer-interactive interior, from the right edge.
const INTERIOR_RIGHT_INSET: f64 = 1.0;

/// Fixed margins reserved around the plot interior for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self {
            left: 50.0,
            right: 10.0,
            top: 20.0,
            bottom: 80.0,
        }
    }
}

impl PlotInsets {
    fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "inset `{side}` must be finite and >= 0"
                )));
            }
        }
        if self.bottom <= AXIS_BAND_GAP {
            return Err(ChartError::InvalidData(format!(
                "inset `bottom` must exceed the {AXIS_BAND_GAP}px band above the axis row"
            )));
        }
        Ok(self)
    }
}

/// Resolved plot geometry for one viewport.
///
/// Groups the viewport, margins, and the fixed x offset of the first plotted
/// point, and answers all pixel-bound questions the projection, scene builder,
/// and hover controller ask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    viewport: Viewport,
    insets: PlotInsets,
    point_offset_x: f64,
}

impl PlotLayout {
    pub fn new(viewport: Viewport, insets: PlotInsets, point_offset_x: f64) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let insets = insets.validate()?;
        if !point_offset_x.is_finite() || point_offset_x < 0.0 {
            return Err(ChartError::InvalidData(
                "point x offset must be finite and >= 0".to_owned(),
            ));
        }

        let layout = Self {
            viewport,
            insets,
            point_offset_x,
        };
        if layout.drawable_width() <= 0.0 || layout.drawable_height() <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(layout)
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn insets(self) -> PlotInsets {
        self.insets
    }

    /// X pixel of the first plotted point (left margin plus fixed offset).
    #[must_use]
    pub fn origin_x(self) -> f64 {
        self.insets.left + self.point_offset_x
    }

    /// Y pixel where the maximum series value plots.
    #[must_use]
    pub fn origin_y(self) -> f64 {
        self.insets.top
    }

    /// Horizontal pixel span available to the time scale.
    #[must_use]
    pub fn drawable_width(self) -> f64 {
        f64::from(self.viewport.width) - self.insets.left - self.insets.right - self.point_offset_x
    }

    /// Vertical pixel span available to the value scale.
    #[must_use]
    pub fn drawable_height(self) -> f64 {
        f64::from(self.viewport.height) - self.insets.top - self.insets.bottom
    }

    /// X pixel of the vertical axis line.
    #[must_use]
    pub fn axis_x(self) -> f64 {
        self.insets.left
    }

    /// Y pixel of the horizontal axis line, a fixed gap below the plot band
    /// so the lowest projected point always sits above it.
    #[must_use]
    pub fn axis_y(self) -> f64 {
        f64::from(self.viewport.height) - self.insets.bottom + AXIS_BAND_GAP
    }

    /// Y pixel where the vertical axis line starts.
    #[must_use]
    pub fn axis_top_y(self) -> f64 {
        self.insets.top
    }

    /// X pixel where the horizontal axis line ends.
    #[must_use]
    pub fn axis_right_x(self) -> f64 {
        f64::from(self.viewport.width) - AXIS_RIGHT_OFFSET
    }

    /// Whether a canvas-relative cursor position lies inside the plot
    /// interior where the crosshair is drawn.
    #[must_use]
    pub fn interior_contains(self, x: f64, y: f64) -> bool {
        x > self.insets.left
            && x < f64::from(self.viewport.width) - INTERIOR_RIGHT_INSET
            && y > INTERIOR_TOP_BOUND
            && y < self.axis_y() - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_600x450() -> PlotLayout {
        PlotLayout::new(Viewport::new(600, 450), PlotInsets::default(), 10.0).expect("layout")
    }

    #[test]
    fn default_margins_match_reference_chart() {
        let layout = layout_600x450();
        assert_eq!(layout.origin_x(), 60.0);
        assert_eq!(layout.drawable_width(), 530.0);
        assert_eq!(layout.drawable_height(), 350.0);
        assert_eq!(layout.axis_y(), 400.0);
        assert_eq!(layout.axis_right_x(), 595.0);
    }

    #[test]
    fn interior_excludes_margins_and_axis_band() {
        let layout = layout_600x450();
        assert!(layout.interior_contains(60.0, 200.0));
        assert!(!layout.interior_contains(50.0, 200.0));
        assert!(!layout.interior_contains(60.0, 10.0));
        assert!(!layout.interior_contains(60.0, 399.0));
        assert!(!layout.interior_contains(599.0, 200.0));
    }

    #[test]
    fn axis_row_follows_custom_bottom_inset() {
        let insets = PlotInsets {
            bottom: 120.0,
            ..PlotInsets::default()
        };
        let layout = PlotLayout::new(Viewport::new(600, 450), insets, 10.0).expect("layout");
        // Band bottom at 330, axis row 30px lower, labels below that.
        assert_eq!(layout.drawable_height(), 310.0);
        assert_eq!(layout.axis_y(), 360.0);
        let band_bottom = layout.origin_y() + layout.drawable_height();
        assert!(band_bottom < layout.axis_y());
        assert!(layout.interior_contains(60.0, band_bottom));
        assert!(!layout.interior_contains(60.0, layout.axis_y() - 1.0));
    }

    #[test]
    fn bottom_inset_without_axis_room_is_rejected() {
        let insets = PlotInsets {
            bottom: 20.0,
            ..PlotInsets::default()
        };
        assert!(matches!(
            PlotLayout::new(Viewport::new(600, 450), insets, 10.0),
            Err(ChartError::InvalidData(_))
        ));
    }

    #[test]
    fn zero_viewport_is_rejected() {
        assert!(matches!(
            PlotLayout::new(Viewport::new(0, 450), PlotInsets::default(), 10.0),
            Err(ChartError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn viewport_smaller_than_margins_is_rejected() {
        assert!(matches!(
            PlotLayout::new(Viewport::new(60, 90), PlotInsets::default(), 10.0),
            Err(ChartError::InvalidViewport { .. })
        ));
    }
}

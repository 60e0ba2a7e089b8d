use crate::error::{ChartError, ChartResult};

/// Linear domain-to-pixel factor for one axis.
///
/// A degenerate domain (zero span) collapses to a zero factor so every point
/// maps to the axis origin instead of producing `NaN` or `Infinity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale {
    px_per_unit: f64,
}

impl PixelScale {
    /// Builds the factor `drawable_px / domain_span`.
    ///
    /// `domain_span <= 0` yields the collapsed scale; non-finite input is a
    /// `DegenerateRange` error because no meaningful mapping exists.
    pub fn from_spans(drawable_px: f64, domain_span: f64) -> ChartResult<Self> {
        if !drawable_px.is_finite() || !domain_span.is_finite() {
            return Err(ChartError::DegenerateRange(
                "scale spans must be finite".to_owned(),
            ));
        }
        if drawable_px <= 0.0 {
            return Err(ChartError::DegenerateRange(
                "drawable span must be > 0 px".to_owned(),
            ));
        }
        if domain_span <= 0.0 {
            return Ok(Self { px_per_unit: 0.0 });
        }
        Ok(Self {
            px_per_unit: drawable_px / domain_span,
        })
    }

    /// Pixel offset for a domain delta from the axis origin.
    #[must_use]
    pub fn offset_px(self, domain_delta: f64) -> f64 {
        domain_delta * self.px_per_unit
    }

    #[must_use]
    pub fn px_per_unit(self) -> f64 {
        self.px_per_unit
    }

    /// True when the domain span was degenerate and all offsets are zero.
    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self.px_per_unit == 0.0
    }
}

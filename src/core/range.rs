use ordered_float::OrderedFloat;

use crate::error::{ChartError, ChartResult};

/// Inclusive min/max of a series' scalar values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Scans values for their extrema.
    ///
    /// Empty input is `EmptySeries` so callers never see the `±Infinity`
    /// a fold over nothing would produce. Non-finite values are rejected
    /// before they can poison the scales downstream.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> ChartResult<Self> {
        let mut min: Option<OrderedFloat<f64>> = None;
        let mut max: Option<OrderedFloat<f64>> = None;

        for value in values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "series values must be finite".to_owned(),
                ));
            }
            let value = OrderedFloat(value);
            min = Some(min.map_or(value, |m| m.min(value)));
            max = Some(max.map_or(value, |m| m.max(value)));
        }

        match (min, max) {
            (Some(min), Some(max)) => Ok(Self {
                min: min.into_inner(),
                max: max.into_inner(),
            }),
            _ => Err(ChartError::EmptySeries),
        }
    }

    /// Value span, zero when all values are equal.
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

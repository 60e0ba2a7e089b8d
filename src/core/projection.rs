use crate::core::layout::PlotLayout;
use crate::core::range::ValueRange;
use crate::core::scale::PixelScale;
use crate::core::types::{PlotPoint, SamplePoint};
use crate::error::{ChartError, ChartResult};

/// Projects a chronologically sorted series into pixel-space plot points.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry. The output preserves the input's length and order;
/// for sorted input, x is monotonically non-decreasing. Degenerate time or
/// value spans collapse to a single x or y position.
pub fn project_plot_points(
    samples: &[SamplePoint],
    layout: &PlotLayout,
) -> ChartResult<Vec<PlotPoint>> {
    let first = samples.first().ok_or(ChartError::EmptySeries)?;
    let last = samples[samples.len() - 1];

    for sample in samples {
        if !sample.time.is_finite() {
            return Err(ChartError::InvalidData(
                "sample times must be finite".to_owned(),
            ));
        }
    }

    let range = ValueRange::from_values(samples.iter().map(|s| s.value))?;
    let time_scale = PixelScale::from_spans(layout.drawable_width(), last.time - first.time)?;
    let value_scale = PixelScale::from_spans(layout.drawable_height(), range.span())?;

    let start_time = first.time;
    let points = samples
        .iter()
        .map(|sample| {
            let x = layout.origin_x() + time_scale.offset_px(sample.time - start_time);
            let y = layout.origin_y() + value_scale.offset_px(range.max - sample.value);
            PlotPoint::new(x, y, sample.time, sample.value)
        })
        .collect();
    Ok(points)
}

use smallvec::SmallVec;

use crate::api::config::ChartStyle;
use crate::core::{PlotLayout, PlotPoint, format_timestamp};
use crate::interaction::{CursorPosition, HoverState};
use crate::render::{CirclePrimitive, LinePrimitive, RenderFrame, TextPrimitive};

/// Builds the full scene for one draw pass: axes, optional crosshair,
/// polyline, markers, and the tooltip for a hovered point.
///
/// Pure with respect to its inputs; every redraw is a complete rebuild, so
/// hover transitions never leave stale pixels behind.
#[must_use]
pub fn build_chart_frame(
    points: &[PlotPoint],
    layout: PlotLayout,
    style: &ChartStyle,
    cursor: Option<CursorPosition>,
    hover: HoverState,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport());

    frame.lines.extend(axis_lines(layout, style));

    if let Some(cursor) = cursor {
        if cursor.in_interior {
            frame.lines.extend(crosshair_lines(cursor, layout, style));
        }
    }

    for pair in points.windows(2) {
        frame.lines.push(LinePrimitive::new(
            pair[0].x,
            pair[0].y,
            pair[1].x,
            pair[1].y,
            style.line_width,
            style.line_color,
        ));
    }

    for (index, point) in points.iter().enumerate() {
        let radius = if hover.index() == Some(index) {
            style.marker_hover_radius
        } else {
            style.marker_radius
        };
        frame.circles.push(CirclePrimitive::new(
            point.x,
            point.y,
            radius,
            style.marker_stroke_width,
            style.marker_color,
        ));
    }

    if let (Some(cursor), Some(index)) = (cursor, hover.index()) {
        if let Some(point) = points.get(index) {
            let label = format!("{} : {}", format_timestamp(point.time), point.value);
            frame.texts.push(TextPrimitive::new(
                label,
                cursor.x + style.tooltip_offset_x_px,
                cursor.y,
                style.tooltip_font_size_px,
                style.tooltip_color,
            ));
        }
    }

    frame
}

/// The two perpendicular axis lines at the fixed margins.
fn axis_lines(layout: PlotLayout, style: &ChartStyle) -> SmallVec<[LinePrimitive; 2]> {
    let mut lines = SmallVec::new();
    lines.push(LinePrimitive::new(
        layout.axis_x(),
        layout.axis_top_y(),
        layout.axis_x(),
        layout.axis_y(),
        style.axis_width,
        style.axis_color,
    ));
    lines.push(LinePrimitive::new(
        layout.axis_x(),
        layout.axis_y(),
        layout.axis_right_x(),
        layout.axis_y(),
        style.axis_width,
        style.axis_color,
    ));
    lines
}

/// Crosshair guides: horizontal from the axis to the cursor, vertical from
/// the cursor down to the axis band.
fn crosshair_lines(
    cursor: CursorPosition,
    layout: PlotLayout,
    style: &ChartStyle,
) -> SmallVec<[LinePrimitive; 2]> {
    let mut lines = SmallVec::new();
    lines.push(LinePrimitive::new(
        layout.axis_x() + 1.0,
        cursor.y,
        cursor.x,
        cursor.y,
        style.crosshair_width,
        style.crosshair_color,
    ));
    lines.push(LinePrimitive::new(
        cursor.x,
        cursor.y,
        cursor.x,
        layout.axis_y() - 1.0,
        style.crosshair_width,
        style.crosshair_color,
    ));
    lines
}

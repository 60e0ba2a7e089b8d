use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;

/// Default cursor-to-point hit radius in pixels.
pub const HOVER_RADIUS_PX: f64 = 5.0;

/// Hover state machine: transitions are driven solely by the distance
/// threshold on each pointer-move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(usize),
}

impl HoverState {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Hovering(index) => Some(index),
        }
    }

    #[must_use]
    pub fn is_hovering(self) -> bool {
        matches!(self, Self::Hovering(_))
    }
}

/// Canvas-relative cursor position plus whether it lies in the plot interior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
    pub in_interior: bool,
}

impl CursorPosition {
    #[must_use]
    pub fn new(x: f64, y: f64, in_interior: bool) -> Self {
        Self { x, y, in_interior }
    }
}

/// Finds the first plotted point within `radius_px` of the cursor.
///
/// Euclidean distance, first match wins; there is deliberately no
/// nearest-of-many tie-break. Pure so hover behavior is testable without a
/// rendering surface.
#[must_use]
pub fn hit_test(
    cursor_x: f64,
    cursor_y: f64,
    points: &[PlotPoint],
    radius_px: f64,
) -> Option<usize> {
    points.iter().position(|point| {
        let dx = cursor_x - point.x;
        let dy = cursor_y - point.y;
        (dx * dx + dy * dy).sqrt() <= radius_px
    })
}

/// Pointer-driven state carried between move events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    cursor: Option<CursorPosition>,
    hover: HoverState,
}

impl PointerState {
    #[must_use]
    pub fn cursor(self) -> Option<CursorPosition> {
        self.cursor
    }

    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    /// Applies one pointer-move event given the precomputed hit result.
    pub fn on_pointer_move(&mut self, cursor: CursorPosition, hit: Option<usize>) {
        self.cursor = Some(cursor);
        self.hover = match hit {
            Some(index) => HoverState::Hovering(index),
            None => HoverState::Idle,
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.hover = HoverState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<PlotPoint> {
        vec![
            PlotPoint::new(60.0, 300.0, 0.0, 5.0),
            PlotPoint::new(200.0, 100.0, 10.0, 15.0),
            PlotPoint::new(204.0, 103.0, 20.0, 14.0),
        ]
    }

    #[test]
    fn exact_cursor_position_hits_its_point() {
        assert_eq!(hit_test(200.0, 100.0, &points(), HOVER_RADIUS_PX), Some(1));
    }

    #[test]
    fn far_cursor_hits_nothing() {
        assert_eq!(hit_test(300.0, 400.0, &points(), HOVER_RADIUS_PX), None);
    }

    #[test]
    fn first_match_wins_when_points_overlap() {
        // Cursor within 5px of both point 1 and point 2; the earlier index wins.
        assert_eq!(hit_test(202.0, 101.5, &points(), HOVER_RADIUS_PX), Some(1));
    }

    #[test]
    fn boundary_distance_still_hits() {
        let pts = vec![PlotPoint::new(100.0, 100.0, 0.0, 1.0)];
        assert_eq!(hit_test(105.0, 100.0, &pts, HOVER_RADIUS_PX), Some(0));
        assert_eq!(hit_test(105.1, 100.0, &pts, HOVER_RADIUS_PX), None);
    }

    #[test]
    fn pointer_state_transitions() {
        let mut state = PointerState::default();
        assert_eq!(state.hover(), HoverState::Idle);

        state.on_pointer_move(CursorPosition::new(200.0, 100.0, true), Some(1));
        assert_eq!(state.hover(), HoverState::Hovering(1));
        assert!(state.hover().is_hovering());

        state.on_pointer_move(CursorPosition::new(300.0, 400.0, true), None);
        assert_eq!(state.hover(), HoverState::Idle);

        state.on_pointer_move(CursorPosition::new(200.0, 100.0, true), Some(1));
        state.on_pointer_leave();
        assert_eq!(state.hover(), HoverState::Idle);
        assert!(state.cursor().is_none());
    }
}

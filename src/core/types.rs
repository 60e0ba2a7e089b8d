use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One series observation: a parsed timestamp (unix seconds) and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub time: f64,
    pub value: f64,
}

impl SamplePoint {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Pixel-space projection of one observation.
///
/// Rebuilt from scratch on every layout pass; the list always matches the
/// source series in length and order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub time: f64,
    pub value: f64,
}

impl PlotPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, time: f64, value: f64) -> Self {
        Self { x, y, time, value }
    }
}

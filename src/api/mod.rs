mod config;
mod engine;
mod scene;

pub use config::{ChartConfig, ChartStyle};
pub use engine::ChartEngine;
pub use scene::build_chart_frame;

//! linechart-rs: a small time-series line chart engine.
//!
//! The crate keeps a strict split between pure chart math (`core`), a
//! backend-agnostic scene model (`render`), pointer interaction
//! (`interaction`), and the embedding API (`api`), so geometry stays testable
//! without any drawing surface.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};

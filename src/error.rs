use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failure taxonomy for one render pass.
///
/// Every variant is recoverable: the policy throughout the crate is to skip
/// the current pass rather than abort the host application.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("series is empty; no value range can be computed")]
    EmptySeries,

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("degenerate range: {0}")]
    DegenerateRange(String),

    #[error("drawing surface unavailable: {0}")]
    MissingSurface(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

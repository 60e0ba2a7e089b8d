//! Tracing setup for applications embedding `linechart-rs`.
//!
//! Nothing here runs implicitly. Hosts either call `init_default_tracing`
//! (behind the `telemetry` feature) or install their own `tracing` subscriber.

/// Installs a compact `tracing` fmt subscriber honoring `RUST_LOG`.
///
/// Returns `true` when a subscriber was installed, `false` when the
/// `telemetry` feature is disabled or a global subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

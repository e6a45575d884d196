//! # color-tests
//!
//! Parity and property testing for oxcolor.
//!
//! This crate provides:
//! - Wrappers around the `palette` crate used as an independent reference
//! - Seeded sample generators for reproducible sweeps
//! - Error statistics for comparing channel values
//!
//! ## Test Categories
//!
//! 1. **Palette parity**: HSL, HSV, XYZ and Lab against `palette`
//! 2. **Properties**: round trips, hue wraparound, gamut clamping, fixtures
//! 3. **Named colors**: every CSS name parses and formats back
//! 4. **Serialization**: JSON round trips of colors and coordinates
//! 5. **Batch**: slice helpers agree with per-color conversions

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{ErrorStats, compare_channels};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary
///
/// Honors `RUST_LOG`; events are captured by the test harness.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

//! K-means clustering of points in multidimensional space.
//!
//! Points are grouped around `k` centroids by alternating two steps until no
//! centroid moves farther than a tolerance: assign every point to its nearest
//! centroid under a pluggable [`Metric`], then move every centroid to the mean
//! of its members.
//!
//! ## Core Types
//!
//! - [`Point`] — Immutable coordinate vector
//! - [`Example`] — Point carrying string attributes along for the ride
//! - [`Centroid`] — Named mean point owning its current members
//! - [`Frame`] — Per-dimension minimum and maximum bounds of a collection
//! - [`KMeans`] — The training loop
//!
//! ## Metrics
//!
//! - [`Euclidean`] — Straight-line distance
//! - [`Taxicab`] — Sum of absolute coordinate differences
//! - [`Hamming`] — Number of differing coordinates
//! - [`Distance`] — Runtime selection among the three
//!
//! ## Normalization
//!
//! - [`dimensionality_check`] — Gate for every coordinate-wise aggregate
//! - [`normalize`] — Rescale a collection into the unit hypercube

mod centroid;
mod error;
mod example;
mod frame;
mod kmeans;
mod metric;
mod namer;
mod point;

pub use centroid::*;
pub use error::*;
pub use example::*;
pub use frame::*;
pub use kmeans::*;
pub use metric::*;
pub use namer::*;
pub use point::*;
pub use tests::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single coordinate along one axis.
pub type Coordinate = f64;
/// Distances, variances, and convergence thresholds.
pub type Energy = f64;

// ============================================================================
// K-MEANS CLUSTERING
// Lloyd's algorithm: assign to nearest, recompute means, repeat until stable.
// ============================================================================
/// Maximum centroid movement per iteration still considered converged.
pub const KMEANS_TOLERANCE: Energy = 0.01;
/// Safety bound on Lloyd's iterations for inputs that never settle.
pub const KMEANS_MAX_ITERATIONS: usize = 1024;
/// Prefix of auto-generated centroid names.
pub const CENTROID_NAME_PREFIX: &str = "centroid_";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging for the command-line front-end.
/// INFO by default, DEBUG when verbose (one line per iteration).
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

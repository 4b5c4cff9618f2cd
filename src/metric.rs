use super::*;

/// Distance function over pairs of locations.
///
/// Implementations are trusted to satisfy the metric-space axioms:
///
/// 1. `d(a, b) >= 0`
/// 2. `d(a, b) = d(b, a)`
/// 3. `d(a, b) = 0  <=>  a = b`
/// 4. `d(a, b) + d(b, c) >= d(a, c)`
///
/// Only dimensionality is verified at runtime. No metric rescales its
/// inputs; normalize beforehand when scale invariance matters.
pub trait Metric {
    /// Distance between two coordinate slices of equal length.
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy;

    /// Checked distance between any two locations.
    fn distance<A, B>(&self, a: &A, b: &B) -> Result<Energy, ClusterError>
    where
        A: Spatial + ?Sized,
        B: Spatial + ?Sized,
        Self: Sized,
    {
        match a.dimensionality() == b.dimensionality() {
            true => Ok(self.measure(a.coords(), b.coords())),
            false => Err(ClusterError::InconsistentDimensionality(vec![
                Point::from(a.coords()),
                Point::from(b.coords()),
            ])),
        }
    }
}

/// Length of the straight segment between two points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        a.iter()
            .zip(b)
            .map(|(x, y)| (y - x).powi(2))
            .sum::<Energy>()
            .sqrt()
    }
}

/// Sum of absolute differences, a.k.a. Manhattan distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Taxicab;

impl Metric for Taxicab {
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        a.iter().zip(b).map(|(x, y)| (y - x).abs()).sum()
    }
}

/// Number of dimensions in which two points differ.
/// Exact comparison, so it is always a non-negative integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Metric for Hamming {
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        a.iter().zip(b).filter(|(x, y)| x != y).count() as Energy
    }
}

/// Runtime choice among the built-in metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    #[default]
    Euclidean,
    Taxicab,
    Hamming,
}

impl Metric for Distance {
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        match self {
            Self::Euclidean => Euclidean.measure(a, b),
            Self::Taxicab => Taxicab.measure(a, b),
            Self::Hamming => Hamming.measure(a, b),
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Euclidean => write!(f, "euclidean"),
            Self::Taxicab => write!(f, "taxicab"),
            Self::Hamming => write!(f, "hamming"),
        }
    }
}

impl TryFrom<&str> for Distance {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "taxicab" | "manhattan" => Ok(Self::Taxicab),
            "hamming" => Ok(Self::Hamming),
            _ => Err(anyhow::anyhow!("unknown metric: {}", s)),
        }
    }
}

use super::*;

/// Errors raised by clustering, normalization, and metric operations.
///
/// Every variant is terminal for the operation that produced it.
/// Nothing is retried or logged at the point of failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// A collection required to be non-empty was empty.
    EmptyInput,
    /// More than one distinct dimensionality among points processed together.
    InconsistentDimensionality(Vec<Point>),
    /// Batch normalization over a dimension whose minimum equals its maximum.
    DegenerateRange(usize),
    /// Centroids are derived points and are never rescaled.
    CentroidNormalization,
    /// Nearest-centroid queries before any training.
    NotTrained,
    /// Caller-supplied initial centroids disagree with the cluster count.
    ClusterCount { expected: usize, found: usize },
    /// Not enough distinct points to seed every cluster.
    InsufficientPoints { requested: usize, available: usize },
    /// A model with zero clusters cannot be trained.
    NoClusters,
    /// A centroid was left without members under the failing policy.
    EmptyCluster(String),
}

impl ClusterError {
    /// Both ways normalization can be refused.
    pub fn is_normalization(&self) -> bool {
        matches!(self, Self::DegenerateRange(_) | Self::CentroidNormalization)
    }
    /// Inconsistent model state during training or querying.
    pub fn is_kmeans(&self) -> bool {
        matches!(
            self,
            Self::NotTrained
                | Self::ClusterCount { .. }
                | Self::InsufficientPoints { .. }
                | Self::NoClusters
                | Self::EmptyCluster(_)
        )
    }
    /// The offending points of a dimensionality mismatch.
    pub fn points(&self) -> &[Point] {
        match self {
            Self::InconsistentDimensionality(points) => points,
            _ => &[],
        }
    }
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "No point provided"),
            Self::InconsistentDimensionality(_) => {
                write!(f, "Inconsistent dimensionality of points")
            }
            Self::DegenerateRange(d) => write!(
                f,
                "Difference between min and max has to be for every dimension > 0 (dimension {})",
                d
            ),
            Self::CentroidNormalization => write!(f, "Centroids cannot be normalized"),
            Self::NotTrained => write!(f, "model has no centroids, train it first"),
            Self::ClusterCount { expected, found } => write!(
                f,
                "Inconsistent number of clusters: expected {}, found {}",
                expected, found
            ),
            Self::InsufficientPoints {
                requested,
                available,
            } => write!(
                f,
                "cannot seed {} clusters from {} points",
                requested, available
            ),
            Self::NoClusters => write!(f, "number of clusters has to be > 0"),
            Self::EmptyCluster(name) => write!(f, "centroid {} has no points", name),
        }
    }
}

impl std::error::Error for ClusterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_grouped() {
        assert!(ClusterError::DegenerateRange(0).is_normalization());
        assert!(ClusterError::CentroidNormalization.is_normalization());
        assert!(ClusterError::NotTrained.is_kmeans());
        assert!(ClusterError::EmptyCluster(String::from("c")).is_kmeans());
        assert!(!ClusterError::EmptyInput.is_kmeans());
        assert!(!ClusterError::EmptyInput.is_normalization());
    }

    #[test]
    fn messages_describe_the_cause() {
        let mismatch = ClusterError::InconsistentDimensionality(vec![
            Point::from(vec![0.]),
            Point::from(vec![1., 1.]),
        ]);
        assert_eq!(mismatch.to_string(), "Inconsistent dimensionality of points");
        assert_eq!(mismatch.points().len(), 2);
        assert_eq!(ClusterError::EmptyInput.to_string(), "No point provided");
        assert!(
            ClusterError::DegenerateRange(1)
                .to_string()
                .starts_with("Difference between min and max has to be for every dimension > 0")
        );
    }
}

use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Policy for a centroid that attracted no points during an assignment pass.
///
/// The mean of an empty cluster is undefined, so training has to decide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Empty {
    /// Keep the previous coordinates and name; it counts as not having moved.
    #[default]
    Retain,
    /// Abort training with [`ClusterError::EmptyCluster`].
    Fail,
}

/// Summary of a finished training run.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    /// Lloyd iterations executed.
    pub iterations: usize,
    /// Whether the last iteration moved every centroid by at most the tolerance.
    pub converged: bool,
    /// Movement of each centroid during the last iteration, by index.
    pub drifts: Vec<Energy>,
}

impl std::fmt::Display for Training {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} after {} iterations (max drift {:.6})",
            if self.converged { "converged" } else { "stopped" },
            self.iterations,
            self.drifts.iter().copied().fold(0., Energy::max)
        )
    }
}

/// Lloyd's k-means over any [`Spatial`] points with a pluggable [`Metric`].
///
/// # State
///
/// - `k`, `metric`, `tolerance` — fixed at construction
/// - `centroids` — empty until trained; replaced wholesale every iteration
///
/// # Training
///
/// Seeds `k` centroids (caller-supplied, or `k` distinct points sampled
/// uniformly), then repeats until no centroid moves farther than `tolerance`:
///
/// 1. Flush every centroid's membership
/// 2. Assign every point to its closest centroid
/// 3. Recalculate every centroid into a new, index-aligned list
/// 4. Measure old-to-new movement, then replace the old list
///
/// Training takes `&mut self`; one model is trained by one caller at a time.
pub struct KMeans<P = Point, M = Euclidean> {
    k: usize,
    metric: M,
    tolerance: Energy,
    max_iterations: usize,
    seed: Option<u64>,
    empty: Empty,
    namer: Namer,
    centroids: Vec<Centroid<P>>,
}

impl<P> KMeans<P, Euclidean>
where
    P: Spatial + Clone,
{
    /// Euclidean model with the default tolerance.
    pub fn new(k: usize) -> Self {
        Self::with_metric(k, Euclidean)
    }
}

impl<P, M> KMeans<P, M>
where
    P: Spatial + Clone,
    M: Metric,
{
    pub fn with_metric(k: usize, metric: M) -> Self {
        Self {
            k,
            metric,
            tolerance: KMEANS_TOLERANCE,
            max_iterations: KMEANS_MAX_ITERATIONS,
            seed: None,
            empty: Empty::default(),
            namer: Namer::default(),
            centroids: Vec::new(),
        }
    }
    /// Maximum centroid movement still considered stable.
    pub fn with_tolerance(mut self, tolerance: Energy) -> Self {
        self.tolerance = tolerance;
        self
    }
    /// Bound on Lloyd iterations per training run.
    /// Every run executes at least one iteration, so 0 behaves as 1.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }
    /// Deterministic random initialization.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_empty(mut self, empty: Empty) -> Self {
        self.empty = empty;
        self
    }
    /// Names for auto-named centroids come from `namer`.
    /// Pass clones of one namer to several models to keep their names apart.
    pub fn with_namer(mut self, namer: Namer) -> Self {
        self.namer = namer;
        self
    }

    pub fn cluster_count(&self) -> usize {
        self.k
    }
    pub fn metric(&self) -> &M {
        &self.metric
    }
    pub fn tolerance(&self) -> Energy {
        self.tolerance
    }
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
    pub fn namer(&self) -> &Namer {
        &self.namer
    }
    pub fn centroids(&self) -> &[Centroid<P>] {
        &self.centroids
    }

    /// Index of the closest centroid. Ties go to the first encountered.
    fn nearest<Q>(&self, point: &Q) -> Result<usize, ClusterError>
    where
        Q: Spatial + ?Sized,
    {
        let mut best = None::<(usize, Energy)>;
        for (j, centroid) in self.centroids.iter().enumerate() {
            let d = self.metric.distance(centroid, point)?;
            match best {
                Some((_, min)) if min <= d => {}
                _ => best = Some((j, d)),
            }
        }
        best.map(|(j, _)| j).ok_or(ClusterError::NotTrained)
    }

    /// Centroid minimizing the metric distance to `point`.
    pub fn closest_centroid<Q>(&self, point: &Q) -> Result<&Centroid<P>, ClusterError>
    where
        Q: Spatial + ?Sized,
    {
        self.nearest(point).map(|j| &self.centroids[j])
    }

    pub fn centroid_by_name(&self, name: &str) -> Option<&Centroid<P>> {
        self.centroids.iter().find(|c| c.name() == name)
    }

    pub fn has_centroid(&self, name: &str) -> bool {
        self.centroid_by_name(name).is_some()
    }

    /// Sum of every centroid's variance over its current members.
    pub fn variance(&self) -> Result<Energy, ClusterError> {
        self.centroids
            .iter()
            .map(|c| c.variance(&self.metric))
            .sum()
    }

    /// Trains from `k` distinct points sampled uniformly from `points`.
    pub fn train(&mut self, points: &[P]) -> Result<Training, ClusterError> {
        self.train_with(points, Vec::new())
    }

    /// Trains from caller-supplied initial centroids, used as given.
    /// An empty `defaults` falls back to random sampling.
    pub fn train_with(
        &mut self,
        points: &[P],
        defaults: Vec<Centroid<P>>,
    ) -> Result<Training, ClusterError> {
        if self.k == 0 {
            return Err(ClusterError::NoClusters);
        }
        if !points.is_empty() {
            dimensionality_check(points)?;
        }
        self.centroids = match defaults.is_empty() {
            true => self.init_centroids(points)?,
            false if defaults.len() == self.k => defaults,
            false => {
                return Err(ClusterError::ClusterCount {
                    expected: self.k,
                    found: defaults.len(),
                });
            }
        };
        log::info!(
            "{:<32}{:<32}",
            "training kmeans",
            format!("k = {}, n = {}", self.k, points.len())
        );
        let mut iterations = 0;
        loop {
            let drifts = self.step(points)?;
            iterations += 1;
            let max = drifts.iter().copied().fold(0., Energy::max);
            log::debug!(
                "{:<32}{:<32}",
                format!("iteration {}", iterations),
                format!("drift {:.6}", max)
            );
            let changed = drifts.iter().any(|d| *d > self.tolerance);
            if !changed {
                let training = Training {
                    iterations,
                    converged: true,
                    drifts,
                };
                log::info!("{:<32}{:<32}", "kmeans", training);
                return Ok(training);
            }
            if iterations >= self.max_iterations {
                let training = Training {
                    iterations,
                    converged: false,
                    drifts,
                };
                log::warn!("{:<32}{:<32}", "kmeans iteration cap reached", training);
                return Ok(training);
            }
        }
    }

    /// One memberless centroid per distinct, uniformly sampled point.
    fn init_centroids(&self, points: &[P]) -> Result<Vec<Centroid<P>>, ClusterError> {
        if points.len() < self.k {
            return Err(ClusterError::InsufficientPoints {
                requested: self.k,
                available: points.len(),
            });
        }
        let ref mut rng = self.rng();
        Ok(rand::seq::index::sample(rng, points.len(), self.k)
            .into_iter()
            .map(|i| Centroid::centroid_of_point(&points[i], "", &self.namer))
            .collect())
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Runs a single assign/recompute iteration over the current centroids
    /// and returns how far each of them moved.
    pub fn step(&mut self, points: &[P]) -> Result<Vec<Energy>, ClusterError> {
        if self.centroids.is_empty() {
            return Err(ClusterError::NotTrained);
        }
        self.assign(points)?;
        let recomputed = self.recompute()?;
        let drifts = self.drift(&recomputed)?;
        self.centroids = recomputed;
        Ok(drifts)
    }

    /// Flushes every centroid, then hands each point to its closest one.
    fn assign(&mut self, points: &[P]) -> Result<(), ClusterError> {
        self.centroids.iter_mut().for_each(Centroid::flush);
        for point in points {
            let j = self.nearest(point)?;
            self.centroids[j].add_point(point.clone());
        }
        Ok(())
    }

    /// New centroids, index-aligned with the current ones.
    fn recompute(&self) -> Result<Vec<Centroid<P>>, ClusterError> {
        self.centroids
            .iter()
            .map(|c| match (c.number_of_points(), self.empty) {
                (0, Empty::Retain) => {
                    log::warn!("{:<32}{:<32}", "retaining empty centroid", c.name());
                    Ok(c.retain())
                }
                _ => c.recalculate(),
            })
            .collect()
    }

    /// Distance each centroid moved between the current and recomputed lists.
    fn drift(&self, recomputed: &[Centroid<P>]) -> Result<Vec<Energy>, ClusterError> {
        recomputed
            .iter()
            .zip(self.centroids.iter())
            .map(|(new, old)| self.metric.distance(new, old))
            .collect()
    }
}

//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Determines the number of clusters itself
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors (inclusive).
//! - **MinPts**: Minimum neighborhood size, *counting the point itself*, for a point to be "core".
//! - **Core point**: Has at least MinPts points within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. Scan points in index order. For each unvisited point P, run [`expand_cluster`]:
//!    - If |N(P)| < MinPts, mark P as noise (it may become a border point later)
//!    - Else P is core: open cluster `k + 1` and absorb everything density-reachable
//! 2. Expansion is breadth-first over a work queue:
//!    - Unvisited neighbors join the cluster; core ones enqueue their own neighborhood
//!    - Noise neighbors join the cluster as border points and are not expanded
//!    - Points already in a cluster are left alone
//!
//! Cluster ids are 1, 2, ... in discovery order. A point's neighborhood is queried
//! at most once per run, so the total cost is n region queries.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) distance evaluations (no spatial index).
//! - **Space**: O(n) for labels plus the expansion queue.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::collections::VecDeque;

use super::dataset::Dataset;
use super::label::{Label, Labels};
use super::metric::{Euclidean, Metric};
use super::traits::Clustering;
use crate::error::{Error, Result};

/// Sentinel used by [`Clustering::fit_predict`] for noise points.
pub const NOISE: usize = usize::MAX;

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone)]
pub struct Dbscan<M = Euclidean> {
    /// Epsilon: maximum distance for neighborhood.
    epsilon: f32,
    /// Minimum neighborhood size (self included) for core point classification.
    min_pts: usize,
    metric: M,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer using Euclidean distance.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum number of points (including the point itself) to form a dense region.
    ///
    /// # Typical Values
    ///
    /// - `epsilon`: Often read off a k-distance plot (k = min_pts - 1).
    /// - `min_pts`: At least dimension + 1.
    pub fn new(epsilon: f32, min_pts: usize) -> Self {
        Self {
            epsilon,
            min_pts,
            metric: Euclidean,
        }
    }
}

impl<M: Metric> Dbscan<M> {
    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Replace the distance function.
    pub fn with_metric<N: Metric>(self, metric: N) -> Dbscan<N> {
        Dbscan {
            epsilon: self.epsilon,
            min_pts: self.min_pts,
            metric,
        }
    }

    /// Configured neighborhood radius.
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Configured core-point threshold.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// The distance function in use.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Cluster `dataset`, returning one final label per point.
    pub fn run(&self, dataset: &Dataset) -> Result<Labels> {
        check_epsilon(self.epsilon)?;
        check_min_pts(self.min_pts)?;
        Ok(self.run_unchecked(dataset, self.epsilon))
    }

    /// Run once per value in `epsilons`, keeping `min_pts` and the metric.
    ///
    /// Every value is validated before the first run. Each run gets its own
    /// label array.
    pub fn sweep(&self, dataset: &Dataset, epsilons: &[f32]) -> Result<Vec<(f32, Labels)>> {
        check_min_pts(self.min_pts)?;
        for &eps in epsilons {
            check_epsilon(eps)?;
        }

        Ok(epsilons
            .iter()
            .map(|&eps| (eps, self.run_unchecked(dataset, eps)))
            .collect())
    }

    fn run_unchecked(&self, dataset: &Dataset, epsilon: f32) -> Labels {
        let n = dataset.len();
        let mut labels = vec![Label::Unvisited; n];
        let mut cluster_id = 0usize;

        for point_idx in 0..n {
            if labels[point_idx] != Label::Unvisited {
                continue;
            }

            let is_cluster = expand_cluster(
                &mut labels,
                point_idx,
                cluster_id + 1,
                self.min_pts,
                |idx| region_query(dataset, &self.metric, idx, epsilon),
            );

            if is_cluster {
                cluster_id += 1;
                if log::log_enabled!(log::Level::Debug) {
                    let size = labels
                        .iter()
                        .filter(|l| **l == Label::Cluster(cluster_id))
                        .count();
                    log::debug!(
                        "cluster {} seeded at point {} with {} points",
                        cluster_id,
                        point_idx,
                        size
                    );
                }
            } else {
                log::trace!("point {} is not core, marked noise", point_idx);
            }
        }

        let labels = Labels::new(labels, cluster_id);
        log::info!(
            "dbscan eps={} min_pts={}: {} points, {} clusters, {} noise",
            epsilon,
            self.min_pts,
            n,
            labels.n_clusters(),
            labels.noise_count()
        );
        labels
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

fn check_epsilon(epsilon: f32) -> Result<()> {
    // Written so that NaN fails too.
    if !(epsilon > 0.0) {
        return Err(Error::InvalidParameter {
            name: "epsilon",
            message: "must be positive",
        });
    }
    Ok(())
}

fn check_min_pts(min_pts: usize) -> Result<()> {
    if min_pts == 0 {
        return Err(Error::InvalidParameter {
            name: "min_pts",
            message: "must be at least 1",
        });
    }
    Ok(())
}

/// All points within `epsilon` of point `point_idx`, in ascending index order.
///
/// The point itself is always included (distance 0).
pub fn region_query<M: Metric + ?Sized>(
    dataset: &Dataset,
    metric: &M,
    point_idx: usize,
    epsilon: f32,
) -> Vec<usize> {
    let point = dataset.point(point_idx);
    dataset
        .iter()
        .enumerate()
        .filter(|(idx, other)| *idx == point_idx || metric.distance(point, other) <= epsilon)
        .map(|(idx, _)| idx)
        .collect()
}

/// Grow cluster `cluster_id` from `seed_idx`.
///
/// `query(i)` must return the neighborhood of point `i` (self included). It is
/// called at most once per point: only when that point leaves `Unvisited`.
///
/// Returns `false`, after marking the seed as noise, if the seed is not a core
/// point. Otherwise every density-reachable point that is unvisited or noise is
/// labeled `Cluster(cluster_id)` and `true` is returned. Points already in a
/// cluster are never relabeled.
pub fn expand_cluster<Q>(
    labels: &mut [Label],
    seed_idx: usize,
    cluster_id: usize,
    min_pts: usize,
    mut query: Q,
) -> bool
where
    Q: FnMut(usize) -> Vec<usize>,
{
    debug_assert!(cluster_id >= 1);

    let seed_neighbors = query(seed_idx);
    if seed_neighbors.len() < min_pts {
        labels[seed_idx] = Label::Noise;
        return false;
    }

    let label = Label::Cluster(cluster_id);
    labels[seed_idx] = label;

    // Settled points are dropped at enqueue time; an unvisited point may still be
    // queued twice, the label check below keeps it from being expanded twice.
    let mut queue: VecDeque<usize> = seed_neighbors
        .into_iter()
        .filter(|&i| matches!(labels[i], Label::Unvisited | Label::Noise))
        .collect();

    while let Some(idx) = queue.pop_front() {
        match labels[idx] {
            Label::Unvisited => {
                labels[idx] = label;
                let neighbors = query(idx);
                if neighbors.len() >= min_pts {
                    queue.extend(
                        neighbors
                            .into_iter()
                            .filter(|&i| matches!(labels[i], Label::Unvisited | Label::Noise)),
                    );
                }
            }
            // Border point: joins, but does not propagate.
            Label::Noise => labels[idx] = label,
            Label::Cluster(_) => {}
        }
    }

    true
}

impl<M: Metric> Clustering for Dbscan<M> {
    /// Cluster ids start at 1; noise points get [`NOISE`].
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        let dataset = Dataset::from_slice(data)?;
        let labels = self.run(&dataset)?;
        Ok(labels
            .as_slice()
            .iter()
            .map(|l| l.cluster_id().unwrap_or(NOISE))
            .collect())
    }

    /// DBSCAN discovers clusters dynamically, so this returns 0.
    ///
    /// To get the actual number of clusters, use [`Labels::n_clusters`] from [`Dbscan::run`].
    fn n_clusters(&self) -> usize {
        0
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>>;

    /// Check if a label represents noise.
    fn is_noise(label: usize) -> bool {
        label == NOISE
    }
}

impl<M: Metric> DbscanExt for Dbscan<M> {
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>> {
        let dataset = Dataset::from_slice(data)?;
        Ok(self.run(&dataset)?.to_options())
    }
}

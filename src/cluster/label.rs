use super::dataset::Dataset;

/// Per-point clustering state.
///
/// Transitions are `Unvisited -> Noise | Cluster(k)` and `Noise -> Cluster(k)`.
/// `Cluster(k)` is terminal. Cluster ids start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Not yet examined.
    Unvisited,
    /// Not density-reachable from any core point (so far).
    Noise,
    /// Member of cluster `k` (`k >= 1`).
    Cluster(usize),
}

impl Label {
    /// Cluster id, or `None` for noise and unvisited points.
    pub fn cluster_id(self) -> Option<usize> {
        match self {
            Label::Cluster(k) => Some(k),
            _ => None,
        }
    }

    /// `true` for [`Label::Noise`].
    pub fn is_noise(self) -> bool {
        self == Label::Noise
    }
}

/// Aggregate view of one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    /// Cluster id (`>= 1`).
    pub id: usize,
    /// Number of member points.
    pub size: usize,
    /// Per-dimension mean of the members.
    pub centroid: Vec<f32>,
}

/// Final labels of a clustering run, parallel to the input [`Dataset`].
///
/// Every entry is either `Noise` or `Cluster(k)`, and the ids in use are exactly
/// `1..=n_clusters()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    labels: Vec<Label>,
    n_clusters: usize,
}

impl Labels {
    pub(crate) fn new(labels: Vec<Label>, n_clusters: usize) -> Self {
        debug_assert!(!labels.contains(&Label::Unvisited));
        Self { labels, n_clusters }
    }

    /// Labels in point-index order.
    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }

    /// Label of point `idx`, if in range.
    pub fn get(&self, idx: usize) -> Option<Label> {
        self.labels.get(idx).copied()
    }

    /// Number of labeled points.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// `true` if there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of clusters discovered.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Number of points labeled noise.
    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_noise()).count()
    }

    /// Indices of noise points, ascending.
    pub fn noise_indices(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_noise())
            .map(|(i, _)| i)
            .collect()
    }

    /// Member indices of each cluster.
    ///
    /// Entry `k - 1` holds the members of cluster `k`, in ascending index order.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.n_clusters];
        for (i, l) in self.labels.iter().enumerate() {
            if let Label::Cluster(k) = l {
                groups[k - 1].push(i);
            }
        }
        groups
    }

    /// Size of the largest cluster, 0 if every point is noise.
    pub fn largest_cluster_size(&self) -> usize {
        let mut sizes = vec![0usize; self.n_clusters];
        for l in &self.labels {
            if let Label::Cluster(k) = l {
                sizes[k - 1] += 1;
            }
        }
        sizes.into_iter().max().unwrap_or(0)
    }

    /// Cluster id per point, `None` for noise.
    pub fn to_options(&self) -> Vec<Option<usize>> {
        self.labels.iter().map(|l| l.cluster_id()).collect()
    }

    /// Size and centroid of every cluster, ordered by id.
    ///
    /// `dataset` must be the dataset these labels were produced from.
    pub fn summaries(&self, dataset: &Dataset) -> Vec<ClusterSummary> {
        debug_assert_eq!(dataset.len(), self.labels.len());
        self.clusters()
            .into_iter()
            .enumerate()
            .map(|(k, members)| {
                let mut centroid = vec![0.0f32; dataset.dim()];
                for &i in &members {
                    for (c, x) in centroid.iter_mut().zip(dataset.point(i)) {
                        *c += x;
                    }
                }
                let size = members.len();
                for c in &mut centroid {
                    *c /= size as f32;
                }
                ClusterSummary {
                    id: k + 1,
                    size,
                    centroid,
                }
            })
            .collect()
    }

    /// Release the underlying label vector.
    pub fn into_vec(self) -> Vec<Label> {
        self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Labels {
        Labels::new(
            vec![
                Label::Cluster(1),
                Label::Noise,
                Label::Cluster(2),
                Label::Cluster(1),
                Label::Noise,
            ],
            2,
        )
    }

    #[test]
    fn grouping() {
        let labels = sample();
        assert_eq!(labels.clusters(), vec![vec![0, 3], vec![2]]);
        assert_eq!(labels.noise_indices(), vec![1, 4]);
        assert_eq!(labels.noise_count(), 2);
        assert_eq!(labels.largest_cluster_size(), 2);
        assert_eq!(
            labels.to_options(),
            vec![Some(1), None, Some(2), Some(1), None]
        );
    }

    #[test]
    fn summaries_average_members() {
        let ds = Dataset::new(vec![
            vec![0.0, 0.0],
            vec![9.0, 9.0],
            vec![5.0, 5.0],
            vec![2.0, 4.0],
            vec![-9.0, 9.0],
        ])
        .unwrap();
        let summaries = sample().summaries(&ds);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, 1);
        assert_eq!(summaries[0].size, 2);
        assert_eq!(summaries[0].centroid, vec![1.0, 2.0]);
        assert_eq!(summaries[1].centroid, vec![5.0, 5.0]);
    }

    #[test]
    fn all_noise_has_no_largest_cluster() {
        let labels = Labels::new(vec![Label::Noise; 3], 0);
        assert_eq!(labels.largest_cluster_size(), 0);
        assert!(labels.clusters().is_empty());
    }
}

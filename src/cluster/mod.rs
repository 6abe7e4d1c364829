//! Density-based clustering.
//!
//! ## Pieces
//!
//! - [`Metric`]: the distance function (Euclidean by default, any closure works).
//! - [`Dataset`]: validated points; index order is the point's identity.
//! - [`region_query`]: the ε-neighborhood of one point, self included.
//! - [`expand_cluster`]: grows one cluster from a seed over a work queue.
//! - [`Dbscan`]: the driver, scanning points in order and numbering clusters from 1.
//! - [`Labels`]: per-point result, grouped into clusters on demand.
//!
//! ## Usage
//!
//! ```rust
//! use scanclust::cluster::{Dataset, Dbscan, Label};
//!
//! let data = Dataset::new(vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![0.0, 0.1],
//!     vec![10.0, 10.0],
//! ])
//! .unwrap();
//!
//! let labels = Dbscan::new(0.5, 3).run(&data).unwrap();
//! assert_eq!(labels.n_clusters(), 1);
//! assert_eq!(labels.as_slice()[0], Label::Cluster(1));
//! assert_eq!(labels.as_slice()[3], Label::Noise);
//!
//! // Same data at several radii, one independent label array each.
//! let runs = Dbscan::new(0.5, 3).sweep(&data, &[0.5, 20.0]).unwrap();
//! assert_eq!(runs[1].1.noise_count(), 0);
//! ```

mod dataset;
mod dbscan;
mod label;
mod metric;
mod traits;

pub use dataset::Dataset;
pub use dbscan::{expand_cluster, region_query, Dbscan, DbscanExt, NOISE};
pub use label::{ClusterSummary, Label, Labels};
pub use metric::{Euclidean, Manhattan, Metric};
pub use traits::Clustering;

//! Density-based clustering of dense vectors.
//!
//! `scanclust` implements DBSCAN over a validated, index-stable [`Dataset`].
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Dbscan`]: the clustering driver (builder-configured, metric-generic)
//! - [`region_query`] and [`expand_cluster`]: the neighborhood query and the
//!   cluster expander the driver is built from
//! - [`Labels`]: the finished label array, with on-demand cluster grouping

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    expand_cluster, region_query, ClusterSummary, Clustering, Dataset, Dbscan, DbscanExt,
    Euclidean, Label, Labels, Manhattan, Metric, NOISE,
};
pub use error::{Error, Result};

//! Density clustering with per-axis tolerances.
//!
//! `boxscan` partitions points in a fixed-dimensional space into clusters of
//! arbitrary shape separated by sparse regions, and flags points in no dense
//! neighborhood as noise. Neighborhoods are axis-aligned boxes whose
//! half-extent is set independently per axis.
//!
//! - [`cluster`]: the DBSCAN labeler and label helpers.
//! - [`index`]: neighborhood indexes (uniform grid, brute force).
//!
//! Points are anything that is `AsRef<[f64]>`; labels come back as one
//! [`Label`] per point, in input order.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod index;

pub use cluster::{
    cluster_members, count_clusters, noise_indices, Clustering, Dbscan, DbscanExt, DbscanFit,
    Label, PointState, NOISE,
};
pub use error::{Error, Result};
pub use index::{BruteForceIndex, GridIndex, IndexKind, Metric, NeighborhoodIndex};

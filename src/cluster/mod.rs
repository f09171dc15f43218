//! Density-based clustering over per-axis tolerance boxes.
//!
//! [`Dbscan`] drives a [`NeighborhoodIndex`](crate::index::NeighborhoodIndex)
//! through repeated range queries while it tracks a [`PointState`] per point,
//! then reports one [`Label`] per input point: a cluster id in `0..K`, or
//! [`NOISE`].
//!
//! Ids are dense and numbered in discovery order. Traversal follows input
//! order, so identical input yields identical labels. Comparing two different
//! implementations should compare partitions ([`cluster_members`]) instead.
//!
//! ## Usage
//!
//! ```rust
//! use boxscan::cluster::{cluster_members, Clustering, Dbscan, NOISE};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![50.0, 50.0],
//! ];
//!
//! let labels = Dbscan::new([0.5, 0.5], 2).fit_predict(&data).unwrap();
//! assert_eq!(labels, vec![0, 0, 1, 1, NOISE]);
//! assert_eq!(cluster_members(&labels), vec![vec![0, 1], vec![2, 3]]);
//! ```

mod dbscan;
mod labels;
mod state;
mod traits;

pub use dbscan::{Dbscan, DbscanExt, DbscanFit};
pub use labels::{cluster_members, count_clusters, noise_indices};
pub use state::PointState;
pub use traits::Clustering;

/// A cluster id (`>= 0`) or [`NOISE`].
pub type Label = i64;

/// Label given to points outside every cluster.
pub const NOISE: Label = -1;

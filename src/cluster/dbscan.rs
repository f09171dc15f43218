//! DBSCAN with per-axis tolerance boxes.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. It discovers clusters of
//! arbitrary shape, does not need the number of clusters up front, and flags
//! points in sparse regions as noise.
//!
//! ## Neighborhoods
//!
//! Instead of a single radius ε, every axis carries its own half-extent. With
//! the default [`Metric::Box`], `q` is a neighbor of `p` when
//! `|q[i] - p[i]| <= tolerance[i]` on every axis `i`. Units may differ per
//! axis (degrees of longitude vs. seconds of time, say), which a single
//! Euclidean radius cannot express. [`Metric::Ellipsoid`] swaps in the
//! ellipsoid inscribed in the same box.
//!
//! ## Core Concepts
//!
//! - **Core point**: its neighborhood (itself included) holds at least
//!   `min_neighbors` points.
//! - **Border point**: inside a core point's neighborhood but not core itself.
//! - **Noise point**: neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unvisited point P, in input order:
//!    - Query its neighborhood.
//!    - If it is smaller than `min_neighbors`, mark P as noise (may change later).
//!    - Else P is core: open the next cluster id and expand from its neighbors.
//!
//! 2. Expansion works through a worklist: each reached point joins the
//!    cluster, and reached core points push their own neighbors.
//!
//! Cluster ids are dense (`0..K`) and numbered in discovery order, so a fixed
//! input always yields the same labels.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) with [`IndexKind::BruteForce`], close to O(n · k) with the
//!   grid, where k is the typical neighborhood size.
//! - **Space**: O(n) for state plus the index.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use super::state::PointState;
use super::traits::Clustering;
use super::{Label, NOISE};
use crate::error::{Error, Result};
use crate::index::{validate_tolerance, AnyIndex, IndexKind, Metric, NeighborhoodIndex};

/// DBSCAN clustering with a per-axis tolerance vector.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Half-extent of the neighborhood box along each axis.
    tolerance: Vec<f64>,
    /// Minimum neighborhood size (self included) for a core point.
    min_neighbors: usize,
    /// Neighbor predicate.
    metric: Metric,
    /// Index used to answer range queries.
    index: IndexKind,
    /// Upper bound on range queries per run.
    max_steps: Option<usize>,
    /// Whether an empty dataset yields empty labels instead of an error.
    allow_empty: bool,
}

/// Outcome of [`Dbscan::fit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbscanFit {
    /// One label per input point: a cluster id in `0..n_clusters`, or [`NOISE`].
    pub labels: Vec<Label>,
    /// Number of clusters discovered.
    pub n_clusters: usize,
    /// Range queries performed.
    pub steps: usize,
    /// False when the step budget ran out. Points the run never settled are
    /// reported as [`NOISE`] and the last cluster may be truncated.
    pub complete: bool,
}

impl DbscanFit {
    /// Member indices of each cluster.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        super::labels::cluster_members(&self.labels)
    }

    /// Indices labeled noise.
    pub fn noise(&self) -> Vec<usize> {
        super::labels::noise_indices(&self.labels)
    }
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Neighborhood half-extent per axis. Its length fixes the
    ///   dimensionality every point must have.
    /// * `min_neighbors` - Minimum neighborhood size, the point itself
    ///   included, for a point to be core.
    pub fn new(tolerance: impl Into<Vec<f64>>, min_neighbors: usize) -> Self {
        Self {
            tolerance: tolerance.into(),
            min_neighbors,
            metric: Metric::default(),
            index: IndexKind::default(),
            max_steps: None,
            allow_empty: true,
        }
    }

    /// Set the per-axis tolerance.
    pub fn with_tolerance(mut self, tolerance: impl Into<Vec<f64>>) -> Self {
        self.tolerance = tolerance.into();
        self
    }

    /// Set the minimum neighborhood size for core classification.
    pub fn with_min_neighbors(mut self, min_neighbors: usize) -> Self {
        self.min_neighbors = min_neighbors;
        self
    }

    /// Set the neighbor predicate.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Set which index answers range queries.
    pub fn with_index(mut self, index: IndexKind) -> Self {
        self.index = index;
        self
    }

    /// Bound the number of range queries per run. `None` removes the bound.
    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Whether an empty dataset is accepted (the default) or rejected with
    /// [`Error::EmptyInput`].
    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Per-axis tolerance.
    pub fn tolerance(&self) -> &[f64] {
        &self.tolerance
    }

    /// Minimum neighborhood size for core points.
    pub fn min_neighbors(&self) -> usize {
        self.min_neighbors
    }

    fn check_min_neighbors(&self) -> Result<()> {
        if self.min_neighbors == 0 {
            return Err(Error::InvalidParameter {
                name: "min_neighbors",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Validate input, build the configured index and label every point.
    pub fn fit<P: AsRef<[f64]>>(&self, data: &[P]) -> Result<DbscanFit> {
        self.check_min_neighbors()?;
        validate_tolerance(&self.tolerance)?;
        if data.is_empty() && self.allow_empty {
            return Ok(DbscanFit {
                labels: Vec::new(),
                n_clusters: 0,
                steps: 0,
                complete: true,
            });
        }
        let index = AnyIndex::build(data, &self.tolerance, self.metric, self.index)?;
        self.fit_with_index(&index)
    }

    /// Label every point of an already-built index.
    ///
    /// The index's own tolerance and metric apply; only `min_neighbors` and
    /// the step budget are taken from `self`.
    pub fn fit_with_index<I: NeighborhoodIndex>(&self, index: &I) -> Result<DbscanFit> {
        self.check_min_neighbors()?;
        Ok(self.run(index))
    }

    /// Cluster caller-identified points, returning `(id, label)` pairs in
    /// input order.
    pub fn fit_with_ids<K: Clone, P: AsRef<[f64]>>(
        &self,
        items: &[(K, P)],
    ) -> Result<Vec<(K, Label)>> {
        let points: Vec<&[f64]> = items.iter().map(|(_, p)| p.as_ref()).collect();
        let labels = self.fit_predict(&points)?;
        Ok(items
            .iter()
            .zip(labels)
            .map(|((id, _), label)| (id.clone(), label))
            .collect())
    }

    fn run<I: NeighborhoodIndex>(&self, index: &I) -> DbscanFit {
        let n = index.len();
        let mut state = vec![PointState::Unvisited; n];
        let mut next_cluster: usize = 0;
        let mut steps: usize = 0;
        let mut complete = true;

        let mut hood: Vec<usize> = Vec::new();
        let mut worklist: Vec<usize> = Vec::new();

        'outer: for point_idx in 0..n {
            if state[point_idx] != PointState::Unvisited {
                continue;
            }
            if self.max_steps.is_some_and(|max| steps >= max) {
                complete = false;
                break;
            }
            state[point_idx] = PointState::Visited;
            index.query_into(point_idx, &mut hood);
            steps += 1;

            if hood.len() < self.min_neighbors {
                // May still become a border point of a later cluster.
                state[point_idx] = PointState::Noise;
                continue;
            }

            let cluster_id = next_cluster;
            next_cluster += 1;
            state[point_idx] = PointState::Member(cluster_id);
            tracing::trace!(cluster_id, seed = point_idx, "cluster opened");

            worklist.clear();
            Self::enqueue(&hood, cluster_id, &mut state, &mut worklist);

            // Queued points are `Visited`: each is popped and queried once.
            while let Some(candidate) = worklist.pop() {
                if self.max_steps.is_some_and(|max| steps >= max) {
                    complete = false;
                    break 'outer;
                }
                index.query_into(candidate, &mut hood);
                steps += 1;
                state[candidate] = PointState::Member(cluster_id);

                if hood.len() >= self.min_neighbors {
                    Self::enqueue(&hood, cluster_id, &mut state, &mut worklist);
                }
            }
        }

        if !complete {
            tracing::warn!(
                steps,
                clusters = next_cluster,
                "step budget exhausted, returning partial labels"
            );
        }

        debug_assert!(!complete || state.iter().all(|s| s.is_settled()));

        let labels: Vec<Label> = state.iter().map(|s| s.label()).collect();
        tracing::debug!(
            points = n,
            clusters = next_cluster,
            noise = labels.iter().filter(|&&l| l == NOISE).count(),
            steps,
            complete,
            "dbscan finished"
        );

        DbscanFit {
            labels,
            n_clusters: next_cluster,
            steps,
            complete,
        }
    }

    /// Absorb the neighbors of a core point into `cluster_id`.
    ///
    /// Noise points become border members directly; unvisited points are
    /// marked `Visited` and queued for their own neighborhood query.
    fn enqueue(
        hood: &[usize],
        cluster_id: usize,
        state: &mut [PointState],
        worklist: &mut Vec<usize>,
    ) {
        for &neighbor in hood {
            match state[neighbor] {
                PointState::Noise => state[neighbor] = PointState::Member(cluster_id),
                PointState::Unvisited => {
                    state[neighbor] = PointState::Visited;
                    worklist.push(neighbor);
                }
                PointState::Visited | PointState::Member(_) => {}
            }
        }
    }
}

impl Clustering for Dbscan {
    fn fit_predict<P: AsRef<[f64]>>(&self, data: &[P]) -> Result<Vec<Label>> {
        let fit = self.fit(data)?;
        if !fit.complete {
            return Err(Error::Incomplete { steps: fit.steps });
        }
        Ok(fit.labels)
    }
}

/// Extended DBSCAN interface with noise as `None`.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise<P: AsRef<[f64]>>(&self, data: &[P]) -> Result<Vec<Option<usize>>>;

    /// Check if a label represents noise.
    fn is_noise(label: Label) -> bool {
        label == NOISE
    }
}

impl DbscanExt for Dbscan {
    fn fit_predict_with_noise<P: AsRef<[f64]>>(&self, data: &[P]) -> Result<Vec<Option<usize>>> {
        Ok(self
            .fit_predict(data)?
            .into_iter()
            .map(|l| if l >= 0 { Some(l as usize) } else { None })
            .collect())
    }
}

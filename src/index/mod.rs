//! Neighborhood indexes: "which points lie inside the tolerance box of point p?"
//!
//! Every index is built once over borrowed coordinates and is read-only
//! afterwards. A point always belongs to its own neighborhood.
//!
//! - [`GridIndex`]: uniform grid with tolerance-sized cells. The default.
//! - [`BruteForceIndex`]: linear scan per query. Reference and fallback.
//!
//! ```rust
//! use boxscan::index::{GridIndex, Metric, NeighborhoodIndex};
//!
//! let data = vec![[0.0, 0.0], [0.04, -0.03], [1.0, 1.0]];
//! let index = GridIndex::build(&data, &[0.05, 0.05], Metric::Box).unwrap();
//!
//! let mut hood = index.query(0);
//! hood.sort_unstable();
//! assert_eq!(hood, vec![0, 1]);
//! ```

mod brute;
mod grid;
mod metric;

pub use brute::BruteForceIndex;
pub use grid::GridIndex;
pub use metric::Metric;

use crate::error::{Error, Result};

/// Range queries against a fixed dataset.
pub trait NeighborhoodIndex {
    /// Number of indexed points.
    fn len(&self) -> usize;

    /// Whether the index holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality of the indexed points.
    fn dims(&self) -> usize;

    /// Write every index inside the neighborhood of `point_idx` into `out`,
    /// replacing its contents. `point_idx` itself is always included.
    ///
    /// No ordering is guaranteed.
    fn query_into(&self, point_idx: usize, out: &mut Vec<usize>);

    /// Allocating form of [`NeighborhoodIndex::query_into`].
    fn query(&self, point_idx: usize) -> Vec<usize> {
        let mut out = Vec::new();
        self.query_into(point_idx, &mut out);
        out
    }
}

/// Which index backs a clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexKind {
    /// Grid, unless one query would scan more cells than there are points.
    #[default]
    Auto,
    /// Always [`GridIndex`].
    Grid,
    /// Always [`BruteForceIndex`].
    BruteForce,
}

/// An index chosen at runtime from an [`IndexKind`].
#[derive(Debug)]
pub enum AnyIndex<'a, P> {
    /// Grid bucketing.
    Grid(GridIndex<'a, P>),
    /// Linear scan.
    BruteForce(BruteForceIndex<'a, P>),
}

impl<'a, P: AsRef<[f64]>> AnyIndex<'a, P> {
    /// Build the index `kind` selects for this dataset.
    pub fn build(
        data: &'a [P],
        tolerance: &[f64],
        metric: Metric,
        kind: IndexKind,
    ) -> Result<Self> {
        let use_grid = match kind {
            IndexKind::Grid => true,
            IndexKind::BruteForce => false,
            IndexKind::Auto => grid::scan_cells(tolerance) <= data.len(),
        };
        if use_grid {
            GridIndex::build(data, tolerance, metric).map(AnyIndex::Grid)
        } else {
            BruteForceIndex::build(data, tolerance, metric).map(AnyIndex::BruteForce)
        }
    }
}

impl<P: AsRef<[f64]>> NeighborhoodIndex for AnyIndex<'_, P> {
    fn len(&self) -> usize {
        match self {
            AnyIndex::Grid(index) => index.len(),
            AnyIndex::BruteForce(index) => index.len(),
        }
    }

    fn dims(&self) -> usize {
        match self {
            AnyIndex::Grid(index) => index.dims(),
            AnyIndex::BruteForce(index) => index.dims(),
        }
    }

    fn query_into(&self, point_idx: usize, out: &mut Vec<usize>) {
        match self {
            AnyIndex::Grid(index) => index.query_into(point_idx, out),
            AnyIndex::BruteForce(index) => index.query_into(point_idx, out),
        }
    }
}

/// Check a tolerance vector on its own.
///
/// Fails when it is empty or holds a negative or non-finite component.
pub fn validate_tolerance(tolerance: &[f64]) -> Result<()> {
    if tolerance.is_empty() {
        return Err(Error::InvalidParameter {
            name: "tolerance",
            message: "must have at least one component",
        });
    }
    if tolerance.iter().any(|t| !t.is_finite() || *t < 0.0) {
        return Err(Error::InvalidParameter {
            name: "tolerance",
            message: "components must be finite and non-negative",
        });
    }
    Ok(())
}

/// Check a dataset and tolerance vector before indexing.
///
/// Fails on a bad tolerance (see [`validate_tolerance`]), an empty dataset, a
/// point whose length differs from the tolerance's, or a non-finite
/// coordinate.
pub fn validate<P: AsRef<[f64]>>(data: &[P], tolerance: &[f64]) -> Result<()> {
    validate_tolerance(tolerance)?;
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    let dims = tolerance.len();
    for (index, point) in data.iter().enumerate() {
        let point = point.as_ref();
        if point.len() != dims {
            return Err(Error::DimensionMismatch {
                index,
                expected: dims,
                found: point.len(),
            });
        }
        if let Some(axis) = point.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteCoordinate { index, axis });
        }
    }
    Ok(())
}

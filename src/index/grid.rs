//! Uniform grid bucketing keyed by tolerance-sized cells.
//!
//! Along an axis with tolerance `t > 0` a point at coordinate `x` lives in cell
//! `floor(x / t)`. Two points within `t` of each other are then at most one
//! cell apart, so a query only scans the 3 adjacent cells per axis (3^D in
//! total) instead of the whole dataset.
//!
//! Axes with zero tolerance only admit exact matches. They are keyed by the
//! coordinate's bit pattern and scanned at offset 0 alone.
//!
//! Up to eight dimensions a query keeps its cell keys in stack scratch space,
//! so it allocates nothing beyond the caller's output buffer.

use std::collections::HashMap;

use xxhash_rust::xxh64::Xxh64Builder;

use super::{validate, Metric, NeighborhoodIndex};
use crate::error::Result;

/// Dimensionality up to which query scratch lives on the stack.
pub(crate) const INLINE_DIMS: usize = 8;

type CellMap = HashMap<Vec<i64>, Vec<usize>, Xxh64Builder>;

/// Grid-backed neighborhood index over borrowed coordinates.
#[derive(Debug)]
pub struct GridIndex<'a, P> {
    data: &'a [P],
    tolerance: Vec<f64>,
    metric: Metric,
    cells: CellMap,
}

/// Cell coordinate of `x` along an axis with tolerance `t`.
#[inline]
fn cell_coord(x: f64, t: f64) -> i64 {
    if t > 0.0 {
        // `as` saturates for out-of-range quotients.
        (x / t).floor() as i64
    } else {
        // `+ 0.0` folds -0.0 into +0.0.
        (x + 0.0).to_bits() as i64
    }
}

/// Number of cells a query scans for this tolerance vector.
pub(crate) fn scan_cells(tolerance: &[f64]) -> usize {
    tolerance
        .iter()
        .filter(|&&t| t > 0.0)
        .fold(1usize, |acc, _| acc.saturating_mul(3))
}

impl<'a, P: AsRef<[f64]>> GridIndex<'a, P> {
    /// Validate `data` against `tolerance` and bucket every point.
    pub fn build(data: &'a [P], tolerance: &[f64], metric: Metric) -> Result<Self> {
        validate(data, tolerance)?;

        let mut cells: CellMap = HashMap::with_hasher(Xxh64Builder::new(0));
        for (idx, point) in data.iter().enumerate() {
            let key = Self::key_of(point.as_ref(), tolerance);
            cells.entry(key).or_default().push(idx);
        }

        tracing::debug!(
            points = data.len(),
            dims = tolerance.len(),
            cells = cells.len(),
            scan_cells = scan_cells(tolerance),
            "grid index built"
        );

        Ok(Self {
            data,
            tolerance: tolerance.to_vec(),
            metric,
            cells,
        })
    }

    /// Number of occupied cells.
    pub fn n_cells(&self) -> usize {
        self.cells.len()
    }

    fn key_of(point: &[f64], tolerance: &[f64]) -> Vec<i64> {
        point
            .iter()
            .zip(tolerance)
            .map(|(&x, &t)| cell_coord(x, t))
            .collect()
    }

    /// Collect the neighbors of `point_idx` from the cells around it.
    ///
    /// `scratch` holds `3 * dims` slots: home cell, offsets, probed key.
    fn scan(&self, point_idx: usize, scratch: &mut [i64], out: &mut Vec<usize>) {
        let dims = self.tolerance.len();
        let point = self.data[point_idx].as_ref();
        let (home, rest) = scratch.split_at_mut(dims);
        let (offset, key) = rest.split_at_mut(dims);

        // Odometer over per-axis offsets: {-1, 0, 1}, or {0} on exact axes.
        for (axis, (&x, &t)) in point.iter().zip(&self.tolerance).enumerate() {
            home[axis] = cell_coord(x, t);
            offset[axis] = if t > 0.0 { -1 } else { 0 };
        }

        loop {
            let mut in_range = true;
            for axis in 0..dims {
                match home[axis].checked_add(offset[axis]) {
                    Some(c) => key[axis] = c,
                    None => {
                        in_range = false;
                        break;
                    }
                }
            }

            if in_range {
                if let Some(bucket) = self.cells.get(&key[..]) {
                    for &other in bucket {
                        if self
                            .metric
                            .within(point, self.data[other].as_ref(), &self.tolerance)
                        {
                            out.push(other);
                        }
                    }
                }
            }

            let mut axis = 0;
            loop {
                if axis == dims {
                    return;
                }
                if self.tolerance[axis] > 0.0 && offset[axis] < 1 {
                    offset[axis] += 1;
                    break;
                }
                offset[axis] = if self.tolerance[axis] > 0.0 { -1 } else { 0 };
                axis += 1;
            }
        }
    }
}

impl<P: AsRef<[f64]>> NeighborhoodIndex for GridIndex<'_, P> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn dims(&self) -> usize {
        self.tolerance.len()
    }

    fn query_into(&self, point_idx: usize, out: &mut Vec<usize>) {
        out.clear();
        let dims = self.tolerance.len();
        if dims <= INLINE_DIMS {
            let mut scratch = [0i64; 3 * INLINE_DIMS];
            self.scan(point_idx, &mut scratch[..3 * dims], out);
        } else {
            let mut scratch = vec![0i64; 3 * dims];
            self.scan(point_idx, &mut scratch, out);
        }
    }
}

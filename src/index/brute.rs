use super::{validate, Metric, NeighborhoodIndex};
use crate::error::Result;

/// Linear-scan index: every query tests every point.
///
/// O(N) per query, O(N²) per clustering run. Serves as the reference
/// implementation and as the fallback when the grid would scan more cells
/// than there are points.
#[derive(Debug, Clone)]
pub struct BruteForceIndex<'a, P> {
    data: &'a [P],
    tolerance: Vec<f64>,
    metric: Metric,
}

impl<'a, P: AsRef<[f64]>> BruteForceIndex<'a, P> {
    /// Validate `data` against `tolerance` and wrap it.
    pub fn build(data: &'a [P], tolerance: &[f64], metric: Metric) -> Result<Self> {
        validate(data, tolerance)?;
        Ok(Self {
            data,
            tolerance: tolerance.to_vec(),
            metric,
        })
    }
}

impl<P: AsRef<[f64]>> NeighborhoodIndex for BruteForceIndex<'_, P> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn dims(&self) -> usize {
        self.tolerance.len()
    }

    fn query_into(&self, point_idx: usize, out: &mut Vec<usize>) {
        out.clear();
        let point = self.data[point_idx].as_ref();
        out.extend(
            self.data
                .iter()
                .enumerate()
                .filter(|(_, other)| self.metric.within(point, other.as_ref(), &self.tolerance))
                .map(|(idx, _)| idx),
        );
    }
}

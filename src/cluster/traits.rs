use super::Label;
use crate::error::Result;

/// Common interface for hard clustering (one label per point).
pub trait Clustering {
    /// Fit on `data` and return one label per input point, in input order.
    fn fit_predict<P: AsRef<[f64]>>(&self, data: &[P]) -> Result<Vec<Label>>;
}

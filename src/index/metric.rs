/// Neighbor predicate applied to a pair of points and a tolerance vector.
///
/// Both predicates are bounded by the tolerance box, so any index that
/// enumerates box candidates can serve either one. A zero tolerance
/// component requires exact equality along that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// `|a[i] - b[i]| <= tolerance[i]` on every axis.
    #[default]
    Box,
    /// `Σ (|a[i] - b[i]| / tolerance[i])² <= 1`: the ellipsoid inscribed in
    /// the tolerance box.
    Ellipsoid,
}

impl Metric {
    /// Whether `b` lies in the neighborhood of `a`.
    #[inline]
    pub fn within(self, a: &[f64], b: &[f64], tolerance: &[f64]) -> bool {
        debug_assert_eq!(a.len(), b.len());
        debug_assert_eq!(a.len(), tolerance.len());
        match self {
            Metric::Box => a
                .iter()
                .zip(b)
                .zip(tolerance)
                .all(|((x, y), t)| (x - y).abs() <= *t),
            Metric::Ellipsoid => {
                let mut acc = 0.0;
                for ((x, y), &t) in a.iter().zip(b).zip(tolerance) {
                    let d = (x - y).abs();
                    if d > t {
                        return false;
                    }
                    // d <= t == 0 means equal along this axis.
                    if t > 0.0 {
                        let r = d / t;
                        acc += r * r;
                    }
                }
                acc <= 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_is_inclusive() {
        let tol = [0.5, 0.5];
        assert!(Metric::Box.within(&[0.0, 0.0], &[0.5, -0.5], &tol));
        assert!(!Metric::Box.within(&[0.0, 0.0], &[0.5, 0.51], &tol));
    }

    #[test]
    fn test_box_corner_outside_ellipsoid() {
        let tol = [1.0, 1.0];
        let a = [0.0, 0.0];
        let corner = [0.9, 0.9];
        assert!(Metric::Box.within(&a, &corner, &tol));
        assert!(!Metric::Ellipsoid.within(&a, &corner, &tol));
        assert!(Metric::Ellipsoid.within(&a, &[0.6, 0.6], &tol));
    }

    #[test]
    fn test_ellipsoid_scales_per_axis() {
        let tol = [2.0, 0.5];
        assert!(Metric::Ellipsoid.within(&[0.0, 0.0], &[2.0, 0.0], &tol));
        assert!(Metric::Ellipsoid.within(&[0.0, 0.0], &[0.0, 0.5], &tol));
        assert!(!Metric::Ellipsoid.within(&[0.0, 0.0], &[1.5, 0.4], &tol));
    }

    #[test]
    fn test_zero_tolerance_axis() {
        let tol = [0.0, 1.0];
        for metric in [Metric::Box, Metric::Ellipsoid] {
            assert!(metric.within(&[3.0, 0.0], &[3.0, 0.5], &tol));
            assert!(!metric.within(&[3.0, 0.0], &[3.0001, 0.0], &tol));
        }
    }

    #[test]
    fn test_point_is_its_own_neighbor() {
        let tol = [0.0, 0.0, 0.0];
        for metric in [Metric::Box, Metric::Ellipsoid] {
            assert!(metric.within(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &tol));
        }
    }
}

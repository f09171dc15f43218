use boxscan::cluster::{cluster_members, Clustering, Dbscan, NOISE};
use boxscan::index::{BruteForceIndex, IndexKind, Metric, NeighborhoodIndex};
use proptest::prelude::*;

fn points(dims: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(-5.0f64..5.0, dims), 1..60)
}

proptest! {
    #[test]
    fn prop_labels_complete_and_dense(
        data in points(2),
        tx in 0.1f64..1.5,
        ty in 0.1f64..1.5,
        min_neighbors in 1usize..6
    ) {
        let fit = Dbscan::new([tx, ty], min_neighbors).fit(&data).unwrap();

        prop_assert!(fit.complete);
        prop_assert_eq!(fit.labels.len(), data.len());
        for &l in &fit.labels {
            prop_assert!(l == NOISE || (0..fit.n_clusters as i64).contains(&l));
        }
        // No id is skipped.
        let clusters = cluster_members(&fit.labels);
        prop_assert_eq!(clusters.len(), fit.n_clusters);
        for members in &clusters {
            prop_assert!(!members.is_empty());
        }
    }

    #[test]
    fn prop_grid_matches_brute_force(
        data in points(3),
        t in 0.2f64..2.0,
        min_neighbors in 1usize..5,
        ellipsoid in any::<bool>()
    ) {
        let metric = if ellipsoid { Metric::Ellipsoid } else { Metric::Box };
        let base = Dbscan::new([t, t * 0.5, t], min_neighbors).with_metric(metric);
        let grid = base.clone().with_index(IndexKind::Grid).fit_predict(&data).unwrap();
        let brute = base.with_index(IndexKind::BruteForce).fit_predict(&data).unwrap();
        prop_assert_eq!(grid, brute);
    }

    #[test]
    fn prop_deterministic(
        data in points(2),
        t in 0.1f64..1.5,
        min_neighbors in 1usize..6
    ) {
        let dbscan = Dbscan::new([t, t], min_neighbors);
        let first = dbscan.fit_predict(&data).unwrap();
        let second = dbscan.fit_predict(&data).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_density_invariants(
        data in points(2),
        t in 0.1f64..1.5,
        min_neighbors in 1usize..6
    ) {
        let tol = [t, t];
        let labels = Dbscan::new(tol, min_neighbors).fit_predict(&data).unwrap();
        let index = BruteForceIndex::build(&data, &tol, Metric::Box).unwrap();
        let hoods: Vec<Vec<usize>> = (0..data.len()).map(|i| index.query(i)).collect();
        let is_core = |i: usize| hoods[i].len() >= min_neighbors;

        for i in 0..data.len() {
            if is_core(i) {
                // A core point and its whole neighborhood are clustered, and
                // core neighbors share its cluster.
                prop_assert!(labels[i] != NOISE);
                for &j in &hoods[i] {
                    prop_assert!(labels[j] != NOISE);
                    if is_core(j) {
                        prop_assert_eq!(labels[i], labels[j]);
                    }
                }
            } else if labels[i] == NOISE {
                // Noise has no core point in its neighborhood.
                prop_assert!(hoods[i].iter().all(|&j| !is_core(j)));
            } else {
                // A border point sits next to a core point of its cluster.
                prop_assert!(hoods[i].iter().any(|&j| is_core(j) && labels[j] == labels[i]));
            }
        }
    }

    #[test]
    fn prop_min_neighbors_one_has_no_noise(
        data in points(2),
        t in 0.1f64..1.5
    ) {
        let labels = Dbscan::new([t, t], 1).fit_predict(&data).unwrap();
        prop_assert!(labels.iter().all(|&l| l != NOISE));
    }
}

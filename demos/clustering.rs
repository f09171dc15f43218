//! DBSCAN with per-axis tolerances on a small 2D dataset.
//!
//! Run with `RUST_LOG=debug` to see the index and labeler traces.

use boxscan::{cluster_members, Dbscan, Metric, NOISE};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Three groups in (x, t) where the axes use different units.
    let data: Vec<[f64; 2]> = vec![
        // Group A (near origin)
        [0.0, 0.0],
        [0.1, 20.0],
        [0.2, 10.0],
        [-0.1, 10.0],
        // Group B (near (5, 500))
        [5.0, 500.0],
        [5.1, 490.0],
        [4.9, 510.0],
        [5.2, 520.0],
        // Group C (near (10, 0))
        [10.0, 0.0],
        [10.1, 10.0],
        [9.9, -10.0],
        [10.2, 20.0],
        // Stray point
        [7.0, 250.0],
    ];

    for metric in [Metric::Box, Metric::Ellipsoid] {
        let fit = match Dbscan::new([0.5, 30.0], 2).with_metric(metric).fit(&data) {
            Ok(fit) => fit,
            Err(e) => {
                eprintln!("clustering failed: {e}");
                std::process::exit(1);
            }
        };

        println!("=== DBSCAN {metric:?} (tolerance=[0.5, 30.0], min_neighbors=2) ===");
        for (i, label) in fit.labels.iter().enumerate() {
            let tag = if *label == NOISE {
                "NOISE".to_string()
            } else {
                format!("cluster {}", label)
            };
            println!("  point {:2} ({:5.1}, {:6.1}) => {}", i, data[i][0], data[i][1], tag);
        }
        for (id, members) in cluster_members(&fit.labels).iter().enumerate() {
            println!("  cluster {id}: {members:?}");
        }
        println!();
    }
}

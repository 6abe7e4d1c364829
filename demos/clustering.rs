//! DBSCAN on a small 3D dataset, swept over several radii.

use scanclust::{Dataset, Dbscan, Label};

fn main() -> scanclust::Result<()> {
    env_logger::init();

    // Three groups plus two stragglers.
    let data = Dataset::new(vec![
        // Group A
        vec![10.0, 2.0, 300.0],
        vec![12.0, 3.0, 320.0],
        vec![11.0, 2.0, 310.0],
        vec![13.0, 2.0, 305.0],
        // Group B
        vec![200.0, 10.0, 2000.0],
        vec![210.0, 11.0, 2050.0],
        vec![205.0, 12.0, 1980.0],
        vec![198.0, 10.0, 2010.0],
        // Straggler
        vec![400.0, 1.0, 50.0],
        // Group C
        vec![90.0, 20.0, 9000.0],
        vec![95.0, 21.0, 9100.0],
        vec![92.0, 19.0, 8950.0],
        vec![88.0, 22.0, 9020.0],
        // Straggler
        vec![20.0, 40.0, 15000.0],
    ])?;

    let model = Dbscan::new(100.0, 3);
    for (eps, labels) in model.sweep(&data, &[50.0, 200.0, 7000.0])? {
        println!("=== DBSCAN (eps={}, min_pts={}) ===", eps, model.min_pts());
        for s in labels.summaries(&data) {
            println!(
                "  cluster {:2}: {:2} points, centroid {:?}",
                s.id, s.size, s.centroid
            );
        }
        for i in labels.noise_indices() {
            println!("  noise point {:2}: {:?}", i, data.point(i));
        }
        debug_assert!(labels.as_slice().iter().all(|l| *l != Label::Unvisited));
    }

    Ok(())
}

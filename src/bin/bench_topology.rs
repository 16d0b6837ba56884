#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use klein_life::{Life, Topology};
use rand::RngCore;
use rand::SeedableRng;
use std::time::Instant;

fn bench(size: usize, topology: Topology, density: f64, iterations: u64) -> (f64, u64) {
    let mut life = Life::with_size(size, size, topology).expect("failed to allocate bench grid");
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED_1234_ABCD_EF01);
    let threshold = (u64::MAX as f64 * density) as u64;

    for j in 0..size {
        for i in 0..size {
            if rng.next_u64() <= threshold {
                life.set_cell(i, j, true);
            }
        }
    }

    let start = Instant::now();
    life.step_n(iterations);
    let duration = start.elapsed();

    let total_ms = duration.as_secs_f64() * 1000.0;
    (total_ms, life.population())
}

fn main() {
    let scales: &[(usize, u64)] = &[(64, 2000), (256, 200), (1024, 20)];

    println!(
        "{:<10} {:<8} {:>8} {:>12} {:>10} {:>10}",
        "Grid", "Edges", "Iters", "Total(ms)", "Avg(ms)", "Pop"
    );
    println!("{}", "-".repeat(63));

    for &(size, iters) in scales {
        for topology in Topology::ALL {
            let (total_ms, pop) = bench(size, topology, 0.35, iters);
            let avg_ms = total_ms / iters as f64;
            println!(
                "{:<10} {:<8} {:>8} {:>12.1} {:>10.4} {:>10}",
                format!("{}x{}", size, size),
                topology.to_string(),
                iters,
                total_ms,
                avg_ms,
                pop
            );
        }
    }
}

use std::collections::HashSet;

use klein_life::{Life, Topology};
use rand::RngCore;
use rand::SeedableRng;

const GLIDER: [(usize, usize); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

fn set_cells(life: &mut Life, cells: &[(usize, usize)]) {
    for &(i, j) in cells {
        life.set_cell(i, j, true);
    }
}

fn collect_live(life: &Life) -> HashSet<(usize, usize)> {
    let mut out = HashSet::new();
    life.for_each_live(|i, j| {
        out.insert((i, j));
    });
    out
}

fn assert_alive(life: &Life, cells: &[(usize, usize)]) {
    for &(i, j) in cells {
        assert!(life.get_cell(i, j), "expected alive at ({i},{j})");
    }
}

fn assert_dead(life: &Life, cells: &[(usize, usize)]) {
    for &(i, j) in cells {
        assert!(!life.get_cell(i, j), "expected dead at ({i},{j})");
    }
}

fn shifted(cells: &[(usize, usize)], di: usize, dj: usize) -> Vec<(usize, usize)> {
    cells.iter().map(|&(i, j)| (i + di, j + dj)).collect()
}

/// Neighbor lookup written with modular arithmetic rather than edge cases.
fn naive_neighbor(topology: Topology, w: i64, h: i64, i: i64, j: i64) -> Option<(usize, usize)> {
    let inside_i = (0..w).contains(&i);
    let inside_j = (0..h).contains(&j);
    match topology {
        Topology::Bounded => (inside_i && inside_j).then(|| (i as usize, j as usize)),
        Topology::Toroidal => Some((i.rem_euclid(w) as usize, j.rem_euclid(h) as usize)),
        Topology::Klein => {
            let row = j.rem_euclid(h);
            let row = if inside_i { row } else { h - 1 - row };
            Some((i.rem_euclid(w) as usize, row as usize))
        }
    }
}

fn step_naive(
    cells: &HashSet<(usize, usize)>,
    topology: Topology,
    w: usize,
    h: usize,
) -> HashSet<(usize, usize)> {
    let mut next = HashSet::new();
    for j in 0..h {
        for i in 0..w {
            let mut neighbors = 0;
            for dj in -1i64..=1 {
                for di in -1i64..=1 {
                    if di == 0 && dj == 0 {
                        continue;
                    }
                    let n = naive_neighbor(
                        topology,
                        w as i64,
                        h as i64,
                        i as i64 + di,
                        j as i64 + dj,
                    );
                    if n.is_some_and(|cell| cells.contains(&cell)) {
                        neighbors += 1;
                    }
                }
            }
            let alive = cells.contains(&(i, j));
            let next_alive = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            if next_alive {
                next.insert((i, j));
            }
        }
    }
    next
}

#[test]
fn blinker_oscillates_on_torus() {
    let mut life = Life::with_size(10, 10, Topology::Toroidal).unwrap();
    let vertical = [(5, 4), (5, 5), (5, 6)];
    let horizontal = [(4, 5), (5, 5), (6, 5)];
    set_cells(&mut life, &vertical);

    life.step();
    assert_eq!(collect_live(&life), horizontal.into_iter().collect());

    life.step();
    assert_eq!(collect_live(&life), vertical.into_iter().collect());
    assert_eq!(life.generation(), 2);
}

#[test]
fn blinker_wraps_across_torus_corner() {
    let mut life = Life::with_size(8, 6, Topology::Toroidal).unwrap();
    set_cells(&mut life, &[(7, 5), (0, 5), (1, 5)]);

    life.step();

    assert_alive(&life, &[(0, 4), (0, 5), (0, 0)]);
    assert_dead(&life, &[(7, 5), (1, 5)]);
    assert_eq!(life.population(), 3);
}

#[test]
fn block_is_stable_on_bounded_grid() {
    let mut life = Life::with_size(12, 12, Topology::Bounded).unwrap();
    let block = [(5, 5), (6, 5), (5, 6), (6, 6)];
    set_cells(&mut life, &block);

    for _ in 0..25 {
        life.step();
        assert_eq!(collect_live(&life), block.into_iter().collect());
    }
}

#[test]
fn block_in_bounded_corner_is_stable() {
    let mut life = Life::with_size(6, 6, Topology::Bounded).unwrap();
    let block = [(0, 0), (1, 0), (0, 1), (1, 1)];
    set_cells(&mut life, &block);

    life.step_n(10);

    assert_eq!(collect_live(&life), block.into_iter().collect());
}

#[test]
fn glider_moves_down_right_every_four_steps() {
    let mut life = Life::with_size(12, 12, Topology::Bounded).unwrap();
    set_cells(&mut life, &shifted(&GLIDER, 2, 2));

    life.step_n(4);

    assert_eq!(
        collect_live(&life),
        shifted(&GLIDER, 3, 3).into_iter().collect()
    );
}

#[test]
fn glider_dies_into_block_at_bounded_edge() {
    let mut life = Life::with_size(12, 12, Topology::Bounded).unwrap();
    set_cells(&mut life, &shifted(&GLIDER, 6, 6));

    life.step_n(60);

    assert_eq!(life.population(), 4);
    assert_eq!(
        collect_live(&life),
        HashSet::from([(10, 10), (11, 10), (10, 11), (11, 11)])
    );
}

#[test]
fn glider_survives_torus_lap() {
    let mut life = Life::with_size(12, 12, Topology::Toroidal).unwrap();
    let start = shifted(&GLIDER, 6, 6);
    set_cells(&mut life, &start);

    for _ in 0..48 {
        life.step();
        assert_eq!(life.population(), 5);
    }

    assert_eq!(collect_live(&life), start.into_iter().collect());
}

#[test]
fn glider_returns_mirrored_after_klein_lap() {
    let (w, h) = (12, 12);
    let mut life = Life::with_size(w, h, Topology::Klein).unwrap();
    let start = shifted(&GLIDER, 6, 6);
    set_cells(&mut life, &start);

    life.step_n(48);

    let mirrored: HashSet<_> = start.iter().map(|&(i, j)| (i, h - 1 - j)).collect();
    assert_eq!(collect_live(&life), mirrored);
}

#[test]
fn matches_naive_on_random_soups() {
    let (w, h) = (23, 17);
    for topology in Topology::ALL {
        for seed in [0xA1u64, 0xB2, 0xC3] {
            let mut life = Life::with_size(w, h, topology).unwrap();
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let threshold = (u64::MAX as f64 * 0.38) as u64;
            for j in 0..h {
                for i in 0..w {
                    if rng.next_u64() <= threshold {
                        life.set_cell(i, j, true);
                    }
                }
            }

            let mut naive = collect_live(&life);
            for generation in 0..12 {
                assert_eq!(
                    collect_live(&life),
                    naive,
                    "{topology} seed {seed:#x} diverged at generation {generation}"
                );
                life.step();
                naive = step_naive(&naive, topology, w, h);
            }
        }
    }
}

#[test]
fn klein_and_torus_disagree_only_across_column_edge() {
    // A blinker straddling the top/bottom seam evolves identically on both
    // surfaces; the Klein twist only shows up on the left/right seam.
    let seam_rows = [(4, 9), (4, 0), (4, 1)];
    let mut torus = Life::with_size(9, 10, Topology::Toroidal).unwrap();
    let mut klein = Life::with_size(9, 10, Topology::Klein).unwrap();
    set_cells(&mut torus, &seam_rows);
    set_cells(&mut klein, &seam_rows);
    torus.step_n(3);
    klein.step_n(3);
    assert_eq!(collect_live(&torus), collect_live(&klein));

    let seam_cols = [(8, 3), (0, 3), (1, 3)];
    let mut torus = Life::with_size(9, 10, Topology::Toroidal).unwrap();
    let mut klein = Life::with_size(9, 10, Topology::Klein).unwrap();
    set_cells(&mut torus, &seam_cols);
    set_cells(&mut klein, &seam_cols);
    torus.step();
    klein.step();
    assert_eq!(
        collect_live(&torus),
        HashSet::from([(0, 2), (0, 3), (0, 4)])
    );
    // Across the twisted seam the end cells no longer flank the middle one.
    assert!(klein.is_empty());
}

#[test]
fn release_consumes_engine() {
    let mut life = Life::with_size(4, 4, Topology::Bounded).unwrap();
    set_cells(&mut life, &[(1, 1)]);
    life.release();
}

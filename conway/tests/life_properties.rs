// life_properties.rs - Behavioural checks for the generation update

use conway::patterns::{BEACON, BLINKER, BLOCK, GLIDER, TOAD};
use conway::{Cell, Grid, Pattern, Simulator};

fn grid_with(pattern: &Pattern, size: usize, row: usize, col: usize) -> Grid {
    let mut grid = Grid::new(size).unwrap();
    grid.stamp(pattern, row, col).unwrap();
    grid
}

fn step_n(grid: &Grid, generations: usize) -> Grid {
    let simulator = Simulator::new();
    let mut current = grid.clone();
    for _ in 0..generations {
        current = simulator.step(&current);
    }
    current
}

/// Toroidal distance along one axis is at most one step.
fn adjacent_on_ring(a: usize, b: usize, n: usize) -> bool {
    let d = (a + n - b) % n;
    d == 0 || d == 1 || d == n - 1
}

#[test]
fn corner_counts_opposite_corner() {
    let mut grid = Grid::new(4).unwrap();
    grid.set(3, 3, Cell::Alive).unwrap();

    assert_eq!(grid.neighbor(0, 0, -1, -1), Cell::Alive);
    assert_eq!(Simulator::live_neighbors(&grid, 0, 0), 1);
}

#[test]
fn wraparound_is_exhaustive_on_a_small_torus() {
    const N: usize = 4;
    for live_row in 0..N {
        for live_col in 0..N {
            let mut grid = Grid::new(N).unwrap();
            grid.set(live_row, live_col, Cell::Alive).unwrap();

            for row in 0..N {
                for col in 0..N {
                    let is_self = row == live_row && col == live_col;
                    let expected = u8::from(
                        !is_self
                            && adjacent_on_ring(row, live_row, N)
                            && adjacent_on_ring(col, live_col, N),
                    );
                    assert_eq!(
                        Simulator::live_neighbors(&grid, row, col),
                        expected,
                        "cell ({row}, {col}) with only ({live_row}, {live_col}) alive"
                    );
                }
            }
        }
    }
}

#[test]
fn block_is_a_still_life() {
    let grid = grid_with(&BLOCK, 10, 4, 4);
    assert_eq!(Simulator::new().step(&grid), grid);
}

#[test]
fn block_straddling_the_corner_is_still() {
    let mut grid = Grid::new(10).unwrap();
    grid.stamp_wrapping(&BLOCK, 9, 9).unwrap();
    assert_eq!(Simulator::new().step(&grid), grid);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let grid = grid_with(&BLINKER, 10, 5, 4);

    let once = step_n(&grid, 1);
    let mut vertical = Grid::new(10).unwrap();
    for row in 4..=6 {
        vertical.set(row, 5, Cell::Alive).unwrap();
    }
    assert_eq!(once, vertical);
    assert_eq!(step_n(&grid, 2), grid);
}

#[test]
fn toad_and_beacon_have_period_two() {
    for pattern in [&TOAD, &BEACON] {
        let grid = grid_with(pattern, 12, 4, 4);
        assert_ne!(step_n(&grid, 1), grid, "{}", pattern.name);
        assert_eq!(step_n(&grid, 2), grid, "{}", pattern.name);
    }
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    let grid = grid_with(&GLIDER, 10, 1, 1);
    assert_eq!(step_n(&grid, 4), grid_with(&GLIDER, 10, 2, 2));
}

#[test]
fn glider_circles_the_torus() {
    // Crossing a 10x10 torus diagonally takes 10 translations of 4 generations
    let grid = grid_with(&GLIDER, 10, 1, 1);
    let mut expected = Grid::new(10).unwrap();
    expected.stamp_wrapping(&GLIDER, 8, 8).unwrap();

    assert_eq!(step_n(&grid, 28), expected);
    assert_eq!(step_n(&grid, 40), grid);
}

#[test]
fn step_is_deterministic_and_leaves_input_untouched() {
    let grid = Grid::random_seeded(30, 0.2, 17).unwrap();
    let copy = grid.clone();
    let simulator = Simulator::new();

    let first = simulator.step(&grid);
    let second = simulator.step(&copy);
    assert_eq!(first, second);
    assert_eq!(grid, copy);
}

/// Row-major update that writes into the grid it is still reading.
fn in_place_step(grid: &Grid) -> Grid {
    let mut scratch = grid.clone();
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let count = Simulator::live_neighbors(&scratch, row, col);
            let current = scratch.get(row, col).unwrap();
            scratch.set(row, col, Simulator::next_state(current, count)).unwrap();
        }
    }
    scratch
}

#[test]
fn update_never_observes_cells_from_the_same_generation() {
    let grid = grid_with(&BLINKER, 5, 2, 1);

    // Updating (1, 2) in place makes (1, 3) see three neighbours and spring
    // to life, which a simultaneous update never does
    let corrupted = in_place_step(&grid);
    assert_eq!(corrupted.get(1, 3).unwrap(), Cell::Alive);

    let next = Simulator::new().step(&grid);
    assert_ne!(next, corrupted);
    assert_eq!(next.get(1, 3).unwrap(), Cell::Dead);
    let vertical: Grid = "\
        .....\n\
        ..#..\n\
        ..#..\n\
        ..#..\n\
        .....\n".parse().unwrap();
    assert_eq!(next, vertical);
}

// simulator.rs - Generation update for Conway's Game of Life (B3/S23)
//
// Every generation is computed from an immutable snapshot of the previous
// one into a freshly allocated buffer, so no cell ever sees a neighbour's
// already-updated state.

use std::sync::Arc;

use crate::error::Result;
use crate::grid::{Cell, Grid};

/// The eight Moore neighbourhood offsets as `(d_row, d_col)`.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Stateless stepper: each call maps generation k to generation k + 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct Simulator;

impl Simulator {
    pub fn new() -> Self {
        Self
    }

    /// Applies the classical rule to one cell.
    pub fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
        match (cell, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,   // Survival
            (Cell::Dead, 3)                     => Cell::Alive,   // Birth
            _                                   => Cell::Dead,    // Death or stays dead
        }
    }

    /// Counts live cells among the eight toroidal neighbours of `(row, col)`.
    pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS.iter()
            .filter(|&&(d_row, d_col)| grid.neighbor(row, col, d_row, d_col).is_alive())
            .count() as u8
    }

    /// Computes the next generation on the calling thread.
    pub fn step(&self, grid: &Grid) -> Grid {
        let size = grid.size();
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            cells.extend(next_row(grid, row));
        }
        Grid::from_generation(size, cells)
    }

    /// Computes the next generation with one tokio task per row.
    ///
    /// All row tasks share a single read-only snapshot of `grid` and yield
    /// between cells; finished rows land in disjoint slices of a buffer
    /// allocated up front. Must be called from within a tokio runtime.
    pub async fn step_async(&self, grid: &Grid) -> Result<Grid> {
        let size = grid.size();
        let snapshot = Arc::new(grid.clone());

        // Spawn all row coroutines before awaiting any of them
        let mut handles = Vec::with_capacity(size);
        for row in 0..size {
            handles.push(tokio::spawn(process_row(row, Arc::clone(&snapshot))));
        }

        let mut cells = vec![Cell::Dead; size * size];
        for handle in handles {
            let (row, completed_row) = handle.await?;
            cells[row * size..(row + 1) * size].copy_from_slice(&completed_row);
        }
        Ok(Grid::from_generation(size, cells))
    }
}

fn next_row(grid: &Grid, row: usize) -> impl Iterator<Item = Cell> + '_ {
    (0..grid.size()).map(move |col| next_cell(grid, row, col))
}

fn next_cell(grid: &Grid, row: usize, col: usize) -> Cell {
    let current = grid.neighbor(row, col, 0, 0);
    Simulator::next_state(current, Simulator::live_neighbors(grid, row, col))
}

/// Row coroutine: returns `(row, completed_row)` so results can arrive in
/// any order.
async fn process_row(row: usize, current: Arc<Grid>) -> (usize, Vec<Cell>) {
    let size = current.size();
    let mut row_result = Vec::with_capacity(size);
    for col in 0..size {
        row_result.push(next_cell(&current, row, col));
        tokio::task::yield_now().await;   // Cooperative yielding
    }
    (row, row_result)
}

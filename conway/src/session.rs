// session.rs - Owns the current generation on behalf of a driver

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::{info, trace};

use crate::error::Result;
use crate::grid::Grid;
use crate::simulator::Simulator;

/// Number of recent generation hashes kept for cycle detection.
pub const HISTORY_LEN: usize = 10;

/// A run of generations.
///
/// The session holds the only copy of the current grid and swaps in each
/// successor the simulator returns. It remembers the hashes of the last
/// [`HISTORY_LEN`] generations so it can tell when the run has settled into
/// a still life or a short oscillator.
#[derive(Debug, Clone)]
pub struct Session {
    grid          : Grid,
    simulator     : Simulator,
    generation    : u64,
    grid_history  : [u64; HISTORY_LEN],   // Ring buffer of grid hashes
    history_count : usize,                // Total hashes ever recorded
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        let mut session = Self {
            grid,
            simulator: Simulator::new(),
            generation: 0,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
        };
        session.record(session.hash_grid());
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Starts over from `grid` at generation 0 with an empty history.
    pub fn reset(&mut self, grid: Grid) {
        *self = Self::new(grid);
    }

    /// Advances one generation. Returns `true` if the new grid repeats one
    /// of the recently seen generations.
    pub fn advance(&mut self) -> bool {
        let next = self.simulator.step(&self.grid);
        self.replace(next)
    }

    /// Like [`Session::advance`], computing the generation with row tasks.
    pub async fn advance_async(&mut self) -> Result<bool> {
        let next = self.simulator.step_async(&self.grid).await?;
        Ok(self.replace(next))
    }

    /// Advances up to `generations` times, stopping early once a cycle is
    /// found. Returns how many generations were actually advanced.
    pub fn run(&mut self, generations: u64) -> u64 {
        for advanced in 1..=generations {
            if self.advance() {
                return advanced;
            }
        }
        generations
    }

    fn replace(&mut self, next: Grid) -> bool {
        self.grid = next;
        self.generation += 1;
        trace!(generation = self.generation, population = self.grid.population(), "advanced");

        let cycling = self.check_for_cycle();
        if cycling {
            info!(generation = self.generation, "grid repeats a recent generation");
        }
        cycling
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        let filled = self.history_count.min(HISTORY_LEN);
        if self.grid_history[..filled].contains(&current_hash) {
            return true;
        }
        self.record(current_hash);
        false
    }

    fn record(&mut self, hash: u64) {
        self.grid_history[self.history_count % HISTORY_LEN] = hash;
        self.history_count += 1;
    }
}

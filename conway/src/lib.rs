//! Conway's Game of Life on a finite toroidal grid.
//!
//! [`Grid`] holds the NxN cell buffer, [`Simulator`] maps one generation to
//! the next under the B3/S23 rule, and [`Session`] keeps the current
//! generation for a driver that steps it at its own cadence.
//!
//! ```
//! use conway::{Grid, Simulator, patterns};
//!
//! let mut grid = Grid::new(10)?;
//! grid.stamp(&patterns::GLIDER, 1, 1)?;
//!
//! let simulator = Simulator::new();
//! let mut next = grid.clone();
//! for _ in 0..4 {
//!     next = simulator.step(&next);
//! }
//!
//! let mut moved = Grid::new(10)?;
//! moved.stamp(&patterns::GLIDER, 2, 2)?;
//! assert_eq!(next, moved);
//! # Ok::<(), conway::LifeError>(())
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod session;
pub mod simulator;

pub use config::{GridConfig, InitialState, SizePolicy};
pub use error::{LifeError, Result};
pub use grid::{Cell, Grid};
pub use patterns::Pattern;
pub use session::Session;
pub use simulator::Simulator;

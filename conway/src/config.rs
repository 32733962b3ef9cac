// config.rs - Grid construction settings

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::patterns;

pub const DEFAULT_SIZE: usize = 100;
pub const DEFAULT_MIN_SIZE: usize = 8;
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.2;

/// What to do when the requested size is not greater than `min_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePolicy {
    /// Fail with [`LifeError::InvalidSize`].
    #[default]
    Reject,
    /// Log a warning and use `default_size` instead.
    Fallback { default_size: usize },
}

/// How the first generation is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum InitialState {
    Random {
        #[serde(default = "default_alive_probability")]
        alive_probability: f64,
        #[serde(default)]
        seed: Option<u64>,
    },
    /// A named pattern from [`patterns::PATTERNS`] on an otherwise dead grid.
    Pattern {
        name: String,
        #[serde(default = "default_anchor")]
        row: usize,
        #[serde(default = "default_anchor")]
        col: usize,
        #[serde(default)]
        wrap: bool,
    },
}

impl Default for InitialState {
    fn default() -> Self {
        InitialState::Random { alive_probability: DEFAULT_ALIVE_PROBABILITY, seed: None }
    }
}

fn default_alive_probability() -> f64 {
    DEFAULT_ALIVE_PROBABILITY
}

fn default_anchor() -> usize {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub size        : usize,
    pub min_size    : usize,         // Sizes <= min_size are invalid
    pub size_policy : SizePolicy,
    pub initial     : InitialState,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            size_policy: SizePolicy::default(),
            initial: InitialState::default(),
        }
    }
}

impl GridConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies the size policy to the requested size.
    pub fn resolve_size(&self) -> Result<usize> {
        if self.size > self.min_size {
            return Ok(self.size);
        }
        match self.size_policy {
            SizePolicy::Reject => Err(LifeError::InvalidSize { size: self.size, min: self.min_size }),
            SizePolicy::Fallback { default_size } => {
                if default_size <= self.min_size {
                    return Err(LifeError::InvalidSize { size: default_size, min: self.min_size });
                }
                warn!(
                    requested = self.size,
                    min_size = self.min_size,
                    default_size,
                    "grid size too small, using default"
                );
                Ok(default_size)
            }
        }
    }

    /// Builds the first generation.
    pub fn build_grid(&self) -> Result<Grid> {
        let size = self.resolve_size()?;
        let grid = match &self.initial {
            InitialState::Random { alive_probability, seed: Some(seed) } => {
                Grid::random_seeded(size, *alive_probability, *seed)?
            }
            InitialState::Random { alive_probability, seed: None } => {
                Grid::random(size, *alive_probability, &mut rand::rng())?
            }
            InitialState::Pattern { name, row, col, wrap } => {
                let pattern = patterns::find(name)?;
                let mut grid = Grid::new(size)?;
                if *wrap {
                    grid.stamp_wrapping(pattern, *row, *col)?;
                } else {
                    grid.stamp(pattern, *row, *col)?;
                }
                grid
            }
        };
        debug!(size, population = grid.population(), "built initial grid");
        Ok(grid)
    }
}

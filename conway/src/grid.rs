// grid.rs - Toroidal cell buffer for Conway's Game of Life

use std::fmt::{self, Write as _};
use std::str::FromStr;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::error::{LifeError, Result};
use crate::patterns::Pattern;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// An NxN grid whose edges wrap around in both directions.
///
/// The buffer is row-major and always holds exactly `size * size` cells.
/// Direct access through [`Grid::get`] and [`Grid::set`] is bounds checked;
/// [`Grid::neighbor`] takes its offsets modulo `size` and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size  : usize,        // Side length, fixed for the grid's lifetime
    cells : Vec<Cell>,    // Row-major, size * size entries
}

impl Grid {
    /// Creates an all-dead grid. Only a zero size is rejected here; the
    /// configurable minimum lives in [`crate::config::GridConfig`].
    pub fn new(size: usize) -> Result<Self> {
        let len = Self::buffer_len(size)?;
        Ok(Self { size, cells: vec![Cell::Dead; len] })
    }

    /// Wraps an existing row-major buffer.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self> {
        let expected = Self::buffer_len(size)?;
        if cells.len() != expected {
            return Err(LifeError::BufferLength { expected, got: cells.len() });
        }
        Ok(Self { size, cells })
    }

    /// Successor buffer built by the simulator from a grid of the same size.
    pub(crate) fn from_generation(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Creates a grid where each cell is independently alive with
    /// probability `alive_probability`.
    pub fn random<R: Rng + ?Sized>(size: usize, alive_probability: f64, rng: &mut R) -> Result<Self> {
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(LifeError::InvalidProbability(alive_probability));
        }
        let mut grid = Self::new(size)?;
        for cell in &mut grid.cells {
            *cell = Cell::from(rng.random_bool(alive_probability));
        }
        Ok(grid)
    }

    /// Reproducible variant of [`Grid::random`].
    pub fn random_seeded(size: usize, alive_probability: f64, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(size, alive_probability, &mut rng)
    }

    fn buffer_len(size: usize) -> Result<usize> {
        if size == 0 {
            return Err(LifeError::InvalidSize { size, min: 0 });
        }
        size.checked_mul(size)
            .ok_or(LifeError::InvalidSize { size, min: 0 })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Full cell buffer in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates the grid one row slice at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.size)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        let index = self.index(row, col)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let index = self.index(row, col)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// State of the cell at `(row + d_row, col + d_col)`, both taken modulo
    /// the grid size.
    pub fn neighbor(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Cell {
        let r = wrap(row, d_row, self.size);
        let c = wrap(col, d_col, self.size);
        self.cells[r * self.size + c]
    }

    /// Writes `pattern` with its top-left corner at `(row, col)`, overwriting
    /// the pattern's whole bounding box. Fails instead of writing anything if
    /// the box would run past the grid edge.
    pub fn stamp(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<()> {
        let fits = |start: usize, extent: usize| {
            start.checked_add(extent).is_some_and(|end| end <= self.size)
        };
        if !fits(row, pattern.height) || !fits(col, pattern.width) {
            return Err(LifeError::PatternOutOfBounds {
                pattern: pattern.name,
                row,
                col,
                size: self.size,
            });
        }
        self.write_pattern(pattern, |r, c| (row + r, col + c));
        Ok(())
    }

    /// Toroidal variant of [`Grid::stamp`]: cells past an edge wrap to the
    /// opposite side. Only fails when the pattern is larger than the grid.
    pub fn stamp_wrapping(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<()> {
        let size = self.size;
        if pattern.height > size || pattern.width > size {
            return Err(LifeError::PatternOutOfBounds { pattern: pattern.name, row, col, size });
        }
        let (row, col) = (row % size, col % size);
        self.write_pattern(pattern, |r, c| ((row + r) % size, (col + c) % size));
        Ok(())
    }

    fn write_pattern(&mut self, pattern: &Pattern, place: impl Fn(usize, usize) -> (usize, usize)) {
        // Clear the bounding box first, then light the live cells
        for r in 0..pattern.height {
            for c in 0..pattern.width {
                let (gr, gc) = place(r, c);
                self.cells[gr * self.size + gc] = Cell::Dead;
            }
        }
        for &(r, c) in pattern.cells {
            debug_assert!(r < pattern.height && c < pattern.width);
            let (gr, gc) = place(r, c);
            self.cells[gr * self.size + gc] = Cell::Alive;
        }
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size || col >= self.size {
            return Err(LifeError::IndexOutOfBounds { row, col, size: self.size });
        }
        Ok(row * self.size + col)
    }
}

fn wrap(index: usize, offset: isize, size: usize) -> usize {
    let shift = offset.rem_euclid(size as isize) as usize;
    (index % size + shift) % size
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_char(if cell.is_alive() { '#' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Parses the text form written by `Display`: one line per row, `#` or `O`
/// for a live cell, `.` for a dead one. Blank lines are skipped and the
/// result must be square.
impl FromStr for Grid {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<(usize, &str)> = s.lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        let size = lines.len();
        if size == 0 {
            return Err(LifeError::Parse { line: 0, message: "empty grid".to_string() });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (line_no, line) in lines {
            let width = line.chars().count();
            if width != size {
                return Err(LifeError::Parse {
                    line: line_no,
                    message: format!("expected {size} cells, found {width}"),
                });
            }
            for ch in line.chars() {
                let cell = match ch {
                    '#' | 'O' => Cell::Alive,
                    '.'       => Cell::Dead,
                    other     => {
                        return Err(LifeError::Parse {
                            line: line_no,
                            message: format!("unexpected character '{other}'"),
                        });
                    }
                };
                cells.push(cell);
            }
        }
        Self::from_cells(size, cells)
    }
}

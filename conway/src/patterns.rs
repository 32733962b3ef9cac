// patterns.rs - Named seed patterns, stamped into a Grid with Grid::stamp

use crate::error::{LifeError, Result};

/// A small fixed sub-grid. `cells` lists the live cells as `(row, col)`
/// offsets from the top-left anchor; every other cell inside the
/// `height` x `width` box is dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name   : &'static str,
    pub height : usize,
    pub width  : usize,
    pub cells  : &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    height: 3,
    width: 3,
    cells: &[(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    height: 1,
    width: 3,
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    height: 2,
    width: 2,
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    height: 2,
    width: 4,
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    height: 4,
    width: 4,
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const PULSAR: Pattern = Pattern {
    name: "pulsar",
    height: 13,
    width: 13,
    cells: &[
        // Top half
        (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
        (2, 0), (2, 5), (2, 7), (2, 12),
        (3, 0), (3, 5), (3, 7), (3, 12),
        (4, 0), (4, 5), (4, 7), (4, 12),
        (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
        // Bottom half (mirrored)
        (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
        (8, 0), (8, 5), (8, 7), (8, 12),
        (9, 0), (9, 5), (9, 7), (9, 12),
        (10, 0), (10, 5), (10, 7), (10, 12),
        (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
    ],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    height: 3,
    width: 3,
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "gosper-glider-gun",
    height: 9,
    width: 36,
    cells: &[
        (4, 0), (4, 1), (5, 0), (5, 1),
        (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
        (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
        (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
        (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
        (2, 34), (3, 34), (2, 35), (3, 35),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    BLINKER,
    BLOCK,
    TOAD,
    BEACON,
    PULSAR,
    R_PENTOMINO,
    GOSPER_GLIDER_GUN,
];

/// Looks a pattern up by name, ignoring case and any `-`, `_` or spaces,
/// so "R-pentomino", "r_pentomino" and "rpentomino" all match.
pub fn find(name: &str) -> Result<&'static Pattern> {
    let wanted = normalize(name);
    PATTERNS.iter()
        .find(|pattern| normalize(pattern.name) == wanted)
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|ch| !matches!(ch, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_stay_inside_their_box() {
        for pattern in PATTERNS {
            for &(r, c) in pattern.cells {
                assert!(r < pattern.height && c < pattern.width, "{} has ({r}, {c}) outside its box", pattern.name);
            }
        }
    }

    #[test]
    fn cells_are_unique() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{} repeats a cell", pattern.name);
        }
    }

    #[test]
    fn known_populations() {
        assert_eq!(GLIDER.cells.len(), 5);
        assert_eq!(PULSAR.cells.len(), 48);
        assert_eq!(GOSPER_GLIDER_GUN.cells.len(), 36);
    }

    #[test]
    fn find_is_lenient_about_spelling() {
        assert_eq!(find("Glider").unwrap().name, "glider");
        assert_eq!(find("R_Pentomino").unwrap().name, "r-pentomino");
        assert_eq!(find("Gosper Glider Gun").unwrap().name, "gosper-glider-gun");
    }

    #[test]
    fn find_unknown_pattern() {
        assert!(matches!(find("spaceship"), Err(LifeError::UnknownPattern(name)) if name == "spaceship"));
    }
}

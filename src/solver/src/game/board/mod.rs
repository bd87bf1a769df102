use crate::error::GameError;
use crate::game::directions;
use core::fmt;
use serde::{Deserialize, Serialize};

pub mod candidate;
pub mod path;

pub const DEFAULT_BOARD_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn id(&self) -> String {
        format!("{}_{}", self.row, self.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square letter grid, stored row-major. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: usize,
    letters: Vec<char>,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.letters.chunks(self.size.max(1)) {
            for letter in row {
                write!(f, " {} ", letter.to_ascii_uppercase())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    /// Builds a `size` x `size` board from a flattened, row-major letter
    /// sequence. ASCII letters are lowercased; one input char is one tile.
    pub fn from_letters(letters: &str, size: usize) -> Result<Self, GameError> {
        let letters: Vec<char> = letters.chars().map(|c| c.to_ascii_lowercase()).collect();
        let expected = size * size;
        if letters.len() != expected {
            return Err(GameError::InvalidBoardSize {
                expected,
                actual: letters.len(),
            });
        }

        Ok(Self { size, letters })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> String {
        self.letters.iter().collect()
    }

    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Letter on `cell`; `cell` must come from this board.
    pub fn letter_at(&self, cell: Cell) -> char {
        self.letters[cell.row * self.size + cell.col]
    }

    pub fn get(&self, cell: Cell) -> Option<char> {
        if self.is_in_bounds(cell.row, cell.col) {
            Some(self.letter_at(cell))
        } else {
            None
        }
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Cell::new(row, col)))
    }

    /// The in-bounds 8-neighbourhood of `cell`, in `DIRECTIONS` order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        directions::DIRECTIONS
            .iter()
            .filter_map(move |&(dr, dc)| {
                let row = cell.row.checked_add_signed(dr)?;
                let col = cell.col.checked_add_signed(dc)?;
                if self.is_in_bounds(row, col) {
                    Some(Cell::new(row, col))
                } else {
                    None
                }
            })
    }
}

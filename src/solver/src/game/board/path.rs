use serde::{Deserialize, Serialize};

use super::Cell;

/// One tile of a traced word, with the geometry measured against the step
/// before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub cell: Cell,
    pub letter: char,
    pub is_diagonal: bool,
    /// Other untraced neighbours of the previous tile showing the same letter.
    pub ambiguity: u32,
    /// Position of this tile among the identical-letter neighbours.
    pub ambiguity_rank: u32,
}

impl PathStep {
    /// First tile of a path: nothing to compare against.
    pub fn start(cell: Cell, letter: char) -> Self {
        Self {
            cell,
            letter,
            is_diagonal: false,
            ambiguity: 0,
            ambiguity_rank: 0,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.ambiguity > 0
    }
}

pub fn spell(path: &[PathStep]) -> String {
    path.iter().map(|step| step.letter).collect()
}

/// Length of the common prefix of two paths, compared by cell.
pub fn shared_prefix_len(a: &[PathStep], b: &[PathStep]) -> usize {
    a.iter()
        .zip(b.iter())
        .take_while(|(x, y)| x.cell == y.cell)
        .count()
}

pub fn contains_cell(path: &[PathStep], cell: Cell) -> bool {
    path.iter().any(|step| step.cell == cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(cells: &[(usize, usize)]) -> Vec<PathStep> {
        cells
            .iter()
            .map(|&(r, c)| PathStep::start(Cell::new(r, c), 'x'))
            .collect()
    }

    #[test]
    fn test_shared_prefix_by_cell() {
        let a = steps(&[(0, 0), (0, 1), (0, 2), (1, 2)]);
        let b = steps(&[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(shared_prefix_len(&a, &b), 2);
        assert_eq!(shared_prefix_len(&a, &a), 4);
        assert_eq!(shared_prefix_len(&a, &[]), 0);
    }

    #[test]
    fn test_same_letters_different_cells_do_not_share() {
        let a = vec![PathStep::start(Cell::new(0, 0), 'a')];
        let b = vec![PathStep::start(Cell::new(1, 1), 'a')];
        assert_eq!(shared_prefix_len(&a, &b), 0);
    }

    #[test]
    fn test_spell_and_contains() {
        let path = vec![
            PathStep::start(Cell::new(0, 0), 'c'),
            PathStep::start(Cell::new(0, 1), 'a'),
            PathStep::start(Cell::new(0, 2), 't'),
        ];
        assert_eq!(spell(&path), "cat");
        assert!(contains_cell(&path, Cell::new(0, 1)));
        assert!(!contains_cell(&path, Cell::new(1, 1)));
    }
}

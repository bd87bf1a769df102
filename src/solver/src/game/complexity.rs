//! Cost model for how hard a path is to trace by hand.
//!
//! Every word starts at a base cost. Each step after the first adds a
//! penalty for moving diagonally and a penalty per identical-letter tile the
//! player could slide onto by mistake.

use serde::{Deserialize, Serialize};

use super::board::path::{contains_cell, PathStep};
use super::board::{Board, Cell};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityWeights {
    pub base: u32,
    pub diagonal: u32,
    pub ambiguity: u32,
}

impl Default for ComplexityWeights {
    fn default() -> Self {
        Self {
            base: 50,
            diagonal: 10,
            ambiguity: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ambiguity {
    pub count: u32,
    pub rank: u32,
}

pub fn is_diagonal_move(from: Cell, to: Cell) -> bool {
    from.row != to.row && from.col != to.col
}

/// Looks around the last tile of `path` for untraced tiles bearing the same
/// letter as `next`. `next` itself is not counted against itself.
pub fn measure_ambiguity(board: &Board, path: &[PathStep], next: Cell) -> Ambiguity {
    let Some(prev) = path.last() else {
        return Ambiguity::default();
    };
    let letter = board.letter_at(next);
    let mut matches: u32 = 0;
    let mut rank: u32 = 0;
    for cell in board.neighbors(prev.cell) {
        if cell == next {
            rank = matches;
            matches += 1;
        } else if board.letter_at(cell) == letter && !contains_cell(path, cell) {
            matches += 1;
        }
    }
    Ambiguity {
        count: matches.saturating_sub(1),
        rank,
    }
}

/// The step for moving from the end of `path` onto `next`.
pub fn next_step(board: &Board, path: &[PathStep], next: Cell) -> PathStep {
    let letter = board.letter_at(next);
    match path.last() {
        None => PathStep::start(next, letter),
        Some(prev) => {
            let ambiguity = measure_ambiguity(board, path, next);
            PathStep {
                cell: next,
                letter,
                is_diagonal: is_diagonal_move(prev.cell, next),
                ambiguity: ambiguity.count,
                ambiguity_rank: ambiguity.rank,
            }
        }
    }
}

pub fn diagonal_contribution(step: &PathStep, weights: &ComplexityWeights) -> u32 {
    if step.is_diagonal {
        weights.diagonal
    } else {
        0
    }
}

pub fn ambiguity_contribution(step: &PathStep, weights: &ComplexityWeights) -> u32 {
    step.ambiguity.saturating_mul(weights.ambiguity)
}

pub fn step_cost(step: &PathStep, weights: &ComplexityWeights) -> u32 {
    diagonal_contribution(step, weights).saturating_add(ambiguity_contribution(step, weights))
}

/// Base cost plus the cost of every step after the first. Saturates at
/// `u32::MAX` instead of overflowing.
pub fn path_complexity(path: &[PathStep], weights: &ComplexityWeights) -> u32 {
    path.iter()
        .skip(1)
        .map(|step| step_cost(step, weights))
        .fold(weights.base, u32::saturating_add)
}

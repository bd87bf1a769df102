use core::fmt::Display;

use super::path::{self, PathStep};
use super::Cell;

/// A dictionary word found on the board, with the path that spells it and
/// its cost/reward bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub word: String,
    pub path: Vec<PathStep>,
    pub complexity: u32,
    pub reward: u32,
    pub chosen: bool,
    // always < complexity (unless complexity is 0)
    complexity_reduction: u32,
}

impl Candidate {
    pub fn new(path: Vec<PathStep>, complexity: u32, reward: u32) -> Self {
        Self {
            word: path::spell(&path),
            path,
            complexity,
            reward,
            chosen: false,
            complexity_reduction: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn start(&self) -> Option<Cell> {
        self.path.first().map(|step| step.cell)
    }

    pub fn complexity_reduction(&self) -> u32 {
        self.complexity_reduction
    }

    pub fn net_cost(&self) -> u32 {
        self.complexity - self.complexity_reduction
    }

    /// Raises the reduction to `bonus` if that is larger, leaving a net cost
    /// of at least one.
    pub fn relax(&mut self, bonus: u32) {
        let raised = self.complexity_reduction.max(bonus);
        self.complexity_reduction = raised.min(self.complexity.saturating_sub(1));
    }

    pub fn shared_prefix_len(&self, other: &Candidate) -> usize {
        path::shared_prefix_len(&self.path, &other.path)
    }

    pub fn ratio(&self) -> f64 {
        self.reward as f64 / self.net_cost() as f64
    }

    /// Exact `reward / net_cost` comparison without going through floats.
    pub fn has_better_ratio_than(&self, other: &Candidate) -> bool {
        u64::from(self.reward) * u64::from(other.net_cost())
            > u64::from(other.reward) * u64::from(self.net_cost())
    }

    pub fn diagonal_moves(&self) -> usize {
        self.path.iter().filter(|step| step.is_diagonal).count()
    }

    pub fn ambiguous_steps(&self) -> usize {
        self.path.iter().filter(|step| step.is_ambiguous()).count()
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", &self.word))
    }
}

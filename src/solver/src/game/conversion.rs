use super::board::candidate::Candidate;
use super::board::path::PathStep;
use super::report::{Solution, WordListStats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableStep {
    pub letter: char,
    pub row: usize,
    pub col: usize,
    pub is_diagonal: bool,
    pub ambiguity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableCandidate {
    pub word: String,
    pub path: Vec<SerializableStep>,
    pub complexity: u32,
    pub complexity_reduction: u32,
    pub reward: u32,
    pub chosen: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableSolution {
    pub board: String,
    pub size: usize,
    pub chosen: Vec<SerializableCandidate>,
    pub unchosen: Vec<SerializableCandidate>,
    pub all_stats: WordListStats,
    pub chosen_stats: WordListStats,
    pub remaining_budget: i64,
}

impl From<&PathStep> for SerializableStep {
    fn from(step: &PathStep) -> Self {
        Self {
            letter: step.letter,
            row: step.cell.row,
            col: step.cell.col,
            is_diagonal: step.is_diagonal,
            ambiguity: step.ambiguity,
        }
    }
}

impl From<&Candidate> for SerializableCandidate {
    fn from(candidate: &Candidate) -> Self {
        Self {
            word: candidate.word.clone(),
            path: candidate.path.iter().map(SerializableStep::from).collect(),
            complexity: candidate.complexity,
            complexity_reduction: candidate.complexity_reduction(),
            reward: candidate.reward,
            chosen: candidate.chosen,
        }
    }
}

impl From<&Solution> for SerializableSolution {
    fn from(solution: &Solution) -> Self {
        Self {
            board: solution.board().letters(),
            size: solution.board().size(),
            chosen: solution.chosen().map(SerializableCandidate::from).collect(),
            unchosen: solution
                .unchosen_by_length()
                .into_iter()
                .map(SerializableCandidate::from)
                .collect(),
            all_stats: solution.all_stats(),
            chosen_stats: solution.chosen_stats(),
            remaining_budget: solution.remaining_budget(),
        }
    }
}

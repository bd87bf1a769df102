use serde::{Deserialize, Serialize};

use super::board::candidate::Candidate;
use super::board::Board;
use super::selector::Selection;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListStats {
    pub num_words: usize,
    pub total_reward: u64,
    pub total_complexity: u64,
}

impl WordListStats {
    pub fn from_candidates<'a>(candidates: impl IntoIterator<Item = &'a Candidate>) -> Self {
        candidates
            .into_iter()
            .fold(WordListStats::default(), |mut stats, candidate| {
                stats.num_words += 1;
                stats.total_reward += u64::from(candidate.reward);
                stats.total_complexity += u64::from(candidate.complexity);
                stats
            })
    }
}

/// How far a player got through the chosen list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub reward: u64,
    /// Sum of shared leading letters between consecutive words.
    pub similarity: u64,
    pub words: usize,
}

/// Everything one solve produced: the board, every candidate in discovery
/// order, and which of them were chosen.
#[derive(Debug, Clone)]
pub struct Solution {
    board: Board,
    candidates: Vec<Candidate>,
    selection: Selection,
}

impl Solution {
    pub fn new(board: Board, candidates: Vec<Candidate>, selection: Selection) -> Self {
        Self {
            board,
            candidates,
            selection,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn remaining_budget(&self) -> i64 {
        self.selection.remaining_budget
    }

    /// Chosen words in the order they should be entered.
    pub fn chosen(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.selection.chosen.iter().map(move |&idx| &self.candidates[idx])
    }

    /// Words left out, longest first; equal lengths keep discovery order.
    pub fn unchosen_by_length(&self) -> Vec<&Candidate> {
        let mut rest: Vec<&Candidate> = self.candidates.iter().filter(|c| !c.chosen).collect();
        rest.sort_by(|a, b| b.len().cmp(&a.len()));
        rest
    }

    /// Runs of consecutive chosen words that start on the same tile.
    pub fn chosen_groups(&self) -> Vec<Vec<&Candidate>> {
        let mut groups: Vec<Vec<&Candidate>> = Vec::new();
        for candidate in self.chosen() {
            match groups.last_mut() {
                Some(group) if group[0].start() == candidate.start() => group.push(candidate),
                _ => groups.push(vec![candidate]),
            }
        }
        groups
    }

    pub fn all_stats(&self) -> WordListStats {
        WordListStats::from_candidates(&self.candidates)
    }

    pub fn chosen_stats(&self) -> WordListStats {
        WordListStats::from_candidates(self.chosen())
    }

    /// Scores the entry list up to and including `last_reached`, the last
    /// word the player got to. A word that is not on the list scores the
    /// whole list.
    pub fn progress_through(&self, last_reached: &str) -> Progress {
        let mut progress = Progress::default();
        let mut previous = "";
        for candidate in self.chosen() {
            progress.reward += u64::from(candidate.reward);
            progress.similarity += shared_letters(&candidate.word, previous) as u64;
            progress.words += 1;
            if candidate.word == last_reached {
                break;
            }
            previous = &candidate.word;
        }
        progress
    }
}

fn shared_letters(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

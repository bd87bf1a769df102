use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::candidate::Candidate;
use super::board::path::shared_prefix_len;
use super::scoring::SimilarityTable;
use super::search::MIN_WORD_LENGTH;
use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Chosen candidate indices in entry order. That is discovery order for
    /// every strategy except `Strategy::Length`, which lists longest first.
    pub chosen: Vec<usize>,
    /// The same indices in the order they were picked.
    pub picks: Vec<usize>,
    /// Budget left after the last pick; zero or negative once exhausted.
    /// The baseline strategies ignore the budget and simply report it minus
    /// the full complexity of what they chose.
    pub remaining_budget: i64,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }
}

/// How the words to enter are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Strategy {
    /// Best reward per unit of net complexity, within the budget.
    #[default]
    Greedy,
    /// Every word, longest first.
    Length,
    /// Every word of at least `min_length` letters, in discovery order.
    Size { min_length: usize },
    /// Longest words until `percent` of the board's total reward is covered,
    /// then listed in discovery order.
    Goal { percent: u32 },
}

pub const DEFAULT_GOAL_PERCENT: u32 = 25;

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::Length => write!(f, "length"),
            Strategy::Size { min_length } => write!(f, "size:{}", min_length),
            Strategy::Goal { percent } => write!(f, "goal:{}", percent),
        }
    }
}

impl FromStr for Strategy {
    type Err = GameError;

    /// `greedy`, `length`, `size[:min_length]` or `goal[:percent]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let (name, arg) = match lowered.split_once(':') {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (lowered.as_str(), None),
        };
        let bad_arg = |arg: &str| {
            GameError::InvalidConfig(format!("bad argument '{}' for strategy {}", arg, name))
        };

        match (name, arg) {
            ("greedy", None) => Ok(Strategy::Greedy),
            ("length", None) => Ok(Strategy::Length),
            ("size", None) => Ok(Strategy::Size {
                min_length: MIN_WORD_LENGTH,
            }),
            ("size", Some(arg)) => arg
                .parse()
                .map(|min_length| Strategy::Size { min_length })
                .map_err(|_| bad_arg(arg)),
            ("goal", None) => Ok(Strategy::Goal {
                percent: DEFAULT_GOAL_PERCENT,
            }),
            ("goal", Some(arg)) => arg
                .parse()
                .map(|percent| Strategy::Goal { percent })
                .map_err(|_| bad_arg(arg)),
            _ => Err(GameError::InvalidConfig(format!("unknown strategy '{}'", s))),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.to_string()
    }
}

/// Picks the words to enter under a complexity budget.
///
/// The greedy strategy takes, each round, the unchosen candidate with the best
/// reward to net cost ratio, charges its net cost to the budget, then lowers
/// the cost of every other candidate that starts along the same tiles. Words
/// that share a long prefix with something already chosen become nearly
/// free. The other strategies are simple orderings kept as baselines.
pub struct Selector<'a> {
    budget: i64,
    similarity: &'a SimilarityTable,
    strategy: Strategy,
}

impl<'a> Selector<'a> {
    pub fn new(budget: i64, similarity: &'a SimilarityTable) -> Self {
        Self {
            budget,
            similarity,
            strategy: Strategy::Greedy,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Expects candidates fresh from the search: nothing chosen yet.
    pub fn select(&self, candidates: &mut [Candidate]) -> Selection {
        match self.strategy {
            Strategy::Greedy => self.select_greedy(candidates),
            Strategy::Length => {
                let order = longest_first(candidates);
                self.finish(candidates, order, false)
            }
            Strategy::Size { min_length } => {
                let min_length = min_length.max(MIN_WORD_LENGTH);
                let order = (0..candidates.len())
                    .filter(|&idx| candidates[idx].len() >= min_length)
                    .collect();
                self.finish(candidates, order, true)
            }
            Strategy::Goal { percent } => {
                let order = reach_goal(candidates, percent);
                self.finish(candidates, order, true)
            }
        }
    }

    fn select_greedy(&self, candidates: &mut [Candidate]) -> Selection {
        let mut budget = self.budget;
        let mut picks = Vec::new();

        while budget > 0 {
            let Some(best) = best_candidate(candidates) else {
                debug!("No candidates left with {} budget remaining", budget);
                break;
            };

            let cost = candidates[best].net_cost();
            candidates[best].chosen = true;
            budget -= i64::from(cost);
            debug!(
                word = %candidates[best].word,
                cost,
                reward = candidates[best].reward,
                remaining = budget,
                "Picked candidate"
            );
            picks.push(best);
            self.relax(candidates, best);
        }

        let mut chosen = picks.clone();
        chosen.sort_unstable();

        Selection {
            chosen,
            picks,
            remaining_budget: budget,
        }
    }

    fn relax(&self, candidates: &mut [Candidate], picked: usize) {
        let picked_path = candidates[picked].path.clone();
        for (idx, candidate) in candidates.iter_mut().enumerate() {
            if idx == picked {
                continue;
            }
            let shared = shared_prefix_len(&candidate.path, &picked_path);
            candidate.relax(self.similarity.bonus(shared));
        }
    }

    fn finish(
        &self,
        candidates: &mut [Candidate],
        picks: Vec<usize>,
        discovery_order: bool,
    ) -> Selection {
        let mut budget = self.budget;
        for &idx in &picks {
            candidates[idx].chosen = true;
            budget -= i64::from(candidates[idx].complexity);
        }
        debug!(
            strategy = %self.strategy,
            words = picks.len(),
            remaining = budget,
            "Baseline selection"
        );

        let mut chosen = picks.clone();
        if discovery_order {
            chosen.sort_unstable();
        }
        Selection {
            chosen,
            picks,
            remaining_budget: budget,
        }
    }
}

/// Highest reward/net-cost among unchosen candidates with a non-zero reward.
/// Ties keep the earliest candidate.
fn best_candidate(candidates: &[Candidate]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        if candidate.chosen || candidate.reward == 0 {
            continue;
        }
        match best {
            Some(current) if !candidate.has_better_ratio_than(&candidates[current]) => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Indices sorted by word length, longest first; ties keep discovery order.
fn longest_first(candidates: &[Candidate]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| candidates[b].len().cmp(&candidates[a].len()));
    order
}

/// Takes longest words until their reward reaches `percent` of the total.
fn reach_goal(candidates: &[Candidate], percent: u32) -> Vec<usize> {
    let total: u64 = candidates.iter().map(|c| u64::from(c.reward)).sum();
    let goal = total * u64::from(percent) / 100;

    let mut points = 0;
    let mut picks = Vec::new();
    for idx in longest_first(candidates) {
        if points >= goal {
            break;
        }
        points += u64::from(candidates[idx].reward);
        picks.push(idx);
    }
    picks
}

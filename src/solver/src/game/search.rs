use tracing::debug;

use super::board::candidate::Candidate;
use super::board::path::PathStep;
use super::board::{Board, Cell};
use super::complexity::{self, ComplexityWeights};
use super::scoring::RewardTable;
use super::trie::Trie;

/// Shortest word the search will ever report.
pub const MIN_WORD_LENGTH: usize = 3;

/// Backtracking enumeration of every dictionary word on a board.
///
/// The lexicon's terminal flags are consumed as words are found, so each
/// word is reported once, for the first path that spells it. Callers that
/// need the lexicon again should search a clone.
pub struct PathSearch<'a> {
    board: &'a Board,
    weights: ComplexityWeights,
    rewards: &'a RewardTable,
    min_word_length: usize,
    path: Vec<PathStep>,
    visited: Vec<bool>,
    candidates: Vec<Candidate>,
}

impl<'a> PathSearch<'a> {
    /// `min_word_length` below 3 is raised to 3.
    pub fn new(
        board: &'a Board,
        weights: ComplexityWeights,
        rewards: &'a RewardTable,
        min_word_length: usize,
    ) -> Self {
        let cells = board.size() * board.size();
        Self {
            board,
            weights,
            rewards,
            min_word_length: min_word_length.max(MIN_WORD_LENGTH),
            path: Vec::with_capacity(cells),
            visited: vec![false; cells],
            candidates: Vec::new(),
        }
    }

    /// Searches from every cell in row-major order; candidates come back in
    /// discovery order.
    pub fn run(mut self, lexicon: &mut Trie) -> Vec<Candidate> {
        let board = self.board;
        for start in board.cells() {
            let Ok(node) = lexicon.child_for_mut(board.letter_at(start)) else {
                continue;
            };
            let found_before = self.candidates.len();
            self.push(PathStep::start(start, board.letter_at(start)));
            self.extend(node, self.weights.base);
            self.pop();
            debug!(
                "Search from {} found {} words",
                start,
                self.candidates.len() - found_before
            );
        }
        self.candidates
    }

    fn extend(&mut self, node: &mut Trie, complexity: u32) {
        if node.is_terminal_word() && self.path.len() >= self.min_word_length {
            let reward = self.rewards.reward(self.path.len());
            self.candidates
                .push(Candidate::new(self.path.clone(), complexity, reward));
            node.clear_terminal();
        }

        let board = self.board;
        let Some(last) = self.path.last().map(|step| step.cell) else {
            return;
        };
        for next in board.neighbors(last) {
            if self.is_visited(next) {
                continue;
            }
            // no word continues this way
            let Ok(child) = node.child_for_mut(board.letter_at(next)) else {
                continue;
            };
            let step = complexity::next_step(board, &self.path, next);
            let cost = complexity::step_cost(&step, &self.weights);
            self.push(step);
            self.extend(child, complexity.saturating_add(cost));
            self.pop();
        }
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.board.size() + cell.col
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.visited[self.index(cell)]
    }

    fn push(&mut self, step: PathStep) {
        let idx = self.index(step.cell);
        self.visited[idx] = true;
        self.path.push(step);
    }

    fn pop(&mut self) {
        if let Some(step) = self.path.pop() {
            let idx = self.index(step.cell);
            self.visited[idx] = false;
        }
    }
}

/// Convenience wrapper around [`PathSearch`].
pub fn find_candidates(
    board: &Board,
    lexicon: &mut Trie,
    weights: ComplexityWeights,
    rewards: &RewardTable,
    min_word_length: usize,
) -> Vec<Candidate> {
    PathSearch::new(board, weights, rewards, min_word_length).run(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::path::shared_prefix_len;
    use crate::test_utils::test_utils;
    use std::collections::HashSet;

    fn search(board: &Board, words: Vec<&str>) -> Vec<Candidate> {
        let mut lexicon = Trie::from(words);
        find_candidates(
            board,
            &mut lexicon,
            ComplexityWeights::default(),
            &RewardTable::standard(),
            3,
        )
    }

    fn words(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.word.as_str()).collect()
    }

    #[test]
    fn test_reference_board_scenario() {
        // O A T R
        // I H P S
        // H T N R
        // E N E I
        let board = test_utils::create_test_board();
        let candidates = search(&board, vec!["hat", "rip", "pine", "shirt"]);
        // only "hat" can be traced on this board
        assert_eq!(words(&candidates), vec!["hat"]);
        let hat = &candidates[0];
        let cells: Vec<Cell> = hat.path.iter().map(|s| s.cell).collect();
        assert_eq!(cells, vec![Cell::new(1, 1), Cell::new(0, 1), Cell::new(0, 2)]);
    }

    #[test]
    fn test_single_straight_word() {
        let board = Board::from_letters("catxyzqrs", 3).unwrap();
        let candidates = search(&board, vec!["cat"]);
        assert_eq!(candidates.len(), 1);
        let cat = &candidates[0];
        assert_eq!(cat.len(), 3);
        assert_eq!(cat.complexity, 50);
        assert_eq!(cat.reward, 100);
        assert_eq!(cat.complexity_reduction(), 0);
    }

    #[test]
    fn test_each_word_reported_once() {
        let board = test_utils::create_test_board();
        // "ten" and "net" can each be traced along several paths
        let candidates = search(&board, vec!["ten", "net", "rein", "tent"]);
        let found = words(&candidates);
        let unique: HashSet<&str> = found.iter().copied().collect();
        assert_eq!(unique.len(), found.len());
        assert!(unique.contains("ten"));
        assert!(unique.contains("net"));
        assert!(unique.contains("rein"));
        assert!(!unique.contains("tent"));
    }

    #[test]
    fn test_first_discovered_path_wins() {
        let board = test_utils::create_test_board();
        let candidates = search(&board, vec!["net"]);
        assert_eq!(candidates.len(), 1);
        // the 'n' at (2, 2) is reached before the one at (3, 1)
        assert_eq!(candidates[0].start(), Some(Cell::new(2, 2)));
        let cells: Vec<Cell> = candidates[0].path.iter().map(|s| s.cell).collect();
        assert_eq!(cells, vec![Cell::new(2, 2), Cell::new(3, 2), Cell::new(2, 1)]);
        // e -> t is the only diagonal move
        assert_eq!(candidates[0].complexity, 60);
    }

    #[test]
    fn test_paths_are_adjacent_and_self_avoiding() {
        let board = test_utils::create_test_board();
        let mut lexicon = test_utils::create_test_lexicon();
        let candidates = find_candidates(
            &board,
            &mut lexicon,
            ComplexityWeights::default(),
            &RewardTable::standard(),
            3,
        );
        assert!(!candidates.is_empty());
        for candidate in &candidates {
            assert!(candidate.len() >= 3);
            let cells: HashSet<Cell> = candidate.path.iter().map(|s| s.cell).collect();
            assert_eq!(cells.len(), candidate.len(), "{} repeats a tile", candidate);
            for pair in candidate.path.windows(2) {
                let (a, b) = (pair[0].cell, pair[1].cell);
                assert!(a.row.abs_diff(b.row) <= 1 && a.col.abs_diff(b.col) <= 1);
                assert_ne!(a, b);
            }
            assert_eq!(
                candidate.complexity,
                complexity::path_complexity(&candidate.path, &ComplexityWeights::default())
            );
            assert_eq!(shared_prefix_len(&candidate.path, &candidate.path), candidate.len());
        }
    }

    #[test]
    fn test_min_word_length_filters_short_words() {
        let board = Board::from_letters("catsxxxxxxxxxxxx", 4).unwrap();
        let mut lexicon = Trie::from(vec!["cat", "cats"]);
        let candidates = find_candidates(
            &board,
            &mut lexicon,
            ComplexityWeights::default(),
            &RewardTable::standard(),
            4,
        );
        assert_eq!(words(&candidates), vec!["cats"]);
        assert_eq!(candidates[0].reward, 400);
    }

    #[test]
    fn test_prefix_word_and_extension_both_found() {
        let board = Board::from_letters("catsxxxxxxxxxxxx", 4).unwrap();
        let candidates = search(&board, vec!["cat", "cats"]);
        assert_eq!(words(&candidates), vec!["cat", "cats"]);
    }

    #[test]
    fn test_empty_inputs_yield_nothing() {
        let board = test_utils::create_test_board();
        assert!(search(&board, vec![]).is_empty());

        let empty = Board::from_letters("", 0).unwrap();
        assert!(search(&empty, vec!["hat"]).is_empty());
    }

    #[test]
    fn test_search_consumes_lexicon_words() {
        let board = test_utils::create_test_board();
        let mut lexicon = Trie::from(vec!["hat", "pine"]);
        let first = find_candidates(
            &board,
            &mut lexicon,
            ComplexityWeights::default(),
            &RewardTable::standard(),
            3,
        );
        assert_eq!(first.len(), 1);
        assert!(!lexicon.search("hat"));
        assert!(lexicon.search("pine"));
    }

    #[test]
    fn test_short_min_word_length_is_raised() {
        let board = Board::from_letters("catsxxxxxxxxxxxx", 4).unwrap();
        let mut lexicon = Trie::from(vec!["c", "ca", "cat"]);
        let candidates = find_candidates(
            &board,
            &mut lexicon,
            ComplexityWeights::default(),
            &RewardTable::standard(),
            1,
        );
        assert_eq!(words(&candidates), vec!["cat"]);
    }

    #[test]
    fn test_words_past_the_reward_table_take_the_last_tier() {
        // A B C D
        // H G F E
        // I J K L
        // P O N M
        let board = Board::from_letters("abcdhgfeijklponm", 4).unwrap();
        let candidates = search(&board, vec!["abcdefghijklm", "abcdefghijklmnop"]);
        assert_eq!(words(&candidates), vec!["abcdefghijklm", "abcdefghijklmnop"]);
        for candidate in &candidates {
            assert_eq!(candidate.reward, 3800);
            assert_eq!(candidate.complexity, 50);
        }
        assert_eq!(candidates[1].len(), 16);
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        // C X X
        // X A X
        // X X T
        let board = Board::from_letters("cxxxaxxxt", 3).unwrap();
        let mut lexicon = Trie::from(vec!["cat"]);
        let weights = ComplexityWeights {
            base: u32::MAX - 5,
            diagonal: 10,
            ambiguity: 10,
        };
        let candidates =
            find_candidates(&board, &mut lexicon, weights, &RewardTable::standard(), 3);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].complexity, u32::MAX);
    }
}

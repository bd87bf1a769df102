pub mod board;
pub mod complexity;
pub mod conversion;
pub mod directions;
pub mod report;
pub mod scoring;
pub mod search;
pub mod selector;
pub mod trie;

pub use board::candidate::Candidate;
pub use board::{Board, Cell};
pub use conversion::*;
pub use report::{Progress, Solution, WordListStats};
pub use scoring::{RewardTable, SimilarityTable};
pub use selector::{Selection, Selector, Strategy};
pub use trie::Trie;

use std::path::Path;

use anyhow::Result;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_seeder::Seeder;
use tracing::info;

use crate::config::SolverConfig;
use crate::error::GameError;

const LETTER_FREQUENCIES: [(char, f64); 26] = [
    ('a', 0.078),
    ('b', 0.02),
    ('c', 0.04),
    ('d', 0.038),
    ('e', 0.11),
    ('f', 0.014),
    ('g', 0.03),
    ('h', 0.023),
    ('i', 0.086),
    ('j', 0.0021),
    ('k', 0.0097),
    ('l', 0.053),
    ('m', 0.027),
    ('n', 0.072),
    ('o', 0.061),
    ('p', 0.028),
    ('q', 0.0019),
    ('r', 0.073),
    ('s', 0.087),
    ('t', 0.067),
    ('u', 0.033),
    ('v', 0.01),
    ('w', 0.0091),
    ('x', 0.0027),
    ('y', 0.016),
    ('z', 0.0044),
];

/// Random boards with letters drawn by English frequency.
pub struct BoardGenerator {
    letters: Vec<char>,
    distribution: WeightedIndex<f64>,
}

impl BoardGenerator {
    pub fn new() -> Result<Self> {
        let letters = LETTER_FREQUENCIES.iter().map(|(c, _)| *c).collect();
        let distribution = WeightedIndex::new(LETTER_FREQUENCIES.iter().map(|(_, w)| *w))?;
        Ok(Self {
            letters,
            distribution,
        })
    }

    /// Deterministic RNG for a seed string, so a board can be reproduced.
    pub fn seeded(seed: &str) -> StdRng {
        let seed: [u8; 32] = Seeder::from(seed).make_seed();
        StdRng::from_seed(seed)
    }

    pub fn generate_board<R: rand::Rng>(&self, rng: &mut R, size: usize) -> Result<Board> {
        let letters: String = (0..size * size)
            .map(|_| self.letters[self.distribution.sample(rng)])
            .collect();
        Ok(Board::from_letters(&letters, size)?)
    }
}

/// Main game engine that combines the lexicon, search and selection.
#[derive(Clone)]
pub struct GameEngine {
    word_trie: Trie,
    config: SolverConfig,
}

impl GameEngine {
    pub fn new<P: AsRef<Path>>(wordlist_path: P, config: SolverConfig) -> Result<Self> {
        let word_trie = Trie::from_file(wordlist_path)?;
        Self::with_lexicon(word_trie, config)
    }

    pub fn with_lexicon(word_trie: Trie, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        info!("Game engine ready with {} words", word_trie.word_count());
        Ok(Self { word_trie, config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn validate_word(&self, word: &str) -> bool {
        self.word_trie.search(word)
    }

    pub fn board_from_letters(&self, letters: &str) -> Result<Board, GameError> {
        Board::from_letters(letters, self.config.board_size)
    }

    /// Every dictionary word on the board, in discovery order. Searches a
    /// copy of the lexicon so the engine can be reused.
    pub fn find_candidates(&self, board: &Board) -> Vec<Candidate> {
        let mut lexicon = self.word_trie.clone();
        search::find_candidates(
            board,
            &mut lexicon,
            self.config.weights(),
            &self.config.reward_table,
            self.config.min_word_length,
        )
    }

    pub fn select(&self, candidates: &mut [Candidate]) -> Selection {
        Selector::new(self.config.complexity_budget, &self.config.similarity_table)
            .with_strategy(self.config.strategy)
            .select(candidates)
    }

    pub fn solve(&self, board: &Board) -> Solution {
        let mut candidates = self.find_candidates(board);
        info!("Found {} words on the board", candidates.len());

        let selection = self.select(&mut candidates);
        info!(
            "Chose {} words by {} with {} budget remaining",
            selection.len(),
            self.config.strategy,
            selection.remaining_budget
        );

        Solution::new(board.clone(), candidates, selection)
    }
}

#[cfg(test)]
pub mod test_utils {
    use crate::config::SolverConfig;
    use crate::game::{Board, GameEngine, Trie};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// O A T R
    /// I H P S
    /// H T N R
    /// E N E I
    pub const TEST_BOARD: &str = "oatrihpshtnrenei";

    pub const TEST_WORDS: [&str; 16] = [
        "hat", "rip", "pine", "shirt", "oat", "path", "spat", "tap", "pat", "ten", "net", "rein",
        "tern", "rent", "tent", "zebra",
    ];

    pub fn create_test_board() -> Board {
        Board::from_letters(TEST_BOARD, 4).unwrap()
    }

    /// Creates a test trie with words around the test board
    pub fn create_test_lexicon() -> Trie {
        Trie::from(TEST_WORDS.to_vec())
    }

    /// Creates a temporary wordlist file for testing
    pub fn create_test_wordlist() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in TEST_WORDS {
            writeln!(file, "{}", word).unwrap();
        }
        file.flush().unwrap();
        file
    }

    /// Creates a test game engine with a temporary wordlist
    pub fn create_test_game_engine() -> (GameEngine, NamedTempFile) {
        let wordlist_file = create_test_wordlist();
        let game_engine =
            GameEngine::new(wordlist_file.path(), SolverConfig::default()).unwrap();
        (game_engine, wordlist_file)
    }
}

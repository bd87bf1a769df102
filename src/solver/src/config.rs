use std::env;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GameError;
use crate::game::board::DEFAULT_BOARD_SIZE;
use crate::game::complexity::ComplexityWeights;
use crate::game::scoring::{RewardTable, SimilarityTable};
use crate::game::search::MIN_WORD_LENGTH;
use crate::game::selector::Strategy;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub board_size: usize,
    pub min_word_length: usize,
    pub complexity_budget: i64,
    pub base_complexity: u32,
    pub diag_complexity: u32,
    pub ambiguity_complexity: u32,
    pub reward_table: RewardTable,
    pub similarity_table: SimilarityTable,
    pub strategy: Strategy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        let weights = ComplexityWeights::default();
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            min_word_length: MIN_WORD_LENGTH,
            complexity_budget: 1000,
            base_complexity: weights.base,
            diag_complexity: weights.diagonal,
            ambiguity_complexity: weights.ambiguity,
            reward_table: RewardTable::standard(),
            similarity_table: SimilarityTable::default(),
            strategy: Strategy::default(),
        }
    }
}

impl SolverConfig {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Applies `WORDHUNT_*` overrides from `lookup`. Values that do not parse
    /// are logged and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        override_with(&lookup, "WORDHUNT_BOARD_SIZE", &mut self.board_size);
        override_with(&lookup, "WORDHUNT_MIN_WORD_LENGTH", &mut self.min_word_length);
        override_with(&lookup, "WORDHUNT_COMPLEXITY_BUDGET", &mut self.complexity_budget);
        override_with(&lookup, "WORDHUNT_BASE_COMPLEXITY", &mut self.base_complexity);
        override_with(&lookup, "WORDHUNT_DIAG_COMPLEXITY", &mut self.diag_complexity);
        override_with(
            &lookup,
            "WORDHUNT_AMBIGUITY_COMPLEXITY",
            &mut self.ambiguity_complexity,
        );
        override_with(&lookup, "WORDHUNT_REWARD_TABLE", &mut self.reward_table);
        override_with(&lookup, "WORDHUNT_SIMILARITY_TABLE", &mut self.similarity_table);
        override_with(&lookup, "WORDHUNT_STRATEGY", &mut self.strategy);
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 {
            return Err(GameError::InvalidConfig(
                "board_size must be at least 1".to_string(),
            ));
        }
        if self.min_word_length < MIN_WORD_LENGTH {
            return Err(GameError::InvalidConfig(format!(
                "min_word_length must be at least {}, got {}",
                MIN_WORD_LENGTH, self.min_word_length
            )));
        }
        // net cost has to stay >= 1 for the selector to make progress
        if self.base_complexity == 0 {
            return Err(GameError::InvalidConfig(
                "base_complexity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn weights(&self) -> ComplexityWeights {
        ComplexityWeights {
            base: self.base_complexity,
            diagonal: self.diag_complexity,
            ambiguity: self.ambiguity_complexity,
        }
    }
}

fn override_with<T, F>(lookup: &F, key: &str, target: &mut T)
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(key) {
        match raw.parse::<T>() {
            Ok(value) => *target = value,
            Err(e) => warn!("Ignoring {}={}: {}", key, raw, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.board_size, 4);
        assert_eq!(config.min_word_length, 3);
        assert_eq!(config.complexity_budget, 1000);
        assert_eq!(config.weights(), ComplexityWeights::default());
        assert_eq!(config.reward_table.reward(5), 800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = SolverConfig::default().with_overrides(lookup_from(&[
            ("WORDHUNT_BOARD_SIZE", "5"),
            ("WORDHUNT_COMPLEXITY_BUDGET", "1400"),
            ("WORDHUNT_DIAG_COMPLEXITY", "5"),
            ("WORDHUNT_AMBIGUITY_COMPLEXITY", "20"),
            ("WORDHUNT_REWARD_TABLE", "steep"),
            ("WORDHUNT_SIMILARITY_TABLE", "0:0,4:100"),
            ("WORDHUNT_STRATEGY", "goal:40"),
        ]));
        assert_eq!(config.board_size, 5);
        assert_eq!(config.complexity_budget, 1400);
        assert_eq!(config.diag_complexity, 5);
        assert_eq!(config.ambiguity_complexity, 20);
        assert_eq!(config.reward_table, RewardTable::steep());
        assert_eq!(config.similarity_table.bonus(9), 100);
        assert_eq!(config.strategy, Strategy::Goal { percent: 40 });
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let config = SolverConfig::default().with_overrides(lookup_from(&[
            ("WORDHUNT_BOARD_SIZE", "four"),
            ("WORDHUNT_SIMILARITY_TABLE", "0:10,1:5"),
        ]));
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SolverConfig::default();
        config.base_complexity = 0;
        assert!(config.validate().is_err());

        let mut config = SolverConfig::default();
        config.min_word_length = 2;
        assert!(config.validate().is_err());

        let mut config = SolverConfig::default();
        config.board_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"complexity_budget": 500, "reward_table": {{"3": 1, "4": 2}}, "strategy": "size:4"}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = SolverConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.complexity_budget, 500);
        assert_eq!(config.reward_table.reward(4), 2);
        assert_eq!(config.base_complexity, 50);
        assert_eq!(config.strategy, Strategy::Size { min_length: 4 });
    }
}

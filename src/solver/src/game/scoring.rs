use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

const STANDARD_POINTS: [(usize, u32); 10] = [
    (3, 100),
    (4, 400),
    (5, 800),
    (6, 1400),
    (7, 1800),
    (8, 2200),
    (9, 2600),
    (10, 3000),
    (11, 3400),
    (12, 3800),
];

// Older scoring variant: long words are worth far more.
const STEEP_POINTS: [(usize, u32); 10] = [
    (3, 100),
    (4, 400),
    (5, 800),
    (6, 1400),
    (7, 1800),
    (8, 2200),
    (9, 3600),
    (10, 100000),
    (11, 100000),
    (12, 100000),
];

const DEFAULT_SIMILARITY: [(usize, u32); 7] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (3, 5),
    (4, 10),
    (5, 50),
    (6, 1000),
];

/// Parses `"3:100, 4:400"` into a length-keyed table.
pub fn parse_tiers(text: &str) -> Result<BTreeMap<usize, u32>, GameError> {
    let mut tiers = BTreeMap::new();
    for entry in text.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (len, points) = entry
            .split_once(':')
            .ok_or_else(|| GameError::InvalidConfig(format!("expected len:points, got '{}'", entry)))?;
        let len = len
            .trim()
            .parse::<usize>()
            .map_err(|e| GameError::InvalidConfig(format!("bad length in '{}': {}", entry, e)))?;
        let points = points
            .trim()
            .parse::<u32>()
            .map_err(|e| GameError::InvalidConfig(format!("bad points in '{}': {}", entry, e)))?;
        tiers.insert(len, points);
    }
    Ok(tiers)
}

/// Points awarded for a word, keyed by its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardTable {
    points: BTreeMap<usize, u32>,
}

impl RewardTable {
    pub fn new(points: BTreeMap<usize, u32>) -> Self {
        Self { points }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_POINTS.into_iter().collect())
    }

    pub fn steep() -> Self {
        Self::new(STEEP_POINTS.into_iter().collect())
    }

    pub fn lookup(&self, len: usize) -> Result<u32, GameError> {
        self.points
            .get(&len)
            .copied()
            .ok_or(GameError::UnscoredLength(len))
    }

    /// Like `lookup`, but a length without an entry takes the nearest defined
    /// tier (the shorter one on a tie). An empty table scores everything 0.
    pub fn reward(&self, len: usize) -> u32 {
        if let Ok(points) = self.lookup(len) {
            return points;
        }
        let below = self.points.range(..len).next_back();
        let above = self.points.range(len..).next();
        match (below, above) {
            (Some((b_len, b_points)), Some((a_len, a_points))) => {
                if len - b_len <= a_len - len {
                    *b_points
                } else {
                    *a_points
                }
            }
            (Some((_, points)), None) | (None, Some((_, points))) => *points,
            (None, None) => 0,
        }
    }

    pub fn tiers(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.points.iter().map(|(len, points)| (*len, *points))
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for RewardTable {
    type Err = GameError;

    /// `standard`, `steep`, or an explicit `len:points` list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "steep" => Ok(Self::steep()),
            other => Ok(Self::new(parse_tiers(other)?)),
        }
    }
}

/// Cost reduction granted for sharing a path prefix with a chosen word.
/// A step function of the shared length; lengths past the last entry keep
/// its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<usize, u32>", into = "BTreeMap<usize, u32>")]
pub struct SimilarityTable {
    bonus: BTreeMap<usize, u32>,
}

impl SimilarityTable {
    pub fn new(bonus: BTreeMap<usize, u32>) -> Result<Self, GameError> {
        let decreasing = bonus
            .values()
            .zip(bonus.values().skip(1))
            .any(|(prev, next)| next < prev);
        if decreasing {
            return Err(GameError::InvalidConfig(
                "similarity bonus must not decrease with shared length".to_string(),
            ));
        }
        Ok(Self { bonus })
    }

    pub fn bonus(&self, shared_len: usize) -> u32 {
        self.bonus
            .range(..=shared_len)
            .next_back()
            .map(|(_, bonus)| *bonus)
            .unwrap_or(0)
    }
}

impl Default for SimilarityTable {
    fn default() -> Self {
        Self {
            bonus: DEFAULT_SIMILARITY.into_iter().collect(),
        }
    }
}

impl TryFrom<BTreeMap<usize, u32>> for SimilarityTable {
    type Error = GameError;

    fn try_from(bonus: BTreeMap<usize, u32>) -> Result<Self, Self::Error> {
        Self::new(bonus)
    }
}

impl From<SimilarityTable> for BTreeMap<usize, u32> {
    fn from(table: SimilarityTable) -> Self {
        table.bonus
    }
}

impl FromStr for SimilarityTable {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_tiers(s)?)
    }
}

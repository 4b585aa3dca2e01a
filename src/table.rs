//! Cumulative-cutoff probability table for rarity selection.

use rand::Rng;

use crate::WeightedEnum;
use crate::error::ConfigError;
use crate::rarity::Rarity;

/// Allowed slack between the declared percentages and 100.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Ordered `(rarity, percent)` pairs with precomputed running sums.
///
/// Entries are walked in declaration order; the first whose cumulative sum
/// exceeds the roll wins. O(number of rarities) per draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    entries: Vec<(Rarity, f64)>,
    cumulative: Vec<f64>,
}

impl ProbabilityTable {
    /// Build from `(rarity, percent)` pairs that must sum to 100.
    ///
    /// # Errors
    /// * [`ConfigError::EmptyTable`] if there are no pairs.
    /// * [`ConfigError::BadProbability`] for a negative or non-finite percentage.
    /// * [`ConfigError::DuplicateRarity`] if a rarity is listed twice.
    /// * [`ConfigError::ProbabilitySum`] if the total is not 100 within [`SUM_TOLERANCE`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (Rarity, f64)>,
    {
        let mut entries: Vec<(Rarity, f64)> = Vec::new();
        let mut cumulative = Vec::new();
        let mut sum = 0.0f64;
        for (rarity, percent) in pairs {
            if !percent.is_finite() || percent.is_sign_negative() {
                return Err(ConfigError::BadProbability {
                    rarity,
                    value: percent,
                });
            }
            if entries.iter().any(|(r, _)| *r == rarity) {
                return Err(ConfigError::DuplicateRarity(rarity));
            }
            sum += percent;
            entries.push((rarity, percent));
            cumulative.push(sum);
        }
        if entries.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        if (sum - 100.0).abs() > SUM_TOLERANCE {
            return Err(ConfigError::ProbabilitySum { sum });
        }
        Ok(Self {
            entries,
            cumulative,
        })
    }

    /// Map a roll in `[0, 100)` to a rarity.
    ///
    /// Falls back to [`Rarity::NO_DROP`] when the roll lands past the last
    /// cumulative sum (a table a hair under 100).
    pub fn pick(&self, roll: f64) -> Rarity {
        self.cumulative
            .iter()
            .position(|&cutoff| roll < cutoff)
            .map_or(Rarity::NO_DROP, |i| self.entries[i].0)
    }

    /// Draw a rarity using a uniform roll in `[0, 100)`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rarity {
        self.pick(rng.random::<f64>() * 100.0)
    }

    /// Percentage configured for `rarity`, zero when absent.
    pub fn percent(&self, rarity: Rarity) -> f64 {
        self.entries
            .iter()
            .find(|(r, _)| *r == rarity)
            .map_or(0.0, |(_, p)| *p)
    }

    pub fn entries(&self) -> &[(Rarity, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProbabilityTable {
    /// The odds declared on [`Rarity`].
    fn default() -> Self {
        let cumulative = Rarity::ENTRIES
            .iter()
            .scan(0.0, |sum, (_, p)| {
                *sum += p;
                Some(*sum)
            })
            .collect();
        Self {
            entries: Rarity::ENTRIES.to_vec(),
            cumulative,
        }
    }
}

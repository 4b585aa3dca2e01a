//! Balance settings, loaded from TOML or taken from the shipped defaults.
//!
//! ```toml
//! starting_spins = 60
//! pity_threshold = 100
//! no_drop_currency = { min = 1, max = 3 }
//!
//! [[reward_codes]]
//! code = "主任真帅"
//! bonus_spins = 100
//!
//! # optional; omitted means the odds declared on `Rarity`
//! [[probabilities]]
//! rarity = "Mythic"
//! percent = 0.5
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rarity::Rarity;
use crate::sampler::{DEFAULT_PITY_THRESHOLD, RaritySampler};
use crate::state::DEFAULT_STARTING_SPINS;
use crate::table::ProbabilityTable;

pub const DEFAULT_REWARD_CODE: &str = "主任真帅";
pub const DEFAULT_CODE_BONUS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRange {
    pub min: u32,
    pub max: u32,
}

impl CurrencyRange {
    pub fn range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl Default for CurrencyRange {
    fn default() -> Self {
        Self { min: 1, max: 3 }
    }
}

/// A code that grants bonus spins each time it is entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardCode {
    pub code: String,
    pub bonus_spins: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityEntry {
    pub rarity: Rarity,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GachaConfig {
    pub starting_spins: u32,
    pub pity_threshold: u32,
    /// Currency paid for a draw that yields no item.
    pub no_drop_currency: CurrencyRange,
    pub reward_codes: Vec<RewardCode>,
    /// Overrides the odds declared on [`Rarity`] when non-empty.
    pub probabilities: Vec<ProbabilityEntry>,
}

impl Default for GachaConfig {
    fn default() -> Self {
        Self {
            starting_spins: DEFAULT_STARTING_SPINS,
            pity_threshold: DEFAULT_PITY_THRESHOLD,
            no_drop_currency: CurrencyRange::default(),
            reward_codes: vec![RewardCode {
                code: DEFAULT_REWARD_CODE.to_string(),
                bonus_spins: DEFAULT_CODE_BONUS,
            }],
            probabilities: Vec::new(),
        }
    }
}

impl GachaConfig {
    /// Parse and validate. Missing keys take their default.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: GachaConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let CurrencyRange { min, max } = self.no_drop_currency;
        if min == 0 || min > max {
            return Err(ConfigError::CurrencyRange { min, max });
        }
        self.sampler().map(|_| ())
    }

    pub fn probability_table(&self) -> Result<ProbabilityTable, ConfigError> {
        if self.probabilities.is_empty() {
            return Ok(ProbabilityTable::default());
        }
        ProbabilityTable::from_pairs(self.probabilities.iter().map(|e| (e.rarity, e.percent)))
    }

    pub fn sampler(&self) -> Result<RaritySampler, ConfigError> {
        RaritySampler::new(self.probability_table()?, self.pity_threshold)
    }

    /// Exact match only; the caller trims.
    pub fn reward_code(&self, code: &str) -> Option<&RewardCode> {
        self.reward_codes.iter().find(|c| c.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_balance() {
        let config = GachaConfig::default();
        assert_eq!(config.starting_spins, 60);
        assert_eq!(config.pity_threshold, 100);
        assert_eq!(config.no_drop_currency.range(), 1..=3);
        assert_eq!(config.reward_code("主任真帅").unwrap().bonus_spins, 100);
        assert!(config.reward_code("主任真帅 ").is_none());
        assert_eq!(config.probability_table().unwrap(), ProbabilityTable::default());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(GachaConfig::from_toml_str("").unwrap(), GachaConfig::default());
    }

    #[test]
    fn parses_overrides() {
        let config = GachaConfig::from_toml_str(
            r#"
            starting_spins = 10
            pity_threshold = 20
            no_drop_currency = { min = 2, max = 5 }

            [[reward_codes]]
            code = "LUCKY"
            bonus_spins = 7

            [[probabilities]]
            rarity = "Mythic"
            percent = 10.0

            [[probabilities]]
            rarity = "Common"
            percent = 90.0
            "#,
        )
        .unwrap();
        assert_eq!(config.starting_spins, 10);
        assert_eq!(config.reward_codes.len(), 1);
        assert!(config.reward_code("主任真帅").is_none());
        let sampler = config.sampler().unwrap();
        assert_eq!(sampler.pity_threshold(), 20);
        assert_eq!(sampler.table().percent(Rarity::Mythic), 10.0);
        assert_eq!(sampler.table().percent(Rarity::Rare), 0.0);
    }

    #[test]
    fn rejects_invalid_balance() {
        assert!(matches!(
            GachaConfig::from_toml_str("no_drop_currency = { min = 4, max = 3 }"),
            Err(ConfigError::CurrencyRange { min: 4, max: 3 })
        ));
        assert!(matches!(
            GachaConfig::from_toml_str("no_drop_currency = { min = 0, max = 3 }"),
            Err(ConfigError::CurrencyRange { .. })
        ));
        assert!(matches!(
            GachaConfig::from_toml_str("pity_threshold = 0"),
            Err(ConfigError::ZeroPityThreshold)
        ));
        assert!(matches!(
            GachaConfig::from_toml_str(
                "[[probabilities]]\nrarity = \"Rare\"\npercent = 99.0\n"
            ),
            Err(ConfigError::ProbabilitySum { .. })
        ));
        assert!(matches!(
            GachaConfig::from_toml_str("starting_spins = \"many\""),
            Err(ConfigError::Toml(_))
        ));
    }
}

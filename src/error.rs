//! Error types for drawing, exchanging and loading configuration.

use thiserror::Error;

use crate::rarity::Rarity;

/// Failures a player-facing command can report.
#[derive(Debug, Error)]
pub enum GachaError {
    /// A draw was attempted with no spins left.
    #[error("no spins remaining")]
    Exhausted,

    /// The reward code is not recognized.
    #[error("invalid reward code")]
    InvalidCode,

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A state snapshot could not be encoded or decoded.
    #[error("state snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Problems detected while loading probability tables, catalogs or configs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("probability table is empty")]
    EmptyTable,

    #[error("probability for {rarity:?} is negative or not finite: {value}")]
    BadProbability { rarity: Rarity, value: f64 },

    #[error("rarity {0:?} appears more than once in the probability table")]
    DuplicateRarity(Rarity),

    #[error("probabilities sum to {sum}, expected 100")]
    ProbabilitySum { sum: f64 },

    #[error("duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("duplicate pool id: {0}")]
    DuplicatePool(String),

    #[error("unknown rarity: {0}")]
    UnknownRarity(String),

    #[error("no rarity config for {0:?}")]
    MissingRarityConfig(Rarity),

    #[error("pity threshold must be at least 1")]
    ZeroPityThreshold,

    #[error("no-drop currency range {min}..={max} is empty or starts at zero")]
    CurrencyRange { min: u32, max: u32 },

    #[error("invalid toml: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Why a currency-for-item exchange was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("item already owned: {0}")]
    AlreadyOwned(String),

    #[error("insufficient currency: need {price}, have {balance}")]
    InsufficientCurrency { price: u32, balance: u32 },
}

pub type Result<T, E = GachaError> = std::result::Result<T, E>;

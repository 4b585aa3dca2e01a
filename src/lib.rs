//! # gachatables
//!
//! A single-player gacha: weighted rarity draws with a pity guarantee,
//! duplicate-to-currency conversion, a currency exchange shop, reward codes
//! and replayed luck statistics.
//!
//! There are two layers:
//!
//! 1. **[`Session`]**, which owns a catalog, the balance settings, the player
//!    state and an RNG, and exposes every player command.
//! 2. **The parts**: [`ProbabilityTable`], [`RaritySampler`], [`DrawEngine`],
//!    [`exchange`], [`stats`]. Each takes its inputs explicitly, so they
//!    compose with whatever storage and RNG the caller already has.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use gachatables::Session;
//!
//! # fn main() -> Result<(), gachatables::GachaError> {
//! let mut session = Session::seeded(42)?;
//! for result in session.draw_ten() {
//!     println!("{} {}", result.item.rarity, result.item.name);
//! }
//! session.redeem_code("主任真帅")?; // +100 spins
//! println!("{:?}", session.statistics().rating);
//! # Ok(()) }
//! ```
//!
//! ## Custom odds with the derive
//!
//! ```rust,ignore
//! use gachatables::{ProbabilityTable, Rarity, WeightedEnum};
//!
//! // `Rarity` is declared with `#[probability(..)]` on each variant
//! let table = ProbabilityTable::from_pairs(Rarity::ENTRIES.iter().copied())?;
//! assert_eq!(table, ProbabilityTable::default());
//! ```
//!
//! ## Performance
//! * **Sample**: one `f64` per roll plus a walk over seven cumulative sums.
//! * **Resolve**: O(1); items are bucketed by rarity when the catalog is built.
//! * **Statistics**: O(history) per call; nothing is cached.
//!
//! ## Gotchas
//! * Percentages must sum to 100 (within `1e-6`). Rolls that land past the
//!   last cutoff fall back to [`Rarity::NO_DROP`].
//! * The pity counter lives in [`PlayerState`] and resets whenever the top
//!   rarity is rolled, even when that rarity has no items and pays currency.
//! * [`Session`] is single-owner. Share it behind a lock.
//!
//! ---
//!
//! `rand` integration uses the modern `Rng::random()` / `random_range()` APIs

extern crate self as gachatables;

mod builtin;
mod catalog;
mod codes;
mod config;
mod engine;
mod error;
pub mod exchange;
mod rarity;
mod resolver;
mod sampler;
mod session;
mod state;
pub mod stats;
mod table;

pub use builtin::default_rarities;
pub use catalog::{Catalog, Item, ItemDef, PLACEHOLDER_POOL, Pool, PoolDef};
pub use codes::{CodeRedemption, redeem_code};
pub use config::{
    CurrencyRange, DEFAULT_CODE_BONUS, DEFAULT_REWARD_CODE, GachaConfig, ProbabilityEntry,
    RewardCode,
};
pub use engine::DrawEngine;
pub use error::{ConfigError, ExchangeError, GachaError, Result};
pub use exchange::ShopItem;
pub use rarity::{Rarity, RarityConfig};
pub use resolver::resolve;
pub use sampler::{DEFAULT_PITY_THRESHOLD, RaritySampler, Roll, UniformSampler};
pub use session::Session;
pub use state::{DEFAULT_STARTING_SPINS, DrawResult, PlayerState};
pub use stats::{LuckRating, Statistics};
pub use table::{ProbabilityTable, SUM_TOLERANCE};

/// Derive macro imported from `gachatables_macros`.
/// See the crate-level example for usage.
pub use gachatables_macros::WeightedEnum;

/// Trait implemented by the `WeightedEnum` derive macro.
///
/// Each variant and its percentage is exposed via [`WeightedEnum::ENTRIES`],
/// in declaration order.
pub trait WeightedEnum: Sized + Copy + 'static {
    /// All `(variant, percent)` pairs for the enum.
    const ENTRIES: &'static [(Self, f64)];

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Position of `self` in [`VARIANTS`](Self::VARIANTS).
    fn index(self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_session() {
        let mut session = Session::seeded(1).unwrap();
        let results = session.draw_ten();
        assert_eq!(results.len(), 10);
        assert_eq!(session.spins_remaining(), 50);
    }

    #[test]
    fn index_matches_variants() {
        for (i, rarity) in Rarity::VARIANTS.iter().enumerate() {
            assert_eq!(rarity.index(), i);
        }
    }
}

//! Draw orchestration: spin accounting, rarity roll, item resolution,
//! duplicate conversion and history.

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Item};
use crate::config::GachaConfig;
use crate::error::{ConfigError, GachaError, Result};
use crate::resolver::resolve;
use crate::sampler::RaritySampler;
use crate::state::{DrawResult, PlayerState};

/// Draws once spins are checked. Holds balance, never player state.
#[derive(Debug, Clone)]
pub struct DrawEngine {
    sampler: RaritySampler,
    no_drop_currency: RangeInclusive<u32>,
}

impl DrawEngine {
    /// # Errors
    /// [`ConfigError::CurrencyRange`] if `no_drop_currency` is empty or
    /// could pay out zero.
    pub fn new(
        sampler: RaritySampler,
        no_drop_currency: RangeInclusive<u32>,
    ) -> Result<Self, ConfigError> {
        let (min, max) = (*no_drop_currency.start(), *no_drop_currency.end());
        if min == 0 || min > max {
            return Err(ConfigError::CurrencyRange { min, max });
        }
        Ok(Self {
            sampler,
            no_drop_currency,
        })
    }

    pub fn from_config(config: &GachaConfig) -> Result<Self, ConfigError> {
        Self::new(config.sampler()?, config.no_drop_currency.range())
    }

    /// One draw.
    ///
    /// # Errors
    /// [`GachaError::Exhausted`] when no spins remain; `state` is untouched.
    pub fn draw_once<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        state: &mut PlayerState,
        rng: &mut R,
    ) -> Result<DrawResult> {
        if state.spins_remaining == 0 {
            return Err(GachaError::Exhausted);
        }
        state.spins_remaining -= 1;
        state.lifetime_spins += 1;

        let roll = self.sampler.sample(&mut state.pity_counter, rng);
        if roll.pity {
            info!(lifetime_spins = state.lifetime_spins, "pity triggered");
        }

        let result = match resolve(catalog, roll.rarity, rng) {
            Some(item) if state.owns(&item.id) => {
                let reward = catalog.rarity_config(item.rarity).duplicate_reward;
                state.credit(reward);
                DrawResult {
                    item: item.clone(),
                    is_duplicate: true,
                    currency_gained: reward,
                    pity: roll.pity,
                }
            }
            Some(item) => {
                state.inventory.insert(item.id.clone());
                DrawResult {
                    item: item.clone(),
                    is_duplicate: false,
                    currency_gained: 0,
                    pity: roll.pity,
                }
            }
            None => {
                let fallback = !roll.rarity.is_no_drop();
                if fallback {
                    warn!(rarity = %roll.rarity, "no items configured for rarity, paying currency");
                }
                let amount = rng.random_range(self.no_drop_currency.clone());
                state.credit(amount);
                DrawResult {
                    item: Item::currency_placeholder(fallback),
                    is_duplicate: false,
                    currency_gained: amount,
                    pity: roll.pity,
                }
            }
        };

        debug!(
            rarity = %roll.rarity,
            item = %result.item.id,
            duplicate = result.is_duplicate,
            currency = result.currency_gained,
            pity_counter = state.pity_counter,
            "draw"
        );
        state.record(result.clone());
        Ok(result)
    }

    /// Up to `n` draws, stopping early when spins run out. Results are in
    /// draw order.
    pub fn draw_many<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        state: &mut PlayerState,
        n: usize,
        rng: &mut R,
    ) -> Vec<DrawResult> {
        let mut results = Vec::with_capacity(n.min(state.spins_remaining as usize));
        for _ in 0..n {
            match self.draw_once(catalog, state, rng) {
                Ok(result) => results.push(result),
                Err(_) => break,
            }
        }
        results
    }

    pub fn sampler(&self) -> &RaritySampler {
        &self.sampler
    }
}

impl Default for DrawEngine {
    fn default() -> Self {
        Self {
            sampler: RaritySampler::default(),
            no_drop_currency: 1..=3,
        }
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::catalog::Catalog;
use crate::codes::{CodeRedemption, redeem_code};
use crate::config::GachaConfig;
use crate::engine::DrawEngine;
use crate::error::{ExchangeError, Result};
use crate::exchange::{self, ShopItem};
use crate::state::{DrawResult, PlayerState};
use crate::stats::Statistics;

/// One player's gacha: catalog, balance, state and randomness in one owner.
///
/// Commands mutate the state in place and run to completion; wrap the
/// session in a lock if it is ever shared.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    catalog: Catalog,
    config: GachaConfig,
    engine: DrawEngine,
    state: PlayerState,
    rng: R,
}

impl Session<StdRng> {
    /// Shipped catalog and balance, seeded from the OS.
    pub fn new() -> Result<Self> {
        Self::with_rng(Catalog::builtin()?, GachaConfig::default(), StdRng::from_os_rng())
    }

    /// Shipped catalog and balance with a reproducible seed.
    pub fn seeded(seed: u64) -> Result<Self> {
        Self::with_rng(
            Catalog::builtin()?,
            GachaConfig::default(),
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(catalog: Catalog, config: GachaConfig, rng: R) -> Result<Self> {
        let engine = DrawEngine::from_config(&config)?;
        let state = PlayerState::new(config.starting_spins);
        Ok(Self {
            catalog,
            config,
            engine,
            state,
            rng,
        })
    }

    /// Resume from a saved state.
    pub fn restore(
        catalog: Catalog,
        config: GachaConfig,
        state: PlayerState,
        rng: R,
    ) -> Result<Self> {
        let mut session = Self::with_rng(catalog, config, rng)?;
        session.state = state;
        Ok(session)
    }

    pub fn draw_once(&mut self) -> Result<DrawResult> {
        self.engine
            .draw_once(&self.catalog, &mut self.state, &mut self.rng)
    }

    pub fn draw_many(&mut self, n: usize) -> Vec<DrawResult> {
        self.engine
            .draw_many(&self.catalog, &mut self.state, n, &mut self.rng)
    }

    pub fn draw_ten(&mut self) -> Vec<DrawResult> {
        self.draw_many(10)
    }

    /// `false` for unknown, owned or unaffordable items; nothing changes then.
    pub fn redeem(&mut self, item_id: &str) -> bool {
        exchange::redeem(&self.catalog, &mut self.state, item_id)
    }

    pub fn try_redeem(&mut self, item_id: &str) -> Result<u32, ExchangeError> {
        exchange::try_redeem(&self.catalog, &mut self.state, item_id)
    }

    pub fn redeem_code(&mut self, code: &str) -> Result<CodeRedemption> {
        redeem_code(&self.config, &mut self.state, code)
    }

    /// Fresh allowance; lifetime spins carry over.
    pub fn reset(&mut self) {
        self.state.reset(self.config.starting_spins);
        info!(lifetime_spins = self.state.lifetime_spins, "state reset");
    }

    pub fn shop(&self) -> Vec<ShopItem<'_>> {
        exchange::shop(&self.catalog, &self.state)
    }

    pub fn statistics(&self) -> Statistics<'_> {
        Statistics::compute(&self.catalog, &self.state, self.config.pity_threshold)
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GachaConfig {
        &self.config
    }

    pub fn spins_remaining(&self) -> u32 {
        self.state.spins_remaining
    }

    pub fn lifetime_spins(&self) -> u64 {
        self.state.lifetime_spins
    }

    pub fn currency(&self) -> u32 {
        self.state.currency
    }

    pub fn pity_counter(&self) -> u32 {
        self.state.pity_counter
    }

    pub fn has_spins_remaining(&self) -> bool {
        self.state.has_spins_remaining()
    }

    pub fn max_spins(&self) -> u32 {
        self.config.starting_spins
    }

    pub fn owns(&self, item_id: &str) -> bool {
        self.state.owns(item_id)
    }

    pub fn snapshot_json(&self) -> Result<String> {
        self.state.to_json()
    }

    /// Replace the state with a snapshot. On error the current state stays.
    pub fn restore_json(&mut self, src: &str) -> Result<()> {
        self.state = PlayerState::from_json(src)?;
        Ok(())
    }

    pub fn into_state(self) -> PlayerState {
        self.state
    }
}

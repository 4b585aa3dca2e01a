//! Mutable per-player state and the draw records it accumulates.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::error::Result;

/// Spins a fresh or reset player starts with.
pub const DEFAULT_STARTING_SPINS: u32 = 60;

/// Outcome of one draw. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    /// The drawn item, or a currency placeholder.
    pub item: Item,
    pub is_duplicate: bool,
    pub currency_gained: u32,
    /// Pity forced the rarity of this draw.
    #[serde(default)]
    pub pity: bool,
}

impl DrawResult {
    /// Paid out currency instead of a catalog item.
    pub fn is_currency_only(&self) -> bool {
        self.item.rarity.is_no_drop()
    }
}

/// Everything a single player owns. Serialize it verbatim to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub spins_remaining: u32,
    /// Never reset, not even by [`PlayerState::reset`].
    pub lifetime_spins: u64,
    pub currency: u32,
    /// Owned item ids. Insertion-only.
    pub inventory: BTreeSet<String>,
    /// Newest first.
    pub history: VecDeque<DrawResult>,
    /// Draws since the last top-rarity result.
    pub pity_counter: u32,
    pub redeemed_codes: BTreeMap<String, u32>,
}

impl PlayerState {
    pub fn new(starting_spins: u32) -> Self {
        Self {
            spins_remaining: starting_spins,
            lifetime_spins: 0,
            currency: 0,
            inventory: BTreeSet::new(),
            history: VecDeque::new(),
            pity_counter: 0,
            redeemed_codes: BTreeMap::new(),
        }
    }

    pub fn owns(&self, item_id: &str) -> bool {
        self.inventory.contains(item_id)
    }

    pub fn has_spins_remaining(&self) -> bool {
        self.spins_remaining > 0
    }

    /// Back to a fresh allowance, keeping `lifetime_spins`.
    pub fn reset(&mut self, starting_spins: u32) {
        *self = Self {
            lifetime_spins: self.lifetime_spins,
            ..Self::new(starting_spins)
        };
    }

    pub(crate) fn credit(&mut self, amount: u32) {
        self.currency = self.currency.saturating_add(amount);
    }

    pub(crate) fn record(&mut self, result: DrawResult) {
        self.history.push_front(result);
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_SPINS)
    }
}

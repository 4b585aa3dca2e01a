//! Read-only aggregates derived from [`PlayerState`] on demand.
//!
//! Nothing here is cached; every function replays the history it is given.

use crate::WeightedEnum;
use crate::catalog::Catalog;
use crate::rarity::Rarity;
use crate::state::{DrawResult, PlayerState};

/// How many entries [`top_draws`] keeps by default.
pub const TOP_DRAWS: usize = 5;

/// Luck classification, worst to best, plus the no-data case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LuckRating {
    NoDraws,
    Cursed,
    Unlucky,
    Average,
    Lucky,
    Blessed,
}

impl LuckRating {
    pub const fn label(self) -> &'static str {
        match self {
            LuckRating::NoDraws => "No draws yet",
            LuckRating::Cursed => "Cursed",
            LuckRating::Unlucky => "Unlucky",
            LuckRating::Average => "Average",
            LuckRating::Lucky => "Lucky",
            LuckRating::Blessed => "Blessed",
        }
    }
}

/// `(min luck ratio, min pity efficiency, rating)`, best first. Both columns
/// are non-increasing so the rating is monotonic in each ratio.
const RATING_LADDER: &[(f64, f64, LuckRating)] = &[
    (0.06, 2.0, LuckRating::Blessed),
    (0.04, 1.0, LuckRating::Lucky),
    (0.025, 0.5, LuckRating::Average),
    (0.015, 0.0, LuckRating::Unlucky),
];

/// Value one history entry contributes.
///
/// Currency-only and duplicate draws count the currency they paid; a new item
/// counts its exchange price.
pub fn entry_value(catalog: &Catalog, draw: &DrawResult) -> u32 {
    if draw.is_currency_only() || draw.is_duplicate {
        draw.currency_gained
    } else {
        catalog.rarity_config(draw.item.rarity).exchange_price
    }
}

pub fn total_spins(state: &PlayerState) -> u64 {
    state.lifetime_spins
}

pub fn total_value(catalog: &Catalog, state: &PlayerState) -> u64 {
    state
        .history
        .iter()
        .map(|d| u64::from(entry_value(catalog, d)))
        .sum()
}

/// `total_value / total_spins`, rounded; zero before the first spin.
pub fn average_value(catalog: &Catalog, state: &PlayerState) -> u64 {
    match total_spins(state) {
        0 => 0,
        spins => (total_value(catalog, state) as f64 / spins as f64).round() as u64,
    }
}

/// Top-rarity draws still in history, duplicates included.
pub fn mythics_obtained(state: &PlayerState) -> u64 {
    state
        .history
        .iter()
        .filter(|d| d.item.rarity == Rarity::TOP)
        .count() as u64
}

/// Rate luck from value per spin against the top exchange price, and from
/// top-rarity hits per pity window.
pub fn rating(catalog: &Catalog, state: &PlayerState, pity_threshold: u32) -> LuckRating {
    let spins = total_spins(state);
    if spins == 0 {
        return LuckRating::NoDraws;
    }
    let top_price = f64::from(catalog.rarity_config(Rarity::TOP).exchange_price.max(1));
    let luck = total_value(catalog, state) as f64 / (spins as f64 * top_price);
    let windows = (spins / u64::from(pity_threshold.max(1))).max(1);
    let pity_efficiency = mythics_obtained(state) as f64 / windows as f64;

    RATING_LADDER
        .iter()
        .find(|(min_luck, min_pity, _)| luck >= *min_luck && pity_efficiency >= *min_pity)
        .map_or(LuckRating::Cursed, |(_, _, rating)| *rating)
}

/// A history entry with the value it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedDraw<'a> {
    pub draw: &'a DrawResult,
    pub value: u32,
}

/// The `n` most valuable item draws, newest first among equals.
pub fn top_draws<'a>(catalog: &Catalog, state: &'a PlayerState, n: usize) -> Vec<RankedDraw<'a>> {
    let mut ranked: Vec<RankedDraw<'a>> = state
        .history
        .iter()
        .filter(|d| !d.is_currency_only())
        .map(|draw| RankedDraw {
            draw,
            value: entry_value(catalog, draw),
        })
        .collect();
    // stable: history order breaks ties
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(n);
    ranked
}

/// Draw counts per rarity over the current history, indexed like [`Rarity::ALL`].
pub fn rarity_counts(state: &PlayerState) -> [u64; Rarity::COUNT] {
    let mut counts = [0u64; Rarity::COUNT];
    for draw in &state.history {
        counts[draw.item.rarity.index()] += 1;
    }
    counts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub owned: usize,
    pub total: usize,
}

/// Owned collectibles against everything that can be collected.
pub fn collection(catalog: &Catalog, state: &PlayerState) -> Collection {
    let owned = state
        .inventory
        .iter()
        .filter_map(|id| catalog.item_by_id(id))
        .filter(|item| !item.rarity.is_no_drop())
        .count();
    Collection {
        owned,
        total: catalog.collectible_count(),
    }
}

/// Every aggregate at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<'a> {
    pub total_spins: u64,
    pub total_value: u64,
    pub average_value: u64,
    pub mythics_obtained: u64,
    pub rating: LuckRating,
    pub top: Vec<RankedDraw<'a>>,
    pub rarity_counts: [u64; Rarity::COUNT],
    pub collection: Collection,
}

impl<'a> Statistics<'a> {
    pub fn compute(catalog: &Catalog, state: &'a PlayerState, pity_threshold: u32) -> Self {
        Self {
            total_spins: total_spins(state),
            total_value: total_value(catalog, state),
            average_value: average_value(catalog, state),
            mythics_obtained: mythics_obtained(state),
            rating: rating(catalog, state, pity_threshold),
            top: top_draws(catalog, state, TOP_DRAWS),
            rarity_counts: rarity_counts(state),
            collection: collection(catalog, state),
        }
    }
}

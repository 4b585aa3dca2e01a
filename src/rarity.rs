use std::str::FromStr;

use gachatables_macros::WeightedEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rarity tiers, rarest first.
///
/// The `#[probability]` weights are the shipped odds in percent; the
/// declaration order is the order the cumulative sampler walks them in.
/// `Ord` follows that declaration order too; compare value with [`Rarity::tier`].
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, WeightedEnum,
)]
pub enum Rarity {
    #[probability(0.5)]
    Mythic,
    #[probability(1)]
    Legendary,
    #[probability(2)]
    Special,
    #[probability(8)]
    Epic,
    #[probability(12)]
    Rare,
    #[probability(18)]
    Uncommon,
    #[probability(58.5)]
    Common,
}

impl Rarity {
    pub const COUNT: usize = 7;

    pub const ALL: [Rarity; Self::COUNT] = [
        Rarity::Mythic,
        Rarity::Legendary,
        Rarity::Special,
        Rarity::Epic,
        Rarity::Rare,
        Rarity::Uncommon,
        Rarity::Common,
    ];

    /// Guaranteed by pity.
    pub const TOP: Rarity = Rarity::Mythic;

    /// Never resolves to a catalog item; always pays out currency.
    pub const NO_DROP: Rarity = Rarity::Common;

    /// Value rank. Legendary and Special share a tier.
    pub const fn tier(self) -> u8 {
        match self {
            Rarity::Mythic => 6,
            Rarity::Legendary | Rarity::Special => 5,
            Rarity::Epic => 4,
            Rarity::Rare => 3,
            Rarity::Uncommon => 2,
            Rarity::Common => 1,
        }
    }

    pub const fn is_no_drop(self) -> bool {
        matches!(self, Rarity::Common)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Mythic => "Mythic",
            Rarity::Legendary => "Legendary",
            Rarity::Special => "Special",
            Rarity::Epic => "Epic",
            Rarity::Rare => "Rare",
            Rarity::Uncommon => "Uncommon",
            Rarity::Common => "Common",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownRarity(s.to_string()))
    }
}

/// Economy and display settings for one rarity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityConfig {
    pub display_name: String,
    /// Hex color used by the presentation layer.
    pub color: String,
    /// Currency cost to redeem an item of this rarity.
    pub exchange_price: u32,
    /// Currency granted when a duplicate of this rarity is drawn.
    pub duplicate_reward: u32,
}

impl RarityConfig {
    pub fn new(display_name: &str, color: &str, exchange_price: u32, duplicate_reward: u32) -> Self {
        Self {
            display_name: display_name.to_string(),
            color: color.to_string(),
            exchange_price,
            duplicate_reward,
        }
    }

    /// Shipped economy for `rarity`.
    pub fn default_for(rarity: Rarity) -> Self {
        match rarity {
            Rarity::Mythic => Self::new("传说", "#ef4444", 600, 300),
            Rarity::Legendary => Self::new("史诗", "#eab308", 150, 75),
            Rarity::Special => Self::new("特殊", "#f97316", 150, 75),
            Rarity::Epic => Self::new("稀有", "#a855f7", 50, 25),
            Rarity::Rare => Self::new("罕见", "#3b82f6", 20, 10),
            Rarity::Uncommon => Self::new("优秀", "#22c55e", 10, 5),
            Rarity::Common => Self::new("普通", "#9ca3af", 0, 0),
        }
    }
}

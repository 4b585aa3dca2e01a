//! Static item catalog: pools, items, and per-rarity economy.
//!
//! Built once, then read-only. Lookups return `Option` rather than erroring;
//! a missing id is an ordinary outcome for callers such as the exchange.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::WeightedEnum;
use crate::error::ConfigError;
use crate::rarity::{Rarity, RarityConfig};

/// Pool id carried by currency placeholder items.
pub const PLACEHOLDER_POOL: &str = "common";

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub pool_id: String,
}

impl Item {
    /// Stand-in for draws that pay currency instead of an item.
    ///
    /// `fallback` marks the configuration-anomaly path (a rarity with no items)
    /// as opposed to an ordinary Common roll.
    pub fn currency_placeholder(fallback: bool) -> Self {
        Self {
            id: if fallback { "fallback-stone" } else { "common-stone" }.to_string(),
            name: "棱彩兑换石".to_string(),
            rarity: Rarity::NO_DROP,
            icon: "💎".to_string(),
            description: None,
            pool_id: PLACEHOLDER_POOL.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.pool_id == PLACEHOLDER_POOL && self.rarity.is_no_drop()
    }
}

/// A themed grouping of items. Does not affect sampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pool {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub icon: String,
    pub theme_color: String,
    pub description: String,
    pub item_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    rarities: BTreeMap<String, RarityConfig>,
    #[serde(default)]
    pools: Vec<PoolDef>,
}

/// Pool as written in a catalog file, with its items nested.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub theme_color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Read-only lookup over every pool and item.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    pools: Vec<Pool>,
    by_id: HashMap<String, usize>,
    by_rarity: [Vec<usize>; Rarity::COUNT],
    rarities: [RarityConfig; Rarity::COUNT],
}

impl Catalog {
    /// Assemble a catalog from pool definitions.
    ///
    /// # Errors
    /// * [`ConfigError::MissingRarityConfig`] if any rarity lacks a config.
    /// * [`ConfigError::DuplicatePool`] / [`ConfigError::DuplicateItem`] on
    ///   repeated ids; item ids are unique across all pools.
    pub fn new(
        rarities: BTreeMap<Rarity, RarityConfig>,
        pools: Vec<PoolDef>,
    ) -> Result<Self, ConfigError> {
        let mut rarity_configs = Vec::with_capacity(Rarity::COUNT);
        for rarity in Rarity::ALL {
            let cfg = rarities
                .get(&rarity)
                .cloned()
                .ok_or(ConfigError::MissingRarityConfig(rarity))?;
            rarity_configs.push(cfg);
        }
        let rarities: [RarityConfig; Rarity::COUNT] = rarity_configs
            .try_into()
            .map_err(|_| ConfigError::MissingRarityConfig(Rarity::NO_DROP))?;

        let mut items = Vec::new();
        let mut out_pools = Vec::with_capacity(pools.len());
        let mut by_id = HashMap::new();
        let mut by_rarity: [Vec<usize>; Rarity::COUNT] = Default::default();

        for def in pools {
            if out_pools.iter().any(|p: &Pool| p.id == def.id) {
                return Err(ConfigError::DuplicatePool(def.id));
            }
            let mut item_ids = Vec::with_capacity(def.items.len());
            for item in def.items {
                if by_id.contains_key(&item.id) {
                    return Err(ConfigError::DuplicateItem(item.id));
                }
                let idx = items.len();
                by_id.insert(item.id.clone(), idx);
                if !item.rarity.is_no_drop() {
                    by_rarity[item.rarity.index()].push(idx);
                }
                item_ids.push(item.id.clone());
                items.push(Item {
                    id: item.id,
                    name: item.name,
                    rarity: item.rarity,
                    icon: item.icon,
                    description: item.description,
                    pool_id: def.id.clone(),
                });
            }
            out_pools.push(Pool {
                id: def.id,
                name: def.name,
                name_en: def.name_en,
                icon: def.icon,
                theme_color: def.theme_color,
                description: def.description,
                item_ids,
            });
        }

        Ok(Self {
            items,
            pools: out_pools,
            by_id,
            by_rarity,
            rarities,
        })
    }

    /// Parse a catalog file.
    ///
    /// ```toml
    /// [rarities.Rare]
    /// display_name = "Rare"
    /// color = "#3b82f6"
    /// exchange_price = 20
    /// duplicate_reward = 10
    ///
    /// [[pools]]
    /// id = "jade-sword"
    /// name = "Jade Sword"
    ///
    /// [[pools.items]]
    /// id = "js-rare-1"
    /// name = "Sword Attendant"
    /// rarity = "Rare"
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = toml::from_str(src)?;
        let rarities = file
            .rarities
            .into_iter()
            .map(|(name, cfg)| Ok((name.parse::<Rarity>()?, cfg)))
            .collect::<Result<BTreeMap<_, _>, ConfigError>>()?;
        Self::new(rarities, file.pools)
    }

    pub fn item_by_id(&self, id: &str) -> Option<&Item> {
        self.by_id.get(id).map(|&i| &self.items[i])
    }

    /// Items that can drop at `rarity`. Always empty for the no-drop rarity.
    pub fn items_by_rarity(&self, rarity: Rarity) -> impl ExactSizeIterator<Item = &Item> + '_ {
        self.by_rarity[rarity.index()].iter().map(|&i| &self.items[i])
    }

    /// The `n`-th item of `rarity`, in catalog order.
    pub(crate) fn nth_of_rarity(&self, rarity: Rarity, n: usize) -> Option<&Item> {
        self.by_rarity[rarity.index()]
            .get(n)
            .map(|&i| &self.items[i])
    }

    pub(crate) fn count_of_rarity(&self, rarity: Rarity) -> usize {
        self.by_rarity[rarity.index()].len()
    }

    pub fn rarity_config(&self, rarity: Rarity) -> &RarityConfig {
        &self.rarities[rarity.index()]
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn pool(&self, id: &str) -> Option<&Pool> {
        self.pools.iter().find(|p| p.id == id)
    }

    pub fn items_in_pool<'a>(&'a self, pool_id: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |i| i.pool_id == pool_id)
    }

    /// Items a player can ever own: everything outside the no-drop rarity.
    pub fn collectible_count(&self) -> usize {
        self.by_rarity.iter().map(Vec::len).sum()
    }
}

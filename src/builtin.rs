//! The shipped catalog: four themed pools of eleven items each.

use std::collections::BTreeMap;

use crate::catalog::{Catalog, ItemDef, PoolDef};
use crate::error::ConfigError;
use crate::rarity::{Rarity, RarityConfig};

use crate::rarity::Rarity::{Epic, Legendary, Mythic, Rare, Special, Uncommon};

type ItemRow = (&'static str, &'static str, Rarity, &'static str, Option<&'static str>);

struct PoolRow {
    id: &'static str,
    name: &'static str,
    name_en: &'static str,
    icon: &'static str,
    theme_color: &'static str,
    description: &'static str,
    items: &'static [ItemRow],
}

const POOLS: &[PoolRow] = &[
    PoolRow {
        id: "jade-sword",
        name: "玉剑传说",
        name_en: "Jade Sword",
        icon: "⚔️",
        theme_color: "cyan",
        description: "玉剑传说系列，仙气飘飘",
        items: &[
            ("js-mythic-1", "龙驹仙尊", Mythic, "🐉", Some("玉剑传说至高存在")),
            ("js-legendary-1", "青钢影", Legendary, "🗡️", None),
            ("js-legendary-2", "艾瑞莉娅", Legendary, "💃", None),
            ("js-special-1", "玉剑使者", Special, "🧚", None),
            ("js-epic-1", "御剑师", Epic, "🧙", None),
            ("js-epic-2", "剑客", Epic, "⚔️", None),
            ("js-rare-1", "剑侍", Rare, "🥷", None),
            ("js-rare-2", "修仙者", Rare, "🧘", None),
            ("js-uncommon-1", "剑童", Uncommon, "👦", None),
            ("js-uncommon-2", "小仙", Uncommon, "🧚", None),
            ("js-uncommon-3", "剑灵", Uncommon, "👻", None),
        ],
    },
    PoolRow {
        id: "red-chamber",
        name: "迴梦红楼",
        name_en: "Red Chamber",
        icon: "🌸",
        theme_color: "red",
        description: "红楼梦境，唯美浪漫",
        items: &[
            ("rc-mythic-1", "林黛玉", Mythic, "🌸", Some("潇湘妃子")),
            ("rc-legendary-1", "贾宝玉", Legendary, "💎", None),
            ("rc-legendary-2", "薛宝钗", Legendary, "🦋", None),
            ("rc-special-1", "王熙凤", Special, "👑", None),
            ("rc-epic-1", "史湘云", Epic, "🌺", None),
            ("rc-epic-2", "贾探春", Epic, "🎋", None),
            ("rc-rare-1", "妙玉", Rare, "🍵", None),
            ("rc-rare-2", "迎春", Rare, "🌼", None),
            ("rc-uncommon-1", "惜春", Uncommon, "🎨", None),
            ("rc-uncommon-2", "李纨", Uncommon, "📖", None),
            ("rc-uncommon-3", "秦可卿", Uncommon, "🌙", None),
        ],
    },
    PoolRow {
        id: "five-blessings",
        name: "五福临门",
        name_en: "Five Blessings",
        icon: "🧧",
        theme_color: "gold",
        description: "新春贺岁，五福临门",
        items: &[
            ("fb-mythic-1", "姻缘喜神阿狸", Mythic, "🦊", Some("带来幸福的九尾狐")),
            ("fb-legendary-1", "财神爷", Legendary, "💰", None),
            ("fb-legendary-2", "福禄寿", Legendary, "👴", None),
            ("fb-special-1", "灶王爷", Special, "🔥", None),
            ("fb-epic-1", "门神", Epic, "🚪", None),
            ("fb-epic-2", "年兽", Epic, "🦁", None),
            ("fb-rare-1", "福娃", Rare, "👶", None),
            ("fb-rare-2", "春神", Rare, "🌱", None),
            ("fb-uncommon-1", "灯笼精灵", Uncommon, "🏮", None),
            ("fb-uncommon-2", "鞭炮小子", Uncommon, "🧨", None),
            ("fb-uncommon-3", "饺子宝宝", Uncommon, "🥟", None),
        ],
    },
    PoolRow {
        id: "moon-child",
        name: "月华之子",
        name_en: "Moon Child",
        icon: "🌙",
        theme_color: "indigo",
        description: "月光之下，神秘力量",
        items: &[
            ("mc-mythic-1", "厄斐琉斯", Mythic, "🌙", Some("皎月教派的信徒")),
            ("mc-legendary-1", "黛安娜", Legendary, "🌑", None),
            ("mc-legendary-2", "雷恩加尔", Legendary, "🦁", None),
            ("mc-special-1", "塔里克", Special, "💎", None),
            ("mc-epic-1", "索拉卡", Epic, "⭐", None),
            ("mc-epic-2", "卡尔玛", Epic, "☯️", None),
            ("mc-rare-1", "易大师", Rare, "⚔️", None),
            ("mc-rare-2", "申", Rare, "🥷", None),
            ("mc-uncommon-1", "凯南", Uncommon, "⚡", None),
            ("mc-uncommon-2", "李青", Uncommon, "🦶", None),
            ("mc-uncommon-3", "劫", Uncommon, "🥷", None),
        ],
    },
];

/// Shipped economy for every rarity.
pub fn default_rarities() -> BTreeMap<Rarity, RarityConfig> {
    Rarity::ALL
        .into_iter()
        .map(|r| (r, RarityConfig::default_for(r)))
        .collect()
}

fn pool_defs() -> Vec<PoolDef> {
    POOLS
        .iter()
        .map(|pool| PoolDef {
            id: pool.id.to_string(),
            name: pool.name.to_string(),
            name_en: pool.name_en.to_string(),
            icon: pool.icon.to_string(),
            theme_color: pool.theme_color.to_string(),
            description: pool.description.to_string(),
            items: pool
                .items
                .iter()
                .map(|&(id, name, rarity, icon, description)| ItemDef {
                    id: id.to_string(),
                    name: name.to_string(),
                    rarity,
                    icon: icon.to_string(),
                    description: description.map(str::to_string),
                })
                .collect(),
        })
        .collect()
}

impl Catalog {
    /// The shipped pools with the default rarity economy.
    pub fn builtin() -> Result<Self, ConfigError> {
        Catalog::new(default_rarities(), pool_defs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.pools().len(), 4);
        assert_eq!(catalog.items().len(), 44);
        assert_eq!(catalog.collectible_count(), 44);
        assert_eq!(catalog.items_by_rarity(Rarity::Mythic).len(), 4);
        assert_eq!(catalog.items_by_rarity(Rarity::Legendary).len(), 8);
        assert_eq!(catalog.items_by_rarity(Rarity::Special).len(), 4);
        assert_eq!(catalog.items_by_rarity(Rarity::Uncommon).len(), 12);
        assert_eq!(catalog.items_by_rarity(Rarity::Common).len(), 0);
    }

    #[test]
    fn every_drop_rarity_has_items() {
        let catalog = Catalog::builtin().unwrap();
        for rarity in Rarity::ALL.into_iter().filter(|r| !r.is_no_drop()) {
            assert_ne!(catalog.items_by_rarity(rarity).len(), 0, "{rarity} is empty");
        }
    }

    #[test]
    fn pool_metadata_survives() {
        let catalog = Catalog::builtin().unwrap();
        let pool = catalog.pool("five-blessings").unwrap();
        assert_eq!(pool.name_en, "Five Blessings");
        assert_eq!(pool.item_ids.len(), 11);
        let fox = catalog.item_by_id("fb-mythic-1").unwrap();
        assert_eq!(fox.pool_id, "five-blessings");
        assert_eq!(fox.description.as_deref(), Some("带来幸福的九尾狐"));
    }
}

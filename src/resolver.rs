use rand::Rng;

use crate::catalog::{Catalog, Item};
use crate::rarity::Rarity;
use crate::sampler::UniformSampler;

/// Pick a concrete item of `rarity`, uniformly among the catalog's items.
///
/// `None` for the no-drop rarity by contract, and for any other rarity with
/// no items configured. Callers pay out currency in both cases.
pub fn resolve<'c, R: Rng + ?Sized>(
    catalog: &'c Catalog,
    rarity: Rarity,
    rng: &mut R,
) -> Option<&'c Item> {
    if rarity.is_no_drop() {
        return None;
    }
    let sampler = UniformSampler::new(catalog.count_of_rarity(rarity))?;
    catalog.nth_of_rarity(rarity, sampler.sample_index(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::default_rarities;
    use crate::catalog::{ItemDef, PoolDef};
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashMap;

    fn rare_only() -> Catalog {
        let items = ["r1", "r2", "r3"]
            .into_iter()
            .map(|id| ItemDef {
                id: id.to_string(),
                name: id.to_string(),
                rarity: Rarity::Rare,
                icon: String::new(),
                description: None,
            })
            .collect();
        let pool = PoolDef {
            id: "p".to_string(),
            name: "p".to_string(),
            name_en: String::new(),
            icon: String::new(),
            theme_color: String::new(),
            description: String::new(),
            items,
        };
        Catalog::new(default_rarities(), vec![pool]).unwrap()
    }

    #[test]
    fn no_drop_rarity_resolves_to_nothing() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(resolve(&catalog, Rarity::Common, &mut rng).is_none());
    }

    #[test]
    fn empty_rarity_resolves_to_nothing() {
        let catalog = rare_only();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(resolve(&catalog, Rarity::Mythic, &mut rng).is_none());
    }

    #[test]
    fn picks_only_matching_rarity_roughly_uniformly() {
        let catalog = rare_only();
        let mut rng = StdRng::seed_from_u64(11);
        let mut hist: HashMap<&str, usize> = HashMap::new();
        for _ in 0..30_000 {
            let item = resolve(&catalog, Rarity::Rare, &mut rng).unwrap();
            assert_eq!(item.rarity, Rarity::Rare);
            *hist.entry(item.id.as_str()).or_default() += 1;
        }
        assert_eq!(hist.len(), 3);
        for (id, count) in hist {
            let emp = count as f64 / 30_000.0;
            assert!((emp - 1.0 / 3.0).abs() < 0.02, "{id} emp={emp}");
        }
    }
}

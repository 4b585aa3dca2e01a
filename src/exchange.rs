//! Currency-for-item redemption and the shop listing built on it.

use serde::Serialize;
use tracing::info;

use crate::catalog::{Catalog, Item};
use crate::error::ExchangeError;
use crate::state::PlayerState;

/// Redeem `item_id` for its rarity's exchange price.
///
/// Every check runs before anything is mutated, so a refusal leaves
/// `state` exactly as it was. Returns the price paid.
pub fn try_redeem(
    catalog: &Catalog,
    state: &mut PlayerState,
    item_id: &str,
) -> Result<u32, ExchangeError> {
    let item = catalog
        .item_by_id(item_id)
        .ok_or_else(|| ExchangeError::UnknownItem(item_id.to_string()))?;
    if state.owns(&item.id) {
        return Err(ExchangeError::AlreadyOwned(item.id.clone()));
    }
    let price = catalog.rarity_config(item.rarity).exchange_price;
    if state.currency < price {
        return Err(ExchangeError::InsufficientCurrency {
            price,
            balance: state.currency,
        });
    }

    state.currency -= price;
    state.inventory.insert(item.id.clone());
    info!(item = %item.id, price, balance = state.currency, "redeemed");
    Ok(price)
}

/// [`try_redeem`] collapsed to success or failure.
pub fn redeem(catalog: &Catalog, state: &mut PlayerState, item_id: &str) -> bool {
    try_redeem(catalog, state, item_id).is_ok()
}

/// One row of the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopItem<'c> {
    pub item: &'c Item,
    pub owned: bool,
    pub can_afford: bool,
    pub price: u32,
}

/// Every redeemable item in catalog order, with ownership and affordability.
pub fn shop<'c>(catalog: &'c Catalog, state: &PlayerState) -> Vec<ShopItem<'c>> {
    catalog
        .items()
        .iter()
        .filter(|item| !item.rarity.is_no_drop())
        .map(|item| {
            let price = catalog.rarity_config(item.rarity).exchange_price;
            ShopItem {
                item,
                owned: state.owns(&item.id),
                can_afford: state.currency >= price,
                price,
            }
        })
        .collect()
}

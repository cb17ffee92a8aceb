//! # Market Prices
//!
//! A [`PriceMap`] turns material counts into gold. Unpriced items are worth
//! nothing, silently.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::reward::ContentReward;

/// Average market price per item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceMap {
    prices: BTreeMap<Item, f64>,
}

impl PriceMap {
    /// Creates an empty price map (everything free).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Price of one unit of `item`, 0 when unknown.
    #[inline]
    #[must_use]
    pub fn price(&self, item: Item) -> f64 {
        self.prices.get(&item).copied().unwrap_or(0.0)
    }

    /// Sets the price of `item`, replacing any previous one.
    pub fn set(&mut self, item: Item, price: f64) {
        debug_assert!(price >= 0.0, "negative price {price} for {item}");
        self.prices.insert(item, price);
    }

    /// Builder form of [`Self::set`].
    #[must_use]
    pub fn with(mut self, item: Item, price: f64) -> Self {
        self.set(item, price);
        self
    }

    /// Overlays `other` on top of this map. Prices in `other` win.
    pub fn merge(&mut self, other: &Self) {
        for (&item, &price) in &other.prices {
            self.prices.insert(item, price);
        }
    }

    /// Number of priced items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// True when no item is priced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Priced items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Item, f64)> + '_ {
        self.prices.iter().map(|(&item, &price)| (item, price))
    }

    fn value_of(&self, counts: &BTreeMap<Item, u32>) -> f64 {
        counts
            .iter()
            .map(|(&item, &count)| f64::from(count) * self.price(item))
            .sum()
    }
}

impl FromIterator<(Item, f64)> for PriceMap {
    fn from_iter<I: IntoIterator<Item = (Item, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (item, price) in iter {
            map.set(item, price);
        }
        map
    }
}

/// Gold value of the sellable fields of `reward`:
/// gold, weapon/armor/leap stones at market price, and gems at face value.
///
/// Shards are not part of this sum.
#[must_use]
pub fn tradable_gold(reward: &ContentReward, prices: &PriceMap) -> f64 {
    reward.gold as f64
        + prices.value_of(&reward.weapon_stones)
        + prices.value_of(&reward.armor_stones)
        + prices.value_of(&reward.leap_stones)
        + reward.gems.values().sum::<f64>()
}

/// Gold value of the bound fields of `reward`:
/// shards and weapon/armor/leap stones at market price.
///
/// Pass a projection from [`crate::reward::bound_part`] so stones are not
/// counted on both sides.
#[must_use]
pub fn bound_gold(reward: &ContentReward, prices: &PriceMap) -> f64 {
    prices.value_of(&reward.shards)
        + prices.value_of(&reward.weapon_stones)
        + prices.value_of(&reward.armor_stones)
        + prices.value_of(&reward.leap_stones)
}

/// Everything in `reward` priced as one number. Used when browsing tables.
#[must_use]
pub fn gold_value(reward: &ContentReward, prices: &PriceMap) -> f64 {
    tradable_gold(reward, prices) + prices.value_of(&reward.shards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_price_is_zero() {
        let prices = PriceMap::new().with(Item::HonorShard, 0.5);
        assert_eq!(prices.price(Item::HonorShard), 0.5);
        assert_eq!(prices.price(Item::DestinyShard), 0.0);
    }

    #[test]
    fn test_tradable_gold_formula() {
        let prices = PriceMap::new()
            .with(Item::DestinyDestructionStone, 10.0)
            .with(Item::DestinyGuardianStone, 2.0)
            .with(Item::DestinyLeapstone, 30.0)
            .with(Item::DestinyShard, 1.0);
        let reward = ContentReward::new()
            .with_gold(100)
            .with_item(Item::DestinyDestructionStone, 3)
            .with_item(Item::DestinyGuardianStone, 5)
            .with_item(Item::DestinyLeapstone, 1)
            .with_item(Item::DestinyShard, 1000)
            .with_gems(4, 12.5);

        // 100 + 30 + 10 + 30 + 12.5, shards excluded
        assert_eq!(tradable_gold(&reward, &prices), 182.5);
        // 1000 + 30 + 10 + 30, gold and gems excluded
        assert_eq!(bound_gold(&reward, &prices), 1070.0);
        assert_eq!(gold_value(&reward, &prices), 1182.5);
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = PriceMap::new()
            .with(Item::HonorShard, 0.1)
            .with(Item::ProtectionStone, 1.0);
        base.merge(&PriceMap::new().with(Item::HonorShard, 0.2));
        assert_eq!(base.price(Item::HonorShard), 0.2);
        assert_eq!(base.price(Item::ProtectionStone), 1.0);
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_serializes_by_symbol() {
        let prices = PriceMap::new().with(Item::GemTier4, 3.0);
        let json = serde_json::to_string(&prices).unwrap();
        assert_eq!(json, r#"{"GEM_TIER_4":3.0}"#);
    }
}

//! # Reward Bundles
//!
//! A [`ContentReward`] is what one clear of a piece of content pays out:
//! raw gold, four kinds of materials and gems. Bundles add up key by key.
//!
//! Which parts of a bundle can be sold depends on the content it came from.
//! That rule lives in [`tradable_part`] / [`bound_part`], not on the bundle.
//!
//! ```text
//!                gold  gems  weapon  armor  leap  shards
//! Raid            T     T      B       B     B      B
//! Chaos Dungeon   T     T      T       T     B      B
//! Guardian        T     T      T       T     T      B
//! ```

use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::item::{Item, MaterialFamily};

/// Gem tier key, e.g. `3` or `4`.
pub type GemTier = u8;

/// Content a reward is paid out by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Weekly raids.
    Raid,
    /// Daily Chaos Dungeon.
    ChaosDungeon,
    /// Daily Guardian raid.
    Guardian,
}

impl ContentType {
    /// Every content type.
    pub const ALL: [Self; 3] = [Self::Raid, Self::ChaosDungeon, Self::Guardian];
}

/// An additive reward bundle.
///
/// Gems are stored as gold-equivalent amounts per tier and are never priced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentReward {
    /// Raw gold.
    #[serde(default)]
    pub gold: u64,
    /// Leapstones by item.
    #[serde(default)]
    pub leap_stones: BTreeMap<Item, u32>,
    /// Weapon stones by item.
    #[serde(default)]
    pub weapon_stones: BTreeMap<Item, u32>,
    /// Armor stones by item.
    #[serde(default)]
    pub armor_stones: BTreeMap<Item, u32>,
    /// Shards by item.
    #[serde(default)]
    pub shards: BTreeMap<Item, u32>,
    /// Gold-equivalent gem amount by tier.
    #[serde(default)]
    pub gems: BTreeMap<GemTier, f64>,
}

impl ContentReward {
    /// The empty bundle. Identity of [`combine`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds raw gold.
    #[must_use]
    pub fn with_gold(mut self, gold: u64) -> Self {
        self.gold += gold;
        self
    }

    /// Adds `count` of `item` to the slot its family belongs to.
    ///
    /// Gem items go to [`Self::gems`] under their tier, with `count` taken
    /// as the gold-equivalent amount.
    #[must_use]
    pub fn with_item(mut self, item: Item, count: u32) -> Self {
        let slot = match item.family() {
            MaterialFamily::WeaponStone => &mut self.weapon_stones,
            MaterialFamily::ArmorStone => &mut self.armor_stones,
            MaterialFamily::LeapStone => &mut self.leap_stones,
            MaterialFamily::Shard => &mut self.shards,
            MaterialFamily::Gem => {
                let tier = item.gem_tier().unwrap_or_default();
                return self.with_gems(tier, f64::from(count));
            }
        };
        *slot.entry(item).or_insert(0) += count;
        self
    }

    /// Adds a gold-equivalent gem amount for `tier`.
    #[must_use]
    pub fn with_gems(mut self, tier: GemTier, amount: f64) -> Self {
        debug_assert!(amount >= 0.0, "negative gem amount {amount} for tier {tier}");
        *self.gems.entry(tier).or_insert(0.0) += amount;
        self
    }

    /// True when every field is zero or absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gold == 0
            && self.leap_stones.values().all(|&c| c == 0)
            && self.weapon_stones.values().all(|&c| c == 0)
            && self.armor_stones.values().all(|&c| c == 0)
            && self.shards.values().all(|&c| c == 0)
            && self.gems.values().all(|&a| a == 0.0)
    }

    /// Count of `item` in this bundle, 0 when absent.
    #[must_use]
    pub fn count(&self, item: Item) -> u32 {
        let slot = match item.family() {
            MaterialFamily::WeaponStone => &self.weapon_stones,
            MaterialFamily::ArmorStone => &self.armor_stones,
            MaterialFamily::LeapStone => &self.leap_stones,
            MaterialFamily::Shard => &self.shards,
            MaterialFamily::Gem => return 0,
        };
        slot.get(&item).copied().unwrap_or(0)
    }

    /// Every priced material with its count, in a fixed order.
    pub fn materials(&self) -> impl Iterator<Item = (Item, u32)> + '_ {
        self.weapon_stones
            .iter()
            .chain(&self.armor_stones)
            .chain(&self.leap_stones)
            .chain(&self.shards)
            .map(|(&item, &count)| (item, count))
    }
}

fn merge_counts(first: &BTreeMap<Item, u32>, second: &BTreeMap<Item, u32>) -> BTreeMap<Item, u32> {
    let mut merged = first.clone();
    for (&item, &count) in second {
        *merged.entry(item).or_insert(0) += count;
    }
    merged
}

fn merge_gems(first: &BTreeMap<GemTier, f64>, second: &BTreeMap<GemTier, f64>) -> BTreeMap<GemTier, f64> {
    let mut merged = first.clone();
    for (&tier, &amount) in second {
        *merged.entry(tier).or_insert(0.0) += amount;
    }
    merged
}

/// Key-by-key sum of two bundles. Missing keys count as zero.
#[must_use]
pub fn combine(a: &ContentReward, b: &ContentReward) -> ContentReward {
    ContentReward {
        gold: a.gold + b.gold,
        leap_stones: merge_counts(&a.leap_stones, &b.leap_stones),
        weapon_stones: merge_counts(&a.weapon_stones, &b.weapon_stones),
        armor_stones: merge_counts(&a.armor_stones, &b.armor_stones),
        shards: merge_counts(&a.shards, &b.shards),
        gems: merge_gems(&a.gems, &b.gems),
    }
}

impl Add for ContentReward {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        combine(&self, &other)
    }
}

impl Add<&ContentReward> for &ContentReward {
    type Output = ContentReward;

    fn add(self, other: &ContentReward) -> ContentReward {
        combine(self, other)
    }
}

impl AddAssign<&ContentReward> for ContentReward {
    fn add_assign(&mut self, other: &ContentReward) {
        *self = combine(self, other);
    }
}

impl Sum for ContentReward {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, r| combine(&acc, &r))
    }
}

impl<'a> Sum<&'a ContentReward> for ContentReward {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, r| combine(&acc, r))
    }
}

/// The part of `reward` that can be sold on the market when it comes from
/// `content`.
#[must_use]
pub fn tradable_part(reward: &ContentReward, content: ContentType) -> ContentReward {
    let base = ContentReward {
        gold: reward.gold,
        gems: reward.gems.clone(),
        ..ContentReward::default()
    };
    match content {
        ContentType::Raid => base,
        ContentType::ChaosDungeon => ContentReward {
            weapon_stones: reward.weapon_stones.clone(),
            armor_stones: reward.armor_stones.clone(),
            ..base
        },
        ContentType::Guardian => ContentReward {
            weapon_stones: reward.weapon_stones.clone(),
            armor_stones: reward.armor_stones.clone(),
            leap_stones: reward.leap_stones.clone(),
            ..base
        },
    }
}

/// The part of `reward` that is bound to the character when it comes from
/// `content`.
#[must_use]
pub fn bound_part(reward: &ContentReward, content: ContentType) -> ContentReward {
    match content {
        ContentType::Raid => ContentReward {
            leap_stones: reward.leap_stones.clone(),
            weapon_stones: reward.weapon_stones.clone(),
            armor_stones: reward.armor_stones.clone(),
            shards: reward.shards.clone(),
            ..ContentReward::default()
        },
        ContentType::ChaosDungeon => ContentReward {
            leap_stones: reward.leap_stones.clone(),
            shards: reward.shards.clone(),
            ..ContentReward::default()
        },
        ContentType::Guardian => ContentReward {
            shards: reward.shards.clone(),
            ..ContentReward::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_bundle() -> ContentReward {
        ContentReward::new()
            .with_gold(1000)
            .with_item(Item::DestinyLeapstone, 5)
            .with_item(Item::DestinyDestructionStone, 100)
            .with_item(Item::DestinyGuardianStone, 300)
            .with_item(Item::DestinyShard, 4000)
            .with_gems(4, 250.0)
    }

    #[test]
    fn test_with_item_routes_by_family() {
        let r = full_bundle();
        assert_eq!(r.leap_stones[&Item::DestinyLeapstone], 5);
        assert_eq!(r.weapon_stones[&Item::DestinyDestructionStone], 100);
        assert_eq!(r.armor_stones[&Item::DestinyGuardianStone], 300);
        assert_eq!(r.shards[&Item::DestinyShard], 4000);
        assert_eq!(r.gems[&4], 250.0);

        let g = ContentReward::new().with_item(Item::GemTier3, 40);
        assert_eq!(g.gems[&3], 40.0);
    }

    #[test]
    fn test_combine_unions_keys() {
        let a = ContentReward::new()
            .with_gold(10)
            .with_item(Item::HonorShard, 100);
        let b = ContentReward::new()
            .with_item(Item::HonorShard, 50)
            .with_item(Item::DestinyShard, 7)
            .with_gems(3, 1.5);

        let c = combine(&a, &b);
        assert_eq!(c.gold, 10);
        assert_eq!(c.count(Item::HonorShard), 150);
        assert_eq!(c.count(Item::DestinyShard), 7);
        assert_eq!(c.gems[&3], 1.5);
        assert_eq!(c, b.clone() + a.clone());
    }

    #[test]
    fn test_empty_is_identity() {
        let r = full_bundle();
        assert_eq!(combine(&r, &ContentReward::new()), r);
        assert_eq!(combine(&ContentReward::new(), &r), r);
        assert!(ContentReward::new().is_empty());
        assert!(!r.is_empty());
    }

    #[test]
    fn test_count_absent_is_zero() {
        let r = ContentReward::new();
        assert_eq!(r.count(Item::ProtectionStone), 0);
        assert_eq!(r.count(Item::GemTier4), 0);
    }

    #[test]
    fn test_raid_partition() {
        let r = full_bundle();
        let t = tradable_part(&r, ContentType::Raid);
        let b = bound_part(&r, ContentType::Raid);

        assert_eq!(t.gold, 1000);
        assert_eq!(t.gems, r.gems);
        assert!(t.weapon_stones.is_empty() && t.leap_stones.is_empty() && t.shards.is_empty());
        assert_eq!(b.gold, 0);
        assert!(b.gems.is_empty());
        assert_eq!(b.weapon_stones, r.weapon_stones);
        assert_eq!(b.shards, r.shards);
    }

    #[test]
    fn test_chaos_partition() {
        let r = full_bundle();
        let t = tradable_part(&r, ContentType::ChaosDungeon);
        let b = bound_part(&r, ContentType::ChaosDungeon);

        assert_eq!(t.weapon_stones, r.weapon_stones);
        assert_eq!(t.armor_stones, r.armor_stones);
        assert!(t.leap_stones.is_empty() && t.shards.is_empty());
        assert_eq!(b.leap_stones, r.leap_stones);
        assert_eq!(b.shards, r.shards);
        assert!(b.weapon_stones.is_empty() && b.armor_stones.is_empty());
    }

    #[test]
    fn test_guardian_partition() {
        let r = full_bundle();
        let t = tradable_part(&r, ContentType::Guardian);
        let b = bound_part(&r, ContentType::Guardian);

        assert_eq!(t.leap_stones, r.leap_stones);
        assert!(t.shards.is_empty());
        assert_eq!(b, ContentReward { shards: r.shards.clone(), ..ContentReward::default() });
    }

    #[test]
    fn test_partition_recombines_to_whole() {
        let r = full_bundle();
        for content in ContentType::ALL {
            let rebuilt = combine(&tradable_part(&r, content), &bound_part(&r, content));
            assert_eq!(rebuilt, r, "{content:?} drops or duplicates a field");
        }
    }
}

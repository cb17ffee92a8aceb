//! # Content Reward Tables
//!
//! Three level-gated tables: [`ChaosDungeon`], [`Guardian`] and [`Raid`].
//!
//! Every table is a closed enum. Rewards are built once on first use and
//! shared for the life of the process.
//!
//! ## Tier selection
//!
//! ```text
//! level 1625.0
//!   Guardian:  1700 ✗  1680 ✗  1640 ✗  1630 ✗  1610 ✓  1580 ✓ ...
//!                                             ^^^^ highest qualifying
//!   Raid:      1720 ✗ ... 1620 ✓  1610 ✓  1600 ✓   (descending, truncated)
//! ```
//!
//! Selection scans the whole table and compares minimum levels. The
//! declaration order of the variants carries no meaning.

mod chaos;
mod guardian;
mod raid;

use std::collections::BTreeMap;

pub use chaos::ChaosDungeon;
pub use guardian::Guardian;
pub use raid::{Raid, DEFAULT_RAID_CLEARS, MAX_RAIDS_PER_CHARACTER};

use crate::item::Item;
use crate::reward::ContentReward;

/// The reward of the NULL tier: returned when a character qualifies for
/// nothing.
pub static EMPTY_REWARD: ContentReward = ContentReward {
    gold: 0,
    leap_stones: BTreeMap::new(),
    weapon_stones: BTreeMap::new(),
    armor_stones: BTreeMap::new(),
    shards: BTreeMap::new(),
    gems: BTreeMap::new(),
};

/// A level-gated row of a reward table.
pub trait RewardTier: Copy + Eq + std::fmt::Debug + 'static {
    /// Every tier of the table.
    const ALL: &'static [Self];

    /// Lowest item level that may enter this tier.
    fn minimum_level(self) -> u32;

    /// Display name.
    fn display_name(self) -> &'static str;

    /// True if a character at `level` may enter this tier.
    #[inline]
    fn is_available_at(self, level: f64) -> bool {
        f64::from(self.minimum_level()) <= level
    }
}

/// The highest tier a character at `level` qualifies for.
#[must_use]
pub fn highest_qualifying<T: RewardTier>(level: f64) -> Option<T> {
    T::ALL
        .iter()
        .copied()
        .filter(|tier| tier.is_available_at(level))
        .max_by_key(|tier| tier.minimum_level())
}

/// Every tier a character at `level` qualifies for, highest first.
#[must_use]
pub fn qualifying_descending<T: RewardTier>(level: f64) -> Vec<T> {
    let mut tiers: Vec<T> = T::ALL
        .iter()
        .copied()
        .filter(|tier| tier.is_available_at(level))
        .collect();
    tiers.sort_by(|a, b| b.minimum_level().cmp(&a.minimum_level()));
    tiers
}

/// Every tier of a table, highest first.
#[must_use]
pub fn tiers_descending<T: RewardTier>() -> Vec<T> {
    qualifying_descending(f64::INFINITY)
}

/// A material generation. Each generation has its own stones and shards.
#[derive(Clone, Copy, Debug)]
enum Era {
    /// 1415 - 1475
    Crystal,
    /// 1490 - 1560
    Obliteration,
    /// 1580 - 1630
    Refined,
    /// 1640 and up
    Destiny,
}

impl Era {
    const fn weapon_stone(self) -> Item {
        match self {
            Self::Crystal => Item::DestructionStoneCrystal,
            Self::Obliteration => Item::ObliterationStone,
            Self::Refined => Item::RefinedObliterationStone,
            Self::Destiny => Item::DestinyDestructionStone,
        }
    }

    const fn armor_stone(self) -> Item {
        match self {
            Self::Crystal => Item::GuardianStoneCrystal,
            Self::Obliteration => Item::ProtectionStone,
            Self::Refined => Item::RefinedProtectionStone,
            Self::Destiny => Item::DestinyGuardianStone,
        }
    }

    const fn leap_stone(self) -> Item {
        match self {
            Self::Crystal => Item::GreatHonorLeapstone,
            Self::Obliteration => Item::MarvelousHonorLeapstone,
            Self::Refined => Item::RadiantHonorLeapstone,
            Self::Destiny => Item::DestinyLeapstone,
        }
    }

    const fn shard(self) -> Item {
        match self {
            Self::Destiny => Item::DestinyShard,
            _ => Item::HonorShard,
        }
    }

    /// Bundle of this era's materials. Zero counts are left out.
    fn materials(self, weapon: u32, armor: u32, leap: u32, shards: u32) -> ContentReward {
        [
            (self.weapon_stone(), weapon),
            (self.armor_stone(), armor),
            (self.leap_stone(), leap),
            (self.shard(), shards),
        ]
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .fold(ContentReward::new(), |reward, (item, count)| reward.with_item(item, count))
    }
}

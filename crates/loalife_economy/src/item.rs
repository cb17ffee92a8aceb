//! # Item Catalog
//!
//! The closed set of refining materials and gems that rewards are paid in.
//! Items are compile-time constants; nothing registers new ones at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Market identifier used by items that are not listed on the market.
pub const DEFAULT_ID: u32 = 0;

/// Broad item category, as the market groups them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    /// Honing materials (stones, leapstones, shards).
    RefiningMaterial,
    /// Gems.
    Gem,
}

/// Which slot of a reward bundle an item is paid into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialFamily {
    /// Weapon honing stones.
    WeaponStone,
    /// Armor honing stones.
    ArmorStone,
    /// Leapstones.
    LeapStone,
    /// Shards.
    Shard,
    /// Gems, tracked by tier.
    Gem,
}

/// A material kind.
///
/// The serialized form is the symbolic name the market feed uses
/// (`DESTINY_DESTRUCTION_STONE`, `GEM_TIER_4`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Item {
    /// 운명의 파괴석
    DestinyDestructionStone,
    /// 정제된 파괴강석
    RefinedObliterationStone,
    /// 파괴강석
    ObliterationStone,
    /// 파괴석 결정
    DestructionStoneCrystal,

    /// 운명의 수호석
    DestinyGuardianStone,
    /// 정제된 수호강석
    RefinedProtectionStone,
    /// 수호강석
    ProtectionStone,
    /// 수호석 결정
    GuardianStoneCrystal,

    /// 운명의 파편
    DestinyShard,
    /// 명예의 파편
    HonorShard,

    /// 운명의 돌파석
    DestinyLeapstone,
    /// 찬란한 명예의 돌파석
    RadiantHonorLeapstone,
    /// 경이로운 명예의 돌파석
    MarvelousHonorLeapstone,
    /// 위대한 명예의 돌파석
    GreatHonorLeapstone,

    /// 1레벨 멸화의 보석
    #[serde(rename = "GEM_TIER_3")]
    GemTier3,
    /// 1레벨 겁화의 보석
    #[serde(rename = "GEM_TIER_4")]
    GemTier4,
}

impl Item {
    /// Every item, in catalog order.
    pub const ALL: [Self; 16] = [
        Self::DestinyDestructionStone,
        Self::RefinedObliterationStone,
        Self::ObliterationStone,
        Self::DestructionStoneCrystal,
        Self::DestinyGuardianStone,
        Self::RefinedProtectionStone,
        Self::ProtectionStone,
        Self::GuardianStoneCrystal,
        Self::DestinyShard,
        Self::HonorShard,
        Self::DestinyLeapstone,
        Self::RadiantHonorLeapstone,
        Self::MarvelousHonorLeapstone,
        Self::GreatHonorLeapstone,
        Self::GemTier3,
        Self::GemTier4,
    ];

    /// Symbolic identifier, matching the serialized form.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::DestinyDestructionStone => "DESTINY_DESTRUCTION_STONE",
            Self::RefinedObliterationStone => "REFINED_OBLITERATION_STONE",
            Self::ObliterationStone => "OBLITERATION_STONE",
            Self::DestructionStoneCrystal => "DESTRUCTION_STONE_CRYSTAL",
            Self::DestinyGuardianStone => "DESTINY_GUARDIAN_STONE",
            Self::RefinedProtectionStone => "REFINED_PROTECTION_STONE",
            Self::ProtectionStone => "PROTECTION_STONE",
            Self::GuardianStoneCrystal => "GUARDIAN_STONE_CRYSTAL",
            Self::DestinyShard => "DESTINY_SHARD",
            Self::HonorShard => "HONOR_SHARD",
            Self::DestinyLeapstone => "DESTINY_LEAPSTONE",
            Self::RadiantHonorLeapstone => "RADIANT_HONOR_LEAPSTONE",
            Self::MarvelousHonorLeapstone => "MARVELOUS_HONOR_LEAPSTONE",
            Self::GreatHonorLeapstone => "GREAT_HONOR_LEAPSTONE",
            Self::GemTier3 => "GEM_TIER_3",
            Self::GemTier4 => "GEM_TIER_4",
        }
    }

    /// In-game display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::DestinyDestructionStone => "운명의 파괴석",
            Self::RefinedObliterationStone => "정제된 파괴강석",
            Self::ObliterationStone => "파괴강석",
            Self::DestructionStoneCrystal => "파괴석 결정",
            Self::DestinyGuardianStone => "운명의 수호석",
            Self::RefinedProtectionStone => "정제된 수호강석",
            Self::ProtectionStone => "수호강석",
            Self::GuardianStoneCrystal => "수호석 결정",
            Self::DestinyShard => "운명의 파편",
            Self::HonorShard => "명예의 파편",
            Self::DestinyLeapstone => "운명의 돌파석",
            Self::RadiantHonorLeapstone => "찬란한 명예의 돌파석",
            Self::MarvelousHonorLeapstone => "경이로운 명예의 돌파석",
            Self::GreatHonorLeapstone => "위대한 명예의 돌파석",
            Self::GemTier3 => "1레벨 멸화의 보석",
            Self::GemTier4 => "1레벨 겁화의 보석",
        }
    }

    /// Market identifier. Only used to correlate with external data.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::DestinyDestructionStone => 66_102_006,
            Self::RefinedObliterationStone => 66_102_005,
            Self::ObliterationStone => 66_102_004,
            Self::DestructionStoneCrystal => 66_102_003,
            Self::DestinyGuardianStone => 66_102_106,
            Self::RefinedProtectionStone => 66_102_105,
            Self::ProtectionStone => 66_102_104,
            Self::GuardianStoneCrystal => 66_102_103,
            Self::DestinyShard => 66_130_141,
            Self::HonorShard => 66_130_131,
            Self::DestinyLeapstone => 66_110_225,
            Self::RadiantHonorLeapstone => 66_110_224,
            Self::MarvelousHonorLeapstone => 66_110_223,
            Self::GreatHonorLeapstone => 66_110_222,
            Self::GemTier3 | Self::GemTier4 => DEFAULT_ID,
        }
    }

    /// Market category.
    #[must_use]
    pub const fn category(self) -> ItemCategory {
        match self {
            Self::GemTier3 | Self::GemTier4 => ItemCategory::Gem,
            _ => ItemCategory::RefiningMaterial,
        }
    }

    /// How many units the market sells per bundle. Informational only.
    #[must_use]
    pub const fn bundle_size(self) -> u32 {
        match self.family() {
            MaterialFamily::WeaponStone | MaterialFamily::ArmorStone => 10,
            MaterialFamily::Shard => 1000,
            MaterialFamily::LeapStone | MaterialFamily::Gem => 1,
        }
    }

    /// The reward slot this item belongs to.
    #[must_use]
    pub const fn family(self) -> MaterialFamily {
        match self {
            Self::DestinyDestructionStone
            | Self::RefinedObliterationStone
            | Self::ObliterationStone
            | Self::DestructionStoneCrystal => MaterialFamily::WeaponStone,
            Self::DestinyGuardianStone
            | Self::RefinedProtectionStone
            | Self::ProtectionStone
            | Self::GuardianStoneCrystal => MaterialFamily::ArmorStone,
            Self::DestinyShard | Self::HonorShard => MaterialFamily::Shard,
            Self::DestinyLeapstone
            | Self::RadiantHonorLeapstone
            | Self::MarvelousHonorLeapstone
            | Self::GreatHonorLeapstone => MaterialFamily::LeapStone,
            Self::GemTier3 | Self::GemTier4 => MaterialFamily::Gem,
        }
    }

    /// Gem tier for gem items.
    #[must_use]
    pub const fn gem_tier(self) -> Option<u8> {
        match self {
            Self::GemTier3 => Some(3),
            Self::GemTier4 => Some(4),
            _ => None,
        }
    }

    /// Looks up an item by its symbolic identifier.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.symbol() == symbol)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when a symbol names no catalog item.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown item: {0}")]
pub struct UnknownItem(pub String);

impl FromStr for Item {
    type Err = UnknownItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownItem(s.to_string()))
    }
}

/// The full catalog.
pub fn items() -> impl Iterator<Item = Item> + Clone {
    Item::ALL.into_iter()
}

//! Chaos Dungeon rewards, per daily clear.

use std::sync::OnceLock;

use super::{highest_qualifying, Era, RewardTier, EMPTY_REWARD};
use crate::reward::ContentReward;

/// A Chaos Dungeon tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChaosDungeon {
    /// 타락 1단계
    Corruption1,
    /// 타락 2단계
    Corruption2,
    /// 타락 3단계
    Corruption3,
    /// 공허 1단계
    Void1,
    /// 공허 2단계
    Void2,
    /// 공허 3단계
    Void3,
    /// 공허 4단계
    Void4,
    /// 절망 1단계
    Despair1,
    /// 절망 2단계
    Despair2,
    /// 절망 3단계
    Despair3,
    /// 천공 1단계
    Celestial1,
    /// 천공 2단계
    Celestial2,
    /// 천공 3단계
    Celestial3,
    /// 천공 4단계
    Celestial4,
}

static REWARDS: OnceLock<Vec<ContentReward>> = OnceLock::new();

impl ChaosDungeon {
    /// The reward for one clear of this tier.
    #[must_use]
    pub fn reward(self) -> &'static ContentReward {
        let rewards = REWARDS.get_or_init(|| Self::ALL.iter().map(|c| c.build_reward()).collect());
        &rewards[self as usize]
    }

    /// The highest tier a character at `level` can clear.
    #[must_use]
    pub fn suitable_tier(level: f64) -> Option<Self> {
        highest_qualifying(level)
    }

    /// Reward of the highest tier a character at `level` can clear, or the
    /// empty reward if none.
    #[must_use]
    pub fn suitable_reward(level: f64) -> &'static ContentReward {
        Self::suitable_tier(level).map_or(&EMPTY_REWARD, Self::reward)
    }

    fn build_reward(self) -> ContentReward {
        // (era, weapon, armor, leap, shards, gem tier, gem gold)
        let (era, weapon, armor, leap, shards, gem_tier, gems) = match self {
            Self::Corruption1 => (Era::Crystal, 90, 270, 4, 5200, 3, 60.0),
            Self::Corruption2 => (Era::Crystal, 105, 315, 4, 6000, 3, 70.0),
            Self::Corruption3 => (Era::Crystal, 120, 360, 5, 7100, 3, 80.0),
            Self::Void1 => (Era::Obliteration, 54, 162, 3, 7800, 3, 90.0),
            Self::Void2 => (Era::Obliteration, 62, 186, 3, 8600, 3, 100.0),
            Self::Void3 => (Era::Obliteration, 70, 210, 4, 9700, 3, 110.0),
            Self::Void4 => (Era::Obliteration, 78, 234, 4, 10_900, 3, 125.0),
            Self::Despair1 => (Era::Refined, 45, 135, 2, 12_000, 4, 150.0),
            Self::Despair2 => (Era::Refined, 50, 150, 3, 13_200, 4, 170.0),
            Self::Despair3 => (Era::Refined, 55, 165, 3, 14_000, 4, 190.0),
            Self::Celestial1 => (Era::Destiny, 42, 126, 2, 8900, 4, 220.0),
            Self::Celestial2 => (Era::Destiny, 48, 144, 3, 9800, 4, 250.0),
            Self::Celestial3 => (Era::Destiny, 54, 162, 3, 10_800, 4, 280.0),
            Self::Celestial4 => (Era::Destiny, 62, 186, 4, 12_000, 4, 310.0),
        };
        era.materials(weapon, armor, leap, shards).with_gems(gem_tier, gems)
    }
}

impl RewardTier for ChaosDungeon {
    const ALL: &'static [Self] = &[
        Self::Corruption1,
        Self::Corruption2,
        Self::Corruption3,
        Self::Void1,
        Self::Void2,
        Self::Void3,
        Self::Void4,
        Self::Despair1,
        Self::Despair2,
        Self::Despair3,
        Self::Celestial1,
        Self::Celestial2,
        Self::Celestial3,
        Self::Celestial4,
    ];

    fn minimum_level(self) -> u32 {
        match self {
            Self::Corruption1 => 1415,
            Self::Corruption2 => 1445,
            Self::Corruption3 => 1475,
            Self::Void1 => 1490,
            Self::Void2 => 1520,
            Self::Void3 => 1540,
            Self::Void4 => 1560,
            Self::Despair1 => 1580,
            Self::Despair2 => 1600,
            Self::Despair3 => 1610,
            Self::Celestial1 => 1640,
            Self::Celestial2 => 1660,
            Self::Celestial3 => 1680,
            Self::Celestial4 => 1700,
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Corruption1 => "타락 1단계",
            Self::Corruption2 => "타락 2단계",
            Self::Corruption3 => "타락 3단계",
            Self::Void1 => "공허 1단계",
            Self::Void2 => "공허 2단계",
            Self::Void3 => "공허 3단계",
            Self::Void4 => "공허 4단계",
            Self::Despair1 => "절망 1단계",
            Self::Despair2 => "절망 2단계",
            Self::Despair3 => "절망 3단계",
            Self::Celestial1 => "천공 1단계",
            Self::Celestial2 => "천공 2단계",
            Self::Celestial3 => "천공 3단계",
            Self::Celestial4 => "천공 4단계",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (index, tier) in ChaosDungeon::ALL.iter().enumerate() {
            assert_eq!(*tier as usize, index);
        }
    }

    #[test]
    fn test_top_tier_pays_destiny_materials() {
        let r = ChaosDungeon::suitable_reward(1712.5);
        assert_eq!(r, ChaosDungeon::Celestial4.reward());
        assert_eq!(r.count(Item::DestinyDestructionStone), 62);
        assert_eq!(r.count(Item::DestinyShard), 12_000);
        assert_eq!(r.gems[&4], 310.0);
    }

    #[test]
    fn test_era_boundary() {
        assert_eq!(ChaosDungeon::suitable_tier(1639.9), Some(ChaosDungeon::Despair3));
        assert_eq!(ChaosDungeon::suitable_tier(1640.0), Some(ChaosDungeon::Celestial1));
        assert!(ChaosDungeon::suitable_reward(1610.0).count(Item::HonorShard) > 0);
    }

    #[test]
    fn test_zero_level() {
        assert_eq!(ChaosDungeon::suitable_tier(0.0), None);
        assert!(ChaosDungeon::suitable_reward(0.0).is_empty());
    }
}

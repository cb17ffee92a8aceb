//! Weekly raid rewards.
//!
//! Each raid pays out one of two variants:
//!
//! - **gold-bonus**: the raid's gold plus its base materials. Only the
//!   roster's designated gold earners take this one.
//! - **non-gold-bonus**: no gold, but the bonus chests are opened, so the
//!   materials are doubled.

use std::sync::OnceLock;

use super::{qualifying_descending, Era, RewardTier};
use crate::reward::ContentReward;

/// Raid slots shown per character.
pub const MAX_RAIDS_PER_CHARACTER: usize = 6;

/// Raid slots selected by default for a gold earner.
pub const DEFAULT_RAID_CLEARS: usize = 3;

/// A raid difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Raid {
    /// 상아탑 하드
    IvoryTowerHard,
    /// 카멘 노말
    KamenNormal,
    /// 에키드나 노말
    EchidnaNormal,
    /// 카멘 하드
    KamenHard,
    /// 에키드나 하드
    EchidnaHard,
    /// 베히모스 노말
    BehemothNormal,
    /// 에기르 노말
    AegirNormal,
    /// 아브렐슈드 노말
    BrelshazaNormal,
    /// 에기르 하드
    AegirHard,
    /// 아브렐슈드 하드
    BrelshazaHard,
    /// 모르둠 노말
    MordumNormal,
    /// 모르둠 하드
    MordumHard,
}

/// (gold-bonus, non-gold-bonus) per raid, in `ALL` order.
static REWARDS: OnceLock<Vec<(ContentReward, ContentReward)>> = OnceLock::new();

impl Raid {
    /// The reward for one clear.
    #[must_use]
    pub fn reward(self, is_gold_bonus: bool) -> &'static ContentReward {
        let rewards = REWARDS.get_or_init(|| Self::ALL.iter().map(|r| r.build_rewards()).collect());
        let (gold_bonus, non_gold_bonus) = &rewards[self as usize];
        if is_gold_bonus {
            gold_bonus
        } else {
            non_gold_bonus
        }
    }

    /// Raids a character at `level` can enter, highest first, at most
    /// `max_count` of them.
    ///
    /// Callers default-select the first [`DEFAULT_RAID_CLEARS`] entries.
    #[must_use]
    pub fn available_raids(level: f64, max_count: usize) -> Vec<Self> {
        let mut raids = qualifying_descending::<Self>(level);
        raids.truncate(max_count);
        raids
    }

    fn build_rewards(self) -> (ContentReward, ContentReward) {
        // (era, gold, weapon, armor, leap, shards, tier 4 gem gold)
        let (era, gold, weapon, armor, leap, shards, gems) = match self {
            Self::IvoryTowerHard => (Era::Refined, 10_000, 600, 1200, 16, 9000, 0.0),
            Self::KamenNormal => (Era::Refined, 13_000, 720, 1440, 20, 10_800, 0.0),
            Self::EchidnaNormal => (Era::Refined, 14_500, 800, 1600, 22, 12_000, 0.0),
            Self::KamenHard => (Era::Refined, 17_000, 960, 1920, 26, 14_400, 0.0),
            Self::EchidnaHard => (Era::Destiny, 18_500, 520, 1040, 14, 7000, 0.0),
            Self::BehemothNormal => (Era::Destiny, 21_500, 600, 1200, 16, 8000, 0.0),
            Self::AegirNormal => (Era::Destiny, 23_000, 660, 1320, 18, 8800, 1000.0),
            Self::BrelshazaNormal => (Era::Destiny, 27_500, 780, 1560, 20, 10_400, 1000.0),
            Self::AegirHard => (Era::Destiny, 30_000, 860, 1720, 24, 11_400, 1500.0),
            Self::BrelshazaHard => (Era::Destiny, 35_000, 1000, 2000, 28, 13_000, 1500.0),
            Self::MordumNormal => (Era::Destiny, 38_000, 1080, 2160, 30, 14_000, 2000.0),
            Self::MordumHard => (Era::Destiny, 44_000, 1240, 2480, 34, 16_000, 2500.0),
        };

        let mut gold_bonus = era.materials(weapon, armor, leap, shards).with_gold(gold);
        let mut non_gold_bonus = era.materials(weapon * 2, armor * 2, leap * 2, shards * 2);
        if gems > 0.0 {
            gold_bonus = gold_bonus.with_gems(4, gems);
            non_gold_bonus = non_gold_bonus.with_gems(4, gems);
        }
        (gold_bonus, non_gold_bonus)
    }
}

impl RewardTier for Raid {
    const ALL: &'static [Self] = &[
        Self::IvoryTowerHard,
        Self::KamenNormal,
        Self::EchidnaNormal,
        Self::KamenHard,
        Self::EchidnaHard,
        Self::BehemothNormal,
        Self::AegirNormal,
        Self::BrelshazaNormal,
        Self::AegirHard,
        Self::BrelshazaHard,
        Self::MordumNormal,
        Self::MordumHard,
    ];

    fn minimum_level(self) -> u32 {
        match self {
            Self::IvoryTowerHard => 1600,
            Self::KamenNormal => 1610,
            Self::EchidnaNormal => 1620,
            Self::KamenHard => 1630,
            Self::EchidnaHard => 1640,
            Self::BehemothNormal => 1650,
            Self::AegirNormal => 1660,
            Self::BrelshazaNormal => 1670,
            Self::AegirHard => 1680,
            Self::BrelshazaHard => 1690,
            Self::MordumNormal => 1700,
            Self::MordumHard => 1720,
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::IvoryTowerHard => "상아탑 하드",
            Self::KamenNormal => "카멘 노말",
            Self::EchidnaNormal => "에키드나 노말",
            Self::KamenHard => "카멘 하드",
            Self::EchidnaHard => "에키드나 하드",
            Self::BehemothNormal => "베히모스 노말",
            Self::AegirNormal => "에기르 노말",
            Self::BrelshazaNormal => "아브렐슈드 노말",
            Self::AegirHard => "에기르 하드",
            Self::BrelshazaHard => "아브렐슈드 하드",
            Self::MordumNormal => "모르둠 노말",
            Self::MordumHard => "모르둠 하드",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (index, raid) in Raid::ALL.iter().enumerate() {
            assert_eq!(*raid as usize, index);
        }
    }

    #[test]
    fn test_available_raids_descending_and_truncated() {
        let raids = Raid::available_raids(1685.0, MAX_RAIDS_PER_CHARACTER);
        assert_eq!(
            raids,
            vec![
                Raid::AegirHard,
                Raid::BrelshazaNormal,
                Raid::AegirNormal,
                Raid::BehemothNormal,
                Raid::EchidnaHard,
                Raid::KamenHard,
            ]
        );

        let few = Raid::available_raids(1685.0, 2);
        assert_eq!(few, vec![Raid::AegirHard, Raid::BrelshazaNormal]);
    }

    #[test]
    fn test_available_raids_low_level() {
        assert_eq!(Raid::available_raids(1605.0, 6), vec![Raid::IvoryTowerHard]);
        assert!(Raid::available_raids(1599.0, 6).is_empty());
        assert!(Raid::available_raids(1700.0, 0).is_empty());
    }

    #[test]
    fn test_gold_bonus_variants() {
        let gold = Raid::KamenHard.reward(true);
        let materials = Raid::KamenHard.reward(false);

        assert_eq!(gold.gold, 17_000);
        assert_eq!(materials.gold, 0);
        assert_eq!(
            materials.count(Item::RefinedObliterationStone),
            gold.count(Item::RefinedObliterationStone) * 2
        );
    }

    #[test]
    fn test_late_raids_pay_gems() {
        assert_eq!(Raid::MordumHard.reward(true).gems[&4], 2500.0);
        assert_eq!(Raid::MordumHard.reward(false).gems[&4], 2500.0);
        assert!(Raid::KamenNormal.reward(true).gems.is_empty());
    }
}

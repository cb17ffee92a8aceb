//! Guardian raid rewards, per daily clear.

use std::sync::OnceLock;

use super::{highest_qualifying, Era, RewardTier, EMPTY_REWARD};
use crate::reward::ContentReward;

/// A Guardian raid tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Guardian {
    /// 드렉탈라스
    Drectalas,
    /// 스콜라키아
    Skolakia,
    /// 아게오로스
    Argeos,
    /// 베스칼
    Veskal,
    /// 가르가디스
    Gargadeth,
    /// 소나벨
    Sonavel,
    /// 하누마탄
    Hanumatan,
    /// 칼엘리고스
    Caliligos,
    /// 쿤겔라니움
    Kungelanium,
    /// 데스칼루다
    Deskaluda,
}

static REWARDS: OnceLock<Vec<ContentReward>> = OnceLock::new();

impl Guardian {
    /// The reward for one clear of this tier.
    #[must_use]
    pub fn reward(self) -> &'static ContentReward {
        let rewards = REWARDS.get_or_init(|| Self::ALL.iter().map(|g| g.build_reward()).collect());
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
        let (era, leap, weapon, armor) = match self {
            Self::Drectalas => (Era::Destiny, 21, 186, 550),
            Self::Skolakia => (Era::Destiny, 17, 196, 438),
            Self::Argeos => (Era::Destiny, 12, 92, 281),
            Self::Veskal => (Era::Refined, 24, 165, 445),
            Self::Gargadeth => (Era::Refined, 12, 103, 301),
            Self::Sonavel => (Era::Refined, 8, 68, 204),
            Self::Hanumatan => (Era::Obliteration, 14, 101, 306),
            Self::Caliligos => (Era::Obliteration, 10, 75, 226),
            Self::Kungelanium => (Era::Crystal, 16, 133, 408),
            Self::Deskaluda => (Era::Crystal, 11, 101, 315),
        };
        era.materials(weapon, armor, leap, 0)
    }
}

impl RewardTier for Guardian {
    const ALL: &'static [Self] = &[
        Self::Drectalas,
        Self::Skolakia,
        Self::Argeos,
        Self::Veskal,
        Self::Gargadeth,
        Self::Sonavel,
        Self::Hanumatan,
        Self::Caliligos,
        Self::Kungelanium,
        Self::Deskaluda,
    ];

    fn minimum_level(self) -> u32 {
        match self {
            Self::Drectalas => 1700,
            Self::Skolakia => 1680,
            Self::Argeos => 1640,
            Self::Veskal => 1630,
            Self::Gargadeth => 1610,
            Self::Sonavel => 1580,
            Self::Hanumatan => 1540,
            Self::Caliligos => 1490,
            Self::Kungelanium => 1460,
            Self::Deskaluda => 1415,
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Drectalas => "드렉탈라스",
            Self::Skolakia => "스콜라키아",
            Self::Argeos => "아게오로스",
            Self::Veskal => "베스칼",
            Self::Gargadeth => "가르가디스",
            Self::Sonavel => "소나벨",
            Self::Hanumatan => "하누마탄",
            Self::Caliligos => "칼엘리고스",
            Self::Kungelanium => "쿤겔라니움",
            Self::Deskaluda => "데스칼루다",
        }
    }
}

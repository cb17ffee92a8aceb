//! # Reward Calculator
//!
//! Prices what a character earns in a week, per content type.
//!
//! ## The Pipeline
//!
//! ```text
//! character level ──> table tier ──> ContentReward
//!                                        │
//!                        ┌───────────────┴───────────────┐
//!                        ▼                               ▼
//!                 tradable_part()                   bound_part()
//!                        │                               │
//!                        ▼                               ▼
//!                 tradable_gold()                   bound_gold()
//!                        │                               │
//!                        └──────── × weekly multiplier ──┘
//!                                 (chaos / guardian only)
//! ```
//!
//! The calculator holds no mutable state. One instance can serve a whole
//! roster, or a fresh one can be built per character; the results are the
//! same bits either way.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::price::{bound_gold, tradable_gold, PriceMap};
use crate::reward::{bound_part, tradable_part, ContentReward, ContentType};
use crate::roster::{Character, CharacterSelection};
use crate::tables::{ChaosDungeon, Guardian, Raid, MAX_RAIDS_PER_CHARACTER};

/// Daily clears in a week.
pub const DAILY_MULTIPLIER: f64 = 7.0;

/// Weekly clears worth of reward when only rest-bonus entries are spent.
pub const REST_ONLY_MULTIPLIER: f64 = 14.0 / 3.0;

/// How a daily content type counts toward the week.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodicOption {
    /// Cleared every day.
    #[default]
    Daily,
    /// Cleared only with rest bonus.
    RestOnly,
    /// Not counted.
    Excluded,
}

impl PeriodicOption {
    /// Weekly multiplier on a single clear, `None` when excluded.
    #[inline]
    #[must_use]
    pub const fn weekly_multiplier(self) -> Option<f64> {
        match self {
            Self::Daily => Some(DAILY_MULTIPLIER),
            Self::RestOnly => Some(REST_ONLY_MULTIPLIER),
            Self::Excluded => None,
        }
    }
}

/// Gold value of a reward, split by whether it can be sold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardResult {
    /// Gold that can be realised on the market.
    pub tradable_gold: f64,
    /// Gold-equivalent of bound materials.
    pub bound_gold: f64,
}

impl RewardResult {
    /// Nothing earned.
    pub const ZERO: Self = Self {
        tradable_gold: 0.0,
        bound_gold: 0.0,
    };

    /// Creates a result.
    #[must_use]
    pub const fn new(tradable_gold: f64, bound_gold: f64) -> Self {
        Self {
            tradable_gold,
            bound_gold,
        }
    }

    /// Tradable plus bound.
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.tradable_gold + self.bound_gold
    }

    /// The same result with the bound part dropped.
    #[must_use]
    pub const fn tradable_only(self) -> Self {
        Self::new(self.tradable_gold, 0.0)
    }

    /// Both parts multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.tradable_gold * factor, self.bound_gold * factor)
    }
}

impl Add for RewardResult {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.tradable_gold + other.tradable_gold,
            self.bound_gold + other.bound_gold,
        )
    }
}

impl AddAssign for RewardResult {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for RewardResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// One selected raid and what it pays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaidEarning {
    /// Slot index in the character's available raid list.
    pub slot: usize,
    /// The raid.
    pub raid: Raid,
    /// Its priced reward.
    pub result: RewardResult,
}

/// A character's week, per content type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterBreakdown {
    /// Chaos Dungeon, already weekly.
    pub chaos: RewardResult,
    /// Guardian raid, already weekly.
    pub guardian: RewardResult,
    /// Every selected raid.
    pub raids: Vec<RaidEarning>,
}

impl CharacterBreakdown {
    /// Sum of the selected raids.
    #[must_use]
    pub fn raid_total(&self) -> RewardResult {
        self.raids.iter().map(|r| r.result).sum()
    }

    /// Everything this character earns in the week.
    #[must_use]
    pub fn total(&self) -> RewardResult {
        self.chaos + self.guardian + self.raid_total()
    }
}

/// Weekly gold calculator for one set of prices and options.
#[derive(Clone, Debug, Default)]
pub struct RewardCalculator {
    prices: PriceMap,
    chaos_option: PeriodicOption,
    guardian_option: PeriodicOption,
}

impl RewardCalculator {
    /// Creates a calculator.
    #[must_use]
    pub fn new(prices: PriceMap, chaos_option: PeriodicOption, guardian_option: PeriodicOption) -> Self {
        Self {
            prices,
            chaos_option,
            guardian_option,
        }
    }

    /// Prices in use.
    #[must_use]
    pub fn prices(&self) -> &PriceMap {
        &self.prices
    }

    /// Chaos Dungeon option in use.
    #[must_use]
    pub const fn chaos_option(&self) -> PeriodicOption {
        self.chaos_option
    }

    /// Guardian option in use.
    #[must_use]
    pub const fn guardian_option(&self) -> PeriodicOption {
        self.guardian_option
    }

    /// Prices `reward` as paid out by `content`.
    #[must_use]
    pub fn value(&self, reward: &ContentReward, content: ContentType) -> RewardResult {
        RewardResult::new(
            tradable_gold(&tradable_part(reward, content), &self.prices),
            bound_gold(&bound_part(reward, content), &self.prices),
        )
    }

    fn periodic(&self, reward: &ContentReward, content: ContentType, option: PeriodicOption) -> RewardResult {
        match option.weekly_multiplier() {
            Some(multiplier) => self.value(reward, content).scaled(multiplier),
            None => RewardResult::ZERO,
        }
    }

    /// Weekly Chaos Dungeon earnings.
    #[must_use]
    pub fn calculate_chaos_reward(&self, character: &Character, is_excluded: bool) -> RewardResult {
        if is_excluded {
            return RewardResult::ZERO;
        }
        let reward = ChaosDungeon::suitable_reward(character.level);
        self.periodic(reward, ContentType::ChaosDungeon, self.chaos_option)
    }

    /// Weekly Guardian raid earnings.
    #[must_use]
    pub fn calculate_guardian_reward(&self, character: &Character, is_excluded: bool) -> RewardResult {
        if is_excluded {
            return RewardResult::ZERO;
        }
        let reward = Guardian::suitable_reward(character.level);
        self.periodic(reward, ContentType::Guardian, self.guardian_option)
    }

    /// One clear of `raid`.
    #[must_use]
    pub fn calculate_raid_reward(&self, raid: Raid, is_gold_bonus: bool) -> RewardResult {
        self.value(raid.reward(is_gold_bonus), ContentType::Raid)
    }

    /// Everything `character` earns this week under `selection`.
    ///
    /// Selected slots past the end of the character's raid list are ignored.
    #[must_use]
    pub fn character_breakdown(&self, character: &Character, selection: &CharacterSelection) -> CharacterBreakdown {
        if selection.excluded {
            return CharacterBreakdown::default();
        }

        let raids = Raid::available_raids(character.level, MAX_RAIDS_PER_CHARACTER)
            .into_iter()
            .enumerate()
            .filter(|&(slot, _)| selection.is_raid_selected(slot))
            .map(|(slot, raid)| RaidEarning {
                slot,
                raid,
                result: self.calculate_raid_reward(raid, selection.gold_bonus),
            })
            .collect();

        CharacterBreakdown {
            chaos: self.calculate_chaos_reward(character, false),
            guardian: self.calculate_guardian_reward(character, false),
            raids,
        }
    }
}

//! # LOALIFE Economy
//!
//! Weekly gold income for a Lost Ark account.
//!
//! ## Design Principles
//!
//! 1. **Closed tables** - items and reward tiers are compile-time enums, built once
//! 2. **Pure calculation** - no I/O, no clocks, no shared mutable state
//! 3. **Bit-identical results** - ordered maps and a fixed reduction order
//! 4. **Validated boundary** - payloads and configs are checked on the way in
//!
//! ## Example
//!
//! ```rust,ignore
//! use loalife_economy::{aggregate, parse_search_response, AggregationOptions, CalculationConfig, Selections};
//!
//! let search = parse_search_response(&payload)?;
//! let config = CalculationConfig::from_path("loalife.toml")?;
//!
//! let calculator = config.calculator(&search.prices);
//! let mut selections = Selections::defaults(&search.roster);
//! config.apply_to_selections(&search.roster, &mut selections);
//!
//! let summary = aggregate(
//!     &search.roster,
//!     &selections,
//!     &calculator,
//!     &config.aggregation_options(&search.roster, &calculator),
//! );
//! println!("{:.0} gold this week", summary.grand_total.total());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod aggregate;
pub mod calculator;
pub mod config;
pub mod error;
pub mod ingest;
pub mod item;
pub mod price;
pub mod reward;
pub mod roster;
pub mod tables;

pub use aggregate::{
    aggregate, default_disabled_servers, AggregationOptions, CharacterSummary, RosterSummary, ServerSummary,
};
pub use calculator::{CharacterBreakdown, PeriodicOption, RaidEarning, RewardCalculator, RewardResult};
pub use config::CalculationConfig;
pub use error::{EconomyError, EconomyResult};
pub use ingest::{parse_search_response, SearchResult};
pub use item::{Item, ItemCategory, MaterialFamily};
pub use price::{bound_gold, gold_value, tradable_gold, PriceMap};
pub use reward::{bound_part, combine, tradable_part, ContentReward, ContentType, GemTier};
pub use roster::{
    Character, CharacterKey, CharacterSelection, Roster, Selections, ServerRoster, GOLD_EARNERS_PER_SERVER,
};
pub use tables::{ChaosDungeon, Guardian, Raid, RewardTier, EMPTY_REWARD};

//! # LOALIFE
//!
//! Weekly gold income for a Lost Ark account.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐     ┌───────────────────────────────────────┐
//! │  search payload      │     │  loalife_economy                      │
//! │  (JSON)              │────>│                                       │
//! └──────────────────────┘     │  ingest ──> Roster + PriceMap         │
//! ┌──────────────────────┐     │  config ──> RewardCalculator          │
//! │  loalife.toml        │────>│  tables ──> calculator ──> aggregate  │
//! └──────────────────────┘     └──────────────────┬────────────────────┘
//!                                                 │ RosterSummary
//!                                                 ▼
//!                                  report::render ──> text
//! ```
//!
//! ## Modules
//!
//! - `report`: plain-text rendering of summaries and tables

#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod report;

pub use loalife_economy as economy;

pub use economy::{
    aggregate, parse_search_response, AggregationOptions, CalculationConfig, EconomyError, EconomyResult,
    RewardCalculator, RosterSummary, Selections,
};
pub use report::{render, render_tables};

//! # Roster Aggregation
//!
//! Folds a whole account into one weekly number.
//!
//! ```text
//! Roster ──> per server ──> per character ──> CharacterBreakdown
//!                │                                   │
//!                │<──────────── sum ─────────────────┘
//!                ▼
//!          ServerSummary ──(unless disabled)──> grand total
//! ```
//!
//! Servers and characters are visited in roster order, so every sum is
//! reduced in the same order on every call.

use std::collections::BTreeSet;

use tracing::debug;

use crate::calculator::{CharacterBreakdown, RewardCalculator, RewardResult};
use crate::roster::{Character, CharacterSelection, Roster, Selections};

/// Switches that change how totals are reported, not what is earned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregationOptions {
    /// Report bound gold as zero everywhere.
    pub show_tradable_only: bool,
    /// Servers summarized but left out of the grand total.
    pub disabled_servers: BTreeSet<String>,
}

impl AggregationOptions {
    /// True if `server` is left out of the grand total.
    #[must_use]
    pub fn is_disabled(&self, server: &str) -> bool {
        self.disabled_servers.contains(server)
    }
}

/// One character's week.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterSummary {
    /// The character.
    pub character: Character,
    /// Excluded characters earn nothing.
    pub excluded: bool,
    /// Gold earner.
    pub gold_bonus: bool,
    /// Per content type.
    pub breakdown: CharacterBreakdown,
    /// Sum of the breakdown, after `show_tradable_only`.
    pub total: RewardResult,
}

/// One server's week.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerSummary {
    /// Server name.
    pub server: String,
    /// Sum over the server's characters.
    pub total: RewardResult,
    /// Left out of the grand total.
    pub disabled: bool,
    /// Characters, highest level first.
    pub characters: Vec<CharacterSummary>,
}

/// The whole account's week.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RosterSummary {
    /// Servers in roster order.
    pub servers: Vec<ServerSummary>,
    /// Sum over enabled servers.
    pub grand_total: RewardResult,
}

impl RosterSummary {
    /// Servers sorted by total value, highest first. Ties keep roster order.
    #[must_use]
    pub fn servers_by_value(&self) -> Vec<&ServerSummary> {
        let mut servers: Vec<&ServerSummary> = self.servers.iter().collect();
        servers.sort_by(|a, b| b.total.total().total_cmp(&a.total.total()));
        servers
    }

    /// Looks up one server.
    #[must_use]
    pub fn server(&self, name: &str) -> Option<&ServerSummary> {
        self.servers.iter().find(|s| s.server == name)
    }
}

/// Sums every character of `roster` under `selections`.
///
/// A character without a selection is included with no gold bonus and no
/// raids.
#[must_use]
pub fn aggregate(
    roster: &Roster,
    selections: &Selections,
    calculator: &RewardCalculator,
    options: &AggregationOptions,
) -> RosterSummary {
    let unselected = CharacterSelection::default();
    let mut summary = RosterSummary::default();

    for group in roster.servers() {
        let disabled = options.is_disabled(&group.server);
        let mut server = ServerSummary {
            server: group.server.clone(),
            total: RewardResult::ZERO,
            disabled,
            characters: Vec::with_capacity(group.characters.len()),
        };

        for character in &group.characters {
            let selection = selections.get(character).unwrap_or(&unselected);
            let breakdown = calculator.character_breakdown(character, selection);
            let mut total = breakdown.total();
            if options.show_tradable_only {
                total = total.tradable_only();
            }
            server.total += total;
            server.characters.push(CharacterSummary {
                character: character.clone(),
                excluded: selection.excluded,
                gold_bonus: selection.gold_bonus,
                breakdown,
                total,
            });
        }

        debug!(
            server = %server.server,
            characters = server.characters.len(),
            tradable = server.total.tradable_gold,
            bound = server.total.bound_gold,
            disabled,
            "server aggregated"
        );

        if !disabled {
            summary.grand_total += server.total;
        }
        summary.servers.push(server);
    }

    summary
}

/// Servers to disable by default: every server with positive value except the
/// most valuable one.
///
/// Servers are valued with [`Selections::defaults`].
#[must_use]
pub fn default_disabled_servers(roster: &Roster, calculator: &RewardCalculator) -> BTreeSet<String> {
    let summary = aggregate(
        roster,
        &Selections::defaults(roster),
        calculator,
        &AggregationOptions::default(),
    );

    summary
        .servers_by_value()
        .into_iter()
        .filter(|s| s.total.total() > 0.0)
        .skip(1)
        .map(|s| s.server.clone())
        .collect()
}

//! # Weekly Report
//!
//! Plain-text rendering of a [`RosterSummary`] and of the reward tables.

use std::fmt::{self, Write};

use loalife_economy::tables::tiers_descending;
use loalife_economy::{
    gold_value, ChaosDungeon, CharacterSummary, Guardian, PriceMap, Raid, RewardResult, RewardTier, RosterSummary,
};

/// Formats gold rounded to whole units with thousands separators.
#[must_use]
pub fn format_gold(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn write_result(out: &mut impl Write, label: &str, result: RewardResult) -> fmt::Result {
    writeln!(
        out,
        "{label} {} (tradable {} / bound {})",
        format_gold(result.total()),
        format_gold(result.tradable_gold),
        format_gold(result.bound_gold),
    )
}

fn write_character(out: &mut impl Write, summary: &CharacterSummary) -> fmt::Result {
    let c = &summary.character;
    let mut tags = String::new();
    if summary.gold_bonus {
        tags.push_str(" [gold]");
    }
    if summary.excluded {
        tags.push_str(" [excluded]");
    }
    writeln!(out, "  {} ({:.2} {}){tags}", c.character_name, c.level, c.class_name)?;
    if summary.excluded {
        return Ok(());
    }

    let breakdown = &summary.breakdown;
    write_result(out, "    chaos   ", breakdown.chaos)?;
    write_result(out, "    guardian", breakdown.guardian)?;
    for raid in &breakdown.raids {
        write_result(out, &format!("    raid    {}", raid.raid.display_name()), raid.result)?;
    }
    write_result(out, "    total   ", summary.total)
}

/// Writes `summary` to `out`, servers ordered by value.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_summary(out: &mut impl Write, summary: &RosterSummary) -> fmt::Result {
    for server in summary.servers_by_value() {
        let label = if server.disabled {
            format!("{} (disabled)", server.server)
        } else {
            server.server.clone()
        };
        write_result(out, &label, server.total)?;
        for character in &server.characters {
            write_character(out, character)?;
        }
        writeln!(out)?;
    }
    write_result(out, "Weekly total", summary.grand_total)
}

/// Renders `summary` as text.
#[must_use]
pub fn render(summary: &RosterSummary) -> String {
    let mut out = String::new();
    // String as fmt::Write never fails.
    let _ = write_summary(&mut out, summary);
    out
}

fn write_table<T: RewardTier>(out: &mut impl Write, title: &str, value: impl Fn(T) -> f64) -> fmt::Result {
    writeln!(out, "{title}")?;
    for tier in tiers_descending::<T>() {
        writeln!(
            out,
            "  {:>5}  {:<16} {}",
            tier.minimum_level(),
            tier.display_name(),
            format_gold(value(tier))
        )?;
    }
    writeln!(out)
}

/// Writes every reward table, highest tier first, each tier valued at
/// `prices`. Raids are shown with their gold-bonus reward.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_tables(out: &mut impl Write, prices: &PriceMap) -> fmt::Result {
    write_table::<ChaosDungeon>(out, "Chaos Dungeon (per clear)", |t| gold_value(t.reward(), prices))?;
    write_table::<Guardian>(out, "Guardian (per clear)", |t| gold_value(t.reward(), prices))?;
    write_table::<Raid>(out, "Raid (gold bonus)", |t| gold_value(t.reward(true), prices))
}

/// Renders the reward tables as text.
#[must_use]
pub fn render_tables(prices: &PriceMap) -> String {
    let mut out = String::new();
    // String as fmt::Write never fails.
    let _ = write_tables(&mut out, prices);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use loalife_economy::{
        aggregate, AggregationOptions, Character, Item, PeriodicOption, RewardCalculator, Roster, Selections,
    };

    #[test]
    fn test_format_gold() {
        assert_eq!(format_gold(0.0), "0");
        assert_eq!(format_gold(999.4), "999");
        assert_eq!(format_gold(1000.0), "1,000");
        assert_eq!(format_gold(20_720.0), "20,720");
        assert_eq!(format_gold(1_234_567.5), "1,234,568");
        assert_eq!(format_gold(-1500.0), "-1,500");
    }

    #[test]
    fn test_render_lists_servers_by_value() {
        let roster = Roster::from_characters(vec![
            Character::new("Alt", "Kazeros", 1605.0, "Bard"),
            Character::new("Main", "Luterra", 1700.0, "Berserker"),
        ]);
        let calc = RewardCalculator::new(PriceMap::new(), PeriodicOption::Excluded, PeriodicOption::Excluded);
        let summary = aggregate(
            &roster,
            &Selections::defaults(&roster),
            &calc,
            &AggregationOptions::default(),
        );
        let text = render(&summary);

        let luterra = text.find("Luterra").unwrap();
        let kazeros = text.find("Kazeros").unwrap();
        assert!(luterra < kazeros);
        assert!(text.contains("Main (1700.00 Berserker) [gold]"));
        assert!(text.contains("상아탑 하드"));
        assert!(text.trim_end().lines().last().unwrap().starts_with("Weekly total"));
    }

    #[test]
    fn test_render_tables() {
        let prices = PriceMap::new().with(Item::DestinyDestructionStone, 10.0);
        let text = render_tables(&prices);
        assert!(text.contains("드렉탈라스"));
        // 186 destruction stones at 10
        assert!(text.contains("1,860"));
        let chaos = text.find("Chaos Dungeon").unwrap();
        let raid = text.find("Raid").unwrap();
        assert!(chaos < raid);
    }
}

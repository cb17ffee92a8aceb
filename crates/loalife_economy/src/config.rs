//! # Calculation Config
//!
//! Player preferences, loaded once at startup from TOML.
//!
//! ```toml
//! chaos = "daily"          # daily | rest_only | excluded
//! guardian = "rest_only"
//! show_tradable_only = false
//! exclude_below_level = 1600.0
//! disabled_servers = ["Kazeros"]
//! auto_disable_servers = false
//!
//! [prices]
//! DESTINY_DESTRUCTION_STONE = 10.0
//! ```
//!
//! Every field is optional. Price overrides are layered over the market
//! prices of the search payload.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::aggregate::{default_disabled_servers, AggregationOptions};
use crate::calculator::{PeriodicOption, RewardCalculator};
use crate::error::{EconomyError, EconomyResult};
use crate::item::Item;
use crate::price::PriceMap;
use crate::roster::{Roster, Selections};

/// On-disk layout. Price keys are kept as strings so that unknown items can
/// be skipped instead of failing the whole file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    chaos: PeriodicOption,
    guardian: PeriodicOption,
    show_tradable_only: bool,
    exclude_below_level: Option<f64>,
    disabled_servers: Vec<String>,
    auto_disable_servers: bool,
    prices: BTreeMap<String, f64>,
}

/// Validated calculation settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculationConfig {
    /// Chaos Dungeon option.
    pub chaos: PeriodicOption,
    /// Guardian raid option.
    pub guardian: PeriodicOption,
    /// Report bound gold as zero.
    pub show_tradable_only: bool,
    /// Exclude every character below this level.
    pub exclude_below_level: Option<f64>,
    /// Servers left out of the grand total.
    pub disabled_servers: BTreeSet<String>,
    /// Also disable every valuable server but the best one.
    pub auto_disable_servers: bool,
    /// Prices that replace the market's.
    pub price_overrides: PriceMap,
}

impl CalculationConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML, names an unknown
    /// field, or carries a negative or non-finite price or level.
    pub fn from_toml_str(source: &str) -> EconomyResult<Self> {
        let raw: RawConfig = toml::from_str(source).map_err(|e| EconomyError::InvalidConfig(e.to_string()))?;

        if let Some(level) = raw.exclude_below_level {
            if !level.is_finite() {
                return Err(EconomyError::InvalidConfig(format!(
                    "exclude_below_level must be finite, got {level}"
                )));
            }
        }

        let mut price_overrides = PriceMap::new();
        for (symbol, price) in raw.prices {
            if !price.is_finite() || price < 0.0 {
                return Err(EconomyError::InvalidPrice { item: symbol, price });
            }
            match Item::from_symbol(&symbol) {
                Some(item) => price_overrides.set(item, price),
                None => warn!(item = %symbol, "ignoring price override for unknown item"),
            }
        }

        Ok(Self {
            chaos: raw.chaos,
            guardian: raw.guardian,
            show_tradable_only: raw.show_tradable_only,
            exclude_below_level: raw.exclude_below_level,
            disabled_servers: raw.disabled_servers.into_iter().collect(),
            auto_disable_servers: raw.auto_disable_servers,
            price_overrides,
        })
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`EconomyError::Unreadable`] if the file cannot be read, and
    /// otherwise the errors of [`Self::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> EconomyResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| EconomyError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&source)?;
        info!(
            path = %path.display(),
            overrides = config.price_overrides.len(),
            "loaded calculation config"
        );
        Ok(config)
    }

    /// A calculator over `market` prices with this config's overrides on top.
    #[must_use]
    pub fn calculator(&self, market: &PriceMap) -> RewardCalculator {
        let mut prices = market.clone();
        prices.merge(&self.price_overrides);
        RewardCalculator::new(prices, self.chaos, self.guardian)
    }

    /// Applies the level threshold, if any, to `selections`.
    pub fn apply_to_selections(&self, roster: &Roster, selections: &mut Selections) {
        if let Some(level) = self.exclude_below_level {
            selections.exclude_below_level(roster, level);
        }
    }

    /// Aggregation switches for `roster`.
    ///
    /// With `auto_disable_servers`, the servers picked by
    /// [`default_disabled_servers`] join the configured ones.
    #[must_use]
    pub fn aggregation_options(&self, roster: &Roster, calculator: &RewardCalculator) -> AggregationOptions {
        let mut disabled_servers = self.disabled_servers.clone();
        if self.auto_disable_servers {
            disabled_servers.extend(default_disabled_servers(roster, calculator));
        }
        AggregationOptions {
            show_tradable_only: self.show_tradable_only,
            disabled_servers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Character;

    #[test]
    fn test_empty_document_is_default() {
        let config = CalculationConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculationConfig::default());
        assert_eq!(config.chaos, PeriodicOption::Daily);
    }

    #[test]
    fn test_full_document() {
        let config = CalculationConfig::from_toml_str(
            r#"
            chaos = "excluded"
            guardian = "rest_only"
            show_tradable_only = true
            exclude_below_level = 1600.0
            disabled_servers = ["Kazeros"]

            [prices]
            DESTINY_DESTRUCTION_STONE = 10.0
            GEM_TIER_4 = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(config.chaos, PeriodicOption::Excluded);
        assert_eq!(config.guardian, PeriodicOption::RestOnly);
        assert!(config.show_tradable_only);
        assert_eq!(config.exclude_below_level, Some(1600.0));
        assert!(config.disabled_servers.contains("Kazeros"));
        assert_eq!(config.price_overrides.price(Item::DestinyDestructionStone), 10.0);
        assert_eq!(config.price_overrides.len(), 2);
    }

    #[test]
    fn test_unknown_price_key_is_skipped() {
        let config = CalculationConfig::from_toml_str("[prices]\nMYSTERY = 1.0\nHONOR_SHARD = 0.5\n").unwrap();
        assert_eq!(config.price_overrides.len(), 1);
        assert_eq!(config.price_overrides.price(Item::HonorShard), 0.5);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = CalculationConfig::from_toml_str("[prices]\nHONOR_SHARD = -0.5\n").unwrap_err();
        assert!(matches!(err, EconomyError::InvalidPrice { .. }));
    }

    #[test]
    fn test_unknown_field_and_option_are_rejected() {
        assert!(matches!(
            CalculationConfig::from_toml_str("chaos = \"weekly\"\n"),
            Err(EconomyError::InvalidConfig(_))
        ));
        assert!(matches!(
            CalculationConfig::from_toml_str("colour = \"blue\"\n"),
            Err(EconomyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CalculationConfig::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, EconomyError::Unreadable { .. }));
    }

    #[test]
    fn test_overrides_win_over_market() {
        let config = CalculationConfig::from_toml_str("[prices]\nHONOR_SHARD = 0.5\n").unwrap();
        let market = PriceMap::new()
            .with(Item::HonorShard, 0.1)
            .with(Item::ProtectionStone, 3.0);
        let calc = config.calculator(&market);
        assert_eq!(calc.prices().price(Item::HonorShard), 0.5);
        assert_eq!(calc.prices().price(Item::ProtectionStone), 3.0);
    }

    #[test]
    fn test_auto_disable_joins_configured_servers() {
        let roster = Roster::from_characters(vec![
            Character::new("Main", "Luterra", 1700.0, "Bard"),
            Character::new("Alt", "Kazeros", 1620.0, "Bard"),
        ]);
        let config = CalculationConfig {
            auto_disable_servers: true,
            disabled_servers: BTreeSet::from(["Nineveh".to_string()]),
            ..CalculationConfig::default()
        };
        let options = config.aggregation_options(&roster, &config.calculator(&PriceMap::new()));
        assert_eq!(
            options.disabled_servers,
            BTreeSet::from(["Kazeros".to_string(), "Nineveh".to_string()])
        );
    }

    #[test]
    fn test_level_threshold_applies() {
        let roster = Roster::from_characters(vec![
            Character::new("Main", "Luterra", 1700.0, "Bard"),
            Character::new("Alt", "Luterra", 1500.0, "Bard"),
        ]);
        let mut selections = Selections::defaults(&roster);
        let config = CalculationConfig {
            exclude_below_level: Some(1600.0),
            ..CalculationConfig::default()
        };
        config.apply_to_selections(&roster, &mut selections);

        let excluded: Vec<_> = roster
            .characters()
            .filter(|c| selections.get(c).is_some_and(|s| s.excluded))
            .map(|c| c.character_name.as_str())
            .collect();
        assert_eq!(excluded, vec!["Alt"]);
    }
}

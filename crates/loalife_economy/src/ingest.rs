//! # Search Payload Ingestion
//!
//! Decodes the JSON a character search returns into a [`Roster`] and a
//! [`PriceMap`]. This is the only place untrusted numbers enter the engine,
//! so levels and prices are checked here and nowhere else.
//!
//! ```json
//! {
//!   "expeditions": { "expeditions": { "Luterra": [
//!     { "characterName": "Watson", "serverName": "Luterra", "level": 1700.0, "className": "Bard" }
//!   ] } },
//!   "resources": [ { "item": "DESTINY_SHARD", "avgPrice": 0.11 } ]
//! }
//! ```
//!
//! The inner `expeditions` wrapper is optional.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::error::{EconomyError, EconomyResult};
use crate::item::Item;
use crate::price::PriceMap;
use crate::roster::{Character, Roster};

/// Per-server character lists in document order.
#[derive(Debug, Default)]
struct ServerLists(Vec<(String, Vec<Character>)>);

impl<'de> Deserialize<'de> for ServerLists {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ServerListsVisitor;

        impl<'de> Visitor<'de> for ServerListsVisitor {
            type Value = ServerLists;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of server name to character list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut lists = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<Character>>()? {
                    lists.push(entry);
                }
                Ok(ServerLists(lists))
            }
        }

        deserializer.deserialize_map(ServerListsVisitor)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Expeditions {
    Wrapped { expeditions: ServerLists },
    Bare(ServerLists),
}

impl Expeditions {
    fn into_characters(self) -> impl Iterator<Item = Character> {
        let (Self::Wrapped { expeditions } | Self::Bare(expeditions)) = self;
        expeditions.0.into_iter().flat_map(|(_, characters)| characters)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Resource {
    item: String,
    #[serde(default)]
    avg_price: f64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    expeditions: Expeditions,
    #[serde(default)]
    resources: Vec<Resource>,
}

/// A decoded and validated search result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
    /// Characters regrouped by their own `serverName`.
    pub roster: Roster,
    /// Market prices for every known item in the payload.
    pub prices: PriceMap,
}

/// Decodes a search payload.
///
/// Unknown items are dropped. Characters are grouped by `serverName`,
/// whatever key they were listed under.
///
/// # Errors
///
/// Returns [`EconomyError::MalformedPayload`] if the JSON does not have the
/// expected shape, [`EconomyError::InvalidLevel`] for a negative or
/// non-finite level and [`EconomyError::InvalidPrice`] for a negative or
/// non-finite price.
pub fn parse_search_response(json: &str) -> EconomyResult<SearchResult> {
    let response: SearchResponse =
        serde_json::from_str(json).map_err(|e| EconomyError::MalformedPayload(e.to_string()))?;

    let characters: Vec<Character> = response.expeditions.into_characters().collect();
    for character in &characters {
        if !character.level.is_finite() || character.level < 0.0 {
            return Err(EconomyError::InvalidLevel {
                character: character.character_name.clone(),
                level: character.level,
            });
        }
    }

    let mut prices = PriceMap::new();
    for resource in response.resources {
        if !resource.avg_price.is_finite() || resource.avg_price < 0.0 {
            return Err(EconomyError::InvalidPrice {
                item: resource.item,
                price: resource.avg_price,
            });
        }
        match Item::from_symbol(&resource.item) {
            Some(item) => prices.set(item, resource.avg_price),
            None => debug!(item = %resource.item, "dropping unknown resource"),
        }
    }

    let roster = Roster::from_characters(characters);
    debug!(
        servers = roster.servers().len(),
        characters = roster.len(),
        prices = prices.len(),
        "search payload decoded"
    );
    Ok(SearchResult { roster, prices })
}

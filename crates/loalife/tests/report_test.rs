//! Payload to text, through the facade only.

use loalife::{aggregate, parse_search_response, render, CalculationConfig, Selections};

const PAYLOAD: &str = r#"{
    "expeditions": { "expeditions": {
        "Luterra": [
            { "characterName": "Watson", "serverName": "Luterra", "level": 1700.0, "className": "Bard" },
            { "characterName": "Holmes", "serverName": "Luterra", "level": 1540.0, "className": "Gunlancer" }
        ],
        "Kazeros": [
            { "characterName": "Moriarty", "serverName": "Kazeros", "level": 1620.0, "className": "Sorceress" }
        ]
    } },
    "resources": [
        { "item": "DESTINY_DESTRUCTION_STONE", "avgPrice": 10.0 },
        { "item": "DESTINY_GUARDIAN_STONE", "avgPrice": 2.0 },
        { "item": "UNLISTED_THING", "avgPrice": 1.0 }
    ]
}"#;

#[test]
fn test_report_from_payload() {
    let search = parse_search_response(PAYLOAD).unwrap();
    let config = CalculationConfig::from_toml_str(
        r#"
        exclude_below_level = 1600.0
        auto_disable_servers = true
        "#,
    )
    .unwrap();

    let calculator = config.calculator(&search.prices);
    let mut selections = Selections::defaults(&search.roster);
    config.apply_to_selections(&search.roster, &mut selections);
    let options = config.aggregation_options(&search.roster, &calculator);
    let summary = aggregate(&search.roster, &selections, &calculator, &options);

    // Luterra is worth more, so Kazeros is disabled and left out of the total
    assert!(options.is_disabled("Kazeros"));
    assert_eq!(summary.grand_total, summary.server("Luterra").unwrap().total);

    let text = render(&summary);
    assert!(text.contains("Kazeros (disabled)"));
    assert!(text.contains("Holmes (1540.00 Gunlancer) [gold] [excluded]"));
    assert!(text.contains("raid    모르둠 노말"));
}

use atlas_domain::country::{Country, NOT_AVAILABLE};

fn decode(raw: &str) -> Vec<Country> {
    serde_json::from_str(raw).expect("fixture should decode")
}

#[test]
fn full_record_decodes_every_displayed_fact() {
    let countries = decode(include_str!("fixtures/germany.json"));
    let germany = countries.first().expect("one country");

    assert_eq!(germany.name.common, "Germany");
    assert!(germany.has_distinct_official_name());
    assert_eq!(germany.cca2, "DE");
    assert_eq!(germany.cca3, "DEU");
    assert_eq!(germany.primary_capital(), Some("Berlin"));
    assert_eq!(germany.currency_summary(), "Euro (€)");
    assert_eq!(germany.language_summary(), "German");
    assert_eq!(germany.calling_code(), "+49");
    assert_eq!(germany.primary_tld(), ".de");
    assert_eq!(germany.coordinates().as_deref(), Some("51°, 9°"));
    assert_eq!(germany.borders.len(), 9);
    assert!(germany.un_member);
    assert!(germany.is_independent());
    assert_eq!(germany.population, 83_240_525);
    assert_eq!(germany.maps.open_street_maps, "https://www.openstreetmap.org/relation/51477");
    assert_eq!(germany.flags.svg, "https://flagcdn.com/de.svg");
    assert_eq!(germany.name.native_name["deu"].common, "Deutschland");
    assert_eq!(germany.postal_code.as_ref().map(|p| p.format.as_str()), Some("#####"));
}

#[test]
fn sparse_record_decodes_with_fallbacks() {
    let countries = decode(include_str!("fixtures/antarctica.json"));
    let antarctica = countries.first().expect("one country");

    assert!(antarctica.primary_capital().is_none());
    assert_eq!(antarctica.currency_summary(), NOT_AVAILABLE);
    assert_eq!(antarctica.language_summary(), NOT_AVAILABLE);
    assert_eq!(antarctica.calling_code(), "");
    assert!(antarctica.subregion.is_empty());
    assert!(antarctica.borders.is_empty());
    assert!(antarctica.flags.alt.is_none());
    assert!(!antarctica.has_distinct_official_name());
    assert_eq!(antarctica.timezone_summary(), "UTC-03:00, UTC+03:00, UTC+05:00...");
}

#[test]
fn unknown_keys_are_ignored() {
    let countries = decode(r#"[{ "name": { "common": "Testland" }, "futureField": 42 }]"#);
    assert_eq!(countries[0].name.common, "Testland");
}

use atlas_domain::catalog::{Continent, ContinentQuery, MapStyle, Region, WORLD_REGIONS};

#[test]
fn americas_use_subregion_endpoint() {
    let north = Continent::from_slug("north-america").expect("north america is listed");
    let south = Continent::from_slug("south-america").expect("south america is listed");

    assert_eq!(north.query, ContinentQuery::Subregion("North America"));
    assert_eq!(south.query, ContinentQuery::Subregion("South America"));
}

#[test]
fn australia_queries_oceania() {
    let australia = Continent::from_slug("australia").expect("australia is listed");
    assert_eq!(australia.query, ContinentQuery::Region("Oceania"));
    assert_eq!(australia.name, "Australia");
    assert_eq!(australia.menu_name, "Australia & Oceania");
}

#[test]
fn unknown_slugs_are_rejected() {
    assert!(Continent::from_slug("atlantis").is_none());
    assert!(Continent::from_slug("Europe").is_none(), "slugs are case-sensitive");
    assert!(Region::from_slug("middle-earth").is_none());
}

#[test]
fn region_query_is_its_display_name() {
    let region = Region::from_slug("south-eastern-asia").expect("region is listed");
    assert_eq!(region.name, "South-Eastern Asia");
    assert_eq!(Region::ALL.len(), 22);
}

#[test]
fn map_style_resolution_falls_back_to_classic() {
    let detailed = MapStyle::resolve("/images/world-map-countries.jpg");
    assert_eq!(detailed.id, "world-map-countries");

    assert_eq!(MapStyle::resolve("/images/unknown.png").id, "world-map");
    assert_eq!(MapStyle::resolve("").id, "world-map");
}

#[test]
fn world_regions_cover_every_inhabited_region() {
    assert_eq!(WORLD_REGIONS, ["Africa", "Americas", "Asia", "Europe", "Oceania"]);
}

#[test]
fn hotspot_css_uses_percentages() {
    let europe = Continent::from_slug("europe").expect("europe is listed");
    assert_eq!(europe.hotspot.css(), "left: 45%; top: 2%; width: 22%; height: 40%;");
}

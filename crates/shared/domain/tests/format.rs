use atlas_domain::country::Country;
use atlas_domain::format::{abbreviate, describe_population, format_area, total_population};

#[test]
fn abbreviate_picks_the_largest_unit() {
    assert_eq!(abbreviate(4_641_000_000), "4.6B");
    assert_eq!(abbreviate(746_400_000), "746M");
    assert_eq!(abbreviate(12_400), "12K");
    assert_eq!(abbreviate(950), "950");
    assert_eq!(abbreviate(0), "0");
}

#[test]
fn describe_population_spells_out_units() {
    assert_eq!(describe_population(1_402_112_000), "1.4 billion");
    assert_eq!(describe_population(83_240_525), "83.2 million");
    assert_eq!(describe_population(33_938), "34 thousand");
    assert_eq!(describe_population(56), "56");
}

#[test]
fn area_is_grouped() {
    assert_eq!(format_area(9_706_961.0), "9,706,961 km²");
    assert_eq!(format_area(61.0), "61 km²");
}

#[test]
fn totals_sum_every_country() {
    let countries: Vec<Country> = [10_u64, 20, 30]
        .into_iter()
        .map(|population| Country { population, ..Country::default() })
        .collect();

    assert_eq!(total_population(&countries), 60);
    assert_eq!(total_population(&[]), 0);
}

use atlas_domain::catalog::Region;
use atlas_domain::search::{filter_by, matches, paginate};

#[test]
fn matching_ignores_case_and_blank_terms() {
    assert!(matches("Eastern Africa", "AFRICA"));
    assert!(matches("Eastern Africa", "   "));
    assert!(matches("Eastern Africa", ""));
    assert!(!matches("Eastern Africa", "asia"));
}

#[test]
fn region_filter_finds_every_african_subregion() {
    let found = filter_by(&Region::ALL, "africa", |r| r.name);
    assert_eq!(found.len(), 5);
    assert!(found.iter().all(|r| r.name.ends_with("Africa")));

    assert!(filter_by(&Region::ALL, "narnia", |r| r.name).is_empty());
}

#[test]
fn pagination_remembers_the_total() {
    let page = paginate((0..120).collect::<Vec<_>>(), 50);
    assert_eq!(page.items.len(), 50);
    assert_eq!(page.total, 120);
    assert_eq!(page.summary().as_deref(), Some("Showing first 50 of 120 results"));

    let short = paginate(vec!["a", "b"], 50);
    assert!(!short.is_truncated());
    assert!(short.summary().is_none());
}

#[test]
fn zero_limit_shows_every_result() {
    let page = paginate((0..120).collect::<Vec<_>>(), 0);
    assert_eq!(page.items.len(), 120);
    assert!(!page.is_truncated());
    assert!(page.summary().is_none());
}

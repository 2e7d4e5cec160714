use super::*;

const CARDS: [Option<&str>; 5] = [Some("temples"), Some("food"), Some("nature"), None, Some("food")];

#[test]
fn default_filter_shows_everything() {
    let filter = CardFilter::default();
    assert_eq!(filter.active(), ALL);
    let outcome = filter.outcome(CARDS);
    assert_eq!(outcome.visible_count, CARDS.len());
    assert!(!outcome.no_results());
}

#[test]
fn category_matches_exactly() {
    let mut filter = CardFilter::default();
    let outcome = filter.select("food", CARDS);
    assert_eq!(outcome.visible, vec![false, true, false, false, true]);
    assert_eq!(outcome.visible_count, 2);
    assert_eq!(filter.active(), "food");
}

#[test]
fn unknown_category_reports_no_results() {
    let mut filter = CardFilter::default();
    let outcome = filter.select("museums", CARDS);
    assert!(outcome.no_results());
    assert!(outcome.visible.iter().all(|shown| !shown));
}

#[test]
fn selecting_all_again_restores_every_card() {
    let mut filter = CardFilter::default();
    filter.select("nature", CARDS);
    let outcome = filter.select(ALL, CARDS);
    assert_eq!(outcome.visible_count, CARDS.len());
}

#[test]
fn uncategorized_cards_only_show_under_all() {
    assert!(matches(ALL, None));
    assert!(!matches("food", None));
    assert!(!matches("Food", Some("food")));
}

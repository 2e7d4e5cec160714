#![allow(clippy::float_cmp)]

use super::*;

const THRESHOLDS: ScrollThresholds = ScrollThresholds { header_offset: 50.0, scroll_top_offset: 500.0 };

#[test]
fn top_of_page_shows_nothing() {
    let view = scroll_view(0.0, 3000.0, 800.0, THRESHOLDS);
    assert!(!view.header_scrolled);
    assert!(!view.show_scroll_top);
    assert_eq!(view.progress_percent, 0.0);
}

#[test]
fn thresholds_are_strictly_greater_than() {
    let at_header = scroll_view(50.0, 3000.0, 800.0, THRESHOLDS);
    assert!(!at_header.header_scrolled);
    let past_header = scroll_view(51.0, 3000.0, 800.0, THRESHOLDS);
    assert!(past_header.header_scrolled);
    assert!(!past_header.show_scroll_top);
    assert!(scroll_view(501.0, 3000.0, 800.0, THRESHOLDS).show_scroll_top);
}

#[test]
fn progress_tracks_scrollable_fraction() {
    let view = scroll_view(1100.0, 3000.0, 800.0, THRESHOLDS);
    assert_eq!(view.progress_percent, 50.0);
    assert_eq!(scroll_view(2200.0, 3000.0, 800.0, THRESHOLDS).progress_percent, 100.0);
}

#[test]
fn progress_is_clamped_and_safe_on_short_pages() {
    assert_eq!(scroll_view(5000.0, 3000.0, 800.0, THRESHOLDS).progress_percent, 100.0);
    assert_eq!(scroll_view(-20.0, 3000.0, 800.0, THRESHOLDS).progress_percent, 0.0);
    assert_eq!(scroll_view(10.0, 600.0, 800.0, THRESHOLDS).progress_percent, 0.0);
}

//! Scroll-driven header, scroll-to-top, and progress bar state.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Offsets (in CSS pixels) past which the scroll effects switch on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    pub header_offset: f64,
    pub scroll_top_offset: f64,
}

/// Everything the scroll listener writes to the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollView {
    pub header_scrolled: bool,
    pub show_scroll_top: bool,
    pub progress_percent: f64,
}

/// Derive the scroll effects from the current offset and page geometry.
pub fn scroll_view(offset: f64, document_height: f64, viewport_height: f64, thresholds: ScrollThresholds) -> ScrollView {
    let scrollable = document_height - viewport_height;
    let progress_percent = if scrollable > 0.0 {
        (offset / scrollable * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    ScrollView {
        header_scrolled: offset > thresholds.header_offset,
        show_scroll_top: offset > thresholds.scroll_top_offset,
        progress_percent,
    }
}

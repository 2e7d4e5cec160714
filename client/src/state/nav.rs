//! Active-page detection and mobile menu state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Current page identifier: the final path segment, or `default_page` when
/// the path ends in `/` or is empty.
pub fn current_page<'a>(pathname: &'a str, default_page: &'a str) -> &'a str {
    pathname
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(default_page)
}

/// For each link target, whether it is the active entry. Exact string match only.
pub fn active_links<'a>(hrefs: impl IntoIterator<Item = Option<&'a str>>, page: &str) -> Vec<bool> {
    hrefs.into_iter().map(|href| href == Some(page)).collect()
}

/// Open/closed state of the collapsible navigation menu.
///
/// The toggle control flips it; link clicks, outside clicks and Escape all
/// funnel into [`MenuState::close`], so every closing path ends in the same
/// representation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A click landed somewhere in the document. Clicks inside the navigation
    /// (menu or toggle) are left to their own handlers; anything else closes.
    /// Returns `true` if the menu was closed by this click.
    pub fn on_document_click(&mut self, inside_nav: bool) -> bool {
        !inside_nav && self.close()
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

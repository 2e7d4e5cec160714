//! Category filtering for the explore cards.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Filter value that matches every card.
pub const ALL: &str = "all";

/// Whether a card with `category` is shown under `filter`.
pub fn matches(filter: &str, category: Option<&str>) -> bool {
    filter == ALL || category == Some(filter)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Per card, in document order.
    pub visible: Vec<bool>,
    pub visible_count: usize,
}

impl FilterOutcome {
    pub fn no_results(&self) -> bool {
        self.visible_count == 0
    }
}

/// Currently selected category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFilter {
    active: String,
}

impl Default for CardFilter {
    fn default() -> Self {
        Self { active: ALL.to_owned() }
    }
}

impl CardFilter {
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Select `category` and compute visibility for `categories` (one per card).
    pub fn select<'a>(&mut self, category: &str, categories: impl IntoIterator<Item = Option<&'a str>>) -> FilterOutcome {
        category.clone_into(&mut self.active);
        self.outcome(categories)
    }

    /// Visibility for `categories` under the active filter.
    pub fn outcome<'a>(&self, categories: impl IntoIterator<Item = Option<&'a str>>) -> FilterOutcome {
        let visible: Vec<bool> = categories
            .into_iter()
            .map(|category| matches(&self.active, category))
            .collect();
        let visible_count = visible.iter().filter(|shown| **shown).count();
        FilterOutcome { visible, visible_count }
    }
}

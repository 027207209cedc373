//! Fuzzy text search over car names.
//!
//! The query is split on whitespace and lowercased; a car matches when every
//! token fuzzy-matches its lowercased `"make model"` name. Highlight ranges are
//! computed against the original name for the renderer.

use crate::domain::CarWithListings;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A compiled search query.
///
/// Holding the matcher avoids rebuilding it for each car in a list.
pub struct CarSearch {
    query: String,
    tokens: Vec<String>,
    matcher: SkimMatcherV2,
}

impl CarSearch {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            tokens: query.split_whitespace().map(str::to_lowercase).collect(),
            matcher: SkimMatcherV2::default(),
        }
    }

    /// `true` when the query has no tokens and therefore matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn matches(&self, car: &CarWithListings) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        let name = car.car.display_name().to_lowercase();
        self.tokens
            .iter()
            .all(|token| self.matcher.fuzzy_match(&name, token).is_some())
    }

    /// Keeps matching cars, preserving input order.
    #[must_use]
    pub fn filter(&self, cars: &[CarWithListings]) -> Vec<CarWithListings> {
        let _span = tracing::debug_span!("search_filter", total = cars.len(), query_len = self.query.len()).entered();
        let kept: Vec<_> = cars.iter().filter(|c| self.matches(c)).cloned().collect();
        tracing::debug!(kept = kept.len(), "search filter applied");
        kept
    }

    /// Character ranges of `text` matched by the query, as `(start, end)` with exclusive end.
    ///
    /// Consecutive matched indices are coalesced into a single range.
    #[must_use]
    pub fn highlight_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        if self.tokens.is_empty() {
            return vec![];
        }

        let mut indices: Vec<usize> = self
            .tokens
            .iter()
            .filter_map(|token| self.matcher.fuzzy_indices(text, token))
            .flat_map(|(_score, idx)| idx)
            .collect();
        indices.sort_unstable();
        indices.dedup();

        coalesce(&indices)
    }
}

fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
